pub mod adr_repo;
pub mod aplicacao_repo;
pub mod catalogo_repo;
pub mod colaborador_repo;
pub mod contrato_repo;
pub mod payload_repo;
pub mod projeto_repo;
pub mod servidor_repo;
pub mod sla_repo;

pub use adr_repo::AdrRepository;
pub use aplicacao_repo::AplicacaoRepository;
pub use catalogo_repo::CatalogoRepository;
pub use colaborador_repo::ColaboradorRepository;
pub use contrato_repo::ContratoRepository;
pub use payload_repo::PayloadRepository;
pub use projeto_repo::{CheckpointRepository, ProjetoRepository};
pub use servidor_repo::ServidorRepository;
pub use sla_repo::SlaRepository;
