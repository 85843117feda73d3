pub mod adr_service;
pub mod aplicacao_service;
pub mod catalogo_service;
pub mod colaborador_service;
pub mod relatorio_service;
pub mod sla_service;
pub mod vinculos_service;

pub use adr_service::AdrService;
pub use aplicacao_service::AplicacaoService;
pub use catalogo_service::CatalogoService;
pub use colaborador_service::ColaboradorService;
pub use relatorio_service::RelatorioService;
pub use sla_service::SlaService;
pub use vinculos_service::VinculosService;
