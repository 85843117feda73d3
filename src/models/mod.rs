use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod adr;
pub mod aplicacao;
pub mod capacidade;
pub mod checkpoint;
pub mod colaborador;
pub mod contrato;
pub mod payload;
pub mod processo;
pub mod projeto;
pub mod runbook;
pub mod servidor;
pub mod sla;
pub mod tecnologia;

// Flag de exclusão lógica compartilhada pelos registros de associação:
// apagar vira status 'Inativo', o registro continua na coleção.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_registro")]
pub enum StatusRegistro {
    Ativo,
    Inativo,
}

impl StatusRegistro {
    pub fn ativo(&self) -> bool {
        matches!(self, StatusRegistro::Ativo)
    }
}
