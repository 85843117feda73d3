use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "categoria_checkpoint")]
pub enum CategoriaCheckpoint {
    Prazo,
    Escopo,
    Qualidade,
    Custo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_checkpoint")]
pub enum StatusCheckpoint {
    #[sqlx(rename = "No Prazo")]
    #[serde(rename = "No Prazo")]
    NoPrazo,
    #[sqlx(rename = "Em Risco")]
    #[serde(rename = "Em Risco")]
    EmRisco,
    Atrasado,
    #[sqlx(rename = "Concluído")]
    #[serde(rename = "Concluído")]
    Concluido,
}

/// Marco de acompanhamento de uma aplicação. Com a data real preenchida o
/// checkpoint está finalizado e não aceita mais edição.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub id: Uuid,
    pub aplicacao_id: Uuid,
    pub descricao: String,
    pub categoria: CategoriaCheckpoint,
    pub status: StatusCheckpoint,
    pub data_prevista: NaiveDate,
    pub data_real: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Checkpoint {
    pub fn finalizado(&self) -> bool {
        self.data_real.is_some()
    }
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosCheckpoint {
    pub aplicacao_id: Uuid,
    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    pub descricao: String,
    pub categoria: CategoriaCheckpoint,
    pub status: StatusCheckpoint,
    pub data_prevista: NaiveDate,
    pub data_real: Option<NaiveDate>,
}
