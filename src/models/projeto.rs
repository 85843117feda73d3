use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_projeto")]
pub enum StatusProjeto {
    Pendente,
    Processado,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RepositorioProjeto {
    pub id: Uuid,
    pub produto: String,
    pub categoria: String,
    pub tecnologia: String,
    #[serde(default)]
    pub url_projeto: Option<String>,
}

/// Registro de projeto gerado para uma aplicação base, com a lista de
/// repositórios pedidos.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Projeto {
    pub id: Uuid,
    pub produto: String,
    pub projeto: String,
    pub nome_time: String,
    pub data_inicial: NaiveDate,
    pub numero_semanas: i32,
    pub iteracao: i32,
    pub aplicacao_base_id: Option<Uuid>,
    #[schema(value_type = Vec<RepositorioProjeto>)]
    pub repositorios: Json<Vec<RepositorioProjeto>>,
    pub status: StatusProjeto,
    pub data_criacao: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosProjeto {
    #[validate(length(min = 1, message = "O produto é obrigatório"))]
    pub produto: String,
    #[validate(length(min = 1, message = "O nome do projeto é obrigatório"))]
    pub projeto: String,
    #[validate(length(min = 1, message = "O nome do time é obrigatório"))]
    pub nome_time: String,
    pub data_inicial: NaiveDate,
    #[serde(default)]
    pub numero_semanas: i32,
    #[serde(default)]
    pub iteracao: i32,
    pub aplicacao_base_id: Option<Uuid>,
    #[serde(default)]
    pub repositorios: Vec<RepositorioProjeto>,
    #[serde(default = "projeto_pendente")]
    pub status: StatusProjeto,
}

fn projeto_pendente() -> StatusProjeto {
    StatusProjeto::Pendente
}
