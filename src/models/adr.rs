use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_adr")]
pub enum StatusAdr {
    Proposto,
    Aceito,
    Rejeitado,
    #[sqlx(rename = "Substituído")]
    #[serde(rename = "Substituído")]
    Substituido,
    Obsoleto,
    #[sqlx(rename = "Adiado/Retirado")]
    #[serde(rename = "Adiado/Retirado")]
    AdiadoRetirado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StatusAplicacaoAdr {
    Ativo,
    Inativo,
    Planejado,
    Descontinuado,
}

/// Vínculo da decisão com uma aplicação do catálogo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdrAplicacao {
    pub id: Uuid,
    pub aplicacao_id: Uuid,
    #[serde(alias = "data_inicio", default)]
    pub data_inicio: Option<NaiveDate>,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub status: StatusAplicacaoAdr,
    #[serde(default)]
    pub observacoes: Option<String>,
}

/// Registro de decisão arquitetural. A sequência é única e crescente; uma
/// decisão substituída aponta para a substituta.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Adr {
    pub id: Uuid,
    #[schema(example = 42)]
    pub sequencia: i32,
    pub descricao: String,
    pub data_criacao: NaiveDate,
    pub data_atualizacao: Option<NaiveDate>,
    pub status: StatusAdr,
    pub contexto: Option<String>,
    pub decisao: Option<String>,
    pub justificativa: Option<String>,
    pub consequencias_positivas: Option<String>,
    pub consequencias_negativas: Option<String>,
    pub riscos: Option<String>,
    pub alternativas_consideradas: Option<String>,
    pub adr_substituta_id: Option<Uuid>,
    pub referencias: Option<String>,
    #[schema(value_type = Vec<AdrAplicacao>)]
    pub aplicacoes: Json<Vec<AdrAplicacao>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosAdr {
    #[validate(range(min = 1, message = "A sequência começa em 1"))]
    pub sequencia: i32,
    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    pub descricao: String,
    pub data_criacao: NaiveDate,
    pub data_atualizacao: Option<NaiveDate>,
    pub status: StatusAdr,
    pub contexto: Option<String>,
    pub decisao: Option<String>,
    pub justificativa: Option<String>,
    pub consequencias_positivas: Option<String>,
    pub consequencias_negativas: Option<String>,
    pub riscos: Option<String>,
    pub alternativas_consideradas: Option<String>,
    pub adr_substituta_id: Option<Uuid>,
    pub referencias: Option<String>,
    #[serde(default)]
    pub aplicacoes: Vec<AdrAplicacao>,
}
