use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "formato_arquivo_payload")]
#[allow(clippy::upper_case_acronyms)]
pub enum FormatoArquivoPayload {
    JSON,
    YAML,
}

/// Especificação OpenAPI publicada por uma aplicação. O conteúdo é validado
/// na gravação e o resultado fica registrado em `arquivo_valido` /
/// `erros_validacao`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub id: Uuid,
    pub aplicacao_id: Uuid,
    #[schema(example = "API-CLIENTES")]
    pub sigla: String,
    pub definicao: String,
    pub descricao: Option<String>,
    pub formato_arquivo: FormatoArquivoPayload,
    pub conteudo_arquivo: String,
    #[schema(example = "3.0.3")]
    pub versao_openapi: String,
    pub arquivo_valido: bool,
    pub ultima_validacao: Option<DateTime<Utc>>,
    pub erros_validacao: Option<String>,
    pub data_inicio: NaiveDate,
    pub data_termino: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosPayload {
    pub aplicacao_id: Uuid,
    #[validate(length(min = 1, message = "A sigla é obrigatória"))]
    pub sigla: String,
    #[validate(length(min = 1, message = "A definição é obrigatória"))]
    pub definicao: String,
    pub descricao: Option<String>,
    pub formato_arquivo: FormatoArquivoPayload,
    #[validate(length(min = 1, message = "O conteúdo do arquivo é obrigatório"))]
    pub conteudo_arquivo: String,
    #[serde(default)]
    pub versao_openapi: String,
    pub data_inicio: NaiveDate,
    pub data_termino: Option<NaiveDate>,
}
