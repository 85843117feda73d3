use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

use super::StatusRegistro;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "nivel_maturidade")]
pub enum NivelMaturidade {
    Inicial,
    #[sqlx(rename = "Repetível")]
    #[serde(rename = "Repetível")]
    Repetivel,
    Definido,
    Gerenciado,
    Otimizado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "frequencia_processo")]
pub enum Frequencia {
    #[sqlx(rename = "Diário")]
    #[serde(rename = "Diário")]
    Diario,
    Semanal,
    Quinzenal,
    Mensal,
    Trimestral,
    #[sqlx(rename = "Ad-Hoc")]
    #[serde(rename = "Ad-Hoc")]
    AdHoc,
    Anual,
    #[sqlx(rename = "Bi-Anual")]
    #[serde(rename = "Bi-Anual")]
    BiAnual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "complexidade")]
pub enum Complexidade {
    #[sqlx(rename = "Muito Baixa")]
    #[serde(rename = "Muito Baixa")]
    MuitoBaixa,
    Baixa,
    #[sqlx(rename = "Média")]
    #[serde(rename = "Média")]
    Media,
    Alta,
    #[sqlx(rename = "Muito Alta")]
    #[serde(rename = "Muito Alta")]
    MuitoAlta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TipoNorma {
    #[serde(rename = "Norma Legal")]
    NormaLegal,
    #[serde(rename = "Norma Técnica")]
    NormaTecnica,
    #[serde(rename = "Norma Reguladora")]
    NormaReguladora,
    #[serde(rename = "Norma Setorial")]
    NormaSetorial,
    #[serde(rename = "Norma Organizacional")]
    NormaOrganizacional,
    #[serde(rename = "Norma Contratual")]
    NormaContratual,
    #[serde(rename = "Regulamentação Internacional")]
    RegulamentacaoInternacional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ObrigatoriedadeNorma {
    #[serde(rename = "Não obrigatório")]
    NaoObrigatorio,
    Recomendado,
    #[serde(rename = "Obrigatório")]
    Obrigatorio,
}

/// Norma aplicável ao processo, com a mesma janela de vigência e exclusão
/// lógica dos demais registros de associação.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormaProcesso {
    pub id: Uuid,
    pub tipo_norma: TipoNorma,
    pub obrigatoriedade: ObrigatoriedadeNorma,
    pub item_norma: String,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub status: StatusRegistro,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessoNegocio {
    pub id: Uuid,
    #[schema(example = "PROC-VENDAS")]
    pub identificacao: String,
    pub descricao: String,
    pub nivel_maturidade: NivelMaturidade,
    pub area_responsavel: String,
    pub frequencia: Frequencia,
    /// Duração média de uma execução, em minutos
    pub duracao_media: i32,
    pub complexidade: Complexidade,
    #[schema(value_type = Vec<NormaProcesso>)]
    pub normas: Json<Vec<NormaProcesso>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosProcesso {
    #[validate(length(min = 1, message = "A identificação é obrigatória"))]
    pub identificacao: String,
    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    pub descricao: String,
    pub nivel_maturidade: NivelMaturidade,
    #[validate(length(min = 1, message = "A área responsável é obrigatória"))]
    pub area_responsavel: String,
    pub frequencia: Frequencia,
    #[serde(default)]
    pub duracao_media: i32,
    pub complexidade: Complexidade,
    #[serde(default)]
    pub normas: Vec<NormaProcesso>,
}
