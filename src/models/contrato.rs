use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_contrato")]
pub enum StatusContrato {
    Vigente,
    Vencido,
    #[sqlx(rename = "Em Renovação")]
    #[serde(rename = "Em Renovação")]
    EmRenovacao,
    Cancelado,
}

/// Contrato vinculado a uma aplicação. Diferente das coleções embutidas,
/// contratos têm endpoint próprio e persistem na hora, fora do salvamento
/// consolidado do assistente.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contrato {
    pub id: Uuid,
    pub aplicacao_id: Uuid,
    #[schema(example = "CT-2024/0042")]
    pub numero_contrato: String,
    pub data_vigencia_inicial: NaiveDate,
    pub data_vigencia_final: NaiveDate,
    #[schema(value_type = Option<f64>)]
    pub valor_contrato: Option<Decimal>,
    pub status: StatusContrato,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosContrato {
    pub aplicacao_id: Uuid,
    #[validate(length(min = 1, message = "O número do contrato é obrigatório"))]
    pub numero_contrato: String,
    pub data_vigencia_inicial: NaiveDate,
    pub data_vigencia_final: NaiveDate,
    #[schema(value_type = Option<f64>)]
    pub valor_contrato: Option<Decimal>,
    pub status: StatusContrato,
}
