use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "nivel_capacidade")]
pub enum NivelCapacidade {
    #[sqlx(rename = "Nível 1")]
    #[serde(rename = "Nível 1")]
    Nivel1,
    #[sqlx(rename = "Nível 2")]
    #[serde(rename = "Nível 2")]
    Nivel2,
    #[sqlx(rename = "Nível 3")]
    #[serde(rename = "Nível 3")]
    Nivel3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "categoria_capacidade")]
pub enum CategoriaCapacidade {
    Financeiro,
    RH,
    #[sqlx(rename = "Logística")]
    #[serde(rename = "Logística")]
    Logistica,
    Atendimento,
    #[sqlx(rename = "Produção")]
    #[serde(rename = "Produção")]
    Producao,
    Comercial,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoberturaEstrategica {
    pub alinhamento_objetivos: String,
    pub beneficios_esperados: String,
    pub estado_futuro_desejado: String,
    pub gap_estado_atual_futuro: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapacidadeNegocio {
    pub id: Uuid,
    #[schema(example = "CAP-FIN")]
    pub sigla: String,
    pub nome: String,
    pub descricao: String,
    pub nivel: NivelCapacidade,
    pub categoria: CategoriaCapacidade,
    #[schema(value_type = CoberturaEstrategica)]
    pub cobertura_estrategica: Json<CoberturaEstrategica>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosCapacidade {
    #[validate(length(min = 1, message = "A sigla é obrigatória"))]
    pub sigla: String,
    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub nome: String,
    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    pub descricao: String,
    pub nivel: NivelCapacidade,
    pub categoria: CategoriaCapacidade,
    #[serde(default)]
    pub cobertura_estrategica: CoberturaEstrategica,
}
