use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_servidor")]
pub enum TipoServidor {
    #[sqlx(rename = "Físico")]
    #[serde(rename = "Físico")]
    Fisico,
    Virtual,
    Cloud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "ambiente_servidor")]
pub enum AmbienteServidor {
    #[sqlx(rename = "Produção")]
    #[serde(rename = "Produção")]
    Producao,
    #[sqlx(rename = "Pré-Produção")]
    #[serde(rename = "Pré-Produção")]
    PreProducao,
    #[sqlx(rename = "Homologação")]
    #[serde(rename = "Homologação")]
    Homologacao,
    Teste,
    Desenvolvimento,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "finalidade_servidor")]
pub enum FinalidadeServidor {
    #[sqlx(rename = "Aplicação")]
    #[serde(rename = "Aplicação")]
    Aplicacao,
    #[sqlx(rename = "Banco de Dados")]
    #[serde(rename = "Banco de Dados")]
    BancoDeDados,
    #[sqlx(rename = "Integração")]
    #[serde(rename = "Integração")]
    Integracao,
    Batch,
    Monitoramento,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_servidor")]
pub enum StatusServidor {
    Ativo,
    Inativo,
    #[sqlx(rename = "Em manutenção")]
    #[serde(rename = "Em manutenção")]
    EmManutencao,
    Obsoleto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StatusAplicacaoServidor {
    Planejado,
    #[serde(rename = "Produção")]
    Producao,
    Aposentado,
}

/// Vínculo servidor ↔ aplicação hospedada.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AplicacaoServidor {
    pub id: Uuid,
    pub aplicacao_id: Uuid,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub status: StatusAplicacaoServidor,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Servidor {
    pub id: Uuid,
    #[schema(example = "SRV-APP-01")]
    pub sigla: String,
    pub hostname: String,
    pub tipo: TipoServidor,
    pub ambiente: AmbienteServidor,
    pub finalidade: FinalidadeServidor,
    pub status: StatusServidor,
    pub provedor: String,
    pub datacenter_regiao: Option<String>,
    pub zona_availability: Option<String>,
    pub cluster_host: Option<String>,
    pub virtualizador: Option<String>,
    pub sistema_operacional: String,
    pub distribuicao_versao: Option<String>,
    pub arquitetura: Option<String>,
    pub ferramenta_monitoramento: Option<String>,
    pub backup_diario: bool,
    pub backup_semanal: bool,
    pub backup_mensal: bool,
    #[schema(value_type = Vec<AplicacaoServidor>)]
    pub aplicacoes: Json<Vec<AplicacaoServidor>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosServidor {
    #[validate(length(min = 1, message = "A sigla é obrigatória"))]
    pub sigla: String,
    #[validate(length(min = 1, message = "O hostname é obrigatório"))]
    pub hostname: String,
    pub tipo: TipoServidor,
    pub ambiente: AmbienteServidor,
    pub finalidade: FinalidadeServidor,
    pub status: StatusServidor,
    #[validate(length(min = 1, message = "O provedor é obrigatório"))]
    pub provedor: String,
    pub datacenter_regiao: Option<String>,
    pub zona_availability: Option<String>,
    pub cluster_host: Option<String>,
    pub virtualizador: Option<String>,
    #[validate(length(min = 1, message = "O sistema operacional é obrigatório"))]
    pub sistema_operacional: String,
    pub distribuicao_versao: Option<String>,
    pub arquitetura: Option<String>,
    pub ferramenta_monitoramento: Option<String>,
    #[serde(default)]
    pub backup_diario: bool,
    #[serde(default)]
    pub backup_semanal: bool,
    #[serde(default)]
    pub backup_mensal: bool,
    #[serde(default)]
    pub aplicacoes: Vec<AplicacaoServidor>,
}
