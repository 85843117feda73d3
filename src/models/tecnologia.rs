use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

use super::StatusRegistro;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "categoria_tecnologia")]
pub enum CategoriaTecnologia {
    #[sqlx(rename = "Aplicação Terceira")]
    #[serde(rename = "Aplicação Terceira")]
    AplicacaoTerceira,
    #[sqlx(rename = "Banco de Dados")]
    #[serde(rename = "Banco de Dados")]
    BancoDeDados,
    Biblioteca,
    Frontend,
    Backend,
    Infraestrutura,
    Devops,
    #[sqlx(rename = "Segurança")]
    #[serde(rename = "Segurança")]
    Seguranca,
    Analytics,
    #[sqlx(rename = "Integração")]
    #[serde(rename = "Integração")]
    Integracao,
    #[sqlx(rename = "Inteligencia Artificial")]
    #[serde(rename = "Inteligencia Artificial")]
    InteligenciaArtificial,
    Outras,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "status_tecnologia")]
pub enum StatusTecnologia {
    Ativa,
    #[sqlx(rename = "Em avaliação")]
    #[serde(rename = "Em avaliação")]
    EmAvaliacao,
    Obsoleta,
    Descontinuada,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_licenciamento")]
pub enum TipoLicenciamento {
    #[sqlx(rename = "Open Source")]
    #[serde(rename = "Open Source")]
    OpenSource,
    #[sqlx(rename = "Proprietária")]
    #[serde(rename = "Proprietária")]
    Proprietaria,
    SaaS,
    Subscription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "maturidade_interna")]
pub enum MaturidadeInterna {
    Experimental,
    Adotada,
    Padronizada,
    Restrita,
}

/// Em quais ambientes a tecnologia está homologada.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmbientesTecnologia {
    pub dev: bool,
    pub qa: bool,
    pub prod: bool,
    pub cloud: bool,
    pub on_premise: bool,
}

// --- SUB-COLEÇÕES (JSONB) ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContratoTecnologia {
    pub id: Uuid,
    pub numero_contrato: String,
    pub vigencia_inicial: NaiveDate,
    pub vigencia_termino: NaiveDate,
    #[schema(value_type = f64)]
    pub valor_contrato: Decimal,
    pub status: StatusRegistro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContratoAms {
    pub id: Uuid,
    pub contrato: String,
    pub cnpj_contratado: String,
    #[schema(value_type = f64)]
    pub custo_anual: Decimal,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino")]
    pub data_termino: NaiveDate,
    pub status: StatusRegistro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponsavelTecnologia {
    pub id: Uuid,
    pub matricula_funcionario: String,
    pub nome_funcionario: String,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub perfil: String,
    pub status: StatusRegistro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustoSaas {
    pub id: Uuid,
    #[schema(value_type = f64)]
    pub custo_total_saas: Decimal,
    #[schema(value_type = f64)]
    pub custo_por_licenca: Decimal,
    pub numero_licencas_contratadas: i32,
    pub licencas_utilizadas: i32,
    pub crescimento_custo_mensal_mom: f64,
    pub sla_cumprido: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManutencaoSaas {
    pub id: Uuid,
    pub data_hora_inicio: DateTime<Utc>,
    pub data_hora_termino: DateTime<Utc>,
    pub tempo_indisponibilidade_horas: f64,
}

// --- RAIZ ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tecnologia {
    pub id: Uuid,
    #[schema(example = "PGSQL")]
    pub sigla: String,
    pub nome: String,
    pub versao_release: String,
    pub categoria: CategoriaTecnologia,
    pub status: StatusTecnologia,
    pub fornecedor_fabricante: String,
    pub tipo_licenciamento: TipoLicenciamento,
    #[schema(value_type = AmbientesTecnologia)]
    pub ambientes: Json<AmbientesTecnologia>,
    pub data_fim_suporte_eos: Option<NaiveDate>,
    pub maturidade_interna: MaturidadeInterna,
    pub nivel_suporte_interno: String,
    pub documentacao_oficial: Option<String>,
    pub repositorio_interno: Option<String>,

    #[schema(value_type = Vec<ContratoTecnologia>)]
    pub contratos: Json<Vec<ContratoTecnologia>>,
    #[schema(value_type = Vec<ContratoAms>)]
    pub contratos_ams: Json<Vec<ContratoAms>>,
    #[schema(value_type = Vec<ResponsavelTecnologia>)]
    pub responsaveis: Json<Vec<ResponsavelTecnologia>>,
    #[schema(value_type = Vec<CustoSaas>)]
    pub custos_saas: Json<Vec<CustoSaas>>,
    #[schema(value_type = Vec<ManutencaoSaas>)]
    pub manutencoes_saas: Json<Vec<ManutencaoSaas>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosTecnologia {
    #[validate(length(min = 1, max = 20, message = "A sigla é obrigatória"))]
    pub sigla: String,

    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub nome: String,

    #[serde(default)]
    pub versao_release: String,
    pub categoria: CategoriaTecnologia,
    pub status: StatusTecnologia,
    #[serde(default)]
    pub fornecedor_fabricante: String,
    pub tipo_licenciamento: TipoLicenciamento,
    #[serde(default)]
    pub ambientes: AmbientesTecnologia,
    pub data_fim_suporte_eos: Option<NaiveDate>,
    pub maturidade_interna: MaturidadeInterna,
    #[validate(length(min = 1, message = "O nível de suporte interno é obrigatório"))]
    pub nivel_suporte_interno: String,
    pub documentacao_oficial: Option<String>,
    pub repositorio_interno: Option<String>,

    #[serde(default)]
    pub contratos: Vec<ContratoTecnologia>,
    #[serde(default)]
    pub contratos_ams: Vec<ContratoAms>,
    #[serde(default)]
    pub responsaveis: Vec<ResponsavelTecnologia>,
    #[serde(default)]
    pub custos_saas: Vec<CustoSaas>,
    #[serde(default)]
    pub manutencoes_saas: Vec<ManutencaoSaas>,
}
