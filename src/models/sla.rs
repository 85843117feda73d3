use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

use super::StatusRegistro;

// O tipo do SLA seleciona exatamente um dos onze payloads de detalhe.
// `DetalheSla` é um enum com tag externa: por construção só existe um
// payload, e o serviço confere se a variante bate com `tipo_sla`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_sla")]
pub enum TipoSla {
    #[sqlx(rename = "SLA por Serviço")]
    #[serde(rename = "SLA por Serviço")]
    PorServico,
    #[sqlx(rename = "SLA por Usuário")]
    #[serde(rename = "SLA por Usuário")]
    PorUsuario,
    #[sqlx(rename = "SLA Baseado em Componentes")]
    #[serde(rename = "SLA Baseado em Componentes")]
    BaseadoEmComponentes,
    #[sqlx(rename = "SLA Operacional")]
    #[serde(rename = "SLA Operacional")]
    Operacional,
    #[sqlx(rename = "SLA de Apoio")]
    #[serde(rename = "SLA de Apoio")]
    DeApoio,
    #[sqlx(rename = "SLA por Nível de Prioridade / Severidade")]
    #[serde(rename = "SLA por Nível de Prioridade / Severidade")]
    PorPrioridade,
    #[sqlx(rename = "SLA de Performance")]
    #[serde(rename = "SLA de Performance")]
    DePerformance,
    #[sqlx(rename = "SLA de Disponibilidade")]
    #[serde(rename = "SLA de Disponibilidade")]
    DeDisponibilidade,
    #[sqlx(rename = "SLA de Capacidade")]
    #[serde(rename = "SLA de Capacidade")]
    DeCapacidade,
    #[sqlx(rename = "SLA de Segurança")]
    #[serde(rename = "SLA de Segurança")]
    DeSeguranca,
    #[sqlx(rename = "SLA de Suporte / Atendimento")]
    #[serde(rename = "SLA de Suporte / Atendimento")]
    DeSuporte,
}

// --- PAYLOADS DE DETALHE ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaServico {
    pub disponibilidade_sistema: String,
    pub backup_diario: String,
    pub tempo_resposta_apis: String,
    pub rpo_rto_dr: String,
    pub clonagem: String,
    pub data_alvo_clonagem: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaUsuario {
    pub suporte_prioritario_area_critica: String,
    pub atendimento_especial_usuarios_chave: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaComponentes {
    pub sla_banco_dados: String,
    pub sla_rede: String,
    pub sla_storage: String,
    pub sla_microservico: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaOperacional {
    pub infraestrutura: String,
    pub servico: String,
    pub rede: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaApoio {
    pub sla_empresa: String,
    pub sla_fornecedores: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlaPrioridade {
    pub p1: String,
    pub p2: String,
    pub p3: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaPerformance {
    pub latencia_maxima: f64,
    pub throughput: f64,
    pub iops_storage: f64,
    pub erros_por_minuto: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaDisponibilidade {
    pub percentual_uptime: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaCapacidade {
    pub percentual_cpu_maxima: f64,
    pub capacidade_storage_livre: f64,
    pub escalabilidade_automatica: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaSeguranca {
    pub patching_mensal_obrigatorio: bool,
    pub mfa_para_todos_acessos: bool,
    pub tempo_correcao_vulnerabilidade_critical: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlaSuporteAtendimento {
    pub tempo_resposta: String,
    pub tempo_solucao: String,
    pub hora_inicial_atendimento: String,
    pub hora_termino_atendimento: String,
}

/// Tag externa do serde: no JSON o detalhe aparece como um único campo
/// nomeado (`"seguranca": {...}`), igual ao objeto que o console monta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DetalheSla {
    Servico(SlaServico),
    Usuario(SlaUsuario),
    Componentes(SlaComponentes),
    Operacional(SlaOperacional),
    Apoio(SlaApoio),
    Prioridade(SlaPrioridade),
    Performance(SlaPerformance),
    Disponibilidade(SlaDisponibilidade),
    Capacidade(SlaCapacidade),
    Seguranca(SlaSeguranca),
    SuporteAtendimento(SlaSuporteAtendimento),
}

impl DetalheSla {
    /// O tipo de SLA que esta variante de detalhe representa.
    pub fn tipo(&self) -> TipoSla {
        match self {
            DetalheSla::Servico(_) => TipoSla::PorServico,
            DetalheSla::Usuario(_) => TipoSla::PorUsuario,
            DetalheSla::Componentes(_) => TipoSla::BaseadoEmComponentes,
            DetalheSla::Operacional(_) => TipoSla::Operacional,
            DetalheSla::Apoio(_) => TipoSla::DeApoio,
            DetalheSla::Prioridade(_) => TipoSla::PorPrioridade,
            DetalheSla::Performance(_) => TipoSla::DePerformance,
            DetalheSla::Disponibilidade(_) => TipoSla::DeDisponibilidade,
            DetalheSla::Capacidade(_) => TipoSla::DeCapacidade,
            DetalheSla::Seguranca(_) => TipoSla::DeSeguranca,
            DetalheSla::SuporteAtendimento(_) => TipoSla::DeSuporte,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sla {
    pub id: Uuid,
    #[schema(example = "SLA-PAG")]
    pub sigla: String,
    pub descricao: String,
    #[serde(rename = "tipoSLA", alias = "tipoSla")]
    pub tipo_sla: TipoSla,
    pub data_inicio: NaiveDate,
    pub data_termino: Option<NaiveDate>,
    #[schema(value_type = DetalheSla)]
    pub detalhe: Json<DetalheSla>,
    pub status: StatusRegistro,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosSla {
    #[validate(length(min = 1, max = 20, message = "A sigla é obrigatória e tem no máximo 20 caracteres"))]
    pub sigla: String,

    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    pub descricao: String,

    #[serde(rename = "tipoSLA", alias = "tipoSla")]
    pub tipo_sla: TipoSla,
    pub data_inicio: NaiveDate,
    pub data_termino: Option<NaiveDate>,
    pub detalhe: DetalheSla,
    #[serde(default = "status_ativo")]
    pub status: StatusRegistro,
}

fn status_ativo() -> StatusRegistro {
    StatusRegistro::Ativo
}
