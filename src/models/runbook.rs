use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_runbook")]
pub enum TipoRunbook {
    #[sqlx(rename = "Procedimento de Rotina")]
    #[serde(rename = "Procedimento de Rotina")]
    ProcedimentoDeRotina,
    #[sqlx(rename = "Contingência")]
    #[serde(rename = "Contingência")]
    Contingencia,
    #[sqlx(rename = "Tratamento de Incidente")]
    #[serde(rename = "Tratamento de Incidente")]
    TratamentoDeIncidente,
    #[sqlx(rename = "Startup / Shutdown")]
    #[serde(rename = "Startup / Shutdown")]
    StartupShutdown,
    Deploy,
    Backup,
    Restore,
    #[sqlx(rename = "Operação Programada")]
    #[serde(rename = "Operação Programada")]
    OperacaoProgramada,
}

// Blocos estruturados de texto do runbook; cada um vive como JSONB próprio.

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreRequisitosRunbook {
    pub acessos_necessarios: String,
    pub validacoes_antes_iniciar: String,
    pub ferramentas_necessarias: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcedimentoOperacional {
    pub comandos: String,
    pub pontos_atencao: String,
    pub checks_intermediarios: String,
    pub criterios_sucesso: String,
    pub criterios_falha: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PosExecucao {
    pub validacoes_obrigatorias: String,
    pub verificacao_logs: String,
    pub status_esperado_aplicacao: String,
    pub notificacoes_necessarias: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExecucaoAutomatizada {
    pub scripts_relacionados: String,
    pub jobs_associados: String,
    pub url_localizacao_scripts: String,
    pub condicoes_automacao: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Evidencias {
    pub prints_logs_necessarios: String,
    pub arquivos_gerados: String,
    pub tempo_medio_execucao: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiscosMitigacoes {
    pub principais_riscos: String,
    pub acoes_preventivas: String,
    pub acoes_corretivas_rapidas: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Runbook {
    pub id: Uuid,
    #[schema(example = "RB-DEPLOY-CRM")]
    pub sigla: String,
    pub descricao_resumida: String,
    pub finalidade: String,
    pub tipo_runbook: TipoRunbook,
    #[schema(value_type = PreRequisitosRunbook)]
    pub pre_requisitos: Json<PreRequisitosRunbook>,
    #[schema(value_type = ProcedimentoOperacional)]
    pub procedimento_operacional: Json<ProcedimentoOperacional>,
    #[schema(value_type = PosExecucao)]
    pub pos_execucao: Json<PosExecucao>,
    #[schema(value_type = ExecucaoAutomatizada)]
    pub execucao_automatizada: Json<ExecucaoAutomatizada>,
    #[schema(value_type = Evidencias)]
    pub evidencias: Json<Evidencias>,
    #[schema(value_type = RiscosMitigacoes)]
    pub riscos_mitigacoes: Json<RiscosMitigacoes>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosRunbook {
    #[validate(length(min = 1, message = "A sigla é obrigatória"))]
    pub sigla: String,
    #[validate(length(min = 1, message = "A descrição resumida é obrigatória"))]
    pub descricao_resumida: String,
    #[validate(length(min = 1, message = "A finalidade é obrigatória"))]
    pub finalidade: String,
    pub tipo_runbook: TipoRunbook,
    #[serde(default)]
    pub pre_requisitos: PreRequisitosRunbook,
    #[serde(default)]
    pub procedimento_operacional: ProcedimentoOperacional,
    #[serde(default)]
    pub pos_execucao: PosExecucao,
    #[serde(default)]
    pub execucao_automatizada: ExecucaoAutomatizada,
    #[serde(default)]
    pub evidencias: Evidencias,
    #[serde(default)]
    pub riscos_mitigacoes: RiscosMitigacoes,
}
