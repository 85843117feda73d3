use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

use super::StatusRegistro;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "fase_ciclo_vida")]
pub enum FaseCicloVida {
    #[sqlx(rename = "Ideação")]
    #[serde(rename = "Ideação")]
    Ideacao,
    Planejamento,
    Desenvolvimento,
    #[sqlx(rename = "Produção")]
    #[serde(rename = "Produção")]
    Producao,
    Aposentado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "criticidade_negocio")]
pub enum CriticidadeNegocio {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_aplicacao")]
#[allow(clippy::upper_case_acronyms)]
pub enum TipoAplicacao {
    BOT,
    COTS,
    INTERNO,
    MOTS,
    OSS,
    OTS,
    PAAS,
    SAAS,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "cloud_provider")]
pub enum CloudProvider {
    #[sqlx(rename = "AWS")]
    #[serde(rename = "AWS")]
    Aws,
    #[sqlx(rename = "Microsoft Azure")]
    #[serde(rename = "Microsoft Azure")]
    MicrosoftAzure,
    #[sqlx(rename = "Google Cloud")]
    #[serde(rename = "Google Cloud")]
    GoogleCloud,
    #[sqlx(rename = "Alibaba Cloud")]
    #[serde(rename = "Alibaba Cloud")]
    AlibabaCloud,
    Oracle,
    Salesforce,
    #[sqlx(rename = "IBM Cloud")]
    #[serde(rename = "IBM Cloud")]
    IbmCloud,
    #[sqlx(rename = "Tencent Cloud")]
    #[serde(rename = "Tencent Cloud")]
    TencentCloud,
    #[sqlx(rename = "ON-PREMISE")]
    #[serde(rename = "ON-PREMISE")]
    OnPremise,
    Outros,
}

// Enums que só existem dentro das coleções JSONB — serde puro.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TipoAmbiente {
    Dev,
    QA,
    Prod,
    Cloud,
    #[serde(rename = "On-Premise")]
    OnPremise,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PerfilSquad {
    #[serde(rename = "Analista Negocio")]
    AnalistaNegocio,
    #[serde(rename = "Product Owner")]
    ProductOwner,
    #[serde(rename = "Scrum Master")]
    ScrumMaster,
    #[serde(rename = "Desenvolvedor Backend")]
    DesenvolvedorBackend,
    #[serde(rename = "Desenvolvedor Frontend")]
    DesenvolvedorFrontend,
    #[serde(rename = "Desenvolvedor Mobile")]
    DesenvolvedorMobile,
    #[serde(rename = "QA/Test Engineer")]
    QaTestEngineer,
    #[serde(rename = "DevOps / SRE")]
    DevOpsSre,
    #[serde(rename = "UX/UI Designer")]
    UxUiDesigner,
    #[serde(rename = "Data Engineer")]
    DataEngineer,
    Stakeholder,
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "Tech Lead")]
    TechLead,
    #[serde(rename = "Agile Coach")]
    AgileCoach,
    #[serde(rename = "Temporário")]
    Temporario,
    #[serde(rename = "Gerente de Produto")]
    GerenteDeProduto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TipoSquad {
    Produto,
    Plataforma,
    #[serde(rename = "DevOps Enablement / Coaching")]
    DevOpsEnablement,
    #[serde(rename = "Site Reliability Engineering")]
    SiteReliabilityEngineering,
    #[serde(rename = "Segurança")]
    Seguranca,
    #[serde(rename = "Integração / APIs")]
    IntegracaoApis,
    #[serde(rename = "DataOps / MLOps")]
    DataOpsMlOps,
    #[serde(rename = "Modernização")]
    Modernizacao,
}

// --- REGISTROS DE ASSOCIAÇÃO ---
// Cada registro tem id próprio, janela de vigência e a flag de exclusão
// lógica. Os aliases snake_case absorvem a grafia antiga do backend.

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssociacaoTecnologia {
    pub id: Uuid,
    pub tecnologia_id: Uuid,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub status: StatusRegistro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmbienteTecnologico {
    pub id: Uuid,
    pub tipo_ambiente: TipoAmbiente,
    pub url_ambiente: String,
    #[serde(alias = "data_criacao")]
    pub data_criacao: NaiveDate,
    /// Tempo de liberação do ambiente, em horas
    pub tempo_liberacao: i32,
    pub status: StatusRegistro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssociacaoCapacidade {
    pub id: Uuid,
    pub capacidade_id: Uuid,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub status: StatusRegistro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssociacaoProcesso {
    pub id: Uuid,
    pub processo_id: Uuid,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub status: StatusRegistro,
}

/// Integração de saída para outra aplicação do catálogo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntegracaoAplicacao {
    pub id: Uuid,
    pub aplicacao_destino_id: Uuid,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub status: StatusRegistro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssociacaoSla {
    pub id: Uuid,
    pub sla_id: Uuid,
    pub descricao: String,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub status: StatusRegistro,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssociacaoRunbook {
    pub id: Uuid,
    pub runbook_id: Uuid,
    pub descricao: String,
    #[serde(alias = "data_associacao")]
    pub data_associacao: NaiveDate,
    pub status: StatusRegistro,
}

/// Participação de um colaborador numa squad da aplicação. A trinca
/// colaborador/perfil/squad não pode se repetir entre os registros ativos.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssociacaoSquad {
    pub id: Uuid,
    pub colaborador_id: Uuid,
    pub perfil: PerfilSquad,
    pub squad: TipoSquad,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
    pub status: StatusRegistro,
}

// --- RAIZ ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Aplicacao {
    pub id: Uuid,
    #[schema(example = "CRM")]
    pub sigla: String,
    #[schema(example = "Sistema de Gestão de Clientes")]
    pub descricao: String,
    pub url_documentacao: Option<String>,
    pub tipo_aplicacao: Option<TipoAplicacao>,
    pub fase_ciclo_vida: FaseCicloVida,
    pub criticidade_negocio: CriticidadeNegocio,
    pub categoria_sistema: Option<String>,
    pub fornecedor: Option<String>,
    pub tipo_hospedagem: Option<String>,
    pub cloud_provider: Option<CloudProvider>,
    #[schema(value_type = Option<f64>, example = 1500.00)]
    pub custo_mensal: Option<Decimal>,
    pub numero_usuarios: Option<i32>,
    pub data_implantacao: Option<NaiveDate>,
    pub versao_atual: Option<String>,
    pub responsavel_tecnico: Option<String>,
    pub responsavel_negocio: Option<String>,
    pub status_operacional: Option<String>,
    pub observacoes: Option<String>,

    #[schema(value_type = Vec<AssociacaoTecnologia>)]
    pub tecnologias: Json<Vec<AssociacaoTecnologia>>,
    #[schema(value_type = Vec<AmbienteTecnologico>)]
    pub ambientes: Json<Vec<AmbienteTecnologico>>,
    #[schema(value_type = Vec<AssociacaoCapacidade>)]
    pub capacidades: Json<Vec<AssociacaoCapacidade>>,
    #[schema(value_type = Vec<AssociacaoProcesso>)]
    pub processos: Json<Vec<AssociacaoProcesso>>,
    #[schema(value_type = Vec<IntegracaoAplicacao>)]
    pub integracoes: Json<Vec<IntegracaoAplicacao>>,
    #[schema(value_type = Vec<AssociacaoSla>)]
    pub slas: Json<Vec<AssociacaoSla>>,
    #[schema(value_type = Vec<AssociacaoRunbook>)]
    pub runbooks: Json<Vec<AssociacaoRunbook>>,
    #[schema(value_type = Vec<AssociacaoSquad>)]
    pub squads: Json<Vec<AssociacaoSquad>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- PAYLOAD DE GRAVAÇÃO ---
// O assistente de cadastro monta o rascunho inteiro (dados básicos + todas
// as coleções) e envia de uma vez; este é o corpo do POST/PUT consolidado.

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosAplicacao {
    #[validate(length(min = 1, max = 20, message = "A sigla é obrigatória e tem no máximo 20 caracteres"))]
    #[schema(example = "CRM")]
    pub sigla: String,

    #[validate(length(min = 1, message = "A descrição é obrigatória"))]
    pub descricao: String,

    pub url_documentacao: Option<String>,
    pub tipo_aplicacao: Option<TipoAplicacao>,
    pub fase_ciclo_vida: FaseCicloVida,
    pub criticidade_negocio: CriticidadeNegocio,
    pub categoria_sistema: Option<String>,
    pub fornecedor: Option<String>,
    pub tipo_hospedagem: Option<String>,
    pub cloud_provider: Option<CloudProvider>,
    #[schema(value_type = Option<f64>)]
    pub custo_mensal: Option<Decimal>,
    pub numero_usuarios: Option<i32>,
    pub data_implantacao: Option<NaiveDate>,
    pub versao_atual: Option<String>,
    pub responsavel_tecnico: Option<String>,
    pub responsavel_negocio: Option<String>,
    pub status_operacional: Option<String>,
    pub observacoes: Option<String>,

    #[serde(default)]
    pub tecnologias: Vec<AssociacaoTecnologia>,
    #[serde(default)]
    pub ambientes: Vec<AmbienteTecnologico>,
    #[serde(default)]
    pub capacidades: Vec<AssociacaoCapacidade>,
    #[serde(default)]
    pub processos: Vec<AssociacaoProcesso>,
    #[serde(default)]
    pub integracoes: Vec<IntegracaoAplicacao>,
    #[serde(default)]
    pub slas: Vec<AssociacaoSla>,
    #[serde(default)]
    pub runbooks: Vec<AssociacaoRunbook>,
    #[serde(default)]
    pub squads: Vec<AssociacaoSquad>,
}

impl Aplicacao {
    /// Reconstrói o payload de gravação a partir da entidade salva — usado
    /// quando uma operação pontual (ex.: inativar uma associação) precisa
    /// regravar a linha inteira.
    pub fn para_dados(&self) -> DadosAplicacao {
        DadosAplicacao {
            sigla: self.sigla.clone(),
            descricao: self.descricao.clone(),
            url_documentacao: self.url_documentacao.clone(),
            tipo_aplicacao: self.tipo_aplicacao,
            fase_ciclo_vida: self.fase_ciclo_vida,
            criticidade_negocio: self.criticidade_negocio,
            categoria_sistema: self.categoria_sistema.clone(),
            fornecedor: self.fornecedor.clone(),
            tipo_hospedagem: self.tipo_hospedagem.clone(),
            cloud_provider: self.cloud_provider,
            custo_mensal: self.custo_mensal,
            numero_usuarios: self.numero_usuarios,
            data_implantacao: self.data_implantacao,
            versao_atual: self.versao_atual.clone(),
            responsavel_tecnico: self.responsavel_tecnico.clone(),
            responsavel_negocio: self.responsavel_negocio.clone(),
            status_operacional: self.status_operacional.clone(),
            observacoes: self.observacoes.clone(),
            tecnologias: self.tecnologias.0.clone(),
            ambientes: self.ambientes.0.clone(),
            capacidades: self.capacidades.0.clone(),
            processos: self.processos.0.clone(),
            integracoes: self.integracoes.0.clone(),
            slas: self.slas.0.clone(),
            runbooks: self.runbooks.0.clone(),
            squads: self.squads.0.clone(),
        }
    }
}
