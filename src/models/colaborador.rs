use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NivelHabilidade {
    #[serde(rename = "Básico")]
    Basico,
    #[serde(rename = "Intermediário")]
    Intermediario,
    #[serde(rename = "Avançado")]
    Avancado,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Afastamento {
    pub id: Uuid,
    pub tipo_afastamento_id: Uuid,
    pub inicial_provavel: NaiveDate,
    pub final_provavel: NaiveDate,
    #[serde(default)]
    pub inicial_efetivo: Option<NaiveDate>,
    #[serde(default)]
    pub final_efetivo: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HabilidadeColaborador {
    pub id: Uuid,
    pub habilidade_id: Uuid,
    pub nivel_declarado: NivelHabilidade,
    pub nivel_avaliado: NivelHabilidade,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_termino", default)]
    pub data_termino: Option<NaiveDate>,
}

/// Notas de 0 a 10 por dimensão; a nota final é a média calculada na gravação.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvaliacaoColaborador {
    pub id: Uuid,
    pub data_avaliacao: NaiveDate,
    pub resultados_entregas: f64,
    pub competencias_tecnicas: f64,
    pub qualidade_seguranca: f64,
    pub comportamento_cultura: f64,
    pub evolucao_aprendizado: f64,
    #[serde(default)]
    pub nota_final: Option<f64>,
    #[serde(default)]
    pub observacoes: Option<String>,
}

/// Consentimento de uso de dados por aplicação. O arquivo PDF assinado vem
/// como data URL (limite de 5 MB conferido no serviço) junto do token de
/// assinatura eletrônica.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptInOut {
    pub id: Uuid,
    pub aplicacao_id: Uuid,
    #[serde(alias = "data_inicio")]
    pub data_inicio: NaiveDate,
    #[serde(alias = "data_revogacao", default)]
    pub data_revogacao: Option<NaiveDate>,
    pub arquivo_pdf: String,
    pub assinatura_eletronica: String,
}

impl OptInOut {
    /// Um consentimento está vigente enquanto não houver data de revogação.
    pub fn vigente(&self) -> bool {
        self.data_revogacao.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Colaborador {
    pub id: Uuid,
    #[schema(example = "F1234567")]
    pub matricula: String,
    pub nome: String,
    pub setor: String,
    pub data_admissao: NaiveDate,
    pub data_demissao: Option<NaiveDate>,

    #[schema(value_type = Vec<Afastamento>)]
    pub afastamentos: Json<Vec<Afastamento>>,
    #[schema(value_type = Vec<HabilidadeColaborador>)]
    pub habilidades: Json<Vec<HabilidadeColaborador>>,
    #[schema(value_type = Vec<AvaliacaoColaborador>)]
    pub avaliacoes: Json<Vec<AvaliacaoColaborador>>,
    #[schema(value_type = Vec<OptInOut>)]
    pub opt_in_outs: Json<Vec<OptInOut>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, serde::Deserialize, validator::Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DadosColaborador {
    #[validate(length(min = 1, max = 20, message = "A matrícula é obrigatória e tem no máximo 20 caracteres"))]
    pub matricula: String,

    #[validate(length(min = 1, message = "O nome é obrigatório"))]
    pub nome: String,

    #[validate(length(min = 1, message = "O setor é obrigatório"))]
    pub setor: String,

    pub data_admissao: NaiveDate,
    pub data_demissao: Option<NaiveDate>,

    #[serde(default)]
    pub afastamentos: Vec<Afastamento>,
    #[serde(default)]
    pub habilidades: Vec<HabilidadeColaborador>,
    #[serde(default)]
    pub avaliacoes: Vec<AvaliacaoColaborador>,
    #[serde(default)]
    pub opt_in_outs: Vec<OptInOut>,
}
