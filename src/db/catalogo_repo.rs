use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::capacidade::{CapacidadeNegocio, DadosCapacidade},
    models::processo::{DadosProcesso, ProcessoNegocio},
    models::runbook::{DadosRunbook, Runbook},
    models::tecnologia::{DadosTecnologia, Tecnologia},
};

// Repositório dos catálogos de referência que os assistentes carregam para
// montar os seletores: tecnologias, capacidades, processos e runbooks.
#[derive(Clone)]
pub struct CatalogoRepository {
    pool: PgPool,
}

impl CatalogoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  TECNOLOGIAS
    // =========================================================================

    pub async fn list_tecnologias(&self) -> Result<Vec<Tecnologia>, AppError> {
        let tecnologias =
            sqlx::query_as::<_, Tecnologia>("SELECT * FROM tecnologias ORDER BY sigla ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(tecnologias)
    }

    pub async fn find_tecnologia(&self, id: Uuid) -> Result<Option<Tecnologia>, AppError> {
        let tecnologia =
            sqlx::query_as::<_, Tecnologia>("SELECT * FROM tecnologias WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(tecnologia)
    }

    pub async fn create_tecnologia(&self, dados: &DadosTecnologia) -> Result<Tecnologia, AppError> {
        let tecnologia = sqlx::query_as::<_, Tecnologia>(
            r#"
            INSERT INTO tecnologias (
                sigla, nome, versao_release, categoria, status,
                fornecedor_fabricante, tipo_licenciamento, ambientes,
                data_fim_suporte_eos, maturidade_interna, nivel_suporte_interno,
                documentacao_oficial, repositorio_interno, contratos,
                contratos_ams, responsaveis, custos_saas, manutencoes_saas
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18)
            RETURNING *
            "#,
        )
        .bind(&dados.sigla)
        .bind(&dados.nome)
        .bind(&dados.versao_release)
        .bind(dados.categoria)
        .bind(dados.status)
        .bind(&dados.fornecedor_fabricante)
        .bind(dados.tipo_licenciamento)
        .bind(Json(&dados.ambientes))
        .bind(dados.data_fim_suporte_eos)
        .bind(dados.maturidade_interna)
        .bind(&dados.nivel_suporte_interno)
        .bind(&dados.documentacao_oficial)
        .bind(&dados.repositorio_interno)
        .bind(Json(&dados.contratos))
        .bind(Json(&dados.contratos_ams))
        .bind(Json(&dados.responsaveis))
        .bind(Json(&dados.custos_saas))
        .bind(Json(&dados.manutencoes_saas))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unicidade(e, "tecnologia", &dados.sigla))?;

        Ok(tecnologia)
    }

    pub async fn update_tecnologia(
        &self,
        id: Uuid,
        dados: &DadosTecnologia,
    ) -> Result<Tecnologia, AppError> {
        let tecnologia = sqlx::query_as::<_, Tecnologia>(
            r#"
            UPDATE tecnologias SET
                sigla = $2, nome = $3, versao_release = $4, categoria = $5,
                status = $6, fornecedor_fabricante = $7,
                tipo_licenciamento = $8, ambientes = $9,
                data_fim_suporte_eos = $10, maturidade_interna = $11,
                nivel_suporte_interno = $12, documentacao_oficial = $13,
                repositorio_interno = $14, contratos = $15,
                contratos_ams = $16, responsaveis = $17, custos_saas = $18,
                manutencoes_saas = $19, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.sigla)
        .bind(&dados.nome)
        .bind(&dados.versao_release)
        .bind(dados.categoria)
        .bind(dados.status)
        .bind(&dados.fornecedor_fabricante)
        .bind(dados.tipo_licenciamento)
        .bind(Json(&dados.ambientes))
        .bind(dados.data_fim_suporte_eos)
        .bind(dados.maturidade_interna)
        .bind(&dados.nivel_suporte_interno)
        .bind(&dados.documentacao_oficial)
        .bind(&dados.repositorio_interno)
        .bind(Json(&dados.contratos))
        .bind(Json(&dados.contratos_ams))
        .bind(Json(&dados.responsaveis))
        .bind(Json(&dados.custos_saas))
        .bind(Json(&dados.manutencoes_saas))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| unicidade(e, "tecnologia", &dados.sigla))?;

        tecnologia.ok_or(AppError::NotFound)
    }

    pub async fn delete_tecnologia(&self, id: Uuid) -> Result<(), AppError> {
        apagar(&self.pool, "tecnologias", id).await
    }

    // =========================================================================
    //  CAPACIDADES DE NEGÓCIO
    // =========================================================================

    pub async fn list_capacidades(&self) -> Result<Vec<CapacidadeNegocio>, AppError> {
        let capacidades =
            sqlx::query_as::<_, CapacidadeNegocio>("SELECT * FROM capacidades ORDER BY sigla ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(capacidades)
    }

    pub async fn find_capacidade(&self, id: Uuid) -> Result<Option<CapacidadeNegocio>, AppError> {
        let capacidade =
            sqlx::query_as::<_, CapacidadeNegocio>("SELECT * FROM capacidades WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(capacidade)
    }

    pub async fn create_capacidade(
        &self,
        dados: &DadosCapacidade,
    ) -> Result<CapacidadeNegocio, AppError> {
        let capacidade = sqlx::query_as::<_, CapacidadeNegocio>(
            r#"
            INSERT INTO capacidades (
                sigla, nome, descricao, nivel, categoria, cobertura_estrategica
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&dados.sigla)
        .bind(&dados.nome)
        .bind(&dados.descricao)
        .bind(dados.nivel)
        .bind(dados.categoria)
        .bind(Json(&dados.cobertura_estrategica))
        .fetch_one(&self.pool)
        .await?;

        Ok(capacidade)
    }

    pub async fn update_capacidade(
        &self,
        id: Uuid,
        dados: &DadosCapacidade,
    ) -> Result<CapacidadeNegocio, AppError> {
        let capacidade = sqlx::query_as::<_, CapacidadeNegocio>(
            r#"
            UPDATE capacidades SET
                sigla = $2, nome = $3, descricao = $4, nivel = $5,
                categoria = $6, cobertura_estrategica = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.sigla)
        .bind(&dados.nome)
        .bind(&dados.descricao)
        .bind(dados.nivel)
        .bind(dados.categoria)
        .bind(Json(&dados.cobertura_estrategica))
        .fetch_optional(&self.pool)
        .await?;

        capacidade.ok_or(AppError::NotFound)
    }

    pub async fn delete_capacidade(&self, id: Uuid) -> Result<(), AppError> {
        apagar(&self.pool, "capacidades", id).await
    }

    // =========================================================================
    //  PROCESSOS DE NEGÓCIO
    // =========================================================================

    pub async fn list_processos(&self) -> Result<Vec<ProcessoNegocio>, AppError> {
        let processos = sqlx::query_as::<_, ProcessoNegocio>(
            "SELECT * FROM processos ORDER BY identificacao ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(processos)
    }

    pub async fn find_processo(&self, id: Uuid) -> Result<Option<ProcessoNegocio>, AppError> {
        let processo =
            sqlx::query_as::<_, ProcessoNegocio>("SELECT * FROM processos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(processo)
    }

    pub async fn create_processo(&self, dados: &DadosProcesso) -> Result<ProcessoNegocio, AppError> {
        let processo = sqlx::query_as::<_, ProcessoNegocio>(
            r#"
            INSERT INTO processos (
                identificacao, descricao, nivel_maturidade, area_responsavel,
                frequencia, duracao_media, complexidade, normas
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&dados.identificacao)
        .bind(&dados.descricao)
        .bind(dados.nivel_maturidade)
        .bind(&dados.area_responsavel)
        .bind(dados.frequencia)
        .bind(dados.duracao_media)
        .bind(dados.complexidade)
        .bind(Json(&dados.normas))
        .fetch_one(&self.pool)
        .await?;

        Ok(processo)
    }

    pub async fn update_processo(
        &self,
        id: Uuid,
        dados: &DadosProcesso,
    ) -> Result<ProcessoNegocio, AppError> {
        let processo = sqlx::query_as::<_, ProcessoNegocio>(
            r#"
            UPDATE processos SET
                identificacao = $2, descricao = $3, nivel_maturidade = $4,
                area_responsavel = $5, frequencia = $6, duracao_media = $7,
                complexidade = $8, normas = $9, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.identificacao)
        .bind(&dados.descricao)
        .bind(dados.nivel_maturidade)
        .bind(&dados.area_responsavel)
        .bind(dados.frequencia)
        .bind(dados.duracao_media)
        .bind(dados.complexidade)
        .bind(Json(&dados.normas))
        .fetch_optional(&self.pool)
        .await?;

        processo.ok_or(AppError::NotFound)
    }

    pub async fn delete_processo(&self, id: Uuid) -> Result<(), AppError> {
        apagar(&self.pool, "processos", id).await
    }

    // =========================================================================
    //  RUNBOOKS
    // =========================================================================

    pub async fn list_runbooks(&self) -> Result<Vec<Runbook>, AppError> {
        let runbooks = sqlx::query_as::<_, Runbook>("SELECT * FROM runbooks ORDER BY sigla ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(runbooks)
    }

    pub async fn find_runbook(&self, id: Uuid) -> Result<Option<Runbook>, AppError> {
        let runbook = sqlx::query_as::<_, Runbook>("SELECT * FROM runbooks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(runbook)
    }

    pub async fn create_runbook(&self, dados: &DadosRunbook) -> Result<Runbook, AppError> {
        let runbook = sqlx::query_as::<_, Runbook>(
            r#"
            INSERT INTO runbooks (
                sigla, descricao_resumida, finalidade, tipo_runbook,
                pre_requisitos, procedimento_operacional, pos_execucao,
                execucao_automatizada, evidencias, riscos_mitigacoes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&dados.sigla)
        .bind(&dados.descricao_resumida)
        .bind(&dados.finalidade)
        .bind(dados.tipo_runbook)
        .bind(Json(&dados.pre_requisitos))
        .bind(Json(&dados.procedimento_operacional))
        .bind(Json(&dados.pos_execucao))
        .bind(Json(&dados.execucao_automatizada))
        .bind(Json(&dados.evidencias))
        .bind(Json(&dados.riscos_mitigacoes))
        .fetch_one(&self.pool)
        .await?;

        Ok(runbook)
    }

    pub async fn update_runbook(&self, id: Uuid, dados: &DadosRunbook) -> Result<Runbook, AppError> {
        let runbook = sqlx::query_as::<_, Runbook>(
            r#"
            UPDATE runbooks SET
                sigla = $2, descricao_resumida = $3, finalidade = $4,
                tipo_runbook = $5, pre_requisitos = $6,
                procedimento_operacional = $7, pos_execucao = $8,
                execucao_automatizada = $9, evidencias = $10,
                riscos_mitigacoes = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.sigla)
        .bind(&dados.descricao_resumida)
        .bind(&dados.finalidade)
        .bind(dados.tipo_runbook)
        .bind(Json(&dados.pre_requisitos))
        .bind(Json(&dados.procedimento_operacional))
        .bind(Json(&dados.pos_execucao))
        .bind(Json(&dados.execucao_automatizada))
        .bind(Json(&dados.evidencias))
        .bind(Json(&dados.riscos_mitigacoes))
        .fetch_optional(&self.pool)
        .await?;

        runbook.ok_or(AppError::NotFound)
    }

    pub async fn delete_runbook(&self, id: Uuid) -> Result<(), AppError> {
        apagar(&self.pool, "runbooks", id).await
    }
}

async fn apagar(pool: &PgPool, tabela: &str, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query(&format!("DELETE FROM {tabela} WHERE id = $1"))
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}

fn unicidade(e: sqlx::Error, entidade: &str, sigla: &str) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::UniqueConstraintViolation(format!(
                "Já existe uma {entidade} com a sigla '{sigla}'."
            ));
        }
    }
    e.into()
}
