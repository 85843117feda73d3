use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::aplicacao::{Aplicacao, DadosAplicacao},
};

// Repositório das aplicações. As coleções de associação são colunas JSONB,
// então criar/atualizar é sempre a gravação da linha inteira — o objeto
// consolidado que o assistente montou.
#[derive(Clone)]
pub struct AplicacaoRepository {
    pool: PgPool,
}

const COLUNAS: &str = r#"
    id, sigla, descricao, url_documentacao, tipo_aplicacao, fase_ciclo_vida,
    criticidade_negocio, categoria_sistema, fornecedor, tipo_hospedagem,
    cloud_provider, custo_mensal, numero_usuarios, data_implantacao,
    versao_atual, responsavel_tecnico, responsavel_negocio, status_operacional,
    observacoes, tecnologias, ambientes, capacidades, processos, integracoes,
    slas, runbooks, squads, created_at, updated_at
"#;

impl AplicacaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Aplicacao>, AppError> {
        let aplicacoes = sqlx::query_as::<_, Aplicacao>(&format!(
            "SELECT {COLUNAS} FROM aplicacoes ORDER BY sigla ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(aplicacoes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Aplicacao>, AppError> {
        let aplicacao = sqlx::query_as::<_, Aplicacao>(&format!(
            "SELECT {COLUNAS} FROM aplicacoes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(aplicacao)
    }

    pub async fn create(&self, dados: &DadosAplicacao) -> Result<Aplicacao, AppError> {
        let aplicacao = sqlx::query_as::<_, Aplicacao>(&format!(
            r#"
            INSERT INTO aplicacoes (
                sigla, descricao, url_documentacao, tipo_aplicacao,
                fase_ciclo_vida, criticidade_negocio, categoria_sistema,
                fornecedor, tipo_hospedagem, cloud_provider, custo_mensal,
                numero_usuarios, data_implantacao, versao_atual,
                responsavel_tecnico, responsavel_negocio, status_operacional,
                observacoes, tecnologias, ambientes, capacidades, processos,
                integracoes, slas, runbooks, squads
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24,
                    $25, $26)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(&dados.sigla)
        .bind(&dados.descricao)
        .bind(&dados.url_documentacao)
        .bind(dados.tipo_aplicacao)
        .bind(dados.fase_ciclo_vida)
        .bind(dados.criticidade_negocio)
        .bind(&dados.categoria_sistema)
        .bind(&dados.fornecedor)
        .bind(&dados.tipo_hospedagem)
        .bind(dados.cloud_provider)
        .bind(dados.custo_mensal)
        .bind(dados.numero_usuarios)
        .bind(dados.data_implantacao)
        .bind(&dados.versao_atual)
        .bind(&dados.responsavel_tecnico)
        .bind(&dados.responsavel_negocio)
        .bind(&dados.status_operacional)
        .bind(&dados.observacoes)
        .bind(Json(&dados.tecnologias))
        .bind(Json(&dados.ambientes))
        .bind(Json(&dados.capacidades))
        .bind(Json(&dados.processos))
        .bind(Json(&dados.integracoes))
        .bind(Json(&dados.slas))
        .bind(Json(&dados.runbooks))
        .bind(Json(&dados.squads))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unicidade_sigla(e, &dados.sigla))?;

        Ok(aplicacao)
    }

    pub async fn update(&self, id: Uuid, dados: &DadosAplicacao) -> Result<Aplicacao, AppError> {
        let aplicacao = sqlx::query_as::<_, Aplicacao>(&format!(
            r#"
            UPDATE aplicacoes SET
                sigla = $2, descricao = $3, url_documentacao = $4,
                tipo_aplicacao = $5, fase_ciclo_vida = $6,
                criticidade_negocio = $7, categoria_sistema = $8,
                fornecedor = $9, tipo_hospedagem = $10, cloud_provider = $11,
                custo_mensal = $12, numero_usuarios = $13,
                data_implantacao = $14, versao_atual = $15,
                responsavel_tecnico = $16, responsavel_negocio = $17,
                status_operacional = $18, observacoes = $19, tecnologias = $20,
                ambientes = $21, capacidades = $22, processos = $23,
                integracoes = $24, slas = $25, runbooks = $26, squads = $27,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(&dados.sigla)
        .bind(&dados.descricao)
        .bind(&dados.url_documentacao)
        .bind(dados.tipo_aplicacao)
        .bind(dados.fase_ciclo_vida)
        .bind(dados.criticidade_negocio)
        .bind(&dados.categoria_sistema)
        .bind(&dados.fornecedor)
        .bind(&dados.tipo_hospedagem)
        .bind(dados.cloud_provider)
        .bind(dados.custo_mensal)
        .bind(dados.numero_usuarios)
        .bind(dados.data_implantacao)
        .bind(&dados.versao_atual)
        .bind(&dados.responsavel_tecnico)
        .bind(&dados.responsavel_negocio)
        .bind(&dados.status_operacional)
        .bind(&dados.observacoes)
        .bind(Json(&dados.tecnologias))
        .bind(Json(&dados.ambientes))
        .bind(Json(&dados.capacidades))
        .bind(Json(&dados.processos))
        .bind(Json(&dados.integracoes))
        .bind(Json(&dados.slas))
        .bind(Json(&dados.runbooks))
        .bind(Json(&dados.squads))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| unicidade_sigla(e, &dados.sigla))?;

        aplicacao.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM aplicacoes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

fn unicidade_sigla(e: sqlx::Error, sigla: &str) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::UniqueConstraintViolation(format!(
                "Já existe uma aplicação com a sigla '{sigla}'."
            ));
        }
    }
    e.into()
}
