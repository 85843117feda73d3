use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::adr::{Adr, DadosAdr},
};

#[derive(Clone)]
pub struct AdrRepository {
    pool: PgPool,
}

impl AdrRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Adr>, AppError> {
        let adrs = sqlx::query_as::<_, Adr>("SELECT * FROM adrs ORDER BY sequencia ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(adrs)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Adr>, AppError> {
        let adr = sqlx::query_as::<_, Adr>("SELECT * FROM adrs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(adr)
    }

    /// ADRs vinculadas a uma aplicação: o vínculo mora no array JSONB
    /// `aplicacoes`, então o filtro usa o containment do Postgres.
    pub async fn list_by_aplicacao(&self, aplicacao_id: Uuid) -> Result<Vec<Adr>, AppError> {
        let adrs = sqlx::query_as::<_, Adr>(
            r#"
            SELECT * FROM adrs
            WHERE aplicacoes @> jsonb_build_array(
                jsonb_build_object('aplicacaoId', $1::text)
            )
            ORDER BY sequencia ASC
            "#,
        )
        .bind(aplicacao_id.to_string())
        .fetch_all(&self.pool)
        .await?;
        Ok(adrs)
    }

    pub async fn create(&self, dados: &DadosAdr) -> Result<Adr, AppError> {
        let adr = sqlx::query_as::<_, Adr>(
            r#"
            INSERT INTO adrs (
                sequencia, descricao, data_criacao, data_atualizacao, status,
                contexto, decisao, justificativa, consequencias_positivas,
                consequencias_negativas, riscos, alternativas_consideradas,
                adr_substituta_id, referencias, aplicacoes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15)
            RETURNING *
            "#,
        )
        .bind(dados.sequencia)
        .bind(&dados.descricao)
        .bind(dados.data_criacao)
        .bind(dados.data_atualizacao)
        .bind(dados.status)
        .bind(&dados.contexto)
        .bind(&dados.decisao)
        .bind(&dados.justificativa)
        .bind(&dados.consequencias_positivas)
        .bind(&dados.consequencias_negativas)
        .bind(&dados.riscos)
        .bind(&dados.alternativas_consideradas)
        .bind(dados.adr_substituta_id)
        .bind(&dados.referencias)
        .bind(Json(&dados.aplicacoes))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unicidade_sequencia(e, dados.sequencia))?;

        Ok(adr)
    }

    pub async fn update(&self, id: Uuid, dados: &DadosAdr) -> Result<Adr, AppError> {
        let adr = sqlx::query_as::<_, Adr>(
            r#"
            UPDATE adrs SET
                sequencia = $2, descricao = $3, data_criacao = $4,
                data_atualizacao = $5, status = $6, contexto = $7,
                decisao = $8, justificativa = $9,
                consequencias_positivas = $10, consequencias_negativas = $11,
                riscos = $12, alternativas_consideradas = $13,
                adr_substituta_id = $14, referencias = $15, aplicacoes = $16,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dados.sequencia)
        .bind(&dados.descricao)
        .bind(dados.data_criacao)
        .bind(dados.data_atualizacao)
        .bind(dados.status)
        .bind(&dados.contexto)
        .bind(&dados.decisao)
        .bind(&dados.justificativa)
        .bind(&dados.consequencias_positivas)
        .bind(&dados.consequencias_negativas)
        .bind(&dados.riscos)
        .bind(&dados.alternativas_consideradas)
        .bind(dados.adr_substituta_id)
        .bind(&dados.referencias)
        .bind(Json(&dados.aplicacoes))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| unicidade_sequencia(e, dados.sequencia))?;

        adr.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM adrs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

fn unicidade_sequencia(e: sqlx::Error, sequencia: i32) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::UniqueConstraintViolation(format!(
                "Já existe uma ADR com a sequência {sequencia}."
            ));
        }
    }
    e.into()
}
