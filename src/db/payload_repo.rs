use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::payload::{DadosPayload, Payload},
};

#[derive(Clone)]
pub struct PayloadRepository {
    pool: PgPool,
}

/// Resultado da validação do conteúdo OpenAPI, gravado junto do payload.
pub struct ResultadoValidacao {
    pub arquivo_valido: bool,
    pub ultima_validacao: DateTime<Utc>,
    pub erros_validacao: Option<String>,
}

impl PayloadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Payload>, AppError> {
        let payloads = sqlx::query_as::<_, Payload>("SELECT * FROM payloads ORDER BY sigla ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(payloads)
    }

    pub async fn list_by_aplicacao(&self, aplicacao_id: Uuid) -> Result<Vec<Payload>, AppError> {
        let payloads = sqlx::query_as::<_, Payload>(
            "SELECT * FROM payloads WHERE aplicacao_id = $1 ORDER BY sigla ASC",
        )
        .bind(aplicacao_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(payloads)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Payload>, AppError> {
        let payload = sqlx::query_as::<_, Payload>("SELECT * FROM payloads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payload)
    }

    pub async fn create(
        &self,
        dados: &DadosPayload,
        validacao: &ResultadoValidacao,
    ) -> Result<Payload, AppError> {
        let payload = sqlx::query_as::<_, Payload>(
            r#"
            INSERT INTO payloads (
                aplicacao_id, sigla, definicao, descricao, formato_arquivo,
                conteudo_arquivo, versao_openapi, arquivo_valido,
                ultima_validacao, erros_validacao, data_inicio, data_termino
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(dados.aplicacao_id)
        .bind(&dados.sigla)
        .bind(&dados.definicao)
        .bind(&dados.descricao)
        .bind(dados.formato_arquivo)
        .bind(&dados.conteudo_arquivo)
        .bind(&dados.versao_openapi)
        .bind(validacao.arquivo_valido)
        .bind(validacao.ultima_validacao)
        .bind(&validacao.erros_validacao)
        .bind(dados.data_inicio)
        .bind(dados.data_termino)
        .fetch_one(&self.pool)
        .await?;

        Ok(payload)
    }

    pub async fn update(
        &self,
        id: Uuid,
        dados: &DadosPayload,
        validacao: &ResultadoValidacao,
    ) -> Result<Payload, AppError> {
        let payload = sqlx::query_as::<_, Payload>(
            r#"
            UPDATE payloads SET
                aplicacao_id = $2, sigla = $3, definicao = $4, descricao = $5,
                formato_arquivo = $6, conteudo_arquivo = $7,
                versao_openapi = $8, arquivo_valido = $9,
                ultima_validacao = $10, erros_validacao = $11,
                data_inicio = $12, data_termino = $13, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dados.aplicacao_id)
        .bind(&dados.sigla)
        .bind(&dados.definicao)
        .bind(&dados.descricao)
        .bind(dados.formato_arquivo)
        .bind(&dados.conteudo_arquivo)
        .bind(&dados.versao_openapi)
        .bind(validacao.arquivo_valido)
        .bind(validacao.ultima_validacao)
        .bind(&validacao.erros_validacao)
        .bind(dados.data_inicio)
        .bind(dados.data_termino)
        .fetch_optional(&self.pool)
        .await?;

        payload.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM payloads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
