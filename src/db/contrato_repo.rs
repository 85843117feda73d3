use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::contrato::{Contrato, DadosContrato},
};

#[derive(Clone)]
pub struct ContratoRepository {
    pool: PgPool,
}

impl ContratoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Contrato>, AppError> {
        let contratos =
            sqlx::query_as::<_, Contrato>("SELECT * FROM contratos ORDER BY numero_contrato ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(contratos)
    }

    pub async fn list_by_aplicacao(&self, aplicacao_id: Uuid) -> Result<Vec<Contrato>, AppError> {
        let contratos = sqlx::query_as::<_, Contrato>(
            "SELECT * FROM contratos WHERE aplicacao_id = $1 ORDER BY numero_contrato ASC",
        )
        .bind(aplicacao_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(contratos)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Contrato>, AppError> {
        let contrato = sqlx::query_as::<_, Contrato>("SELECT * FROM contratos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(contrato)
    }

    pub async fn create(&self, dados: &DadosContrato) -> Result<Contrato, AppError> {
        let contrato = sqlx::query_as::<_, Contrato>(
            r#"
            INSERT INTO contratos (
                aplicacao_id, numero_contrato, data_vigencia_inicial,
                data_vigencia_final, valor_contrato, status
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(dados.aplicacao_id)
        .bind(&dados.numero_contrato)
        .bind(dados.data_vigencia_inicial)
        .bind(dados.data_vigencia_final)
        .bind(dados.valor_contrato)
        .bind(dados.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(contrato)
    }

    pub async fn update(&self, id: Uuid, dados: &DadosContrato) -> Result<Contrato, AppError> {
        let contrato = sqlx::query_as::<_, Contrato>(
            r#"
            UPDATE contratos SET
                aplicacao_id = $2, numero_contrato = $3,
                data_vigencia_inicial = $4, data_vigencia_final = $5,
                valor_contrato = $6, status = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dados.aplicacao_id)
        .bind(&dados.numero_contrato)
        .bind(dados.data_vigencia_inicial)
        .bind(dados.data_vigencia_final)
        .bind(dados.valor_contrato)
        .bind(dados.status)
        .fetch_optional(&self.pool)
        .await?;

        contrato.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contratos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
