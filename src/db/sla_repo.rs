use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::sla::{DadosSla, Sla},
};

#[derive(Clone)]
pub struct SlaRepository {
    pool: PgPool,
}

impl SlaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Sla>, AppError> {
        let slas = sqlx::query_as::<_, Sla>("SELECT * FROM slas ORDER BY sigla ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(slas)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Sla>, AppError> {
        let sla = sqlx::query_as::<_, Sla>("SELECT * FROM slas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sla)
    }

    pub async fn create(&self, dados: &DadosSla) -> Result<Sla, AppError> {
        let sla = sqlx::query_as::<_, Sla>(
            r#"
            INSERT INTO slas (
                sigla, descricao, tipo_sla, data_inicio, data_termino,
                detalhe, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&dados.sigla)
        .bind(&dados.descricao)
        .bind(dados.tipo_sla)
        .bind(dados.data_inicio)
        .bind(dados.data_termino)
        .bind(Json(&dados.detalhe))
        .bind(dados.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(sla)
    }

    pub async fn update(&self, id: Uuid, dados: &DadosSla) -> Result<Sla, AppError> {
        let sla = sqlx::query_as::<_, Sla>(
            r#"
            UPDATE slas SET
                sigla = $2, descricao = $3, tipo_sla = $4, data_inicio = $5,
                data_termino = $6, detalhe = $7, status = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.sigla)
        .bind(&dados.descricao)
        .bind(dados.tipo_sla)
        .bind(dados.data_inicio)
        .bind(dados.data_termino)
        .bind(Json(&dados.detalhe))
        .bind(dados.status)
        .fetch_optional(&self.pool)
        .await?;

        sla.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM slas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
