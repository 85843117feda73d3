use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::checkpoint::{Checkpoint, DadosCheckpoint},
    models::projeto::{DadosProjeto, Projeto},
};

#[derive(Clone)]
pub struct ProjetoRepository {
    pool: PgPool,
}

impl ProjetoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Projeto>, AppError> {
        let projetos =
            sqlx::query_as::<_, Projeto>("SELECT * FROM projetos ORDER BY data_criacao DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(projetos)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Projeto>, AppError> {
        let projeto = sqlx::query_as::<_, Projeto>("SELECT * FROM projetos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(projeto)
    }

    pub async fn create(&self, dados: &DadosProjeto) -> Result<Projeto, AppError> {
        let projeto = sqlx::query_as::<_, Projeto>(
            r#"
            INSERT INTO projetos (
                produto, projeto, nome_time, data_inicial, numero_semanas,
                iteracao, aplicacao_base_id, repositorios, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&dados.produto)
        .bind(&dados.projeto)
        .bind(&dados.nome_time)
        .bind(dados.data_inicial)
        .bind(dados.numero_semanas)
        .bind(dados.iteracao)
        .bind(dados.aplicacao_base_id)
        .bind(Json(&dados.repositorios))
        .bind(dados.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(projeto)
    }

    pub async fn update(&self, id: Uuid, dados: &DadosProjeto) -> Result<Projeto, AppError> {
        let projeto = sqlx::query_as::<_, Projeto>(
            r#"
            UPDATE projetos SET
                produto = $2, projeto = $3, nome_time = $4, data_inicial = $5,
                numero_semanas = $6, iteracao = $7, aplicacao_base_id = $8,
                repositorios = $9, status = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.produto)
        .bind(&dados.projeto)
        .bind(&dados.nome_time)
        .bind(dados.data_inicial)
        .bind(dados.numero_semanas)
        .bind(dados.iteracao)
        .bind(dados.aplicacao_base_id)
        .bind(Json(&dados.repositorios))
        .bind(dados.status)
        .fetch_optional(&self.pool)
        .await?;

        projeto.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projetos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct CheckpointRepository {
    pool: PgPool,
}

impl CheckpointRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Checkpoint>, AppError> {
        let checkpoints =
            sqlx::query_as::<_, Checkpoint>("SELECT * FROM checkpoints ORDER BY data_prevista ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(checkpoints)
    }

    pub async fn list_by_aplicacao(&self, aplicacao_id: Uuid) -> Result<Vec<Checkpoint>, AppError> {
        let checkpoints = sqlx::query_as::<_, Checkpoint>(
            "SELECT * FROM checkpoints WHERE aplicacao_id = $1 ORDER BY data_prevista ASC",
        )
        .bind(aplicacao_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(checkpoints)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Checkpoint>, AppError> {
        let checkpoint =
            sqlx::query_as::<_, Checkpoint>("SELECT * FROM checkpoints WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(checkpoint)
    }

    pub async fn create(&self, dados: &DadosCheckpoint) -> Result<Checkpoint, AppError> {
        let checkpoint = sqlx::query_as::<_, Checkpoint>(
            r#"
            INSERT INTO checkpoints (
                aplicacao_id, descricao, categoria, status, data_prevista,
                data_real
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(dados.aplicacao_id)
        .bind(&dados.descricao)
        .bind(dados.categoria)
        .bind(dados.status)
        .bind(dados.data_prevista)
        .bind(dados.data_real)
        .fetch_one(&self.pool)
        .await?;

        Ok(checkpoint)
    }

    pub async fn update(&self, id: Uuid, dados: &DadosCheckpoint) -> Result<Checkpoint, AppError> {
        let checkpoint = sqlx::query_as::<_, Checkpoint>(
            r#"
            UPDATE checkpoints SET
                aplicacao_id = $2, descricao = $3, categoria = $4, status = $5,
                data_prevista = $6, data_real = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(dados.aplicacao_id)
        .bind(&dados.descricao)
        .bind(dados.categoria)
        .bind(dados.status)
        .bind(dados.data_prevista)
        .bind(dados.data_real)
        .fetch_optional(&self.pool)
        .await?;

        checkpoint.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM checkpoints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
