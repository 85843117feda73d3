use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::colaborador::{Colaborador, DadosColaborador},
};

#[derive(Clone)]
pub struct ColaboradorRepository {
    pool: PgPool,
}

impl ColaboradorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Colaborador>, AppError> {
        let colaboradores = sqlx::query_as::<_, Colaborador>(
            "SELECT * FROM colaboradores ORDER BY nome ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(colaboradores)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Colaborador>, AppError> {
        let colaborador =
            sqlx::query_as::<_, Colaborador>("SELECT * FROM colaboradores WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(colaborador)
    }

    pub async fn create(&self, dados: &DadosColaborador) -> Result<Colaborador, AppError> {
        let colaborador = sqlx::query_as::<_, Colaborador>(
            r#"
            INSERT INTO colaboradores (
                matricula, nome, setor, data_admissao, data_demissao,
                afastamentos, habilidades, avaliacoes, opt_in_outs
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&dados.matricula)
        .bind(&dados.nome)
        .bind(&dados.setor)
        .bind(dados.data_admissao)
        .bind(dados.data_demissao)
        .bind(Json(&dados.afastamentos))
        .bind(Json(&dados.habilidades))
        .bind(Json(&dados.avaliacoes))
        .bind(Json(&dados.opt_in_outs))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unicidade_matricula(e, &dados.matricula))?;

        Ok(colaborador)
    }

    pub async fn update(&self, id: Uuid, dados: &DadosColaborador) -> Result<Colaborador, AppError> {
        let colaborador = sqlx::query_as::<_, Colaborador>(
            r#"
            UPDATE colaboradores SET
                matricula = $2, nome = $3, setor = $4, data_admissao = $5,
                data_demissao = $6, afastamentos = $7, habilidades = $8,
                avaliacoes = $9, opt_in_outs = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.matricula)
        .bind(&dados.nome)
        .bind(&dados.setor)
        .bind(dados.data_admissao)
        .bind(dados.data_demissao)
        .bind(Json(&dados.afastamentos))
        .bind(Json(&dados.habilidades))
        .bind(Json(&dados.avaliacoes))
        .bind(Json(&dados.opt_in_outs))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| unicidade_matricula(e, &dados.matricula))?;

        colaborador.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM colaboradores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

fn unicidade_matricula(e: sqlx::Error, matricula: &str) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::UniqueConstraintViolation(format!(
                "Já existe um colaborador com a matrícula '{matricula}'."
            ));
        }
    }
    e.into()
}
