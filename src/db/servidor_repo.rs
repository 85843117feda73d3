use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::servidor::{DadosServidor, Servidor},
};

#[derive(Clone)]
pub struct ServidorRepository {
    pool: PgPool,
}

impl ServidorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Servidor>, AppError> {
        let servidores =
            sqlx::query_as::<_, Servidor>("SELECT * FROM servidores ORDER BY sigla ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(servidores)
    }

    /// Servidores que hospedam a aplicação: o vínculo mora no array JSONB.
    pub async fn list_by_aplicacao(&self, aplicacao_id: Uuid) -> Result<Vec<Servidor>, AppError> {
        let servidores = sqlx::query_as::<_, Servidor>(
            r#"
            SELECT * FROM servidores
            WHERE aplicacoes @> jsonb_build_array(
                jsonb_build_object('aplicacaoId', $1::text)
            )
            ORDER BY sigla ASC
            "#,
        )
        .bind(aplicacao_id.to_string())
        .fetch_all(&self.pool)
        .await?;
        Ok(servidores)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Servidor>, AppError> {
        let servidor = sqlx::query_as::<_, Servidor>("SELECT * FROM servidores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(servidor)
    }

    pub async fn create(&self, dados: &DadosServidor) -> Result<Servidor, AppError> {
        let servidor = sqlx::query_as::<_, Servidor>(
            r#"
            INSERT INTO servidores (
                sigla, hostname, tipo, ambiente, finalidade, status, provedor,
                datacenter_regiao, zona_availability, cluster_host,
                virtualizador, sistema_operacional, distribuicao_versao,
                arquitetura, ferramenta_monitoramento, backup_diario,
                backup_semanal, backup_mensal, aplicacoes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19)
            RETURNING *
            "#,
        )
        .bind(&dados.sigla)
        .bind(&dados.hostname)
        .bind(dados.tipo)
        .bind(dados.ambiente)
        .bind(dados.finalidade)
        .bind(dados.status)
        .bind(&dados.provedor)
        .bind(&dados.datacenter_regiao)
        .bind(&dados.zona_availability)
        .bind(&dados.cluster_host)
        .bind(&dados.virtualizador)
        .bind(&dados.sistema_operacional)
        .bind(&dados.distribuicao_versao)
        .bind(&dados.arquitetura)
        .bind(&dados.ferramenta_monitoramento)
        .bind(dados.backup_diario)
        .bind(dados.backup_semanal)
        .bind(dados.backup_mensal)
        .bind(Json(&dados.aplicacoes))
        .fetch_one(&self.pool)
        .await?;

        Ok(servidor)
    }

    pub async fn update(&self, id: Uuid, dados: &DadosServidor) -> Result<Servidor, AppError> {
        let servidor = sqlx::query_as::<_, Servidor>(
            r#"
            UPDATE servidores SET
                sigla = $2, hostname = $3, tipo = $4, ambiente = $5,
                finalidade = $6, status = $7, provedor = $8,
                datacenter_regiao = $9, zona_availability = $10,
                cluster_host = $11, virtualizador = $12,
                sistema_operacional = $13, distribuicao_versao = $14,
                arquitetura = $15, ferramenta_monitoramento = $16,
                backup_diario = $17, backup_semanal = $18, backup_mensal = $19,
                aplicacoes = $20, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&dados.sigla)
        .bind(&dados.hostname)
        .bind(dados.tipo)
        .bind(dados.ambiente)
        .bind(dados.finalidade)
        .bind(dados.status)
        .bind(&dados.provedor)
        .bind(&dados.datacenter_regiao)
        .bind(&dados.zona_availability)
        .bind(&dados.cluster_host)
        .bind(&dados.virtualizador)
        .bind(&dados.sistema_operacional)
        .bind(&dados.distribuicao_versao)
        .bind(&dados.arquitetura)
        .bind(&dados.ferramenta_monitoramento)
        .bind(dados.backup_diario)
        .bind(dados.backup_semanal)
        .bind(dados.backup_mensal)
        .bind(Json(&dados.aplicacoes))
        .fetch_optional(&self.pool)
        .await?;

        servidor.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM servidores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
