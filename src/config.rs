use std::sync::Arc;

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::common::kv::{FileKvStore, KvStore};
use crate::db::{
    AdrRepository, AplicacaoRepository, CatalogoRepository, CheckpointRepository,
    ColaboradorRepository, ContratoRepository, PayloadRepository, ProjetoRepository,
    ServidorRepository, SlaRepository,
};
use crate::services::{
    AdrService, AplicacaoService, CatalogoService, ColaboradorService, RelatorioService,
    SlaService, VinculosService,
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub aplicacao_service: AplicacaoService,
    pub colaborador_service: ColaboradorService,
    pub sla_service: SlaService,
    pub catalogo_service: CatalogoService,
    pub adr_service: AdrService,
    pub vinculos_service: VinculosService,
    pub relatorio_service: RelatorioService,
}

impl AppState {
    // Carrega as configurações e monta o gráfico de dependências.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // Cache secundário (herdeiro do armazenamento local do console)
        let cache_dir = env::var("CACHE_DIR").unwrap_or_else(|_| "./data/cache".to_string());
        let cache: Arc<dyn KvStore> = Arc::new(FileKvStore::new(cache_dir));

        // --- Monta o gráfico de dependências ---
        let aplicacao_repo = AplicacaoRepository::new(db_pool.clone());
        let colaborador_repo = ColaboradorRepository::new(db_pool.clone());
        let sla_repo = SlaRepository::new(db_pool.clone());
        let catalogo_repo = CatalogoRepository::new(db_pool.clone());
        let adr_repo = AdrRepository::new(db_pool.clone());
        let contrato_repo = ContratoRepository::new(db_pool.clone());
        let payload_repo = PayloadRepository::new(db_pool.clone());
        let servidor_repo = ServidorRepository::new(db_pool.clone());
        let checkpoint_repo = CheckpointRepository::new(db_pool.clone());
        let projeto_repo = ProjetoRepository::new(db_pool.clone());

        let aplicacao_service =
            AplicacaoService::new(aplicacao_repo.clone(), cache.clone());
        let colaborador_service = ColaboradorService::new(colaborador_repo.clone());
        let sla_service = SlaService::new(sla_repo.clone(), cache.clone());
        let catalogo_service = CatalogoService::new(catalogo_repo.clone());
        let adr_service = AdrService::new(adr_repo.clone());
        let vinculos_service = VinculosService::new(
            contrato_repo.clone(),
            payload_repo.clone(),
            servidor_repo.clone(),
            checkpoint_repo.clone(),
            projeto_repo,
        );
        let relatorio_service = RelatorioService::new(
            aplicacao_repo,
            colaborador_repo,
            sla_repo,
            catalogo_repo,
            adr_repo,
            contrato_repo,
            payload_repo,
            servidor_repo,
            checkpoint_repo,
        );

        Ok(Self {
            db_pool,
            aplicacao_service,
            colaborador_service,
            sla_service,
            catalogo_service,
            adr_service,
            vinculos_service,
            relatorio_service,
        })
    }
}
