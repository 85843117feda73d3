// src/main.rs

use axum::{
    Router,
    routing::{delete, get},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;
use utoipa::OpenApi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let aplicacoes_routes = Router::new()
        .route(
            "/",
            get(handlers::aplicacoes::list_aplicacoes)
                .post(handlers::aplicacoes::create_aplicacao),
        )
        .route(
            "/{id}",
            get(handlers::aplicacoes::get_aplicacao)
                .put(handlers::aplicacoes::update_aplicacao)
                .delete(handlers::aplicacoes::delete_aplicacao),
        )
        .route(
            "/{id}/slas/{associacao_id}",
            delete(handlers::aplicacoes::inativar_sla_da_aplicacao),
        )
        .route("/{id}/contratos", get(handlers::aplicacoes::list_contratos_da_aplicacao))
        .route("/{id}/payloads", get(handlers::aplicacoes::list_payloads_da_aplicacao))
        .route("/{id}/servidores", get(handlers::aplicacoes::list_servidores_da_aplicacao))
        .route("/{id}/adrs", get(handlers::aplicacoes::list_adrs_da_aplicacao))
        .route("/{id}/checkpoints", get(handlers::aplicacoes::list_checkpoints_da_aplicacao));

    let colaboradores_routes = Router::new()
        .route(
            "/",
            get(handlers::colaboradores::list_colaboradores)
                .post(handlers::colaboradores::create_colaborador),
        )
        .route(
            "/{id}",
            get(handlers::colaboradores::get_colaborador)
                .put(handlers::colaboradores::update_colaborador)
                .delete(handlers::colaboradores::delete_colaborador),
        );

    let slas_routes = Router::new()
        .route("/", get(handlers::slas::list_slas).post(handlers::slas::create_sla))
        .route(
            "/{id}",
            get(handlers::slas::get_sla)
                .put(handlers::slas::update_sla)
                .delete(handlers::slas::delete_sla),
        );

    let tecnologias_routes = Router::new()
        .route(
            "/",
            get(handlers::tecnologias::list_tecnologias)
                .post(handlers::tecnologias::create_tecnologia),
        )
        .route(
            "/{id}",
            get(handlers::tecnologias::get_tecnologia)
                .put(handlers::tecnologias::update_tecnologia)
                .delete(handlers::tecnologias::delete_tecnologia),
        );

    let capacidades_routes = Router::new()
        .route(
            "/",
            get(handlers::catalogos::list_capacidades)
                .post(handlers::catalogos::create_capacidade),
        )
        .route(
            "/{id}",
            get(handlers::catalogos::get_capacidade)
                .put(handlers::catalogos::update_capacidade)
                .delete(handlers::catalogos::delete_capacidade),
        );

    let processos_routes = Router::new()
        .route(
            "/",
            get(handlers::catalogos::list_processos).post(handlers::catalogos::create_processo),
        )
        .route(
            "/{id}",
            get(handlers::catalogos::get_processo)
                .put(handlers::catalogos::update_processo)
                .delete(handlers::catalogos::delete_processo),
        );

    let runbooks_routes = Router::new()
        .route(
            "/",
            get(handlers::catalogos::list_runbooks).post(handlers::catalogos::create_runbook),
        )
        .route(
            "/{id}",
            get(handlers::catalogos::get_runbook)
                .put(handlers::catalogos::update_runbook)
                .delete(handlers::catalogos::delete_runbook),
        );

    let adrs_routes = Router::new()
        .route("/", get(handlers::adrs::list_adrs).post(handlers::adrs::create_adr))
        .route(
            "/{id}",
            get(handlers::adrs::get_adr)
                .put(handlers::adrs::update_adr)
                .delete(handlers::adrs::delete_adr),
        );

    let contratos_routes = Router::new()
        .route(
            "/",
            get(handlers::vinculos::list_contratos).post(handlers::vinculos::create_contrato),
        )
        .route(
            "/{id}",
            get(handlers::vinculos::get_contrato)
                .put(handlers::vinculos::update_contrato)
                .delete(handlers::vinculos::delete_contrato),
        );

    let payloads_routes = Router::new()
        .route(
            "/",
            get(handlers::vinculos::list_payloads).post(handlers::vinculos::create_payload),
        )
        .route(
            "/{id}",
            get(handlers::vinculos::get_payload)
                .put(handlers::vinculos::update_payload)
                .delete(handlers::vinculos::delete_payload),
        );

    let servidores_routes = Router::new()
        .route(
            "/",
            get(handlers::vinculos::list_servidores).post(handlers::vinculos::create_servidor),
        )
        .route(
            "/{id}",
            get(handlers::vinculos::get_servidor)
                .put(handlers::vinculos::update_servidor)
                .delete(handlers::vinculos::delete_servidor),
        );

    let checkpoints_routes = Router::new()
        .route(
            "/",
            get(handlers::vinculos::list_checkpoints).post(handlers::vinculos::create_checkpoint),
        )
        .route(
            "/{id}",
            get(handlers::vinculos::get_checkpoint)
                .put(handlers::vinculos::update_checkpoint)
                .delete(handlers::vinculos::delete_checkpoint),
        );

    let projetos_routes = Router::new()
        .route(
            "/",
            get(handlers::vinculos::list_projetos).post(handlers::vinculos::create_projeto),
        )
        .route(
            "/{id}",
            get(handlers::vinculos::get_projeto)
                .put(handlers::vinculos::update_projeto)
                .delete(handlers::vinculos::delete_projeto),
        );

    let relatorios_routes = Router::new()
        .route("/aplicacoes/pdf", get(handlers::relatorios::pdf_aplicacoes))
        .route("/aplicacoes/detalhado", get(handlers::relatorios::pdf_aplicacoes_detalhado))
        .route("/aplicacoes/xlsx", get(handlers::relatorios::xlsx_aplicacoes))
        .route("/colaboradores/xlsx", get(handlers::relatorios::xlsx_colaboradores))
        .route("/adrs/pdf", get(handlers::relatorios::pdf_adrs));

    // Combina tudo no router principal. O console roda no navegador, então o
    // CORS fica liberado para qualquer origem.
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/aplicacoes", aplicacoes_routes)
        .nest("/api/colaboradores", colaboradores_routes)
        .nest("/api/slas", slas_routes)
        .nest("/api/tecnologias", tecnologias_routes)
        .nest("/api/capacidades", capacidades_routes)
        .nest("/api/processos", processos_routes)
        .nest("/api/runbooks", runbooks_routes)
        .nest("/api/adrs", adrs_routes)
        .nest("/api/contratos", contratos_routes)
        .nest("/api/payloads", payloads_routes)
        .nest("/api/servidores", servidores_routes)
        .nest("/api/checkpoints", checkpoints_routes)
        .nest("/api/projetos", projetos_routes)
        .nest("/api/relatorios", relatorios_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
