use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    common::listagem::{Chave, Pagina, ParametrosListagem, aplicar, rotulo},
    config::AppState,
    models::capacidade::{CapacidadeNegocio, DadosCapacidade},
    models::processo::{DadosProcesso, ProcessoNegocio},
    models::runbook::{DadosRunbook, Runbook},
};

// =============================================================================
//  CAPACIDADES DE NEGÓCIO
// =============================================================================

// GET /api/capacidades
#[utoipa::path(
    get,
    path = "/api/capacidades",
    tag = "Capacidades",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de capacidades", body = Pagina<CapacidadeNegocio>))
)]
pub async fn list_capacidades(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let capacidades = app_state.catalogo_service.list_capacidades().await?;

    let pagina = aplicar(
        capacidades,
        &params,
        |c| vec![c.sigla.clone(), c.nome.clone(), c.descricao.clone()],
        |c, campo| match campo {
            "sigla" => Some(Chave::texto(&c.sigla)),
            "nome" => Some(Chave::texto(&c.nome)),
            "nivel" => Some(Chave::texto(&rotulo(&c.nivel))),
            "categoria" => Some(Chave::texto(&rotulo(&c.categoria))),
            _ => None,
        },
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/capacidades/{id}
#[utoipa::path(
    get,
    path = "/api/capacidades/{id}",
    tag = "Capacidades",
    params(("id" = Uuid, Path, description = "ID da capacidade")),
    responses(
        (status = 200, description = "Capacidade", body = CapacidadeNegocio),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn get_capacidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let capacidade = app_state.catalogo_service.find_capacidade(id).await?;
    Ok((StatusCode::OK, Json(capacidade)))
}

// POST /api/capacidades
#[utoipa::path(
    post,
    path = "/api/capacidades",
    tag = "Capacidades",
    request_body = DadosCapacidade,
    responses((status = 201, description = "Capacidade criada", body = CapacidadeNegocio))
)]
pub async fn create_capacidade(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosCapacidade>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let capacidade = app_state.catalogo_service.create_capacidade(&payload).await?;
    Ok((StatusCode::CREATED, Json(capacidade)))
}

// PUT /api/capacidades/{id}
#[utoipa::path(
    put,
    path = "/api/capacidades/{id}",
    tag = "Capacidades",
    params(("id" = Uuid, Path, description = "ID da capacidade")),
    request_body = DadosCapacidade,
    responses(
        (status = 200, description = "Capacidade atualizada", body = CapacidadeNegocio),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn update_capacidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosCapacidade>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let capacidade = app_state.catalogo_service.update_capacidade(id, &payload).await?;
    Ok((StatusCode::OK, Json(capacidade)))
}

// DELETE /api/capacidades/{id}
#[utoipa::path(
    delete,
    path = "/api/capacidades/{id}",
    tag = "Capacidades",
    params(("id" = Uuid, Path, description = "ID da capacidade")),
    responses((status = 204, description = "Capacidade removida"))
)]
pub async fn delete_capacidade(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalogo_service.delete_capacidade(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  PROCESSOS DE NEGÓCIO
// =============================================================================

// GET /api/processos
#[utoipa::path(
    get,
    path = "/api/processos",
    tag = "Processos",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de processos", body = Pagina<ProcessoNegocio>))
)]
pub async fn list_processos(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let processos = app_state.catalogo_service.list_processos().await?;

    let pagina = aplicar(
        processos,
        &params,
        |p| vec![p.identificacao.clone(), p.descricao.clone(), p.area_responsavel.clone()],
        |p, campo| match campo {
            "identificacao" => Some(Chave::texto(&p.identificacao)),
            "areaResponsavel" => Some(Chave::texto(&p.area_responsavel)),
            "complexidade" => Some(Chave::texto(&rotulo(&p.complexidade))),
            "duracaoMedia" => Some(Chave::Inteiro(p.duracao_media as i64)),
            _ => None,
        },
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/processos/{id}
#[utoipa::path(
    get,
    path = "/api/processos/{id}",
    tag = "Processos",
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses(
        (status = 200, description = "Processo", body = ProcessoNegocio),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn get_processo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let processo = app_state.catalogo_service.find_processo(id).await?;
    Ok((StatusCode::OK, Json(processo)))
}

// POST /api/processos
#[utoipa::path(
    post,
    path = "/api/processos",
    tag = "Processos",
    request_body = DadosProcesso,
    responses((status = 201, description = "Processo criado", body = ProcessoNegocio))
)]
pub async fn create_processo(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosProcesso>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let processo = app_state.catalogo_service.create_processo(&payload).await?;
    Ok((StatusCode::CREATED, Json(processo)))
}

// PUT /api/processos/{id}
#[utoipa::path(
    put,
    path = "/api/processos/{id}",
    tag = "Processos",
    params(("id" = Uuid, Path, description = "ID do processo")),
    request_body = DadosProcesso,
    responses(
        (status = 200, description = "Processo atualizado", body = ProcessoNegocio),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn update_processo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosProcesso>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let processo = app_state.catalogo_service.update_processo(id, &payload).await?;
    Ok((StatusCode::OK, Json(processo)))
}

// DELETE /api/processos/{id}
#[utoipa::path(
    delete,
    path = "/api/processos/{id}",
    tag = "Processos",
    params(("id" = Uuid, Path, description = "ID do processo")),
    responses((status = 204, description = "Processo removido"))
)]
pub async fn delete_processo(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalogo_service.delete_processo(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  RUNBOOKS
// =============================================================================

// GET /api/runbooks
#[utoipa::path(
    get,
    path = "/api/runbooks",
    tag = "Runbooks",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de runbooks", body = Pagina<Runbook>))
)]
pub async fn list_runbooks(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let runbooks = app_state.catalogo_service.list_runbooks().await?;

    let pagina = aplicar(
        runbooks,
        &params,
        |r| vec![r.sigla.clone(), r.descricao_resumida.clone(), r.finalidade.clone()],
        |r, campo| match campo {
            "sigla" => Some(Chave::texto(&r.sigla)),
            "descricaoResumida" => Some(Chave::texto(&r.descricao_resumida)),
            "tipoRunbook" => Some(Chave::texto(&rotulo(&r.tipo_runbook))),
            _ => None,
        },
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/runbooks/{id}
#[utoipa::path(
    get,
    path = "/api/runbooks/{id}",
    tag = "Runbooks",
    params(("id" = Uuid, Path, description = "ID do runbook")),
    responses(
        (status = 200, description = "Runbook", body = Runbook),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn get_runbook(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let runbook = app_state.catalogo_service.find_runbook(id).await?;
    Ok((StatusCode::OK, Json(runbook)))
}

// POST /api/runbooks
#[utoipa::path(
    post,
    path = "/api/runbooks",
    tag = "Runbooks",
    request_body = DadosRunbook,
    responses((status = 201, description = "Runbook criado", body = Runbook))
)]
pub async fn create_runbook(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosRunbook>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let runbook = app_state.catalogo_service.create_runbook(&payload).await?;
    Ok((StatusCode::CREATED, Json(runbook)))
}

// PUT /api/runbooks/{id}
#[utoipa::path(
    put,
    path = "/api/runbooks/{id}",
    tag = "Runbooks",
    params(("id" = Uuid, Path, description = "ID do runbook")),
    request_body = DadosRunbook,
    responses(
        (status = 200, description = "Runbook atualizado", body = Runbook),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn update_runbook(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosRunbook>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let runbook = app_state.catalogo_service.update_runbook(id, &payload).await?;
    Ok((StatusCode::OK, Json(runbook)))
}

// DELETE /api/runbooks/{id}
#[utoipa::path(
    delete,
    path = "/api/runbooks/{id}",
    tag = "Runbooks",
    params(("id" = Uuid, Path, description = "ID do runbook")),
    responses((status = 204, description = "Runbook removido"))
)]
pub async fn delete_runbook(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalogo_service.delete_runbook(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
