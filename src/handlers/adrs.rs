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
    models::adr::{Adr, DadosAdr},
};

fn chave_adr(a: &Adr, campo: &str) -> Option<Chave> {
    match campo {
        "sequencia" => Some(Chave::Inteiro(a.sequencia as i64)),
        "descricao" => Some(Chave::texto(&a.descricao)),
        "status" => Some(Chave::texto(&rotulo(&a.status))),
        "dataCriacao" => Some(Chave::data(Some(a.data_criacao))),
        _ => None,
    }
}

// GET /api/adrs
#[utoipa::path(
    get,
    path = "/api/adrs",
    tag = "ADRs",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de ADRs", body = Pagina<Adr>))
)]
pub async fn list_adrs(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let adrs = app_state.adr_service.list().await?;

    let pagina = aplicar(
        adrs,
        &params,
        |a| vec![a.sequencia.to_string(), a.descricao.clone()],
        chave_adr,
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/adrs/{id}
#[utoipa::path(
    get,
    path = "/api/adrs/{id}",
    tag = "ADRs",
    params(("id" = Uuid, Path, description = "ID da ADR")),
    responses(
        (status = 200, description = "ADR", body = Adr),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn get_adr(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let adr = app_state.adr_service.find(id).await?;
    Ok((StatusCode::OK, Json(adr)))
}

// POST /api/adrs
#[utoipa::path(
    post,
    path = "/api/adrs",
    tag = "ADRs",
    request_body = DadosAdr,
    responses(
        (status = 201, description = "ADR criada", body = Adr),
        (status = 409, description = "Sequência duplicada")
    )
)]
pub async fn create_adr(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosAdr>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let adr = app_state.adr_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(adr)))
}

// PUT /api/adrs/{id}
#[utoipa::path(
    put,
    path = "/api/adrs/{id}",
    tag = "ADRs",
    params(("id" = Uuid, Path, description = "ID da ADR")),
    request_body = DadosAdr,
    responses(
        (status = 200, description = "ADR atualizada", body = Adr),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn update_adr(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosAdr>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let adr = app_state.adr_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(adr)))
}

// DELETE /api/adrs/{id}
#[utoipa::path(
    delete,
    path = "/api/adrs/{id}",
    tag = "ADRs",
    params(("id" = Uuid, Path, description = "ID da ADR")),
    responses((status = 204, description = "ADR removida"))
)]
pub async fn delete_adr(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.adr_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
