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
    models::sla::{DadosSla, Sla},
};

fn chave_sla(s: &Sla, campo: &str) -> Option<Chave> {
    match campo {
        "sigla" => Some(Chave::texto(&s.sigla)),
        "descricao" => Some(Chave::texto(&s.descricao)),
        "tipoSLA" => Some(Chave::texto(&rotulo(&s.tipo_sla))),
        "dataInicio" => Some(Chave::data(Some(s.data_inicio))),
        "status" => Some(Chave::texto(&rotulo(&s.status))),
        _ => None,
    }
}

// GET /api/slas
#[utoipa::path(
    get,
    path = "/api/slas",
    tag = "SLAs",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de SLAs", body = Pagina<Sla>))
)]
pub async fn list_slas(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let slas = app_state.sla_service.list().await?;

    let pagina = aplicar(
        slas,
        &params,
        |s| vec![s.sigla.clone(), s.descricao.clone(), rotulo(&s.tipo_sla)],
        chave_sla,
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/slas/{id}
#[utoipa::path(
    get,
    path = "/api/slas/{id}",
    tag = "SLAs",
    params(("id" = Uuid, Path, description = "ID do SLA")),
    responses(
        (status = 200, description = "SLA", body = Sla),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn get_sla(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let sla = app_state.sla_service.find(id).await?;
    Ok((StatusCode::OK, Json(sla)))
}

// POST /api/slas
#[utoipa::path(
    post,
    path = "/api/slas",
    tag = "SLAs",
    request_body = DadosSla,
    responses(
        (status = 201, description = "SLA criado", body = Sla),
        (status = 400, description = "Dados inválidos ou detalhe de outro tipo")
    )
)]
pub async fn create_sla(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosSla>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sla = app_state.sla_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(sla)))
}

// PUT /api/slas/{id}
#[utoipa::path(
    put,
    path = "/api/slas/{id}",
    tag = "SLAs",
    params(("id" = Uuid, Path, description = "ID do SLA")),
    request_body = DadosSla,
    responses(
        (status = 200, description = "SLA atualizado", body = Sla),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn update_sla(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosSla>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let sla = app_state.sla_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(sla)))
}

// DELETE /api/slas/{id}
#[utoipa::path(
    delete,
    path = "/api/slas/{id}",
    tag = "SLAs",
    params(("id" = Uuid, Path, description = "ID do SLA")),
    responses(
        (status = 204, description = "SLA removido"),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn delete_sla(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.sla_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
