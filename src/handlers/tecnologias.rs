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
    models::tecnologia::{DadosTecnologia, Tecnologia},
};

fn chave_tecnologia(t: &Tecnologia, campo: &str) -> Option<Chave> {
    match campo {
        "sigla" => Some(Chave::texto(&t.sigla)),
        "nome" => Some(Chave::texto(&t.nome)),
        "categoria" => Some(Chave::texto(&rotulo(&t.categoria))),
        "status" => Some(Chave::texto(&rotulo(&t.status))),
        "dataFimSuporteEos" => Some(Chave::data(t.data_fim_suporte_eos)),
        _ => None,
    }
}

// GET /api/tecnologias
#[utoipa::path(
    get,
    path = "/api/tecnologias",
    tag = "Tecnologias",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de tecnologias", body = Pagina<Tecnologia>))
)]
pub async fn list_tecnologias(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let tecnologias = app_state.catalogo_service.list_tecnologias().await?;

    let pagina = aplicar(
        tecnologias,
        &params,
        |t| vec![t.sigla.clone(), t.nome.clone(), t.fornecedor_fabricante.clone()],
        chave_tecnologia,
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/tecnologias/{id}
#[utoipa::path(
    get,
    path = "/api/tecnologias/{id}",
    tag = "Tecnologias",
    params(("id" = Uuid, Path, description = "ID da tecnologia")),
    responses(
        (status = 200, description = "Tecnologia", body = Tecnologia),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn get_tecnologia(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let tecnologia = app_state.catalogo_service.find_tecnologia(id).await?;
    Ok((StatusCode::OK, Json(tecnologia)))
}

// POST /api/tecnologias
#[utoipa::path(
    post,
    path = "/api/tecnologias",
    tag = "Tecnologias",
    request_body = DadosTecnologia,
    responses(
        (status = 201, description = "Tecnologia criada", body = Tecnologia),
        (status = 409, description = "Sigla duplicada")
    )
)]
pub async fn create_tecnologia(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosTecnologia>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let tecnologia = app_state.catalogo_service.create_tecnologia(&payload).await?;
    Ok((StatusCode::CREATED, Json(tecnologia)))
}

// PUT /api/tecnologias/{id}
#[utoipa::path(
    put,
    path = "/api/tecnologias/{id}",
    tag = "Tecnologias",
    params(("id" = Uuid, Path, description = "ID da tecnologia")),
    request_body = DadosTecnologia,
    responses(
        (status = 200, description = "Tecnologia atualizada", body = Tecnologia),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn update_tecnologia(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosTecnologia>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let tecnologia = app_state.catalogo_service.update_tecnologia(id, &payload).await?;
    Ok((StatusCode::OK, Json(tecnologia)))
}

// DELETE /api/tecnologias/{id}
#[utoipa::path(
    delete,
    path = "/api/tecnologias/{id}",
    tag = "Tecnologias",
    params(("id" = Uuid, Path, description = "ID da tecnologia")),
    responses(
        (status = 204, description = "Tecnologia removida"),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn delete_tecnologia(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalogo_service.delete_tecnologia(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
