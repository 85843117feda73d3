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
    common::listagem::{Chave, Pagina, ParametrosListagem, aplicar},
    config::AppState,
    models::colaborador::{Colaborador, DadosColaborador},
};

fn chave_colaborador(c: &Colaborador, campo: &str) -> Option<Chave> {
    match campo {
        "matricula" => Some(Chave::texto(&c.matricula)),
        "nome" => Some(Chave::texto(&c.nome)),
        "setor" => Some(Chave::texto(&c.setor)),
        "dataAdmissao" => Some(Chave::data(Some(c.data_admissao))),
        _ => None,
    }
}

// GET /api/colaboradores
#[utoipa::path(
    get,
    path = "/api/colaboradores",
    tag = "Colaboradores",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de colaboradores", body = Pagina<Colaborador>))
)]
pub async fn list_colaboradores(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let colaboradores = app_state.colaborador_service.list().await?;

    let pagina = aplicar(
        colaboradores,
        &params,
        |c| vec![c.matricula.clone(), c.nome.clone(), c.setor.clone()],
        chave_colaborador,
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/colaboradores/{id}
#[utoipa::path(
    get,
    path = "/api/colaboradores/{id}",
    tag = "Colaboradores",
    params(("id" = Uuid, Path, description = "ID do colaborador")),
    responses(
        (status = 200, description = "Colaborador", body = Colaborador),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn get_colaborador(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let colaborador = app_state.colaborador_service.find(id).await?;
    Ok((StatusCode::OK, Json(colaborador)))
}

// POST /api/colaboradores
#[utoipa::path(
    post,
    path = "/api/colaboradores",
    tag = "Colaboradores",
    request_body = DadosColaborador,
    responses(
        (status = 201, description = "Colaborador criado", body = Colaborador),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Matrícula duplicada")
    )
)]
pub async fn create_colaborador(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosColaborador>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let colaborador = app_state.colaborador_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(colaborador)))
}

// PUT /api/colaboradores/{id}
#[utoipa::path(
    put,
    path = "/api/colaboradores/{id}",
    tag = "Colaboradores",
    params(("id" = Uuid, Path, description = "ID do colaborador")),
    request_body = DadosColaborador,
    responses(
        (status = 200, description = "Colaborador atualizado", body = Colaborador),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn update_colaborador(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosColaborador>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let colaborador = app_state.colaborador_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(colaborador)))
}

// DELETE /api/colaboradores/{id}
#[utoipa::path(
    delete,
    path = "/api/colaboradores/{id}",
    tag = "Colaboradores",
    params(("id" = Uuid, Path, description = "ID do colaborador")),
    responses(
        (status = 204, description = "Colaborador removido"),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn delete_colaborador(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.colaborador_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
