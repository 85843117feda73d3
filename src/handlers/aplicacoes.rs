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
    models::adr::Adr,
    models::aplicacao::{Aplicacao, DadosAplicacao},
    models::checkpoint::Checkpoint,
    models::contrato::Contrato,
    models::payload::Payload,
    models::servidor::Servidor,
};

// GET /api/aplicacoes
#[utoipa::path(
    get,
    path = "/api/aplicacoes",
    tag = "Aplicações",
    params(ParametrosListagem),
    responses(
        (status = 200, description = "Página de aplicações", body = Pagina<Aplicacao>)
    )
)]
pub async fn list_aplicacoes(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let aplicacoes = app_state.aplicacao_service.list().await?;

    let pagina = aplicar(
        aplicacoes,
        &params,
        |a| vec![a.sigla.clone(), a.descricao.clone()],
        chave_aplicacao,
    );

    Ok((StatusCode::OK, Json(pagina)))
}

pub(crate) fn chave_aplicacao(a: &Aplicacao, campo: &str) -> Option<Chave> {
    match campo {
        "sigla" => Some(Chave::texto(&a.sigla)),
        "descricao" => Some(Chave::texto(&a.descricao)),
        "faseCicloVida" => Some(Chave::texto(&rotulo(&a.fase_ciclo_vida))),
        "criticidadeNegocio" => Some(Chave::texto(&rotulo(&a.criticidade_negocio))),
        "numeroUsuarios" => Some(Chave::Inteiro(a.numero_usuarios.unwrap_or(0) as i64)),
        "custoMensal" => Some(Chave::Numero(a.custo_mensal.unwrap_or_default())),
        "dataImplantacao" => Some(Chave::data(a.data_implantacao)),
        _ => None,
    }
}

// GET /api/aplicacoes/{id}
#[utoipa::path(
    get,
    path = "/api/aplicacoes/{id}",
    tag = "Aplicações",
    params(("id" = Uuid, Path, description = "ID da aplicação")),
    responses(
        (status = 200, description = "Aplicação com todas as coleções", body = Aplicacao),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn get_aplicacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let aplicacao = app_state.aplicacao_service.find(id).await?;
    Ok((StatusCode::OK, Json(aplicacao)))
}

// POST /api/aplicacoes
#[utoipa::path(
    post,
    path = "/api/aplicacoes",
    tag = "Aplicações",
    request_body = DadosAplicacao,
    responses(
        (status = 201, description = "Aplicação criada", body = Aplicacao),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "Sigla duplicada")
    )
)]
pub async fn create_aplicacao(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosAplicacao>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let aplicacao = app_state.aplicacao_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(aplicacao)))
}

// PUT /api/aplicacoes/{id}
#[utoipa::path(
    put,
    path = "/api/aplicacoes/{id}",
    tag = "Aplicações",
    params(("id" = Uuid, Path, description = "ID da aplicação")),
    request_body = DadosAplicacao,
    responses(
        (status = 200, description = "Aplicação atualizada", body = Aplicacao),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn update_aplicacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosAplicacao>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let aplicacao = app_state.aplicacao_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(aplicacao)))
}

// DELETE /api/aplicacoes/{id}
#[utoipa::path(
    delete,
    path = "/api/aplicacoes/{id}",
    tag = "Aplicações",
    params(("id" = Uuid, Path, description = "ID da aplicação")),
    responses(
        (status = 204, description = "Aplicação removida"),
        (status = 404, description = "Não encontrada")
    )
)]
pub async fn delete_aplicacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.aplicacao_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// DELETE /api/aplicacoes/{id}/slas/{associacao_id}
// Exclusão lógica: a associação vira 'Inativo' e permanece na coleção.
#[utoipa::path(
    delete,
    path = "/api/aplicacoes/{id}/slas/{associacao_id}",
    tag = "Aplicações",
    params(
        ("id" = Uuid, Path, description = "ID da aplicação"),
        ("associacao_id" = Uuid, Path, description = "ID da associação de SLA")
    ),
    responses(
        (status = 200, description = "Associação inativada", body = Aplicacao),
        (status = 404, description = "Aplicação ou associação não encontrada")
    )
)]
pub async fn inativar_sla_da_aplicacao(
    State(app_state): State<AppState>,
    Path((id, associacao_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let aplicacao = app_state.aplicacao_service.inativar_sla(id, associacao_id).await?;
    Ok((StatusCode::OK, Json(aplicacao)))
}

// --- Sub-recursos buscados à parte pelo assistente e pelos relatórios ---

// GET /api/aplicacoes/{id}/contratos
#[utoipa::path(
    get,
    path = "/api/aplicacoes/{id}/contratos",
    tag = "Aplicações",
    params(("id" = Uuid, Path, description = "ID da aplicação")),
    responses((status = 200, description = "Contratos da aplicação", body = Vec<Contrato>))
)]
pub async fn list_contratos_da_aplicacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let contratos = app_state.vinculos_service.list_contratos_da_aplicacao(id).await?;
    Ok((StatusCode::OK, Json(contratos)))
}

// GET /api/aplicacoes/{id}/payloads
#[utoipa::path(
    get,
    path = "/api/aplicacoes/{id}/payloads",
    tag = "Aplicações",
    params(("id" = Uuid, Path, description = "ID da aplicação")),
    responses((status = 200, description = "Payloads da aplicação", body = Vec<Payload>))
)]
pub async fn list_payloads_da_aplicacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let payloads = app_state.vinculos_service.list_payloads_da_aplicacao(id).await?;
    Ok((StatusCode::OK, Json(payloads)))
}

// GET /api/aplicacoes/{id}/servidores
#[utoipa::path(
    get,
    path = "/api/aplicacoes/{id}/servidores",
    tag = "Aplicações",
    params(("id" = Uuid, Path, description = "ID da aplicação")),
    responses((status = 200, description = "Servidores que hospedam a aplicação", body = Vec<Servidor>))
)]
pub async fn list_servidores_da_aplicacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let servidores = app_state.vinculos_service.list_servidores_da_aplicacao(id).await?;
    Ok((StatusCode::OK, Json(servidores)))
}

// GET /api/aplicacoes/{id}/adrs
#[utoipa::path(
    get,
    path = "/api/aplicacoes/{id}/adrs",
    tag = "Aplicações",
    params(("id" = Uuid, Path, description = "ID da aplicação")),
    responses((status = 200, description = "ADRs vinculadas à aplicação", body = Vec<Adr>))
)]
pub async fn list_adrs_da_aplicacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let adrs = app_state.adr_service.list_by_aplicacao(id).await?;
    Ok((StatusCode::OK, Json(adrs)))
}

// GET /api/aplicacoes/{id}/checkpoints
#[utoipa::path(
    get,
    path = "/api/aplicacoes/{id}/checkpoints",
    tag = "Aplicações",
    params(("id" = Uuid, Path, description = "ID da aplicação")),
    responses((status = 200, description = "Checkpoints da aplicação", body = Vec<Checkpoint>))
)]
pub async fn list_checkpoints_da_aplicacao(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let checkpoints = app_state.vinculos_service.list_checkpoints(Some(id)).await?;
    Ok((StatusCode::OK, Json(checkpoints)))
}
