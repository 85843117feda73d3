use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    common::listagem::{Chave, Pagina, ParametrosListagem, aplicar, rotulo},
    config::AppState,
    models::checkpoint::{Checkpoint, DadosCheckpoint},
    models::contrato::{Contrato, DadosContrato},
    models::payload::{DadosPayload, Payload},
    models::projeto::{DadosProjeto, Projeto},
    models::servidor::{DadosServidor, Servidor},
};

// Recursos que o assistente grava na hora, por endpoint próprio: contratos,
// payloads, servidores, checkpoints e projetos gerados.

// =============================================================================
//  CONTRATOS
// =============================================================================

// GET /api/contratos
#[utoipa::path(
    get,
    path = "/api/contratos",
    tag = "Contratos",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de contratos", body = Pagina<Contrato>))
)]
pub async fn list_contratos(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let contratos = app_state.vinculos_service.list_contratos().await?;

    let pagina = aplicar(
        contratos,
        &params,
        |c| vec![c.numero_contrato.clone()],
        |c, campo| match campo {
            "numeroContrato" => Some(Chave::texto(&c.numero_contrato)),
            "dataVigenciaInicial" => Some(Chave::data(Some(c.data_vigencia_inicial))),
            "dataVigenciaFinal" => Some(Chave::data(Some(c.data_vigencia_final))),
            "status" => Some(Chave::texto(&rotulo(&c.status))),
            _ => None,
        },
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/contratos/{id}
#[utoipa::path(
    get,
    path = "/api/contratos/{id}",
    tag = "Contratos",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses(
        (status = 200, description = "Contrato", body = Contrato),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn get_contrato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let contrato = app_state.vinculos_service.find_contrato(id).await?;
    Ok((StatusCode::OK, Json(contrato)))
}

// POST /api/contratos
#[utoipa::path(
    post,
    path = "/api/contratos",
    tag = "Contratos",
    request_body = DadosContrato,
    responses((status = 201, description = "Contrato criado", body = Contrato))
)]
pub async fn create_contrato(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosContrato>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let contrato = app_state.vinculos_service.create_contrato(&payload).await?;
    Ok((StatusCode::CREATED, Json(contrato)))
}

// PUT /api/contratos/{id}
#[utoipa::path(
    put,
    path = "/api/contratos/{id}",
    tag = "Contratos",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    request_body = DadosContrato,
    responses(
        (status = 200, description = "Contrato atualizado", body = Contrato),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn update_contrato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosContrato>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let contrato = app_state.vinculos_service.update_contrato(id, &payload).await?;
    Ok((StatusCode::OK, Json(contrato)))
}

// DELETE /api/contratos/{id}
#[utoipa::path(
    delete,
    path = "/api/contratos/{id}",
    tag = "Contratos",
    params(("id" = Uuid, Path, description = "ID do contrato")),
    responses((status = 204, description = "Contrato removido"))
)]
pub async fn delete_contrato(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vinculos_service.delete_contrato(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  PAYLOADS (ESPECIFICAÇÕES OPENAPI)
// =============================================================================

// GET /api/payloads
#[utoipa::path(
    get,
    path = "/api/payloads",
    tag = "Payloads",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de payloads", body = Pagina<Payload>))
)]
pub async fn list_payloads(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let payloads = app_state.vinculos_service.list_payloads().await?;

    let pagina = aplicar(
        payloads,
        &params,
        |p| vec![p.sigla.clone(), p.definicao.clone()],
        |p, campo| match campo {
            "sigla" => Some(Chave::texto(&p.sigla)),
            "definicao" => Some(Chave::texto(&p.definicao)),
            "formatoArquivo" => Some(Chave::texto(&rotulo(&p.formato_arquivo))),
            "dataInicio" => Some(Chave::data(Some(p.data_inicio))),
            _ => None,
        },
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/payloads/{id}
#[utoipa::path(
    get,
    path = "/api/payloads/{id}",
    tag = "Payloads",
    params(("id" = Uuid, Path, description = "ID do payload")),
    responses(
        (status = 200, description = "Payload", body = Payload),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn get_payload(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let payload = app_state.vinculos_service.find_payload(id).await?;
    Ok((StatusCode::OK, Json(payload)))
}

// POST /api/payloads
#[utoipa::path(
    post,
    path = "/api/payloads",
    tag = "Payloads",
    request_body = DadosPayload,
    responses((status = 201, description = "Payload criado e validado", body = Payload))
)]
pub async fn create_payload(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let criado = app_state.vinculos_service.create_payload(&payload).await?;
    Ok((StatusCode::CREATED, Json(criado)))
}

// PUT /api/payloads/{id}
#[utoipa::path(
    put,
    path = "/api/payloads/{id}",
    tag = "Payloads",
    params(("id" = Uuid, Path, description = "ID do payload")),
    request_body = DadosPayload,
    responses(
        (status = 200, description = "Payload atualizado e revalidado", body = Payload),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn update_payload(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let atualizado = app_state.vinculos_service.update_payload(id, &payload).await?;
    Ok((StatusCode::OK, Json(atualizado)))
}

// DELETE /api/payloads/{id}
#[utoipa::path(
    delete,
    path = "/api/payloads/{id}",
    tag = "Payloads",
    params(("id" = Uuid, Path, description = "ID do payload")),
    responses((status = 204, description = "Payload removido"))
)]
pub async fn delete_payload(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vinculos_service.delete_payload(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  SERVIDORES
// =============================================================================

// GET /api/servidores
#[utoipa::path(
    get,
    path = "/api/servidores",
    tag = "Servidores",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de servidores", body = Pagina<Servidor>))
)]
pub async fn list_servidores(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let servidores = app_state.vinculos_service.list_servidores().await?;

    let pagina = aplicar(
        servidores,
        &params,
        |s| vec![s.sigla.clone(), s.hostname.clone(), s.provedor.clone()],
        |s, campo| match campo {
            "sigla" => Some(Chave::texto(&s.sigla)),
            "hostname" => Some(Chave::texto(&s.hostname)),
            "ambiente" => Some(Chave::texto(&rotulo(&s.ambiente))),
            "status" => Some(Chave::texto(&rotulo(&s.status))),
            _ => None,
        },
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/servidores/{id}
#[utoipa::path(
    get,
    path = "/api/servidores/{id}",
    tag = "Servidores",
    params(("id" = Uuid, Path, description = "ID do servidor")),
    responses(
        (status = 200, description = "Servidor", body = Servidor),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn get_servidor(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let servidor = app_state.vinculos_service.find_servidor(id).await?;
    Ok((StatusCode::OK, Json(servidor)))
}

// POST /api/servidores
#[utoipa::path(
    post,
    path = "/api/servidores",
    tag = "Servidores",
    request_body = DadosServidor,
    responses((status = 201, description = "Servidor criado", body = Servidor))
)]
pub async fn create_servidor(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosServidor>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let servidor = app_state.vinculos_service.create_servidor(&payload).await?;
    Ok((StatusCode::CREATED, Json(servidor)))
}

// PUT /api/servidores/{id}
#[utoipa::path(
    put,
    path = "/api/servidores/{id}",
    tag = "Servidores",
    params(("id" = Uuid, Path, description = "ID do servidor")),
    request_body = DadosServidor,
    responses(
        (status = 200, description = "Servidor atualizado", body = Servidor),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn update_servidor(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosServidor>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let servidor = app_state.vinculos_service.update_servidor(id, &payload).await?;
    Ok((StatusCode::OK, Json(servidor)))
}

// DELETE /api/servidores/{id}
#[utoipa::path(
    delete,
    path = "/api/servidores/{id}",
    tag = "Servidores",
    params(("id" = Uuid, Path, description = "ID do servidor")),
    responses((status = 204, description = "Servidor removido"))
)]
pub async fn delete_servidor(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vinculos_service.delete_servidor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  CHECKPOINTS
// =============================================================================

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FiltroCheckpoints {
    /// Limita aos checkpoints de uma aplicação
    pub aplicacao_id: Option<Uuid>,
}

// GET /api/checkpoints
#[utoipa::path(
    get,
    path = "/api/checkpoints",
    tag = "Checkpoints",
    params(FiltroCheckpoints),
    responses((status = 200, description = "Checkpoints", body = Vec<Checkpoint>))
)]
pub async fn list_checkpoints(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroCheckpoints>,
) -> Result<impl IntoResponse, AppError> {
    let checkpoints = app_state.vinculos_service.list_checkpoints(filtro.aplicacao_id).await?;
    Ok((StatusCode::OK, Json(checkpoints)))
}

// GET /api/checkpoints/{id}
#[utoipa::path(
    get,
    path = "/api/checkpoints/{id}",
    tag = "Checkpoints",
    params(("id" = Uuid, Path, description = "ID do checkpoint")),
    responses(
        (status = 200, description = "Checkpoint", body = Checkpoint),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn get_checkpoint(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let checkpoint = app_state.vinculos_service.find_checkpoint(id).await?;
    Ok((StatusCode::OK, Json(checkpoint)))
}

// POST /api/checkpoints
#[utoipa::path(
    post,
    path = "/api/checkpoints",
    tag = "Checkpoints",
    request_body = DadosCheckpoint,
    responses((status = 201, description = "Checkpoint criado", body = Checkpoint))
)]
pub async fn create_checkpoint(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosCheckpoint>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let checkpoint = app_state.vinculos_service.create_checkpoint(&payload).await?;
    Ok((StatusCode::CREATED, Json(checkpoint)))
}

// PUT /api/checkpoints/{id}
#[utoipa::path(
    put,
    path = "/api/checkpoints/{id}",
    tag = "Checkpoints",
    params(("id" = Uuid, Path, description = "ID do checkpoint")),
    request_body = DadosCheckpoint,
    responses(
        (status = 200, description = "Checkpoint atualizado", body = Checkpoint),
        (status = 400, description = "Checkpoint finalizado não aceita edição"),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn update_checkpoint(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosCheckpoint>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let checkpoint = app_state.vinculos_service.update_checkpoint(id, &payload).await?;
    Ok((StatusCode::OK, Json(checkpoint)))
}

// DELETE /api/checkpoints/{id}
#[utoipa::path(
    delete,
    path = "/api/checkpoints/{id}",
    tag = "Checkpoints",
    params(("id" = Uuid, Path, description = "ID do checkpoint")),
    responses((status = 204, description = "Checkpoint removido"))
)]
pub async fn delete_checkpoint(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vinculos_service.delete_checkpoint(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
//  PROJETOS GERADOS
// =============================================================================

// GET /api/projetos
#[utoipa::path(
    get,
    path = "/api/projetos",
    tag = "Projetos",
    params(ParametrosListagem),
    responses((status = 200, description = "Página de projetos", body = Pagina<Projeto>))
)]
pub async fn list_projetos(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let projetos = app_state.vinculos_service.list_projetos().await?;

    let pagina = aplicar(
        projetos,
        &params,
        |p| vec![p.produto.clone(), p.projeto.clone(), p.nome_time.clone()],
        |p, campo| match campo {
            "produto" => Some(Chave::texto(&p.produto)),
            "projeto" => Some(Chave::texto(&p.projeto)),
            "dataInicial" => Some(Chave::data(Some(p.data_inicial))),
            "status" => Some(Chave::texto(&rotulo(&p.status))),
            _ => None,
        },
    );

    Ok((StatusCode::OK, Json(pagina)))
}

// GET /api/projetos/{id}
#[utoipa::path(
    get,
    path = "/api/projetos/{id}",
    tag = "Projetos",
    params(("id" = Uuid, Path, description = "ID do projeto")),
    responses(
        (status = 200, description = "Projeto", body = Projeto),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn get_projeto(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let projeto = app_state.vinculos_service.find_projeto(id).await?;
    Ok((StatusCode::OK, Json(projeto)))
}

// POST /api/projetos
#[utoipa::path(
    post,
    path = "/api/projetos",
    tag = "Projetos",
    request_body = DadosProjeto,
    responses((status = 201, description = "Projeto registrado", body = Projeto))
)]
pub async fn create_projeto(
    State(app_state): State<AppState>,
    Json(payload): Json<DadosProjeto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let projeto = app_state.vinculos_service.create_projeto(&payload).await?;
    Ok((StatusCode::CREATED, Json(projeto)))
}

// PUT /api/projetos/{id}
#[utoipa::path(
    put,
    path = "/api/projetos/{id}",
    tag = "Projetos",
    params(("id" = Uuid, Path, description = "ID do projeto")),
    request_body = DadosProjeto,
    responses(
        (status = 200, description = "Projeto atualizado", body = Projeto),
        (status = 404, description = "Não encontrado")
    )
)]
pub async fn update_projeto(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DadosProjeto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let projeto = app_state.vinculos_service.update_projeto(id, &payload).await?;
    Ok((StatusCode::OK, Json(projeto)))
}

// DELETE /api/projetos/{id}
#[utoipa::path(
    delete,
    path = "/api/projetos/{id}",
    tag = "Projetos",
    params(("id" = Uuid, Path, description = "ID do projeto")),
    responses((status = 204, description = "Projeto removido"))
)]
pub async fn delete_projeto(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.vinculos_service.delete_projeto(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
