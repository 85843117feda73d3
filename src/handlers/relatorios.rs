use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    common::error::AppError,
    common::listagem::{Direcao, ParametrosListagem, filtrar, ordenar},
    config::AppState,
    handlers::aplicacoes::chave_aplicacao,
    services::relatorio_service::nome_arquivo,
};

const PDF: &str = "application/pdf";
const XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn resposta_arquivo(bytes: Vec<u8>, content_type: &'static str, nome: String) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{nome}\"")),
        ],
        bytes,
    )
}

// GET /api/relatorios/aplicacoes/pdf
#[utoipa::path(
    get,
    path = "/api/relatorios/aplicacoes/pdf",
    tag = "Relatórios",
    responses((status = 200, description = "PDF resumido das aplicações", content_type = "application/pdf"))
)]
pub async fn pdf_aplicacoes(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = app_state.relatorio_service.pdf_aplicacoes().await?;
    Ok(resposta_arquivo(bytes, PDF, nome_arquivo("aplicacoes", "pdf")))
}

// GET /api/relatorios/aplicacoes/detalhado
#[utoipa::path(
    get,
    path = "/api/relatorios/aplicacoes/detalhado",
    tag = "Relatórios",
    responses((status = 200, description = "PDF detalhado, uma aplicação por página", content_type = "application/pdf"))
)]
pub async fn pdf_aplicacoes_detalhado(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = app_state.relatorio_service.pdf_aplicacoes_detalhado().await?;
    Ok(resposta_arquivo(bytes, PDF, nome_arquivo("aplicacoes_detalhado", "pdf")))
}

// GET /api/relatorios/aplicacoes/xlsx
// A planilha respeita o filtro e a ordenação da tela, sem paginação.
#[utoipa::path(
    get,
    path = "/api/relatorios/aplicacoes/xlsx",
    tag = "Relatórios",
    params(ParametrosListagem),
    responses((status = 200, description = "Planilha das aplicações filtradas/ordenadas"))
)]
pub async fn xlsx_aplicacoes(
    State(app_state): State<AppState>,
    Query(params): Query<ParametrosListagem>,
) -> Result<impl IntoResponse, AppError> {
    let aplicacoes = app_state.aplicacao_service.list().await?;

    let busca = params.busca.as_deref().unwrap_or("");
    let mut filtradas = filtrar(aplicacoes, busca, |a| {
        vec![a.sigla.clone(), a.descricao.clone()]
    });
    if let Some(campo) = params.ordenar_por.as_deref() {
        if filtradas.first().map(|a| chave_aplicacao(a, campo).is_some()).unwrap_or(false) {
            let direcao = params.direcao.unwrap_or(Direcao::Asc);
            ordenar(&mut filtradas, direcao, |a| {
                chave_aplicacao(a, campo).expect("campo conferido acima")
            });
        }
    }

    let bytes = app_state.relatorio_service.xlsx_aplicacoes(&filtradas)?;
    Ok(resposta_arquivo(bytes, XLSX, nome_arquivo("aplicacoes", "xlsx")))
}

// GET /api/relatorios/colaboradores/xlsx
#[utoipa::path(
    get,
    path = "/api/relatorios/colaboradores/xlsx",
    tag = "Relatórios",
    responses((status = 200, description = "Planilha dos colaboradores"))
)]
pub async fn xlsx_colaboradores(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let colaboradores = app_state.colaborador_service.list().await?;
    let bytes = app_state.relatorio_service.xlsx_colaboradores(&colaboradores)?;
    Ok(resposta_arquivo(bytes, XLSX, nome_arquivo("colaboradores", "xlsx")))
}

// GET /api/relatorios/adrs/pdf
#[utoipa::path(
    get,
    path = "/api/relatorios/adrs/pdf",
    tag = "Relatórios",
    responses((status = 200, description = "PDF das decisões arquiteturais", content_type = "application/pdf"))
)]
pub async fn pdf_adrs(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bytes = app_state.relatorio_service.pdf_adrs().await?;
    Ok(resposta_arquivo(bytes, PDF, nome_arquivo("adrs", "pdf")))
}
