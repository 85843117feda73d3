use std::collections::HashMap;

use chrono::Utc;
use genpdf::{Element, elements, style};
use rust_xlsxwriter::{Format, Workbook};
use uuid::Uuid;

use crate::{
    common::{datas, error::AppError},
    db::{
        AdrRepository, AplicacaoRepository, CatalogoRepository, CheckpointRepository,
        ColaboradorRepository, ContratoRepository, PayloadRepository, ServidorRepository,
        SlaRepository,
    },
    models::aplicacao::Aplicacao,
    models::colaborador::Colaborador,
};

// Relatórios em PDF e planilha. Em vez de cada relatório carregar o próprio
// cursor de página, as telas viram uma lista de seções declarativas
// ({titulo, colunas, linhas}) e um único renderizador cuida da quebra de
// página e da numeração.

/// Uma seção tabular do relatório. Sem linhas, o renderizador imprime o
/// marcador "Nenhum registro encontrado." no lugar da tabela.
#[derive(Debug, Clone, PartialEq)]
pub struct Secao {
    pub titulo: String,
    pub colunas: Vec<String>,
    pub linhas: Vec<Vec<String>>,
}

/// Um bloco por entidade raiz (cada aplicação começa em página nova).
#[derive(Debug, Clone)]
pub struct Bloco {
    pub cabecalho: String,
    pub subtitulo: Option<String>,
    pub secoes: Vec<Secao>,
}

#[derive(Clone)]
pub struct RelatorioService {
    aplicacoes: AplicacaoRepository,
    colaboradores: ColaboradorRepository,
    slas: SlaRepository,
    catalogo: CatalogoRepository,
    adrs: AdrRepository,
    contratos: ContratoRepository,
    payloads: PayloadRepository,
    servidores: ServidorRepository,
    checkpoints: CheckpointRepository,
}

impl RelatorioService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        aplicacoes: AplicacaoRepository,
        colaboradores: ColaboradorRepository,
        slas: SlaRepository,
        catalogo: CatalogoRepository,
        adrs: AdrRepository,
        contratos: ContratoRepository,
        payloads: PayloadRepository,
        servidores: ServidorRepository,
        checkpoints: CheckpointRepository,
    ) -> Self {
        Self {
            aplicacoes,
            colaboradores,
            slas,
            catalogo,
            adrs,
            contratos,
            payloads,
            servidores,
            checkpoints,
        }
    }

    /// Relatório resumido: uma tabela com todas as aplicações.
    pub async fn pdf_aplicacoes(&self) -> Result<Vec<u8>, AppError> {
        let aplicacoes = self.aplicacoes.list_all().await?;

        let secao = secao_resumo_aplicacoes(&aplicacoes);
        let bloco = Bloco {
            cabecalho: "Relatório de Aplicações".to_string(),
            subtitulo: Some(format!("Total de aplicações: {}", aplicacoes.len())),
            secoes: vec![secao],
        };

        renderizar_pdf("Relatório de Aplicações", &[bloco])
    }

    /// Relatório detalhado: um bloco por aplicação, com as coleções do
    /// documento mais as buscas por aplicação (contratos, ADRs, servidores,
    /// payloads, checkpoints) — cada busca é aguardada em sequência e uma
    /// falha isolada vira seção vazia, nunca aborta o relatório.
    pub async fn pdf_aplicacoes_detalhado(&self) -> Result<Vec<u8>, AppError> {
        let aplicacoes = self.aplicacoes.list_all().await?;

        // Catálogos para resolver os nomes exibidos; falha vira mapa vazio.
        let tecnologias = nomes(self.catalogo.list_tecnologias().await, |t| (t.id, t.sigla.clone()));
        let capacidades = nomes(self.catalogo.list_capacidades().await, |c| (c.id, c.sigla.clone()));
        let processos =
            nomes(self.catalogo.list_processos().await, |p| (p.id, p.identificacao.clone()));
        let runbooks = nomes(self.catalogo.list_runbooks().await, |r| (r.id, r.sigla.clone()));
        let slas = nomes(self.slas.list_all().await, |s| (s.id, s.sigla.clone()));
        let colaboradores =
            nomes(self.colaboradores.list_all().await, |c| (c.id, c.nome.clone()));
        let siglas_aplicacoes: HashMap<Uuid, String> =
            aplicacoes.iter().map(|a| (a.id, a.sigla.clone())).collect();

        let mut blocos = Vec::with_capacity(aplicacoes.len());
        for aplicacao in &aplicacoes {
            let mut secoes = vec![
                secao_tecnologias(aplicacao, &tecnologias),
                secao_ambientes(aplicacao),
                secao_capacidades(aplicacao, &capacidades),
                secao_processos(aplicacao, &processos),
                secao_integracoes(aplicacao, &siglas_aplicacoes),
                secao_slas(aplicacao, &slas),
                secao_runbooks(aplicacao, &runbooks),
                secao_squads(aplicacao, &colaboradores),
            ];

            secoes.push(secao_contratos(
                tolerar(self.contratos.list_by_aplicacao(aplicacao.id).await, "contratos", &aplicacao.sigla),
            ));
            secoes.push(secao_adrs(
                tolerar(self.adrs.list_by_aplicacao(aplicacao.id).await, "ADRs", &aplicacao.sigla),
            ));
            secoes.push(secao_servidores(
                tolerar(self.servidores.list_by_aplicacao(aplicacao.id).await, "servidores", &aplicacao.sigla),
            ));
            secoes.push(secao_payloads(
                tolerar(self.payloads.list_by_aplicacao(aplicacao.id).await, "payloads", &aplicacao.sigla),
            ));
            secoes.push(secao_checkpoints(
                tolerar(self.checkpoints.list_by_aplicacao(aplicacao.id).await, "checkpoints", &aplicacao.sigla),
            ));

            blocos.push(Bloco {
                cabecalho: format!("{} — {}", aplicacao.sigla, aplicacao.descricao),
                subtitulo: aplicacao.url_documentacao.clone(),
                secoes,
            });
        }

        renderizar_pdf("Relatório Detalhado de Aplicações", &blocos)
    }

    pub async fn pdf_adrs(&self) -> Result<Vec<u8>, AppError> {
        let adrs = self.adrs.list_all().await?;

        let linhas = adrs
            .iter()
            .map(|adr| {
                vec![
                    format!("ADR-{:03}", adr.sequencia),
                    truncar(&adr.descricao, 80),
                    formato_status(&adr.status),
                    datas::formatar_data(adr.data_criacao),
                    adr.aplicacoes.0.len().to_string(),
                ]
            })
            .collect();

        let bloco = Bloco {
            cabecalho: "Relatório de Decisões Arquiteturais".to_string(),
            subtitulo: Some(format!("Total de ADRs: {}", adrs.len())),
            secoes: vec![Secao {
                titulo: "Decisões".to_string(),
                colunas: vec![
                    "Sequência".into(),
                    "Descrição".into(),
                    "Status".into(),
                    "Criação".into(),
                    "Aplicações".into(),
                ],
                linhas,
            }],
        };

        renderizar_pdf("Relatório de ADRs", &[bloco])
    }

    pub fn xlsx_aplicacoes(&self, aplicacoes: &[Aplicacao]) -> Result<Vec<u8>, AppError> {
        let colunas = [
            "Sigla",
            "Descrição",
            "URL Documentação",
            "Tipo Aplicação",
            "Cloud Provider",
            "Fase Ciclo de Vida",
            "Criticidade Negócio",
            "Nº Usuários",
            "Tecnologias Ativas",
        ];

        let linhas: Vec<Vec<String>> = aplicacoes
            .iter()
            .map(|a| {
                vec![
                    a.sigla.clone(),
                    a.descricao.clone(),
                    a.url_documentacao.clone().unwrap_or_else(|| "N/A".into()),
                    a.tipo_aplicacao.map(|v| formato_status(&v)).unwrap_or_else(|| "N/A".into()),
                    a.cloud_provider.map(|v| formato_status(&v)).unwrap_or_else(|| "N/A".into()),
                    formato_status(&a.fase_ciclo_vida),
                    formato_status(&a.criticidade_negocio),
                    a.numero_usuarios.map(|n| n.to_string()).unwrap_or_default(),
                    super::aplicacao_service::contagem_ativa(&a.tecnologias.0, |t| t.status)
                        .to_string(),
                ]
            })
            .collect();

        gerar_planilha("Aplicações", &colunas, &linhas)
    }

    pub fn xlsx_colaboradores(&self, colaboradores: &[Colaborador]) -> Result<Vec<u8>, AppError> {
        let colunas = ["Matrícula", "Nome", "Setor", "Admissão", "Demissão", "Habilidades", "Afastamentos"];

        let linhas: Vec<Vec<String>> = colaboradores
            .iter()
            .map(|c| {
                vec![
                    c.matricula.clone(),
                    c.nome.clone(),
                    c.setor.clone(),
                    datas::formatar_data(c.data_admissao),
                    c.data_demissao.map(datas::formatar_data).unwrap_or_else(|| "-".into()),
                    c.habilidades.0.len().to_string(),
                    c.afastamentos.0.len().to_string(),
                ]
            })
            .collect();

        gerar_planilha("Colaboradores", &colunas, &linhas)
    }
}

/// Nome do arquivo baixado, com a data corrente: `aplicacoes_2025-12-15.pdf`.
pub fn nome_arquivo(prefixo: &str, extensao: &str) -> String {
    format!("{prefixo}_{}.{extensao}", Utc::now().date_naive().format("%Y-%m-%d"))
}

// --- Renderizador PDF ---

fn renderizar_pdf(titulo: &str, blocos: &[Bloco]) -> Result<Vec<u8>, AppError> {
    // Carrega a fonte da pasta 'fonts/'
    let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None)
        .map_err(|_| AppError::FontNotFound("Fonte não encontrada na pasta ./fonts".to_string()))?;

    let mut doc = genpdf::Document::new(font_family);
    doc.set_title(titulo);

    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(10);
    decorator.set_header(|pagina| {
        let mut cabecalho = elements::Paragraph::new(format!("Página {pagina}"));
        cabecalho.set_alignment(genpdf::Alignment::Right);
        cabecalho.styled(style::Style::new().with_font_size(8))
    });
    doc.set_page_decorator(decorator);

    for (i, bloco) in blocos.iter().enumerate() {
        if i > 0 {
            doc.push(elements::PageBreak::new());
        }

        doc.push(
            elements::Paragraph::new(&bloco.cabecalho)
                .styled(style::Style::new().bold().with_font_size(16)),
        );
        if let Some(subtitulo) = &bloco.subtitulo {
            doc.push(
                elements::Paragraph::new(subtitulo)
                    .styled(style::Style::new().with_font_size(10)),
            );
        }
        doc.push(elements::Paragraph::new(format!(
            "Gerado em: {}",
            datas::formatar_data(Utc::now().date_naive())
        )));
        doc.push(elements::Break::new(1.5));

        for secao in &bloco.secoes {
            doc.push(
                elements::Paragraph::new(&secao.titulo)
                    .styled(style::Style::new().bold().with_font_size(12)),
            );
            doc.push(elements::Break::new(0.5));

            if secao.linhas.is_empty() {
                doc.push(
                    elements::Paragraph::new("Nenhum registro encontrado.")
                        .styled(style::Style::new().italic().with_font_size(9)),
                );
                doc.push(elements::Break::new(1));
                continue;
            }

            let pesos = vec![1; secao.colunas.len()];
            let mut table = elements::TableLayout::new(pesos);
            table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

            let negrito = style::Style::new().bold().with_font_size(9);
            let mut cabecalho = table.row();
            for coluna in &secao.colunas {
                cabecalho = cabecalho.element(elements::Paragraph::new(coluna).styled(negrito));
            }
            cabecalho.push().map_err(|e| AppError::ReportError(e.to_string()))?;

            let corpo = style::Style::new().with_font_size(9);
            for linha in &secao.linhas {
                let mut row = table.row();
                for celula in linha {
                    row = row.element(elements::Paragraph::new(celula).styled(corpo));
                }
                row.push().map_err(|e| AppError::ReportError(e.to_string()))?;
            }

            doc.push(table);
            doc.push(elements::Break::new(1));
        }
    }

    let mut buffer = Vec::new();
    doc.render(&mut buffer).map_err(|e| AppError::ReportError(e.to_string()))?;

    Ok(buffer)
}

// --- Planilha ---

fn gerar_planilha(
    nome_aba: &str,
    colunas: &[&str],
    linhas: &[Vec<String>],
) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(nome_aba)
        .map_err(|e| AppError::ReportError(e.to_string()))?;

    let negrito = Format::new().set_bold();
    for (col, titulo) in colunas.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *titulo, &negrito)
            .map_err(|e| AppError::ReportError(e.to_string()))?;
    }

    for (i, linha) in linhas.iter().enumerate() {
        for (col, valor) in linha.iter().enumerate() {
            worksheet
                .write_string((i + 1) as u32, col as u16, valor)
                .map_err(|e| AppError::ReportError(e.to_string()))?;
        }
    }

    workbook.save_to_buffer().map_err(|e| AppError::ReportError(e.to_string()))
}

// --- Montagem das seções ---

fn tolerar<T>(resultado: Result<Vec<T>, AppError>, secao: &str, sigla: &str) -> Vec<T> {
    match resultado {
        Ok(itens) => itens,
        Err(e) => {
            tracing::warn!("Falha ao buscar {} da aplicação {}: {}", secao, sigla, e);
            Vec::new()
        }
    }
}

fn nomes<T>(
    resultado: Result<Vec<T>, AppError>,
    chave: impl Fn(&T) -> (Uuid, String),
) -> HashMap<Uuid, String> {
    match resultado {
        Ok(itens) => itens.iter().map(&chave).collect(),
        Err(e) => {
            tracing::warn!("Falha ao carregar catálogo para o relatório: {}", e);
            HashMap::new()
        }
    }
}

fn resolver(mapa: &HashMap<Uuid, String>, id: &Uuid) -> String {
    mapa.get(id).cloned().unwrap_or_else(|| "N/A".to_string())
}

/// Nome de exibição dos enums serializados (ex.: `Muito Alta`).
fn formato_status<T: serde::Serialize>(valor: &T) -> String {
    match serde_json::to_value(valor) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(outro) => outro.to_string(),
        Err(_) => String::new(),
    }
}

fn truncar(texto: &str, limite: usize) -> String {
    if texto.chars().count() > limite {
        let recorte: String = texto.chars().take(limite).collect();
        format!("{recorte}...")
    } else {
        texto.to_string()
    }
}

fn colunas_vigencia() -> Vec<String> {
    vec!["Nome".into(), "Início".into(), "Término".into(), "Status".into()]
}

pub fn secao_resumo_aplicacoes(aplicacoes: &[Aplicacao]) -> Secao {
    Secao {
        titulo: "Aplicações".to_string(),
        colunas: vec![
            "Sigla".into(),
            "Descrição".into(),
            "Tipo".into(),
            "Cloud Provider".into(),
            "Fase".into(),
            "Criticidade".into(),
        ],
        linhas: aplicacoes
            .iter()
            .map(|a| {
                vec![
                    a.sigla.clone(),
                    truncar(&a.descricao, 80),
                    a.tipo_aplicacao.map(|v| formato_status(&v)).unwrap_or_else(|| "N/A".into()),
                    a.cloud_provider.map(|v| formato_status(&v)).unwrap_or_else(|| "N/A".into()),
                    formato_status(&a.fase_ciclo_vida),
                    formato_status(&a.criticidade_negocio),
                ]
            })
            .collect(),
    }
}

pub fn secao_tecnologias(aplicacao: &Aplicacao, catalogo: &HashMap<Uuid, String>) -> Secao {
    Secao {
        titulo: "Tecnologias".to_string(),
        colunas: colunas_vigencia(),
        linhas: aplicacao
            .tecnologias
            .0
            .iter()
            .map(|t| {
                vec![
                    resolver(catalogo, &t.tecnologia_id),
                    datas::formatar_data(t.data_inicio),
                    t.data_termino.map(datas::formatar_data).unwrap_or_else(|| "-".into()),
                    formato_status(&t.status),
                ]
            })
            .collect(),
    }
}

fn secao_ambientes(aplicacao: &Aplicacao) -> Secao {
    Secao {
        titulo: "Ambientes".to_string(),
        colunas: vec!["Tipo".into(), "URL".into(), "Criação".into(), "Status".into()],
        linhas: aplicacao
            .ambientes
            .0
            .iter()
            .map(|a| {
                vec![
                    formato_status(&a.tipo_ambiente),
                    a.url_ambiente.clone(),
                    datas::formatar_data(a.data_criacao),
                    formato_status(&a.status),
                ]
            })
            .collect(),
    }
}

fn secao_capacidades(aplicacao: &Aplicacao, catalogo: &HashMap<Uuid, String>) -> Secao {
    Secao {
        titulo: "Capacidades de Negócio".to_string(),
        colunas: colunas_vigencia(),
        linhas: aplicacao
            .capacidades
            .0
            .iter()
            .map(|c| {
                vec![
                    resolver(catalogo, &c.capacidade_id),
                    datas::formatar_data(c.data_inicio),
                    c.data_termino.map(datas::formatar_data).unwrap_or_else(|| "-".into()),
                    formato_status(&c.status),
                ]
            })
            .collect(),
    }
}

fn secao_processos(aplicacao: &Aplicacao, catalogo: &HashMap<Uuid, String>) -> Secao {
    Secao {
        titulo: "Processos de Negócio".to_string(),
        colunas: colunas_vigencia(),
        linhas: aplicacao
            .processos
            .0
            .iter()
            .map(|p| {
                vec![
                    resolver(catalogo, &p.processo_id),
                    datas::formatar_data(p.data_inicio),
                    p.data_termino.map(datas::formatar_data).unwrap_or_else(|| "-".into()),
                    formato_status(&p.status),
                ]
            })
            .collect(),
    }
}

fn secao_integracoes(aplicacao: &Aplicacao, siglas: &HashMap<Uuid, String>) -> Secao {
    Secao {
        titulo: "Integrações".to_string(),
        colunas: vec!["Aplicação Destino".into(), "Início".into(), "Término".into(), "Status".into()],
        linhas: aplicacao
            .integracoes
            .0
            .iter()
            .map(|i| {
                vec![
                    resolver(siglas, &i.aplicacao_destino_id),
                    datas::formatar_data(i.data_inicio),
                    i.data_termino.map(datas::formatar_data).unwrap_or_else(|| "-".into()),
                    formato_status(&i.status),
                ]
            })
            .collect(),
    }
}

pub fn secao_slas(aplicacao: &Aplicacao, catalogo: &HashMap<Uuid, String>) -> Secao {
    Secao {
        titulo: "SLAs".to_string(),
        colunas: vec!["SLA".into(), "Descrição".into(), "Início".into(), "Término".into(), "Status".into()],
        linhas: aplicacao
            .slas
            .0
            .iter()
            .map(|s| {
                vec![
                    resolver(catalogo, &s.sla_id),
                    truncar(&s.descricao, 60),
                    datas::formatar_data(s.data_inicio),
                    s.data_termino.map(datas::formatar_data).unwrap_or_else(|| "-".into()),
                    formato_status(&s.status),
                ]
            })
            .collect(),
    }
}

fn secao_runbooks(aplicacao: &Aplicacao, catalogo: &HashMap<Uuid, String>) -> Secao {
    Secao {
        titulo: "Runbooks".to_string(),
        colunas: vec!["Runbook".into(), "Descrição".into(), "Associação".into(), "Status".into()],
        linhas: aplicacao
            .runbooks
            .0
            .iter()
            .map(|r| {
                vec![
                    resolver(catalogo, &r.runbook_id),
                    truncar(&r.descricao, 60),
                    datas::formatar_data(r.data_associacao),
                    formato_status(&r.status),
                ]
            })
            .collect(),
    }
}

fn secao_squads(aplicacao: &Aplicacao, colaboradores: &HashMap<Uuid, String>) -> Secao {
    Secao {
        titulo: "Squads".to_string(),
        colunas: vec!["Colaborador".into(), "Perfil".into(), "Squad".into(), "Início".into(), "Status".into()],
        linhas: aplicacao
            .squads
            .0
            .iter()
            .map(|s| {
                vec![
                    resolver(colaboradores, &s.colaborador_id),
                    formato_status(&s.perfil),
                    formato_status(&s.squad),
                    datas::formatar_data(s.data_inicio),
                    formato_status(&s.status),
                ]
            })
            .collect(),
    }
}

fn secao_contratos(contratos: Vec<crate::models::contrato::Contrato>) -> Secao {
    Secao {
        titulo: "Contratos".to_string(),
        colunas: vec!["Número".into(), "Vigência Inicial".into(), "Vigência Final".into(), "Status".into()],
        linhas: contratos
            .iter()
            .map(|c| {
                vec![
                    c.numero_contrato.clone(),
                    datas::formatar_data(c.data_vigencia_inicial),
                    datas::formatar_data(c.data_vigencia_final),
                    formato_status(&c.status),
                ]
            })
            .collect(),
    }
}

fn secao_adrs(adrs: Vec<crate::models::adr::Adr>) -> Secao {
    Secao {
        titulo: "Decisões Arquiteturais".to_string(),
        colunas: vec!["Sequência".into(), "Descrição".into(), "Status".into(), "Criação".into()],
        linhas: adrs
            .iter()
            .map(|a| {
                vec![
                    format!("ADR-{:03}", a.sequencia),
                    truncar(&a.descricao, 60),
                    formato_status(&a.status),
                    datas::formatar_data(a.data_criacao),
                ]
            })
            .collect(),
    }
}

fn secao_servidores(servidores: Vec<crate::models::servidor::Servidor>) -> Secao {
    Secao {
        titulo: "Servidores".to_string(),
        colunas: vec!["Sigla".into(), "Hostname".into(), "Ambiente".into(), "Provedor".into(), "Status".into()],
        linhas: servidores
            .iter()
            .map(|s| {
                vec![
                    s.sigla.clone(),
                    s.hostname.clone(),
                    formato_status(&s.ambiente),
                    s.provedor.clone(),
                    formato_status(&s.status),
                ]
            })
            .collect(),
    }
}

fn secao_payloads(payloads: Vec<crate::models::payload::Payload>) -> Secao {
    Secao {
        titulo: "Payloads".to_string(),
        colunas: vec!["Sigla".into(), "Definição".into(), "Formato".into(), "Válido".into()],
        linhas: payloads
            .iter()
            .map(|p| {
                vec![
                    p.sigla.clone(),
                    truncar(&p.definicao, 60),
                    formato_status(&p.formato_arquivo),
                    if p.arquivo_valido { "Sim".into() } else { "Não".into() },
                ]
            })
            .collect(),
    }
}

fn secao_checkpoints(checkpoints: Vec<crate::models::checkpoint::Checkpoint>) -> Secao {
    Secao {
        titulo: "Checkpoints".to_string(),
        colunas: vec!["Descrição".into(), "Categoria".into(), "Status".into(), "Prevista".into(), "Real".into()],
        linhas: checkpoints
            .iter()
            .map(|c| {
                vec![
                    truncar(&c.descricao, 60),
                    formato_status(&c.categoria),
                    formato_status(&c.status),
                    datas::formatar_data(c.data_prevista),
                    c.data_real.map(datas::formatar_data).unwrap_or_else(|| "-".into()),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusRegistro;
    use crate::models::aplicacao::{
        AssociacaoTecnologia, CriticidadeNegocio, FaseCicloVida,
    };
    use chrono::NaiveDate;
    use sqlx::types::Json;

    fn aplicacao_exemplo() -> Aplicacao {
        Aplicacao {
            id: Uuid::new_v4(),
            sigla: "CRM".to_string(),
            descricao: "Sistema de Gestão de Clientes".to_string(),
            url_documentacao: None,
            tipo_aplicacao: None,
            fase_ciclo_vida: FaseCicloVida::Producao,
            criticidade_negocio: CriticidadeNegocio::MuitoAlta,
            categoria_sistema: None,
            fornecedor: None,
            tipo_hospedagem: None,
            cloud_provider: None,
            custo_mensal: None,
            numero_usuarios: None,
            data_implantacao: None,
            versao_atual: None,
            responsavel_tecnico: None,
            responsavel_negocio: None,
            status_operacional: None,
            observacoes: None,
            tecnologias: Json(Vec::new()),
            ambientes: Json(Vec::new()),
            capacidades: Json(Vec::new()),
            processos: Json(Vec::new()),
            integracoes: Json(Vec::new()),
            slas: Json(Vec::new()),
            runbooks: Json(Vec::new()),
            squads: Json(Vec::new()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn secao_sem_registros_fica_sem_linhas() {
        // O renderizador troca a tabela pelo marcador "Nenhum registro"
        let secao = secao_tecnologias(&aplicacao_exemplo(), &HashMap::new());
        assert!(secao.linhas.is_empty());
        assert_eq!(secao.titulo, "Tecnologias");
    }

    #[test]
    fn secao_de_tecnologias_resolve_nome_e_formata_datas() {
        let mut aplicacao = aplicacao_exemplo();
        let tecnologia_id = Uuid::new_v4();
        aplicacao.tecnologias.0.push(AssociacaoTecnologia {
            id: Uuid::new_v4(),
            tecnologia_id,
            data_inicio: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            data_termino: None,
            status: StatusRegistro::Ativo,
        });
        let catalogo = HashMap::from([(tecnologia_id, "PGSQL".to_string())]);

        let secao = secao_tecnologias(&aplicacao, &catalogo);
        assert_eq!(secao.linhas.len(), 1);
        assert_eq!(secao.linhas[0], vec!["PGSQL", "01/01/2024", "-", "Ativo"]);
    }

    #[test]
    fn catalogo_ausente_vira_na() {
        let mut aplicacao = aplicacao_exemplo();
        aplicacao.tecnologias.0.push(AssociacaoTecnologia {
            id: Uuid::new_v4(),
            tecnologia_id: Uuid::new_v4(),
            data_inicio: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            data_termino: None,
            status: StatusRegistro::Ativo,
        });

        let secao = secao_tecnologias(&aplicacao, &HashMap::new());
        assert_eq!(secao.linhas[0][0], "N/A");
    }

    #[test]
    fn resumo_usa_os_rotulos_de_exibicao_dos_enums() {
        let secao = secao_resumo_aplicacoes(&[aplicacao_exemplo()]);
        let linha = &secao.linhas[0];
        assert_eq!(linha[0], "CRM");
        assert_eq!(linha[4], "Produção");
        assert_eq!(linha[5], "Muito Alta");
    }

    #[test]
    fn descricao_longa_e_truncada_com_reticencias() {
        assert_eq!(truncar("abcdef", 4), "abcd...");
        assert_eq!(truncar("abc", 4), "abc");
    }

    #[test]
    fn nome_do_arquivo_tem_prefixo_e_extensao() {
        let nome = nome_arquivo("aplicacoes", "pdf");
        assert!(nome.starts_with("aplicacoes_"));
        assert!(nome.ends_with(".pdf"));
    }

    #[test]
    fn planilha_e_gerada_em_memoria() {
        let bytes = gerar_planilha("Teste", &["A", "B"], &[vec!["1".into(), "2".into()]]).unwrap();
        // XLSX é um zip: assinatura PK
        assert_eq!(&bytes[..2], b"PK");
    }
}
