// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Aplicações ---
        handlers::aplicacoes::list_aplicacoes,
        handlers::aplicacoes::get_aplicacao,
        handlers::aplicacoes::create_aplicacao,
        handlers::aplicacoes::update_aplicacao,
        handlers::aplicacoes::delete_aplicacao,
        handlers::aplicacoes::inativar_sla_da_aplicacao,
        handlers::aplicacoes::list_contratos_da_aplicacao,
        handlers::aplicacoes::list_payloads_da_aplicacao,
        handlers::aplicacoes::list_servidores_da_aplicacao,
        handlers::aplicacoes::list_adrs_da_aplicacao,
        handlers::aplicacoes::list_checkpoints_da_aplicacao,

        // --- Colaboradores ---
        handlers::colaboradores::list_colaboradores,
        handlers::colaboradores::get_colaborador,
        handlers::colaboradores::create_colaborador,
        handlers::colaboradores::update_colaborador,
        handlers::colaboradores::delete_colaborador,

        // --- SLAs ---
        handlers::slas::list_slas,
        handlers::slas::get_sla,
        handlers::slas::create_sla,
        handlers::slas::update_sla,
        handlers::slas::delete_sla,

        // --- Tecnologias ---
        handlers::tecnologias::list_tecnologias,
        handlers::tecnologias::get_tecnologia,
        handlers::tecnologias::create_tecnologia,
        handlers::tecnologias::update_tecnologia,
        handlers::tecnologias::delete_tecnologia,

        // --- Capacidades / Processos / Runbooks ---
        handlers::catalogos::list_capacidades,
        handlers::catalogos::get_capacidade,
        handlers::catalogos::create_capacidade,
        handlers::catalogos::update_capacidade,
        handlers::catalogos::delete_capacidade,
        handlers::catalogos::list_processos,
        handlers::catalogos::get_processo,
        handlers::catalogos::create_processo,
        handlers::catalogos::update_processo,
        handlers::catalogos::delete_processo,
        handlers::catalogos::list_runbooks,
        handlers::catalogos::get_runbook,
        handlers::catalogos::create_runbook,
        handlers::catalogos::update_runbook,
        handlers::catalogos::delete_runbook,

        // --- ADRs ---
        handlers::adrs::list_adrs,
        handlers::adrs::get_adr,
        handlers::adrs::create_adr,
        handlers::adrs::update_adr,
        handlers::adrs::delete_adr,

        // --- Contratos / Payloads / Servidores / Checkpoints / Projetos ---
        handlers::vinculos::list_contratos,
        handlers::vinculos::get_contrato,
        handlers::vinculos::create_contrato,
        handlers::vinculos::update_contrato,
        handlers::vinculos::delete_contrato,
        handlers::vinculos::list_payloads,
        handlers::vinculos::get_payload,
        handlers::vinculos::create_payload,
        handlers::vinculos::update_payload,
        handlers::vinculos::delete_payload,
        handlers::vinculos::list_servidores,
        handlers::vinculos::get_servidor,
        handlers::vinculos::create_servidor,
        handlers::vinculos::update_servidor,
        handlers::vinculos::delete_servidor,
        handlers::vinculos::list_checkpoints,
        handlers::vinculos::get_checkpoint,
        handlers::vinculos::create_checkpoint,
        handlers::vinculos::update_checkpoint,
        handlers::vinculos::delete_checkpoint,
        handlers::vinculos::list_projetos,
        handlers::vinculos::get_projeto,
        handlers::vinculos::create_projeto,
        handlers::vinculos::update_projeto,
        handlers::vinculos::delete_projeto,

        // --- Relatórios ---
        handlers::relatorios::pdf_aplicacoes,
        handlers::relatorios::pdf_aplicacoes_detalhado,
        handlers::relatorios::xlsx_aplicacoes,
        handlers::relatorios::xlsx_colaboradores,
        handlers::relatorios::pdf_adrs,
    ),
    components(
        schemas(
            // --- Compartilhados ---
            models::StatusRegistro,

            // --- Aplicações ---
            models::aplicacao::Aplicacao,
            models::aplicacao::DadosAplicacao,
            models::aplicacao::FaseCicloVida,
            models::aplicacao::CriticidadeNegocio,
            models::aplicacao::TipoAplicacao,
            models::aplicacao::CloudProvider,
            models::aplicacao::TipoAmbiente,
            models::aplicacao::PerfilSquad,
            models::aplicacao::TipoSquad,
            models::aplicacao::AssociacaoTecnologia,
            models::aplicacao::AmbienteTecnologico,
            models::aplicacao::AssociacaoCapacidade,
            models::aplicacao::AssociacaoProcesso,
            models::aplicacao::IntegracaoAplicacao,
            models::aplicacao::AssociacaoSla,
            models::aplicacao::AssociacaoRunbook,
            models::aplicacao::AssociacaoSquad,

            // --- Colaboradores ---
            models::colaborador::Colaborador,
            models::colaborador::DadosColaborador,
            models::colaborador::NivelHabilidade,
            models::colaborador::Afastamento,
            models::colaborador::HabilidadeColaborador,
            models::colaborador::AvaliacaoColaborador,
            models::colaborador::OptInOut,

            // --- SLAs ---
            models::sla::Sla,
            models::sla::DadosSla,
            models::sla::TipoSla,
            models::sla::DetalheSla,
            models::sla::SlaServico,
            models::sla::SlaUsuario,
            models::sla::SlaComponentes,
            models::sla::SlaOperacional,
            models::sla::SlaApoio,
            models::sla::SlaPrioridade,
            models::sla::SlaPerformance,
            models::sla::SlaDisponibilidade,
            models::sla::SlaCapacidade,
            models::sla::SlaSeguranca,
            models::sla::SlaSuporteAtendimento,

            // --- Tecnologias ---
            models::tecnologia::Tecnologia,
            models::tecnologia::DadosTecnologia,
            models::tecnologia::CategoriaTecnologia,
            models::tecnologia::StatusTecnologia,
            models::tecnologia::TipoLicenciamento,
            models::tecnologia::MaturidadeInterna,
            models::tecnologia::AmbientesTecnologia,
            models::tecnologia::ContratoTecnologia,
            models::tecnologia::ContratoAms,
            models::tecnologia::ResponsavelTecnologia,
            models::tecnologia::CustoSaas,
            models::tecnologia::ManutencaoSaas,

            // --- Capacidades / Processos / Runbooks ---
            models::capacidade::CapacidadeNegocio,
            models::capacidade::DadosCapacidade,
            models::capacidade::NivelCapacidade,
            models::capacidade::CategoriaCapacidade,
            models::capacidade::CoberturaEstrategica,
            models::processo::ProcessoNegocio,
            models::processo::DadosProcesso,
            models::processo::NivelMaturidade,
            models::processo::Frequencia,
            models::processo::Complexidade,
            models::processo::TipoNorma,
            models::processo::ObrigatoriedadeNorma,
            models::processo::NormaProcesso,
            models::runbook::Runbook,
            models::runbook::DadosRunbook,
            models::runbook::TipoRunbook,
            models::runbook::PreRequisitosRunbook,
            models::runbook::ProcedimentoOperacional,
            models::runbook::PosExecucao,
            models::runbook::ExecucaoAutomatizada,
            models::runbook::Evidencias,
            models::runbook::RiscosMitigacoes,

            // --- ADRs ---
            models::adr::Adr,
            models::adr::DadosAdr,
            models::adr::StatusAdr,
            models::adr::StatusAplicacaoAdr,
            models::adr::AdrAplicacao,

            // --- Contratos / Payloads / Servidores ---
            models::contrato::Contrato,
            models::contrato::DadosContrato,
            models::contrato::StatusContrato,
            models::payload::Payload,
            models::payload::DadosPayload,
            models::payload::FormatoArquivoPayload,
            models::servidor::Servidor,
            models::servidor::DadosServidor,
            models::servidor::TipoServidor,
            models::servidor::AmbienteServidor,
            models::servidor::FinalidadeServidor,
            models::servidor::StatusServidor,
            models::servidor::StatusAplicacaoServidor,
            models::servidor::AplicacaoServidor,

            // --- Checkpoints / Projetos ---
            models::checkpoint::Checkpoint,
            models::checkpoint::DadosCheckpoint,
            models::checkpoint::CategoriaCheckpoint,
            models::checkpoint::StatusCheckpoint,
            models::projeto::Projeto,
            models::projeto::DadosProjeto,
            models::projeto::StatusProjeto,
            models::projeto::RepositorioProjeto,
        )
    ),
    tags(
        (name = "Aplicações", description = "Cadastro consolidado das aplicações e suas associações"),
        (name = "Colaboradores", description = "Colaboradores, afastamentos, habilidades e consentimentos"),
        (name = "SLAs", description = "Acordos de nível de serviço e seus detalhes por tipo"),
        (name = "Tecnologias", description = "Catálogo de tecnologias e seus contratos"),
        (name = "Capacidades", description = "Capacidades de negócio"),
        (name = "Processos", description = "Processos de negócio e normas"),
        (name = "Runbooks", description = "Procedimentos operacionais"),
        (name = "ADRs", description = "Registros de decisão arquitetural"),
        (name = "Contratos", description = "Contratos por aplicação"),
        (name = "Payloads", description = "Especificações OpenAPI por aplicação"),
        (name = "Servidores", description = "Inventário de servidores"),
        (name = "Checkpoints", description = "Marcos de acompanhamento por aplicação"),
        (name = "Projetos", description = "Projetos gerados"),
        (name = "Relatórios", description = "Exportação em PDF e planilha")
    )
)]
pub struct ApiDoc;
