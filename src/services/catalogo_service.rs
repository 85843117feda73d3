use uuid::Uuid;

use crate::{
    common::{datas, error::AppError},
    db::CatalogoRepository,
    models::capacidade::{CapacidadeNegocio, DadosCapacidade},
    models::processo::{DadosProcesso, ProcessoNegocio},
    models::runbook::{DadosRunbook, Runbook},
    models::tecnologia::{DadosTecnologia, Tecnologia},
};

// Catálogos de referência (tecnologias, capacidades, processos, runbooks).
// A maior parte é delegação direta; as regras vivem nas sub-coleções da
// tecnologia e nas normas do processo.
#[derive(Clone)]
pub struct CatalogoService {
    repo: CatalogoRepository,
}

impl CatalogoService {
    pub fn new(repo: CatalogoRepository) -> Self {
        Self { repo }
    }

    // --- Tecnologias ---

    pub async fn list_tecnologias(&self) -> Result<Vec<Tecnologia>, AppError> {
        self.repo.list_tecnologias().await
    }

    pub async fn find_tecnologia(&self, id: Uuid) -> Result<Tecnologia, AppError> {
        self.repo.find_tecnologia(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_tecnologia(&self, dados: &DadosTecnologia) -> Result<Tecnologia, AppError> {
        validar_tecnologia(dados)?;
        self.repo.create_tecnologia(dados).await
    }

    pub async fn update_tecnologia(
        &self,
        id: Uuid,
        dados: &DadosTecnologia,
    ) -> Result<Tecnologia, AppError> {
        validar_tecnologia(dados)?;
        self.repo.update_tecnologia(id, dados).await
    }

    pub async fn delete_tecnologia(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_tecnologia(id).await
    }

    // --- Capacidades de negócio ---

    pub async fn list_capacidades(&self) -> Result<Vec<CapacidadeNegocio>, AppError> {
        self.repo.list_capacidades().await
    }

    pub async fn find_capacidade(&self, id: Uuid) -> Result<CapacidadeNegocio, AppError> {
        self.repo.find_capacidade(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_capacidade(
        &self,
        dados: &DadosCapacidade,
    ) -> Result<CapacidadeNegocio, AppError> {
        self.repo.create_capacidade(dados).await
    }

    pub async fn update_capacidade(
        &self,
        id: Uuid,
        dados: &DadosCapacidade,
    ) -> Result<CapacidadeNegocio, AppError> {
        self.repo.update_capacidade(id, dados).await
    }

    pub async fn delete_capacidade(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_capacidade(id).await
    }

    // --- Processos de negócio ---

    pub async fn list_processos(&self) -> Result<Vec<ProcessoNegocio>, AppError> {
        self.repo.list_processos().await
    }

    pub async fn find_processo(&self, id: Uuid) -> Result<ProcessoNegocio, AppError> {
        self.repo.find_processo(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_processo(&self, dados: &DadosProcesso) -> Result<ProcessoNegocio, AppError> {
        validar_processo(dados)?;
        self.repo.create_processo(dados).await
    }

    pub async fn update_processo(
        &self,
        id: Uuid,
        dados: &DadosProcesso,
    ) -> Result<ProcessoNegocio, AppError> {
        validar_processo(dados)?;
        self.repo.update_processo(id, dados).await
    }

    pub async fn delete_processo(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_processo(id).await
    }

    // --- Runbooks ---

    pub async fn list_runbooks(&self) -> Result<Vec<Runbook>, AppError> {
        self.repo.list_runbooks().await
    }

    pub async fn find_runbook(&self, id: Uuid) -> Result<Runbook, AppError> {
        self.repo.find_runbook(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_runbook(&self, dados: &DadosRunbook) -> Result<Runbook, AppError> {
        self.repo.create_runbook(dados).await
    }

    pub async fn update_runbook(&self, id: Uuid, dados: &DadosRunbook) -> Result<Runbook, AppError> {
        self.repo.update_runbook(id, dados).await
    }

    pub async fn delete_runbook(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_runbook(id).await
    }
}

fn validar_tecnologia(dados: &DadosTecnologia) -> Result<(), AppError> {
    for c in &dados.contratos {
        if !datas::janela_valida(Some(c.vigencia_inicial), Some(c.vigencia_termino)) {
            return Err(AppError::regra(
                "Em contratos: a vigência inicial não pode ser posterior à de término.",
            ));
        }
    }
    for c in &dados.contratos_ams {
        if !datas::janela_valida(Some(c.data_inicio), Some(c.data_termino)) {
            return Err(AppError::regra(
                "Em contratos AMS: a data de início não pode ser posterior à de término.",
            ));
        }
    }
    for r in &dados.responsaveis {
        if !datas::janela_valida(Some(r.data_inicio), r.data_termino) {
            return Err(AppError::regra(
                "Em responsáveis: a data de início não pode ser posterior à de término.",
            ));
        }
    }
    Ok(())
}

fn validar_processo(dados: &DadosProcesso) -> Result<(), AppError> {
    for n in &dados.normas {
        if !datas::janela_valida(Some(n.data_inicio), n.data_termino) {
            return Err(AppError::regra(
                "Em normas: a data de início não pode ser posterior à de término.",
            ));
        }
    }
    Ok(())
}
