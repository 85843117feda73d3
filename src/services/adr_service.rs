use uuid::Uuid;

use crate::{
    common::{datas, error::AppError},
    db::AdrRepository,
    models::adr::{Adr, DadosAdr},
};

#[derive(Clone)]
pub struct AdrService {
    repo: AdrRepository,
}

impl AdrService {
    pub fn new(repo: AdrRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Adr>, AppError> {
        self.repo.list_all().await
    }

    pub async fn list_by_aplicacao(&self, aplicacao_id: Uuid) -> Result<Vec<Adr>, AppError> {
        self.repo.list_by_aplicacao(aplicacao_id).await
    }

    pub async fn find(&self, id: Uuid) -> Result<Adr, AppError> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create(&self, dados: &DadosAdr) -> Result<Adr, AppError> {
        validar(dados, None)?;
        self.repo.create(dados).await
    }

    pub async fn update(&self, id: Uuid, dados: &DadosAdr) -> Result<Adr, AppError> {
        validar(dados, Some(id))?;
        self.repo.update(id, dados).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}

fn validar(dados: &DadosAdr, editando: Option<Uuid>) -> Result<(), AppError> {
    if !datas::janela_valida(Some(dados.data_criacao), dados.data_atualizacao) {
        return Err(AppError::regra(
            "A data de criação não pode ser posterior à de atualização.",
        ));
    }

    // Uma decisão não substitui a si mesma
    if let (Some(substituta), Some(id)) = (dados.adr_substituta_id, editando) {
        if substituta == id {
            return Err(AppError::regra("Uma ADR não pode substituir a si mesma."));
        }
    }

    for a in &dados.aplicacoes {
        if !datas::janela_valida(a.data_inicio, a.data_termino) {
            return Err(AppError::regra(
                "Em aplicações: a data de início não pode ser posterior à de término.",
            ));
        }
    }

    Ok(())
}
