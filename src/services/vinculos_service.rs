use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::{datas, error::AppError},
    db::payload_repo::ResultadoValidacao,
    db::{CheckpointRepository, ContratoRepository, PayloadRepository, ProjetoRepository, ServidorRepository},
    models::checkpoint::{Checkpoint, DadosCheckpoint},
    models::contrato::{Contrato, DadosContrato},
    models::payload::{DadosPayload, FormatoArquivoPayload, Payload},
    models::projeto::{DadosProjeto, Projeto},
    models::servidor::{DadosServidor, Servidor},
};

// Recursos vinculados às aplicações que persistem por endpoint próprio, na
// hora, em vez de esperar o salvamento consolidado do assistente: contratos,
// payloads, servidores, checkpoints e projetos gerados.
#[derive(Clone)]
pub struct VinculosService {
    contratos: ContratoRepository,
    payloads: PayloadRepository,
    servidores: ServidorRepository,
    checkpoints: CheckpointRepository,
    projetos: ProjetoRepository,
}

impl VinculosService {
    pub fn new(
        contratos: ContratoRepository,
        payloads: PayloadRepository,
        servidores: ServidorRepository,
        checkpoints: CheckpointRepository,
        projetos: ProjetoRepository,
    ) -> Self {
        Self { contratos, payloads, servidores, checkpoints, projetos }
    }

    // --- Contratos ---

    pub async fn list_contratos(&self) -> Result<Vec<Contrato>, AppError> {
        self.contratos.list_all().await
    }

    pub async fn list_contratos_da_aplicacao(
        &self,
        aplicacao_id: Uuid,
    ) -> Result<Vec<Contrato>, AppError> {
        self.contratos.list_by_aplicacao(aplicacao_id).await
    }

    pub async fn find_contrato(&self, id: Uuid) -> Result<Contrato, AppError> {
        self.contratos.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_contrato(&self, dados: &DadosContrato) -> Result<Contrato, AppError> {
        validar_contrato(dados)?;
        self.contratos.create(dados).await
    }

    pub async fn update_contrato(&self, id: Uuid, dados: &DadosContrato) -> Result<Contrato, AppError> {
        validar_contrato(dados)?;
        self.contratos.update(id, dados).await
    }

    pub async fn delete_contrato(&self, id: Uuid) -> Result<(), AppError> {
        self.contratos.delete(id).await
    }

    // --- Payloads ---

    pub async fn list_payloads(&self) -> Result<Vec<Payload>, AppError> {
        self.payloads.list_all().await
    }

    pub async fn list_payloads_da_aplicacao(
        &self,
        aplicacao_id: Uuid,
    ) -> Result<Vec<Payload>, AppError> {
        self.payloads.list_by_aplicacao(aplicacao_id).await
    }

    pub async fn find_payload(&self, id: Uuid) -> Result<Payload, AppError> {
        self.payloads.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_payload(&self, dados: &DadosPayload) -> Result<Payload, AppError> {
        if !datas::janela_valida(Some(dados.data_inicio), dados.data_termino) {
            return Err(AppError::regra(
                "A data de início não pode ser posterior à de término.",
            ));
        }
        let validacao = validar_conteudo_payload(dados);
        self.payloads.create(dados, &validacao).await
    }

    pub async fn update_payload(&self, id: Uuid, dados: &DadosPayload) -> Result<Payload, AppError> {
        if !datas::janela_valida(Some(dados.data_inicio), dados.data_termino) {
            return Err(AppError::regra(
                "A data de início não pode ser posterior à de término.",
            ));
        }
        let validacao = validar_conteudo_payload(dados);
        self.payloads.update(id, dados, &validacao).await
    }

    pub async fn delete_payload(&self, id: Uuid) -> Result<(), AppError> {
        self.payloads.delete(id).await
    }

    // --- Servidores ---

    pub async fn list_servidores(&self) -> Result<Vec<Servidor>, AppError> {
        self.servidores.list_all().await
    }

    pub async fn list_servidores_da_aplicacao(
        &self,
        aplicacao_id: Uuid,
    ) -> Result<Vec<Servidor>, AppError> {
        self.servidores.list_by_aplicacao(aplicacao_id).await
    }

    pub async fn find_servidor(&self, id: Uuid) -> Result<Servidor, AppError> {
        self.servidores.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_servidor(&self, dados: &DadosServidor) -> Result<Servidor, AppError> {
        validar_servidor(dados)?;
        self.servidores.create(dados).await
    }

    pub async fn update_servidor(&self, id: Uuid, dados: &DadosServidor) -> Result<Servidor, AppError> {
        validar_servidor(dados)?;
        self.servidores.update(id, dados).await
    }

    pub async fn delete_servidor(&self, id: Uuid) -> Result<(), AppError> {
        self.servidores.delete(id).await
    }

    // --- Checkpoints ---

    pub async fn list_checkpoints(
        &self,
        aplicacao_id: Option<Uuid>,
    ) -> Result<Vec<Checkpoint>, AppError> {
        match aplicacao_id {
            Some(id) => self.checkpoints.list_by_aplicacao(id).await,
            None => self.checkpoints.list_all().await,
        }
    }

    pub async fn find_checkpoint(&self, id: Uuid) -> Result<Checkpoint, AppError> {
        self.checkpoints.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_checkpoint(&self, dados: &DadosCheckpoint) -> Result<Checkpoint, AppError> {
        self.checkpoints.create(dados).await
    }

    /// Um checkpoint com data real preenchida está finalizado e não aceita
    /// mais edição.
    pub async fn update_checkpoint(
        &self,
        id: Uuid,
        dados: &DadosCheckpoint,
    ) -> Result<Checkpoint, AppError> {
        let atual = self.find_checkpoint(id).await?;
        if atual.finalizado() {
            return Err(AppError::regra(
                "Este checkpoint está finalizado e não pode ser editado.",
            ));
        }
        self.checkpoints.update(id, dados).await
    }

    pub async fn delete_checkpoint(&self, id: Uuid) -> Result<(), AppError> {
        self.checkpoints.delete(id).await
    }

    // --- Projetos ---

    pub async fn list_projetos(&self) -> Result<Vec<Projeto>, AppError> {
        self.projetos.list_all().await
    }

    pub async fn find_projeto(&self, id: Uuid) -> Result<Projeto, AppError> {
        self.projetos.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create_projeto(&self, dados: &DadosProjeto) -> Result<Projeto, AppError> {
        self.projetos.create(dados).await
    }

    pub async fn update_projeto(&self, id: Uuid, dados: &DadosProjeto) -> Result<Projeto, AppError> {
        self.projetos.update(id, dados).await
    }

    pub async fn delete_projeto(&self, id: Uuid) -> Result<(), AppError> {
        self.projetos.delete(id).await
    }
}

fn validar_contrato(dados: &DadosContrato) -> Result<(), AppError> {
    if !datas::janela_valida(Some(dados.data_vigencia_inicial), Some(dados.data_vigencia_final)) {
        return Err(AppError::regra(
            "A vigência inicial não pode ser posterior à vigência final.",
        ));
    }
    Ok(())
}

fn validar_servidor(dados: &DadosServidor) -> Result<(), AppError> {
    for a in &dados.aplicacoes {
        if !datas::janela_valida(Some(a.data_inicio), a.data_termino) {
            return Err(AppError::regra(
                "Em aplicações hospedadas: a data de início não pode ser posterior à de término.",
            ));
        }
    }
    Ok(())
}

/// Valida o conteúdo OpenAPI do payload. JSON passa pelo parser; YAML é
/// aceito sem parse (só exige conteúdo não vazio) e o motivo fica em
/// `erros_validacao` quando falha.
pub fn validar_conteudo_payload(dados: &DadosPayload) -> ResultadoValidacao {
    let erro = match dados.formato_arquivo {
        FormatoArquivoPayload::JSON => {
            serde_json::from_str::<serde_json::Value>(&dados.conteudo_arquivo)
                .err()
                .map(|e| format!("JSON inválido: {e}"))
        }
        FormatoArquivoPayload::YAML => {
            dados.conteudo_arquivo.trim().is_empty().then(|| "Conteúdo vazio".to_string())
        }
    };

    ResultadoValidacao {
        arquivo_valido: erro.is_none(),
        ultima_validacao: Utc::now(),
        erros_validacao: erro,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn payload_json(conteudo: &str) -> DadosPayload {
        DadosPayload {
            aplicacao_id: Uuid::new_v4(),
            sigla: "API-CLIENTES".to_string(),
            definicao: "Contrato da API de clientes".to_string(),
            descricao: None,
            formato_arquivo: FormatoArquivoPayload::JSON,
            conteudo_arquivo: conteudo.to_string(),
            versao_openapi: "3.0.3".to_string(),
            data_inicio: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            data_termino: None,
        }
    }

    #[test]
    fn json_valido_marca_arquivo_valido() {
        let resultado = validar_conteudo_payload(&payload_json(r#"{"openapi": "3.0.3"}"#));
        assert!(resultado.arquivo_valido);
        assert!(resultado.erros_validacao.is_none());
    }

    #[test]
    fn json_invalido_registra_o_erro() {
        let resultado = validar_conteudo_payload(&payload_json("{openapi:"));
        assert!(!resultado.arquivo_valido);
        assert!(resultado.erros_validacao.unwrap().starts_with("JSON inválido"));
    }

    #[test]
    fn yaml_vazio_e_invalido() {
        let mut dados = payload_json("");
        dados.formato_arquivo = FormatoArquivoPayload::YAML;
        let resultado = validar_conteudo_payload(&dados);
        assert!(!resultado.arquivo_valido);
    }
}
