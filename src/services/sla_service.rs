use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::{datas, error::AppError, kv::KvStore},
    db::SlaRepository,
    models::sla::{DadosSla, DetalheSla, Sla, TipoSla},
};

pub const CHAVE_CACHE: &str = "slas";

#[derive(Clone)]
pub struct SlaService {
    repo: SlaRepository,
    cache: Arc<dyn KvStore>,
}

impl SlaService {
    pub fn new(repo: SlaRepository, cache: Arc<dyn KvStore>) -> Self {
        Self { repo, cache }
    }

    pub async fn list(&self) -> Result<Vec<Sla>, AppError> {
        let slas = self.repo.list_all().await?;

        if let Ok(valor) = serde_json::to_value(&slas) {
            self.cache.set(CHAVE_CACHE, valor);
        }

        Ok(slas)
    }

    pub async fn find(&self, id: Uuid) -> Result<Sla, AppError> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create(&self, dados: &DadosSla) -> Result<Sla, AppError> {
        validar(dados)?;
        self.repo.create(dados).await
    }

    pub async fn update(&self, id: Uuid, dados: &DadosSla) -> Result<Sla, AppError> {
        validar(dados)?;
        self.repo.update(id, dados).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}

fn validar(dados: &DadosSla) -> Result<(), AppError> {
    if !datas::janela_valida(Some(dados.data_inicio), dados.data_termino) {
        return Err(AppError::regra(
            "A data de início não pode ser posterior à de término.",
        ));
    }
    conferir_detalhe(dados.tipo_sla, &dados.detalhe)
}

/// O payload de detalhe é um só e tem que ser o do tipo selecionado —
/// um SLA de Segurança não carrega métricas de Performance.
pub fn conferir_detalhe(tipo_sla: TipoSla, detalhe: &DetalheSla) -> Result<(), AppError> {
    if detalhe.tipo() != tipo_sla {
        return Err(AppError::regra(
            "O detalhe informado não corresponde ao tipo do SLA.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sla::{SlaDisponibilidade, SlaSeguranca};

    fn detalhe_seguranca() -> DetalheSla {
        DetalheSla::Seguranca(SlaSeguranca {
            patching_mensal_obrigatorio: true,
            mfa_para_todos_acessos: true,
            tempo_correcao_vulnerabilidade_critical: "48h".to_string(),
        })
    }

    #[test]
    fn detalhe_do_tipo_certo_e_aceito() {
        assert!(conferir_detalhe(TipoSla::DeSeguranca, &detalhe_seguranca()).is_ok());
    }

    #[test]
    fn detalhe_de_outro_tipo_e_rejeitado() {
        assert!(conferir_detalhe(TipoSla::DePerformance, &detalhe_seguranca()).is_err());

        let disponibilidade =
            DetalheSla::Disponibilidade(SlaDisponibilidade { percentual_uptime: 99.9 });
        assert!(conferir_detalhe(TipoSla::DeSeguranca, &disponibilidade).is_err());
    }

    #[test]
    fn serializacao_expoe_somente_o_payload_ativo() {
        // A tag externa garante um único campo de detalhe no JSON
        let valor = serde_json::to_value(detalhe_seguranca()).unwrap();
        let objeto = valor.as_object().unwrap();
        assert_eq!(objeto.len(), 1);
        assert!(objeto.contains_key("seguranca"));
    }

    #[test]
    fn desserializacao_recupera_a_variante() {
        let json = r#"{"disponibilidade": {"percentualUptime": 99.5}}"#;
        let detalhe: DetalheSla = serde_json::from_str(json).unwrap();
        assert_eq!(detalhe.tipo(), TipoSla::DeDisponibilidade);
    }
}
