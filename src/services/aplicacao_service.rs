use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::{datas, error::AppError, kv::KvStore},
    db::AplicacaoRepository,
    models::StatusRegistro,
    models::aplicacao::{Aplicacao, AssociacaoSquad, DadosAplicacao},
};

// Serviço das aplicações: reproduz as regras que o assistente de cadastro
// conferia passo a passo — sigla no primeiro passo, janelas de vigência e
// duplicidade de squad nas coleções — antes da gravação consolidada.

pub const CHAVE_CACHE: &str = "aplicacoes";

#[derive(Clone)]
pub struct AplicacaoService {
    repo: AplicacaoRepository,
    cache: Arc<dyn KvStore>,
}

impl AplicacaoService {
    pub fn new(repo: AplicacaoRepository, cache: Arc<dyn KvStore>) -> Self {
        Self { repo, cache }
    }

    pub async fn list(&self) -> Result<Vec<Aplicacao>, AppError> {
        let aplicacoes = self.repo.list_all().await?;

        // Cópia secundária, melhor-esforço; a autoritativa é o banco.
        if let Ok(valor) = serde_json::to_value(&aplicacoes) {
            self.cache.set(CHAVE_CACHE, valor);
        }

        Ok(aplicacoes)
    }

    pub async fn find(&self, id: Uuid) -> Result<Aplicacao, AppError> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create(&self, dados: &DadosAplicacao) -> Result<Aplicacao, AppError> {
        self.validar(dados, None).await?;
        self.repo.create(dados).await
    }

    pub async fn update(&self, id: Uuid, dados: &DadosAplicacao) -> Result<Aplicacao, AppError> {
        self.validar(dados, Some(id)).await?;
        self.repo.update(id, dados).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    /// Exclusão lógica de uma associação de SLA: o registro vira 'Inativo'
    /// dentro do array e a linha é regravada — nada sai da coleção.
    pub async fn inativar_sla(&self, id: Uuid, associacao_id: Uuid) -> Result<Aplicacao, AppError> {
        let aplicacao = self.find(id).await?;
        let mut dados = aplicacao.para_dados();
        inativar_associacao_sla(&mut dados.slas, associacao_id)?;
        self.repo.update(id, &dados).await
    }

    async fn validar(&self, dados: &DadosAplicacao, editando: Option<Uuid>) -> Result<(), AppError> {
        let existentes = self.repo.list_all().await?;
        let siglas: Vec<(Uuid, String)> =
            existentes.iter().map(|a| (a.id, a.sigla.clone())).collect();

        validar_sigla(&dados.sigla, &siglas, editando)?;
        validar_colecoes(dados)?;
        Ok(())
    }
}

/// Regras do passo de dados básicos: sigla obrigatória, no máximo 20
/// caracteres e única entre as aplicações (sem diferenciar maiúsculas),
/// ignorando a própria aplicação em edição.
pub fn validar_sigla(
    sigla: &str,
    existentes: &[(Uuid, String)],
    editando: Option<Uuid>,
) -> Result<(), AppError> {
    let sigla = sigla.trim();
    if sigla.is_empty() {
        return Err(AppError::regra("A sigla é obrigatória."));
    }
    if sigla.chars().count() > 20 {
        return Err(AppError::regra("A sigla tem no máximo 20 caracteres."));
    }

    let repetida = existentes.iter().any(|(id, existente)| {
        Some(*id) != editando && existente.eq_ignore_ascii_case(sigla)
    });
    if repetida {
        return Err(AppError::UniqueConstraintViolation(format!(
            "Já existe uma aplicação com a sigla '{sigla}'."
        )));
    }

    Ok(())
}

/// Confere as coleções do rascunho consolidado: janelas de vigência e a
/// trinca colaborador/perfil/squad entre os registros ativos.
pub fn validar_colecoes(dados: &DadosAplicacao) -> Result<(), AppError> {
    for t in &dados.tecnologias {
        conferir_janela(t.data_inicio.into(), t.data_termino, "tecnologias")?;
    }
    for c in &dados.capacidades {
        conferir_janela(c.data_inicio.into(), c.data_termino, "capacidades")?;
    }
    for p in &dados.processos {
        conferir_janela(p.data_inicio.into(), p.data_termino, "processos")?;
    }
    for i in &dados.integracoes {
        conferir_janela(i.data_inicio.into(), i.data_termino, "integrações")?;
    }
    for s in &dados.slas {
        conferir_janela(s.data_inicio.into(), s.data_termino, "SLAs")?;
    }
    for s in &dados.squads {
        conferir_janela(s.data_inicio.into(), s.data_termino, "squads")?;
    }

    validar_squads(&dados.squads)?;
    Ok(())
}

fn conferir_janela(
    inicio: Option<chrono::NaiveDate>,
    termino: Option<chrono::NaiveDate>,
    colecao: &str,
) -> Result<(), AppError> {
    if !datas::janela_valida(inicio, termino) {
        return Err(AppError::regra(format!(
            "Em {colecao}: a data de início não pode ser posterior à de término."
        )));
    }
    Ok(())
}

/// A mesma trinca colaborador/perfil/squad não pode aparecer duas vezes
/// entre as associações ativas.
pub fn validar_squads(squads: &[AssociacaoSquad]) -> Result<(), AppError> {
    let ativos: Vec<&AssociacaoSquad> = squads.iter().filter(|s| s.status.ativo()).collect();
    for (i, a) in ativos.iter().enumerate() {
        let duplicado = ativos[i + 1..].iter().any(|b| {
            a.colaborador_id == b.colaborador_id && a.perfil == b.perfil && a.squad == b.squad
        });
        if duplicado {
            return Err(AppError::regra(
                "Colaborador já está associado com este perfil e squad.",
            ));
        }
    }
    Ok(())
}

/// Marca a associação como 'Inativo' no lugar; o array não encolhe.
pub fn inativar_associacao_sla(
    slas: &mut [crate::models::aplicacao::AssociacaoSla],
    associacao_id: Uuid,
) -> Result<(), AppError> {
    let associacao = slas
        .iter_mut()
        .find(|s| s.id == associacao_id)
        .ok_or(AppError::NotFound)?;
    associacao.status = StatusRegistro::Inativo;
    Ok(())
}

/// Quantos registros de uma coleção continuam ativos — é o número que as
/// telas e relatórios exibem; os inativos seguem na lista completa.
pub fn contagem_ativa<T>(itens: &[T], status: impl Fn(&T) -> StatusRegistro) -> usize {
    itens.iter().filter(|item| status(item).ativo()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::aplicacao::{
        AssociacaoSla, AssociacaoTecnologia, CriticidadeNegocio, FaseCicloVida, PerfilSquad,
        TipoSquad,
    };
    use chrono::NaiveDate;

    fn dados_base(sigla: &str) -> DadosAplicacao {
        DadosAplicacao {
            sigla: sigla.to_string(),
            descricao: "Sistema de Gestão de Clientes".to_string(),
            url_documentacao: None,
            tipo_aplicacao: None,
            fase_ciclo_vida: FaseCicloVida::Producao,
            criticidade_negocio: CriticidadeNegocio::Alta,
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
            tecnologias: Vec::new(),
            ambientes: Vec::new(),
            capacidades: Vec::new(),
            processos: Vec::new(),
            integracoes: Vec::new(),
            slas: Vec::new(),
            runbooks: Vec::new(),
            squads: Vec::new(),
        }
    }

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    fn squad(colaborador: Uuid, status: StatusRegistro) -> AssociacaoSquad {
        AssociacaoSquad {
            id: Uuid::new_v4(),
            colaborador_id: colaborador,
            perfil: PerfilSquad::DesenvolvedorBackend,
            squad: TipoSquad::Produto,
            data_inicio: data(2024, 1, 1),
            data_termino: None,
            status,
        }
    }

    #[test]
    fn sigla_vazia_e_rejeitada() {
        assert!(validar_sigla("", &[], None).is_err());
        assert!(validar_sigla("   ", &[], None).is_err());
    }

    #[test]
    fn sigla_acima_de_vinte_caracteres_e_rejeitada() {
        let longa = "A".repeat(21);
        assert!(validar_sigla(&longa, &[], None).is_err());
        let limite = "A".repeat(20);
        assert!(validar_sigla(&limite, &[], None).is_ok());
    }

    #[test]
    fn sigla_duplicada_sem_diferenciar_maiusculas() {
        let existentes = vec![(Uuid::new_v4(), "CRM".to_string())];
        assert!(validar_sigla("crm", &existentes, None).is_err());
        assert!(validar_sigla("ERP", &existentes, None).is_ok());
    }

    #[test]
    fn edicao_ignora_a_propria_sigla() {
        let id = Uuid::new_v4();
        let existentes = vec![(id, "CRM".to_string()), (Uuid::new_v4(), "ERP".to_string())];
        // Mesma sigla, mesma aplicação: permitido
        assert!(validar_sigla("CRM", &existentes, Some(id)).is_ok());
        // Sigla de outra aplicação: conflito
        assert!(validar_sigla("ERP", &existentes, Some(id)).is_err());
    }

    #[test]
    fn rascunho_crm_com_uma_tecnologia_ativa() {
        // Cenário do assistente: CRM + uma tecnologia sem data de término
        let mut dados = dados_base("CRM");
        dados.tecnologias.push(AssociacaoTecnologia {
            id: Uuid::new_v4(),
            tecnologia_id: Uuid::new_v4(),
            data_inicio: data(2024, 1, 1),
            data_termino: None,
            status: StatusRegistro::Ativo,
        });

        assert!(validar_colecoes(&dados).is_ok());
        assert_eq!(dados.tecnologias.len(), 1);
        assert_eq!(dados.tecnologias[0].status, StatusRegistro::Ativo);
    }

    #[test]
    fn janela_invertida_bloqueia_a_gravacao() {
        let mut dados = dados_base("CRM");
        dados.tecnologias.push(AssociacaoTecnologia {
            id: Uuid::new_v4(),
            tecnologia_id: Uuid::new_v4(),
            data_inicio: data(2024, 12, 31),
            data_termino: Some(data(2024, 1, 1)),
            status: StatusRegistro::Ativo,
        });
        assert!(validar_colecoes(&dados).is_err());
    }

    #[test]
    fn trinca_de_squad_duplicada_entre_ativos_e_rejeitada() {
        let colaborador = Uuid::new_v4();
        let squads = vec![squad(colaborador, StatusRegistro::Ativo), squad(colaborador, StatusRegistro::Ativo)];
        assert!(validar_squads(&squads).is_err());
    }

    #[test]
    fn trinca_repetida_com_registro_inativo_e_aceita() {
        let colaborador = Uuid::new_v4();
        let squads = vec![
            squad(colaborador, StatusRegistro::Inativo),
            squad(colaborador, StatusRegistro::Ativo),
        ];
        assert!(validar_squads(&squads).is_ok());
    }

    #[test]
    fn inativar_associacao_preserva_o_registro() {
        let associacao_id = Uuid::new_v4();
        let mut slas = vec![AssociacaoSla {
            id: associacao_id,
            sla_id: Uuid::new_v4(),
            descricao: "SLA de disponibilidade".to_string(),
            data_inicio: data(2024, 1, 1),
            data_termino: None,
            status: StatusRegistro::Ativo,
        }];

        inativar_associacao_sla(&mut slas, associacao_id).unwrap();

        assert_eq!(slas.len(), 1);
        assert_eq!(slas[0].status, StatusRegistro::Inativo);
        assert_eq!(slas[0].id, associacao_id);
    }

    #[test]
    fn inativar_associacao_inexistente_e_not_found() {
        let mut slas: Vec<AssociacaoSla> = Vec::new();
        assert!(matches!(
            inativar_associacao_sla(&mut slas, Uuid::new_v4()),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn contagem_ativa_ignora_inativos_mas_lista_completa_permanece() {
        let colaborador = Uuid::new_v4();
        let outro = Uuid::new_v4();
        let squads = vec![
            squad(colaborador, StatusRegistro::Ativo),
            squad(outro, StatusRegistro::Inativo),
        ];
        assert_eq!(contagem_ativa(&squads, |s| s.status), 1);
        assert_eq!(squads.len(), 2);
    }
}
