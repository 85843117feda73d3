use uuid::Uuid;

use crate::{
    common::{datas, error::AppError},
    db::ColaboradorRepository,
    models::colaborador::{Colaborador, DadosColaborador, OptInOut},
};

const TAMANHO_MAXIMO_PDF: usize = 5 * 1024 * 1024;
const PREFIXO_DATA_URL_PDF: &str = "data:application/pdf";

#[derive(Clone)]
pub struct ColaboradorService {
    repo: ColaboradorRepository,
}

impl ColaboradorService {
    pub fn new(repo: ColaboradorRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Colaborador>, AppError> {
        self.repo.list_all().await
    }

    pub async fn find(&self, id: Uuid) -> Result<Colaborador, AppError> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create(&self, dados: &DadosColaborador) -> Result<Colaborador, AppError> {
        self.validar(dados, None).await?;
        self.repo.create(dados).await
    }

    pub async fn update(&self, id: Uuid, dados: &DadosColaborador) -> Result<Colaborador, AppError> {
        self.validar(dados, Some(id)).await?;
        self.repo.update(id, dados).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    async fn validar(
        &self,
        dados: &DadosColaborador,
        editando: Option<Uuid>,
    ) -> Result<(), AppError> {
        let existentes = self.repo.list_all().await?;
        let matriculas: Vec<(Uuid, String)> =
            existentes.iter().map(|c| (c.id, c.matricula.clone())).collect();

        validar_matricula(&dados.matricula, &matriculas, editando)?;
        validar_registros(dados)?;
        Ok(())
    }
}

/// Matrícula obrigatória e única, ignorando o próprio colaborador em edição.
pub fn validar_matricula(
    matricula: &str,
    existentes: &[(Uuid, String)],
    editando: Option<Uuid>,
) -> Result<(), AppError> {
    let matricula = matricula.trim();
    if matricula.is_empty() {
        return Err(AppError::regra("A matrícula é obrigatória."));
    }

    let repetida = existentes.iter().any(|(id, existente)| {
        Some(*id) != editando && existente.eq_ignore_ascii_case(matricula)
    });
    if repetida {
        return Err(AppError::UniqueConstraintViolation(format!(
            "Já existe um colaborador com a matrícula '{matricula}'."
        )));
    }

    Ok(())
}

fn validar_registros(dados: &DadosColaborador) -> Result<(), AppError> {
    if !datas::janela_valida(Some(dados.data_admissao), dados.data_demissao) {
        return Err(AppError::regra(
            "A data de admissão não pode ser posterior à de demissão.",
        ));
    }

    for a in &dados.afastamentos {
        if !datas::janela_valida(Some(a.inicial_provavel), Some(a.final_provavel)) {
            return Err(AppError::regra(
                "Em afastamentos: a data inicial não pode ser posterior à final.",
            ));
        }
    }
    for h in &dados.habilidades {
        if !datas::janela_valida(Some(h.data_inicio), h.data_termino) {
            return Err(AppError::regra(
                "Em habilidades: a data de início não pode ser posterior à de término.",
            ));
        }
    }

    validar_opt_in_outs(&dados.opt_in_outs)?;
    Ok(())
}

/// Regras do passo de Opt-In/Out: janela de consentimento coerente, no
/// máximo um consentimento vigente por aplicação, PDF anexado dentro do
/// limite e assinatura preenchida.
pub fn validar_opt_in_outs(opt_in_outs: &[OptInOut]) -> Result<(), AppError> {
    for opt in opt_in_outs {
        if !datas::janela_valida(Some(opt.data_inicio), opt.data_revogacao) {
            return Err(AppError::regra(
                "A data de início não pode ser posterior à data de revogação.",
            ));
        }
        if opt.assinatura_eletronica.trim().is_empty() {
            return Err(AppError::regra("É necessário informar a assinatura eletrônica."));
        }
        validar_arquivo_pdf(&opt.arquivo_pdf)?;
    }

    let vigentes: Vec<&OptInOut> = opt_in_outs.iter().filter(|o| o.vigente()).collect();
    for (i, a) in vigentes.iter().enumerate() {
        if vigentes[i + 1..].iter().any(|b| a.aplicacao_id == b.aplicacao_id) {
            return Err(AppError::regra("Já existe um Opt-In ativo para esta aplicação."));
        }
    }

    Ok(())
}

/// O consentimento chega como data URL. Só PDF é aceito e o arquivo
/// decodificado não pode passar de 5 MB — o tamanho é estimado pelo
/// comprimento do base64 (4 caracteres codificam 3 bytes).
pub fn validar_arquivo_pdf(data_url: &str) -> Result<(), AppError> {
    if !data_url.starts_with(PREFIXO_DATA_URL_PDF) {
        return Err(AppError::regra("Apenas arquivos PDF são permitidos."));
    }

    let base64 = data_url.split(',').nth(1).unwrap_or("");
    if base64.is_empty() {
        return Err(AppError::regra("É necessário anexar o arquivo PDF."));
    }

    let tamanho_estimado = base64.len() / 4 * 3;
    if tamanho_estimado > TAMANHO_MAXIMO_PDF {
        return Err(AppError::regra("O arquivo deve ter no máximo 5MB."));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn opt(aplicacao: Uuid, revogado: bool) -> OptInOut {
        OptInOut {
            id: Uuid::new_v4(),
            aplicacao_id: aplicacao,
            data_inicio: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            data_revogacao: revogado.then(|| NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
            arquivo_pdf: "data:application/pdf;base64,JVBERi0xLjQ=".to_string(),
            assinatura_eletronica: "token-assinatura".to_string(),
        }
    }

    #[test]
    fn matricula_duplicada_e_rejeitada() {
        let existentes = vec![(Uuid::new_v4(), "F100".to_string())];
        assert!(validar_matricula("f100", &existentes, None).is_err());
        assert!(validar_matricula("F200", &existentes, None).is_ok());
    }

    #[test]
    fn arquivo_que_nao_e_pdf_e_rejeitado() {
        let erro = validar_arquivo_pdf("data:image/png;base64,iVBORw0KGgo=");
        assert!(erro.is_err());
    }

    #[test]
    fn pdf_pequeno_passa_no_limite() {
        assert!(validar_arquivo_pdf("data:application/pdf;base64,JVBERi0xLjQ=").is_ok());
    }

    #[test]
    fn pdf_acima_de_cinco_megabytes_e_rejeitado() {
        // base64 de ~6 MB decodificados
        let base64 = "A".repeat(8 * 1024 * 1024);
        let data_url = format!("data:application/pdf;base64,{base64}");
        assert!(validar_arquivo_pdf(&data_url).is_err());
    }

    #[test]
    fn dois_consentimentos_vigentes_para_a_mesma_aplicacao_sao_rejeitados() {
        let aplicacao = Uuid::new_v4();
        assert!(validar_opt_in_outs(&[opt(aplicacao, false), opt(aplicacao, false)]).is_err());
        // Com o primeiro revogado, o novo consentimento é aceito
        assert!(validar_opt_in_outs(&[opt(aplicacao, true), opt(aplicacao, false)]).is_ok());
    }

    #[test]
    fn revogacao_antes_do_inicio_e_rejeitada() {
        let mut registro = opt(Uuid::new_v4(), false);
        registro.data_inicio = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        registro.data_revogacao = Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(validar_opt_in_outs(&[registro]).is_err());
    }
}
