use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// Motor de listagem das telas de consulta: as entidades são carregadas por
// inteiro em memória e o filtro/ordenação/paginação acontecem aqui, sobre o
// vetor, reproduzindo o contrato das tabelas do console.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direcao {
    Asc,
    Desc,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ParametrosListagem {
    /// Termo de busca aplicado como substring, sem diferenciar maiúsculas
    pub busca: Option<String>,
    /// Nome do campo de ordenação (ex.: "sigla", "dataInicio")
    pub ordenar_por: Option<String>,
    pub direcao: Option<Direcao>,
    pub pagina: Option<usize>,
    pub tamanho_pagina: Option<usize>,
}

pub const TAMANHO_PAGINA_PADRAO: usize = 10;

/// Chave de ordenação tipada: texto compara sem maiúsculas, números e datas
/// comparam pelo valor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Chave {
    Texto(String),
    Inteiro(i64),
    Numero(Decimal),
    Data(NaiveDate),
}

impl Chave {
    pub fn texto(valor: &str) -> Self {
        Chave::Texto(valor.to_lowercase())
    }

    pub fn data(valor: Option<NaiveDate>) -> Self {
        // Datas ausentes vão para o início da ordem ascendente
        Chave::Data(valor.unwrap_or(NaiveDate::MIN))
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagina<T> {
    pub itens: Vec<T>,
    pub pagina: usize,
    pub tamanho_pagina: usize,
    pub total_itens: usize,
    pub total_paginas: usize,
}

/// Rótulo de exibição de um enum serializável (ex.: `Muito Alta`) — é o
/// texto que as telas mostram, então busca e ordenação usam ele também.
pub fn rotulo<T: serde::Serialize>(valor: &T) -> String {
    match serde_json::to_value(valor) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(outro) => outro.to_string(),
        Err(_) => String::new(),
    }
}

/// Filtro OR por substring, sem diferenciar maiúsculas, sobre os campos
/// nomeados de cada entidade. Busca vazia devolve a lista inteira.
pub fn filtrar<T>(itens: Vec<T>, busca: &str, campos: impl Fn(&T) -> Vec<String>) -> Vec<T> {
    let termo = busca.trim().to_lowercase();
    if termo.is_empty() {
        return itens;
    }
    itens
        .into_iter()
        .filter(|item| {
            campos(item)
                .iter()
                .any(|campo| campo.to_lowercase().contains(&termo))
        })
        .collect()
}

/// Ordenação estável por chave única; `Desc` inverte a comparação.
pub fn ordenar<T>(itens: &mut [T], direcao: Direcao, chave: impl Fn(&T) -> Chave) {
    itens.sort_by(|a, b| {
        let ordem = chave(a).cmp(&chave(b));
        match direcao {
            Direcao::Asc => ordem,
            Direcao::Desc => ordem.reverse(),
        }
    });
}

/// Recorta a página pedida. Página fora do intervalo volta para a primeira,
/// e os limites do recorte nunca passam do tamanho do vetor.
pub fn paginar<T>(itens: Vec<T>, pagina: usize, tamanho_pagina: usize) -> Pagina<T> {
    let tamanho_pagina = tamanho_pagina.max(1);
    let total_itens = itens.len();
    let total_paginas = total_itens.div_ceil(tamanho_pagina).max(1);

    let pagina = if pagina == 0 || pagina > total_paginas { 1 } else { pagina };
    let inicio = (pagina - 1) * tamanho_pagina;
    let fim = (inicio + tamanho_pagina).min(total_itens);

    let itens = if inicio >= total_itens {
        Vec::new()
    } else {
        itens.into_iter().skip(inicio).take(fim - inicio).collect()
    };

    Pagina { itens, pagina, tamanho_pagina, total_itens, total_paginas }
}

/// Aplica busca, ordenação e paginação de uma vez, na ordem das telas.
/// `chave` devolve `None` para campos de ordenação desconhecidos — nesse
/// caso a ordem original é mantida.
pub fn aplicar<T>(
    itens: Vec<T>,
    params: &ParametrosListagem,
    campos_busca: impl Fn(&T) -> Vec<String>,
    chave: impl Fn(&T, &str) -> Option<Chave>,
) -> Pagina<T> {
    let busca = params.busca.as_deref().unwrap_or("");
    let mut filtrados = filtrar(itens, busca, campos_busca);

    if let Some(campo) = params.ordenar_por.as_deref() {
        // Só ordena se o campo é conhecido para esta entidade
        if filtrados.first().map(|item| chave(item, campo).is_some()).unwrap_or(false) {
            let direcao = params.direcao.unwrap_or(Direcao::Asc);
            ordenar(&mut filtrados, direcao, |item| {
                chave(item, campo).expect("campo de ordenação conferido acima")
            });
        }
    }

    paginar(
        filtrados,
        params.pagina.unwrap_or(1),
        params.tamanho_pagina.unwrap_or(TAMANHO_PAGINA_PADRAO),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Registro {
        sigla: String,
        descricao: String,
        usuarios: i64,
    }

    fn registros() -> Vec<Registro> {
        vec![
            Registro { sigla: "CRM".into(), descricao: "Sistema de Gestão de Clientes".into(), usuarios: 120 },
            Registro { sigla: "ERP".into(), descricao: "Gestão integrada".into(), usuarios: 300 },
            Registro { sigla: "BI".into(), descricao: "Painéis analíticos".into(), usuarios: 45 },
            Registro { sigla: "PORTAL".into(), descricao: "Portal do cliente".into(), usuarios: 800 },
        ]
    }

    fn campos(r: &Registro) -> Vec<String> {
        vec![r.sigla.clone(), r.descricao.clone()]
    }

    #[test]
    fn filtro_substring_sem_maiusculas() {
        let resultado = filtrar(registros(), "cliente", campos);
        assert_eq!(resultado.len(), 2);
        assert!(resultado.iter().all(|r| r.sigla == "CRM" || r.sigla == "PORTAL"));
    }

    #[test]
    fn busca_vazia_restaura_lista_completa() {
        let filtrados = filtrar(registros(), "crm", campos);
        assert_eq!(filtrados.len(), 1);
        let restaurados = filtrar(registros(), "", campos);
        assert_eq!(restaurados.len(), 4);
    }

    #[test]
    fn ordenacao_descendente_inverte_a_ascendente() {
        let mut asc = registros();
        ordenar(&mut asc, Direcao::Asc, |r| Chave::texto(&r.sigla));
        let mut desc = registros();
        ordenar(&mut desc, Direcao::Desc, |r| Chave::texto(&r.sigla));
        let invertida: Vec<_> = asc.iter().rev().cloned().collect();
        assert_eq!(desc, invertida);
    }

    #[test]
    fn ordenacao_numerica_compara_pelo_valor() {
        let mut itens = registros();
        ordenar(&mut itens, Direcao::Asc, |r| Chave::Inteiro(r.usuarios));
        let siglas: Vec<_> = itens.iter().map(|r| r.sigla.as_str()).collect();
        assert_eq!(siglas, ["BI", "CRM", "ERP", "PORTAL"]);
    }

    #[test]
    fn paginacao_calcula_teto_de_paginas() {
        let pagina = paginar(registros(), 1, 3);
        assert_eq!(pagina.total_paginas, 2); // ceil(4 / 3)
        assert_eq!(pagina.itens.len(), 3);

        let ultima = paginar(registros(), 2, 3);
        assert_eq!(ultima.itens.len(), 1);
    }

    #[test]
    fn pagina_fora_do_intervalo_volta_para_a_primeira() {
        let pagina = paginar(registros(), 99, 3);
        assert_eq!(pagina.pagina, 1);
        assert_eq!(pagina.itens.len(), 3);
    }

    #[test]
    fn recorte_nunca_passa_do_tamanho_do_vetor() {
        let pagina = paginar(registros(), 1, 50);
        assert_eq!(pagina.itens.len(), 4);
        assert_eq!(pagina.total_paginas, 1);

        let vazia: Pagina<Registro> = paginar(Vec::new(), 1, 10);
        assert_eq!(vazia.total_itens, 0);
        assert_eq!(vazia.total_paginas, 1);
        assert!(vazia.itens.is_empty());
    }

    #[test]
    fn aplicar_combina_filtro_ordenacao_e_pagina() {
        let params = ParametrosListagem {
            busca: Some("gestão".into()),
            ordenar_por: Some("sigla".into()),
            direcao: Some(Direcao::Desc),
            pagina: Some(1),
            tamanho_pagina: Some(10),
        };
        let pagina = aplicar(registros(), &params, campos, |r, campo| match campo {
            "sigla" => Some(Chave::texto(&r.sigla)),
            "usuarios" => Some(Chave::Inteiro(r.usuarios)),
            _ => None,
        });
        let siglas: Vec<_> = pagina.itens.iter().map(|r| r.sigla.as_str()).collect();
        assert_eq!(siglas, ["ERP", "CRM"]);
    }

    #[test]
    fn campo_de_ordenacao_desconhecido_mantem_ordem_original() {
        let params = ParametrosListagem {
            ordenar_por: Some("inexistente".into()),
            ..Default::default()
        };
        let pagina = aplicar(registros(), &params, campos, |r, campo| match campo {
            "sigla" => Some(Chave::texto(&r.sigla)),
            _ => None,
        });
        assert_eq!(pagina.itens[0].sigla, "CRM");
    }
}
