use chrono::NaiveDate;

// O backend ora devolve datas como `YYYY-MM-DD`, ora como timestamp ISO-8601
// completo. Toda entrada passa por aqui e vira um NaiveDate canônico; a
// exibição é sempre `dd/mm/yyyy`.

/// Interpreta `YYYY-MM-DD` ou um timestamp ISO-8601 completo.
///
/// O recorte antes do 'T' evita reinterpretar o instante em outro fuso:
/// `2025-12-15T00:00:00.000Z` é o dia 15, não importa o relógio local.
pub fn normalizar_data(texto: &str) -> Option<NaiveDate> {
    let texto = texto.trim();
    if texto.is_empty() {
        return None;
    }
    let so_data = texto.split('T').next().unwrap_or(texto);
    NaiveDate::parse_from_str(so_data, "%Y-%m-%d").ok()
}

/// Formata uma data canônica para exibição (`dd/mm/yyyy`).
pub fn formatar_data(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

/// Atalho para relatórios: recebe o texto cru vindo da API/banco e devolve a
/// forma de exibição, ou `-` quando ausente/inválido.
pub fn exibir_data(texto: Option<&str>) -> String {
    texto
        .and_then(normalizar_data)
        .map(formatar_data)
        .unwrap_or_else(|| "-".to_string())
}

/// Janela de vigência dos registros de associação: quando ambas as pontas
/// existem, o início não pode passar do término.
pub fn janela_valida(inicio: Option<NaiveDate>, termino: Option<NaiveDate>) -> bool {
    match (inicio, termino) {
        (Some(i), Some(t)) => i <= t,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normaliza_data_simples() {
        let data = normalizar_data("2024-01-01").unwrap();
        assert_eq!(data, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn normaliza_timestamp_completo() {
        // Round-trip do timestamp ISO para o formato de exibição
        let data = normalizar_data("2025-12-15T00:00:00.000Z").unwrap();
        assert_eq!(formatar_data(data), "15/12/2025");
    }

    #[test]
    fn entrada_invalida_vira_none() {
        assert!(normalizar_data("").is_none());
        assert!(normalizar_data("15/12/2025").is_none());
        assert!(normalizar_data("não é data").is_none());
    }

    #[test]
    fn exibicao_com_ausencia() {
        assert_eq!(exibir_data(None), "-");
        assert_eq!(exibir_data(Some("")), "-");
        assert_eq!(exibir_data(Some("2024-06-30")), "30/06/2024");
    }

    #[test]
    fn janela_exige_inicio_antes_do_termino() {
        let inicio = NaiveDate::from_ymd_opt(2024, 1, 1);
        let termino = NaiveDate::from_ymd_opt(2024, 12, 31);
        assert!(janela_valida(inicio, termino));
        assert!(!janela_valida(termino, inicio));
        // Sem término, a janela é aberta e sempre válida
        assert!(janela_valida(inicio, None));
        assert!(janela_valida(None, None));
    }
}
