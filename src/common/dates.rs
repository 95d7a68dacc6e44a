// src/common/dates.rs

use chrono::{DateTime, NaiveDate, Utc};

const FORMATO_EXIBICAO: &str = "%d/%m/%Y";

/// Máscara progressiva `DD/MM/AAAA` aplicada a cada tecla digitada.
///
/// Remove tudo que não é dígito, mantém no máximo 8 dígitos e insere `/`
/// depois do 2º e do 4º dígito.
pub fn mask_date(texto: &str) -> String {
    let digitos: String = texto
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(8)
        .collect();

    match digitos.len() {
        0..=2 => digitos,
        3..=4 => format!("{}/{}", &digitos[..2], &digitos[2..]),
        _ => format!("{}/{}/{}", &digitos[..2], &digitos[2..4], &digitos[4..]),
    }
}

/// `DD/MM/AAAA` completo e existente no calendário.
pub fn parse_display_date(texto: &str) -> Option<NaiveDate> {
    let bytes = texto.as_bytes();
    let formato_ok = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

    if !formato_ok {
        return None;
    }
    NaiveDate::parse_from_str(texto, FORMATO_EXIBICAO).ok()
}

/// Converte a data de exibição para o instante ISO (meia-noite UTC) esperado pelo backend.
pub fn to_iso_date(texto: &str) -> Option<DateTime<Utc>> {
    parse_display_date(texto)
        .and_then(|data| data.and_hms_opt(0, 0, 0))
        .map(|instante| instante.and_utc())
}

/// Converte o valor vindo do backend (`2025-03-15T00:00:00.000Z` ou `2025-03-15`)
/// para o formato do campo de texto. Valores ilegíveis viram string vazia.
pub fn format_date_for_input(iso: Option<&str>) -> String {
    let Some(iso) = iso.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let data = DateTime::parse_from_rfc3339(iso)
        .map(|instante| instante.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok());

    data.map(|d| d.format(FORMATO_EXIBICAO).to_string())
        .unwrap_or_default()
}
