// ==========================================
// Sistema de Controle de Estoque - Parsers escalares
// ==========================================
// Convenções pt-BR fazem parte do contrato:
// - números: "1.234,56" (ponto = milhar, vírgula = decimal)
// - negativos contábeis: "(50)" e "50-"
// - datas: "DD/MM/YYYY" com hora opcional, ou serial do Excel
// Parsers numéricos NUNCA falham (defeito de linha → 0); parser de
// data devolve None, nunca uma data padrão
// ==========================================

use crate::planilha::Celula;
use chrono::{Duration, NaiveDate};

/// Serial 1 do Excel = 1899-12-31 (época fixada um dia antes)
const EPOCA_EXCEL: (i32, u32, u32) = (1899, 12, 30);

/// Converte uma célula em número, aceitando formato brasileiro
///
/// Contrato: sempre devolve um número; somas a jusante nunca
/// propagam NaN
pub fn parse_numero_br(celula: &Celula) -> f64 {
    match celula {
        Celula::Vazia | Celula::Booleano(_) => 0.0,
        Celula::Numero(n) => {
            if n.is_nan() {
                0.0
            } else {
                *n
            }
        }
        Celula::Texto(texto) => parse_numero_texto(texto),
    }
}

fn parse_numero_texto(texto: &str) -> f64 {
    let aparado = texto.trim();
    if aparado.is_empty() || aparado == "-" {
        return 0.0;
    }

    // Sinal negativo: prefixo "-", notação contábil "(...)" ou sufixo "-"
    let negativo =
        aparado.starts_with('-') || aparado.starts_with('(') || aparado.ends_with('-');

    // Mantém apenas dígitos, vírgula e ponto (descarta "R$", espaços etc.)
    let mut limpo: String = aparado
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    // Com vírgula presente: pontos são separador de milhar
    if limpo.contains(',') {
        limpo = limpo.replace('.', "").replace(',', ".");
    }

    let magnitude = limpo.parse::<f64>().unwrap_or(0.0);

    if negativo && magnitude > 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Converte uma célula em data, aceitando serial do Excel ou
/// "DD/MM/YYYY" (componente de hora após espaço é descartado)
pub fn parse_data_br(celula: &Celula) -> Option<NaiveDate> {
    match celula {
        Celula::Vazia | Celula::Booleano(_) => None,
        Celula::Numero(serial) => parse_data_serial(*serial),
        Celula::Texto(texto) => parse_data_texto(texto),
    }
}

fn parse_data_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let (ano, mes, dia) = EPOCA_EXCEL;
    let epoca = NaiveDate::from_ymd_opt(ano, mes, dia)?;
    // Fração do serial é hora do dia; a análise trabalha só com a data
    epoca.checked_add_signed(Duration::days(serial.trunc() as i64))
}

fn parse_data_texto(texto: &str) -> Option<NaiveDate> {
    let aparado = texto.trim();
    if aparado.is_empty() {
        return None;
    }

    // "10/12/2025 11:43:46" → fica só "10/12/2025"
    let parte_data = aparado.split_whitespace().next()?;

    let partes: Vec<&str> = parte_data.split('/').collect();
    if partes.len() != 3 {
        return None;
    }

    let dia: u32 = partes[0].parse().ok()?;
    let mes: u32 = partes[1].parse().ok()?;
    let ano: i32 = partes[2].parse().ok()?;

    NaiveDate::from_ymd_opt(ano, mes, dia)
}
