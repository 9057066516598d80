// ==========================================
// Sistema de Controle de Estoque - Camada de planilha
// ==========================================
// Fronteira de decodificação: bytes → grade de células
// Contrato: linha 0 é o cabeçalho, dados a partir da linha 1
// ==========================================

pub mod leitor;

pub use leitor::{ler_grade, ler_grade_csv, ler_grade_xlsx, ler_grade_xlsx_bytes};

use serde::{Deserialize, Serialize};

// ==========================================
// Celula - valor escalar heterogêneo
// ==========================================
// Uma célula pode vir como número, texto, booleano ou vazia.
// Os parsers escalares aceitam qualquer variante e nunca falham.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Celula {
    Vazia,
    Texto(String),
    Numero(f64),
    Booleano(bool),
}

/// Grade de células: linhas × colunas
pub type Grade = Vec<Vec<Celula>>;

impl Celula {
    pub fn texto<T: Into<String>>(valor: T) -> Celula {
        Celula::Texto(valor.into())
    }

    pub fn esta_vazia(&self) -> bool {
        match self {
            Celula::Vazia => true,
            Celula::Texto(t) => t.trim().is_empty(),
            _ => false,
        }
    }

    /// Representação textual aparada (números inteiros sem casa decimal,
    /// como o ERP exporta códigos)
    pub fn como_texto(&self) -> String {
        match self {
            Celula::Vazia => String::new(),
            Celula::Texto(t) => t.trim().to_string(),
            Celula::Numero(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Celula::Booleano(b) => b.to_string(),
        }
    }
}

impl From<&calamine::Data> for Celula {
    fn from(data: &calamine::Data) -> Self {
        use calamine::Data;
        match data {
            Data::Empty => Celula::Vazia,
            Data::String(s) => Celula::Texto(s.clone()),
            Data::Float(f) => Celula::Numero(*f),
            Data::Int(i) => Celula::Numero(*i as f64),
            Data::Bool(b) => Celula::Booleano(*b),
            // Datas vêm como serial Excel; o parser de datas converte
            Data::DateTime(dt) => Celula::Numero(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Celula::Texto(s.clone()),
            Data::Error(_) => Celula::Vazia,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_como_texto_numero_inteiro_sem_decimal() {
        assert_eq!(Celula::Numero(12345.0).como_texto(), "12345");
        assert_eq!(Celula::Numero(12.5).como_texto(), "12.5");
    }

    #[test]
    fn test_esta_vazia() {
        assert!(Celula::Vazia.esta_vazia());
        assert!(Celula::texto("   ").esta_vazia());
        assert!(!Celula::Numero(0.0).esta_vazia());
        assert!(!Celula::texto("x").esta_vazia());
    }
}
