// ==========================================
// Sistema de Controle de Estoque - Tipos de domínio
// ==========================================
// Enums compartilhados entre os analisadores
// Serialização: rótulos pt-BR, iguais aos exibidos na interface
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Status de item de estoque
// ==========================================
// Um item carrega um CONJUNTO de status: zerado/negativo são
// exclusivos entre si; duplicado e variante são eixos independentes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusItem {
    Zerado,
    Negativo,
    Duplicado,
    Variante,
}

impl fmt::Display for StatusItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusItem::Zerado => write!(f, "zerado"),
            StatusItem::Negativo => write!(f, "negativo"),
            StatusItem::Duplicado => write!(f, "duplicado"),
            StatusItem::Variante => write!(f, "variante"),
        }
    }
}

// ==========================================
// Status de pedido frente ao SLA
// ==========================================
// SLA: 1 dia útil (regra de faturamento) entre aprovação ajustada
// e faturamento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusPedido {
    #[serde(rename = "no-prazo")]
    NoPrazo,
    #[serde(rename = "atrasado")]
    Atrasado,
}

impl fmt::Display for StatusPedido {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPedido::NoPrazo => write!(f, "No Prazo"),
            StatusPedido::Atrasado => write!(f, "Atrasado"),
        }
    }
}

// ==========================================
// Unidade (site físico)
// ==========================================
// Inferida por arquivo: marcador no cabeçalho do salão (setores)
// ou código de estrutura pai (pedidos). Código desconhecido não é
// erro: vira Desconhecida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unidade {
    Barueri,
    Extrema,
    Desconhecida,
}

impl Unidade {
    /// Tabela fixa: código de estrutura pai → unidade
    pub fn da_estrutura_pai(codigo: &str) -> Unidade {
        match codigo.trim() {
            "1200" => Unidade::Barueri,
            "3400" => Unidade::Extrema,
            _ => Unidade::Desconhecida,
        }
    }

    /// Unidades conhecidas (para métricas por unidade)
    pub fn conhecidas() -> [Unidade; 2] {
        [Unidade::Barueri, Unidade::Extrema]
    }
}

impl fmt::Display for Unidade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unidade::Barueri => write!(f, "Barueri"),
            Unidade::Extrema => write!(f, "Extrema"),
            Unidade::Desconhecida => write!(f, "Unidade não identificada"),
        }
    }
}

// ==========================================
// Modelo de planilha (flag de template)
// ==========================================
// Auto decide apenas entre os dois layouts de estoque; setores e
// pedidos nunca são auto-detectados
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modelo {
    Auto,
    EstoqueLegado,
    EstoqueDisponivel,
    Setores,
    Pedidos,
}

// ==========================================
// Layouts concretos
// ==========================================

/// Layout da planilha de estoque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutEstoque {
    /// Coluna de quantidade "Total Físico" + colunas de localização
    Legado,
    /// Coluna de quantidade "Total - Disponível", sem localização
    Disponivel,
}

/// Layout da planilha de setores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutSetores {
    /// Uma coluna por setor lógico (captação/estoque e salão)
    DoisSetores,
    /// Cada setor lógico dividido em alocado + disponível
    QuatroSetores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unidade_da_estrutura_pai() {
        assert_eq!(Unidade::da_estrutura_pai("1200"), Unidade::Barueri);
        assert_eq!(Unidade::da_estrutura_pai(" 3400 "), Unidade::Extrema);
        assert_eq!(Unidade::da_estrutura_pai("9999"), Unidade::Desconhecida);
        assert_eq!(Unidade::da_estrutura_pai(""), Unidade::Desconhecida);
    }

    #[test]
    fn test_status_pedido_serializa_kebab() {
        let json = serde_json::to_string(&StatusPedido::NoPrazo).unwrap();
        assert_eq!(json, "\"no-prazo\"");
    }
}
