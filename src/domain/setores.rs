// ==========================================
// Sistema de Controle de Estoque - Modelo de setores
// ==========================================
// Conferência cruzada: Total Físico (retaguarda) × soma das colunas
// de setor. Os dois layouts (2 e 4 colunas) compartilham este shape:
// no layout legado o total de cada setor entra em *_disponivel e
// *_alocado fica 0, mantendo o subtotal do balde idêntico.
// ==========================================

use crate::domain::types::{LayoutSetores, Unidade};
use serde::{Deserialize, Serialize};

/// Tolerância de arredondamento na conferência de divergência
pub const TOLERANCIA_DIVERGENCIA: f64 = 0.01;

// ==========================================
// ItemSetor - uma linha conferida
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSetor {
    pub codigo: String,
    pub descricao: String,

    /// Total reportado pela retaguarda
    pub total_fisico: f64,

    // ===== Setor Estoque (Captação) =====
    pub estoque_alocado: f64,
    pub estoque_disponivel: f64,

    // ===== Setor Salão de Vendas =====
    pub salao_alocado: f64,
    pub salao_disponivel: f64,

    /// total_fisico - soma das colunas de setor presentes
    pub diferenca: f64,
}

impl ItemSetor {
    pub fn subtotal_estoque(&self) -> f64 {
        self.estoque_alocado + self.estoque_disponivel
    }

    pub fn subtotal_salao(&self) -> f64 {
        self.salao_alocado + self.salao_disponivel
    }

    pub fn divergente(&self) -> bool {
        self.diferenca.abs() > TOLERANCIA_DIVERGENCIA
    }
}

// ==========================================
// Métricas agregadas de setores
// ==========================================
// Zerados/negativos são contados por SUBTOTAL de balde lógico
// (alocado + disponível), não por coluna crua
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricasSetores {
    pub unidade: Unidade,
    pub total_itens: usize,

    pub estoque_alocado_total: f64,
    pub estoque_disponivel_total: f64,
    pub salao_alocado_total: f64,
    pub salao_disponivel_total: f64,

    pub estoque_zerados: usize,
    pub estoque_negativos: usize,
    pub salao_zerados: usize,
    pub salao_negativos: usize,

    pub itens_divergentes: usize,
}

impl Default for MetricasSetores {
    fn default() -> Self {
        MetricasSetores {
            unidade: Unidade::Desconhecida,
            total_itens: 0,
            estoque_alocado_total: 0.0,
            estoque_disponivel_total: 0.0,
            salao_alocado_total: 0.0,
            salao_disponivel_total: 0.0,
            estoque_zerados: 0,
            estoque_negativos: 0,
            salao_zerados: 0,
            salao_negativos: 0,
            itens_divergentes: 0,
        }
    }
}

// ==========================================
// Resultado da análise de setores
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultadoSetores {
    pub layout: LayoutSetores,
    pub itens: Vec<ItemSetor>,
    pub metricas: MetricasSetores,
}
