// ==========================================
// Sistema de Controle de Estoque - Modelo de pedidos
// ==========================================
// Análise de tempo de vida: aprovação (ajustada para dia útil de
// aprovação) → faturamento, medida em dias úteis de FATURAMENTO.
// São duas réguas de calendário distintas; não misturar.
// ==========================================

use crate::domain::types::{StatusPedido, Unidade};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// SLA de faturamento: 1 dia útil
pub const SLA_DIAS_UTEIS: i64 = 1;

// ==========================================
// Pedido - um pedido analisado
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pedido {
    /// Identidade determinística: "pedido-<índice da linha>"
    pub id: String,
    pub codigo_pedido: String,
    pub valor_praticado: f64,

    /// Data de aprovação como veio da planilha
    pub data_aprovacao_original: NaiveDate,
    /// Aprovação deslocada para o próximo dia útil de aprovação
    /// (igual à original quando ela já é dia útil)
    pub data_aprovacao: NaiveDate,
    pub data_faturamento: NaiveDate,

    /// Dias úteis (regra de faturamento) entre aprovação ajustada e
    /// faturamento
    pub dias_uteis: i64,
    pub dentro_do_prazo: bool,
    pub status: StatusPedido,

    pub codigo_estrutura_pai: Option<String>,
    pub unidade: Unidade,
}

// ==========================================
// Métricas agregadas de pedidos
// ==========================================
// Percentuais arredondados para inteiro; tempo médio com 1 casa
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricasPedidos {
    pub total_pedidos: usize,
    pub valor_total: f64,
    pub pedidos_no_prazo: usize,
    pub pedidos_atrasados: usize,
    pub percentual_no_prazo: i64,
    pub percentual_atrasados: i64,
    pub tempo_medio_dias_uteis: f64,
    pub valor_no_prazo: f64,
    pub valor_atrasados: f64,
}

// ==========================================
// Distribuição de atraso
// ==========================================
// Apenas pedidos atrasados; percentual sobre o subconjunto atrasado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistribuicaoAtraso {
    /// Rótulo do balde: "1 dia", "2 dias", ..., "5+ dias"
    pub dias_atraso: String,
    pub quantidade: usize,
    pub percentual: i64,
}

// ==========================================
// Resumo por unidade
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumoUnidade {
    pub unidade: Unidade,
    pub metricas: MetricasPedidos,
    pub distribuicao_atraso: Vec<DistribuicaoAtraso>,
}

// ==========================================
// Resultado da análise de pedidos
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultadoPedidos {
    pub pedidos: Vec<Pedido>,
    pub metricas: MetricasPedidos,
    pub distribuicao_atraso: Vec<DistribuicaoAtraso>,
    /// Um resumo por unidade conhecida, na ordem de Unidade::conhecidas()
    pub por_unidade: Vec<ResumoUnidade>,
}
