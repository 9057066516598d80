// ==========================================
// Sistema de Controle de Estoque - Motores de análise
// ==========================================
// Funções puras sobre a grade importada; nenhum motor faz E/S.
// - calendario: feriados nacionais e réguas de dia útil
// - estoque: classificação de saúde do estoque
// - setores: conciliação física × alocação por setor
// - pedidos: SLA de faturamento em dias úteis
// ==========================================

pub mod calendario;
pub mod estoque;
pub mod pedidos;
pub mod setores;

pub use calendario::CalendarioFeriados;
