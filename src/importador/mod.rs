// ==========================================
// Sistema de Controle de Estoque - Camada de importação
// ==========================================
// Responsabilidade: cabeçalho livre → índices semânticos, e célula
// crua → valor tipado (convenções pt-BR)
// ==========================================

pub mod cabecalho;
pub mod valores;

pub use cabecalho::{
    cabecalhos_normalizados, detectar_layout_estoque, detectar_layout_setores, detectar_unidade,
    localizar_coluna, localizar_coluna_termos, localizar_obrigatorias, normalizar,
};
pub use valores::{parse_data_br, parse_numero_br};
