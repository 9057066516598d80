// ==========================================
// Sistema de Controle de Estoque - Exportação
// ==========================================
// tabela: resultado de análise → tabela de texto (puro)
// xlsx: tabela → arquivo .xlsx
// ==========================================

pub mod tabela;
pub mod xlsx;

pub use tabela::{
    formatar_data_br, formatar_moeda_br, formatar_numero_br, tabela_estoque,
    tabela_itens_sem_endereco, tabela_pedidos, tabela_pedidos_atrasados, tabela_setores,
    TabelaExportacao, ValorTabela, ARQUIVO_ESTOQUE, ARQUIVO_PEDIDOS, ARQUIVO_PEDIDOS_ATRASADOS,
    ARQUIVO_SEM_ENDERECO, ARQUIVO_SETORES,
};
pub use xlsx::exportar_xlsx;
