// ==========================================
// Sistema de Controle de Estoque - Camada de domínio
// ==========================================
// Objetos de valor criados a cada análise; nada é mutado depois de
// construído (exceto o 2º passe de totais de variantes, interno ao
// analisador de estoque)
// ==========================================

pub mod estoque;
pub mod pedidos;
pub mod setores;
pub mod types;

pub use estoque::{
    ItemEstoque, ItemProcessado, MetricasEstoque, ResultadoEstoque, SEM_LOCALIZACAO,
};
pub use pedidos::{
    DistribuicaoAtraso, MetricasPedidos, Pedido, ResultadoPedidos, ResumoUnidade, SLA_DIAS_UTEIS,
};
pub use setores::{ItemSetor, MetricasSetores, ResultadoSetores, TOLERANCIA_DIVERGENCIA};
pub use types::{LayoutEstoque, LayoutSetores, Modelo, StatusItem, StatusPedido, Unidade};
