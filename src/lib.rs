// ==========================================
// Sistema de Controle de Estoque - Biblioteca
// ==========================================
// Análise de planilhas de ERP: saúde de estoque, conciliação por
// setor e SLA de faturamento de pedidos
// Pipeline: planilha → grade → importador → engine → exportador
// ==========================================

// ==========================================
// Declaração de módulos
// ==========================================

// Camada de domínio - tipos e entidades
pub mod domain;

// Camada de planilha - arquivo → grade de células
pub mod planilha;

// Camada de importação - cabeçalhos e valores pt-BR
pub mod importador;

// Camada de engine - análises puras
pub mod engine;

// Camada de exportação - relatórios xlsx
pub mod exportador;

// Camada de API - fachada de análise
pub mod api;

// Erros
pub mod erro;

// Logging
pub mod logging;

// ==========================================
// Reexportação dos tipos centrais
// ==========================================

// Tipos de domínio
pub use domain::types::{
    LayoutEstoque, LayoutSetores, Modelo, StatusItem, StatusPedido, Unidade,
};

// Entidades
pub use domain::{
    DistribuicaoAtraso, ItemEstoque, ItemProcessado, ItemSetor, MetricasEstoque, MetricasPedidos,
    MetricasSetores, Pedido, ResultadoEstoque, ResultadoPedidos, ResultadoSetores, ResumoUnidade,
};

// Planilha
pub use planilha::{Celula, Grade};

// Engine
pub use engine::CalendarioFeriados;

// API
pub use api::{analisar_arquivo, analisar_bytes_xlsx, analisar_grade, Analise};

// Erros
pub use erro::{AnaliseError, AnaliseResult};

// ==========================================
// Constantes da aplicação
// ==========================================

pub const APP_NAME: &str = "Sistema de Controle de Estoque";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
