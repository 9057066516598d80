// ==========================================
// Sistema de Controle de Estoque - Tabelas de exportação
// ==========================================
// Resultado de análise → tabela retangular de texto pronta para
// escrita. Funções puras; a serialização xlsx fica em xlsx.rs.
// Rótulos e formatos numéricos em pt-BR, iguais aos da interface.
// ==========================================

use crate::domain::estoque::{ItemProcessado, ResultadoEstoque};
use crate::domain::pedidos::{Pedido, ResultadoPedidos};
use crate::domain::setores::ResultadoSetores;
use chrono::NaiveDate;

// ==========================================
// Nomes padrão dos arquivos gerados
// ==========================================
pub const ARQUIVO_ESTOQUE: &str = "relatorio-estoque.xlsx";
pub const ARQUIVO_SETORES: &str = "relatorio-setores.xlsx";
pub const ARQUIVO_PEDIDOS: &str = "relatorio-pedidos.xlsx";
pub const ARQUIVO_PEDIDOS_ATRASADOS: &str = "pedidos-atrasados.xlsx";
pub const ARQUIVO_SEM_ENDERECO: &str = "itens-sem-endereco.xlsx";

// ==========================================
// TabelaExportacao
// ==========================================

/// Valor de uma célula exportada. Valores monetários saem como Numero
/// para a coluna continuar numérica no Excel; datas e rótulos saem
/// como texto já formatado
#[derive(Debug, Clone, PartialEq)]
pub enum ValorTabela {
    Texto(String),
    Numero(f64),
}

impl ValorTabela {
    pub fn texto<T: Into<String>>(valor: T) -> ValorTabela {
        ValorTabela::Texto(valor.into())
    }

    /// Representação textual (largura de coluna, asserções de teste)
    pub fn como_texto(&self) -> String {
        match self {
            ValorTabela::Texto(texto) => texto.clone(),
            ValorTabela::Numero(numero) => formatar_numero_br(*numero),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TabelaExportacao {
    /// Nome da aba dentro do arquivo
    pub nome_aba: String,
    pub cabecalhos: Vec<String>,
    pub linhas: Vec<Vec<ValorTabela>>,
}

impl TabelaExportacao {
    fn new(nome_aba: &str, cabecalhos: &[&str]) -> Self {
        TabelaExportacao {
            nome_aba: nome_aba.to_string(),
            cabecalhos: cabecalhos.iter().map(|c| c.to_string()).collect(),
            linhas: Vec::new(),
        }
    }
}

// ==========================================
// Formatação pt-BR
// ==========================================

/// Separador de milhar "." e decimal ","; inteiros sem casas
pub fn formatar_numero_br(valor: f64) -> String {
    if valor.fract() == 0.0 && valor.abs() < 1e15 {
        agrupar_milhares(&format!("{}", valor as i64))
    } else {
        let texto = format!("{:.2}", valor);
        let (inteiro, decimal) = texto.split_once('.').unwrap_or((texto.as_str(), "00"));
        format!("{},{}", agrupar_milhares(inteiro), decimal)
    }
}

/// Moeda sempre com 2 casas: "R$ 1.234,56"
pub fn formatar_moeda_br(valor: f64) -> String {
    let texto = format!("{:.2}", valor.abs());
    let (inteiro, decimal) = texto.split_once('.').unwrap_or((texto.as_str(), "00"));
    let sinal = if valor < 0.0 { "-" } else { "" };
    format!("{}R$ {},{}", sinal, agrupar_milhares(inteiro), decimal)
}

pub fn formatar_data_br(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

fn agrupar_milhares(inteiro: &str) -> String {
    let (sinal, digitos) = match inteiro.strip_prefix('-') {
        Some(resto) => ("-", resto),
        None => ("", inteiro),
    };

    let mut agrupado = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (posicao, c) in digitos.chars().enumerate() {
        if posicao > 0 && (digitos.len() - posicao) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(c);
    }
    format!("{}{}", sinal, agrupado)
}

// ==========================================
// Tabelas de estoque
// ==========================================

const CABECALHOS_ESTOQUE: [&str; 10] = [
    "Código",
    "Descrição",
    "Estação",
    "Rack",
    "Linha Prod Alocado",
    "Coluna Prod Alocado",
    "Total Físico",
    "Total (com variantes)",
    "Status",
    "Variantes",
];

fn linha_estoque(item: &ItemProcessado) -> Vec<ValorTabela> {
    let status = if item.status.is_empty() {
        "-".to_string()
    } else {
        item.status
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let variantes = item
        .variantes
        .as_ref()
        .map(|v| v.join(", "))
        .unwrap_or_else(|| "-".to_string());

    vec![
        ValorTabela::texto(item.cod_material.clone()),
        ValorTabela::texto(item.desc_material.clone()),
        ValorTabela::texto(item.estacao.clone()),
        ValorTabela::texto(item.rack.clone()),
        ValorTabela::texto(item.linha_prod_alocado.clone()),
        ValorTabela::texto(item.coluna_prod_alocado.clone()),
        ValorTabela::texto(formatar_numero_br(item.quantidade)),
        ValorTabela::texto(formatar_numero_br(item.total_quantidade)),
        ValorTabela::texto(status),
        ValorTabela::texto(variantes),
    ]
}

pub fn tabela_estoque(resultado: &ResultadoEstoque) -> TabelaExportacao {
    let mut tabela = TabelaExportacao::new("Estoque", &CABECALHOS_ESTOQUE);
    tabela.linhas = resultado.itens.iter().map(linha_estoque).collect();
    tabela
}

/// Recorte dos itens sem nenhuma localização cadastrada
pub fn tabela_itens_sem_endereco(resultado: &ResultadoEstoque) -> TabelaExportacao {
    let mut tabela = TabelaExportacao::new("Sem Endereço", &CABECALHOS_ESTOQUE);
    tabela.linhas = resultado
        .itens
        .iter()
        .filter(|item| item.sem_endereco())
        .map(linha_estoque)
        .collect();
    tabela
}

// ==========================================
// Tabela de setores
// ==========================================

pub fn tabela_setores(resultado: &ResultadoSetores) -> TabelaExportacao {
    let mut tabela = TabelaExportacao::new(
        "Setores",
        &[
            "Código",
            "Descrição",
            "Total Físico",
            "Estoque Alocado",
            "Estoque Disponível",
            "Salão Alocado",
            "Salão Disponível",
            "Diferença",
        ],
    );
    tabela.linhas = resultado
        .itens
        .iter()
        .map(|item| {
            vec![
                ValorTabela::texto(item.codigo.clone()),
                ValorTabela::texto(item.descricao.clone()),
                ValorTabela::texto(formatar_numero_br(item.total_fisico)),
                ValorTabela::texto(formatar_numero_br(item.estoque_alocado)),
                ValorTabela::texto(formatar_numero_br(item.estoque_disponivel)),
                ValorTabela::texto(formatar_numero_br(item.salao_alocado)),
                ValorTabela::texto(formatar_numero_br(item.salao_disponivel)),
                ValorTabela::texto(formatar_numero_br(item.diferenca)),
            ]
        })
        .collect();
    tabela
}

// ==========================================
// Tabelas de pedidos
// ==========================================

const CABECALHOS_PEDIDOS: [&str; 8] = [
    "Pedido",
    "Valor Praticado",
    "Data Aprovação (Original)",
    "Data Aprovação (Ajustada)",
    "Data Faturamento",
    "Dias Úteis",
    "Status",
    "Unidade",
];

fn linha_pedido(pedido: &Pedido) -> Vec<ValorTabela> {
    vec![
        ValorTabela::texto(pedido.codigo_pedido.clone()),
        // Valor bruto: a coluna continua numérica no Excel
        ValorTabela::Numero(pedido.valor_praticado),
        ValorTabela::texto(formatar_data_br(pedido.data_aprovacao_original)),
        ValorTabela::texto(formatar_data_br(pedido.data_aprovacao)),
        ValorTabela::texto(formatar_data_br(pedido.data_faturamento)),
        ValorTabela::texto(pedido.dias_uteis.to_string()),
        ValorTabela::texto(pedido.status.to_string()),
        ValorTabela::texto(pedido.unidade.to_string()),
    ]
}

pub fn tabela_pedidos(resultado: &ResultadoPedidos) -> TabelaExportacao {
    let mut tabela = TabelaExportacao::new("Pedidos", &CABECALHOS_PEDIDOS);
    tabela.linhas = resultado.pedidos.iter().map(linha_pedido).collect();
    tabela
}

/// Recorte apenas dos pedidos fora do SLA
pub fn tabela_pedidos_atrasados(resultado: &ResultadoPedidos) -> TabelaExportacao {
    let mut tabela = TabelaExportacao::new("Pedidos Atrasados", &CABECALHOS_PEDIDOS);
    tabela.linhas = resultado
        .pedidos
        .iter()
        .filter(|pedido| !pedido.dentro_do_prazo)
        .map(linha_pedido)
        .collect();
    tabela
}
