// ==========================================
// Sistema de Controle de Estoque - Escrita xlsx
// ==========================================
// Serializa uma TabelaExportacao em arquivo .xlsx: cabeçalho em
// negrito e largura de coluna ajustada ao conteúdo (teto de 50)
// ==========================================

use crate::erro::AnaliseResult;
use crate::exportador::tabela::{TabelaExportacao, ValorTabela};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Largura máxima de coluna, em caracteres
const LARGURA_MAXIMA: usize = 50;

/// Escreve a tabela em `caminho` como planilha xlsx
pub fn exportar_xlsx(tabela: &TabelaExportacao, caminho: &Path) -> AnaliseResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(&tabela.nome_aba)?;

    let negrito = Format::new().set_bold();
    for (coluna, cabecalho) in tabela.cabecalhos.iter().enumerate() {
        worksheet.write_string_with_format(0, coluna as u16, cabecalho, &negrito)?;
    }

    for (indice, linha) in tabela.linhas.iter().enumerate() {
        for (coluna, valor) in linha.iter().enumerate() {
            match valor {
                ValorTabela::Texto(texto) => {
                    worksheet.write_string((indice + 1) as u32, coluna as u16, texto)?;
                }
                ValorTabela::Numero(numero) => {
                    worksheet.write_number((indice + 1) as u32, coluna as u16, *numero)?;
                }
            }
        }
    }

    for (coluna, largura) in larguras_colunas(tabela).into_iter().enumerate() {
        worksheet.set_column_width(coluna as u16, largura as f64)?;
    }

    workbook.save(caminho)?;

    tracing::info!(
        arquivo = %caminho.display(),
        linhas = tabela.linhas.len(),
        "planilha exportada"
    );
    Ok(())
}

/// Largura por coluna: maior conteúdo + 2, limitada a LARGURA_MAXIMA
fn larguras_colunas(tabela: &TabelaExportacao) -> Vec<usize> {
    let mut larguras: Vec<usize> = tabela
        .cabecalhos
        .iter()
        .map(|c| c.chars().count())
        .collect();

    for linha in &tabela.linhas {
        for (coluna, valor) in linha.iter().enumerate() {
            if coluna < larguras.len() {
                larguras[coluna] = larguras[coluna].max(valor.como_texto().chars().count());
            }
        }
    }

    larguras
        .into_iter()
        .map(|maior| (maior + 2).min(LARGURA_MAXIMA))
        .collect()
}
