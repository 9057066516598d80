// ==========================================
// Sistema de Controle de Estoque - Leitores de planilha
// ==========================================
// Suporta: Excel (.xlsx/.xls) / CSV (.csv)
// Saída: Grade (linha 0 = cabeçalho); linhas totalmente em branco
// são descartadas na leitura
// ==========================================

use crate::erro::{AnaliseError, AnaliseResult};
use crate::planilha::{Celula, Grade};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;

/// Lê um arquivo para uma grade, escolhendo o leitor pela extensão
pub fn ler_grade<P: AsRef<Path>>(caminho: P) -> AnaliseResult<Grade> {
    let caminho = caminho.as_ref();

    if !caminho.exists() {
        return Err(AnaliseError::ArquivoNaoEncontrado(
            caminho.display().to_string(),
        ));
    }

    let ext = caminho
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => ler_grade_csv(caminho),
        "xlsx" | "xls" => ler_grade_xlsx(caminho),
        _ => Err(AnaliseError::FormatoNaoSuportado(ext)),
    }
}

/// Lê a primeira aba de um arquivo Excel
pub fn ler_grade_xlsx<P: AsRef<Path>>(caminho: P) -> AnaliseResult<Grade> {
    let mut workbook = open_workbook_auto(caminho.as_ref())
        .map_err(|e| AnaliseError::PlanilhaInvalida(e.to_string()))?;

    let nomes = workbook.sheet_names().to_vec();
    let nome = nomes
        .first()
        .cloned()
        .ok_or_else(|| AnaliseError::PlanilhaInvalida("arquivo sem abas".to_string()))?;

    let faixa = workbook
        .worksheet_range(&nome)
        .map_err(|e| AnaliseError::PlanilhaInvalida(e.to_string()))?;

    Ok(grade_da_faixa(&faixa))
}

/// Lê a primeira aba de um documento Excel já em memória
/// (o chamador entrega o stream de bytes do upload)
pub fn ler_grade_xlsx_bytes(bytes: &[u8]) -> AnaliseResult<Grade> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| AnaliseError::PlanilhaInvalida(e.to_string()))?;

    let nomes = workbook.sheet_names().to_vec();
    let nome = nomes
        .first()
        .cloned()
        .ok_or_else(|| AnaliseError::PlanilhaInvalida("arquivo sem abas".to_string()))?;

    let faixa = workbook
        .worksheet_range(&nome)
        .map_err(|e| AnaliseError::PlanilhaInvalida(e.to_string()))?;

    Ok(grade_da_faixa(&faixa))
}

/// Lê um CSV para uma grade (cabeçalho tratado como linha 0)
pub fn ler_grade_csv<P: AsRef<Path>>(caminho: P) -> AnaliseResult<Grade> {
    let arquivo = File::open(caminho.as_ref())?;
    let mut leitor = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // tolera linhas de comprimentos diferentes
        .from_reader(arquivo);

    let mut grade: Grade = Vec::new();
    for resultado in leitor.records() {
        let registro = resultado?;
        let linha: Vec<Celula> = registro
            .iter()
            .map(|campo| {
                let aparado = campo.trim();
                if aparado.is_empty() {
                    Celula::Vazia
                } else {
                    Celula::texto(aparado)
                }
            })
            .collect();

        // Pula linhas totalmente em branco
        if linha.iter().all(|c| c.esta_vazia()) {
            continue;
        }

        grade.push(linha);
    }

    Ok(grade)
}

fn grade_da_faixa(faixa: &Range<Data>) -> Grade {
    let mut grade: Grade = Vec::new();
    for linha in faixa.rows() {
        let celulas: Vec<Celula> = linha.iter().map(Celula::from).collect();
        // Mantém a linha de cabeçalho; depois dela, descarta em branco
        if !grade.is_empty() && celulas.iter().all(|c| c.esta_vazia()) {
            continue;
        }
        grade.push(celulas);
    }
    grade
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_com_cabecalho_e_dados() {
        let mut arquivo = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(arquivo, "Cod Material,Desc Material,Total Físico").unwrap();
        writeln!(arquivo, "A1,Parafuso M4,10").unwrap();
        writeln!(arquivo, "A2,Porca M4,5").unwrap();

        let grade = ler_grade(arquivo.path()).unwrap();
        assert_eq!(grade.len(), 3);
        assert_eq!(grade[0][0].como_texto(), "Cod Material");
        assert_eq!(grade[1][1].como_texto(), "Parafuso M4");
    }

    #[test]
    fn test_csv_pula_linhas_em_branco() {
        let mut arquivo = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(arquivo, "Cod Material,Total Físico").unwrap();
        writeln!(arquivo, "A1,10").unwrap();
        writeln!(arquivo, ",").unwrap();
        writeln!(arquivo, "A2,5").unwrap();

        let grade = ler_grade(arquivo.path()).unwrap();
        assert_eq!(grade.len(), 3);
    }

    #[test]
    fn test_arquivo_inexistente() {
        let resultado = ler_grade(Path::new("nao_existe.csv"));
        assert!(matches!(
            resultado,
            Err(AnaliseError::ArquivoNaoEncontrado(_))
        ));
    }

    #[test]
    fn test_extensao_nao_suportada() {
        let arquivo = NamedTempFile::with_suffix(".pdf").unwrap();
        let resultado = ler_grade(arquivo.path());
        assert!(matches!(
            resultado,
            Err(AnaliseError::FormatoNaoSuportado(_))
        ));
    }
}
