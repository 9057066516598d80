// ==========================================
// Sistema de Controle de Estoque - Tipos de Erro
// ==========================================
// Ferramenta: macro derive do thiserror
// Taxonomia: decodificação (fatal) / esquema (fatal) /
//            defeitos por linha (nunca viram erro, linha é pulada)
// ==========================================

use thiserror::Error;

/// Erro do engine de análise
#[derive(Error, Debug)]
pub enum AnaliseError {
    // ===== Erros de arquivo / decodificação =====
    #[error("Arquivo não encontrado: {0}")]
    ArquivoNaoEncontrado(String),

    #[error("Formato de arquivo não suportado: {0} (apenas .xlsx/.xls/.csv)")]
    FormatoNaoSuportado(String),

    #[error("Falha na leitura do arquivo: {0}")]
    LeituraArquivo(String),

    #[error("Falha ao decodificar planilha Excel: {0}")]
    PlanilhaInvalida(String),

    #[error("Falha ao decodificar CSV: {0}")]
    CsvInvalido(String),

    // ===== Erros de esquema =====
    #[error("Colunas obrigatórias não encontradas: {0}")]
    ColunasObrigatorias(String),

    // ===== Erros de exportação =====
    #[error("Falha ao gravar relatório: {0}")]
    ExportacaoFalhou(String),

    // ===== Erro genérico =====
    #[error(transparent)]
    Outro(#[from] anyhow::Error),
}

impl From<std::io::Error> for AnaliseError {
    fn from(err: std::io::Error) -> Self {
        AnaliseError::LeituraArquivo(err.to_string())
    }
}

impl From<csv::Error> for AnaliseError {
    fn from(err: csv::Error) -> Self {
        AnaliseError::CsvInvalido(err.to_string())
    }
}

impl From<calamine::Error> for AnaliseError {
    fn from(err: calamine::Error) -> Self {
        AnaliseError::PlanilhaInvalida(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AnaliseError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AnaliseError::ExportacaoFalhou(err.to_string())
    }
}

/// Alias de Result
pub type AnaliseResult<T> = Result<T, AnaliseError>;
