// ==========================================
// Sistema de Controle de Estoque - API de análise
// ==========================================
// Fachada única: grade (ou arquivo) + modelo → resultado tipado.
// O modelo Auto decide apenas entre os dois layouts de estoque;
// setores e pedidos exigem seleção explícita.
// ==========================================

use crate::domain::estoque::ResultadoEstoque;
use crate::domain::pedidos::ResultadoPedidos;
use crate::domain::setores::ResultadoSetores;
use crate::domain::types::{LayoutEstoque, Modelo};
use crate::engine::calendario::CalendarioFeriados;
use crate::engine::{estoque, pedidos, setores};
use crate::erro::AnaliseResult;
use crate::planilha::{leitor, Grade};
use std::path::Path;

// ==========================================
// Resultado unificado
// ==========================================
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "tipo", rename_all = "lowercase")]
pub enum Analise {
    Estoque(ResultadoEstoque),
    Setores(ResultadoSetores),
    Pedidos(ResultadoPedidos),
}

// ==========================================
// Pontos de entrada
// ==========================================

/// Analisa uma grade já carregada segundo o modelo pedido
pub fn analisar_grade(grade: &Grade, modelo: Modelo) -> AnaliseResult<Analise> {
    tracing::info!(?modelo, linhas = grade.len(), "iniciando análise");

    match modelo {
        Modelo::Auto => estoque::analisar(grade, None).map(Analise::Estoque),
        Modelo::EstoqueLegado => {
            estoque::analisar(grade, Some(LayoutEstoque::Legado)).map(Analise::Estoque)
        }
        Modelo::EstoqueDisponivel => {
            estoque::analisar(grade, Some(LayoutEstoque::Disponivel)).map(Analise::Estoque)
        }
        Modelo::Setores => setores::analisar(grade).map(Analise::Setores),
        Modelo::Pedidos => {
            pedidos::analisar(grade, &CalendarioFeriados::new()).map(Analise::Pedidos)
        }
    }
}

/// Lê um arquivo .xlsx/.xls/.csv e o analisa; a leitura roda em
/// thread de bloqueio para não travar o runtime
pub async fn analisar_arquivo<P: AsRef<Path>>(caminho: P, modelo: Modelo) -> AnaliseResult<Analise> {
    let caminho = caminho.as_ref().to_path_buf();
    let grade = tokio::task::spawn_blocking(move || leitor::ler_grade(&caminho))
        .await
        .map_err(|e| anyhow::anyhow!("tarefa de leitura abortada: {e}"))??;
    analisar_grade(&grade, modelo)
}

/// Analisa um xlsx já em memória (upload)
pub fn analisar_bytes_xlsx(bytes: &[u8], modelo: Modelo) -> AnaliseResult<Analise> {
    let grade = leitor::ler_grade_xlsx_bytes(bytes)?;
    analisar_grade(&grade, modelo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planilha::Celula;

    fn grade_estoque_legado() -> Grade {
        vec![
            vec![
                Celula::texto("Cod Material"),
                Celula::texto("Desc Material"),
                Celula::texto("Total Físico"),
            ],
            vec![
                Celula::texto("A1"),
                Celula::texto("Parafuso"),
                Celula::Numero(10.0),
            ],
        ]
    }

    #[test]
    fn test_auto_cai_no_layout_legado() {
        let analise = analisar_grade(&grade_estoque_legado(), Modelo::Auto).unwrap();
        match analise {
            Analise::Estoque(resultado) => {
                assert_eq!(resultado.layout, LayoutEstoque::Legado);
                assert_eq!(resultado.itens.len(), 1);
            }
            _ => panic!("esperava análise de estoque"),
        }
    }

    #[test]
    fn test_modelo_explicito_vence_a_deteccao() {
        // Cabeçalho legado mas modelo Disponível forçado: a coluna de
        // quantidade "Total - Disponível" não existe → erro de coluna
        let erro =
            analisar_grade(&grade_estoque_legado(), Modelo::EstoqueDisponivel).unwrap_err();
        assert!(erro.to_string().contains("Colunas obrigatórias"));
    }

    #[test]
    fn test_serializacao_com_tag_de_tipo() {
        let analise = analisar_grade(&grade_estoque_legado(), Modelo::Auto).unwrap();
        let json = serde_json::to_value(&analise).unwrap();
        assert_eq!(json["tipo"], "estoque");
        assert!(json["metricas"].is_object());
    }
}
