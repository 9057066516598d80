// ==========================================
// Sistema de Controle de Estoque - Analisador de setores
// ==========================================
// Conferência cruzada por item: Total Físico (retaguarda) × soma das
// colunas de setor. Dois layouts, um mesmo contrato:
// - DoisSetores (legado): 1 coluna por setor lógico
// - QuatroSetores: cada setor dividido em Alocado/Disponível
// Zerados/negativos contam por SUBTOTAL de balde, não por coluna.
// ==========================================

use crate::domain::setores::{ItemSetor, MetricasSetores, ResultadoSetores};
use crate::domain::types::{LayoutSetores, Unidade};
use crate::erro::{AnaliseError, AnaliseResult};
use crate::importador::{
    cabecalhos_normalizados, detectar_layout_setores, detectar_unidade, localizar_coluna,
    localizar_coluna_termos, parse_numero_br,
};
use crate::planilha::{Celula, Grade};

// ==========================================
// Resolução de colunas por layout
// ==========================================

struct ColunasSetores {
    codigo: usize,
    descricao: Option<usize>,
    total_fisico: usize,
    estoque_alocado: Option<usize>,
    estoque_disponivel: usize,
    salao_alocado: Option<usize>,
    salao_disponivel: usize,
}

impl ColunasSetores {
    fn resolver(cabecalhos: &[String], layout: LayoutSetores) -> AnaliseResult<ColunasSetores> {
        let mut ausentes: Vec<String> = Vec::new();
        let mut obrigatoria = |nome: &str, indice: Option<usize>| -> usize {
            match indice {
                Some(i) => i,
                None => {
                    ausentes.push(format!("\"{}\"", nome));
                    0
                }
            }
        };

        let codigo = obrigatoria(
            "Código",
            localizar_coluna(cabecalhos, &["cod material", "codigo"]),
        );
        let total_fisico = obrigatoria(
            "Total Físico",
            localizar_coluna(cabecalhos, &["total físico", "retaguarda"]),
        );

        // Os cabeçalhos de setor podem trazer o marcador de unidade
        // intercalado; a busca exige todos os termos do grupo
        let (estoque_alocado, estoque_disponivel, salao_alocado, salao_disponivel) = match layout {
            LayoutSetores::DoisSetores => {
                let estoque = obrigatoria(
                    "Estoque (Captação)",
                    localizar_coluna_termos(cabecalhos, &[&["captação"], &["estoque"]]),
                );
                let salao = obrigatoria(
                    "Salão de Vendas",
                    localizar_coluna_termos(cabecalhos, &[&["salão"]]),
                );
                // Layout legado: o total de cada setor entra no campo
                // "disponível"; "alocado" fica zerado
                (None, estoque, None, salao)
            }
            LayoutSetores::QuatroSetores => {
                let ea = obrigatoria(
                    "Captação - Alocado",
                    localizar_coluna_termos(
                        cabecalhos,
                        &[&["captação", "alocado"], &["estoque", "alocado"]],
                    ),
                );
                let ed = obrigatoria(
                    "Captação - Disponível",
                    localizar_coluna_termos(
                        cabecalhos,
                        &[&["captação", "disponível"], &["estoque", "disponível"]],
                    ),
                );
                let sa = obrigatoria(
                    "Salão de Vendas - Alocado",
                    localizar_coluna_termos(cabecalhos, &[&["salão", "alocado"]]),
                );
                let sd = obrigatoria(
                    "Salão de Vendas - Disponível",
                    localizar_coluna_termos(cabecalhos, &[&["salão", "disponível"]]),
                );
                (Some(ea), ed, Some(sa), sd)
            }
        };

        if !ausentes.is_empty() {
            return Err(AnaliseError::ColunasObrigatorias(ausentes.join(", ")));
        }

        Ok(ColunasSetores {
            codigo,
            descricao: localizar_coluna(cabecalhos, &["desc material", "descrição"]),
            total_fisico,
            estoque_alocado,
            estoque_disponivel,
            salao_alocado,
            salao_disponivel,
        })
    }
}

// ==========================================
// Análise
// ==========================================

/// Analisa uma grade de setores; o layout é detectado pelo
/// qualificador Alocado/Disponível nos cabeçalhos
pub fn analisar(grade: &Grade) -> AnaliseResult<ResultadoSetores> {
    if grade.len() < 2 {
        return Ok(ResultadoSetores {
            layout: LayoutSetores::DoisSetores,
            itens: Vec::new(),
            metricas: MetricasSetores::default(),
        });
    }

    let cabecalhos = cabecalhos_normalizados(&grade[0]);
    let layout = detectar_layout_setores(&cabecalhos);
    // Unidade vale para o arquivo inteiro, não por linha
    let unidade = detectar_unidade(&cabecalhos);
    let colunas = ColunasSetores::resolver(&cabecalhos, layout)?;

    tracing::debug!(?layout, %unidade, "planilha de setores reconhecida");

    let vazia = Celula::Vazia;
    let numero = |linha: &Vec<Celula>, indice: Option<usize>| -> f64 {
        indice
            .map(|i| parse_numero_br(linha.get(i).unwrap_or(&vazia)))
            .unwrap_or(0.0)
    };

    let mut itens: Vec<ItemSetor> = Vec::new();
    for linha in grade.iter().skip(1) {
        let codigo = linha
            .get(colunas.codigo)
            .unwrap_or(&vazia)
            .como_texto();
        if codigo.is_empty() {
            continue;
        }

        let descricao = colunas
            .descricao
            .and_then(|i| linha.get(i))
            .map(|c| c.como_texto())
            .unwrap_or_default();

        let total_fisico = numero(linha, Some(colunas.total_fisico));
        let estoque_alocado = numero(linha, colunas.estoque_alocado);
        let estoque_disponivel = numero(linha, Some(colunas.estoque_disponivel));
        let salao_alocado = numero(linha, colunas.salao_alocado);
        let salao_disponivel = numero(linha, Some(colunas.salao_disponivel));

        let soma_setores =
            estoque_alocado + estoque_disponivel + salao_alocado + salao_disponivel;

        itens.push(ItemSetor {
            codigo,
            descricao,
            total_fisico,
            estoque_alocado,
            estoque_disponivel,
            salao_alocado,
            salao_disponivel,
            diferenca: total_fisico - soma_setores,
        });
    }

    let metricas = calcular_metricas(&itens, unidade);

    tracing::info!(
        total = metricas.total_itens,
        divergentes = metricas.itens_divergentes,
        %unidade,
        "análise de setores concluída"
    );

    Ok(ResultadoSetores {
        layout,
        itens,
        metricas,
    })
}

fn calcular_metricas(itens: &[ItemSetor], unidade: Unidade) -> MetricasSetores {
    let mut metricas = MetricasSetores {
        unidade,
        total_itens: itens.len(),
        ..MetricasSetores::default()
    };

    for item in itens {
        metricas.estoque_alocado_total += item.estoque_alocado;
        metricas.estoque_disponivel_total += item.estoque_disponivel;
        metricas.salao_alocado_total += item.salao_alocado;
        metricas.salao_disponivel_total += item.salao_disponivel;

        let subtotal_estoque = item.subtotal_estoque();
        if subtotal_estoque == 0.0 {
            metricas.estoque_zerados += 1;
        } else if subtotal_estoque < 0.0 {
            metricas.estoque_negativos += 1;
        }

        let subtotal_salao = item.subtotal_salao();
        if subtotal_salao == 0.0 {
            metricas.salao_zerados += 1;
        } else if subtotal_salao < 0.0 {
            metricas.salao_negativos += 1;
        }

        if item.divergente() {
            metricas.itens_divergentes += 1;
        }
    }

    metricas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade_quatro_setores(linhas: Vec<(&str, f64, f64, f64, f64, f64)>) -> Grade {
        let mut grade = vec![vec![
            Celula::texto("Cod Material"),
            Celula::texto("Total Físico"),
            Celula::texto("Captação - Alocado"),
            Celula::texto("Captação - Disponível"),
            Celula::texto("Salão de Vendas Barueri - Alocado"),
            Celula::texto("Salão de Vendas Barueri - Disponível"),
        ]];
        for (codigo, total, ea, ed, sa, sd) in linhas {
            grade.push(vec![
                Celula::texto(codigo),
                Celula::Numero(total),
                Celula::Numero(ea),
                Celula::Numero(ed),
                Celula::Numero(sa),
                Celula::Numero(sd),
            ]);
        }
        grade
    }

    fn grade_dois_setores(linhas: Vec<(&str, f64, f64, f64)>) -> Grade {
        let mut grade = vec![vec![
            Celula::texto("Cod Material"),
            Celula::texto("Total Físico"),
            Celula::texto("Captação"),
            Celula::texto("Salão de Vendas Extrema"),
        ]];
        for (codigo, total, estoque, salao) in linhas {
            grade.push(vec![
                Celula::texto(codigo),
                Celula::Numero(total),
                Celula::Numero(estoque),
                Celula::Numero(salao),
            ]);
        }
        grade
    }

    #[test]
    fn test_layout_quatro_setores_divergencia() {
        let grade = grade_quatro_setores(vec![
            ("A1", 10.0, 2.0, 3.0, 1.0, 4.0), // fecha
            ("B2", 10.0, 2.0, 3.0, 1.0, 3.0), // diverge em +1
        ]);
        let resultado = analisar(&grade).unwrap();

        assert_eq!(resultado.layout, LayoutSetores::QuatroSetores);
        assert!(!resultado.itens[0].divergente());
        assert_eq!(resultado.itens[1].diferenca, 1.0);
        assert!(resultado.itens[1].divergente());
        assert_eq!(resultado.metricas.itens_divergentes, 1);
    }

    #[test]
    fn test_tolerancia_absorve_arredondamento() {
        let grade = grade_quatro_setores(vec![("A1", 10.005, 2.0, 3.0, 1.0, 4.0)]);
        let resultado = analisar(&grade).unwrap();
        // |0.005| <= 0.01: não diverge
        assert!(!resultado.itens[0].divergente());
    }

    #[test]
    fn test_layout_dois_setores_compartilha_contrato() {
        let grade = grade_dois_setores(vec![("A1", 12.0, 5.0, 7.0), ("B2", 10.0, 5.0, 2.0)]);
        let resultado = analisar(&grade).unwrap();

        assert_eq!(resultado.layout, LayoutSetores::DoisSetores);
        let a1 = &resultado.itens[0];
        // Total do setor entra no campo disponível; alocado zerado
        assert_eq!(a1.estoque_alocado, 0.0);
        assert_eq!(a1.estoque_disponivel, 5.0);
        assert_eq!(a1.subtotal_estoque(), 5.0);
        assert!(!a1.divergente());

        assert_eq!(resultado.itens[1].diferenca, 3.0);
        assert_eq!(resultado.metricas.itens_divergentes, 1);
    }

    #[test]
    fn test_unidade_detectada_pelo_cabecalho() {
        let barueri = grade_quatro_setores(vec![("A1", 0.0, 0.0, 0.0, 0.0, 0.0)]);
        assert_eq!(analisar(&barueri).unwrap().metricas.unidade, Unidade::Barueri);

        let extrema = grade_dois_setores(vec![("A1", 0.0, 0.0, 0.0)]);
        assert_eq!(analisar(&extrema).unwrap().metricas.unidade, Unidade::Extrema);
    }

    #[test]
    fn test_zerados_e_negativos_por_balde_logico() {
        let grade = grade_quatro_setores(vec![
            // Estoque: 2 + (-2) = 0 → zerado por subtotal, mesmo com
            // colunas cruas não nulas
            ("A1", 5.0, 2.0, -2.0, 1.0, 4.0),
            // Salão: 1 + (-3) = -2 → negativo por subtotal
            ("B2", 0.0, 1.0, 1.0, 1.0, -3.0),
        ]);
        let resultado = analisar(&grade).unwrap();
        let m = &resultado.metricas;

        assert_eq!(m.estoque_zerados, 1);
        assert_eq!(m.estoque_negativos, 0);
        assert_eq!(m.salao_zerados, 0);
        assert_eq!(m.salao_negativos, 1);
    }

    #[test]
    fn test_somas_por_coluna() {
        let grade = grade_quatro_setores(vec![
            ("A1", 10.0, 2.0, 3.0, 1.0, 4.0),
            ("B2", 20.0, 4.0, 6.0, 2.0, 8.0),
        ]);
        let m = analisar(&grade).unwrap().metricas;
        assert_eq!(m.estoque_alocado_total, 6.0);
        assert_eq!(m.estoque_disponivel_total, 9.0);
        assert_eq!(m.salao_alocado_total, 3.0);
        assert_eq!(m.salao_disponivel_total, 12.0);
    }

    #[test]
    fn test_linha_sem_codigo_pulada() {
        let mut grade = grade_quatro_setores(vec![("A1", 10.0, 2.0, 3.0, 1.0, 4.0)]);
        grade.push(vec![
            Celula::Vazia,
            Celula::Numero(99.0),
            Celula::Numero(0.0),
            Celula::Numero(0.0),
            Celula::Numero(0.0),
            Celula::Numero(0.0),
        ]);
        let resultado = analisar(&grade).unwrap();
        assert_eq!(resultado.itens.len(), 1);
    }

    #[test]
    fn test_grade_vazia() {
        let resultado = analisar(&Vec::new()).unwrap();
        assert!(resultado.itens.is_empty());
        assert_eq!(resultado.metricas.unidade, Unidade::Desconhecida);
    }

    #[test]
    fn test_coluna_obrigatoria_ausente() {
        let grade = vec![
            vec![
                Celula::texto("Cod Material"),
                Celula::texto("Captação - Alocado"),
                Celula::texto("Captação - Disponível"),
                Celula::texto("Salão de Vendas - Alocado"),
                Celula::texto("Salão de Vendas - Disponível"),
            ],
            vec![Celula::texto("A1")],
        ];
        let erro = analisar(&grade).unwrap_err();
        assert!(erro.to_string().contains("\"Total Físico\""));
    }
}
