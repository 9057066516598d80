// ==========================================
// Sistema de Controle de Estoque - Analisador de pedidos
// ==========================================
// Tempo de vida do pedido: aprovação → faturamento
// Regra de duas réguas:
// 1. a aprovação é deslocada para o próximo dia útil de APROVAÇÃO
//    (seg-sex menos feriados) quando cai fora de um;
// 2. os dias úteis decorridos usam a régua de FATURAMENTO
//    (seg-sáb menos feriados).
// SLA: dentro do prazo quando dias úteis <= 1.
// ==========================================

use crate::domain::pedidos::{
    DistribuicaoAtraso, MetricasPedidos, Pedido, ResultadoPedidos, ResumoUnidade, SLA_DIAS_UTEIS,
};
use crate::domain::types::{StatusPedido, Unidade};
use crate::engine::calendario::CalendarioFeriados;
use crate::erro::AnaliseResult;
use crate::importador::{
    cabecalhos_normalizados, localizar_coluna, localizar_obrigatorias, parse_data_br,
    parse_numero_br,
};
use crate::planilha::{Celula, Grade};

/// Rótulos dos baldes de atraso, em ordem
const BALDES_ATRASO: [&str; 5] = ["1 dia", "2 dias", "3 dias", "4 dias", "5+ dias"];

// ==========================================
// Análise
// ==========================================

/// Analisa uma grade de pedidos contra o SLA de 1 dia útil
pub fn analisar(grade: &Grade, calendario: &CalendarioFeriados) -> AnaliseResult<ResultadoPedidos> {
    if grade.len() < 2 {
        return Ok(resultado_vazio());
    }

    let cabecalhos = cabecalhos_normalizados(&grade[0]);
    let indices = localizar_obrigatorias(
        &cabecalhos,
        &[
            (
                "CodigoPedido",
                &["codigopedido", "codigo pedido", "codigo", "pedido"] as &[&str],
            ),
            ("ValorPraticado", &["valorpraticado", "valor praticado", "valor"]),
            (
                "Data Aprovação",
                &["data aprovacao", "dataaprovacao", "aprovacao"],
            ),
            (
                "DataFaturamento",
                &["datafaturamento", "data faturamento", "faturamento"],
            ),
        ],
    )?;
    let (col_codigo, col_valor, col_aprovacao, col_faturamento) =
        (indices[0], indices[1], indices[2], indices[3]);

    // Estrutura pai é opcional; sem ela a unidade fica desconhecida
    let col_estrutura = localizar_coluna(
        &cabecalhos,
        &["codigo estrutura pai", "estrutura pai", "estrutura"],
    );

    let vazia = Celula::Vazia;
    let mut pedidos: Vec<Pedido> = Vec::new();
    let mut puladas = 0usize;

    for (numero_linha, linha) in grade.iter().enumerate().skip(1) {
        let codigo_pedido = linha.get(col_codigo).unwrap_or(&vazia).como_texto();
        if codigo_pedido.is_empty() {
            continue;
        }

        let valor_praticado = parse_numero_br(linha.get(col_valor).unwrap_or(&vazia));
        let data_aprovacao_original = parse_data_br(linha.get(col_aprovacao).unwrap_or(&vazia));
        let data_faturamento = parse_data_br(linha.get(col_faturamento).unwrap_or(&vazia));

        // Sem as duas datas não há medição: linha inteira é pulada,
        // nunca um registro parcial
        let (data_aprovacao_original, data_faturamento) =
            match (data_aprovacao_original, data_faturamento) {
                (Some(aprovacao), Some(faturamento)) => (aprovacao, faturamento),
                _ => {
                    puladas += 1;
                    continue;
                }
            };

        let data_aprovacao = calendario.proximo_dia_util_aprovacao(data_aprovacao_original);
        let dias_uteis = calendario.dias_uteis_entre(data_aprovacao, data_faturamento);
        let dentro_do_prazo = dias_uteis <= SLA_DIAS_UTEIS;

        let codigo_estrutura_pai = col_estrutura
            .map(|i| linha.get(i).unwrap_or(&vazia).como_texto())
            .filter(|texto| !texto.is_empty());
        let unidade = codigo_estrutura_pai
            .as_deref()
            .map(Unidade::da_estrutura_pai)
            .unwrap_or(Unidade::Desconhecida);

        pedidos.push(Pedido {
            id: format!("pedido-{}", numero_linha),
            codigo_pedido,
            valor_praticado,
            data_aprovacao_original,
            data_aprovacao,
            data_faturamento,
            dias_uteis,
            dentro_do_prazo,
            status: if dentro_do_prazo {
                StatusPedido::NoPrazo
            } else {
                StatusPedido::Atrasado
            },
            codigo_estrutura_pai,
            unidade,
        });
    }

    if puladas > 0 {
        tracing::warn!(puladas, "linhas de pedido sem data válida foram descartadas");
    }

    let (metricas, distribuicao_atraso) = calcular_metricas(&pedidos);

    // Métricas independentes por unidade conhecida
    let por_unidade = Unidade::conhecidas()
        .into_iter()
        .map(|unidade| {
            let subconjunto: Vec<Pedido> = pedidos
                .iter()
                .filter(|p| p.unidade == unidade)
                .cloned()
                .collect();
            let (metricas, distribuicao_atraso) = calcular_metricas(&subconjunto);
            ResumoUnidade {
                unidade,
                metricas,
                distribuicao_atraso,
            }
        })
        .collect();

    tracing::info!(
        total = metricas.total_pedidos,
        no_prazo = metricas.pedidos_no_prazo,
        atrasados = metricas.pedidos_atrasados,
        "análise de pedidos concluída"
    );

    Ok(ResultadoPedidos {
        pedidos,
        metricas,
        distribuicao_atraso,
        por_unidade,
    })
}

fn resultado_vazio() -> ResultadoPedidos {
    ResultadoPedidos {
        pedidos: Vec::new(),
        metricas: MetricasPedidos::default(),
        distribuicao_atraso: Vec::new(),
        por_unidade: Unidade::conhecidas()
            .into_iter()
            .map(|unidade| ResumoUnidade {
                unidade,
                metricas: MetricasPedidos::default(),
                distribuicao_atraso: Vec::new(),
            })
            .collect(),
    }
}

// ==========================================
// Métricas
// ==========================================

/// Calcula métricas e distribuição de atraso de um conjunto de
/// pedidos (usado para o total e para cada unidade)
pub fn calcular_metricas(pedidos: &[Pedido]) -> (MetricasPedidos, Vec<DistribuicaoAtraso>) {
    let total_pedidos = pedidos.len();
    let mut metricas = MetricasPedidos {
        total_pedidos,
        ..MetricasPedidos::default()
    };
    let mut soma_dias_uteis = 0i64;
    let mut contador_baldes = [0usize; 5];

    for pedido in pedidos {
        metricas.valor_total += pedido.valor_praticado;
        soma_dias_uteis += pedido.dias_uteis;

        if pedido.dentro_do_prazo {
            metricas.pedidos_no_prazo += 1;
            metricas.valor_no_prazo += pedido.valor_praticado;
        } else {
            metricas.pedidos_atrasados += 1;
            metricas.valor_atrasados += pedido.valor_praticado;

            // Dias além do prazo de 1 dia útil
            let dias_atraso = pedido.dias_uteis - SLA_DIAS_UTEIS;
            let balde = (dias_atraso.clamp(1, 5) - 1) as usize;
            contador_baldes[balde] += 1;
        }
    }

    if total_pedidos > 0 {
        metricas.percentual_no_prazo = percentual(metricas.pedidos_no_prazo, total_pedidos);
        metricas.percentual_atrasados = percentual(metricas.pedidos_atrasados, total_pedidos);
        metricas.tempo_medio_dias_uteis =
            (soma_dias_uteis as f64 / total_pedidos as f64 * 10.0).round() / 10.0;
    }

    // Baldes vazios não aparecem; percentual sobre o subconjunto atrasado
    let mut distribuicao = Vec::new();
    if metricas.pedidos_atrasados > 0 {
        for (indice, rotulo) in BALDES_ATRASO.iter().enumerate() {
            let quantidade = contador_baldes[indice];
            if quantidade > 0 {
                distribuicao.push(DistribuicaoAtraso {
                    dias_atraso: rotulo.to_string(),
                    quantidade,
                    percentual: percentual(quantidade, metricas.pedidos_atrasados),
                });
            }
        }
    }

    (metricas, distribuicao)
}

/// Percentual arredondado para o inteiro mais próximo
fn percentual(parte: usize, todo: usize) -> i64 {
    (parte as f64 / todo as f64 * 100.0).round() as i64
}
