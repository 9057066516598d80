// ==========================================
// Sistema de Controle de Estoque - Analisador de estoque
// ==========================================
// Pipeline: linhas cruas → agrupamento (código exato e descrição
// base sem variante) → classificação → 2º passe de totais → ordenação
// por prioridade. Linhas ruins são puladas; falta de coluna
// obrigatória é fatal.
// ==========================================

use crate::domain::estoque::{
    ItemEstoque, ItemProcessado, MetricasEstoque, ResultadoEstoque, SEM_LOCALIZACAO,
};
use crate::domain::types::{LayoutEstoque, StatusItem};
use crate::erro::AnaliseResult;
use crate::importador::{
    cabecalhos_normalizados, detectar_layout_estoque, localizar_coluna, localizar_obrigatorias,
    parse_numero_br,
};
use crate::planilha::{Celula, Grade};
use std::collections::{HashMap, HashSet};

// ==========================================
// Resolução de colunas por layout
// ==========================================

struct ColunasEstoque {
    cod_material: usize,
    desc_material: usize,
    quantidade: usize,
    estacao: Option<usize>,
    rack: Option<usize>,
    linha_prod: Option<usize>,
    coluna_prod: Option<usize>,
}

impl ColunasEstoque {
    fn resolver(cabecalhos: &[String], layout: LayoutEstoque) -> AnaliseResult<ColunasEstoque> {
        let coluna_quantidade: (&str, &[&str]) = match layout {
            LayoutEstoque::Legado => ("Total Físico", &["total físico", "quantidade"]),
            LayoutEstoque::Disponivel => {
                ("Total - Disponível", &["total - disponível", "total disponível"])
            }
        };

        let indices = localizar_obrigatorias(
            cabecalhos,
            &[
                ("Cod Material", &["cod material"] as &[&str]),
                ("Desc Material", &["desc material"]),
                coluna_quantidade,
            ],
        )?;

        // Colunas de localização são opcionais; só existem no layout Legado
        let (estacao, rack, linha_prod, coluna_prod) = match layout {
            LayoutEstoque::Legado => (
                localizar_coluna(cabecalhos, &["estacao", "estação"]),
                localizar_coluna(cabecalhos, &["rack"]),
                localizar_coluna(cabecalhos, &["linha prod alocado", "linha"]),
                localizar_coluna(cabecalhos, &["coluna prod alocado", "coluna"]),
            ),
            LayoutEstoque::Disponivel => (None, None, None, None),
        };

        Ok(ColunasEstoque {
            cod_material: indices[0],
            desc_material: indices[1],
            quantidade: indices[2],
            estacao,
            rack,
            linha_prod,
            coluna_prod,
        })
    }
}

// ==========================================
// Extração de variante
// ==========================================

/// Remove o sufixo de variante " V<dígitos>" (caixa indiferente) da
/// descrição; sem sufixo, a base é a descrição inteira
pub fn extrair_variante(descricao: &str) -> (String, Option<String>) {
    let aparada = descricao.trim();

    // O separador pode ser multi-byte (ex.: espaço não separável que o
    // Excel insere); o corte avança o tamanho real do caractere
    let ultimo_espaco = aparada
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace());

    if let Some((posicao, separador)) = ultimo_espaco {
        let sufixo = &aparada[posicao + separador.len_utf8()..];
        let mut chars = sufixo.chars();
        let eh_variante = matches!(chars.next(), Some('v') | Some('V'))
            && sufixo.len() > 1
            && chars.all(|c| c.is_ascii_digit());

        if eh_variante {
            let base = aparada[..posicao].trim_end().to_string();
            return (base, Some(sufixo.to_string()));
        }
    }

    (aparada.to_string(), None)
}

// ==========================================
// Análise
// ==========================================

/// Analisa uma grade de estoque; `layout` forçado pelo chamador ou
/// auto-detectado pelo marcador de cabeçalho
pub fn analisar(grade: &Grade, layout: Option<LayoutEstoque>) -> AnaliseResult<ResultadoEstoque> {
    if grade.len() < 2 {
        // Documento vazio ou só com cabeçalho: resultado vazio, não erro
        return Ok(ResultadoEstoque {
            layout: layout.unwrap_or(LayoutEstoque::Legado),
            itens: Vec::new(),
            metricas: MetricasEstoque::default(),
        });
    }

    let cabecalhos = cabecalhos_normalizados(&grade[0]);
    let layout = layout.unwrap_or_else(|| detectar_layout_estoque(&cabecalhos));
    let colunas = ColunasEstoque::resolver(&cabecalhos, layout)?;

    let itens_crus = mapear_linhas(grade, &colunas);
    tracing::debug!(
        linhas = grade.len() - 1,
        itens = itens_crus.len(),
        ?layout,
        "planilha de estoque mapeada"
    );

    let itens = classificar(itens_crus);
    let metricas = calcular_metricas(&itens, layout);

    tracing::info!(
        total = metricas.total_itens,
        zerados = metricas.itens_zerados,
        negativos = metricas.itens_negativos,
        grupos = metricas.grupos_duplicados,
        "análise de estoque concluída"
    );

    Ok(ResultadoEstoque {
        layout,
        itens,
        metricas,
    })
}

/// Mapeia as linhas de dados; linhas sem código ou descrição são
/// puladas (rodapés e linhas em branco do ERP)
fn mapear_linhas(grade: &Grade, colunas: &ColunasEstoque) -> Vec<(usize, ItemEstoque)> {
    let vazia = Celula::Vazia;
    let celula = |linha: &Vec<Celula>, indice: usize| -> Celula {
        linha.get(indice).unwrap_or(&vazia).clone()
    };
    let localizacao = |linha: &Vec<Celula>, indice: Option<usize>| -> String {
        match indice {
            Some(i) => {
                let texto = celula(linha, i).como_texto();
                if texto.is_empty() {
                    SEM_LOCALIZACAO.to_string()
                } else {
                    texto
                }
            }
            None => SEM_LOCALIZACAO.to_string(),
        }
    };

    let mut itens = Vec::new();
    for (numero_linha, linha) in grade.iter().enumerate().skip(1) {
        let cod_material = celula(linha, colunas.cod_material).como_texto();
        let desc_material = celula(linha, colunas.desc_material).como_texto();

        if cod_material.is_empty() || desc_material.is_empty() {
            continue;
        }

        let quantidade = parse_numero_br(&celula(linha, colunas.quantidade));

        itens.push((
            numero_linha,
            ItemEstoque {
                cod_material,
                desc_material,
                quantidade,
                estacao: localizacao(linha, colunas.estacao),
                rack: localizacao(linha, colunas.rack),
                linha_prod_alocado: localizacao(linha, colunas.linha_prod),
                coluna_prod_alocado: localizacao(linha, colunas.coluna_prod),
            },
        ));
    }
    itens
}

/// Classifica e agrupa: os mapas de agrupamento são construídos por
/// completo ANTES da classificação (a classificação lê um snapshot)
fn classificar(itens_crus: Vec<(usize, ItemEstoque)>) -> Vec<ItemProcessado> {
    // Agrupamento por código exato (detecção de duplicidade,
    // sensível a caixa)
    let mut grupos_codigo: HashMap<String, usize> = HashMap::new();
    // Agrupamento por descrição base (detecção de variantes)
    let mut grupos_base: HashMap<String, Vec<usize>> = HashMap::new();

    for (indice, (_, item)) in itens_crus.iter().enumerate() {
        *grupos_codigo.entry(item.cod_material.clone()).or_insert(0) += 1;
        let (base, _) = extrair_variante(&item.desc_material);
        grupos_base.entry(base).or_default().push(indice);
    }

    let mut itens: Vec<ItemProcessado> = Vec::with_capacity(itens_crus.len());

    for (numero_linha, item) in &itens_crus {
        let (base, _) = extrair_variante(&item.desc_material);
        let mut status = Vec::new();

        // Zerado verificado antes de negativo; mutuamente exclusivos
        if item.quantidade == 0.0 {
            status.push(StatusItem::Zerado);
        } else if item.quantidade < 0.0 {
            status.push(StatusItem::Negativo);
        }

        if grupos_codigo.get(&item.cod_material).copied().unwrap_or(0) > 1 {
            status.push(StatusItem::Duplicado);
        }

        let grupo_base = &grupos_base[&base];
        let tem_variantes = grupo_base.len() > 1;

        let (variantes, grupo_id) = if tem_variantes {
            status.push(StatusItem::Variante);
            // Irmãs do grupo, nunca o próprio código
            let irmas: Vec<String> = grupo_base
                .iter()
                .map(|&i| itens_crus[i].1.cod_material.clone())
                .filter(|cod| cod != &item.cod_material)
                .collect();
            (Some(irmas), Some(format!("variante-{}", base)))
        } else {
            (None, None)
        };

        itens.push(ItemProcessado {
            // Identidade determinística: reproduzível na mesma entrada
            id: format!("{}-{}", item.cod_material, numero_linha),
            cod_material: item.cod_material.clone(),
            desc_material: item.desc_material.clone(),
            quantidade: item.quantidade,
            estacao: item.estacao.clone(),
            rack: item.rack.clone(),
            linha_prod_alocado: item.linha_prod_alocado.clone(),
            coluna_prod_alocado: item.coluna_prod_alocado.clone(),
            status,
            variantes,
            total_quantidade: item.quantidade,
            grupo_id,
        });
    }

    // 2º passe: total do grupo de variantes sobrescreve o total de
    // cada membro
    for indices in grupos_base.values() {
        if indices.len() > 1 {
            let total: f64 = indices.iter().map(|&i| itens[i].quantidade).sum();
            for &i in indices {
                itens[i].total_quantidade = total;
            }
        }
    }

    // Prioridade: negativos > zerados > variantes > duplicados > normais
    itens.sort_by_key(prioridade);

    itens
}

/// Rank de prioridade: vale o status de maior prioridade do item
fn prioridade(item: &ItemProcessado) -> u8 {
    if item.tem_status(StatusItem::Negativo) {
        1
    } else if item.tem_status(StatusItem::Zerado) {
        2
    } else if item.tem_status(StatusItem::Variante) {
        3
    } else if item.tem_status(StatusItem::Duplicado) {
        4
    } else {
        5
    }
}

fn calcular_metricas(itens: &[ItemProcessado], layout: LayoutEstoque) -> MetricasEstoque {
    let mut grupos_unicos: HashSet<String> = HashSet::new();
    let mut zerados = 0;
    let mut negativos = 0;
    let mut sem_endereco = 0;

    for item in itens {
        if item.quantidade == 0.0 {
            zerados += 1;
        }
        if item.quantidade < 0.0 {
            negativos += 1;
        }

        if item.tem_status(StatusItem::Duplicado) || item.tem_status(StatusItem::Variante) {
            match &item.grupo_id {
                Some(grupo) => grupos_unicos.insert(grupo.clone()),
                None => grupos_unicos.insert(item.cod_material.clone()),
            };
        }

        // Endereço só existe no layout Legado
        if layout == LayoutEstoque::Legado && item.sem_endereco() {
            sem_endereco += 1;
        }
    }

    MetricasEstoque {
        total_itens: itens.len(),
        itens_zerados: zerados,
        itens_negativos: negativos,
        grupos_duplicados: grupos_unicos.len(),
        itens_sem_endereco: sem_endereco,
    }
}

/// Itens sem localização cadastrada (alimenta o relatório
/// "itens-sem-endereco")
pub fn itens_sem_endereco(itens: &[ItemProcessado]) -> Vec<&ItemProcessado> {
    itens.iter().filter(|item| item.sem_endereco()).collect()
}
