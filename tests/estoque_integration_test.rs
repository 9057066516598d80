// ==========================================
// Teste de integração - análise de estoque
// ==========================================
// Cenário completo: duplicidade, variantes, zerados, negativos e
// itens sem endereço passando pela fachada de análise
// ==========================================

use controle_estoque::{
    analisar_grade, Analise, Celula, Grade, LayoutEstoque, Modelo, StatusItem,
};

fn celula(texto: &str) -> Celula {
    Celula::texto(texto)
}

fn grade_legado() -> Grade {
    vec![
        vec![
            celula("Cod Material"),
            celula("Desc Material"),
            celula("Total Físico"),
            celula("Estação"),
            celula("Rack"),
            celula("Linha Prod Alocado"),
            celula("Coluna Prod Alocado"),
        ],
        // A1 duplicado (duas linhas) e com variante V1/V2
        vec![
            celula("A1"),
            celula("Widget V1"),
            Celula::Numero(4.0),
            celula("E1"),
            celula("R1"),
            celula("L1"),
            celula("C1"),
        ],
        vec![
            celula("A1"),
            celula("Widget V1"),
            Celula::Numero(2.0),
            celula("E1"),
            celula("R2"),
            celula("L1"),
            celula("C1"),
        ],
        vec![
            celula("A2"),
            celula("Widget V2"),
            Celula::Numero(4.0),
            celula("E2"),
            celula("R1"),
            celula("L2"),
            celula("C2"),
        ],
        // Zerado e sem nenhuma localização
        vec![
            celula("B1"),
            celula("Porca sextavada"),
            Celula::Numero(0.0),
            celula("-"),
            celula(""),
            celula("-"),
            celula(""),
        ],
        // Negativo com formato pt-BR
        vec![
            celula("C1"),
            celula("Arruela lisa"),
            celula("(5)"),
            celula("E3"),
            celula("R3"),
            celula("L3"),
            celula("C3"),
        ],
    ]
}

fn resultado_estoque(grade: &Grade, modelo: Modelo) -> controle_estoque::ResultadoEstoque {
    match analisar_grade(grade, modelo).unwrap() {
        Analise::Estoque(resultado) => resultado,
        outro => panic!("esperava análise de estoque, veio {:?}", outro),
    }
}

#[test]
fn test_cenario_completo_layout_legado() {
    let resultado = resultado_estoque(&grade_legado(), Modelo::Auto);

    assert_eq!(resultado.layout, LayoutEstoque::Legado);
    assert_eq!(resultado.itens.len(), 5);

    let m = &resultado.metricas;
    assert_eq!(m.total_itens, 5);
    assert_eq!(m.itens_zerados, 1);
    assert_eq!(m.itens_negativos, 1);
    // As duplicatas de "A1" pertencem ao grupo de variantes "Widget":
    // um grupo único no painel
    assert_eq!(m.grupos_duplicados, 1);
    assert_eq!(m.itens_sem_endereco, 1);
}

#[test]
fn test_variantes_e_total_do_grupo() {
    let resultado = resultado_estoque(&grade_legado(), Modelo::Auto);

    // As três linhas Widget (A1, A1, A2) compartilham a base "Widget"
    let widgets: Vec<_> = resultado
        .itens
        .iter()
        .filter(|item| item.desc_material.starts_with("Widget"))
        .collect();
    assert_eq!(widgets.len(), 3);

    for item in &widgets {
        assert!(item.tem_status(StatusItem::Variante));
        assert_eq!(item.total_quantidade, 10.0);
        assert_eq!(item.grupo_id.as_deref(), Some("variante-Widget"));
    }

    // As duas linhas A1 também são duplicadas por código
    let duplicados = widgets
        .iter()
        .filter(|item| item.tem_status(StatusItem::Duplicado))
        .count();
    assert_eq!(duplicados, 2);

    // Variantes irmãs nunca incluem o próprio código
    let a2 = resultado
        .itens
        .iter()
        .find(|item| item.cod_material == "A2")
        .unwrap();
    let irmas = a2.variantes.as_ref().unwrap();
    assert!(irmas.contains(&"A1".to_string()));
    assert!(!irmas.contains(&"A2".to_string()));
}

#[test]
fn test_ordenacao_por_prioridade() {
    let resultado = resultado_estoque(&grade_legado(), Modelo::Auto);

    // Negativo vem antes de zerado, que vem antes dos grupos
    let codigos: Vec<&str> = resultado
        .itens
        .iter()
        .map(|item| item.cod_material.as_str())
        .collect();
    assert_eq!(codigos[0], "C1");
    assert_eq!(codigos[1], "B1");
}

#[test]
fn test_ids_deterministicos() {
    let primeira = resultado_estoque(&grade_legado(), Modelo::Auto);
    let segunda = resultado_estoque(&grade_legado(), Modelo::Auto);

    let ids_1: Vec<&String> = primeira.itens.iter().map(|item| &item.id).collect();
    let ids_2: Vec<&String> = segunda.itens.iter().map(|item| &item.id).collect();
    assert_eq!(ids_1, ids_2);

    let c1 = primeira.itens.iter().find(|i| i.cod_material == "C1").unwrap();
    // "<código>-<índice da linha na planilha>"
    assert_eq!(c1.id, "C1-5");
}

#[test]
fn test_layout_disponivel_sem_localizacao() {
    let grade: Grade = vec![
        vec![
            celula("Cod Material"),
            celula("Desc Material"),
            celula("Total - Disponível"),
        ],
        vec![celula("A1"), celula("Parafuso"), celula("1.234,5")],
    ];
    let resultado = resultado_estoque(&grade, Modelo::Auto);

    assert_eq!(resultado.layout, LayoutEstoque::Disponivel);
    let item = &resultado.itens[0];
    assert_eq!(item.quantidade, 1234.5);
    assert_eq!(item.estacao, "-");
    // Sem colunas de localização a métrica não é calculada
    assert_eq!(resultado.metricas.itens_sem_endereco, 0);
}

#[test]
fn test_linhas_incompletas_sao_puladas() {
    let grade: Grade = vec![
        vec![
            celula("Cod Material"),
            celula("Desc Material"),
            celula("Total Físico"),
        ],
        vec![celula("A1"), celula("Parafuso"), Celula::Numero(1.0)],
        vec![celula(""), celula("Sem código"), Celula::Numero(2.0)],
        vec![celula("B1"), celula(""), Celula::Numero(3.0)],
    ];
    let resultado = resultado_estoque(&grade, Modelo::Auto);
    assert_eq!(resultado.itens.len(), 1);
    assert_eq!(resultado.itens[0].cod_material, "A1");
}

#[test]
fn test_coluna_ausente_e_fatal() {
    let grade: Grade = vec![
        vec![celula("Cod Material"), celula("Total Físico")],
        vec![celula("A1"), Celula::Numero(1.0)],
    ];
    let erro = analisar_grade(&grade, Modelo::EstoqueLegado).unwrap_err();
    assert!(erro.to_string().contains("\"Desc Material\""));
}
