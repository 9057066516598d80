// ==========================================
// Teste de integração - exportação de relatórios
// ==========================================
// Exporta um resultado real para xlsx e relê o arquivo gerado com o
// mesmo leitor de planilhas usado na importação
// ==========================================

use controle_estoque::exportador::{
    exportar_xlsx, tabela_estoque, tabela_itens_sem_endereco, tabela_pedidos_atrasados,
    ValorTabela, ARQUIVO_ESTOQUE, ARQUIVO_PEDIDOS_ATRASADOS,
};
use controle_estoque::planilha::leitor;
use controle_estoque::{analisar_grade, Analise, Celula, Grade, Modelo};

fn celula(texto: &str) -> Celula {
    Celula::texto(texto)
}

fn grade_estoque() -> Grade {
    vec![
        vec![
            celula("Cod Material"),
            celula("Desc Material"),
            celula("Total Físico"),
            celula("Estação"),
            celula("Rack"),
        ],
        vec![
            celula("A1"),
            celula("Parafuso sextavado"),
            celula("1.234,5"),
            celula("E1"),
            celula("R1"),
        ],
        vec![
            celula("B2"),
            celula("Porca"),
            Celula::Numero(0.0),
            celula("-"),
            celula(""),
        ],
    ]
}

fn resultado_estoque() -> controle_estoque::ResultadoEstoque {
    match analisar_grade(&grade_estoque(), Modelo::Auto).unwrap() {
        Analise::Estoque(resultado) => resultado,
        outro => panic!("esperava análise de estoque, veio {:?}", outro),
    }
}

#[test]
fn test_exporta_e_rele_relatorio_de_estoque() {
    let resultado = resultado_estoque();
    let tabela = tabela_estoque(&resultado);

    let dir = tempfile::tempdir().unwrap();
    let caminho = dir.path().join(ARQUIVO_ESTOQUE);
    exportar_xlsx(&tabela, &caminho).unwrap();

    let grade = leitor::ler_grade(&caminho).unwrap();
    assert_eq!(grade.len(), 1 + resultado.itens.len());

    // Cabeçalho preservado
    assert_eq!(grade[0][0].como_texto(), "Código");
    assert_eq!(grade[0][1].como_texto(), "Descrição");
    assert_eq!(grade[0][6].como_texto(), "Total Físico");

    // O zerado foi ordenado para o topo; quantidade formatada em pt-BR
    assert_eq!(grade[1][0].como_texto(), "B2");
    assert_eq!(grade[1][6].como_texto(), "0");
    assert_eq!(grade[1][8].como_texto(), "zerado");

    assert_eq!(grade[2][0].como_texto(), "A1");
    assert_eq!(grade[2][6].como_texto(), "1.234,50");
}

#[test]
fn test_tabela_de_itens_sem_endereco_filtra() {
    let resultado = resultado_estoque();
    let tabela = tabela_itens_sem_endereco(&resultado);

    // Só o B2 está sem nenhuma localização
    assert_eq!(tabela.linhas.len(), 1);
    assert_eq!(tabela.linhas[0][0].como_texto(), "B2");
}

#[test]
fn test_tabela_de_pedidos_atrasados_filtra() {
    let grade: Grade = vec![
        vec![
            celula("CodigoPedido"),
            celula("ValorPraticado"),
            celula("Data Aprovação"),
            celula("DataFaturamento"),
        ],
        vec![
            celula("P001"),
            celula("100"),
            celula("12/01/2026"),
            celula("13/01/2026"),
        ],
        vec![
            celula("P002"),
            celula("1.234,56"),
            celula("12/01/2026"),
            celula("15/01/2026"),
        ],
    ];
    let resultado = match analisar_grade(&grade, Modelo::Pedidos).unwrap() {
        Analise::Pedidos(resultado) => resultado,
        outro => panic!("esperava análise de pedidos, veio {:?}", outro),
    };

    let tabela = tabela_pedidos_atrasados(&resultado);
    assert_eq!(tabela.linhas.len(), 1);
    let linha = &tabela.linhas[0];
    assert_eq!(linha[0].como_texto(), "P002");
    // Valor monetário segue numérico no arquivo; datas saem formatadas
    assert_eq!(linha[1], ValorTabela::Numero(1234.56));
    assert_eq!(linha[2].como_texto(), "12/01/2026");
    assert_eq!(linha[6].como_texto(), "Atrasado");

    // Relido do xlsx, o valor volta como célula numérica
    let dir = tempfile::tempdir().unwrap();
    let caminho = dir.path().join(ARQUIVO_PEDIDOS_ATRASADOS);
    exportar_xlsx(&tabela, &caminho).unwrap();
    let grade = leitor::ler_grade(&caminho).unwrap();
    assert_eq!(grade[1][1], controle_estoque::Celula::Numero(1234.56));
    assert_eq!(grade[1][2].como_texto(), "12/01/2026");
}
