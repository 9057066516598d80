// ==========================================
// Sistema de Controle de Estoque - Resolução de cabeçalhos
// ==========================================
// Exportações do ERP variam em caixa, acentuação e espaços; a
// resolução é tolerante (normaliza + casa por substring/alias),
// mas falha com mensagem descritiva quando falta coluna obrigatória
// ==========================================

use crate::domain::types::{LayoutEstoque, LayoutSetores, Unidade};
use crate::erro::{AnaliseError, AnaliseResult};
use crate::planilha::Celula;

/// Marcador que distingue o layout Disponível do Legado
const MARCADOR_DISPONIVEL: &str = "total - disponivel";

/// Qualificador que distingue o layout de 4 colunas de setores
const MARCADOR_ALOCADO: &str = "alocado";

/// Normaliza um texto de cabeçalho: minúsculas, sem acentos,
/// espaços internos colapsados
pub fn normalizar(texto: &str) -> String {
    let minusculo = texto.trim().to_lowercase();
    let sem_acento: String = minusculo.chars().map(remover_acento).collect();
    sem_acento.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn remover_acento(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}

/// Normaliza a linha de cabeçalho inteira
pub fn cabecalhos_normalizados(linha: &[Celula]) -> Vec<String> {
    linha.iter().map(|c| normalizar(&c.como_texto())).collect()
}

/// Procura o índice de uma coluna tentando a lista de aliases em ordem
/// (casamento exato ou por substring)
pub fn localizar_coluna(cabecalhos: &[String], aliases: &[&str]) -> Option<usize> {
    for alias in aliases {
        let alvo = normalizar(alias);
        if let Some(indice) = cabecalhos
            .iter()
            .position(|h| h == &alvo || h.contains(&alvo))
        {
            return Some(indice);
        }
    }
    None
}

/// Procura uma coluna cujo cabeçalho contenha TODOS os termos de um
/// grupo; grupos são tentados em ordem. Útil quando o cabeçalho traz
/// texto intercalado (ex.: "Salão de Vendas Barueri - Alocado")
pub fn localizar_coluna_termos(cabecalhos: &[String], grupos: &[&[&str]]) -> Option<usize> {
    for termos in grupos {
        let alvos: Vec<String> = termos.iter().map(|t| normalizar(t)).collect();
        if let Some(indice) = cabecalhos
            .iter()
            .position(|h| alvos.iter().all(|alvo| h.contains(alvo.as_str())))
        {
            return Some(indice);
        }
    }
    None
}

/// Resolve um conjunto de colunas obrigatórias de uma vez; o erro
/// nomeia TODAS as colunas ausentes
pub fn localizar_obrigatorias(
    cabecalhos: &[String],
    colunas: &[(&str, &[&str])],
) -> AnaliseResult<Vec<usize>> {
    let mut indices = Vec::with_capacity(colunas.len());
    let mut ausentes: Vec<String> = Vec::new();

    for (nome_exibicao, aliases) in colunas {
        match localizar_coluna(cabecalhos, aliases) {
            Some(indice) => indices.push(indice),
            None => ausentes.push(format!("\"{}\"", nome_exibicao)),
        }
    }

    if !ausentes.is_empty() {
        return Err(AnaliseError::ColunasObrigatorias(ausentes.join(", ")));
    }

    Ok(indices)
}

// ==========================================
// Detecção de layout / unidade
// ==========================================

/// Auto-detecção entre os dois layouts de estoque: a presença do
/// marcador "Total - Disponível" seleciona o layout Disponível
pub fn detectar_layout_estoque(cabecalhos: &[String]) -> LayoutEstoque {
    if cabecalhos.iter().any(|h| h.contains(MARCADOR_DISPONIVEL)) {
        LayoutEstoque::Disponivel
    } else {
        LayoutEstoque::Legado
    }
}

/// A planilha de setores de 4 colunas qualifica cada setor com
/// "Alocado"/"Disponível"; sem o qualificador é o layout legado
pub fn detectar_layout_setores(cabecalhos: &[String]) -> LayoutSetores {
    if cabecalhos.iter().any(|h| h.contains(MARCADOR_ALOCADO)) {
        LayoutSetores::QuatroSetores
    } else {
        LayoutSetores::DoisSetores
    }
}

/// A unidade vale para o arquivo inteiro: vem do marcador presente
/// no cabeçalho da coluna de salão de vendas
pub fn detectar_unidade(cabecalhos: &[String]) -> Unidade {
    let salao: Vec<&String> = cabecalhos.iter().filter(|h| h.contains("salao")).collect();

    for cabecalho in salao {
        if cabecalho.contains("barueri") {
            return Unidade::Barueri;
        }
        if cabecalho.contains("extrema") {
            return Unidade::Extrema;
        }
    }

    Unidade::Desconhecida
}
