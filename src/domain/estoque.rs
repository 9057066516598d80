// ==========================================
// Sistema de Controle de Estoque - Modelo de estoque
// ==========================================
// ItemEstoque: linha crua recém-mapeada da planilha
// ItemProcessado: registro classificado e agrupado, imutável após
//                 a análise (total/variantes preenchidos em 2º passe)
// ==========================================

use crate::domain::types::{LayoutEstoque, StatusItem};
use serde::{Deserialize, Serialize};

/// Valor padrão das colunas de localização ausentes
pub const SEM_LOCALIZACAO: &str = "-";

// ==========================================
// ItemEstoque - linha crua
// ==========================================
// Efêmero: produzido pelo parser de linha, consumido na hora pelo
// analisador. Linhas sem código ou descrição nunca viram ItemEstoque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEstoque {
    pub cod_material: String,
    pub desc_material: String,
    pub quantidade: f64,

    // ===== Localização (apenas layout Legado; senão "-") =====
    pub estacao: String,
    pub rack: String,
    pub linha_prod_alocado: String,
    pub coluna_prod_alocado: String,
}

// ==========================================
// ItemProcessado - registro analisado
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemProcessado {
    /// Identidade determinística: "<cod_material>-<índice da linha>"
    /// Reproduzível na mesma entrada; não é estável entre reimportações
    pub id: String,
    pub cod_material: String,
    pub desc_material: String,
    pub quantidade: f64,
    pub estacao: String,
    pub rack: String,
    pub linha_prod_alocado: String,
    pub coluna_prod_alocado: String,

    /// Conjunto de status (ver invariantes em StatusItem)
    pub status: Vec<StatusItem>,
    /// Códigos das variantes irmãs (nunca inclui o próprio código)
    pub variantes: Option<Vec<String>>,
    /// Quantidade somada do grupo de variantes; igual à própria
    /// quantidade quando o item não participa de grupo
    pub total_quantidade: f64,
    /// Id sintético do grupo de variantes ("variante-<base>")
    pub grupo_id: Option<String>,
}

impl ItemProcessado {
    pub fn tem_status(&self, status: StatusItem) -> bool {
        self.status.contains(&status)
    }

    /// Item sem nenhuma localização cadastrada
    pub fn sem_endereco(&self) -> bool {
        [
            &self.estacao,
            &self.rack,
            &self.linha_prod_alocado,
            &self.coluna_prod_alocado,
        ]
        .iter()
        .all(|campo| campo.trim().is_empty() || campo.as_str() == SEM_LOCALIZACAO)
    }
}

// ==========================================
// Métricas do painel de estoque
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricasEstoque {
    pub total_itens: usize,
    pub itens_zerados: usize,
    pub itens_negativos: usize,
    /// Grupos únicos com duplicidade ou variantes
    pub grupos_duplicados: usize,
    /// Itens sem localização cadastrada (layout Legado)
    pub itens_sem_endereco: usize,
}

// ==========================================
// Resultado da análise de estoque
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultadoEstoque {
    pub layout: LayoutEstoque,
    pub itens: Vec<ItemProcessado>,
    pub metricas: MetricasEstoque,
}
