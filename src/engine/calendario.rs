// ==========================================
// Sistema de Controle de Estoque - Calendário de dias úteis
// ==========================================
// Duas réguas distintas de dia útil:
// - APROVAÇÃO: segunda a sexta, menos feriados
// - FATURAMENTO: segunda a sábado, menos feriados
// Feriados = fixos anuais + móveis pré-computados (2024-2027).
// Ano fora da tabela: sem feriados móveis (limitação conhecida,
// não "corrigir" com cálculo de Páscoa).
// ==========================================

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Feriados nacionais fixos (mês, dia)
const FERIADOS_FIXOS: [(u32, u32); 8] = [
    (1, 1),   // Confraternização Universal
    (4, 21),  // Tiradentes
    (5, 1),   // Dia do Trabalho
    (9, 7),   // Independência do Brasil
    (10, 12), // Nossa Senhora Aparecida
    (11, 2),  // Finados
    (11, 15), // Proclamação da República
    (12, 25), // Natal
];

/// Feriados móveis por ano: Carnaval (2 dias), Sexta-feira Santa,
/// Corpus Christi
const FERIADOS_MOVEIS: [(i32, [(u32, u32); 4]); 4] = [
    (2024, [(2, 12), (2, 13), (3, 29), (5, 30)]),
    (2025, [(3, 3), (3, 4), (4, 18), (6, 19)]),
    (2026, [(2, 16), (2, 17), (4, 3), (6, 4)]),
    (2027, [(2, 8), (2, 9), (3, 26), (5, 27)]),
];

// ==========================================
// CalendarioFeriados - provedor explícito
// ==========================================
// Valor injetável nos analisadores; saída determinística por ano,
// sem cache global
#[derive(Debug, Clone, Default)]
pub struct CalendarioFeriados;

impl CalendarioFeriados {
    pub fn new() -> Self {
        CalendarioFeriados
    }

    /// Data é feriado nacional (fixo ou móvel conhecido)
    pub fn eh_feriado(&self, data: NaiveDate) -> bool {
        let (mes, dia) = (data.month(), data.day());

        if FERIADOS_FIXOS.contains(&(mes, dia)) {
            return true;
        }

        FERIADOS_MOVEIS
            .iter()
            .find(|(ano, _)| *ano == data.year())
            .map(|(_, datas)| datas.contains(&(mes, dia)))
            .unwrap_or(false)
    }

    pub fn eh_domingo(&self, data: NaiveDate) -> bool {
        data.weekday() == Weekday::Sun
    }

    pub fn eh_sabado(&self, data: NaiveDate) -> bool {
        data.weekday() == Weekday::Sat
    }

    pub fn eh_fim_de_semana(&self, data: NaiveDate) -> bool {
        self.eh_sabado(data) || self.eh_domingo(data)
    }

    /// Dia útil para APROVAÇÃO: segunda a sexta, não feriado
    pub fn eh_dia_util_aprovacao(&self, data: NaiveDate) -> bool {
        !self.eh_fim_de_semana(data) && !self.eh_feriado(data)
    }

    /// Dia útil para FATURAMENTO: segunda a sábado, não feriado
    pub fn eh_dia_util_faturamento(&self, data: NaiveDate) -> bool {
        !self.eh_domingo(data) && !self.eh_feriado(data)
    }

    /// Próximo dia útil de aprovação; devolve a própria data quando
    /// ela já qualifica (idempotente)
    pub fn proximo_dia_util_aprovacao(&self, data: NaiveDate) -> NaiveDate {
        let mut atual = data;
        // Termina: há ao menos um dia útil por semana, menos feriados
        while !self.eh_dia_util_aprovacao(atual) {
            atual += Duration::days(1);
        }
        atual
    }

    /// Dias úteis de faturamento entre duas datas: exclui o início,
    /// inclui o fim. Devolve 0 quando fim <= início.
    pub fn dias_uteis_entre(&self, inicio: NaiveDate, fim: NaiveDate) -> i64 {
        let mut dias = 0;
        let mut atual = inicio + Duration::days(1);

        while atual <= fim {
            if self.eh_dia_util_faturamento(atual) {
                dias += 1;
            }
            atual += Duration::days(1);
        }

        dias
    }
}
