use chrono::{Datelike, NaiveDate};

use crate::models::PeriodoLetivo;

/// Idade do aluno na data de referência do período de ingresso.
///
/// Devolve `None` sem nascimento ou período válidos, ou quando as datas são
/// inconsistentes (idade negativa).
pub fn idade_no_ingresso(nascimento: Option<NaiveDate>, ingresso: Option<PeriodoLetivo>) -> Option<i32> {
    let nascimento = nascimento?;
    let data_ingresso = ingresso?.data_referencia()?;

    let mut idade = data_ingresso.year() - nascimento.year();
    if (data_ingresso.month(), data_ingresso.day()) < (nascimento.month(), nascimento.day()) {
        idade -= 1;
    }
    if idade < 0 {
        return None;
    }
    Some(idade)
}

/// Tempo de curso em anos entre as datas de referência dos períodos de
/// ingresso e evasão, com duas casas decimais.
pub fn tempo_de_curso(ingresso: Option<PeriodoLetivo>, evasao: Option<PeriodoLetivo>) -> Option<f64> {
    let data_ingresso = ingresso?.data_referencia()?;
    let data_evasao = evasao?.data_referencia()?;

    let dias = (data_evasao - data_ingresso).num_days() as f64;
    let anos = dias / 365.25;
    Some((anos * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periodo(ano: i32, semestre: u8) -> Option<PeriodoLetivo> {
        Some(PeriodoLetivo { ano, semestre })
    }

    #[test]
    fn idade_considera_aniversario_no_ano() {
        let nascimento = NaiveDate::from_ymd_opt(1996, 3, 14);
        // Ingresso 2014.1 (ancora em 01/01): aniversário ainda não ocorreu
        assert_eq!(idade_no_ingresso(nascimento, periodo(2014, 1)), Some(17));
        // Ingresso 2014.2 (ancora em 01/07): aniversário já passou
        assert_eq!(idade_no_ingresso(nascimento, periodo(2014, 2)), Some(18));
    }

    #[test]
    fn idade_invalida_fica_ausente() {
        assert_eq!(idade_no_ingresso(None, periodo(2014, 1)), None);
        assert_eq!(idade_no_ingresso(NaiveDate::from_ymd_opt(1996, 3, 14), None), None);
        // Nascimento posterior ao ingresso é inconsistência, não idade negativa
        assert_eq!(
            idade_no_ingresso(NaiveDate::from_ymd_opt(2020, 1, 1), periodo(2014, 1)),
            None
        );
    }

    #[test]
    fn tempo_de_curso_em_anos() {
        // 2014.1 até 2018.1: quatro anos completos
        assert_eq!(tempo_de_curso(periodo(2014, 1), periodo(2018, 1)), Some(4.0));
        // 2014.1 até 2018.2: quatro anos e meio (aprox.)
        let tempo = tempo_de_curso(periodo(2014, 1), periodo(2018, 2)).unwrap();
        assert!((tempo - 4.5).abs() < 0.01, "tempo calculado: {}", tempo);
        assert_eq!(tempo_de_curso(periodo(2014, 1), None), None);
    }
}
