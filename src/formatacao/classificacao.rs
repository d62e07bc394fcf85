use crate::models::{FormaIngresso, StatusEvasao};

/// Formas de ingresso contadas como cota (listas fixas do SISU escola pública).
const FORMAS_COTAS: &[&str] = &[
    "SISU Escola Publica - Indep. de Renda",
    "SISU Escola Pública até 1,5 S.M Índio",
    "SISU Escola Pública até 1,5 S.M Preto e Pardo",
    "SISU Escola Pública até 1,5 S.M.",
    "SISU Escola Pública até 1,5 S.M. Preto, Pardo, Indígena",
    "SISU Escola Pública, Indep. de Renda: Preto, Pardo, Indígena",
    "SISU Escola Pública, Indep. de Renda: Índio",
    "SISU Escola Pública, Indep. de Renda: Preto e Pardo",
];

/// Formas de ingresso de ampla concorrência.
const FORMAS_AMPLA: &[&str] = &["VE - Vestibular", "EN - ENEM", "SISU Ampla Concorrencia"];

/// Marcadores de evasão na forma de saída (abandono, jubilamento,
/// cancelamento, falecimento, transferência...). "TIC " leva espaço para não
/// capturar siglas maiores.
const MARCADORES_EVASAO: &[&str] =
    &["ABA", "APO", "Desistência SiSU", "JUB", "CAN", "FAL", "TIC "];

/// Classifica a forma de ingresso bruta em Cotas / Ampla Concorrencia / Outros.
pub fn classificar_forma_ingresso(forma: &str) -> FormaIngresso {
    let forma = forma.trim();
    if FORMAS_COTAS.contains(&forma) {
        FormaIngresso::Cotas
    } else if FORMAS_AMPLA.contains(&forma) {
        FormaIngresso::AmplaConcorrencia
    } else {
        FormaIngresso::Outros
    }
}

/// Classifica a forma de evasão bruta na situação do aluno.
///
/// A ordem de verificação segue a precedência histórica: marcadores de
/// evasão, conclusão ("CON"), "Sem evasão"; qualquer outra coisa conta como
/// evasão.
pub fn classificar_forma_evasao(forma: &str) -> StatusEvasao {
    if MARCADORES_EVASAO.iter().any(|m| forma.contains(m)) {
        StatusEvasao::Evasao
    } else if forma.contains("CON") {
        StatusEvasao::Concluido
    } else if forma.contains("Sem evasão") {
        StatusEvasao::Cursando
    } else {
        StatusEvasao::Evasao
    }
}

/// Arredonda o CRA para o meio ponto mais próximo. Idempotente.
pub fn arredondar_cra(cra: f64) -> f64 {
    (cra * 2.0).round() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifica_cotas_e_ampla() {
        assert_eq!(
            classificar_forma_ingresso("SISU Escola Pública até 1,5 S.M."),
            FormaIngresso::Cotas
        );
        assert_eq!(
            classificar_forma_ingresso("SISU Escola Pública, Indep. de Renda: Índio"),
            FormaIngresso::Cotas
        );
        assert_eq!(classificar_forma_ingresso("EN - ENEM"), FormaIngresso::AmplaConcorrencia);
        assert_eq!(
            classificar_forma_ingresso("VE - Vestibular"),
            FormaIngresso::AmplaConcorrencia
        );
        assert_eq!(
            classificar_forma_ingresso("Transferência Externa"),
            FormaIngresso::Outros
        );
    }

    #[test]
    fn classifica_status_evasao() {
        assert_eq!(classificar_forma_evasao("CON - Conclusão de Curso"), StatusEvasao::Concluido);
        assert_eq!(classificar_forma_evasao("Sem evasão"), StatusEvasao::Cursando);
        assert_eq!(classificar_forma_evasao("ABA - Abandono de Curso"), StatusEvasao::Evasao);
        assert_eq!(classificar_forma_evasao("JUB - Jubilamento"), StatusEvasao::Evasao);
        assert_eq!(classificar_forma_evasao("Desistência SiSU"), StatusEvasao::Evasao);
        // Forma desconhecida cai na categoria de evasão
        assert_eq!(classificar_forma_evasao("???"), StatusEvasao::Evasao);
    }

    #[test]
    fn marcador_de_evasao_vence_conclusao() {
        // "CANcelamento" contém CAN e CON não aparece; mas mesmo que ambos
        // aparecessem, o marcador de evasão tem precedência
        assert_eq!(
            classificar_forma_evasao("CAN - CONtrato cancelado"),
            StatusEvasao::Evasao
        );
    }

    #[test]
    fn arredondamento_de_cra_em_meios_pontos() {
        assert_eq!(arredondar_cra(7.3), 7.5);
        assert_eq!(arredondar_cra(7.1), 7.0);
        assert_eq!(arredondar_cra(7.75), 8.0);
        assert_eq!(arredondar_cra(0.0), 0.0);
        // Idempotência
        let arredondado = arredondar_cra(6.2);
        assert_eq!(arredondar_cra(arredondado), arredondado);
    }
}
