use std::fs;

use chrono::NaiveDate;
use evastat::formatacao::{carregar_principal, formatar_registros, salvar_principal, OpcoesFormatacao};
use evastat::models::{RegistroBruto, StatusEvasao};

#[test]
fn df_principal_sobrevive_a_ida_e_volta_no_csv() {
    let registros = vec![
        RegistroBruto {
            sexo: "F".to_string(),
            dt_nascimento: NaiveDate::from_ymd_opt(1996, 3, 14),
            forma_ingresso: "SISU Escola Pública até 1,5 S.M.".to_string(),
            periodo_ingresso: "2014/1".to_string(),
            forma_evasao: "CON - Conclusão de Curso".to_string(),
            dt_evasao: NaiveDate::from_ymd_opt(2018, 7, 10),
            periodo_evasao: "2018/2".to_string(),
            cra: 8.1,
            bairro: "Méier".to_string(),
            cidade: "Rio de Janeiro".to_string(),
            estado: "Rio de Janeiro".to_string(),
        },
        RegistroBruto {
            sexo: "M".to_string(),
            dt_nascimento: None,
            forma_ingresso: "EN - ENEM".to_string(),
            periodo_ingresso: "2016/2".to_string(),
            forma_evasao: "Sem evasão".to_string(),
            dt_evasao: None,
            periodo_evasao: String::new(),
            cra: 5.7,
            bairro: String::new(),
            cidade: String::new(),
            estado: String::new(),
        },
    ];
    let mut alunos = formatar_registros(
        registros,
        &OpcoesFormatacao { incluir_outros: true, manter_anteriores_2014: true },
    );
    alunos[0].distancia_urca = Some(12.34);

    let pasta = std::env::temp_dir().join(format!("evastat_csv_{}", std::process::id()));
    fs::create_dir_all(&pasta).expect("pasta temporária");
    let caminho = pasta.join("dfPrincipal.csv");

    salvar_principal(&alunos, &caminho).expect("salvar dfPrincipal");
    let relidos = carregar_principal(&caminho).expect("carregar dfPrincipal");

    assert_eq!(relidos.len(), alunos.len());
    assert_eq!(relidos[0].sexo, "F");
    assert_eq!(relidos[0].status_evasao, StatusEvasao::Concluido);
    assert_eq!(relidos[0].dt_nascimento, NaiveDate::from_ymd_opt(1996, 3, 14));
    assert_eq!(relidos[0].periodo_ingresso_formatado, "2014.1");
    assert_eq!(relidos[0].distancia_urca, Some(12.34));
    assert_eq!(relidos[0].bairro, "meier");

    // Campos ausentes voltam ausentes, não como string vazia interpretada
    assert_eq!(relidos[1].dt_nascimento, None);
    assert_eq!(relidos[1].distancia_urca, None);
    assert_eq!(relidos[1].ano_evasao, None);
    assert_eq!(relidos[1].bairro, "desconhecido");
    assert_eq!(relidos[1].status_evasao, StatusEvasao::Cursando);

    // As categorias gravadas no CSV são os rótulos de exibição
    let conteudo = fs::read_to_string(&caminho).expect("ler CSV");
    assert!(conteudo.contains("Concluído"));
    assert!(conteudo.contains("Cotas"));
    assert!(conteudo.lines().next().unwrap_or("").contains("STATUS_EVASAO"));

    let _ = fs::remove_dir_all(&pasta);
}
