use chrono::NaiveDate;
use evastat::formatacao::{formatar_registros, OpcoesFormatacao};
use evastat::models::{FormaIngresso, RegistroBruto, StatusEvasao};

fn opcoes_completas() -> OpcoesFormatacao {
    OpcoesFormatacao {
        incluir_outros: true,
        manter_anteriores_2014: true,
    }
}

fn registro_base() -> RegistroBruto {
    RegistroBruto {
        sexo: "F".to_string(),
        dt_nascimento: NaiveDate::from_ymd_opt(1996, 3, 14),
        forma_ingresso: "EN - ENEM".to_string(),
        periodo_ingresso: "2014/1".to_string(),
        forma_evasao: "Sem evasão".to_string(),
        dt_evasao: None,
        periodo_evasao: String::new(),
        cra: 7.3,
        bairro: "Flamengo".to_string(),
        cidade: "Rio de Janeiro".to_string(),
        estado: "Rio de Janeiro".to_string(),
    }
}

#[test]
fn classificacao_da_forma_de_ingresso() {
    let mut cotista = registro_base();
    cotista.forma_ingresso = "SISU Escola Pública até 1,5 S.M.".to_string();
    let mut ampla = registro_base();
    ampla.forma_ingresso = "EN - ENEM".to_string();
    let mut outro = registro_base();
    outro.forma_ingresso = "Transferência Externa".to_string();

    let alunos = formatar_registros(vec![cotista, ampla, outro], &opcoes_completas());
    assert_eq!(alunos.len(), 3, "com incluir_outros todos os registros ficam");
    assert_eq!(alunos[0].forma_ingresso_simples, FormaIngresso::Cotas);
    assert_eq!(alunos[1].forma_ingresso_simples, FormaIngresso::AmplaConcorrencia);
    assert_eq!(alunos[2].forma_ingresso_simples, FormaIngresso::Outros);
}

#[test]
fn classificacao_do_status_de_evasao() {
    let mut concluido = registro_base();
    concluido.forma_evasao = "CON - Conclusão de Curso".to_string();
    concluido.periodo_evasao = "2018/1".to_string();
    let mut cursando = registro_base();
    cursando.forma_evasao = "Sem evasão".to_string();
    let mut abandono = registro_base();
    abandono.forma_evasao = "ABA - Abandono de Curso".to_string();
    abandono.periodo_evasao = "2016/2".to_string();

    let alunos = formatar_registros(vec![concluido, cursando, abandono], &opcoes_completas());
    assert_eq!(alunos[0].status_evasao, StatusEvasao::Concluido);
    assert_eq!(alunos[0].forma_evasao_detalhada, "CON - Conclusão de Curso");
    assert_eq!(alunos[1].status_evasao, StatusEvasao::Cursando);
    assert_eq!(alunos[2].status_evasao, StatusEvasao::Evasao);
}

#[test]
fn cra_arredondado_para_meio_ponto_e_idempotente() {
    let cras = [0.0, 3.3, 6.24, 7.75, 9.99, 10.0];
    let registros: Vec<RegistroBruto> = cras
        .iter()
        .map(|cra| {
            let mut r = registro_base();
            r.cra = *cra;
            r
        })
        .collect();

    let alunos = formatar_registros(registros, &opcoes_completas());
    for aluno in &alunos {
        let esperado = (aluno.cra * 2.0).round() / 2.0;
        assert_eq!(aluno.cra_arredondado, esperado, "CRA {}", aluno.cra);
        // Arredondar de novo não muda nada
        assert_eq!((aluno.cra_arredondado * 2.0).round() / 2.0, aluno.cra_arredondado);
    }
}

#[test]
fn idade_no_ingresso_consistente_com_as_datas() {
    let mut aluno = registro_base();
    aluno.dt_nascimento = NaiveDate::from_ymd_opt(1996, 3, 14);
    aluno.periodo_ingresso = "2014/2".to_string();

    let mut sem_nascimento = registro_base();
    sem_nascimento.dt_nascimento = None;

    let mut inconsistente = registro_base();
    inconsistente.dt_nascimento = NaiveDate::from_ymd_opt(2020, 1, 1);

    let alunos = formatar_registros(
        vec![aluno, sem_nascimento, inconsistente],
        &opcoes_completas(),
    );
    assert_eq!(alunos[0].idade_ingresso, Some(18));
    assert_eq!(alunos[1].idade_ingresso, None);
    // Nascimento depois do ingresso não vira idade negativa
    assert_eq!(alunos[2].idade_ingresso, None);
    for aluno in &alunos {
        if let Some(idade) = aluno.idade_ingresso {
            assert!(idade >= 0);
        }
    }
}

#[test]
fn periodos_formatados_e_tempo_de_curso() {
    let mut formado = registro_base();
    formado.forma_evasao = "CON - Conclusão de Curso".to_string();
    formado.periodo_evasao = "2018/1".to_string();

    let mut sem_periodo = registro_base();
    sem_periodo.periodo_ingresso = String::new();

    let alunos = formatar_registros(vec![formado, sem_periodo], &opcoes_completas());
    assert_eq!(alunos[0].periodo_ingresso_formatado, "2014.1");
    assert_eq!(alunos[0].ano_ingresso, Some(2014));
    assert_eq!(alunos[0].periodo_evasao_formatado, "2018.1");
    assert_eq!(alunos[0].tempo_curso, Some(4.0));

    // Ingresso ilegível formata como 0.0, sem ano nem tempo de curso
    assert_eq!(alunos[1].periodo_ingresso_formatado, "0.0");
    assert_eq!(alunos[1].ano_ingresso, None);
    assert_eq!(alunos[1].tempo_curso, None);
}

#[test]
fn recorte_remove_outros_e_anteriores_a_2014() {
    let mut outro = registro_base();
    outro.forma_ingresso = "Transferência Externa".to_string();
    let mut veterano = registro_base();
    veterano.periodo_ingresso = "2010/1".to_string();
    let recente = registro_base();

    let opcoes = OpcoesFormatacao {
        incluir_outros: false,
        manter_anteriores_2014: false,
    };
    let alunos = formatar_registros(vec![outro, veterano, recente], &opcoes);
    assert_eq!(alunos.len(), 1, "só o registro recente de ampla concorrência fica");
    assert_eq!(alunos[0].ano_ingresso, Some(2014));
}

#[test]
fn endereco_corrigido_e_zona_atribuida() {
    let mut grafia_errada = registro_base();
    grafia_errada.bairro = "Santa Tereza".to_string();

    let mut sem_cidade = registro_base();
    sem_cidade.bairro = "Urca".to_string();
    sem_cidade.cidade = String::new();
    sem_cidade.estado = String::new();

    let mut fora_do_estado = registro_base();
    fora_do_estado.bairro = "Centro".to_string();
    fora_do_estado.cidade = "São Paulo".to_string();
    fora_do_estado.estado = "São Paulo".to_string();

    let alunos = formatar_registros(
        vec![grafia_errada, sem_cidade, fora_do_estado],
        &opcoes_completas(),
    );
    assert_eq!(alunos[0].bairro, "santa teresa");
    assert_eq!(alunos[0].zona, "Centro");

    // Cidade/estado inferidos a partir do bairro conhecido
    assert_eq!(alunos[1].cidade, "Rio de Janeiro");
    assert_eq!(alunos[1].estado, "Rio de Janeiro");
    assert_eq!(alunos[1].zona, "Zona Sul");

    assert_eq!(alunos[2].zona, "Outro Estado");
}
