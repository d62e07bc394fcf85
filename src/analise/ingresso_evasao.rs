//! Análise de ingresso e evasão: cotistas vs ampla concorrência, situação do
//! aluno e a distribuição das evasões no tempo e no curso.

use std::collections::BTreeMap;
use std::error::Error;

use crate::models::{Aluno, FormaIngresso, StatusEvasao};

use super::estatisticas::media;
use super::graficos;
use super::ColetorGraficos;

pub fn executar(alunos: &[Aluno], coletor: &mut ColetorGraficos) {
    println!("\nIniciando Análise de Ingresso e Evasão...");

    exibir_diferenca_media_tempo_termino(alunos);
    exibir_porcentagens_por_forma_ingresso(alunos);
    exibir_top_bairros_por_status(alunos, StatusEvasao::Concluido);
    exibir_top_bairros_por_status(alunos, StatusEvasao::Evasao);

    coletor.registrar("media_cra_evasao", grafico_media_cra_por_status(alunos, coletor));
    coletor.registrar("distribuicao_ingresso", grafico_distribuicao_ingresso(alunos, coletor));
    coletor.registrar("evasao_sexo_cotistas", grafico_evasao_por_sexo(alunos, coletor, FormaIngresso::Cotas));
    coletor.registrar(
        "evasao_sexo_ampla",
        grafico_evasao_por_sexo(alunos, coletor, FormaIngresso::AmplaConcorrencia),
    );
    coletor.registrar("evasao_idade", grafico_idade_evadidos(alunos, coletor));
    coletor.registrar("evasao_ao_longo_do_tempo", grafico_evasao_por_periodo(alunos, coletor));
    coletor.registrar("evasao_por_fase_do_curso", grafico_evasao_por_fase(alunos, coletor));

    println!("\nAnálise de Ingresso e Evasão Concluída!");
}

fn tempo_medio_conclusao(alunos: &[Aluno], forma: FormaIngresso) -> Option<f64> {
    let tempos: Vec<f64> = alunos
        .iter()
        .filter(|a| a.status_evasao == StatusEvasao::Concluido && a.forma_ingresso_simples == forma)
        .filter_map(|a| a.tempo_curso)
        .collect();
    media(&tempos)
}

fn exibir_diferenca_media_tempo_termino(alunos: &[Aluno]) {
    let cotistas = tempo_medio_conclusao(alunos, FormaIngresso::Cotas);
    let ampla = tempo_medio_conclusao(alunos, FormaIngresso::AmplaConcorrencia);

    println!("Diferença de tempo de término entre Cotistas e Não Cotistas:");
    match (cotistas, ampla) {
        (Some(c), Some(a)) => {
            println!("Cotistas: {:.2} anos", c);
            println!("Não Cotistas: {:.2} anos", a);
            println!("Diferença: {:.2} anos\n", (c - a).abs());
        }
        _ => println!("(sem concluintes suficientes para comparar)\n"),
    }
}

fn exibir_porcentagens_por_forma_ingresso(alunos: &[Aluno]) {
    for (titulo, forma) in [
        ("Cotistas", FormaIngresso::Cotas),
        ("Não Cotistas", FormaIngresso::AmplaConcorrencia),
    ] {
        let grupo: Vec<&Aluno> = alunos.iter().filter(|a| a.forma_ingresso_simples == forma).collect();
        println!("Porcentagem de alunos {}:", titulo);
        if grupo.is_empty() {
            println!("(nenhum aluno no grupo)\n");
            continue;
        }
        for status in StatusEvasao::todos() {
            let contagem = grupo.iter().filter(|a| a.status_evasao == status).count();
            println!(
                "{}: {:.2}%",
                status,
                contagem as f64 / grupo.len() as f64 * 100.0
            );
        }
        println!();
    }
}

/// Top 5 bairros entre os alunos com o status dado, ponderados pela fatia do
/// bairro no grupo (bairros desconhecidos ficam de fora).
fn exibir_top_bairros_por_status(alunos: &[Aluno], status: StatusEvasao) {
    let grupo: Vec<&Aluno> = alunos
        .iter()
        .filter(|a| a.status_evasao == status && a.bairro != "desconhecido")
        .collect();
    if grupo.is_empty() {
        return;
    }

    let mut por_bairro: BTreeMap<&str, usize> = BTreeMap::new();
    for aluno in &grupo {
        *por_bairro.entry(aluno.bairro.as_str()).or_default() += 1;
    }

    let mut ranking: Vec<(&str, f64)> = por_bairro
        .into_iter()
        .map(|(bairro, contagem)| (bairro, contagem as f64 / grupo.len() as f64 * 100.0))
        .collect();
    ranking.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    println!("Top 5 Bairros com mais alunos ({}):", status);
    for (bairro, porcentagem) in ranking.into_iter().take(5) {
        println!("{}: {:.2}%", bairro, porcentagem);
    }
    println!();
}

fn grafico_media_cra_por_status(
    alunos: &[Aluno],
    coletor: &ColetorGraficos,
) -> Result<(), Box<dyn Error>> {
    let categorias: Vec<(String, f64)> = StatusEvasao::todos()
        .iter()
        .filter_map(|status| {
            let cras: Vec<f64> = alunos
                .iter()
                .filter(|a| a.status_evasao == *status)
                .map(|a| a.cra)
                .collect();
            media(&cras).map(|m| (status.as_str().to_string(), m))
        })
        .collect();
    graficos::grafico_barras(
        &coletor.caminho("media_cra_evasao"),
        "Média do CRA por Situação",
        "Média do CRA",
        &categorias,
    )
}

fn grafico_distribuicao_ingresso(
    alunos: &[Aluno],
    coletor: &ColetorGraficos,
) -> Result<(), Box<dyn Error>> {
    let formas = [
        FormaIngresso::Cotas,
        FormaIngresso::AmplaConcorrencia,
        FormaIngresso::Outros,
    ];
    let categorias: Vec<(String, f64)> = formas
        .iter()
        .map(|forma| {
            let contagem = alunos.iter().filter(|a| a.forma_ingresso_simples == *forma).count();
            (forma.as_str().to_string(), contagem as f64)
        })
        .filter(|(_, contagem)| *contagem > 0.0)
        .collect();
    graficos::grafico_barras(
        &coletor.caminho("distribuicao_ingresso"),
        "Distribuição de Cotistas e Não-Cotistas",
        "Quantidade",
        &categorias,
    )
}

fn grafico_evasao_por_sexo(
    alunos: &[Aluno],
    coletor: &ColetorGraficos,
    forma: FormaIngresso,
) -> Result<(), Box<dyn Error>> {
    let grupo: Vec<&Aluno> = alunos.iter().filter(|a| a.forma_ingresso_simples == forma).collect();

    let sexos: Vec<String> = {
        let mut s: Vec<String> = grupo.iter().map(|a| a.sexo.clone()).collect();
        s.sort();
        s.dedup();
        s
    };

    let grupos: Vec<String> = StatusEvasao::todos().iter().map(|s| s.as_str().to_string()).collect();
    let series: Vec<(String, Vec<f64>)> = sexos
        .into_iter()
        .map(|sexo| {
            let valores: Vec<f64> = StatusEvasao::todos()
                .iter()
                .map(|status| {
                    grupo
                        .iter()
                        .filter(|a| a.sexo == sexo && a.status_evasao == *status)
                        .count() as f64
                })
                .collect();
            (sexo, valores)
        })
        .collect();

    let (nome, titulo) = match forma {
        FormaIngresso::Cotas => ("evasao_sexo_cotistas", "Situação por Sexo (Cotistas)"),
        _ => ("evasao_sexo_ampla", "Situação por Sexo (Não Cotistas)"),
    };
    graficos::grafico_barras_agrupadas(
        &coletor.caminho(nome),
        titulo,
        "Quantidade",
        &grupos,
        &series,
    )
}

fn grafico_idade_evadidos(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let idades: Vec<f64> = alunos
        .iter()
        .filter(|a| a.status_evasao == StatusEvasao::Evasao)
        .filter_map(|a| a.idade_ingresso)
        .map(|i| i as f64)
        .collect();
    graficos::histograma(
        &coletor.caminho("evasao_idade"),
        "Distribuição de Idades dos Alunos com Evasão",
        "idade",
        &idades,
        12,
    )
}

/// Evasões por período de evasão, agrupadas por forma de ingresso.
fn grafico_evasao_por_periodo(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let mut periodos: Vec<String> = alunos
        .iter()
        .filter(|a| a.status_evasao == StatusEvasao::Evasao && !a.periodo_evasao_formatado.is_empty())
        .map(|a| a.periodo_evasao_formatado.clone())
        .collect();
    periodos.sort();
    periodos.dedup();

    let series: Vec<(String, Vec<f64>)> = [FormaIngresso::Cotas, FormaIngresso::AmplaConcorrencia]
        .iter()
        .map(|forma| {
            let valores: Vec<f64> = periodos
                .iter()
                .map(|periodo| {
                    alunos
                        .iter()
                        .filter(|a| {
                            a.status_evasao == StatusEvasao::Evasao
                                && a.forma_ingresso_simples == *forma
                                && a.periodo_evasao_formatado == *periodo
                        })
                        .count() as f64
                })
                .collect();
            (forma.as_str().to_string(), valores)
        })
        .collect();

    graficos::grafico_barras_agrupadas(
        &coletor.caminho("evasao_ao_longo_do_tempo"),
        "Distribuição de Evasão por Período",
        "Número de Alunos Evadidos",
        &periodos,
        &series,
    )
}

/// Em que fase do curso a evasão acontece: tempo de curso convertido em
/// períodos (semestres) no momento da saída.
fn grafico_evasao_por_fase(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let fases: Vec<f64> = alunos
        .iter()
        .filter(|a| a.status_evasao == StatusEvasao::Evasao)
        .filter_map(|a| a.tempo_curso)
        .map(|tempo| (tempo * 2.0).round())
        .filter(|fase| *fase >= 1.0)
        .collect();
    graficos::histograma(
        &coletor.caminho("evasao_por_fase_do_curso"),
        "Distribuição de Evasão por Período do Curso",
        "período do curso",
        &fases,
        12,
    )
}
