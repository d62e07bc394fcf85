//! Análise temporal: evolução do CRA e dos ingressos/evasões ao longo dos
//! períodos letivos, mais a comparação entre coortes.

use std::collections::BTreeMap;
use std::error::Error;

use crate::models::{Aluno, Coorte, FormaIngresso, StatusEvasao};

use super::estatisticas::media;
use super::graficos;
use super::ColetorGraficos;

pub fn executar(alunos: &[Aluno], coletor: &mut ColetorGraficos) {
    println!("\nIniciando Análise Temporal...");

    coletor.registrar("variacao_media_cra", grafico_media_cra_por_periodo(alunos, coletor));
    coletor.registrar("tendencia_ingresso", grafico_tendencia_ingresso(alunos, coletor));
    coletor.registrar("tendencia_evasao", grafico_tendencia_evasao(alunos, coletor));
    coletor.registrar(
        "variacao_media_cra_forma_ingresso",
        grafico_media_cra_por_forma(alunos, coletor),
    );
    coletor.registrar(
        "variacao_media_cra_status",
        grafico_media_cra_por_status(alunos, coletor),
    );
    coletor.registrar("status_por_coorte", grafico_status_por_coorte(alunos, coletor));

    println!("\nAnálise Temporal Concluída!");
}

/// Períodos de ingresso presentes no dataset, em ordem cronológica (o
/// formato ano.semestre ordena lexicograficamente certo).
fn periodos_de_ingresso(alunos: &[Aluno]) -> Vec<String> {
    let mut periodos: Vec<String> = alunos
        .iter()
        .filter(|a| a.ano_ingresso.is_some())
        .map(|a| a.periodo_ingresso_formatado.clone())
        .collect();
    periodos.sort();
    periodos.dedup();
    periodos
}

fn serie_media_por_periodo<F>(
    alunos: &[Aluno],
    periodos: &[String],
    filtro: F,
) -> Vec<(usize, f64)>
where
    F: Fn(&Aluno) -> bool,
{
    periodos
        .iter()
        .enumerate()
        .filter_map(|(i, periodo)| {
            let cras: Vec<f64> = alunos
                .iter()
                .filter(|a| a.periodo_ingresso_formatado == *periodo && filtro(a))
                .map(|a| a.cra)
                .collect();
            media(&cras).map(|m| (i, m))
        })
        .collect()
}

fn grafico_media_cra_por_periodo(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let periodos = periodos_de_ingresso(alunos);
    let serie = serie_media_por_periodo(alunos, &periodos, |_| true);
    graficos::grafico_linha(
        &coletor.caminho("variacao_media_cra"),
        "Variação da Média do CRA por Período",
        "Média do CRA",
        &periodos,
        &[("Média do CRA".to_string(), serie)],
    )
}

fn grafico_tendencia_ingresso(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let periodos = periodos_de_ingresso(alunos);
    let serie: Vec<(usize, f64)> = periodos
        .iter()
        .enumerate()
        .map(|(i, periodo)| {
            let contagem = alunos
                .iter()
                .filter(|a| a.periodo_ingresso_formatado == *periodo)
                .count();
            (i, contagem as f64)
        })
        .collect();
    graficos::grafico_linha(
        &coletor.caminho("tendencia_ingresso"),
        "Tendência de Ingresso por Período",
        "Ingressantes",
        &periodos,
        &[("Ingressantes".to_string(), serie)],
    )
}

fn grafico_tendencia_evasao(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let mut periodos: Vec<String> = alunos
        .iter()
        .filter(|a| a.status_evasao == StatusEvasao::Evasao && !a.periodo_evasao_formatado.is_empty())
        .map(|a| a.periodo_evasao_formatado.clone())
        .collect();
    periodos.sort();
    periodos.dedup();

    let serie: Vec<(usize, f64)> = periodos
        .iter()
        .enumerate()
        .map(|(i, periodo)| {
            let contagem = alunos
                .iter()
                .filter(|a| {
                    a.status_evasao == StatusEvasao::Evasao && a.periodo_evasao_formatado == *periodo
                })
                .count();
            (i, contagem as f64)
        })
        .collect();
    graficos::grafico_linha(
        &coletor.caminho("tendencia_evasao"),
        "Tendência de Evasão por Período",
        "Evasões",
        &periodos,
        &[("Evasões".to_string(), serie)],
    )
}

fn grafico_media_cra_por_forma(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let periodos = periodos_de_ingresso(alunos);
    let series: Vec<(String, Vec<(usize, f64)>)> =
        [FormaIngresso::Cotas, FormaIngresso::AmplaConcorrencia]
            .iter()
            .map(|forma| {
                (
                    forma.as_str().to_string(),
                    serie_media_por_periodo(alunos, &periodos, |a| a.forma_ingresso_simples == *forma),
                )
            })
            .collect();
    graficos::grafico_linha(
        &coletor.caminho("variacao_media_cra_forma_ingresso"),
        "Média do CRA por Período e Forma de Ingresso",
        "Média do CRA",
        &periodos,
        &series,
    )
}

fn grafico_media_cra_por_status(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let periodos = periodos_de_ingresso(alunos);
    let series: Vec<(String, Vec<(usize, f64)>)> = StatusEvasao::todos()
        .iter()
        .map(|status| {
            (
                status.as_str().to_string(),
                serie_media_por_periodo(alunos, &periodos, |a| a.status_evasao == *status),
            )
        })
        .collect();
    graficos::grafico_linha(
        &coletor.caminho("variacao_media_cra_status"),
        "Média do CRA por Período e Situação",
        "Média do CRA",
        &periodos,
        &series,
    )
}

/// Comparação entre coortes: distribuição percentual da situação dos alunos
/// em cada recorte temporal do ingresso.
fn grafico_status_por_coorte(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let mut por_coorte: BTreeMap<&'static str, Vec<&Aluno>> = BTreeMap::new();
    for aluno in alunos {
        if let Some(coorte) = aluno.coorte() {
            por_coorte.entry(coorte.nome()).or_default().push(aluno);
        }
    }

    // Mantém a ordem cronológica das coortes, não a alfabética
    let presentes: Vec<&'static str> = Coorte::todas()
        .iter()
        .map(|c| c.nome())
        .filter(|nome| por_coorte.contains_key(*nome))
        .collect();

    let grupos: Vec<String> = presentes.iter().map(|n| n.to_string()).collect();
    let series: Vec<(String, Vec<f64>)> = StatusEvasao::todos()
        .iter()
        .map(|status| {
            let valores: Vec<f64> = presentes
                .iter()
                .map(|nome| {
                    let grupo = &por_coorte[*nome];
                    let contagem = grupo.iter().filter(|a| a.status_evasao == *status).count();
                    contagem as f64 / grupo.len() as f64 * 100.0
                })
                .collect();
            (status.as_str().to_string(), valores)
        })
        .collect();

    graficos::grafico_barras_agrupadas(
        &coletor.caminho("status_por_coorte"),
        "Situação dos Alunos por Coorte de Ingresso (%)",
        "% dos alunos da coorte",
        &grupos,
        &series,
    )
}
