//! Análise geográfica: zonas, bairros e o efeito da distância até o campus.

use std::collections::BTreeMap;
use std::error::Error;

use crate::models::{Aluno, StatusEvasao};

use super::estatisticas::media;
use super::graficos;
use super::ColetorGraficos;

/// Quantos bairros entram no ranking do gráfico.
const TOP_BAIRROS: usize = 10;

pub fn executar(alunos: &[Aluno], coletor: &mut ColetorGraficos) {
    println!("\nIniciando Análise Geográfica...");

    exibir_media_distancia_por_status(alunos);

    coletor.registrar("alunos_por_zona", grafico_alunos_por_zona(alunos, coletor));
    coletor.registrar("top_bairros", grafico_top_bairros(alunos, coletor));
    coletor.registrar("media_cra_por_zona", grafico_media_cra_por_zona(alunos, coletor));
    coletor.registrar(
        "media_distancia_por_status",
        grafico_media_distancia_por_status(alunos, coletor),
    );
    coletor.registrar(
        "distancia_por_status",
        grafico_caixa_distancia_por_status(alunos, coletor),
    );

    println!("\nAnálise Geográfica Concluída!");
}

/// Alunos com bairro conhecido (a categoria "desconhecido" não diz nada
/// sobre geografia).
fn com_bairro<'a>(alunos: &'a [Aluno]) -> impl Iterator<Item = &'a Aluno> {
    alunos.iter().filter(|a| a.bairro != "desconhecido")
}

fn exibir_media_distancia_por_status(alunos: &[Aluno]) {
    println!("Distância média até a Urca por situação:");
    for status in StatusEvasao::todos() {
        let distancias: Vec<f64> = alunos
            .iter()
            .filter(|a| a.status_evasao == status)
            .filter_map(|a| a.distancia_urca)
            .collect();
        match media(&distancias) {
            Some(m) => println!("  {}: {:.2} km (n={})", status, m, distancias.len()),
            None => println!("  {}: sem distâncias conhecidas", status),
        }
    }
    println!();
}

fn grafico_alunos_por_zona(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let mut por_zona: BTreeMap<String, usize> = BTreeMap::new();
    for aluno in com_bairro(alunos) {
        *por_zona.entry(aluno.zona.clone()).or_default() += 1;
    }

    let mut categorias: Vec<(String, f64)> = por_zona
        .into_iter()
        .map(|(zona, contagem)| (zona, contagem as f64))
        .collect();
    categorias.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    graficos::grafico_barras(
        &coletor.caminho("alunos_por_zona"),
        "Distribuição de Alunos por Zona",
        "Quantidade",
        &categorias,
    )
}

fn grafico_top_bairros(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let mut por_bairro: BTreeMap<String, usize> = BTreeMap::new();
    for aluno in com_bairro(alunos) {
        *por_bairro.entry(aluno.bairro.clone()).or_default() += 1;
    }

    let mut ranking: Vec<(String, f64)> = por_bairro
        .into_iter()
        .map(|(bairro, contagem)| (bairro, contagem as f64))
        .collect();
    ranking.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranking.truncate(TOP_BAIRROS);

    graficos::grafico_barras(
        &coletor.caminho("top_bairros"),
        "Bairros com Mais Alunos",
        "Quantidade",
        &ranking,
    )
}

fn grafico_media_cra_por_zona(alunos: &[Aluno], coletor: &ColetorGraficos) -> Result<(), Box<dyn Error>> {
    let mut por_zona: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for aluno in com_bairro(alunos) {
        por_zona.entry(aluno.zona.clone()).or_default().push(aluno.cra);
    }

    let categorias: Vec<(String, f64)> = por_zona
        .into_iter()
        .filter_map(|(zona, cras)| media(&cras).map(|m| (zona, m)))
        .collect();

    graficos::grafico_barras(
        &coletor.caminho("media_cra_por_zona"),
        "Média do CRA por Zona",
        "Média do CRA",
        &categorias,
    )
}

fn distancias_por_status(alunos: &[Aluno]) -> Vec<(String, Vec<f64>)> {
    StatusEvasao::todos()
        .iter()
        .map(|status| {
            let distancias: Vec<f64> = alunos
                .iter()
                .filter(|a| a.status_evasao == *status)
                .filter_map(|a| a.distancia_urca)
                .collect();
            (status.as_str().to_string(), distancias)
        })
        .collect()
}

fn grafico_media_distancia_por_status(
    alunos: &[Aluno],
    coletor: &ColetorGraficos,
) -> Result<(), Box<dyn Error>> {
    let categorias: Vec<(String, f64)> = distancias_por_status(alunos)
        .into_iter()
        .filter_map(|(status, distancias)| media(&distancias).map(|m| (status, m)))
        .collect();
    graficos::grafico_barras(
        &coletor.caminho("media_distancia_por_status"),
        "Distância Média até a Urca por Situação",
        "Distância (km)",
        &categorias,
    )
}

fn grafico_caixa_distancia_por_status(
    alunos: &[Aluno],
    coletor: &ColetorGraficos,
) -> Result<(), Box<dyn Error>> {
    let grupos = distancias_por_status(alunos);
    graficos::grafico_caixa(
        &coletor.caminho("distancia_por_status"),
        "Distribuição da Distância até a Urca por Situação",
        "Distância (km)",
        &grupos,
    )
}
