//! Análise exploratória: estatísticas descritivas e distribuições gerais do
//! dataset formatado.

use crate::models::Aluno;

use super::estatisticas::{frequencia, media, mediana, resumo};
use super::graficos;
use super::ColetorGraficos;

pub fn executar(alunos: &[Aluno], coletor: &mut ColetorGraficos) {
    println!("\nIniciando Análise Exploratória...");

    estatisticas_descritivas(alunos);
    tabelas_de_frequencia(alunos);

    coletor.registrar("distribuicao_sexo", grafico_distribuicao_sexo(alunos, coletor));
    coletor.registrar("distribuicao_idade", grafico_distribuicao_idade(alunos, coletor));

    println!("\nAnálise Exploratória Concluída!");
}

fn estatisticas_descritivas(alunos: &[Aluno]) {
    let idades: Vec<f64> = alunos.iter().filter_map(|a| a.idade_ingresso).map(|i| i as f64).collect();
    imprimir_resumo("Idade no ingresso", &idades);

    let cras: Vec<f64> = alunos.iter().map(|a| a.cra).collect();
    imprimir_resumo("CRA", &cras);

    let distancias: Vec<f64> = alunos.iter().filter_map(|a| a.distancia_urca).collect();
    imprimir_resumo("Distância até a Urca (km)", &distancias);

    imprimir_cra_por_grupo("Forma de Ingresso", alunos, |a| {
        a.forma_ingresso_simples.as_str().to_string()
    });
    imprimir_cra_por_grupo("Status de Evasão", alunos, |a| a.status_evasao.as_str().to_string());
    imprimir_cra_por_grupo("Sexo", alunos, |a| a.sexo.clone());
}

fn imprimir_resumo(titulo: &str, valores: &[f64]) {
    println!("\nEstatísticas Descritivas referentes a {}:", titulo);
    match resumo(valores) {
        Some(r) => {
            println!("Mínimo: {:.2}", r.minimo);
            println!("Máximo: {:.2}", r.maximo);
            println!("Média: {:.2}", r.media);
            println!("Mediana: {:.2}", r.mediana);
            println!("Desvio Padrão: {:.2}", r.desvio_padrao);
            println!("Moda: {:.2}", r.moda);
        }
        None => println!("(sem valores)"),
    }
}

fn imprimir_cra_por_grupo<F>(titulo: &str, alunos: &[Aluno], grupo: F)
where
    F: Fn(&Aluno) -> String,
{
    use std::collections::BTreeMap;

    let mut por_grupo: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for aluno in alunos {
        por_grupo.entry(grupo(aluno)).or_default().push(aluno.cra);
    }

    println!("\nCRA por {}:", titulo);
    for (nome, cras) in &por_grupo {
        let maior = cras.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let menor = cras.iter().cloned().fold(f64::INFINITY, f64::min);
        println!(
            "  {}: n={}, maior={:.2}, menor={:.2}, média={:.2}, mediana={:.2}",
            nome,
            cras.len(),
            maior,
            menor,
            media(cras).unwrap_or(0.0),
            mediana(cras).unwrap_or(0.0)
        );
    }
}

fn tabelas_de_frequencia(alunos: &[Aluno]) {
    imprimir_frequencia("SEXO", alunos.iter().map(|a| a.sexo.clone()));
    imprimir_frequencia(
        "FORMA_INGRESSO_SIMPLES",
        alunos.iter().map(|a| a.forma_ingresso_simples.as_str().to_string()),
    );
    imprimir_frequencia(
        "STATUS_EVASAO",
        alunos.iter().map(|a| a.status_evasao.as_str().to_string()),
    );
}

fn imprimir_frequencia<I>(coluna: &str, valores: I)
where
    I: IntoIterator<Item = String>,
{
    println!("\nFrequência de {}:", coluna);
    for (valor, contagem) in frequencia(valores) {
        println!("  {}: {}", valor, contagem);
    }
}

fn grafico_distribuicao_sexo(
    alunos: &[Aluno],
    coletor: &ColetorGraficos,
) -> Result<(), Box<dyn std::error::Error>> {
    let categorias: Vec<(String, f64)> = frequencia(alunos.iter().map(|a| a.sexo.clone()))
        .into_iter()
        .map(|(nome, contagem)| (nome, contagem as f64))
        .collect();
    graficos::grafico_barras(
        &coletor.caminho("distribuicao_sexo"),
        "Distribuição por Sexo",
        "Quantidade",
        &categorias,
    )
}

fn grafico_distribuicao_idade(
    alunos: &[Aluno],
    coletor: &ColetorGraficos,
) -> Result<(), Box<dyn std::error::Error>> {
    let idades: Vec<f64> = alunos.iter().filter_map(|a| a.idade_ingresso).map(|i| i as f64).collect();
    graficos::histograma(
        &coletor.caminho("distribuicao_idade"),
        "Distribuição de Idades no Ingresso",
        "idade",
        &idades,
        12,
    )
}
