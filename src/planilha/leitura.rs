use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use crate::models::RegistroBruto;

use super::io::{celula_para_data, celula_para_numero, celula_para_texto, normalizar_cabecalho};

/// Colunas obrigatórias da planilha bruta (nomes normalizados).
/// A coluna de numeração "Seq." é ignorada por não ser selecionada.
const COLUNAS: [&str; 11] = [
    "sexo",
    "dt_nascimento",
    "forma_ingresso",
    "periodo_ingresso",
    "forma_evasao",
    "dt_evasao",
    "periodo_evasao",
    "cra",
    "bairro",
    "cidade",
    "estado",
];

/// Lê a planilha bruta de alunos e devolve um registro por linha.
///
/// A primeira linha é tratada como cabeçalho; a correspondência de colunas é
/// feita pelo nome normalizado (minúsculas, sem espaços nem pontos). Linhas
/// sem CRA legível são descartadas com aviso no log; coluna obrigatória
/// ausente é erro.
pub fn ler_planilha(caminho: &Path) -> Result<Vec<RegistroBruto>, Box<dyn Error>> {
    if !caminho.exists() {
        return Err(format!("planilha não encontrada: {}", caminho.display()).into());
    }

    let mut workbook = open_workbook_auto(caminho)?;
    let nomes = workbook.sheet_names().to_owned();
    let primeira = nomes
        .first()
        .cloned()
        .ok_or_else(|| format!("planilha sem abas: {}", caminho.display()))?;

    let intervalo = workbook.worksheet_range(&primeira)?;
    let mut linhas = intervalo.rows();

    let cabecalho = linhas
        .next()
        .ok_or_else(|| format!("aba '{}' vazia em {}", primeira, caminho.display()))?;
    let indices = mapear_colunas(cabecalho)?;

    let mut registros = Vec::new();
    let mut descartadas = 0usize;
    for (num, linha) in linhas.enumerate() {
        // Linhas totalmente vazias aparecem no fim de planilhas exportadas
        if linha.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let texto = |nome: &str| celula_para_texto(&linha[indices[nome]]);
        let data = |nome: &str| celula_para_data(&linha[indices[nome]]);

        let cra = match celula_para_numero(&linha[indices["cra"]]) {
            Some(v) => v,
            None => {
                log::warn!("linha {}: CRA ilegível, registro descartado", num + 2);
                descartadas += 1;
                continue;
            }
        };

        registros.push(RegistroBruto {
            sexo: texto("sexo"),
            dt_nascimento: data("dt_nascimento"),
            forma_ingresso: texto("forma_ingresso"),
            periodo_ingresso: texto("periodo_ingresso"),
            forma_evasao: texto("forma_evasao"),
            dt_evasao: data("dt_evasao"),
            periodo_evasao: texto("periodo_evasao"),
            cra,
            bairro: texto("bairro"),
            cidade: texto("cidade"),
            estado: texto("estado"),
        });
    }

    log::info!(
        "planilha {}: {} registros lidos, {} descartados",
        caminho.display(),
        registros.len(),
        descartadas
    );
    Ok(registros)
}

/// Resolve o índice de cada coluna obrigatória no cabeçalho.
fn mapear_colunas(cabecalho: &[Data]) -> Result<HashMap<String, usize>, Box<dyn Error>> {
    let mut indices = HashMap::new();
    for (i, celula) in cabecalho.iter().enumerate() {
        let nome = normalizar_cabecalho(&celula_para_texto(celula));
        if !nome.is_empty() {
            indices.entry(nome).or_insert(i);
        }
    }

    for coluna in COLUNAS {
        if !indices.contains_key(coluna) {
            return Err(format!("coluna obrigatória ausente na planilha: {}", coluna).into());
        }
    }
    Ok(indices)
}
