//! Módulo `formatacao`: pipeline de limpeza, classificação e enriquecimento
//! dos registros da planilha.
//!
//! Submódulos:
//! - `classificacao`: forma de ingresso simplificada, status de evasão, CRA
//! - `temporal`: idade no ingresso e tempo de curso
//!
//! O orquestrador `formatar_dados` encadeia leitura, formatação, cálculo de
//! distâncias e persistência dos CSVs processados.

pub mod classificacao;
pub mod temporal;

pub use classificacao::{arredondar_cra, classificar_forma_evasao, classificar_forma_ingresso};
pub use temporal::{idade_no_ingresso, tempo_de_curso};

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::distancia::{self, cache::CacheDistancias, geocodificacao::Geocodificador};
use crate::localizacao;
use crate::models::{Aluno, FormaIngresso, PeriodoLetivo, RegistroBruto};
use crate::planilha;

/// Valor usado nas colunas de endereço quando a planilha não informa nada.
pub const DESCONHECIDO: &str = "Desconhecido";

/// Opções da formatação (os dois recortes configuráveis do dataset).
#[derive(Debug, Clone, Copy)]
pub struct OpcoesFormatacao {
    /// Manter alunos cuja forma de ingresso classifica como "Outros"
    pub incluir_outros: bool,
    /// Manter alunos que ingressaram antes de 2014
    pub manter_anteriores_2014: bool,
}

impl From<&Config> for OpcoesFormatacao {
    fn from(config: &Config) -> OpcoesFormatacao {
        OpcoesFormatacao {
            incluir_outros: config.incluir_outros,
            manter_anteriores_2014: config.manter_anteriores_2014,
        }
    }
}

/// Pipeline completo: lê a planilha bruta, formata, calcula as distâncias
/// (com cache em disco) e grava `dfPrincipal.csv` e `dfDistancias.csv`.
pub fn formatar_dados(
    config: &Config,
    geocodificador: &dyn Geocodificador,
) -> Result<Vec<Aluno>, Box<dyn Error>> {
    let registros = planilha::ler_planilha(&config.planilha)?;
    let total_original = registros.len();

    let mut alunos = formatar_registros(registros, &OpcoesFormatacao::from(config));

    fs::create_dir_all(&config.dados_dir)?;

    let caminho_cache = config.caminho_distancias();
    let mut cache = CacheDistancias::carregar(&caminho_cache)?;
    distancia::preencher_distancias(&mut alunos, &mut cache, geocodificador, config.retentar_falhas);
    cache.salvar(&caminho_cache)?;

    salvar_principal(&alunos, &config.caminho_principal())?;

    println!("Total de alunos no dataset original: {}", total_original);
    println!("Total de alunos após a formatação: {}", alunos.len());
    println!(
        "Total de registros descartados no geral: {}",
        total_original - alunos.len()
    );
    println!("DataFrame formatado, classificado e salvo com sucesso!");

    Ok(alunos)
}

/// Formata os registros brutos em alunos enriquecidos, sem tocar em disco ou
/// rede (a distância fica ausente; ver [`distancia::preencher_distancias`]).
pub fn formatar_registros(registros: Vec<RegistroBruto>, opcoes: &OpcoesFormatacao) -> Vec<Aluno> {
    let mut alunos: Vec<Aluno> = registros.into_iter().map(formatar_registro).collect();

    if !opcoes.incluir_outros {
        alunos.retain(|a| a.forma_ingresso_simples != FormaIngresso::Outros);
    }
    if !opcoes.manter_anteriores_2014 {
        // Sem ano de ingresso legível o registro também sai do recorte
        alunos.retain(|a| a.ano_ingresso.is_some_and(|ano| ano >= 2014));
    }

    alunos
}

fn formatar_registro(registro: RegistroBruto) -> Aluno {
    let periodo_ingresso = PeriodoLetivo::interpretar(&registro.periodo_ingresso);
    let periodo_evasao = PeriodoLetivo::interpretar(&registro.periodo_evasao);

    // Endereço: preencher ausentes, corrigir grafia, inferir cidade/estado
    let mut bairro = registro.bairro.trim().to_string();
    if bairro.is_empty() {
        bairro = DESCONHECIDO.to_string();
    }
    let bairro = localizacao::corrigir_bairro(&bairro);

    let mut cidade = registro.cidade.trim().to_string();
    if cidade.is_empty() {
        cidade = DESCONHECIDO.to_string();
    }
    let mut cidade = localizacao::corrigir_cidade(&cidade);

    let mut estado = registro.estado.trim().to_string();
    if estado.is_empty() {
        estado = DESCONHECIDO.to_string();
    }

    if cidade == DESCONHECIDO || estado == DESCONHECIDO {
        if let Some((cidade_inferida, estado_inferido)) = localizacao::inferir_cidade_estado(&bairro) {
            cidade = cidade_inferida.to_string();
            estado = estado_inferido.to_string();
        }
    }

    let zona = localizacao::zona_do_local(&bairro, &cidade, &estado);

    Aluno {
        sexo: registro.sexo.trim().to_string(),
        dt_nascimento: registro.dt_nascimento,
        forma_ingresso_simples: classificar_forma_ingresso(&registro.forma_ingresso),
        forma_ingresso: registro.forma_ingresso,
        status_evasao: classificar_forma_evasao(&registro.forma_evasao),
        forma_evasao_detalhada: registro.forma_evasao,
        dt_evasao: registro.dt_evasao,
        periodo_ingresso_formatado: periodo_ingresso
            .map(|p| p.formatado())
            .unwrap_or_else(|| "0.0".to_string()),
        ano_ingresso: periodo_ingresso.map(|p| p.ano),
        semestre_ingresso: periodo_ingresso.map(|p| p.semestre),
        periodo_evasao_formatado: periodo_evasao.map(|p| p.formatado()).unwrap_or_default(),
        ano_evasao: periodo_evasao.map(|p| p.ano),
        semestre_evasao: periodo_evasao.map(|p| p.semestre),
        cra: registro.cra,
        cra_arredondado: arredondar_cra(registro.cra),
        idade_ingresso: idade_no_ingresso(registro.dt_nascimento, periodo_ingresso),
        tempo_curso: tempo_de_curso(periodo_ingresso, periodo_evasao),
        bairro,
        cidade,
        estado,
        zona,
        distancia_urca: None,
    }
}

/// Grava o CSV principal formatado.
pub fn salvar_principal(alunos: &[Aluno], caminho: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(pasta) = caminho.parent() {
        fs::create_dir_all(pasta)?;
    }
    let mut escritor = csv::Writer::from_path(caminho)?;
    for aluno in alunos {
        escritor.serialize(aluno)?;
    }
    escritor.flush()?;
    log::info!("{} registros gravados em {}", alunos.len(), caminho.display());
    Ok(())
}

/// Carrega o CSV principal formatado (gerado por uma execução anterior).
pub fn carregar_principal(caminho: &Path) -> Result<Vec<Aluno>, Box<dyn Error>> {
    if !caminho.exists() {
        return Err(format!(
            "dados formatados não encontrados em {} — rode o comando `formatar` antes",
            caminho.display()
        )
        .into());
    }
    let mut leitor = csv::Reader::from_path(caminho)?;
    let mut alunos = Vec::new();
    for resultado in leitor.deserialize() {
        let aluno: Aluno = resultado?;
        alunos.push(aluno);
    }
    Ok(alunos)
}
