//! Módulo `analise`: relatórios estatísticos no console e gráficos em PNG.
//!
//! Submódulos:
//! - `estatisticas`: média, mediana, moda, desvio e tabelas de frequência
//! - `graficos`: helpers de plotagem (barras, linhas, histograma, caixa)
//! - `exploratoria`: estatísticas descritivas e distribuições gerais
//! - `ingresso_evasao`: cotistas vs ampla concorrência e situação do aluno
//! - `temporal`: evolução por período de ingresso e coortes
//! - `geografica`: zonas, bairros e distância até o campus
//!
//! Cada gráfico roda isolado: uma falha é registrada no coletor e as demais
//! análises continuam. O resumo das falhas sai no fim da execução.

pub mod estatisticas;
pub mod exploratoria;
pub mod geografica;
pub mod graficos;
pub mod ingresso_evasao;
pub mod temporal;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Aluno;

/// Falha isolada na geração de um gráfico ou relatório.
#[derive(Debug)]
pub struct FalhaGrafico {
    pub nome: String,
    pub erro: String,
}

/// Coletor dos resultados por gráfico: acumula sucessos e falhas em vez de
/// abortar a análise inteira no primeiro erro.
pub struct ColetorGraficos {
    pasta: PathBuf,
    gerados: Vec<String>,
    falhas: Vec<FalhaGrafico>,
}

impl ColetorGraficos {
    pub fn novo(pasta: &Path) -> Result<ColetorGraficos, Box<dyn Error>> {
        fs::create_dir_all(pasta)?;
        Ok(ColetorGraficos {
            pasta: pasta.to_path_buf(),
            gerados: Vec::new(),
            falhas: Vec::new(),
        })
    }

    /// Caminho do PNG de um gráfico dentro da pasta de saída.
    pub fn caminho(&self, nome: &str) -> PathBuf {
        self.pasta.join(format!("{}.png", nome))
    }

    /// Registra o resultado de um gráfico.
    pub fn registrar(&mut self, nome: &str, resultado: Result<(), Box<dyn Error>>) {
        match resultado {
            Ok(()) => {
                log::info!("gráfico {:?} salvo em {}", nome, self.caminho(nome).display());
                self.gerados.push(nome.to_string());
            }
            Err(erro) => {
                log::warn!("gráfico {:?} falhou: {}", nome, erro);
                self.falhas.push(FalhaGrafico {
                    nome: nome.to_string(),
                    erro: erro.to_string(),
                });
            }
        }
    }

    pub fn gerados(&self) -> usize {
        self.gerados.len()
    }

    pub fn falhas(&self) -> &[FalhaGrafico] {
        &self.falhas
    }
}

/// Executa todas as análises sobre o dataset formatado e devolve o coletor
/// com o balanço de gráficos gerados e falhas.
pub fn executar_analises(alunos: &[Aluno], pasta_graficos: &Path) -> Result<ColetorGraficos, Box<dyn Error>> {
    if alunos.is_empty() {
        return Err("nenhum aluno no dataset formatado — nada a analisar".into());
    }

    let mut coletor = ColetorGraficos::novo(pasta_graficos)?;

    exploratoria::executar(alunos, &mut coletor);
    ingresso_evasao::executar(alunos, &mut coletor);
    temporal::executar(alunos, &mut coletor);
    geografica::executar(alunos, &mut coletor);

    println!();
    println!("Gráficos gerados: {}", coletor.gerados());
    if coletor.falhas().is_empty() {
        println!("Nenhuma falha na geração de gráficos.");
    } else {
        println!("Falhas na geração de gráficos:");
        for falha in coletor.falhas() {
            println!("  {}: {}", falha.nome, falha.erro);
        }
    }

    Ok(coletor)
}
