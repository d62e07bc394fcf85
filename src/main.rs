// --- Pipeline de análise de ingresso e evasão - arquivo principal ---

use std::error::Error;
use std::process::ExitCode;

use evastat::analise;
use evastat::distancia::ClienteNominatim;
use evastat::formatacao;
use evastat::server;
use evastat::Config;

fn main() -> ExitCode {
    let _ = dotenv::dotenv();
    env_logger::init();

    let config = Config::from_env();
    let comando = std::env::args().nth(1).unwrap_or_else(|| "tudo".to_string());

    let resultado = match comando.as_str() {
        "formatar" => comando_formatar(&config),
        "analisar" => comando_analisar(&config),
        "servidor" => comando_servidor(config.clone()),
        "tudo" => comando_formatar(&config).and_then(|_| comando_analisar(&config)),
        outro => {
            eprintln!("comando desconhecido: {}", outro);
            eprintln!("uso: evastat [formatar|analisar|servidor|tudo]");
            return ExitCode::from(2);
        }
    };

    match resultado {
        Ok(()) => ExitCode::SUCCESS,
        Err(erro) => {
            eprintln!("Erro: {}", erro);
            ExitCode::FAILURE
        }
    }
}

/// Lê a planilha bruta, formata e grava dfPrincipal.csv + dfDistancias.csv.
fn comando_formatar(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("=== evastat — formatação dos dados ===");
    let geocodificador = ClienteNominatim::novo(&config.nominatim_url, config.geocode_pausa_ms)?;
    formatacao::formatar_dados(config, &geocodificador)?;
    Ok(())
}

/// Roda as análises sobre o CSV formatado e gera os gráficos.
fn comando_analisar(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("=== evastat — análises ===");
    let alunos = formatacao::carregar_principal(&config.caminho_principal())?;
    analise::executar_analises(&alunos, &config.graficos_dir)?;
    Ok(())
}

/// Sobe a API JSON do painel.
fn comando_servidor(config: Config) -> Result<(), Box<dyn Error>> {
    println!("=== evastat — API do painel ===");
    println!("Iniciando servidor em http://{}", config.bind);
    actix_web::rt::System::new().block_on(server::run_server(config))?;
    Ok(())
}
