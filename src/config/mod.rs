//! Configuração do pipeline via variáveis de ambiente (com suporte a `.env`).
//!
//! Nenhum caminho fica embutido no código: tudo que os scripts originais
//! traziam como constante vira uma chave `EVASTAT_*` com um valor padrão
//! razoável relativo ao diretório de trabalho.

use std::env;
use std::path::PathBuf;

/// Endpoint público do Nominatim (OpenStreetMap).
pub const NOMINATIM_PADRAO: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone)]
pub struct Config {
    /// Planilha bruta de alunos (EVASTAT_PLANILHA)
    pub planilha: PathBuf,
    /// Diretório dos dados processados (EVASTAT_DADOS_DIR)
    pub dados_dir: PathBuf,
    /// Diretório de saída dos gráficos (EVASTAT_GRAFICOS_DIR)
    pub graficos_dir: PathBuf,
    /// Base da API de geocodificação (EVASTAT_NOMINATIM_URL)
    pub nominatim_url: String,
    /// Pausa fixa entre consultas de geocodificação, em ms (EVASTAT_GEOCODE_PAUSA_MS)
    pub geocode_pausa_ms: u64,
    /// Retentar bairros que já falharam em execuções anteriores (EVASTAT_RETENTAR_FALHAS)
    pub retentar_falhas: bool,
    /// Manter alunos classificados como "Outros" (EVASTAT_INCLUIR_OUTROS)
    pub incluir_outros: bool,
    /// Manter alunos que ingressaram antes de 2014 (EVASTAT_ANTERIORES_2014)
    pub manter_anteriores_2014: bool,
    /// Endereço de bind do servidor da API (EVASTAT_BIND)
    pub bind: String,
}

impl Config {
    /// Monta a configuração a partir do ambiente. Chaves ausentes recebem o
    /// valor padrão; valores ilegíveis (ex.: pausa não numérica) também, com
    /// aviso no log.
    pub fn from_env() -> Config {
        Config {
            planilha: PathBuf::from(var_ou(
                "EVASTAT_PLANILHA",
                "dados/bruto/PlanilhaNova.xlsx",
            )),
            dados_dir: PathBuf::from(var_ou("EVASTAT_DADOS_DIR", "dados/processado")),
            graficos_dir: PathBuf::from(var_ou(
                "EVASTAT_GRAFICOS_DIR",
                "dados/processado/graficos",
            )),
            nominatim_url: var_ou("EVASTAT_NOMINATIM_URL", NOMINATIM_PADRAO),
            geocode_pausa_ms: var_numerica("EVASTAT_GEOCODE_PAUSA_MS", 1000),
            retentar_falhas: var_booleana("EVASTAT_RETENTAR_FALHAS", false),
            incluir_outros: var_booleana("EVASTAT_INCLUIR_OUTROS", false),
            manter_anteriores_2014: var_booleana("EVASTAT_ANTERIORES_2014", false),
            bind: var_ou("EVASTAT_BIND", "127.0.0.1:8080"),
        }
    }

    /// Caminho do CSV principal formatado.
    pub fn caminho_principal(&self) -> PathBuf {
        self.dados_dir.join("dfPrincipal.csv")
    }

    /// Caminho do cache de distâncias por bairro.
    pub fn caminho_distancias(&self) -> PathBuf {
        self.dados_dir.join("dfDistancias.csv")
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::from_env()
    }
}

fn var_ou(chave: &str, padrao: &str) -> String {
    match env::var(chave) {
        Ok(valor) if !valor.trim().is_empty() => valor,
        _ => padrao.to_string(),
    }
}

fn var_numerica(chave: &str, padrao: u64) -> u64 {
    match env::var(chave) {
        Ok(valor) => match valor.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                log::warn!("{} ilegível ({:?}), usando {}", chave, valor, padrao);
                padrao
            }
        },
        Err(_) => padrao,
    }
}

fn var_booleana(chave: &str, padrao: bool) -> bool {
    match env::var(chave) {
        Ok(valor) => matches!(valor.trim(), "1" | "true" | "sim"),
        Err(_) => padrao,
    }
}
