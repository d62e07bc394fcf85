use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Cache de distâncias por bairro, persistido em `dfDistancias.csv`.
///
/// Cada bairro aparece no máximo uma vez; o valor `None` registra uma
/// consulta que falhou (bairro não geocodificável ou erro de serviço), para
/// que execuções futuras não repitam a chamada sem necessidade.
#[derive(Debug, Default)]
pub struct CacheDistancias {
    entradas: HashMap<String, Option<f64>>,
}

impl CacheDistancias {
    /// Carrega o cache do disco. Arquivo inexistente resulta em cache vazio —
    /// primeira execução.
    pub fn carregar(caminho: &Path) -> Result<CacheDistancias, Box<dyn Error>> {
        let mut cache = CacheDistancias::default();
        if !caminho.exists() {
            return Ok(cache);
        }

        let mut leitor = csv::Reader::from_path(caminho)?;
        for resultado in leitor.records() {
            let registro = resultado?;
            let bairro = registro.get(0).unwrap_or("").trim().to_string();
            if bairro.is_empty() {
                continue;
            }
            let distancia = registro
                .get(1)
                .map(str::trim)
                .filter(|campo| !campo.is_empty())
                .and_then(|campo| campo.parse::<f64>().ok());
            cache.entradas.insert(bairro, distancia);
        }
        log::info!("cache de distâncias: {} bairros carregados", cache.entradas.len());
        Ok(cache)
    }

    /// Grava o cache completo (sucessos e falhas) em CSV, ordenado por bairro
    /// para diffs estáveis entre execuções.
    pub fn salvar(&self, caminho: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(pasta) = caminho.parent() {
            fs::create_dir_all(pasta)?;
        }

        let mut bairros: Vec<&String> = self.entradas.keys().collect();
        bairros.sort();

        let mut escritor = csv::Writer::from_path(caminho)?;
        escritor.write_record(["BAIRRO", "DISTANCIA_URCA"])?;
        for bairro in bairros {
            let valor = match self.entradas[bairro] {
                Some(d) => d.to_string(),
                None => String::new(),
            };
            escritor.write_record([bairro.as_str(), valor.as_str()])?;
        }
        escritor.flush()?;
        Ok(())
    }

    /// `Some(Some(d))`: distância conhecida; `Some(None)`: falha registrada;
    /// `None`: bairro nunca consultado.
    pub fn consultar(&self, bairro: &str) -> Option<Option<f64>> {
        self.entradas.get(bairro).copied()
    }

    pub fn registrar(&mut self, bairro: &str, distancia: Option<f64>) {
        self.entradas.insert(bairro.to_string(), distancia);
    }

    /// Bairros com falha registrada, em ordem alfabética.
    pub fn falhas(&self) -> Vec<&str> {
        let mut falhas: Vec<&str> = self
            .entradas
            .iter()
            .filter(|(_, distancia)| distancia.is_none())
            .map(|(bairro, _)| bairro.as_str())
            .collect();
        falhas.sort();
        falhas
    }

    pub fn len(&self) -> usize {
        self.entradas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entradas.is_empty()
    }
}
