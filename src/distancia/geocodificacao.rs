use std::error::Error;
use std::thread;
use std::time::Duration;

use serde::Deserialize;

/// Par latitude/longitude em graus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordenadas {
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolução de endereço em coordenadas. A implementação de produção consulta
/// o Nominatim; os testes injetam uma resolução em memória.
pub trait Geocodificador {
    /// Devolve `Ok(None)` quando o serviço não conhece o endereço e `Err`
    /// para falhas de comunicação.
    fn geocodificar(&self, endereco: &str) -> Result<Option<Coordenadas>, Box<dyn Error>>;
}

/// Cliente do serviço Nominatim (OpenStreetMap) com pausa fixa entre
/// consultas para respeitar o limite de uso da API pública.
pub struct ClienteNominatim {
    http: reqwest::blocking::Client,
    base_url: String,
    pausa: Duration,
}

#[derive(Debug, Deserialize)]
struct RespostaNominatim {
    lat: String,
    lon: String,
}

impl ClienteNominatim {
    pub fn novo(base_url: &str, pausa_ms: u64) -> Result<ClienteNominatim, Box<dyn Error>> {
        let http = reqwest::blocking::Client::builder()
            .user_agent("evastat-geolocalizacao")
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(ClienteNominatim {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            pausa: Duration::from_millis(pausa_ms),
        })
    }
}

impl Geocodificador for ClienteNominatim {
    fn geocodificar(&self, endereco: &str) -> Result<Option<Coordenadas>, Box<dyn Error>> {
        // Evita sobrecarga na API
        thread::sleep(self.pausa);

        let url = format!("{}/search", self.base_url);
        let resposta = self
            .http
            .get(&url)
            .query(&[("q", endereco), ("format", "json"), ("limit", "1")])
            .send()?;

        if !resposta.status().is_success() {
            return Err(format!("Nominatim respondeu {} para {:?}", resposta.status(), endereco).into());
        }

        let resultados: Vec<RespostaNominatim> = resposta.json()?;
        match resultados.first() {
            Some(r) => Ok(Some(Coordenadas {
                latitude: r.lat.parse()?,
                longitude: r.lon.parse()?,
            })),
            None => Ok(None),
        }
    }
}

/// Distância de círculo máximo (haversine) em quilômetros, com duas casas
/// decimais — o mesmo arredondamento aplicado ao cache em disco.
pub fn distancia_km(a: Coordenadas, b: Coordenadas) -> f64 {
    const RAIO_TERRA_KM: f64 = 6371.0088;

    let (lat_a, lon_a) = (a.latitude.to_radians(), a.longitude.to_radians());
    let (lat_b, lon_b) = (b.latitude.to_radians(), b.longitude.to_radians());
    let dlat = lat_b - lat_a;
    let dlon = lon_b - lon_a;

    let h = (dlat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (dlon / 2.0).sin().powi(2);
    let km = 2.0 * RAIO_TERRA_KM * h.sqrt().asin();
    (km * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distancia_zero_para_o_mesmo_ponto() {
        let urca = Coordenadas { latitude: -22.9477, longitude: -43.1658 };
        assert_eq!(distancia_km(urca, urca), 0.0);
    }

    #[test]
    fn distancia_urca_campo_grande() {
        let urca = Coordenadas { latitude: -22.9477, longitude: -43.1658 };
        let campo_grande = Coordenadas { latitude: -22.9035, longitude: -43.5591 };
        let d = distancia_km(urca, campo_grande);
        // ~40 km em linha reta
        assert!(d > 38.0 && d < 43.0, "distância fora do esperado: {}", d);
    }
}
