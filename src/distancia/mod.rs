//! Módulo `distancia`: distância em km de cada bairro até a Urca (campus),
//! com memoização em disco.
//!
//! Submódulos:
//! - `geocodificacao`: trait `Geocodificador`, cliente Nominatim e haversine
//! - `cache`: cache de distâncias por bairro persistido em CSV
//!
//! Cada bairro único é geocodificado no máximo uma vez entre execuções;
//! consultas são sequenciais, com pausa fixa entre chamadas. Uma falha em um
//! bairro é registrada e não interrompe os demais.

pub mod cache;
pub mod geocodificacao;

pub use cache::CacheDistancias;
pub use geocodificacao::{distancia_km, ClienteNominatim, Coordenadas, Geocodificador};

use std::collections::BTreeMap;

use crate::localizacao::normalizar;
use crate::models::Aluno;

/// Endereço de referência do campus.
pub const ENDERECO_URCA: &str = "Urca, Rio de Janeiro, Rio de Janeiro";

/// Preenche `DISTANCIA_URCA` em todos os alunos, consultando o serviço de
/// geocodificação apenas para bairros fora do cache.
///
/// Política de falhas: bairros com falha registrada em execução anterior são
/// pulados, a menos que `retentar_falhas` esteja ligado; sucessos nunca são
/// reconsultados. Se a própria referência (Urca) não puder ser geocodificada,
/// nenhum bairro novo é resolvido nesta execução — os valores já em cache
/// continuam valendo.
pub fn preencher_distancias(
    alunos: &mut [Aluno],
    cache: &mut CacheDistancias,
    geocodificador: &dyn Geocodificador,
    retentar_falhas: bool,
) {
    // Bairros únicos (normalizados) com uma cidade/estado representativa,
    // em ordem estável para o log fazer sentido entre execuções
    let mut pendentes: BTreeMap<String, (String, String)> = BTreeMap::new();
    for aluno in alunos.iter() {
        let bairro = normalizar(&aluno.bairro);
        if bairro.is_empty() || bairro == "desconhecido" {
            continue;
        }
        pendentes
            .entry(bairro)
            .or_insert_with(|| (aluno.cidade.clone(), aluno.estado.clone()));
    }

    // A referência só é necessária se houver algo novo a consultar
    let precisa_consultar = pendentes.iter().any(|(bairro, _)| match cache.consultar(bairro) {
        Some(Some(_)) => false,
        Some(None) => retentar_falhas && bairro != "urca",
        None => bairro != "urca",
    });

    let referencia = if precisa_consultar {
        match geocodificador.geocodificar(ENDERECO_URCA) {
            Ok(Some(coordenadas)) => Some(coordenadas),
            Ok(None) => {
                log::error!("referência {:?} não encontrada pelo geocodificador", ENDERECO_URCA);
                None
            }
            Err(erro) => {
                log::error!("falha ao geocodificar a referência {:?}: {}", ENDERECO_URCA, erro);
                None
            }
        }
    } else {
        None
    };

    let mut consultas = 0usize;
    let mut falhas = 0usize;
    for (bairro, (cidade, estado)) in &pendentes {
        // O campus fica na própria Urca
        if bairro == "urca" {
            cache.registrar(bairro, Some(0.0));
            continue;
        }

        match cache.consultar(bairro) {
            Some(Some(_)) => continue,
            Some(None) if !retentar_falhas => continue,
            _ => {}
        }

        let Some(referencia) = referencia else { continue };

        let endereco = format!("{}, {}, {}", bairro, cidade, estado);
        consultas += 1;
        log::info!("calculando distância entre Urca e {}...", bairro);
        match geocodificador.geocodificar(&endereco) {
            Ok(Some(coordenadas)) => {
                cache.registrar(bairro, Some(distancia_km(referencia, coordenadas)));
            }
            Ok(None) => {
                log::warn!("bairro {:?} não encontrado pelo geocodificador", bairro);
                cache.registrar(bairro, None);
                falhas += 1;
            }
            Err(erro) => {
                log::warn!("erro ao geolocalizar {:?}: {}", bairro, erro);
                cache.registrar(bairro, None);
                falhas += 1;
            }
        }
    }

    if consultas > 0 {
        log::info!("geocodificação: {} consultas, {} falhas", consultas, falhas);
    }

    // Propagar o cache para os registros
    for aluno in alunos.iter_mut() {
        let bairro = normalizar(&aluno.bairro);
        aluno.distancia_urca = cache.consultar(&bairro).flatten();
    }
}
