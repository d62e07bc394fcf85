use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fs;

use chrono::NaiveDate;
use evastat::distancia::{
    preencher_distancias, CacheDistancias, Coordenadas, Geocodificador, ENDERECO_URCA,
};
use evastat::formatacao::{formatar_registros, OpcoesFormatacao};
use evastat::models::{Aluno, RegistroBruto};

/// Geocodificador em memória que registra cada consulta feita.
struct GeocodificadorFixo {
    chamadas: RefCell<Vec<String>>,
    respostas: HashMap<String, Option<Coordenadas>>,
}

impl GeocodificadorFixo {
    fn novo() -> GeocodificadorFixo {
        let mut respostas = HashMap::new();
        respostas.insert(
            ENDERECO_URCA.to_string(),
            Some(Coordenadas { latitude: -22.9477, longitude: -43.1658 }),
        );
        respostas.insert(
            "flamengo, Rio de Janeiro, Rio de Janeiro".to_string(),
            Some(Coordenadas { latitude: -22.9330, longitude: -43.1760 }),
        );
        GeocodificadorFixo { chamadas: RefCell::new(Vec::new()), respostas }
    }

    fn consultas(&self) -> usize {
        self.chamadas.borrow().len()
    }
}

impl Geocodificador for GeocodificadorFixo {
    fn geocodificar(&self, endereco: &str) -> Result<Option<Coordenadas>, Box<dyn Error>> {
        self.chamadas.borrow_mut().push(endereco.to_string());
        match self.respostas.get(endereco) {
            Some(resposta) => Ok(*resposta),
            None => Err("serviço indisponível".into()),
        }
    }
}

fn alunos_com_bairros(bairros: &[&str]) -> Vec<Aluno> {
    let registros: Vec<RegistroBruto> = bairros
        .iter()
        .map(|bairro| RegistroBruto {
            sexo: "M".to_string(),
            dt_nascimento: NaiveDate::from_ymd_opt(1995, 5, 20),
            forma_ingresso: "EN - ENEM".to_string(),
            periodo_ingresso: "2015/1".to_string(),
            forma_evasao: "Sem evasão".to_string(),
            dt_evasao: None,
            periodo_evasao: String::new(),
            cra: 6.0,
            bairro: bairro.to_string(),
            cidade: "Rio de Janeiro".to_string(),
            estado: "Rio de Janeiro".to_string(),
        })
        .collect();
    formatar_registros(
        registros,
        &OpcoesFormatacao { incluir_outros: true, manter_anteriores_2014: true },
    )
}

#[test]
fn cache_evita_segunda_consulta_ao_servico() {
    let geo = GeocodificadorFixo::novo();
    let mut cache = CacheDistancias::default();

    let mut alunos = alunos_com_bairros(&["Flamengo", "Flamengo"]);
    preencher_distancias(&mut alunos, &mut cache, &geo, false);

    // Uma consulta para a referência (Urca) e uma para o bairro
    assert_eq!(geo.consultas(), 2);
    let distancia = alunos[0].distancia_urca.expect("distância calculada");
    assert!(distancia > 0.0 && distancia < 10.0, "distância: {}", distancia);
    assert_eq!(alunos[0].distancia_urca, alunos[1].distancia_urca);

    // Segunda execução: tudo vem do cache, nenhuma chamada nova
    let mut alunos2 = alunos_com_bairros(&["Flamengo"]);
    preencher_distancias(&mut alunos2, &mut cache, &geo, false);
    assert_eq!(geo.consultas(), 2, "bairro em cache não deve ser reconsultado");
    assert_eq!(alunos2[0].distancia_urca, Some(distancia));
}

#[test]
fn urca_tem_distancia_zero_sem_consulta() {
    let geo = GeocodificadorFixo::novo();
    let mut cache = CacheDistancias::default();

    let mut alunos = alunos_com_bairros(&["Urca"]);
    preencher_distancias(&mut alunos, &mut cache, &geo, false);

    assert_eq!(alunos[0].distancia_urca, Some(0.0));
    assert_eq!(geo.consultas(), 0, "o próprio campus não precisa de geocodificação");
}

#[test]
fn falha_registrada_nao_interrompe_os_demais() {
    let geo = GeocodificadorFixo::novo();
    let mut cache = CacheDistancias::default();

    // "bairro fantasma" não está nas respostas e gera erro de serviço
    let mut alunos = alunos_com_bairros(&["Bairro Fantasma", "Flamengo"]);
    preencher_distancias(&mut alunos, &mut cache, &geo, false);

    assert_eq!(alunos[0].distancia_urca, None);
    assert!(alunos[1].distancia_urca.is_some(), "a falha de um bairro não derruba o outro");
    assert_eq!(cache.falhas(), vec!["bairro fantasma"]);
}

#[test]
fn falhas_so_sao_retentadas_quando_configurado() {
    let geo = GeocodificadorFixo::novo();
    let mut cache = CacheDistancias::default();
    cache.registrar("bairro fantasma", None);

    let mut alunos = alunos_com_bairros(&["Bairro Fantasma"]);
    preencher_distancias(&mut alunos, &mut cache, &geo, false);
    assert_eq!(geo.consultas(), 0, "falha antiga não é retentada por padrão");

    preencher_distancias(&mut alunos, &mut cache, &geo, true);
    // Com retentar_falhas liga a referência e o bairro são consultados
    assert_eq!(geo.consultas(), 2);
}

#[test]
fn cache_persiste_sucessos_e_falhas() {
    let pasta = std::env::temp_dir().join(format!("evastat_teste_{}", std::process::id()));
    fs::create_dir_all(&pasta).expect("pasta temporária");
    let caminho = pasta.join("dfDistancias.csv");

    let mut cache = CacheDistancias::default();
    cache.registrar("flamengo", Some(3.42));
    cache.registrar("bairro fantasma", None);
    cache.salvar(&caminho).expect("salvar cache");

    let relido = CacheDistancias::carregar(&caminho).expect("carregar cache");
    assert_eq!(relido.len(), 2);
    assert_eq!(relido.consultar("flamengo"), Some(Some(3.42)));
    assert_eq!(relido.consultar("bairro fantasma"), Some(None));
    assert_eq!(relido.consultar("inexistente"), None);

    let _ = fs::remove_dir_all(&pasta);
}
