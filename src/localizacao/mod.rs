//! Módulo `localizacao`: normalização de nomes de bairro/cidade, correção de
//! grafias, inferência de cidade/estado e agrupamento por zona geográfica.
//!
//! Submódulos:
//! - `zonas`: listas estáticas de bairros e municípios por zona/região

pub mod zonas;

use zonas::{REGIOES_POR_CIDADE, ZONAS_POR_BAIRRO};

/// Similaridade mínima (Jaro-Winkler) para aceitar uma correção aproximada
/// quando o nome não bate com nenhuma grafia conhecida.
const LIMIAR_FUZZY: f64 = 0.93;

/// Zona atribuída a alunos de fora do estado.
pub const ZONA_OUTRO_ESTADO: &str = "Outro Estado";
/// Zona atribuída quando bairro e cidade não resolvem.
pub const ZONA_OUTROS: &str = "Outros";

/// Grafias canônicas de bairro e as variantes erradas vistas nas planilhas.
const CORRECOES_BAIRROS: &[(&str, &[&str])] = &[
    ("abolição", &["vila abolicao"]),
    ("alto da boa vista", &["alto"]),
    ("andaraí", &["andarai"]),
    ("barra da tijuca", &["barra"]),
    ("bancários", &["bancarios"]),
    ("bonsucesso", &["bonsuceso"]),
    ("brás de pina", &["bras de pina", "braz de pina"]),
    ("cachambi", &["cachambí"]),
    ("coelho neto", &["coelho"]),
    ("colégio", &["colegio"]),
    ("cosme velho", &["cosme velh"]),
    (
        "freguesia",
        &[
            "freguesia (jacarepagua)",
            "freguesia-jacarepagua",
            "freguesia/jacarepaguá",
            "freguesia  jacarepaguá",
        ],
    ),
    ("gardênia azul", &["gardenia azul"]),
    ("grajaú", &["graiau", "grajau"]),
    ("higienopolis", &["higianopolis"]),
    ("humaitá", &["humaita"]),
    ("inhaúma", &["inhaaoma", "inhaúma", "inhauma"]),
    ("iraja", &["iraja!"]),
    ("itapeba", &["itopeba"]),
    ("jacaré", &["jacare"]),
    ("jardim boa esperanca", &["jadim boa esperanca"]),
    ("jardim botanico", &["setor habitacional jardim botanico (lago sul)"]),
    ("jardim gramacho", &["gramacho"]),
    (
        "jardim guanabara",
        &["jardim guanabara/ilha do governador", "jardim guanabara / ilha do governador"],
    ),
    ("jardim olavo bilac", &["jardim olavo"]),
    ("laranjeiras", &["laranjeira", "laranjeirass"]),
    ("marechal hermes", &["marcahl hermes"]),
    ("maracana", &["maracanaps"]),
    ("pechincha", &["pechincha / jacarepagua"]),
    ("praça seca", &["praassa seca", "praca seca"]),
    (
        "praça da bandeira",
        &["praassa da bandeira", "pca da bandeira", "praca da bandeira"],
    ),
    ("quintino bocaiuva", &["quintino"]),
    ("recreio dos bandeirantes", &["recreio"]),
    ("santa teresa", &["santa tereza"]),
    ("santa teresinha", &["santa terezinha"]),
    ("sauaçu", &["sauassu"]),
    ("sao conrado", &["sao corrado"]),
    ("sao francisco xavier", &["sapso francisco xavier"]),
    ("tanque", &["tanque-jacarepagua", "tanque - jacarepaguá"]),
    ("taquara", &["taquara-jacarepagua"]),
    ("vila brasil", &["vila brasil (manilha)"]),
    (
        "vila inhomirim",
        &["vila carvalho (vila inhomirim)", "parque maita (vila inhomirim)"],
    ),
    ("vila isabel", &["vila isabe", "vila isabell"]),
    ("vila nova", &["vila nova (surui)"]),
    ("cocotá", &["cocota"]),
];

/// Grafias canônicas de cidade e as variantes erradas vistas nas planilhas.
const CORRECOES_CIDADES: &[(&str, &[&str])] = &[
    ("Rio de Janeiro", &["rio de janero", "rio d janeiro"]),
    ("Niterói", &["niteroi"]),
    ("Maricá", &["marica"]),
    ("Vitória", &["vitoria"]),
    ("Belo Horizonte", &["belo horizonte mg"]),
    ("Brasília", &["brasilia"]),
];

/// Bairros que permitem inferir cidade/estado quando a planilha traz
/// "Desconhecido" nesses campos.
const BAIRROS_COM_CIDADE: &[(&str, &[&str])] = &[
    (
        "Rio de Janeiro",
        &[
            "tijuca", "jardim botanico", "santa teresa", "leme", "copacabana", "meier",
            "vila da penha", "botafogo", "icarai", "laranjeiras", "catete", "rocinha", "olaria",
            "flamengo", "madureira", "urca", "rocha",
        ],
    ),
    ("Duque de Caxias", &["jardim olavo bilac", "gramacho"]),
    (
        "Ilha do Governador",
        &["jardim guanabara", "cocaia", "freguesia (ilha do governador)"],
    ),
];

/// Normaliza um nome: minúsculas, sem acentos, espaços internos colapsados.
pub fn normalizar(texto: &str) -> String {
    let mut saida = String::with_capacity(texto.len());
    let mut espaco_anterior = true;
    for c in texto.trim().to_lowercase().chars() {
        let c = remover_acento(c);
        if c.is_whitespace() {
            if !espaco_anterior {
                saida.push(' ');
            }
            espaco_anterior = true;
        } else {
            saida.push(c);
            espaco_anterior = false;
        }
    }
    saida.trim_end().to_string()
}

fn remover_acento(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        outro => outro,
    }
}

/// Corrige a grafia de um bairro, devolvendo a forma canônica em minúsculas.
///
/// A busca é: grafia canônica → variante conhecida → aproximação
/// Jaro-Winkler contra as canônicas (para erros de digitação não catalogados).
pub fn corrigir_bairro(bairro: &str) -> String {
    corrigir(bairro, CORRECOES_BAIRROS)
}

/// Corrige a grafia de uma cidade, devolvendo a forma canônica.
pub fn corrigir_cidade(cidade: &str) -> String {
    // As canônicas de cidade preservam maiúsculas; a comparação é normalizada
    let norma = normalizar(cidade);
    for (canonico, _) in CORRECOES_CIDADES {
        if normalizar(canonico) == norma {
            return (*canonico).to_string();
        }
    }
    for (canonico, variantes) in CORRECOES_CIDADES {
        if variantes.iter().any(|v| normalizar(v) == norma) {
            return (*canonico).to_string();
        }
    }
    for (canonico, _) in CORRECOES_CIDADES {
        if strsim::jaro_winkler(&normalizar(canonico), &norma) >= LIMIAR_FUZZY {
            log::debug!("cidade {:?} corrigida por aproximação para {:?}", cidade, canonico);
            return (*canonico).to_string();
        }
    }
    cidade.trim().to_string()
}

fn corrigir(nome: &str, correcoes: &[(&str, &[&str])]) -> String {
    let norma = normalizar(nome);
    for (canonico, _) in correcoes {
        if normalizar(canonico) == norma {
            return (*canonico).to_string();
        }
    }
    for (canonico, variantes) in correcoes {
        if variantes.iter().any(|v| normalizar(v) == norma) {
            return (*canonico).to_string();
        }
    }
    for (canonico, _) in correcoes {
        if strsim::jaro_winkler(&normalizar(canonico), &norma) >= LIMIAR_FUZZY {
            log::debug!("bairro {:?} corrigido por aproximação para {:?}", nome, canonico);
            return (*canonico).to_string();
        }
    }
    norma
}

/// Infere cidade/estado a partir do bairro quando os campos vieram como
/// "Desconhecido". Devolve `Some((cidade, estado))` quando há inferência.
pub fn inferir_cidade_estado(bairro: &str) -> Option<(&'static str, &'static str)> {
    let norma = normalizar(bairro);
    for (cidade, bairros) in BAIRROS_COM_CIDADE {
        if bairros.iter().any(|b| normalizar(b) == norma) {
            return Some((cidade, "Rio de Janeiro"));
        }
    }
    None
}

/// Agrupa o endereço em uma zona geográfica.
///
/// Fora do estado do Rio → "Outro Estado"; bairro conhecido → zona do bairro;
/// cidade conhecida → região da cidade; caso contrário → "Outros".
pub fn zona_do_local(bairro: &str, cidade: &str, estado: &str) -> String {
    if normalizar(estado) != "rio de janeiro" {
        return ZONA_OUTRO_ESTADO.to_string();
    }

    let bairro_norma = normalizar(bairro);
    for (zona, bairros) in ZONAS_POR_BAIRRO {
        if bairros.iter().any(|b| normalizar(b) == bairro_norma) {
            return (*zona).to_string();
        }
    }

    let cidade_norma = normalizar(cidade);
    for (regiao, cidades) in REGIOES_POR_CIDADE {
        if cidades.iter().any(|c| normalizar(c) == cidade_norma) {
            return (*regiao).to_string();
        }
    }

    ZONA_OUTROS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizacao_remove_acentos_e_espacos() {
        assert_eq!(normalizar("  São   Gonçalo "), "sao goncalo");
        assert_eq!(normalizar("URCA"), "urca");
        assert_eq!(normalizar("Méier"), "meier");
    }

    #[test]
    fn correcao_de_bairro_por_variante() {
        assert_eq!(corrigir_bairro("grajau"), "grajaú");
        assert_eq!(corrigir_bairro("Santa Tereza"), "santa teresa");
        assert_eq!(corrigir_bairro("recreio"), "recreio dos bandeirantes");
        // Grafia já canônica permanece
        assert_eq!(corrigir_bairro("Urca"), "urca");
        // Desconhecida sem aproximação plausível só é normalizada
        assert_eq!(corrigir_bairro("Bairro Inexistente XYZ"), "bairro inexistente xyz");
    }

    #[test]
    fn correcao_de_cidade() {
        assert_eq!(corrigir_cidade("NITEROI"), "Niterói");
        assert_eq!(corrigir_cidade("rio de janero"), "Rio de Janeiro");
        assert_eq!(corrigir_cidade("Petrópolis"), "Petrópolis");
    }

    #[test]
    fn inferencia_de_cidade_pelo_bairro() {
        assert_eq!(inferir_cidade_estado("Urca"), Some(("Rio de Janeiro", "Rio de Janeiro")));
        assert_eq!(inferir_cidade_estado("Gramacho"), Some(("Duque de Caxias", "Rio de Janeiro")));
        assert_eq!(inferir_cidade_estado("bairro qualquer"), None);
    }

    #[test]
    fn zona_por_bairro_cidade_e_estado() {
        assert_eq!(zona_do_local("Urca", "Rio de Janeiro", "Rio de Janeiro"), "Zona Sul");
        assert_eq!(zona_do_local("Tijuca", "Rio de Janeiro", "Rio de Janeiro"), "Zona Norte");
        assert_eq!(
            zona_do_local("Centro", "Duque de Caxias", "Rio de Janeiro"),
            "Centro"
        );
        assert_eq!(
            zona_do_local("bairro qualquer", "Niterói", "Rio de Janeiro"),
            "Niterói/São Gonçalo"
        );
        assert_eq!(
            zona_do_local("Centro", "São Paulo", "São Paulo"),
            ZONA_OUTRO_ESTADO
        );
        assert_eq!(
            zona_do_local("bairro qualquer", "cidade qualquer", "Rio de Janeiro"),
            ZONA_OUTROS
        );
    }
}
