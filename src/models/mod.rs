// Estruturas de dados principais do pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Período letivo no formato ano/semestre (ex.: "2014/1" na planilha bruta,
/// "2014.1" após a formatação).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodoLetivo {
    pub ano: i32,
    pub semestre: u8,
}

impl PeriodoLetivo {
    /// Interpreta o texto bruto da planilha ("2014/1", "2015 / 2º"...).
    /// Devolve `None` quando o campo está vazio ou não tem ano/semestre legíveis.
    pub fn interpretar(texto: &str) -> Option<PeriodoLetivo> {
        let texto = texto.trim();
        if texto.is_empty() {
            return None;
        }
        let (ano_txt, semestre_txt) = texto.split_once('/')?;
        let ano: i32 = ano_txt.trim().parse().ok()?;
        // O semestre pode vir com sufixo ("2º"); só os dígitos interessam
        let digitos: String = semestre_txt.chars().filter(|c| c.is_ascii_digit()).collect();
        let semestre: u8 = digitos.parse().ok()?;
        Some(PeriodoLetivo { ano, semestre })
    }

    /// Forma "ano.semestre" usada nas colunas *_FORMATADO e nos gráficos.
    pub fn formatado(&self) -> String {
        format!("{}.{}", self.ano, self.semestre)
    }

    /// Data de referência do período: 1º semestre ancora em janeiro, 2º em julho.
    pub fn data_referencia(&self) -> Option<NaiveDate> {
        let mes = if self.semestre == 1 { 1 } else { 7 };
        NaiveDate::from_ymd_opt(self.ano, mes, 1)
    }
}

/// Situação do aluno derivada da forma de evasão. É sempre exatamente uma
/// das três categorias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusEvasao {
    #[serde(rename = "Evasão")]
    Evasao,
    #[serde(rename = "Concluído")]
    Concluido,
    #[serde(rename = "Cursando")]
    Cursando,
}

impl StatusEvasao {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusEvasao::Evasao => "Evasão",
            StatusEvasao::Concluido => "Concluído",
            StatusEvasao::Cursando => "Cursando",
        }
    }

    pub fn todos() -> [StatusEvasao; 3] {
        [StatusEvasao::Evasao, StatusEvasao::Concluido, StatusEvasao::Cursando]
    }
}

impl std::fmt::Display for StatusEvasao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forma de ingresso simplificada (cotistas vs ampla concorrência).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormaIngresso {
    #[serde(rename = "Cotas")]
    Cotas,
    #[serde(rename = "Ampla Concorrencia")]
    AmplaConcorrencia,
    #[serde(rename = "Outros")]
    Outros,
}

impl FormaIngresso {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormaIngresso::Cotas => "Cotas",
            FormaIngresso::AmplaConcorrencia => "Ampla Concorrencia",
            FormaIngresso::Outros => "Outros",
        }
    }
}

impl std::fmt::Display for FormaIngresso {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coorte temporal do ingresso, usada na comparação entre períodos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coorte {
    AntesCotas,
    Cotas,
    Pandemia,
    PosPandemia,
}

impl Coorte {
    /// Classifica o ano de ingresso em uma das quatro coortes.
    pub fn do_ano(ano: i32) -> Coorte {
        match ano {
            a if a < 2014 => Coorte::AntesCotas,
            2014..=2019 => Coorte::Cotas,
            2020..=2021 => Coorte::Pandemia,
            _ => Coorte::PosPandemia,
        }
    }

    pub fn nome(&self) -> &'static str {
        match self {
            Coorte::AntesCotas => "Antes Cotas",
            Coorte::Cotas => "Cotas 2014-2020",
            Coorte::Pandemia => "Pandemia",
            Coorte::PosPandemia => "Pós Pandemia",
        }
    }

    pub fn todas() -> [Coorte; 4] {
        [
            Coorte::AntesCotas,
            Coorte::Cotas,
            Coorte::Pandemia,
            Coorte::PosPandemia,
        ]
    }
}

/// Linha bruta da planilha de alunos, antes de qualquer limpeza.
#[derive(Debug, Clone, Default)]
pub struct RegistroBruto {
    pub sexo: String,
    pub dt_nascimento: Option<NaiveDate>,
    pub forma_ingresso: String,
    pub periodo_ingresso: String,
    pub forma_evasao: String,
    pub dt_evasao: Option<NaiveDate>,
    pub periodo_evasao: String,
    pub cra: f64,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

/// Registro de matrícula formatado e enriquecido — uma linha do dfPrincipal.csv.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aluno {
    #[serde(rename = "SEXO")]
    pub sexo: String,
    #[serde(rename = "DT_NASCIMENTO", with = "data_opcional")]
    pub dt_nascimento: Option<NaiveDate>,
    #[serde(rename = "FORMA_INGRESSO")]
    pub forma_ingresso: String,
    #[serde(rename = "FORMA_INGRESSO_SIMPLES")]
    pub forma_ingresso_simples: FormaIngresso,
    #[serde(rename = "FORMA_EVASAO_DETALHADA")]
    pub forma_evasao_detalhada: String,
    #[serde(rename = "STATUS_EVASAO")]
    pub status_evasao: StatusEvasao,
    #[serde(rename = "DT_EVASAO", with = "data_opcional")]
    pub dt_evasao: Option<NaiveDate>,
    #[serde(rename = "PERIODO_INGRESSO_FORMATADO")]
    pub periodo_ingresso_formatado: String,
    #[serde(rename = "ANO_INGRESSO")]
    pub ano_ingresso: Option<i32>,
    #[serde(rename = "SEMESTRE_INGRESSO")]
    pub semestre_ingresso: Option<u8>,
    #[serde(rename = "PERIODO_EVASAO_FORMATADO")]
    pub periodo_evasao_formatado: String,
    #[serde(rename = "ANO_EVASAO")]
    pub ano_evasao: Option<i32>,
    #[serde(rename = "SEMESTRE_EVASAO")]
    pub semestre_evasao: Option<u8>,
    #[serde(rename = "CRA")]
    pub cra: f64,
    #[serde(rename = "CRA_ARREDONDADO")]
    pub cra_arredondado: f64,
    #[serde(rename = "IDADE_INGRESSO")]
    pub idade_ingresso: Option<i32>,
    #[serde(rename = "TEMPO_CURSO")]
    pub tempo_curso: Option<f64>,
    #[serde(rename = "BAIRRO")]
    pub bairro: String,
    #[serde(rename = "CIDADE")]
    pub cidade: String,
    #[serde(rename = "ESTADO")]
    pub estado: String,
    #[serde(rename = "ZONA")]
    pub zona: String,
    #[serde(rename = "DISTANCIA_URCA")]
    pub distancia_urca: Option<f64>,
}

impl Aluno {
    /// Período de ingresso reconstruído a partir das colunas ano/semestre.
    pub fn periodo_ingresso(&self) -> Option<PeriodoLetivo> {
        Some(PeriodoLetivo {
            ano: self.ano_ingresso?,
            semestre: self.semestre_ingresso?,
        })
    }

    pub fn periodo_evasao(&self) -> Option<PeriodoLetivo> {
        Some(PeriodoLetivo {
            ano: self.ano_evasao?,
            semestre: self.semestre_evasao?,
        })
    }

    pub fn coorte(&self) -> Option<Coorte> {
        self.ano_ingresso.map(Coorte::do_ano)
    }
}

/// Datas opcionais no CSV: campo vazio representa ausência (o serde padrão do
/// chrono rejeita a string vazia na leitura).
pub mod data_opcional {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMATO: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(valor: &Option<NaiveDate>, ser: S) -> Result<S::Ok, S::Error> {
        match valor {
            Some(data) => ser.serialize_str(&data.format(FORMATO).to_string()),
            None => ser.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<NaiveDate>, D::Error> {
        let texto = String::deserialize(de)?;
        if texto.trim().is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(texto.trim(), FORMATO)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreta_periodo_letivo() {
        assert_eq!(
            PeriodoLetivo::interpretar("2014/1"),
            Some(PeriodoLetivo { ano: 2014, semestre: 1 })
        );
        assert_eq!(
            PeriodoLetivo::interpretar(" 2019 / 2º "),
            Some(PeriodoLetivo { ano: 2019, semestre: 2 })
        );
        assert_eq!(PeriodoLetivo::interpretar(""), None);
        assert_eq!(PeriodoLetivo::interpretar("2014"), None);
    }

    #[test]
    fn periodo_formatado_e_data_referencia() {
        let p = PeriodoLetivo { ano: 2014, semestre: 2 };
        assert_eq!(p.formatado(), "2014.2");
        assert_eq!(p.data_referencia(), NaiveDate::from_ymd_opt(2014, 7, 1));
        let p1 = PeriodoLetivo { ano: 2014, semestre: 1 };
        assert_eq!(p1.data_referencia(), NaiveDate::from_ymd_opt(2014, 1, 1));
    }

    #[test]
    fn coorte_do_ano_de_ingresso() {
        assert_eq!(Coorte::do_ano(2010), Coorte::AntesCotas);
        assert_eq!(Coorte::do_ano(2014), Coorte::Cotas);
        assert_eq!(Coorte::do_ano(2019), Coorte::Cotas);
        assert_eq!(Coorte::do_ano(2020), Coorte::Pandemia);
        assert_eq!(Coorte::do_ano(2022), Coorte::PosPandemia);
    }
}
