use calamine::Data;
use chrono::NaiveDate;

/// Converte uma célula do calamine para String (células vazias e com erro
/// viram string vazia).
pub fn celula_para_texto(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Converte uma célula numérica. Aceita vírgula decimal ("7,5"), comum nas
/// planilhas exportadas em pt-BR.
pub fn celula_para_numero(c: &Data) -> Option<f64> {
    match c {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

/// Converte uma célula de data. Células datetime do Excel são convertidas
/// direto; texto é aceito em dd/mm/aaaa (dia primeiro) ou ISO.
pub fn celula_para_data(c: &Data) -> Option<NaiveDate> {
    match c {
        Data::DateTime(dt) => dt.as_datetime().map(|d| d.date()),
        Data::DateTimeIso(s) => texto_para_data(s),
        Data::String(s) => texto_para_data(s),
        _ => None,
    }
}

fn texto_para_data(texto: &str) -> Option<NaiveDate> {
    let texto = texto.trim();
    if texto.is_empty() {
        return None;
    }
    // O campo pode trazer hora junto ("14/03/1995 00:00:00")
    let so_data = texto.split_whitespace().next().unwrap_or(texto);
    let so_data = so_data.split('T').next().unwrap_or(so_data);
    NaiveDate::parse_from_str(so_data, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(so_data, "%Y-%m-%d"))
        .ok()
}

/// Normaliza cabeçalhos eliminando espaços e pontos e passando a minúsculas.
pub fn normalizar_cabecalho(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numero_aceita_virgula_decimal() {
        assert_eq!(celula_para_numero(&Data::String("7,5".into())), Some(7.5));
        assert_eq!(celula_para_numero(&Data::Float(8.25)), Some(8.25));
        assert_eq!(celula_para_numero(&Data::String("abc".into())), None);
    }

    #[test]
    fn data_em_texto_dia_primeiro() {
        assert_eq!(
            celula_para_data(&Data::String("14/03/1995".into())),
            NaiveDate::from_ymd_opt(1995, 3, 14)
        );
        assert_eq!(
            celula_para_data(&Data::String("1995-03-14".into())),
            NaiveDate::from_ymd_opt(1995, 3, 14)
        );
        assert_eq!(
            celula_para_data(&Data::String("14/03/1995 00:00:00".into())),
            NaiveDate::from_ymd_opt(1995, 3, 14)
        );
        assert_eq!(celula_para_data(&Data::String("".into())), None);
    }

    #[test]
    fn cabecalho_normalizado() {
        assert_eq!(normalizar_cabecalho("DT_NASCIMENTO"), "dt_nascimento");
        assert_eq!(normalizar_cabecalho("Seq."), "seq");
        assert_eq!(normalizar_cabecalho(" Forma Ingresso "), "formaingresso");
    }
}
