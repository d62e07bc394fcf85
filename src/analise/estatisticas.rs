use std::collections::HashMap;

/// Estatísticas descritivas de uma série numérica.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumoEstatistico {
    pub minimo: f64,
    pub maximo: f64,
    pub media: f64,
    pub mediana: f64,
    pub desvio_padrao: f64,
    pub moda: f64,
}

/// Calcula o resumo descritivo; `None` para séries vazias.
pub fn resumo(valores: &[f64]) -> Option<ResumoEstatistico> {
    if valores.is_empty() {
        return None;
    }
    Some(ResumoEstatistico {
        minimo: valores.iter().cloned().fold(f64::INFINITY, f64::min),
        maximo: valores.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        media: media(valores).unwrap_or(0.0),
        mediana: mediana(valores).unwrap_or(0.0),
        desvio_padrao: desvio_padrao(valores).unwrap_or(0.0),
        moda: moda(valores).unwrap_or(0.0),
    })
}

pub fn media(valores: &[f64]) -> Option<f64> {
    if valores.is_empty() {
        return None;
    }
    Some(valores.iter().sum::<f64>() / valores.len() as f64)
}

pub fn mediana(valores: &[f64]) -> Option<f64> {
    if valores.is_empty() {
        return None;
    }
    let mut ordenados = valores.to_vec();
    ordenados.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let meio = ordenados.len() / 2;
    if ordenados.len() % 2 == 0 {
        Some((ordenados[meio - 1] + ordenados[meio]) / 2.0)
    } else {
        Some(ordenados[meio])
    }
}

/// Desvio padrão amostral (n - 1).
pub fn desvio_padrao(valores: &[f64]) -> Option<f64> {
    if valores.len() < 2 {
        return None;
    }
    let m = media(valores)?;
    let soma_quadrados: f64 = valores.iter().map(|v| (v - m).powi(2)).sum();
    Some((soma_quadrados / (valores.len() - 1) as f64).sqrt())
}

/// Valor mais frequente; empate resolve pelo menor valor.
pub fn moda(valores: &[f64]) -> Option<f64> {
    if valores.is_empty() {
        return None;
    }
    let mut ordenados = valores.to_vec();
    ordenados.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut melhor = ordenados[0];
    let mut melhor_contagem = 0usize;
    let mut atual = ordenados[0];
    let mut contagem = 0usize;
    for &v in &ordenados {
        if v == atual {
            contagem += 1;
        } else {
            if contagem > melhor_contagem {
                melhor = atual;
                melhor_contagem = contagem;
            }
            atual = v;
            contagem = 1;
        }
    }
    if contagem > melhor_contagem {
        melhor = atual;
    }
    Some(melhor)
}

/// Tabela de frequência de uma coluna categórica, ordenada da categoria mais
/// comum para a menos comum (desempate alfabético).
pub fn frequencia<I>(valores: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut contagens: HashMap<String, usize> = HashMap::new();
    for valor in valores {
        *contagens.entry(valor).or_default() += 1;
    }
    let mut tabela: Vec<(String, usize)> = contagens.into_iter().collect();
    tabela.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tabela
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resumo_de_serie_simples() {
        let valores = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let r = resumo(&valores).unwrap();
        assert_eq!(r.minimo, 2.0);
        assert_eq!(r.maximo, 9.0);
        assert_eq!(r.media, 5.0);
        assert_eq!(r.mediana, 4.5);
        assert_eq!(r.moda, 4.0);
        // Desvio amostral de [2,4,4,4,5,5,7,9] = sqrt(32/7)
        assert!((r.desvio_padrao - (32.0f64 / 7.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn mediana_de_tamanho_impar() {
        assert_eq!(mediana(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(mediana(&[]), None);
    }

    #[test]
    fn moda_com_empate_pega_o_menor() {
        assert_eq!(moda(&[1.0, 1.0, 2.0, 2.0, 3.0]), Some(1.0));
    }

    #[test]
    fn frequencia_ordena_por_contagem() {
        let tabela = frequencia(vec![
            "F".to_string(),
            "M".to_string(),
            "F".to_string(),
            "F".to_string(),
            "M".to_string(),
        ]);
        assert_eq!(
            tabela,
            vec![("F".to_string(), 3), ("M".to_string(), 2)]
        );
    }
}
