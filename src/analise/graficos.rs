//! Helpers de plotagem sobre o backend bitmap do plotters. O conteúdo dos
//! gráficos importa mais que o acabamento; todos compartilham a mesma paleta
//! e dimensão.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

/// Paleta fixa das séries (azul, laranja, verde, vermelho, roxo, marrom).
const PALETA: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

const DIMENSOES: (u32, u32) = (1024, 768);

fn rotulo_segmento(seg: &SegmentValue<usize>, nomes: &[String]) -> String {
    match seg {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            nomes.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

/// Gráfico de barras simples: uma barra por categoria.
pub fn grafico_barras(
    caminho: &Path,
    titulo: &str,
    rotulo_y: &str,
    categorias: &[(String, f64)],
) -> Result<(), Box<dyn Error>> {
    if categorias.is_empty() {
        return Err(format!("sem dados para o gráfico {:?}", titulo).into());
    }

    let raiz = BitMapBackend::new(caminho, DIMENSOES).into_drawing_area();
    raiz.fill(&WHITE)?;

    let maximo = categorias.iter().map(|(_, v)| *v).fold(0.0f64, f64::max);
    let teto = if maximo > 0.0 { maximo * 1.1 } else { 1.0 };
    let nomes: Vec<String> = categorias.iter().map(|(n, _)| n.clone()).collect();

    let mut grafico = ChartBuilder::on(&raiz)
        .caption(titulo, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(90)
        .y_label_area_size(70)
        .build_cartesian_2d((0..categorias.len()).into_segmented(), 0f64..teto)?;

    grafico
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(categorias.len())
        .x_label_formatter(&|seg| rotulo_segmento(seg, &nomes))
        .y_desc(rotulo_y)
        .draw()?;

    grafico.draw_series(
        Histogram::vertical(&grafico)
            .style(PALETA[0].filled())
            .margin(8)
            .data(categorias.iter().enumerate().map(|(i, (_, v))| (i, *v))),
    )?;

    raiz.present()?;
    Ok(())
}

/// Barras agrupadas: uma barra por série dentro de cada grupo, com legenda.
/// Cada série precisa de um valor por grupo.
pub fn grafico_barras_agrupadas(
    caminho: &Path,
    titulo: &str,
    rotulo_y: &str,
    grupos: &[String],
    series: &[(String, Vec<f64>)],
) -> Result<(), Box<dyn Error>> {
    if grupos.is_empty() || series.is_empty() {
        return Err(format!("sem dados para o gráfico {:?}", titulo).into());
    }

    let raiz = BitMapBackend::new(caminho, DIMENSOES).into_drawing_area();
    raiz.fill(&WHITE)?;

    let maximo = series
        .iter()
        .flat_map(|(_, valores)| valores.iter().cloned())
        .fold(0.0f64, f64::max);
    let teto = if maximo > 0.0 { maximo * 1.1 } else { 1.0 };

    let mut grafico = ChartBuilder::on(&raiz)
        .caption(titulo, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(90)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..grupos.len() as f64, 0f64..teto)?;

    grafico
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(grupos.len())
        .x_label_formatter(&|x| {
            let indice = x.floor() as usize;
            grupos.get(indice).cloned().unwrap_or_default()
        })
        .y_desc(rotulo_y)
        .draw()?;

    let largura = 0.8 / series.len() as f64;
    for (j, (nome, valores)) in series.iter().enumerate() {
        let cor = PALETA[j % PALETA.len()];
        grafico
            .draw_series(valores.iter().enumerate().map(|(i, v)| {
                let x0 = i as f64 + 0.1 + j as f64 * largura;
                Rectangle::new([(x0, 0.0), (x0 + largura * 0.9, *v)], cor.filled())
            }))?
            .label(nome.clone())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], cor.filled())
            });
    }

    grafico
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    raiz.present()?;
    Ok(())
}

/// Histograma de uma série numérica em faixas de largura igual.
pub fn histograma(
    caminho: &Path,
    titulo: &str,
    rotulo_x: &str,
    valores: &[f64],
    faixas: usize,
) -> Result<(), Box<dyn Error>> {
    if valores.is_empty() || faixas == 0 {
        return Err(format!("sem dados para o gráfico {:?}", titulo).into());
    }

    let minimo = valores.iter().cloned().fold(f64::INFINITY, f64::min);
    let maximo = valores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let amplitude = (maximo - minimo).max(f64::EPSILON);
    let passo = amplitude / faixas as f64;

    let mut contagens = vec![0usize; faixas];
    for v in valores {
        let mut indice = ((v - minimo) / passo) as usize;
        if indice >= faixas {
            indice = faixas - 1;
        }
        contagens[indice] += 1;
    }

    let categorias: Vec<(String, f64)> = contagens
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let inicio = minimo + passo * i as f64;
            let fim = inicio + passo;
            (format!("{:.0}–{:.0}", inicio, fim), *c as f64)
        })
        .collect();

    grafico_barras(caminho, titulo, &format!("Quantidade ({})", rotulo_x), &categorias)
}

/// Gráfico de linhas sobre um eixo categórico (períodos). Cada série é uma
/// lista de pontos (índice do rótulo, valor) — períodos sem valor ficam de
/// fora da série.
pub fn grafico_linha(
    caminho: &Path,
    titulo: &str,
    rotulo_y: &str,
    rotulos_x: &[String],
    series: &[(String, Vec<(usize, f64)>)],
) -> Result<(), Box<dyn Error>> {
    if rotulos_x.is_empty() || series.iter().all(|(_, pontos)| pontos.is_empty()) {
        return Err(format!("sem dados para o gráfico {:?}", titulo).into());
    }

    let raiz = BitMapBackend::new(caminho, DIMENSOES).into_drawing_area();
    raiz.fill(&WHITE)?;

    let maximo = series
        .iter()
        .flat_map(|(_, pontos)| pontos.iter().map(|(_, v)| *v))
        .fold(0.0f64, f64::max);
    let teto = if maximo > 0.0 { maximo * 1.1 } else { 1.0 };
    let fim_x = (rotulos_x.len() - 1).max(1) as f64;

    let mut grafico = ChartBuilder::on(&raiz)
        .caption(titulo, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(90)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..fim_x, 0f64..teto)?;

    grafico
        .configure_mesh()
        .x_labels(rotulos_x.len().min(20))
        .x_label_formatter(&|x| {
            let indice = x.round() as usize;
            if (x - indice as f64).abs() < 0.01 {
                rotulos_x.get(indice).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_desc(rotulo_y)
        .draw()?;

    for (j, (nome, pontos)) in series.iter().enumerate() {
        if pontos.is_empty() {
            continue;
        }
        let cor = PALETA[j % PALETA.len()];
        grafico
            .draw_series(LineSeries::new(
                pontos.iter().map(|(i, v)| (*i as f64, *v)),
                cor.stroke_width(2),
            ))?
            .label(nome.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 16, y)], cor.stroke_width(2))
            });
        grafico.draw_series(
            pontos
                .iter()
                .map(|(i, v)| Circle::new((*i as f64, *v), 3, cor.filled())),
        )?;
    }

    grafico
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    raiz.present()?;
    Ok(())
}

/// Diagrama de caixa por grupo (quartis + extremos).
pub fn grafico_caixa(
    caminho: &Path,
    titulo: &str,
    rotulo_y: &str,
    grupos: &[(String, Vec<f64>)],
) -> Result<(), Box<dyn Error>> {
    let grupos_validos: Vec<&(String, Vec<f64>)> =
        grupos.iter().filter(|(_, valores)| !valores.is_empty()).collect();
    if grupos_validos.is_empty() {
        return Err(format!("sem dados para o gráfico {:?}", titulo).into());
    }

    let raiz = BitMapBackend::new(caminho, DIMENSOES).into_drawing_area();
    raiz.fill(&WHITE)?;

    let maximo = grupos_validos
        .iter()
        .flat_map(|(_, valores)| valores.iter().cloned())
        .fold(0.0f64, f64::max) as f32;
    let teto = if maximo > 0.0 { maximo * 1.1 } else { 1.0 };
    let nomes: Vec<String> = grupos_validos.iter().map(|(n, _)| n.clone()).collect();

    let mut grafico = ChartBuilder::on(&raiz)
        .caption(titulo, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(90)
        .y_label_area_size(70)
        .build_cartesian_2d((0..grupos_validos.len()).into_segmented(), 0f32..teto)?;

    grafico
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(grupos_validos.len())
        .x_label_formatter(&|seg| rotulo_segmento(seg, &nomes))
        .y_desc(rotulo_y)
        .draw()?;

    for (i, (_, valores)) in grupos_validos.iter().enumerate() {
        let quartis = Quartiles::new(valores);
        grafico.draw_series(std::iter::once(
            Boxplot::new_vertical(SegmentValue::CenterOf(i), &quartis)
                .style(PALETA[0])
                .width(24),
        ))?;
    }

    raiz.present()?;
    Ok(())
}
