//! API JSON com as duas agregações do painel: evasões por ano e distribuição
//! por forma de ingresso. Sem autenticação e sem estado além do CSV
//! processado, que é relido a cada requisição.

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

use crate::config::Config;
use crate::formatacao::carregar_principal;
use crate::models::{FormaIngresso, StatusEvasao};

#[derive(Serialize)]
struct EvasaoAno {
    ano: i32,
    forma_evasao: String,
    alunos: usize,
}

#[derive(Serialize)]
struct IngressoContagem {
    forma_ingresso: String,
    alunos: usize,
}

/// GET /api/evasao
/// Evasões por ano, agrupadas pela forma de evasão detalhada.
async fn evasao_handler(config: web::Data<Config>) -> impl Responder {
    let alunos = match carregar_principal(&config.caminho_principal()) {
        Ok(alunos) => alunos,
        Err(erro) => {
            log::error!("falha ao carregar dados para /api/evasao: {}", erro);
            return HttpResponse::InternalServerError()
                .json(json!({"error": format!("failed to load data: {}", erro)}));
        }
    };

    let mut contagens: BTreeMap<(i32, String), usize> = BTreeMap::new();
    for aluno in alunos {
        if aluno.status_evasao != StatusEvasao::Evasao {
            continue;
        }
        let Some(ano) = aluno.ano_evasao else { continue };
        *contagens
            .entry((ano, aluno.forma_evasao_detalhada.clone()))
            .or_default() += 1;
    }

    let saida: Vec<EvasaoAno> = contagens
        .into_iter()
        .map(|((ano, forma_evasao), alunos)| EvasaoAno { ano, forma_evasao, alunos })
        .collect();
    HttpResponse::Ok().json(saida)
}

/// GET /api/ingresso
/// Quantidade de alunos por forma de ingresso simplificada.
async fn ingresso_handler(config: web::Data<Config>) -> impl Responder {
    let alunos = match carregar_principal(&config.caminho_principal()) {
        Ok(alunos) => alunos,
        Err(erro) => {
            log::error!("falha ao carregar dados para /api/ingresso: {}", erro);
            return HttpResponse::InternalServerError()
                .json(json!({"error": format!("failed to load data: {}", erro)}));
        }
    };

    let formas = [
        FormaIngresso::Cotas,
        FormaIngresso::AmplaConcorrencia,
        FormaIngresso::Outros,
    ];
    let saida: Vec<IngressoContagem> = formas
        .iter()
        .map(|forma| IngressoContagem {
            forma_ingresso: forma.as_str().to_string(),
            alunos: alunos.iter().filter(|a| a.forma_ingresso_simples == *forma).count(),
        })
        .filter(|c| c.alunos > 0)
        .collect();
    HttpResponse::Ok().json(saida)
}

async fn help_handler() -> impl Responder {
    let help = json!({
        "description": "API com as agregações do painel de evasão. Os dados vêm do dfPrincipal.csv gerado pelo comando `formatar`.",
        "rotas": {
            "/api/evasao": "evasões por ano, agrupadas pela forma de evasão detalhada",
            "/api/ingresso": "quantidade de alunos por forma de ingresso simplificada",
        },
        "exemplo_evasao": [{"ano": 2016, "forma_evasao": "ABA - Abandono de Curso", "alunos": 12}],
        "exemplo_ingresso": [{"forma_ingresso": "Cotas", "alunos": 120}],
    });
    HttpResponse::Ok().json(help)
}

/// Sobe o servidor HTTP no endereço configurado.
pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind = config.bind.clone();
    let dados = web::Data::new(config);
    log::info!("servidor da API em http://{}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(dados.clone())
            .route("/api/evasao", web::get().to(evasao_handler))
            .route("/api/ingresso", web::get().to(ingresso_handler))
            .route("/help", web::get().to(help_handler))
    })
    .bind(&bind)?
    .run()
    .await
}
