// Biblioteca raíz do crate `evastat`.
// Reexporta os módulos principais e as funções de conveniência usadas pelo
// binário: `formatar_dados` (pipeline completo), `executar_analises` e
// `run_server`.
pub mod analise;
pub mod config;
pub mod distancia;
pub mod formatacao;
pub mod localizacao;
pub mod models;
pub mod planilha;
pub mod server;

pub use analise::executar_analises;
pub use config::Config;
pub use formatacao::{carregar_principal, formatar_dados};
pub use server::run_server;
