//! # Teaching Assistant — Roster de Alunos
//!
//! Ponto de entrada do servidor. Mantém um roster em memória de alunos
//! identificados por CPF, com notas MANA/MPA/MA por meta de aprendizagem,
//! exposto por uma API JSON e por uma página HTMX.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Lê AppConfig do ambiente (TA_BIND_ADDR, TA_GOALS)
//!   ├── Cria o StudentRegistry (vazio, vive só em memória)
//!   ├── Monta AppState e Router
//!   └── Inicia servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Executar com logs detalhados do registro
//! RUST_LOG=debug cargo run
//! ```
//!
//! O roster é perdido quando o processo termina.

mod config;
mod core;
mod web;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::core::StudentRegistry;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível. Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("📚 Teaching Assistant — Starting...");

    let config = AppConfig::from_env();
    tracing::info!(goals = ?config.goals, "Metas de avaliação carregadas");

    // O registro pertence ao AppState; handlers o acessam via Arc<RwLock<>>.
    let state = AppState::new(StudentRegistry::new(), config.goals);
    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Falha ao abrir {}", config.bind_addr))?;
    tracing::info!("🚀 Server running at http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
