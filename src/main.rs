#![allow(dead_code)]

//! # Coffee Expert — Sistema Especialista de Recomendação
//!
//! **Ponto de entrada principal** da aplicação.
//!
//! Um motor de regras com encadeamento para frente e para trás decide
//! quais cafés recomendar a partir de respostas S/N. O mesmo motor é
//! servido por dois drivers:
//!
//! - **Console** (padrão): questionário interativo no terminal
//! - **Serve**: servidor HTTP (axum) com formulário HTML e API JSON
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Lê a linha de comando (clap)
//!   ├── Carrega a base de regras (arquivo JSON ou embutida)
//!   ├── Cria o Orchestrator
//!   └── Despacha:
//!       ├── console → questionário em thread bloqueante (stdin/stdout)
//!       └── serve   → Router axum em --addr
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Questionário no terminal
//! cargo run
//!
//! # Servidor HTTP com logs detalhados
//! RUST_LOG=debug cargo run -- serve --addr 127.0.0.1:3000
//! ```

/// Módulo `core` — fatos, condições e regras.
mod core;

/// Módulo `inference` — motor de encadeamento para frente e para trás.
mod inference;

/// Módulo `error` — erros do motor ([`error::EngineError`]).
mod error;

/// Módulo `rule_base` — descrição declarativa de um domínio.
mod rule_base;

/// Módulo `coffee` — base de regras embutida de café.
mod coffee;

/// Módulo `config` — linha de comando e carregamento da base.
mod config;

/// Módulo `orchestrator` — executa uma consulta completa.
mod orchestrator;

/// Módulo `console` — driver interativo de terminal.
mod console;

/// Módulo `web` — driver HTTP (axum + maud).
mod web;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command};
use crate::orchestrator::Orchestrator;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs vão para stderr para não se misturar ao questionário no stdout.
    // Aceita RUST_LOG; padrão "info".
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let rule_base = config::load_rule_base(cli.rules.as_deref())?;
    let orchestrator = Orchestrator::new(rule_base);

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => {
            // stdin é bloqueante: roda fora das threads do runtime.
            tokio::task::spawn_blocking(move || {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                let mut output = io::stdout().lock();
                console::run(&orchestrator, &mut input, &mut output).map(|_| ())
            })
            .await
            .context("Thread do console encerrou inesperadamente")??;
        }
        Command::Serve { addr } => {
            let app = web::create_router(AppState::new(orchestrator));
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Falha ao abrir {}", addr))?;
            tracing::info!("🚀 Servidor em http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
