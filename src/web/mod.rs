//! # Módulo Web — O Balcão de Atendimento
//!
//! Driver HTTP construído com **Axum** + **Maud**. Cada requisição monta
//! um motor de inferência independente via [`Orchestrator`](crate::orchestrator::Orchestrator).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                           │
//! │  ├── GET  /             → questionário (HTML)       │
//! │  ├── POST /consult      → relatório (HTML)          │
//! │  ├── POST /api/consult  → relatório (JSON)          │
//! │  ├── GET  /api/rules    → base de regras (JSON)     │
//! │  └── GET  /health       → "ok"                      │
//! ├─────────────────────────────────────────────────────┤
//! │ TraceLayer (tower_http) → spans tracing por request │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/consult", post(handlers::consult))
        .route("/api/consult", post(handlers::api_consult))
        .route("/api/rules", get(handlers::api_rules))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
