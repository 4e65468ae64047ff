//! # Estado da Aplicação Web
//!
//! O único estado compartilhado é o [`Orchestrator`], que é imutável:
//! cada requisição monta seu próprio motor de inferência, então não há
//! lock nenhum aqui.

use std::sync::Arc;

use crate::orchestrator::Orchestrator;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}
