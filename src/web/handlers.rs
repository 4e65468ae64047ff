//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Questionário |
//! | `consult` | POST | HTML completo | Relatório (form urlencoded) |
//! | `api_consult` | POST | JSON | Relatório (`{ "answers": {...} }`) |
//! | `api_rules` | GET | JSON | Base de regras em uso |
//! | `health` | GET | texto | Verificação de vida |

use std::collections::HashMap;

use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use serde::Deserialize;

use super::state::AppState;
use super::templates;
use crate::orchestrator::Consultation;
use crate::rule_base::RuleBase;

/// Corpo de `POST /api/consult`.
#[derive(Debug, Deserialize)]
pub struct ConsultRequest {
    pub answers: HashMap<String, bool>,
}

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// GET `/` — Questionário.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    markup_to_html(templates::questionnaire_page(state.orchestrator.rule_base()))
}

/// POST `/consult` — Recebe o formulário e devolve o relatório.
///
/// Campos com valor `yes` viram `true`, `no` vira `false`; qualquer
/// outro valor é tratado como pergunta sem resposta.
pub async fn consult(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Html<String> {
    let answers: HashMap<String, bool> = form
        .into_iter()
        .filter_map(|(fact, value)| match value.as_str() {
            "yes" => Some((fact, true)),
            "no" => Some((fact, false)),
            _ => None,
        })
        .collect();
    let report = state.orchestrator.consult(&answers);
    markup_to_html(templates::consultation_page(
        &state.orchestrator.rule_base().name,
        &report,
    ))
}

/// POST `/api/consult` — Versão JSON da consulta.
pub async fn api_consult(
    State(state): State<AppState>,
    Json(request): Json<ConsultRequest>,
) -> Json<Consultation> {
    Json(state.orchestrator.consult(&request.answers))
}

/// GET `/api/rules` — Base de regras em uso, no mesmo formato aceito por `--rules`.
pub async fn api_rules(State(state): State<AppState>) -> Json<RuleBase> {
    Json(state.orchestrator.rule_base().clone())
}

pub async fn health() -> &'static str {
    "ok"
}
