//! # Base de Regras — Descrição Declarativa de um Domínio
//!
//! Uma [`RuleBase`] reúne tudo que um driver precisa para montar um
//! [`InferenceEngine`]: as perguntas feitas ao usuário (cada uma vira um
//! fato booleano), os objetivos a verificar e as regras.
//!
//! ## Formato JSON
//!
//! ```json
//! {
//!   "name": "Recomendação de Café",
//!   "questions": [{ "fact": "likes_strong", "prompt": "Você gosta de café forte? (Y/N): " }],
//!   "goals": ["recommend_espresso"],
//!   "rules": [{
//!     "condition": { "condition": { "operator": "and", "operands": [{ "fact": "likes_strong" }] } },
//!     "action": "recommend_espresso",
//!     "priority": 12
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Rule;
use crate::error::EngineError;
use crate::inference::InferenceEngine;

/// Pergunta S/N cuja resposta é afirmada como o fato `fact`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    pub fact: String,
    pub prompt: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuleBase {
    pub name: String,
    pub questions: Vec<Question>,
    /// Objetivos verificados por encadeamento para trás, nesta ordem.
    pub goals: Vec<String>,
    /// Regras na ordem de declaração.
    pub rules: Vec<Rule>,
}

impl RuleBase {
    /// Cria um motor novo com as regras registradas em ordem de declaração.
    ///
    /// Regras recusadas (prioridade repetida) não interrompem a montagem:
    /// são devolvidas ao chamador junto com o motor.
    pub fn build_engine(&self) -> (InferenceEngine, Vec<EngineError>) {
        let mut engine = InferenceEngine::new();
        let rejected: Vec<EngineError> = self
            .rules
            .iter()
            .filter_map(|rule| engine.add_rule(rule.clone()).err())
            .collect();
        tracing::debug!(
            base = %self.name,
            rules = engine.rule_count(),
            rejected = rejected.len(),
            "Motor montado"
        );
        (engine, rejected)
    }

    pub fn has_question(&self, fact: &str) -> bool {
        self.questions.iter().any(|q| q.fact == fact)
    }
}

/// Nome legível de um objetivo: `recommend_flat_white` → `Flat White`.
pub fn goal_label(goal: &str) -> String {
    let stem = goal.strip_prefix("recommend_").unwrap_or(goal);
    stem.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
