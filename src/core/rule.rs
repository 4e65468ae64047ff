//! # Regras — Condição, Ação e Prioridade
//!
//! Uma [`Rule`] é a tripla `(condição, ação, prioridade)`. Disparar a
//! regra afirma o fato `ação = true`.
//!
//! A prioridade ordena a varredura (maior primeiro) e também funciona
//! como **identificador único** dentro de um motor: o
//! [`InferenceEngine`](crate::inference::InferenceEngine) recusa uma
//! segunda regra com a mesma prioridade.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::condition::Operand;
use super::fact::FactStore;

/// Regra imutável após a construção.
///
/// A premissa é um [`Operand`]: normalmente uma condição aninhada, mas
/// também pode ser uma referência direta a outro fato (que o
/// encadeamento para trás prova como sub-objetivo) ou um literal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rule {
    pub condition: Operand,
    pub action: String,
    pub priority: i64,
}

impl Rule {
    pub fn new(condition: impl Into<Operand>, action: impl Into<String>, priority: i64) -> Self {
        Self {
            condition: condition.into(),
            action: action.into(),
            priority,
        }
    }

    /// Delega para a premissa, resolvida contra os fatos atuais.
    pub fn evaluate(&self, facts: &FactStore) -> bool {
        self.condition.is_true(facts)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule(condition={}, action={}, priority={})",
            self.condition, self.action, self.priority
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Condition;

    #[test]
    fn evaluate_delegates_to_condition() {
        let rule = Rule::new(
            Condition::and(vec!["likes_sweet".into(), "likes_chocolate".into()]),
            "recommend_mocha",
            9,
        );
        let mut facts = FactStore::new();
        facts.set("likes_sweet", true);
        facts.set("likes_chocolate", false);
        assert!(!rule.evaluate(&facts));
        facts.set("likes_chocolate", true);
        assert!(rule.evaluate(&facts));
    }

    #[test]
    fn display_for_diagnostics() {
        let rule = Rule::new(Condition::not("likes_strong"), "recommend_americano", 5);
        assert_eq!(
            rule.to_string(),
            "Rule(condition=NOT(likes_strong), action=recommend_americano, priority=5)"
        );
    }
}
