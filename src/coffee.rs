//! # Base Embutida — Recomendação de Café
//!
//! Sete perguntas de preferência, oito recomendações e doze regras.
//!
//! | Prioridade | Ação | Condição |
//! |-----------:|------|----------|
//! | 12 | espresso | `likes_strong ∧ ¬likes_creamy` |
//! | 11 | cappuccino | `likes_creamy ∧ likes_foam` |
//! | 10 | latte | `likes_creamy ∧ ¬likes_foam` |
//! | 9 | mocha | `likes_sweet ∧ likes_chocolate` |
//! | 8 | flat white | `needs_high_caffeine ∧ likes_creamy ∧ ¬likes_strong` |
//! | 7 | macchiato | `needs_high_caffeine ∧ ¬likes_creamy` |
//! | 6 | caramel macchiato | `likes_sweet ∧ ¬likes_chocolate` |
//! | 5 | americano | `likes_mild ∨ ¬likes_strong` |
//! | 4 | espresso | `likes_strong ∧ likes_creamy` |
//! | 1 | espresso | `likes_sweet ∧ needs_high_caffeine` |
//! | 2 | espresso | `likes_mild ∧ likes_strong` |
//! | 1 | cappuccino | `likes_foam ∧ ¬likes_creamy` ⚠️ recusada |
//!
//! A última regra repete a prioridade 1 e é recusada ao montar o motor.

use crate::core::{Condition, Operand, Rule};
use crate::rule_base::{Question, RuleBase};

const QUESTIONS: [(&str, &str); 7] = [
    ("likes_strong", "Você gosta de café forte? (Y/N): "),
    ("likes_creamy", "Você gosta de sabores cremosos? (Y/N): "),
    ("likes_sweet", "Você gosta de sabores doces? (Y/N): "),
    ("needs_high_caffeine", "Você precisa de muita cafeína? (Y/N): "),
    ("likes_mild", "Você prefere sabores suaves? (Y/N): "),
    ("likes_foam", "Você gosta de espuma? (Y/N): "),
    ("likes_chocolate", "Você gosta de chocolate? (Y/N): "),
];

const GOALS: [&str; 8] = [
    "recommend_espresso",
    "recommend_cappuccino",
    "recommend_latte",
    "recommend_mocha",
    "recommend_flat_white",
    "recommend_macchiato",
    "recommend_caramel_macchiato",
    "recommend_americano",
];

fn fact(name: &str) -> Operand {
    Operand::fact(name)
}

fn not(name: &str) -> Operand {
    Condition::not(name).into()
}

/// Monta a base de recomendação de café.
pub fn coffee_rule_base() -> RuleBase {
    let rules = vec![
        Rule::new(
            Condition::and(vec![fact("likes_strong"), not("likes_creamy")]),
            GOALS[0],
            12,
        ),
        Rule::new(
            Condition::and(vec![fact("likes_creamy"), fact("likes_foam")]),
            GOALS[1],
            11,
        ),
        Rule::new(
            Condition::and(vec![fact("likes_creamy"), not("likes_foam")]),
            GOALS[2],
            10,
        ),
        Rule::new(
            Condition::and(vec![fact("likes_sweet"), fact("likes_chocolate")]),
            GOALS[3],
            9,
        ),
        Rule::new(
            Condition::and(vec![
                fact("needs_high_caffeine"),
                fact("likes_creamy"),
                not("likes_strong"),
            ]),
            GOALS[4],
            8,
        ),
        Rule::new(
            Condition::and(vec![fact("needs_high_caffeine"), not("likes_creamy")]),
            GOALS[5],
            7,
        ),
        Rule::new(
            Condition::and(vec![fact("likes_sweet"), not("likes_chocolate")]),
            GOALS[6],
            6,
        ),
        Rule::new(
            Condition::or(vec![fact("likes_mild"), not("likes_strong")]),
            GOALS[7],
            5,
        ),
        Rule::new(
            Condition::and(vec![fact("likes_strong"), fact("likes_creamy")]),
            GOALS[0],
            4,
        ),
        Rule::new(
            Condition::and(vec![fact("likes_sweet"), fact("needs_high_caffeine")]),
            GOALS[0],
            1,
        ),
        Rule::new(
            Condition::and(vec![fact("likes_mild"), fact("likes_strong")]),
            GOALS[0],
            2,
        ),
        Rule::new(
            Condition::and(vec![fact("likes_foam"), not("likes_creamy")]),
            GOALS[1],
            1,
        ),
    ];

    RuleBase {
        name: "Recomendação de Café".to_string(),
        questions: QUESTIONS
            .iter()
            .map(|(fact, prompt)| Question {
                fact: fact.to_string(),
                prompt: prompt.to_string(),
            })
            .collect(),
        goals: GOALS.iter().map(|g| g.to_string()).collect(),
        rules,
    }
}
