//! # Orquestrador — Uma Consulta do Início ao Fim
//!
//! O [`Orchestrator`] transforma respostas S/N em recomendações. Cada
//! consulta monta um [`InferenceEngine`](crate::inference::InferenceEngine)
//! **novo** a partir da [`RuleBase`], então consultas nunca compartilham
//! estado mutável.
//!
//! ## O Ciclo de uma Consulta
//!
//! ```text
//! Respostas do usuário
//!   │
//!   ├── 1. 🧱 MONTAGEM — registra as regras (prioridades repetidas são recusadas)
//!   ├── 2. 🌱 SEMEADURA — cada resposta vira um fato booleano
//!   ├── 3. ☀️ PARA FRENTE — um passo: a regra mais prioritária que dispara
//!   └── 4. 🔍 PARA TRÁS — cada objetivo da base é verificado, em ordem
//! ```
//!
//! Drivers (console, web) só renderizam o [`Consultation`] resultante.

use std::collections::HashMap;

use serde::Serialize;

use crate::rule_base::{goal_label, RuleBase};

/// Regra disparada pelo encadeamento para frente.
#[derive(Clone, Debug, Serialize)]
pub struct TriggeredRule {
    pub action: String,
    pub label: String,
    pub priority: i64,
    pub condition: String,
}

/// Resultado do encadeamento para trás para um objetivo.
#[derive(Clone, Debug, Serialize)]
pub struct Verdict {
    pub goal: String,
    pub label: String,
    pub recommended: bool,
    /// Presente quando a prova falhou (ex: ciclo); o objetivo conta como
    /// não recomendado.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Relatório completo de uma consulta.
#[derive(Clone, Debug, Serialize)]
pub struct Consultation {
    pub triggered: Vec<TriggeredRule>,
    pub verdicts: Vec<Verdict>,
    /// Regras recusadas na montagem do motor, já formatadas.
    pub rejected: Vec<String>,
}

impl Consultation {
    pub fn recommended(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| v.recommended)
    }
}

pub struct Orchestrator {
    rule_base: RuleBase,
}

impl Orchestrator {
    pub fn new(rule_base: RuleBase) -> Self {
        Self { rule_base }
    }

    pub fn rule_base(&self) -> &RuleBase {
        &self.rule_base
    }

    /// Executa uma consulta com as respostas dadas.
    ///
    /// Perguntas sem resposta ficam sem fato (e portanto caem no fallback
    /// literal das condições). Respostas para fatos que a base não
    /// pergunta são ignoradas.
    pub fn consult(&self, answers: &HashMap<String, bool>) -> Consultation {
        let (mut engine, rejected) = self.rule_base.build_engine();

        for question in &self.rule_base.questions {
            if let Some(answer) = answers.get(&question.fact) {
                engine.set_fact(question.fact.clone(), *answer);
            }
        }
        for fact in answers.keys().filter(|f| !self.rule_base.has_question(f)) {
            tracing::warn!(fact = %fact, "Resposta ignorada: fato não perguntado pela base");
        }

        let triggered: Vec<TriggeredRule> = engine
            .forward_chaining()
            .into_iter()
            .map(|rule| TriggeredRule {
                label: goal_label(&rule.action),
                condition: rule.condition.to_string(),
                action: rule.action,
                priority: rule.priority,
            })
            .collect();

        let verdicts: Vec<Verdict> = self
            .rule_base
            .goals
            .iter()
            .map(|goal| {
                let (recommended, error) = match engine.backward_chaining(goal) {
                    Ok(proved) => (proved, None),
                    Err(e) => {
                        tracing::warn!(goal = %goal, error = %e, "Falha ao provar objetivo");
                        (false, Some(e.to_string()))
                    }
                };
                Verdict {
                    goal: goal.clone(),
                    label: goal_label(goal),
                    recommended,
                    error,
                }
            })
            .collect();

        tracing::info!(
            answers = answers.len(),
            triggered = triggered.len(),
            recommended = verdicts.iter().filter(|v| v.recommended).count(),
            "Consulta concluída"
        );

        Consultation {
            triggered,
            verdicts,
            rejected: rejected.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coffee::coffee_rule_base;
    use crate::core::Rule;
    use crate::rule_base::Question;

    fn answers(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn all_answered(yes: &[&str]) -> HashMap<String, bool> {
        coffee_rule_base()
            .questions
            .iter()
            .map(|q| (q.fact.clone(), yes.contains(&q.fact.as_str())))
            .collect()
    }

    #[test]
    fn strong_black_coffee_drinker_gets_espresso() {
        let orchestrator = Orchestrator::new(coffee_rule_base());
        let report = orchestrator.consult(&all_answered(&["likes_strong", "likes_foam"]));

        assert_eq!(report.triggered.len(), 1);
        assert_eq!(report.triggered[0].label, "Espresso");
        assert_eq!(report.triggered[0].priority, 12);

        let recommended: Vec<&str> = report.recommended().map(|v| v.label.as_str()).collect();
        assert_eq!(recommended, vec!["Espresso"]);
        assert_eq!(report.rejected.len(), 1);
    }

    #[test]
    fn creamy_sweet_answers() {
        let orchestrator = Orchestrator::new(coffee_rule_base());
        let report = orchestrator.consult(&all_answered(&[
            "likes_creamy",
            "likes_sweet",
            "likes_chocolate",
            "likes_mild",
        ]));
        assert_eq!(report.triggered[0].action, "recommend_latte");
        let recommended: Vec<&str> = report.recommended().map(|v| v.goal.as_str()).collect();
        assert_eq!(
            recommended,
            vec!["recommend_latte", "recommend_mocha", "recommend_americano"]
        );
    }

    #[test]
    fn unknown_answers_are_ignored() {
        let orchestrator = Orchestrator::new(coffee_rule_base());
        let mut given = all_answered(&[]);
        given.insert("likes_tea".to_string(), true);
        let report = orchestrator.consult(&given);
        // Nada forte, nada cremoso: só o americano (¬likes_strong).
        let recommended: Vec<&str> = report.recommended().map(|v| v.label.as_str()).collect();
        assert_eq!(recommended, vec!["Americano"]);
    }

    #[test]
    fn cycle_becomes_verdict_error() {
        let base = RuleBase {
            name: "ciclo".to_string(),
            questions: vec![Question {
                fact: "q".to_string(),
                prompt: "q? ".to_string(),
            }],
            goals: vec!["a".to_string()],
            // O passo para frente consome `warmup`, deixando `a` para a prova.
            rules: vec![
                Rule::new(true, "warmup", 10),
                Rule::new("b", "a", 2),
                Rule::new("a", "b", 1),
            ],
        };
        let report = Orchestrator::new(base).consult(&answers(&[("q", true)]));
        assert!(!report.verdicts[0].recommended);
        assert!(report.verdicts[0]
            .error
            .as_deref()
            .is_some_and(|e| e.contains("ciclo")));
    }
}
