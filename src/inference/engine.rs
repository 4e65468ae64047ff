//! # Motor de Inferência — Encadeamento Para Frente e Para Trás
//!
//! O [`InferenceEngine`] é dono das regras e dos fatos. Nenhum outro
//! componente muta essas coleções diretamente.
//!
//! ## Encadeamento Para Frente (orientado a dados)
//!
//! ```text
//! step():
//!   para cada regra em ordem de prioridade decrescente:
//!     se condição verdadeira E ação ainda não é fato:
//!       afirma ação = true
//!       retorna a regra                ← no máximo UM fato novo por chamada
//!   retorna nada
//! ```
//!
//! [`forward_chaining`](InferenceEngine::forward_chaining) é exatamente
//! um `step()`. Quem precisa do ponto fixo chama
//! [`run_to_fixpoint`](InferenceEngine::run_to_fixpoint).
//!
//! ## Encadeamento Para Trás (orientado a objetivo)
//!
//! ```text
//! prove(goal):
//!   goal já é fato?              → devolve o valor memorizado
//!   goal já está na trilha?      → CycleDetected
//!   regras com ação == goal, por prioridade decrescente:
//!     premissa resolvida?        → afirma goal = true, devolve true
//!   resolve_conflict(goal)       → fallback pela regra de maior prioridade
//! ```
//!
//! A premissa de uma regra é resolvida pelo auxiliar
//! [`resolve_operand`](InferenceEngine::resolve_operand): condições são
//! avaliadas contra os fatos atuais, nomes de fato viram sub-objetivos e
//! literais valem por si.

use crate::core::{FactStore, FactValue, Operand, Rule};
use crate::error::EngineError;

/// Motor de regras com prioridade única por regra.
///
/// ## Prioridade como Identificador
///
/// Duas regras nunca compartilham a mesma prioridade: a segunda é
/// recusada por [`add_rule`](InferenceEngine::add_rule). Na prática isso
/// limita o motor a **uma regra por nível de prioridade**, então domínios
/// com várias regras para a mesma ação precisam de prioridades distintas.
#[derive(Clone, Debug, Default)]
pub struct InferenceEngine {
    /// Regras em ordem de inserção.
    rules: Vec<Rule>,
    facts: FactStore,
}

impl InferenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra uma regra, a menos que a prioridade já esteja em uso.
    ///
    /// Retorna o total de regras após a inserção. Em caso de conflito a
    /// regra é descartada, um aviso é registrado e o total não muda.
    pub fn add_rule(&mut self, rule: Rule) -> Result<usize, EngineError> {
        if self.rules.iter().any(|r| r.priority == rule.priority) {
            tracing::warn!(
                priority = rule.priority,
                action = %rule.action,
                "Regra descartada: prioridade já em uso"
            );
            return Err(EngineError::DuplicatePriority {
                priority: rule.priority,
                action: rule.action,
            });
        }
        tracing::debug!(
            priority = rule.priority,
            action = %rule.action,
            "Regra registrada"
        );
        self.rules.push(rule);
        Ok(self.rules.len())
    }

    /// Afirma (ou sobrescreve) um fato. Sempre tem sucesso.
    pub fn set_fact(&mut self, name: impl Into<String>, value: impl Into<FactValue>) {
        self.facts.set(name, value);
    }

    pub fn facts(&self) -> &FactStore {
        &self.facts
    }

    pub fn fact(&self, name: &str) -> Option<&FactValue> {
        self.facts.get(name)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Regras ordenadas por prioridade decrescente.
    pub fn rules_by_priority(&self) -> Vec<&Rule> {
        priority_order(&self.rules)
    }

    /// Um passo de encadeamento para frente.
    ///
    /// Dispara a regra de maior prioridade cuja condição é verdadeira e
    /// cuja ação ainda não é fato. Fatos já presentes nunca são
    /// sobrescritos por disparo.
    pub fn step(&mut self) -> Option<Rule> {
        let fired = priority_order(&self.rules)
            .into_iter()
            .find(|rule| !self.facts.contains(&rule.action) && rule.evaluate(&self.facts))
            .cloned()?;
        tracing::debug!(
            action = %fired.action,
            priority = fired.priority,
            "Encadeamento para frente: regra disparada"
        );
        self.facts.set(fired.action.clone(), true);
        Some(fired)
    }

    /// Encadeamento para frente: zero ou uma regra disparada por chamada.
    ///
    /// Chame repetidamente até receber uma lista vazia para chegar ao
    /// ponto fixo, ou use [`run_to_fixpoint`](Self::run_to_fixpoint).
    pub fn forward_chaining(&mut self) -> Vec<Rule> {
        self.step().into_iter().collect()
    }

    /// Repete [`step`](Self::step) até nenhuma regra nova disparar.
    ///
    /// Termina sempre: cada passo afirma um fato novo e o número de
    /// ações distintas é finito.
    pub fn run_to_fixpoint(&mut self) -> Vec<Rule> {
        let fired: Vec<Rule> = std::iter::from_fn(|| self.step()).collect();
        tracing::debug!(fired = fired.len(), "Ponto fixo alcançado");
        fired
    }

    /// Encadeamento para trás: tenta provar `goal`.
    ///
    /// # Erros
    ///
    /// [`EngineError::CycleDetected`] quando a prova de `goal` depende,
    /// transitivamente, de si mesma.
    pub fn backward_chaining(&mut self, goal: &str) -> Result<bool, EngineError> {
        Prover::new(&self.rules, &mut self.facts).prove(goal)
    }

    /// Auxiliar de resolução de premissas, exposto para uso direto.
    ///
    /// - condição aninhada → avaliada contra os fatos atuais
    /// - nome de fato → provado via encadeamento para trás
    /// - literal → seu próprio valor de verdade
    pub fn resolve_operand(&mut self, operand: &Operand) -> Result<bool, EngineError> {
        Prover::new(&self.rules, &mut self.facts).resolve(operand)
    }

    /// Resolução de conflito para `goal`.
    ///
    /// Escolhe, entre as regras com ação `goal`, a de maior prioridade e
    /// resolve sua premissa. Sem regras candidatas devolve `false`.
    pub fn resolve_conflict(&mut self, goal: &str) -> Result<bool, EngineError> {
        Prover::new(&self.rules, &mut self.facts).resolve_conflict(goal)
    }
}

fn priority_order(rules: &[Rule]) -> Vec<&Rule> {
    let mut sorted: Vec<&Rule> = rules.iter().collect();
    sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
    sorted
}

/// Estado de uma prova: regras (somente leitura), fatos e a trilha de
/// objetivos em andamento, usada para detectar ciclos.
struct Prover<'a> {
    rules: &'a [Rule],
    facts: &'a mut FactStore,
    trail: Vec<String>,
}

impl<'a> Prover<'a> {
    fn new(rules: &'a [Rule], facts: &'a mut FactStore) -> Self {
        Self {
            rules,
            facts,
            trail: Vec::new(),
        }
    }

    fn prove(&mut self, goal: &str) -> Result<bool, EngineError> {
        if let Some(value) = self.facts.get(goal) {
            tracing::trace!(goal, value = %value, "Objetivo já é fato");
            return Ok(value.is_truthy());
        }
        if self.trail.iter().any(|g| g == goal) {
            let mut chain = self.trail.clone();
            chain.push(goal.to_string());
            return Err(EngineError::CycleDetected {
                goal: goal.to_string(),
                chain,
            });
        }

        self.trail.push(goal.to_string());
        let result = self.prove_by_rules(goal);
        self.trail.pop();
        result
    }

    fn prove_by_rules(&mut self, goal: &str) -> Result<bool, EngineError> {
        let rules = self.rules;
        for rule in priority_order(rules) {
            if rule.action != goal {
                continue;
            }
            if self.resolve(&rule.condition)? {
                tracing::debug!(goal, priority = rule.priority, "Objetivo provado");
                self.facts.set(goal, true);
                return Ok(true);
            }
        }
        self.resolve_conflict(goal)
    }

    fn resolve(&mut self, operand: &Operand) -> Result<bool, EngineError> {
        match operand {
            Operand::Nested(condition) => Ok(condition.evaluate(self.facts)),
            Operand::FactRef(name) => self.prove(name),
            Operand::Literal(value) => Ok(value.is_truthy()),
        }
    }

    fn resolve_conflict(&mut self, goal: &str) -> Result<bool, EngineError> {
        let rules = self.rules;
        let Some(winner) = rules
            .iter()
            .filter(|r| r.action == goal)
            .max_by_key(|r| r.priority)
        else {
            tracing::trace!(goal, "Nenhuma regra conclui o objetivo");
            return Ok(false);
        };
        if self.resolve(&winner.condition)? {
            self.facts.set(goal, true);
            return Ok(true);
        }
        Ok(false)
    }
}
