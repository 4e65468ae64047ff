//! Erros do motor de inferência.
//!
//! Nenhum deles é fatal para a aplicação: o chamador decide se uma regra
//! recusada ou um ciclo vira aviso, resposta negativa ou mensagem.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Já existe uma regra com esta prioridade; a nova foi descartada.
    #[error("prioridade {priority} já está em uso; regra para `{action}` descartada")]
    DuplicatePriority { priority: i64, action: String },

    /// O encadeamento para trás voltou a um objetivo ainda em prova.
    #[error("ciclo detectado ao provar `{goal}`: {}", .chain.join(" → "))]
    CycleDetected { goal: String, chain: Vec<String> },

    #[error("operador {operator} não aceita {count} operando(s)")]
    Arity { operator: String, count: usize },
}
