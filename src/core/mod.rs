//! # Módulo Core — Tipos Fundamentais do Motor de Regras
//!
//! Os blocos de construção sobre os quais o
//! [`InferenceEngine`](crate::inference::InferenceEngine) trabalha:
//!
//! - [`FactStore`] / [`FactValue`] — memória de trabalho (nome → valor)
//! - [`Condition`] / [`Operand`] / [`Operator`] — expressões booleanas recursivas
//! - [`Combinator`] — ponto de extensão para novos operadores
//! - [`Rule`] — condição + ação + prioridade
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{Condition, FactStore, Rule};
//!
//! let mut facts = FactStore::new();
//! facts.set("likes_strong", true);
//! facts.set("likes_creamy", false);
//!
//! let espresso = Rule::new(
//!     Condition::and(vec!["likes_strong".into(), Condition::not("likes_creamy").into()]),
//!     "recommend_espresso",
//!     12,
//! );
//! assert!(espresso.evaluate(&facts));
//! ```

pub mod condition;
pub mod fact;
pub mod rule;

pub use condition::{Combinator, Condition, Operand, Operator};
pub use fact::{FactStore, FactValue};
pub use rule::Rule;
