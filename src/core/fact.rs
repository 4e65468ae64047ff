//! # Fatos — A Memória de Trabalho do Motor
//!
//! Um **fato** é um par `(nome, valor)`. O [`FactStore`] guarda todos os
//! fatos conhecidos por um [`InferenceEngine`](crate::inference::InferenceEngine),
//! indexados pelo nome.
//!
//! ## Regras do Armazenamento
//!
//! - Cada nome aparece **no máximo uma vez** (semântica de mapa)
//! - Reafirmar um nome **sobrescreve** o valor anterior
//! - Não existe remoção — fatos vivem enquanto o motor existir
//!
//! ## Valores
//!
//! | Variante | Exemplo JSON | Verdadeiro quando |
//! |----------|--------------|-------------------|
//! | `Bool` | `true` | o próprio booleano |
//! | `Int` | `42` | `n != 0` |
//! | `Text` | `"espresso"` | string não vazia |

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Valor de um fato — booleano ou literal opaco.
///
/// Literais opacos existem porque uma referência a fato ainda não
/// afirmado resolve para o **próprio nome** (ver
/// [`Operand::FactRef`](super::Operand::FactRef)), e esse nome precisa
/// ter um valor de verdade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    /// Valor booleano — o caso comum (respostas S/N, ações disparadas).
    Bool(bool),
    /// Inteiro — verdadeiro quando diferente de zero.
    Int(i64),
    /// Literal textual — verdadeiro quando não vazio.
    Text(String),
}

impl FactValue {
    /// Valor de verdade do fato quando usado como operando.
    pub fn is_truthy(&self) -> bool {
        match self {
            FactValue::Bool(b) => *b,
            FactValue::Int(n) => *n != 0,
            FactValue::Text(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for FactValue {
    fn from(value: bool) -> Self {
        FactValue::Bool(value)
    }
}

impl From<i64> for FactValue {
    fn from(value: i64) -> Self {
        FactValue::Int(value)
    }
}

impl From<&str> for FactValue {
    fn from(value: &str) -> Self {
        FactValue::Text(value.to_string())
    }
}

impl From<String> for FactValue {
    fn from(value: String) -> Self {
        FactValue::Text(value)
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactValue::Bool(b) => write!(f, "{}", b),
            FactValue::Int(n) => write!(f, "{}", n),
            FactValue::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Mapa `nome → valor` com os fatos conhecidos.
///
/// Só é mutado por afirmação explícita ([`set`](FactStore::set)).
/// Ausência de um fato não é erro: quem consulta decide o fallback.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FactStore {
    facts: HashMap<String, FactValue>,
}

impl FactStore {
    /// Cria um armazenamento vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insere ou sobrescreve o fato `name`. Sempre tem sucesso.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FactValue>) {
        let name = name.into();
        let value = value.into();
        tracing::trace!(fact = %name, value = %value, "Fato afirmado");
        self.facts.insert(name, value);
    }

    /// Busca o valor de `name`; `None` quando o fato não foi afirmado.
    pub fn get(&self, name: &str) -> Option<&FactValue> {
        self.facts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.facts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Itera sobre os fatos em ordem alfabética de nome.
    ///
    /// A ordem estável facilita a exibição e a comparação em testes.
    pub fn iter_sorted(&self) -> Vec<(&str, &FactValue)> {
        let mut entries: Vec<(&str, &FactValue)> =
            self.facts.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_existing_value() {
        let mut facts = FactStore::new();
        facts.set("likes_strong", true);
        facts.set("likes_strong", false);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts.get("likes_strong"), Some(&FactValue::Bool(false)));
    }

    #[test]
    fn absent_fact_is_not_an_error() {
        let facts = FactStore::new();
        assert!(facts.get("unknown").is_none());
        assert!(!facts.contains("unknown"));
        assert!(facts.is_empty());
    }

    #[test]
    fn truthiness_of_literals() {
        assert!(FactValue::from(true).is_truthy());
        assert!(!FactValue::from(false).is_truthy());
        assert!(FactValue::from(3).is_truthy());
        assert!(!FactValue::from(0).is_truthy());
        assert!(FactValue::from("x").is_truthy());
        assert!(!FactValue::from("").is_truthy());
    }

    #[test]
    fn iter_sorted_orders_by_name() {
        let mut facts = FactStore::new();
        facts.set("b", true);
        facts.set("a", false);
        let names: Vec<&str> = facts.iter_sorted().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn values_deserialize_untagged() {
        let values: Vec<FactValue> = serde_json::from_str(r#"[true, 7, "latte"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FactValue::Bool(true),
                FactValue::Int(7),
                FactValue::Text("latte".to_string())
            ]
        );
    }
}
