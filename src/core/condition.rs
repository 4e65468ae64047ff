//! # Condições — Expressões Booleanas Sobre Fatos
//!
//! Uma [`Condition`] é um nó de árvore: um **operador** aplicado a uma
//! sequência ordenada de **operandos**. Cada operando é um literal, uma
//! referência a fato ou outra condição aninhada.
//!
//! ```text
//! AND
//! ├── likes_strong           (FactRef)
//! └── NOT
//!     └── likes_creamy       (FactRef)
//! ```
//!
//! ## Resolução de Operandos
//!
//! | Operando | Resolve para |
//! |----------|--------------|
//! | `Literal(v)` | `v` |
//! | `FactRef(nome)` presente | valor armazenado |
//! | `FactRef(nome)` ausente | o **próprio nome** como literal textual (verdadeiro) |
//! | `Nested(c)` | `c.evaluate(facts)` |
//!
//! O fallback do `FactRef` ausente é intencional: um fato ainda não
//! afirmado conta como verdadeiro. Assim `NOT(unknown_fact)` é `false`.
//!
//! ## Operadores Extensíveis
//!
//! Os operadores embutidos (`AND`, `OR`, `NOT`, `XOR`, `NOR`) são
//! despachados pelo trait [`Combinator`]. Novos combinadores entram via
//! [`Operator::custom`] sem mexer na avaliação de [`Condition`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::fact::{FactStore, FactValue};
use crate::error::EngineError;

/// Combinador booleano usado por uma [`Condition`].
///
/// Recebe os operandos **já resolvidos** para booleanos, na ordem em
/// que aparecem na condição.
pub trait Combinator: fmt::Debug + Send + Sync {
    /// Nome exibido em diagnósticos (ex: `"AND"`).
    fn symbol(&self) -> &str;

    /// Indica se o combinador aceita `arity` operandos.
    fn accepts(&self, arity: usize) -> bool {
        let _ = arity;
        true
    }

    fn combine(&self, values: &[bool]) -> bool;
}

/// Operador de uma [`Condition`].
///
/// Serializado em JSON como string minúscula (`"and"`, `"not"`, ...).
/// `Custom` existe só em memória e não é serializável.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Verdadeiro se todos os operandos forem verdadeiros.
    And,
    /// Verdadeiro se algum operando for verdadeiro.
    Or,
    /// Negação do único operando.
    Not,
    /// Verdadeiro se um número ímpar de operandos for verdadeiro.
    Xor,
    /// Verdadeiro se nenhum operando for verdadeiro.
    Nor,
    #[serde(skip)]
    Custom(Arc<dyn Combinator>),
}

impl Operator {
    /// Envolve um combinador definido pelo chamador.
    pub fn custom(combinator: impl Combinator + 'static) -> Self {
        Operator::Custom(Arc::new(combinator))
    }
}

impl Combinator for Operator {
    fn symbol(&self) -> &str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::Xor => "XOR",
            Operator::Nor => "NOR",
            Operator::Custom(c) => c.symbol(),
        }
    }

    fn accepts(&self, arity: usize) -> bool {
        match self {
            Operator::Not => arity == 1,
            Operator::Custom(c) => c.accepts(arity),
            _ => true,
        }
    }

    fn combine(&self, values: &[bool]) -> bool {
        match self {
            Operator::And => values.iter().all(|v| *v),
            Operator::Or => values.iter().any(|v| *v),
            Operator::Not => !values.first().copied().unwrap_or(false),
            Operator::Xor => values.iter().filter(|v| **v).count() % 2 == 1,
            Operator::Nor => !values.iter().any(|v| *v),
            Operator::Custom(c) => c.combine(values),
        }
    }
}

/// Operando de uma [`Condition`], decidido na construção.
///
/// ```json
/// { "fact": "likes_strong" }
/// { "literal": true }
/// { "condition": { "operator": "not", "operands": [{ "fact": "likes_creamy" }] } }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// Valor usado como está.
    Literal(FactValue),
    /// Nome de fato, buscado no [`FactStore`] no momento da avaliação.
    #[serde(rename = "fact")]
    FactRef(String),
    /// Sub-condição avaliada recursivamente.
    #[serde(rename = "condition")]
    Nested(Condition),
}

impl Operand {
    pub fn fact(name: impl Into<String>) -> Self {
        Operand::FactRef(name.into())
    }

    /// Resolve o operando contra os fatos atuais.
    ///
    /// Nunca falha: referência ausente vira o literal textual do nome.
    pub fn resolve(&self, facts: &FactStore) -> FactValue {
        match self {
            Operand::Literal(value) => value.clone(),
            Operand::FactRef(name) => facts
                .get(name)
                .cloned()
                .unwrap_or_else(|| FactValue::Text(name.clone())),
            Operand::Nested(condition) => FactValue::Bool(condition.evaluate(facts)),
        }
    }

    /// Valor de verdade do operando resolvido.
    pub fn is_true(&self, facts: &FactStore) -> bool {
        self.resolve(facts).is_truthy()
    }
}

impl From<&str> for Operand {
    fn from(name: &str) -> Self {
        Operand::FactRef(name.to_string())
    }
}

impl From<String> for Operand {
    fn from(name: String) -> Self {
        Operand::FactRef(name)
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Literal(FactValue::Bool(value))
    }
}

impl From<FactValue> for Operand {
    fn from(value: FactValue) -> Self {
        Operand::Literal(value)
    }
}

impl From<Condition> for Operand {
    fn from(condition: Condition) -> Self {
        Operand::Nested(condition)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{}", value),
            Operand::FactRef(name) => write!(f, "{}", name),
            Operand::Nested(condition) => write!(f, "{}", condition),
        }
    }
}

/// Expressão booleana: operador + operandos ordenados.
///
/// A avaliação é uma função pura de `(operador, operandos, fatos)` e
/// nunca altera o [`FactStore`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCondition")]
pub struct Condition {
    operator: Operator,
    operands: Vec<Operand>,
}

/// Forma desserializada antes da validação de aridade.
#[derive(Deserialize)]
struct UncheckedCondition {
    operator: Operator,
    operands: Vec<Operand>,
}

impl TryFrom<UncheckedCondition> for Condition {
    type Error = EngineError;

    fn try_from(raw: UncheckedCondition) -> Result<Self, Self::Error> {
        Condition::new(raw.operator, raw.operands)
    }
}

impl Condition {
    /// Cria uma condição, validando a aridade do operador.
    ///
    /// # Erros
    ///
    /// [`EngineError::Arity`] quando o operador não aceita a quantidade
    /// de operandos (ex: `NOT` com dois operandos).
    pub fn new(operator: Operator, operands: Vec<Operand>) -> Result<Self, EngineError> {
        if !operator.accepts(operands.len()) {
            return Err(EngineError::Arity {
                operator: operator.symbol().to_string(),
                count: operands.len(),
            });
        }
        Ok(Self { operator, operands })
    }

    pub fn and(operands: Vec<Operand>) -> Self {
        Self {
            operator: Operator::And,
            operands,
        }
    }

    pub fn or(operands: Vec<Operand>) -> Self {
        Self {
            operator: Operator::Or,
            operands,
        }
    }

    pub fn not(operand: impl Into<Operand>) -> Self {
        Self {
            operator: Operator::Not,
            operands: vec![operand.into()],
        }
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// Avalia a condição contra um snapshot dos fatos.
    ///
    /// Todos os operandos são resolvidos antes de aplicar o operador.
    pub fn evaluate(&self, facts: &FactStore) -> bool {
        let values: Vec<bool> = self.operands.iter().map(|op| op.is_true(facts)).collect();
        self.operator.combine(&values)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.operator.symbol())?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", operand)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee_facts() -> FactStore {
        let mut facts = FactStore::new();
        facts.set("likes_strong", true);
        facts.set("likes_creamy", false);
        facts.set("likes_foam", true);
        facts
    }

    #[test]
    fn and_with_nested_not() {
        let espresso = Condition::and(vec![
            "likes_strong".into(),
            Condition::not("likes_creamy").into(),
        ]);
        assert!(espresso.evaluate(&coffee_facts()));

        let cappuccino = Condition::and(vec!["likes_creamy".into(), "likes_foam".into()]);
        assert!(!cappuccino.evaluate(&coffee_facts()));
    }

    #[test]
    fn or_is_true_when_any_operand_is() {
        let americano = Condition::or(vec![
            "likes_creamy".into(),
            Condition::not("likes_strong").into(),
        ]);
        assert!(!americano.evaluate(&coffee_facts()));

        let cond = Condition::or(vec![false.into(), "likes_foam".into()]);
        assert!(cond.evaluate(&coffee_facts()));
    }

    /// Fato nunca afirmado resolve para o próprio nome, que é verdadeiro.
    #[test]
    fn unknown_fact_falls_back_to_its_name() {
        let facts = FactStore::new();
        assert!(!Condition::not("unknown_fact").evaluate(&facts));
        assert_eq!(
            Operand::fact("unknown_fact").resolve(&facts),
            FactValue::Text("unknown_fact".to_string())
        );
    }

    #[test]
    fn evaluate_never_mutates_facts() {
        let facts = coffee_facts();
        let cond = Condition::and(vec!["likes_strong".into(), "never_set".into()]);
        for _ in 0..5 {
            cond.evaluate(&facts);
        }
        assert_eq!(facts.len(), 3);
        assert!(!facts.contains("never_set"));
    }

    #[test]
    fn not_rejects_wrong_arity() {
        let err = Condition::new(Operator::Not, vec!["a".into(), "b".into()]).unwrap_err();
        assert_eq!(
            err,
            EngineError::Arity {
                operator: "NOT".to_string(),
                count: 2
            }
        );
    }

    #[test]
    fn xor_and_nor() {
        let facts = coffee_facts();
        let xor = Condition::new(Operator::Xor, vec!["likes_strong".into(), "likes_foam".into()])
            .unwrap();
        assert!(!xor.evaluate(&facts));
        let nor = Condition::new(Operator::Nor, vec!["likes_creamy".into(), false.into()])
            .unwrap();
        assert!(nor.evaluate(&facts));
    }

    #[derive(Debug)]
    struct AtLeastTwo;

    impl Combinator for AtLeastTwo {
        fn symbol(&self) -> &str {
            "AT_LEAST_2"
        }

        fn combine(&self, values: &[bool]) -> bool {
            values.iter().filter(|v| **v).count() >= 2
        }
    }

    #[test]
    fn custom_combinator_plugs_in() {
        let cond = Condition::new(
            Operator::custom(AtLeastTwo),
            vec!["likes_strong".into(), "likes_creamy".into(), "likes_foam".into()],
        )
        .unwrap();
        assert!(cond.evaluate(&coffee_facts()));
        assert_eq!(
            cond.to_string(),
            "AT_LEAST_2(likes_strong, likes_creamy, likes_foam)"
        );
    }

    #[test]
    fn display_renders_tree() {
        let cond = Condition::and(vec!["a".into(), Condition::not("b").into()]);
        assert_eq!(cond.to_string(), "AND(a, NOT(b))");
    }

    #[test]
    fn deserialize_validates_arity() {
        let ok: Condition = serde_json::from_str(
            r#"{"operator":"and","operands":[{"fact":"a"},{"condition":{"operator":"not","operands":[{"literal":false}]}}]}"#,
        )
        .unwrap();
        assert_eq!(ok.to_string(), "AND(a, NOT(false))");

        let bad = serde_json::from_str::<Condition>(
            r#"{"operator":"not","operands":[{"fact":"a"},{"fact":"b"}]}"#,
        );
        assert!(bad.is_err());
    }
}
