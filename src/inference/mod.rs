//! # Módulo Inference — Motor de Regras
//!
//! Este módulo contém o **motor de inferência**: o dono das regras e da
//! memória de fatos, com duas estratégias de raciocínio.
//!
//! | Estratégia | Pergunta respondida | Operação |
//! |------------|---------------------|----------|
//! | **Para frente** | "O que posso derivar agora?" | `forward_chaining`, `step`, `run_to_fixpoint` |
//! | **Para trás** | "Este objetivo se prova?" | `backward_chaining`, `resolve_conflict` |
//!
//! ## Exemplo
//!
//! ```text
//! Fatos:  likes_strong = true, likes_creamy = false
//! Regra:  AND(likes_strong, NOT(likes_creamy)) → recommend_espresso (12)
//! ⊢ recommend_espresso = true
//! ```
//!
//! Veja [`InferenceEngine`] para detalhes.

pub mod engine;

pub use engine::InferenceEngine;
