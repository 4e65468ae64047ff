//! # Configuração — Linha de Comando e Base de Regras
//!
//! A linha de comando escolhe o driver (console ou servidor HTTP) e,
//! opcionalmente, um arquivo JSON com a [`RuleBase`]. Sem arquivo, usa a
//! base embutida de café.
//!
//! ```bash
//! coffee-expert                          # console com a base embutida
//! coffee-expert --rules regras.json      # console com base própria
//! COFFEE_RULES=regras.json coffee-expert serve --addr 127.0.0.1:8080
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::coffee::coffee_rule_base;
use crate::rule_base::RuleBase;

/// Sistema especialista de recomendação baseado em regras.
#[derive(Debug, Parser)]
#[command(name = "coffee-expert", version)]
pub struct Cli {
    /// Arquivo JSON com a base de regras (padrão: base embutida de café).
    #[arg(long, env = "COFFEE_RULES", global = true)]
    pub rules: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Questionário interativo no terminal (padrão).
    Console,
    /// Servidor HTTP com formulário HTML e API JSON.
    Serve {
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,
    },
}

/// Carrega a base de regras do disco, ou a embutida quando `path` é `None`.
///
/// # Erros
///
/// Retorna erro se o arquivo não puder ser lido ou não for uma base
/// válida (JSON malformado, operador com aridade errada, ...).
pub fn load_rule_base(path: Option<&Path>) -> Result<RuleBase> {
    let Some(path) = path else {
        tracing::info!("Usando base de regras embutida");
        return Ok(coffee_rule_base());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler {}", path.display()))?;
    let base: RuleBase = serde_json::from_str(&json)
        .with_context(|| format!("Falha ao desserializar {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        name = %base.name,
        rules = base.rules.len(),
        goals = base.goals.len(),
        "Base de regras carregada"
    );
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("coffee-expert-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_to_builtin_base() {
        let base = load_rule_base(None).unwrap();
        assert_eq!(base.goals.len(), 8);
    }

    #[test]
    fn loads_base_from_json() {
        let path = temp_file(
            "tea.json",
            r#"{
                "name": "Chá",
                "questions": [{ "fact": "likes_herbal", "prompt": "Chá de ervas? (Y/N): " }],
                "goals": ["recommend_chamomile"],
                "rules": [{
                    "condition": { "fact": "likes_herbal" },
                    "action": "recommend_chamomile",
                    "priority": 1
                }]
            }"#,
        );
        let base = load_rule_base(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(base.name, "Chá");
        assert_eq!(base.rules[0].action, "recommend_chamomile");
    }

    #[test]
    fn invalid_arity_is_reported_with_context() {
        let path = temp_file(
            "bad.json",
            r#"{
                "name": "x", "questions": [], "goals": [],
                "rules": [{
                    "condition": { "condition": { "operator": "not", "operands": [] } },
                    "action": "y", "priority": 1
                }]
            }"#,
        );
        let err = load_rule_base(Some(path.as_path())).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().starts_with("Falha ao desserializar"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_rule_base(Some(Path::new("/nonexistent/regras.json"))).is_err());
    }

    #[test]
    fn cli_parses_serve_subcommand() {
        let cli = Cli::try_parse_from(["coffee-expert", "serve", "--addr", "127.0.0.1:8080"]).unwrap();
        match cli.command {
            Some(Command::Serve { addr }) => assert_eq!(addr, "127.0.0.1:8080"),
            other => panic!("subcomando inesperado: {:?}", other),
        }
    }
}
