//! # Console — Questionário Interativo
//!
//! Pergunta cada fato da base no terminal, aceita `Y`/`S` (sim) ou `N`
//! (não) e imprime o relatório do [`Orchestrator`] em duas seções:
//!
//! ```text
//! Recomendações com base nas suas preferências:
//! - Espresso
//!
//! Verificando recomendações específicas:
//! - Espresso é recomendado
//! - Cappuccino não é recomendado
//! ```
//!
//! Entrada e saída são genéricas (`BufRead`/`Write`) para que o laço
//! possa ser testado sem terminal.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::orchestrator::{Consultation, Orchestrator};

/// Executa o questionário completo e imprime o relatório.
///
/// # Erros
///
/// Falha se a entrada terminar antes de todas as perguntas serem
/// respondidas, ou se a escrita na saída falhar.
pub fn run<R: BufRead, W: Write>(
    orchestrator: &Orchestrator,
    input: &mut R,
    output: &mut W,
) -> Result<Consultation> {
    let mut answers = HashMap::new();
    for question in &orchestrator.rule_base().questions {
        let answer = ask(&question.prompt, input, output)
            .with_context(|| format!("Sem resposta para `{}`", question.fact))?;
        answers.insert(question.fact.clone(), answer);
    }

    let report = orchestrator.consult(&answers);
    render(&report, output)?;
    Ok(report)
}

/// Repete a pergunta até receber uma resposta válida.
fn ask<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("entrada encerrada");
        }
        match line.trim().to_uppercase().as_str() {
            "Y" | "S" => return Ok(true),
            "N" => return Ok(false),
            _ => writeln!(output, "Por favor, responda Y ou N.")?,
        }
    }
}

/// Imprime o relatório de uma consulta.
pub fn render<W: Write>(report: &Consultation, output: &mut W) -> Result<()> {
    for rejected in &report.rejected {
        writeln!(output, "Aviso: {}", rejected)?;
    }

    writeln!(output, "\nRecomendações com base nas suas preferências:")?;
    for rule in &report.triggered {
        writeln!(output, "- {}", rule.label)?;
    }

    writeln!(output, "\nVerificando recomendações específicas:")?;
    for verdict in &report.verdicts {
        match (&verdict.error, verdict.recommended) {
            (Some(error), _) => writeln!(output, "- {} não é recomendado ({})", verdict.label, error)?,
            (None, true) => writeln!(output, "- {} é recomendado", verdict.label)?,
            (None, false) => writeln!(output, "- {} não é recomendado", verdict.label)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::coffee::coffee_rule_base;

    fn run_with(input: &str) -> (Result<Consultation>, String) {
        let orchestrator = Orchestrator::new(coffee_rule_base());
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run(&orchestrator, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn full_session_prints_both_sections() {
        // forte, não cremoso, ... espuma
        let (result, out) = run_with("y\nn\nn\nn\nn\ns\nn\n");
        let report = result.unwrap();
        assert_eq!(report.triggered[0].label, "Espresso");
        assert!(out.contains("Recomendações com base nas suas preferências:\n- Espresso\n"));
        assert!(out.contains("- Espresso é recomendado"));
        assert!(out.contains("- Flat White não é recomendado"));
        assert!(out.contains("Aviso: prioridade 1 já está em uso"));
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let (result, out) = run_with("talvez\ny\nn\nn\nn\nn\nn\nn\nn\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Por favor, responda Y ou N.").count(), 1);
        assert_eq!(out.matches("Você gosta de café forte?").count(), 2);
    }

    #[test]
    fn eof_aborts_with_context() {
        let (result, _) = run_with("y\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("likes_creamy"));
    }
}
