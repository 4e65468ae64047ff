//! # Templates Maud — HTML Server-Side
//!
//! Duas páginas, ambas renderizadas sobre o mesmo [`layout`]:
//!
//! | Função | Descrição |
//! |--------|-----------|
//! | [`questionnaire_page()`] | Formulário com uma pergunta S/N por fato |
//! | [`consultation_page()`] | Relatório de uma consulta |
//!
//! ```text
//! ┌──────────── header ────────────┐
//! │ ☕ Recomendação de Café         │
//! ├────────────────────────────────┤
//! │ Você gosta de café forte?      │
//! │   (•) Sim  ( ) Não             │
//! │ ...                            │
//! │ [Recomendar]                   │
//! └────────────────────────────────┘
//! ```

use maud::{html, Markup, DOCTYPE};

use crate::orchestrator::Consultation;
use crate::rule_base::RuleBase;

const STYLE: &str = "
body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; color: #2b1d14; }
header { border-bottom: 2px solid #6f4e37; margin-bottom: 1rem; }
fieldset { border: none; padding: 0.4rem 0; }
.recommended { color: #2e7d32; }
.not-recommended { color: #8d6e63; }
.warning { color: #b26a00; font-size: 0.9rem; }
";

/// Estrutura comum das páginas.
fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
            }
            body {
                header {
                    h1 { "☕ " (title) }
                }
                main { (content) }
            }
        }
    }
}

/// Formulário com as perguntas da base.
///
/// Cada pergunta vira um par de rádios `yes`/`no` com o nome do fato.
/// Perguntas sem resposta não são enviadas e ficam sem fato.
pub fn questionnaire_page(base: &RuleBase) -> Markup {
    layout(
        &base.name,
        html! {
            form method="post" action="/consult" {
                @for question in &base.questions {
                    fieldset {
                        legend { (question.prompt.trim_end_matches(": ").trim_end_matches(" (Y/N)")) }
                        label {
                            input type="radio" name=(question.fact) value="yes";
                            " Sim"
                        }
                        " "
                        label {
                            input type="radio" name=(question.fact) value="no";
                            " Não"
                        }
                    }
                }
                button type="submit" { "Recomendar" }
            }
        },
    )
}

/// Relatório de uma consulta.
pub fn consultation_page(title: &str, report: &Consultation) -> Markup {
    layout(
        title,
        html! {
            @for rejected in &report.rejected {
                p class="warning" { "⚠️ " (rejected) }
            }
            h2 { "Recomendações com base nas suas preferências" }
            @if report.triggered.is_empty() {
                p { "Nenhuma regra disparou." }
            } @else {
                ul {
                    @for rule in &report.triggered {
                        li title=(rule.condition) { (rule.label) }
                    }
                }
            }
            h2 { "Verificando recomendações específicas" }
            ul {
                @for verdict in &report.verdicts {
                    @if verdict.recommended {
                        li class="recommended" { (verdict.label) " é recomendado" }
                    } @else {
                        li class="not-recommended" {
                            (verdict.label) " não é recomendado"
                            @if let Some(error) = &verdict.error {
                                " (" (error) ")"
                            }
                        }
                    }
                }
            }
            a href="/" { "← Nova consulta" }
        },
    )
}
