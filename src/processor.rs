//! Validation entry point and output formatting
//!
//! [`validate`] is the single function exposed to presentation layers: pure,
//! reentrant, no shared state between calls. Lexical errors found during
//! scanning take precedence over the grammar stage; every lexical error is
//! collected in one pass, and the first is surfaced in the result.

use crate::lexer::tokenize;
use crate::parser::{parse, BreakdownRow};
use serde::Serialize;

/// Marker used for `offending` when the input ended early
pub const EOF_MARKER: &str = "EOF";

/// Outcome of validating one input string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidationResult {
    Valid { breakdown: Vec<BreakdownRow> },
    Invalid { message: String, offending: String },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// Render the result as a plain four-column table (valid) or a single
    /// error line (invalid)
    pub fn render_table(&self) -> String {
        match self {
            ValidationResult::Valid { breakdown } => render_rows(breakdown),
            ValidationResult::Invalid { message, .. } => message.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Validate one sentence against the fixed grammar
pub fn validate(text: &str) -> ValidationResult {
    let (tokens, lexical_errors) = tokenize(text);
    if let Some(error) = lexical_errors.first() {
        return ValidationResult::Invalid {
            message: error.to_string(),
            offending: error.character.to_string(),
        };
    }
    match parse(&tokens) {
        Ok(breakdown) => ValidationResult::Valid { breakdown },
        Err(error) => {
            let offending = match &error.offending {
                Some(token) => token.lexeme.clone(),
                None => EOF_MARKER.to_string(),
            };
            ValidationResult::Invalid {
                message: error.message,
                offending,
            }
        }
    }
}

const HEADERS: [&str; 4] = ["Componente", "Lexema", "Regla", "Símbolo"];

fn render_rows(rows: &[BreakdownRow]) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row_cells(row).iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    let mut out = render_line(&HEADERS.map(String::from), &widths);
    for row in rows {
        out.push('\n');
        out.push_str(&render_line(&row_cells(row), &widths));
    }
    out
}

fn row_cells(row: &BreakdownRow) -> [String; 4] {
    [
        row.component.to_string(),
        row.lexeme.clone(),
        row.rule.clone(),
        row.symbol.to_string(),
    ]
}

fn render_line(cells: &[String; 4], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
