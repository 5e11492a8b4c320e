//! The per-component breakdown of an accepted sentence
//!
//! Mirrors the four columns the presentation layer displays: component name,
//! matched lexeme, the production that justified it, and the short grammar
//! symbol.

use crate::lexer::literals;
use serde::Serialize;

const PUNCTUATION_RULE: &str = "Símbolo de puntuación";

/// One row of the breakdown table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub component: &'static str,
    pub lexeme: String,
    pub rule: String,
    pub symbol: &'static str,
}

impl BreakdownRow {
    pub fn saludo(lexeme: &str) -> Self {
        Self {
            component: "SALUDO",
            lexeme: lexeme.to_string(),
            rule: literals::GREETING_RULE.clone(),
            symbol: "SAL",
        }
    }

    pub fn coma() -> Self {
        Self {
            component: "COMA",
            lexeme: ",".to_string(),
            rule: PUNCTUATION_RULE.to_string(),
            symbol: ",",
        }
    }

    pub fn sujeto(lexeme: &str) -> Self {
        Self {
            component: "SUJETO",
            lexeme: lexeme.to_string(),
            rule: "S → [A-Z][a-z]+".to_string(),
            symbol: "S",
        }
    }

    pub fn verbo(lexeme: &str) -> Self {
        Self {
            component: "VERBO",
            lexeme: lexeme.to_string(),
            rule: "V → [a-z]+".to_string(),
            symbol: "V",
        }
    }

    /// The complement row joins its words with single spaces
    pub fn complemento(words: &[&str]) -> Self {
        Self {
            component: "COMPLEMENTO",
            lexeme: words.join(" "),
            rule: "C → PALABRA C | PALABRA".to_string(),
            symbol: "C",
        }
    }

    pub fn punto() -> Self {
        Self {
            component: "PUNTO",
            lexeme: ".".to_string(),
            rule: PUNCTUATION_RULE.to_string(),
            symbol: ".",
        }
    }

    pub fn despedida(lexeme: &str) -> Self {
        Self {
            component: "DESPEDIDA",
            lexeme: lexeme.to_string(),
            rule: literals::FAREWELL_RULE.clone(),
            symbol: "D",
        }
    }
}
