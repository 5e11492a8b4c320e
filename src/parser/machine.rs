//! Deterministic state walk over the token sequence
//!
//! The grammar is a single fixed production plus a right-recursive
//! complement:
//!
//! ```text
//! O → SALUDO , SUJETO VERBO COMPLEMENTO . DESPEDIDA
//! COMPLEMENTO → PALABRA COMPLEMENTO | PALABRA
//! ```
//!
//! A hand-written walk with one token of lookahead recognizes it in a single
//! left-to-right pass, no backtracking: each state names the position inside
//! the production, and the complement loops in place until the period
//! arrives. The first token inconsistent with the current state (or running
//! out of input early, or input left over after the farewell) is terminal
//! for the parse.

use crate::lexer::{Token, TokenKind};
use crate::parser::breakdown::BreakdownRow;
use std::fmt;

/// Position inside the sentence production
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    AfterGreeting,
    AfterComma,
    AfterSubject,
    AfterVerb,
    InComplement,
    AfterPeriod,
    Accept,
}

impl State {
    /// What the grammar expects next in this state
    fn expecting(self) -> &'static str {
        match self {
            State::Start => "SALUDO",
            State::AfterGreeting => "COMA",
            State::AfterComma => "SUJETO",
            State::AfterSubject => "VERBO",
            State::AfterVerb => "COMPLEMENTO",
            State::InComplement => "PALABRA or PUNTO",
            State::AfterPeriod => "DESPEDIDA",
            State::Accept => "end of input",
        }
    }
}

/// First point where the token sequence diverges from the grammar.
/// `offending` is `None` when the input ended before the grammar was
/// satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub offending: Option<Token>,
}

impl SyntaxError {
    fn unexpected(state: State, token: &Token) -> Self {
        Self {
            message: format!(
                "syntax error at '{}' ({}): expected {}",
                token.lexeme,
                token.kind.name(),
                state.expecting()
            ),
            offending: Some(token.clone()),
        }
    }

    fn at_end_of_input(state: State) -> Self {
        Self {
            message: format!(
                "syntax error at end of input: expected {}",
                state.expecting()
            ),
            offending: None,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Run the token sequence through the state walk. On acceptance, returns the
/// seven breakdown rows in sentence order; on the first mismatch, the
/// diagnostic for that position.
pub fn parse(tokens: &[Token]) -> Result<Vec<BreakdownRow>, SyntaxError> {
    let mut state = State::Start;
    let mut rows = Vec::with_capacity(7);
    let mut complement: Vec<&str> = Vec::new();

    for token in tokens {
        state = match (state, token.kind) {
            (State::Start, TokenKind::Greeting) => {
                rows.push(BreakdownRow::saludo(&token.lexeme));
                State::AfterGreeting
            }
            (State::AfterGreeting, TokenKind::Comma) => {
                rows.push(BreakdownRow::coma());
                State::AfterComma
            }
            (State::AfterComma, TokenKind::Subject) => {
                rows.push(BreakdownRow::sujeto(&token.lexeme));
                State::AfterSubject
            }
            // the word right after the subject plays the verb role by position
            (State::AfterSubject, TokenKind::Word) => {
                rows.push(BreakdownRow::verbo(&token.lexeme));
                State::AfterVerb
            }
            (State::AfterVerb | State::InComplement, TokenKind::Word) => {
                complement.push(token.lexeme.as_str());
                State::InComplement
            }
            (State::InComplement, TokenKind::Period) => {
                rows.push(BreakdownRow::complemento(&complement));
                rows.push(BreakdownRow::punto());
                State::AfterPeriod
            }
            (State::AfterPeriod, TokenKind::Farewell) => {
                rows.push(BreakdownRow::despedida(&token.lexeme));
                State::Accept
            }
            _ => return Err(SyntaxError::unexpected(state, token)),
        };
    }

    if state == State::Accept {
        Ok(rows)
    } else {
        Err(SyntaxError::at_end_of_input(state))
    }
}
