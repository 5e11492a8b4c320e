//! Lexer module for the sentence grammar
//!
//! Converts raw input text into an ordered sequence of classified tokens.
//! Rule priority matters: the multi-word greeting/farewell literals must be
//! tried before the generic capitalized-word rule, because both overlap the
//! same character class ("Hola" would otherwise lex as a `Subject`). See
//! [`tokens`] for the rules and [`scanner`] for position tracking and
//! lexical-error recovery.

pub mod literals;
pub mod scanner;
pub mod tokens;

pub use scanner::{tokenize, LexicalError, Scanner};
pub use tokens::{Token, TokenKind};
