//! Grammar validator for the sentence language
//!
//! Consumes the token sequence produced by [`crate::lexer`] and decides
//! membership in the fixed grammar. The original generated LALR table is
//! deliberately not reproduced here; for a grammar of four nonterminals an
//! explicit state walk ([`machine`]) is equivalent and auditable.

pub mod breakdown;
pub mod machine;

pub use breakdown::BreakdownRow;
pub use machine::{parse, SyntaxError};
