//! # oracion
//!
//! Lexer and validator for one fixed Spanish sentence grammar:
//!
//! ```text
//! O → SALUDO , SUJETO VERBO COMPLEMENTO . DESPEDIDA
//! ```
//!
//! The crate is strictly layered: [`lexer`] turns raw text into classified
//! tokens, [`parser`] decides membership in the grammar with an explicit
//! state walk, and [`processor::validate`] ties the two together into the
//! single entry point presentation layers call.
//!
//! ```
//! use oracion::validate;
//!
//! assert!(validate("Hola, Maria corre en el parque. Adiós").is_valid());
//! assert!(!validate("Hola Maria corre en el parque. Adiós").is_valid());
//! ```

pub mod lexer;
pub mod parser;
pub mod processor;

pub use processor::{validate, ValidationResult};
