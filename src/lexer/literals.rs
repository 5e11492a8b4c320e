//! The fixed literal vocabulary of the grammar
//!
//! The greeting and farewell alternatives are the only reserved phrases in
//! the language. They are kept here as the single source of truth: the token
//! rules in [`super::tokens`] mirror them, and the production-rule strings
//! shown in the breakdown table are derived from them.

use once_cell::sync::Lazy;

pub const GREETINGS: &[&str] = &["Hola", "Buenos días", "Qué tal"];
pub const FAREWELLS: &[&str] = &["Adiós", "Hasta luego", "Nos vemos", "Chao"];

/// Production text for the SALUDO row, e.g. `SAL → Hola | Buenos días | Qué tal`
pub static GREETING_RULE: Lazy<String> = Lazy::new(|| format!("SAL → {}", GREETINGS.join(" | ")));

/// Production text for the DESPEDIDA row
pub static FAREWELL_RULE: Lazy<String> = Lazy::new(|| format!("D → {}", FAREWELLS.join(" | ")));
