//! Token definitions for the sentence grammar
//!
//! Tokens are defined with the logos derive macro. The multi-word greeting
//! and farewell literals carry an explicit priority so that they win over the
//! generic `Subject` rule for inputs like "Hola", which both rules match at
//! the same length. Longest match still applies: "Holaa" is a `Subject`,
//! "Hasta luego" is a single `Farewell` spanning the embedded space.

use logos::Logos;
use std::ops::Range;

/// All token classes produced by the lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("Hola", priority = 10)]
    #[token("Buenos días", priority = 10)]
    #[token("Qué tal", priority = 10)]
    Greeting,

    #[token("Adiós", priority = 10)]
    #[token("Hasta luego", priority = 10)]
    #[token("Nos vemos", priority = 10)]
    #[token("Chao", priority = 10)]
    Farewell,

    #[token(",")]
    Comma,

    #[token(".")]
    Period,

    // Capitalized word (proper noun), unless claimed by a literal above
    #[regex("[A-Z][a-z]+")]
    Subject,

    #[regex("[a-z]+")]
    Word,
}

impl TokenKind {
    /// Grammar-facing name of this token class, as shown in diagnostics
    /// and in the token listing
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Greeting => "SALUDO",
            TokenKind::Farewell => "DESPEDIDA",
            TokenKind::Comma => "COMA",
            TokenKind::Period => "PUNTO",
            TokenKind::Subject => "SUJETO",
            TokenKind::Word => "PALABRA",
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, TokenKind::Word)
    }
}

/// A classified lexical unit: kind, matched text, and source position.
/// Immutable once produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line
    pub line: usize,
    /// Byte range in the source text
    pub span: Range<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_literals() {
        let mut lexer = TokenKind::lexer("Hola");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Greeting)));
        assert_eq!(lexer.next(), None);

        let mut lexer = TokenKind::lexer("Qué tal");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Greeting)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_multiword_literal_is_one_token() {
        let mut lexer = TokenKind::lexer("Buenos días");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Greeting)));
        assert_eq!(lexer.slice(), "Buenos días");
        assert_eq!(lexer.next(), None);

        let mut lexer = TokenKind::lexer("Hasta luego");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Farewell)));
        assert_eq!(lexer.slice(), "Hasta luego");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_literal_beats_subject_at_same_length() {
        let mut lexer = TokenKind::lexer("Chao");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Farewell)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_longer_subject_beats_literal_prefix() {
        let mut lexer = TokenKind::lexer("Holaa");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Subject)));
        assert_eq!(lexer.slice(), "Holaa");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_punctuation() {
        let mut lexer = TokenKind::lexer(", .");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Comma)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Period)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_words_and_subject() {
        let mut lexer = TokenKind::lexer("Maria corre");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Subject)));
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Word)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unknown_character_is_error() {
        let mut lexer = TokenKind::lexer("corre 7");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Word)));
        assert_eq!(lexer.next(), Some(Err(())));
        assert_eq!(lexer.next(), None);
    }
}
