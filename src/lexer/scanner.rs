//! Scanner over the raw source text
//!
//! [`Scanner`] is a lazy iterator wrapping the logos lexer. It attaches
//! lexemes, byte spans, and 1-based line numbers to the raw token kinds, and
//! turns unmatched characters into [`LexicalError`] items instead of
//! aborting: the offending character is skipped and scanning continues, so
//! one pass can surface every lexical problem in the input.

use crate::lexer::tokens::{Token, TokenKind};
use logos::Logos;
use std::fmt;

/// A character that belongs to no token class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    pub character: char,
    /// 1-based source line
    pub line: usize,
    /// Byte offset in the source text
    pub offset: usize,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "illegal character '{}' at line {}",
            self.character, self.line
        )
    }
}

impl std::error::Error for LexicalError {}

/// Lazy token stream over one source string.
///
/// Restartable by constructing a new `Scanner` over the same text; the
/// scanner itself holds no state beyond its position in the input.
pub struct Scanner<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    source: &'a str,
    cursor: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            cursor: 0,
            line: 1,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        // Newlines only ever occur in skipped whitespace, never inside a token
        self.line += self.source[self.cursor..span.start].matches('\n').count();
        self.cursor = span.end;
        Some(match result {
            Ok(kind) => Ok(Token {
                kind,
                lexeme: self.inner.slice().to_string(),
                line: self.line,
                span,
            }),
            Err(()) => {
                let character = self.source[span.start..].chars().next().unwrap_or('\u{fffd}');
                Err(LexicalError {
                    character,
                    line: self.line,
                    offset: span.start,
                })
            }
        })
    }
}

/// Convenience function to scan a whole source string, collecting the tokens
/// and every lexical error found along the way
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexicalError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    for item in Scanner::new(source) {
        match item {
            Ok(token) => tokens.push(token),
            Err(error) => errors.push(error),
        }
    }
    (tokens, errors)
}
