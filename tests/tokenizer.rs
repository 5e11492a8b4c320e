//! Integration tests for the lexer
//!
//! Verifies classification priorities, multi-word literal integrity, line
//! tracking, and skip-and-continue recovery through the public scanning API.

use oracion::lexer::{tokenize, Scanner, TokenKind};
use rstest::rstest;

#[rstest]
#[case("Hola", TokenKind::Greeting)]
#[case("Buenos días", TokenKind::Greeting)]
#[case("Qué tal", TokenKind::Greeting)]
#[case("Adiós", TokenKind::Farewell)]
#[case("Hasta luego", TokenKind::Farewell)]
#[case("Nos vemos", TokenKind::Farewell)]
#[case("Chao", TokenKind::Farewell)]
fn test_literal_phrases_lex_as_one_token(#[case] phrase: &str, #[case] kind: TokenKind) {
    let (tokens, errors) = tokenize(phrase);
    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 1, "{phrase:?} split into {tokens:?}");
    assert_eq!(tokens[0].kind, kind);
    assert_eq!(tokens[0].lexeme, phrase);
}

#[rstest]
// capitalized word that is not a reserved phrase
#[case("Maria", TokenKind::Subject)]
// longer than the "Hola" literal, so longest-match wins
#[case("Holaa", TokenKind::Subject)]
// a literal prefix on its own is just a proper noun
#[case("Buenos", TokenKind::Subject)]
#[case("corre", TokenKind::Word)]
fn test_generic_classification(#[case] lexeme: &str, #[case] kind: TokenKind) {
    let (tokens, errors) = tokenize(lexeme);
    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, kind);
    assert_eq!(tokens[0].lexeme, lexeme);
}

#[test]
fn test_whitespace_is_skipped_between_tokens() {
    let (tokens, errors) = tokenize("Hola ,\t Maria");
    assert!(errors.is_empty());
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Greeting, TokenKind::Comma, TokenKind::Subject]
    );
}

#[test]
fn test_newlines_advance_the_line_counter() {
    let (tokens, errors) = tokenize("Hola,\nMaria\ncorre");
    assert!(errors.is_empty());
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 1);
    assert_eq!(tokens[2].line, 2);
    assert_eq!(tokens[3].line, 3);
}

#[test]
fn test_error_positions_and_recovery() {
    let (tokens, errors) = tokenize("corre 9\nsalta #");
    assert_eq!(tokens.len(), 2);
    assert_eq!(errors.len(), 2);
    assert_eq!((errors[0].character, errors[0].line), ('9', 1));
    assert_eq!((errors[1].character, errors[1].line), ('#', 2));
}

#[test]
fn test_scanner_is_lazy_and_restartable() {
    let source = "Nos vemos, Ana";
    let mut scanner = Scanner::new(source);
    let first = scanner.next().expect("one token").expect("no error");
    assert_eq!(first.kind, TokenKind::Farewell);

    // a fresh scanner over the same text starts over
    let replay: Vec<_> = Scanner::new(source).collect();
    assert_eq!(replay.len(), 3);
}
