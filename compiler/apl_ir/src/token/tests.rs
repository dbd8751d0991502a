use pretty_assertions::assert_eq;

use super::*;

#[test]
fn diagnostic_names() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::RParen.to_string(), ")");
    assert_eq!(TokenKind::NotEq.to_string(), "!=");
    assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn keyword_classification() {
    assert!(TokenKind::Elif.is_keyword());
    assert!(TokenKind::True.is_keyword());
    assert!(!TokenKind::Ident.is_keyword());
    assert!(!TokenKind::Assign.is_keyword());
}

#[test]
fn eof_is_empty_point() {
    let tok = Token::eof(12);
    assert!(tok.is(TokenKind::Eof));
    assert_eq!(tok.literal, "");
    assert_eq!(tok.span, Span::new(12, 12));
}

#[test]
fn debug_shows_kind_literal_and_span() {
    let tok = Token::new(TokenKind::Int, "42", Span::new(3, 5));
    assert_eq!(format!("{tok:?}"), "Int(\"42\") @ 3..5");
}
