//! Parse errors.

use std::fmt;

use apl_ir::{Span, TokenKind};

/// A recoverable syntax error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }

    pub fn unexpected_token(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        ParseError::new(
            format!("expected next token to be `{expected}`, got `{found}`"),
            span,
        )
    }

    pub fn no_prefix_parse_fn(kind: TokenKind, span: Span) -> Self {
        ParseError::new(format!("no prefix parse function for {kind}"), span)
    }

    pub fn invalid_integer(literal: &str, span: Span) -> Self {
        ParseError::new(format!("could not parse {literal:?} as integer"), span)
    }

    pub fn invalid_assignment_target(target: impl fmt::Display, span: Span) -> Self {
        ParseError::new(format!("invalid assignment target: {target}"), span)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}
