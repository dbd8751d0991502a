//! Lexer for APL.
//!
//! [`Lexer`] is pull-based: the parser asks for one token at a time with
//! [`Lexer::next_token`]. Past the end of input it keeps answering
//! [`TokenKind::Eof`], while the [`Iterator`] view yields exactly one `Eof`
//! and then stops.
//!
//! Lexing never fails. Characters outside the language become
//! [`TokenKind::Illegal`] tokens carrying that character.

mod keywords;
mod raw_token;

use apl_ir::{Span, Token, TokenKind};
use logos::Logos;

use raw_token::RawToken;

/// Lex `source` lazily.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Pull-based token source over a borrowed input string.
pub struct Lexer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            raw: RawToken::lexer(source),
            finished: false,
        }
    }

    /// Produce the next token; `Eof` forever once input is exhausted.
    pub fn next_token(&mut self) -> Token {
        match self.raw.next() {
            Some(Ok(raw)) => self.convert(raw),
            Some(Err(())) => self.illegal(),
            None => Token::eof(u32::try_from(self.source.len()).unwrap_or(u32::MAX)),
        }
    }

    fn convert(&self, raw: RawToken) -> Token {
        let text = self.raw.slice();
        let span = Span::from_range(self.raw.span());
        let kind = match raw {
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq | RawToken::LtGt => TokenKind::NotEq,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::PlusAssign => TokenKind::PlusAssign,
            RawToken::MinusAssign => TokenKind::MinusAssign,
            RawToken::StarAssign => TokenKind::StarAssign,
            RawToken::SlashAssign => TokenKind::SlashAssign,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Int => TokenKind::Int,
            RawToken::String => {
                return Token::new(TokenKind::String, string_contents(text), span);
            }
            RawToken::Word => keywords::lookup(text).unwrap_or(TokenKind::Ident),
        };
        Token::new(kind, text, span)
    }

    /// One unrecognized character.
    fn illegal(&mut self) -> Token {
        let start = self.raw.span().start;
        let ch = self.source.get(start..).and_then(|rest| rest.chars().next());
        let Some(ch) = ch else {
            return Token::new(TokenKind::Illegal, "", Span::from_range(self.raw.span()));
        };
        // Keep the scanner on a char boundary after a multi-byte character.
        let end = start + ch.len_utf8();
        let scanned = self.raw.span().end;
        if scanned < end {
            self.raw.bump(end - scanned);
        }
        Token::new(
            TokenKind::Illegal,
            ch.to_string(),
            Span::from_range(start..end.max(scanned)),
        )
    }
}

/// Strip the opening quote and, when present, the closing one.
fn string_contents(text: &str) -> &str {
    let inner = text.strip_prefix('"').unwrap_or(text);
    inner.strip_suffix('"').unwrap_or(inner)
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests;
