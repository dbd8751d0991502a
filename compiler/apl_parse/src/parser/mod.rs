//! Parser state, token cursor and dispatch tables.

mod expr;
mod stmt;

use apl_ir::{Expression, Program, Span, Token, TokenKind};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{ParseError, ParseOutput, Precedence};

/// Parses an expression starting at the current token.
pub type PrefixParseFn<I> = fn(&mut Parser<I>) -> Option<Expression>;

/// Continues `left` with the operator at the current token.
pub type InfixParseFn<I> = fn(&mut Parser<I>, Expression) -> Option<Expression>;

/// Single-pass parser over a token stream with one token of lookahead.
pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    cur: Token,
    peek: Token,
    errors: Vec<ParseError>,
    prefix_fns: FxHashMap<TokenKind, PrefixParseFn<I>>,
    infix_fns: FxHashMap<TokenKind, InfixParseFn<I>>,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        let mut parser = Parser {
            tokens,
            cur: Token::eof(0),
            peek: Token::eof(0),
            errors: Vec::new(),
            prefix_fns: FxHashMap::default(),
            infix_fns: FxHashMap::default(),
        };
        parser.register_parse_fns();
        parser.next_token();
        parser.next_token();
        parser
    }

    fn register_parse_fns(&mut self) {
        let prefix: [(TokenKind, PrefixParseFn<I>); 11] = [
            (TokenKind::Ident, Self::parse_identifier),
            (TokenKind::Int, Self::parse_integer_literal),
            (TokenKind::String, Self::parse_string_literal),
            (TokenKind::True, Self::parse_boolean),
            (TokenKind::False, Self::parse_boolean),
            (TokenKind::Bang, Self::parse_prefix_expression),
            (TokenKind::Minus, Self::parse_prefix_expression),
            (TokenKind::LParen, Self::parse_grouped_expression),
            (TokenKind::If, Self::parse_if_expression),
            (TokenKind::Function, Self::parse_function_literal),
            (TokenKind::LBracket, Self::parse_array_literal),
        ];
        self.prefix_fns.extend(prefix);

        let binary = [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::LtEq,
            TokenKind::GtEq,
        ];
        for kind in binary {
            self.infix_fns
                .insert(kind, Self::parse_infix_expression as InfixParseFn<I>);
        }
        let assign = [
            TokenKind::Assign,
            TokenKind::PlusAssign,
            TokenKind::MinusAssign,
            TokenKind::StarAssign,
            TokenKind::SlashAssign,
        ];
        for kind in assign {
            self.infix_fns
                .insert(kind, Self::parse_assign_expression as InfixParseFn<I>);
        }
        self.infix_fns
            .insert(TokenKind::LParen, Self::parse_call_expression);
        self.infix_fns
            .insert(TokenKind::LBracket, Self::parse_index_expression);
    }

    /// Parse statements until `Eof`.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }
        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    // Cursor

    fn next_token(&mut self) {
        let end = self.peek.span.end;
        let next = self.tokens.next().unwrap_or_else(|| Token::eof(end));
        self.cur = std::mem::replace(&mut self.peek, next);
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if the peek token is `kind`; otherwise record an error.
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            let err = ParseError::unexpected_token(kind, self.peek.kind, self.peek.span);
            self.push_error(err);
            None
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur.kind)
    }

    fn cur_span(&self) -> Span {
        self.cur.span
    }

    fn push_error(&mut self, error: ParseError) {
        debug!(%error, span = %error.span, "parse error");
        self.errors.push(error);
    }
}
