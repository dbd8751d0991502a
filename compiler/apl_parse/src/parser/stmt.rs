//! Statement grammar.

use apl_ir::{
    BlockStatement, DefStatement, ExpressionStatement, Identifier, ReturnStatement, Statement,
    Token, TokenKind,
};
use apl_stack::ensure_sufficient_stack;

use super::Parser;
use crate::Precedence;

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parse one statement. On return the current token is its last token.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur.kind {
            TokenKind::Def => self.parse_def_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::LBrace => Some(Statement::Block(ensure_sufficient_stack(|| {
                self.parse_block_statement()
            }))),
            // Empty statement.
            TokenKind::Semicolon => None,
            _ => self.parse_expression_statement(),
        }
    }

    /// `def <ident> = <expr> [;]`
    fn parse_def_statement(&mut self) -> Option<Statement> {
        let start = self.cur.span;
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cur.literal.clone(), self.cur.span);
        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Some(Statement::Def(DefStatement {
            name,
            value,
            span: start.merge(self.cur.span),
        }))
    }

    /// `return [<expr>] [;]`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let start = self.cur.span;
        let value = if self.peek_is(TokenKind::Semicolon)
            || self.peek_is(TokenKind::RBrace)
            || self.peek_is(TokenKind::Eof)
        {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Some(Statement::Return(ReturnStatement {
            value,
            span: start.merge(self.cur.span),
        }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        let span = expression.span().merge(self.cur_span());
        Some(Statement::Expression(ExpressionStatement { expression, span }))
    }

    /// Statements up to the matching `}`, or to end of input.
    ///
    /// Entered with the current token on `{`; leaves it on `}` (or `Eof`).
    pub(super) fn parse_block_statement(&mut self) -> BlockStatement {
        let start = self.cur.span;
        let mut statements = Vec::new();
        self.next_token();
        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }
        BlockStatement {
            statements,
            span: start.merge(self.cur.span),
        }
    }
}
