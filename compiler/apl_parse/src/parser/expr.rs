//! Expression grammar: the Pratt loop and its prefix/infix parse functions.

use std::rc::Rc;

use apl_ir::{
    ArrayLiteral, AssignExpression, BlockStatement, BooleanLiteral, CallExpression, Expression,
    ExpressionStatement, FunctionLiteral, Identifier, IfExpression, IndexExpression,
    InfixExpression, IntegerLiteral, PrefixExpression, Statement, StringLiteral, Token,
    TokenKind, UnaryOp,
};
use apl_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Parser;
use crate::precedence::{binary_op, compound_op};
use crate::{ParseError, Precedence};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parse an expression whose operators bind tighter than `precedence`.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        ensure_sufficient_stack(|| {
            let Some(prefix) = self.prefix_fns.get(&self.cur.kind).copied() else {
                let err = ParseError::no_prefix_parse_fn(self.cur.kind, self.cur.span);
                self.push_error(err);
                return None;
            };
            trace!(kind = %self.cur.kind, ?precedence, "prefix");
            let mut left = prefix(self)?;

            while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
                let Some(infix) = self.infix_fns.get(&self.peek.kind).copied() else {
                    return Some(left);
                };
                self.next_token();
                trace!(kind = %self.cur.kind, "infix");
                left = infix(self, left)?;
            }
            Some(left)
        })
    }

    // Prefix parse functions

    pub(super) fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(
            self.cur.literal.clone(),
            self.cur.span,
        )))
    }

    pub(super) fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.cur.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral {
                value,
                span: self.cur.span,
            })),
            Err(_) => {
                let err = ParseError::invalid_integer(&self.cur.literal, self.cur.span);
                self.push_error(err);
                None
            }
        }
    }

    pub(super) fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::String(StringLiteral {
            value: self.cur.literal.clone(),
            span: self.cur.span,
        }))
    }

    pub(super) fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(BooleanLiteral {
            value: self.cur_is(TokenKind::True),
            span: self.cur.span,
        }))
    }

    /// `!<expr>` or `-<expr>`
    pub(super) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let start = self.cur.span;
        let op = if self.cur_is(TokenKind::Bang) {
            UnaryOp::Not
        } else {
            UnaryOp::Neg
        };
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        let span = start.merge(right.span());
        Some(Expression::Prefix(PrefixExpression {
            op,
            right: Box::new(right),
            span,
        }))
    }

    pub(super) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expr)
    }

    /// `if (<cond>) { .. }`, optionally followed by `else { .. }` or an
    /// `elif (<cond>) { .. }` chain.
    ///
    /// Also entered on `elif`, which parses the same way.
    pub(super) fn parse_if_expression(&mut self) -> Option<Expression> {
        let start = self.cur.span;
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else if self.peek_is(TokenKind::Elif) {
            self.next_token();
            let nested = ensure_sufficient_stack(|| self.parse_if_expression())?;
            let span = nested.span();
            Some(BlockStatement {
                statements: vec![Statement::Expression(ExpressionStatement {
                    expression: nested,
                    span,
                })],
                span,
            })
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            condition: Box::new(condition),
            consequence,
            alternative,
            span: start.merge(self.cur_span()),
        }))
    }

    /// `fun(<params>) { <body> }`
    pub(super) fn parse_function_literal(&mut self) -> Option<Expression> {
        let start = self.cur.span;
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();
        Some(Expression::Function(FunctionLiteral {
            parameters,
            body: Rc::new(body),
            span: start.merge(self.cur_span()),
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }
        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.cur.literal.clone(), self.cur.span));
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.cur.literal.clone(), self.cur.span));
        }
        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    pub(super) fn parse_array_literal(&mut self) -> Option<Expression> {
        let start = self.cur.span;
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expression::Array(ArrayLiteral {
            elements,
            span: start.merge(self.cur_span()),
        }))
    }

    /// Comma-separated expressions up to `end`; the current token is the
    /// opening delimiter.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut items = Vec::new();
        if self.peek_is(end) {
            self.next_token();
            return Some(items);
        }
        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(end)?;
        Some(items)
    }

    // Infix parse functions

    pub(super) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let kind = self.cur.kind;
        let Some(op) = binary_op(kind) else {
            let err = ParseError::no_prefix_parse_fn(kind, self.cur.span);
            self.push_error(err);
            return None;
        };
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        let span = left.span().merge(right.span());
        Some(Expression::Infix(InfixExpression {
            left: Box::new(left),
            op,
            right: Box::new(right),
            span,
        }))
    }

    /// `<ident> = <expr>` and the compound forms. Right-associative.
    pub(super) fn parse_assign_expression(&mut self, left: Expression) -> Option<Expression> {
        let op = compound_op(self.cur.kind);
        let Expression::Identifier(target) = &left else {
            let err = ParseError::invalid_assignment_target(&left, left.span());
            self.push_error(err);
            return None;
        };
        let target = target.clone();
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        let span = target.span.merge(value.span());
        Some(Expression::Assign(AssignExpression {
            target,
            op,
            value: Box::new(value),
            span,
        }))
    }

    /// `<callee>(<args>)`
    pub(super) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        let span = function.span().merge(self.cur_span());
        Some(Expression::Call(CallExpression {
            function: Box::new(function),
            arguments,
            span,
        }))
    }

    /// `<left>[<index>]`
    pub(super) fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;
        let span = left.span().merge(self.cur_span());
        Some(Expression::Index(IndexExpression {
            left: Box::new(left),
            index: Box::new(index),
            span,
        }))
    }
}
