//! APL IR - shared front-end data structures.
//!
//! - [`Span`] for byte ranges in source text
//! - [`Token`] / [`TokenKind`] produced by the lexer
//! - the AST ([`Program`], [`Statement`], [`Expression`]) produced by the
//!   parser and walked by the evaluator
//!
//! Every AST node renders to a canonical, fully parenthesized source form via
//! `Display`; re-parsing that form yields the same tree.

pub mod ast;
mod span;
mod token;

pub use ast::{
    ArrayLiteral, AssignExpression, BinaryOp, BlockStatement, BooleanLiteral, CallExpression,
    DefStatement, Expression, ExpressionStatement, FunctionLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression, Program,
    ReturnStatement, Statement, StringLiteral, UnaryOp,
};
pub use span::{LineCol, Span};
pub use token::{Token, TokenKind};
