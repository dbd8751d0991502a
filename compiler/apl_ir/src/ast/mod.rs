//! Abstract syntax tree.
//!
//! Statements and expressions are closed enums; each node owns its children
//! outright, except function bodies, which are shared with the closures
//! created from them. `Display` (in `display.rs`) produces the canonical
//! source form. Dropping a tree is iterative (`teardown.rs`), so nesting
//! depth is bounded only by memory.

mod display;
mod operators;
mod teardown;

use std::rc::Rc;

pub use operators::{BinaryOp, UnaryOp};

use crate::Span;

/// Root of a parsed source unit.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Whether the final statement is a `def`.
    pub fn ends_with_def(&self) -> bool {
        matches!(self.statements.last(), Some(Statement::Def(_)))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Statement {
    Def(DefStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    /// A bare `{ ... }` at statement position. Shares the enclosing scope.
    Block(BlockStatement),
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Def(s) => s.span,
            Statement::Return(s) => s.span,
            Statement::Expression(s) => s.span,
            Statement::Block(s) => s.span,
        }
    }
}

/// `def <name> = <value>;`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DefStatement {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

/// `return [<value>];`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

/// `{ ... }`
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Array(ArrayLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Index(IndexExpression),
    Assign(AssignExpression),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier(e) => e.span,
            Expression::Integer(e) => e.span,
            Expression::String(e) => e.span,
            Expression::Boolean(e) => e.span,
            Expression::Array(e) => e.span,
            Expression::Prefix(e) => e.span,
            Expression::Infix(e) => e.span,
            Expression::If(e) => e.span,
            Expression::Function(e) => e.span,
            Expression::Call(e) => e.span,
            Expression::Index(e) => e.span,
            Expression::Assign(e) => e.span,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntegerLiteral {
    pub value: i64,
    pub span: Span,
}

/// String contents, quotes stripped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expression>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrefixExpression {
    pub op: UnaryOp,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InfixExpression {
    pub left: Box<Expression>,
    pub op: BinaryOp,
    pub right: Box<Expression>,
    pub span: Span,
}

/// `if (<condition>) { .. } [else { .. }]`
///
/// `elif` chains are represented as an alternative block holding a single
/// nested `if`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
    pub span: Span,
}

/// `fun(<params>) { <body> }`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

/// `<left>[<index>]`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexExpression {
    pub left: Box<Expression>,
    pub index: Box<Expression>,
    pub span: Span,
}

/// `<target> = <value>`, or a compound form such as `<target> += <value>`
/// when `op` is set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssignExpression {
    pub target: Identifier,
    pub op: Option<BinaryOp>,
    pub value: Box<Expression>,
    pub span: Span,
}
