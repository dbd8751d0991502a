//! Canonical source rendering.
//!
//! Operator expressions are fully parenthesized, so precedence is explicit
//! in the output and the text re-parses to the same tree.

use std::fmt::{self, Display, Formatter, Write};

use apl_stack::ensure_sufficient_stack;

use super::{
    ArrayLiteral, AssignExpression, BlockStatement, BooleanLiteral, CallExpression,
    DefStatement, Expression, ExpressionStatement, FunctionLiteral, Identifier, IfExpression,
    IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression, Program,
    ReturnStatement, Statement, StringLiteral,
};

/// Space-separated statements; a non-final expression statement gets a `;`.
fn write_statements(f: &mut Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{stmt}")?;
        if matches!(stmt, Statement::Expression(_)) && i + 1 < statements.len() {
            f.write_char(';')?;
        }
    }
    Ok(())
}

fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Statement::Def(s) => s.fmt(f),
            Statement::Return(s) => s.fmt(f),
            Statement::Expression(s) => s.fmt(f),
            Statement::Block(s) => s.fmt(f),
        })
    }
}

impl Display for DefStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "def {} = {};", self.name, self.value)
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return {value};"),
            None => f.write_str("return;"),
        }
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.expression.fmt(f)
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_statements(f, &self.statements)?;
        f.write_str(" }")
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expression::Identifier(e) => e.fmt(f),
            Expression::Integer(e) => e.fmt(f),
            Expression::String(e) => e.fmt(f),
            Expression::Boolean(e) => e.fmt(f),
            Expression::Array(e) => e.fmt(f),
            Expression::Prefix(e) => e.fmt(f),
            Expression::Infix(e) => e.fmt(f),
            Expression::If(e) => e.fmt(f),
            Expression::Function(e) => e.fmt(f),
            Expression::Call(e) => e.fmt(f),
            Expression::Index(e) => e.fmt(f),
            Expression::Assign(e) => e.fmt(f),
        })
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        write_list(f, &self.elements)?;
        f.write_char(']')
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.op.as_symbol(), self.right)
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op.as_symbol(), self.right)
    }
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.consequence)?;
        if let Some(alt) = &self.alternative {
            write!(f, " else {alt}")?;
        }
        Ok(())
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fun(")?;
        write_list(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        write_list(f, &self.arguments)?;
        f.write_char(')')
    }
}

impl Display for IndexExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

impl Display for AssignExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let op = self.op.map_or("", |op| op.as_symbol());
        write!(f, "({} {op}= {})", self.target, self.value)
    }
}
