//! Iterative destruction of deep trees.
//!
//! The derived drop glue recurses once per nesting level and overflows the
//! stack on inputs like `!!!!...true`. Both impls below move children onto
//! a work list instead, so every node is dropped with leaf-only children.

use std::mem;
use std::rc::Rc;

use super::{BlockStatement, BooleanLiteral, Expression, Statement};
use crate::Span;

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl Drop for BlockStatement {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        drain_block(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl Expression {
    /// Leaf left behind in a node whose child was moved out.
    fn vacant() -> Expression {
        Expression::Boolean(BooleanLiteral {
            value: false,
            span: Span::DUMMY,
        })
    }

    /// Move every direct sub-expression (including those inside blocks)
    /// into `out`.
    fn take_children(&mut self, out: &mut Vec<Expression>) {
        let take = |child: &mut Box<Expression>| mem::replace(&mut **child, Expression::vacant());
        match self {
            Expression::Identifier(_)
            | Expression::Integer(_)
            | Expression::String(_)
            | Expression::Boolean(_) => {}
            Expression::Array(array) => out.append(&mut array.elements),
            Expression::Prefix(prefix) => out.push(take(&mut prefix.right)),
            Expression::Infix(infix) => {
                out.push(take(&mut infix.left));
                out.push(take(&mut infix.right));
            }
            Expression::If(if_expr) => {
                out.push(take(&mut if_expr.condition));
                drain_block(&mut if_expr.consequence, out);
                if let Some(alternative) = &mut if_expr.alternative {
                    drain_block(alternative, out);
                }
            }
            // A body still shared with a closure is torn down by its last owner.
            Expression::Function(func) => {
                if let Some(body) = Rc::get_mut(&mut func.body) {
                    drain_block(body, out);
                }
            }
            Expression::Call(call) => {
                out.push(take(&mut call.function));
                out.append(&mut call.arguments);
            }
            Expression::Index(index) => {
                out.push(take(&mut index.left));
                out.push(take(&mut index.index));
            }
            Expression::Assign(assign) => out.push(take(&mut assign.value)),
        }
    }
}

/// Empty `block`, flattening nested blocks, and collect its expressions.
fn drain_block(block: &mut BlockStatement, out: &mut Vec<Expression>) {
    let mut statements = mem::take(&mut block.statements);
    while let Some(statement) = statements.pop() {
        match statement {
            Statement::Def(def) => out.push(def.value),
            Statement::Return(ret) => out.extend(ret.value),
            Statement::Expression(stmt) => out.push(stmt.expression),
            Statement::Block(mut inner) => statements.append(&mut inner.statements),
        }
    }
}
