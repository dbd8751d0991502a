//! Prefix operators.

use apl_ir::UnaryOp;

use crate::errors::{integer_overflow, unknown_prefix_operator, EvalError};
use crate::Object;

pub fn evaluate_unary(op: UnaryOp, operand: &Object) -> Result<Object, EvalError> {
    match op {
        UnaryOp::Not => Ok(Object::Boolean(!operand.is_truthy())),
        UnaryOp::Neg => match operand {
            Object::Integer(v) => v
                .checked_neg()
                .map(Object::Integer)
                .ok_or_else(|| integer_overflow("negation")),
            other => Err(unknown_prefix_operator(op, other.type_name())),
        },
    }
}
