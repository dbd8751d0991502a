//! Infix and index operators.
//!
//! Dispatch order for `l op r`:
//! 1. two integers: arithmetic or comparison
//! 2. two strings: concatenation only
//! 3. `==` / `!=`: identity
//! 4. anything else is a type mismatch or an unknown operator

use apl_ir::BinaryOp;

use crate::errors::{
    division_by_zero, index_not_supported, integer_overflow, type_mismatch,
    unknown_infix_operator, EvalError,
};
use crate::Object;

pub fn evaluate_binary(op: BinaryOp, left: &Object, right: &Object) -> Result<Object, EvalError> {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_int_binary(op, *a, *b),
        (Object::String(a), Object::String(b)) => {
            if op == BinaryOp::Add {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Object::string(joined))
            } else {
                Err(unknown_infix_operator("STRING", op, "STRING"))
            }
        }
        _ => match op {
            BinaryOp::Eq => Ok(Object::Boolean(left.identical(right))),
            BinaryOp::NotEq => Ok(Object::Boolean(!left.identical(right))),
            _ if left.type_name() != right.type_name() => {
                Err(type_mismatch(left.type_name(), op, right.type_name()))
            }
            _ => Err(unknown_infix_operator(
                left.type_name(),
                op,
                right.type_name(),
            )),
        },
    }
}

fn eval_int_binary(op: BinaryOp, a: i64, b: i64) -> Result<Object, EvalError> {
    let value = match op {
        BinaryOp::Add => checked_arith(a, b, i64::checked_add, "addition")?,
        BinaryOp::Sub => checked_arith(a, b, i64::checked_sub, "subtraction")?,
        BinaryOp::Mul => checked_arith(a, b, i64::checked_mul, "multiplication")?,
        BinaryOp::Div => checked_div(a, b)?,
        BinaryOp::Eq => return Ok(Object::Boolean(a == b)),
        BinaryOp::NotEq => return Ok(Object::Boolean(a != b)),
        BinaryOp::Lt => return Ok(Object::Boolean(a < b)),
        BinaryOp::Gt => return Ok(Object::Boolean(a > b)),
        BinaryOp::LtEq => return Ok(Object::Boolean(a <= b)),
        BinaryOp::GtEq => return Ok(Object::Boolean(a >= b)),
    };
    Ok(Object::Integer(value))
}

#[inline]
fn checked_arith(
    a: i64,
    b: i64,
    op: fn(i64, i64) -> Option<i64>,
    operation: &'static str,
) -> Result<i64, EvalError> {
    op(a, b).ok_or_else(|| integer_overflow(operation))
}

/// Truncating division. `i64::MIN / -1` overflows.
#[inline]
fn checked_div(a: i64, b: i64) -> Result<i64, EvalError> {
    if b == 0 {
        return Err(division_by_zero());
    }
    a.checked_div(b).ok_or_else(|| integer_overflow("division"))
}

/// `left[index]`. Out-of-range indices, negative ones included, give `null`.
pub fn evaluate_index(left: &Object, index: &Object) -> Result<Object, EvalError> {
    match (left, index) {
        (Object::Array(items), Object::Integer(i)) => Ok(usize::try_from(*i)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .unwrap_or(Object::Null)),
        _ => Err(index_not_supported(left.type_name(), index.type_name())),
    }
}

#[cfg(test)]
mod tests;
