//! Native functions visible to every program.
//!
//! Builtins are consulted after the environment chain, so a user binding
//! named `len` shadows the builtin. None of them mutates its arguments:
//! the array helpers return new arrays.

use crate::errors::{expected_array, unsupported_argument, wrong_builtin_args, EvalError};
use crate::object::{BuiltinFunction, Object};
use crate::print_handler::PrintHandlerImpl;

type BuiltinResult = Result<Object, EvalError>;

const BUILTINS: [BuiltinFunction; 9] = [
    BuiltinFunction { name: "len", func: len },
    BuiltinFunction { name: "first", func: first },
    BuiltinFunction { name: "last", func: last },
    BuiltinFunction { name: "pop_front", func: pop_front },
    BuiltinFunction { name: "pop_back", func: pop_back },
    BuiltinFunction { name: "push_back", func: push_back },
    BuiltinFunction { name: "push_front", func: push_front },
    BuiltinFunction { name: "merge", func: merge },
    BuiltinFunction { name: "echo", func: echo },
];

/// The builtin called `name`, if any.
pub fn lookup(name: &str) -> Option<BuiltinFunction> {
    BUILTINS.iter().find(|b| b.name == name).copied()
}

fn expect_arity(args: &[Object], want: usize, label: &'static str) -> Result<(), EvalError> {
    if args.len() == want {
        Ok(())
    } else {
        Err(wrong_builtin_args(args.len(), label))
    }
}

fn array_arg<'a>(builtin: &'static str, arg: &'a Object) -> Result<&'a [Object], EvalError> {
    match arg {
        Object::Array(items) => Ok(items),
        other => Err(expected_array(builtin, other.type_name())),
    }
}

/// Byte length of a string or element count of an array.
fn len(args: &[Object], _: &PrintHandlerImpl) -> BuiltinResult {
    expect_arity(args, 1, "1")?;
    let n = match &args[0] {
        Object::String(s) => s.len(),
        Object::Array(items) => items.len(),
        other => return Err(unsupported_argument("len", other.type_name())),
    };
    Ok(Object::Integer(i64::try_from(n).unwrap_or(i64::MAX)))
}

fn first(args: &[Object], _: &PrintHandlerImpl) -> BuiltinResult {
    expect_arity(args, 1, "1")?;
    let items = array_arg("first", &args[0])?;
    Ok(items.first().cloned().unwrap_or(Object::Null))
}

fn last(args: &[Object], _: &PrintHandlerImpl) -> BuiltinResult {
    expect_arity(args, 1, "1")?;
    let items = array_arg("last", &args[0])?;
    Ok(items.last().cloned().unwrap_or(Object::Null))
}

/// Array without its first element; `null` when empty.
fn pop_front(args: &[Object], _: &PrintHandlerImpl) -> BuiltinResult {
    expect_arity(args, 1, "1")?;
    let items = array_arg("pop_front", &args[0])?;
    Ok(match items.split_first() {
        Some((_, rest)) => Object::array(rest.to_vec()),
        None => Object::Null,
    })
}

/// Array without its last element; `null` when empty.
fn pop_back(args: &[Object], _: &PrintHandlerImpl) -> BuiltinResult {
    expect_arity(args, 1, "1")?;
    let items = array_arg("pop_back", &args[0])?;
    Ok(match items.split_last() {
        Some((_, rest)) => Object::array(rest.to_vec()),
        None => Object::Null,
    })
}

fn push_back(args: &[Object], _: &PrintHandlerImpl) -> BuiltinResult {
    expect_arity(args, 2, "2")?;
    let items = array_arg("push_back", &args[0])?;
    let mut out = Vec::with_capacity(items.len() + 1);
    out.extend_from_slice(items);
    out.push(args[1].clone());
    Ok(Object::array(out))
}

fn push_front(args: &[Object], _: &PrintHandlerImpl) -> BuiltinResult {
    expect_arity(args, 2, "2")?;
    let items = array_arg("push_front", &args[0])?;
    let mut out = Vec::with_capacity(items.len() + 1);
    out.push(args[1].clone());
    out.extend_from_slice(items);
    Ok(Object::array(out))
}

/// Concatenate two or more arrays.
fn merge(args: &[Object], _: &PrintHandlerImpl) -> BuiltinResult {
    if args.len() < 2 {
        return Err(wrong_builtin_args(args.len(), "at least 2"));
    }
    let mut out = Vec::new();
    for arg in args {
        out.extend_from_slice(array_arg("merge", arg)?);
    }
    Ok(Object::array(out))
}

/// Print each argument on its own line; returns how many were printed.
fn echo(args: &[Object], print: &PrintHandlerImpl) -> BuiltinResult {
    for arg in args {
        print.println(&arg.inspect());
    }
    Ok(Object::Integer(i64::try_from(args.len()).unwrap_or(i64::MAX)))
}

#[cfg(test)]
mod tests;
