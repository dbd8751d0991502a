//! Runtime values.

use std::fmt;
use std::rc::Rc;

use apl_ir::{BlockStatement, Identifier};

use crate::errors::EvalError;
use crate::print_handler::PrintHandlerImpl;
use crate::Environment;

/// Native function signature. Output goes through the print handler.
pub type BuiltinFn = fn(&[Object], &PrintHandlerImpl) -> Result<Object, EvalError>;

/// A runtime value.
///
/// Strings, arrays and functions are reference counted; cloning an `Object`
/// never copies their contents.
#[derive(Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Array(Rc<Vec<Object>>),
    Null,
    Function(Rc<FunctionObject>),
    Builtin(BuiltinFunction),
    Error(EvalError),
}

/// A closure: parameters, body and the environment it was created in.
///
/// The body is shared with the literal it was evaluated from.
pub struct FunctionObject {
    pub parameters: Vec<Identifier>,
    pub body: Rc<BlockStatement>,
    pub env: Environment,
}

#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl Object {
    pub fn string(value: impl Into<Rc<str>>) -> Self {
        Object::String(value.into())
    }

    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(Rc::new(elements))
    }

    /// Type tag used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Array(_) => "ARRAY",
            Object::Null => "NULL",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Error(_) => "ERROR",
        }
    }

    /// Only `false` and `null` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Identity used by `==`/`!=` outside the integer case.
    ///
    /// Booleans and null compare by value; strings, arrays and functions by
    /// reference; builtins by name. Values of different types are never
    /// identical.
    pub fn identical(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::String(a), Object::String(b)) => Rc::ptr_eq(a, b),
            (Object::Array(a), Object::Array(b)) => Rc::ptr_eq(a, b),
            (Object::Function(a), Object::Function(b)) => Rc::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }

    /// Text shown to the user for this value.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(v) => write!(f, "{v}"),
            Object::Boolean(v) => write!(f, "{v}"),
            Object::String(v) => f.write_str(v),
            Object::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Object::Null => f.write_str("null"),
            Object::Function(func) => {
                f.write_str("fun(")?;
                for (i, param) in func.parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") {}", func.body)
            }
            Object::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Object::Error(err) => write!(f, "ERROR: {err}"),
        }
    }
}

// Closures can reach themselves through their environment, so `Debug`
// prints source text rather than walking captured scopes.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(v) => write!(f, "Integer({v})"),
            Object::Boolean(v) => write!(f, "Boolean({v})"),
            Object::String(v) => write!(f, "String({v:?})"),
            Object::Array(items) => f.debug_tuple("Array").field(&**items).finish(),
            Object::Null => f.write_str("Null"),
            Object::Function(_) => write!(f, "Function({self})"),
            Object::Builtin(builtin) => write!(f, "Builtin({})", builtin.name),
            Object::Error(err) => write!(f, "Error({err})"),
        }
    }
}

/// Structural equality, for tests and host code. Functions compare by
/// reference.
impl PartialEq for Object {
    fn eq(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Error(a), Object::Error(b)) => a == b,
            _ => self.identical(other),
        }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Integer(value)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::string(value)
    }
}
