//! Runtime errors and the evaluator's unwinding channel.
//!
//! `EvalErrorKind` carries the structured cause and its user-facing message;
//! the `#[cold]` factory functions below are the construction API.

use std::fmt;

use apl_ir::{BinaryOp, Span, UnaryOp};

use crate::Object;

/// Result of evaluating a node.
///
/// `Err` unwinds: either a `return` travelling to the nearest function
/// boundary or an error travelling to the top.
pub type EvalResult = Result<Object, ControlAction>;

/// Non-local exits, propagated with `?`.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// `return <value>`; unwrapped at the call or program boundary.
    Return(Object),
    /// A runtime error; never unwrapped.
    Error(EvalError),
}

impl ControlAction {
    pub fn is_error(&self) -> bool {
        matches!(self, ControlAction::Error(_))
    }

    /// Attach `span` to an error that has none yet.
    #[must_use]
    pub fn with_span(self, span: Span) -> Self {
        match self {
            ControlAction::Error(err) if err.span.is_none() => {
                ControlAction::Error(err.with_span(span))
            }
            other => other,
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

/// Structured cause of a runtime error. `Display` is the message shown to
/// the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: &'static str,
        operand: &'static str,
    },
    #[error("identifier not found: {name}")]
    UndefinedVariable { name: String },
    #[error("not a function: {type_name}")]
    NotCallable { type_name: &'static str },
    #[error("index operator not supported: {left}[{index}]")]
    IndexNotSupported {
        left: &'static str,
        index: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("wrong number of arguments: want={expected}, got={got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("maximum recursion depth exceeded (limit: {limit})")]
    RecursionLimit { limit: usize },
    #[error("wrong number of arguments. got={got}, want={want}")]
    BuiltinArity { got: usize, want: &'static str },
    #[error("argument to `{builtin}` not supported, got {type_name}")]
    UnsupportedArgument {
        builtin: &'static str,
        type_name: &'static str,
    },
    #[error("argument to `{builtin}` must be ARRAY, got {type_name}")]
    ExpectedArray {
        builtin: &'static str,
        type_name: &'static str,
    },
}

/// A runtime error, optionally located in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Operators

#[cold]
pub fn type_mismatch(left: &'static str, op: BinaryOp, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        left,
        op: op.as_symbol(),
        right,
    })
}

#[cold]
pub fn unknown_infix_operator(left: &'static str, op: BinaryOp, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfixOperator {
        left,
        op: op.as_symbol(),
        right,
    })
}

#[cold]
pub fn unknown_prefix_operator(op: UnaryOp, operand: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefixOperator {
        op: op.as_symbol(),
        operand,
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn index_not_supported(left: &'static str, index: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotSupported { left, index })
}

// Names and calls

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn wrong_function_args(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

// Builtins

#[cold]
pub fn wrong_builtin_args(got: usize, want: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BuiltinArity { got, want })
}

#[cold]
pub fn unsupported_argument(builtin: &'static str, type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedArgument { builtin, type_name })
}

#[cold]
pub fn expected_array(builtin: &'static str, type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpectedArray { builtin, type_name })
}
