//! Evaluator for APL.
//!
//! - [`Object`]: runtime values
//! - [`Environment`]: shared, chained scopes (closures capture them)
//! - [`Interpreter`]: walks the AST; carries the print handler and the
//!   call-depth limit
//! - `builtins`: `len`, `first`, `last`, `pop_front`, `pop_back`,
//!   `push_back`, `push_front`, `merge`, `echo`
//!
//! Runtime errors never panic; they come back as [`Object::Error`].

pub mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod object;
pub mod operators;
pub mod print_handler;
pub mod unary_operators;

pub use environment::{AssignError, Environment, LocalScope, Scope};
pub use errors::{ControlAction, EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder, Node, DEFAULT_MAX_CALL_DEPTH};
pub use object::{BuiltinFn, BuiltinFunction, FunctionObject, Object};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};

/// Evaluate `node` in `env` with a default (stdout) interpreter.
pub fn evaluate<'a>(node: impl Into<Node<'a>>, env: &Environment) -> Object {
    Interpreter::new().evaluate(node, env)
}
