//! Tree-walking interpreter.
//!
//! Every `eval_*` method returns [`EvalResult`]; `return` and runtime errors
//! travel as `Err(ControlAction)` so `?` short-circuits enclosing blocks.
//! [`Interpreter::evaluate`] collapses the channel back into an [`Object`].

mod function_call;

use std::rc::Rc;

use apl_ir::{AssignExpression, BlockStatement, Expression, Program, Statement};
use apl_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::builtins;
use crate::environment::AssignError;
use crate::errors::{undefined_variable, ControlAction, EvalResult};
use crate::object::FunctionObject;
use crate::operators::{evaluate_binary, evaluate_index};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::unary_operators::evaluate_unary;
use crate::{Environment, Object};

/// Default maximum nesting of user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// A node the interpreter can start from.
#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Node::Statement(statement)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Node::Expression(expression)
    }
}

pub struct Interpreter {
    print: SharedPrintHandler,
    call_depth: usize,
    max_call_depth: usize,
}

/// Configures an [`Interpreter`].
pub struct InterpreterBuilder {
    print: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print = Some(handler);
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print: self.print.unwrap_or_else(stdout_handler),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::builder().build()
    }
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new() -> Self {
        Interpreter::default()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder {
            print: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Evaluate `node` in `env`.
    ///
    /// A top-level `return` yields its value; a runtime error yields
    /// [`Object::Error`].
    pub fn evaluate<'a>(&mut self, node: impl Into<Node<'a>>, env: &Environment) -> Object {
        let result = match node.into() {
            Node::Program(program) => self.eval_program(program, env),
            Node::Statement(statement) => self.eval_statement(statement, env),
            Node::Expression(expression) => self.eval_expression(expression, env),
        };
        match result {
            Ok(value) | Err(ControlAction::Return(value)) => value,
            Err(ControlAction::Error(err)) => Object::Error(err),
        }
    }

    fn eval_program(&mut self, program: &Program, env: &Environment) -> EvalResult {
        let mut result = Object::Null;
        for statement in &program.statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    /// Blocks share the enclosing scope.
    fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        let mut result = Object::Null;
        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    fn eval_statement(&mut self, statement: &Statement, env: &Environment) -> EvalResult {
        match statement {
            Statement::Expression(stmt) => self.eval_expression(&stmt.expression, env),
            Statement::Def(def) => {
                let value = self.eval_expression(&def.value, env)?;
                trace!(name = %def.name, value = %value, "def");
                env.set(def.name.name.clone(), value);
                Ok(Object::Null)
            }
            Statement::Return(ret) => {
                let value = match &ret.value {
                    Some(expr) => self.eval_expression(expr, env)?,
                    None => Object::Null,
                };
                Err(ControlAction::Return(value))
            }
            Statement::Block(block) => ensure_sufficient_stack(|| self.eval_block(block, env)),
        }
    }

    /// Errors raised without a location get the span of the innermost
    /// expression that produced them.
    fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
            .map_err(|action| action.with_span(expr.span()))
    }

    fn eval_expression_inner(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => Self::eval_identifier(&ident.name, env),
            Expression::Integer(lit) => Ok(Object::Integer(lit.value)),
            Expression::String(lit) => Ok(Object::string(lit.value.as_str())),
            Expression::Boolean(lit) => Ok(Object::Boolean(lit.value)),
            Expression::Array(array) => {
                let elements = self.eval_expressions(&array.elements, env)?;
                Ok(Object::array(elements))
            }
            Expression::Prefix(prefix) => {
                let right = self.eval_expression(&prefix.right, env)?;
                Ok(evaluate_unary(prefix.op, &right)?)
            }
            Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left, env)?;
                let right = self.eval_expression(&infix.right, env)?;
                Ok(evaluate_binary(infix.op, &left, &right)?)
            }
            Expression::If(if_expr) => {
                let condition = self.eval_expression(&if_expr.condition, env)?;
                if condition.is_truthy() {
                    self.eval_block(&if_expr.consequence, env)
                } else if let Some(alternative) = &if_expr.alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Object::Null)
                }
            }
            Expression::Function(func) => Ok(Object::Function(Rc::new(FunctionObject {
                parameters: func.parameters.clone(),
                body: Rc::clone(&func.body),
                env: env.clone(),
            }))),
            Expression::Call(call) => self.eval_call(call, env),
            Expression::Index(index) => {
                let left = self.eval_expression(&index.left, env)?;
                let position = self.eval_expression(&index.index, env)?;
                Ok(evaluate_index(&left, &position)?)
            }
            Expression::Assign(assign) => self.eval_assign(assign, env),
        }
    }

    /// Left to right, stopping at the first error.
    fn eval_expressions(
        &mut self,
        exprs: &[Expression],
        env: &Environment,
    ) -> Result<Vec<Object>, ControlAction> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }

    /// Environment chain first, then builtins.
    fn eval_identifier(name: &str, env: &Environment) -> EvalResult {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }
        match builtins::lookup(name) {
            Some(builtin) => Ok(Object::Builtin(builtin)),
            None => Err(undefined_variable(name).into()),
        }
    }

    /// Rebinds the nearest existing binding, or defines one in `env`.
    fn eval_assign(&mut self, assign: &AssignExpression, env: &Environment) -> EvalResult {
        let name = assign.target.name.as_str();
        let value = match assign.op {
            Some(op) => {
                let current = Self::eval_identifier(name, env)?;
                let rhs = self.eval_expression(&assign.value, env)?;
                evaluate_binary(op, &current, &rhs)?
            }
            None => self.eval_expression(&assign.value, env)?,
        };
        match env.assign(name, value.clone()) {
            Ok(()) => {}
            Err(AssignError::Undefined) => env.set(name, value.clone()),
        }
        trace!(name, value = %value, "assign");
        Ok(value)
    }
}
