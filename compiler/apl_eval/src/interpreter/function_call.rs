//! Calls to closures and builtins.

use apl_ir::CallExpression;

use super::Interpreter;
use crate::errors::{
    not_callable, recursion_limit_exceeded, wrong_function_args, ControlAction, EvalError,
    EvalResult,
};
use crate::object::FunctionObject;
use crate::{Environment, Object};

impl Interpreter {
    /// Callee first, then arguments left to right.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = %call.function, args = call.arguments.len()))]
    pub(super) fn eval_call(&mut self, call: &CallExpression, env: &Environment) -> EvalResult {
        let callee = self.eval_expression(&call.function, env)?;
        let args = self.eval_expressions(&call.arguments, env)?;
        self.apply_function(&callee, args)
    }

    /// Invoke a callable value with already evaluated arguments.
    pub fn apply_function(&mut self, callee: &Object, args: Vec<Object>) -> EvalResult {
        match callee {
            Object::Function(func) => self.call_function(func, args),
            Object::Builtin(builtin) => Ok((builtin.func)(&args, &self.print)?),
            other => Err(not_callable(other.type_name()).into()),
        }
    }

    /// Bind parameters in a scope enclosed by the closure's environment and
    /// run the body. A `return` stops here.
    fn call_function(&mut self, func: &FunctionObject, args: Vec<Object>) -> EvalResult {
        if args.len() != func.parameters.len() {
            return Err(wrong_function_args(func.parameters.len(), args.len()).into());
        }
        self.check_recursion_limit()?;

        let call_env = Environment::enclosed(&func.env);
        for (param, arg) in func.parameters.iter().zip(args) {
            call_env.set(param.name.clone(), arg);
        }

        self.call_depth += 1;
        let result = self.eval_block(&func.body, &call_env);
        self.call_depth -= 1;

        match result {
            Ok(value) | Err(ControlAction::Return(value)) => Ok(value),
            Err(err) => Err(err),
        }
    }

    #[inline]
    fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if self.call_depth >= self.max_call_depth {
            Err(recursion_limit_exceeded(self.max_call_depth))
        } else {
            Ok(())
        }
    }

    /// Current nesting of user function calls.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }
}
