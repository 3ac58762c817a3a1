//! User function invocation.

use rill_ir::Name;
use rill_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{arity_mismatch, undefined_function};
use crate::exec::ExecOutcome;
use crate::{EvalError, Value};

impl Interpreter<'_> {
    /// Call a user function with already-evaluated arguments.
    ///
    /// The body runs in a fresh scope holding only the parameters; globals
    /// stay visible, caller locals do not. Returns `None` when the body
    /// finishes without `return`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(name = self.interner.lookup(name), depth = self.call_stack.depth())
    )]
    pub fn call_function(
        &mut self,
        name: Name,
        args: Vec<Value>,
    ) -> Result<Option<Value>, EvalError> {
        let display_name = self.interner.lookup(name);
        let Some(func) = self.functions.lookup(name) else {
            return Err(undefined_function(display_name));
        };
        if func.arity() != args.len() {
            return Err(arity_mismatch(display_name, func.arity(), args.len()));
        }

        self.call_stack.push(name)?;
        self.env.push_scope();
        for (&param, arg) in func.params.iter().zip(args) {
            self.env.assign(param, arg);
        }

        let result = ensure_sufficient_stack(|| self.exec_suite(func.body));

        self.env.pop_scope();
        self.call_stack.pop();

        match result {
            Ok(ExecOutcome::Return(value)) => Ok(Some(value)),
            Ok(ExecOutcome::Completed) => Ok(None),
            Err(err) => Err(err.with_frame(display_name)),
        }
    }
}
