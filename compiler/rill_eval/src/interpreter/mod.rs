//! Tree-walking interpreter for Rill programs.
//!
//! The interpreter owns the variable environment and borrows the program's
//! arena and interner. Statements run through `crate::exec`, expressions
//! through [`Interpreter::eval_expr`], and user functions through
//! [`Interpreter::call_function`].

mod builder;
mod expr;
mod function_call;

pub use builder::InterpreterBuilder;

use rill_ir::{Arena, Name, Program, StringInterner, SuiteId};

use crate::call_stack::CallStack;
use crate::environment::IncrementError;
use crate::errors::{integer_overflow, type_mismatch, undefined_variable};
use crate::exec::ExecOutcome;
use crate::{Environment, EvalError, EvalResult, FunctionTable, SharedPrintHandler, Value};

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Executes one [`Program`].
pub struct Interpreter<'a> {
    pub(crate) arena: &'a Arena,
    pub(crate) interner: &'a StringInterner,
    pub(crate) env: Environment,
    pub(crate) functions: FunctionTable<'a>,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) call_stack: CallStack,
    main: SuiteId,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with stdout output and default limits.
    pub fn new(program: &'a Program) -> Self {
        InterpreterBuilder::new(program).build()
    }

    pub fn builder(program: &'a Program) -> InterpreterBuilder<'a> {
        InterpreterBuilder::new(program)
    }

    /// Run the top-level suite.
    ///
    /// Returns the value of a top-level `return`, if one ran.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self) -> Result<Option<Value>, EvalError> {
        match self.exec_suite(self.main)? {
            ExecOutcome::Completed => Ok(None),
            ExecOutcome::Return(value) => Ok(Some(value)),
        }
    }

    /// Call a function by its source name.
    pub fn run_function(&mut self, name: &str, args: Vec<Value>) -> Result<Option<Value>, EvalError> {
        let name = self.interner.intern(name);
        self.call_function(name, args)
    }

    pub fn arena(&self) -> &'a Arena {
        self.arena
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn functions(&self) -> &FunctionTable<'a> {
        &self.functions
    }

    /// Current function-call depth (0 at top level).
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Output captured by a buffer print handler.
    pub fn print_output(&self) -> String {
        self.print_handler.output()
    }

    /// Value bound to a variable by its source name.
    pub fn variable(&self, name: &str) -> Option<Value> {
        self.env.lookup(self.interner.intern(name))
    }

    pub(crate) fn lookup_var(&self, name: Name) -> EvalResult {
        self.env
            .lookup(name)
            .ok_or_else(|| undefined_variable(self.interner.lookup(name)))
    }

    pub(crate) fn increment_error(&self, name: Name, err: IncrementError) -> EvalError {
        match err {
            IncrementError::Undefined => undefined_variable(self.interner.lookup(name)),
            IncrementError::NotInteger(kind) => type_mismatch("integer", kind),
            IncrementError::Overflow => integer_overflow("loop increment"),
        }
    }
}
