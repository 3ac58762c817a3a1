//! `InterpreterBuilder` for configuring an [`Interpreter`].

use rill_ir::Program;

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::call_stack::CallStack;
use crate::{stdout_handler, Environment, FunctionTable, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: output to stdout, empty environment, call depth limited to
/// [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder<'a> {
    program: &'a Program,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            env: None,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Where `print` output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Start from a pre-populated environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Maximum number of nested function calls before `StackOverflow`.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Build the interpreter, registering every function in the program.
    pub fn build(self) -> Interpreter<'a> {
        let program = self.program;
        let functions: FunctionTable<'a> = program.functions.iter().collect();
        tracing::debug!(
            functions = functions.len(),
            max_call_depth = self.max_call_depth,
            "interpreter ready"
        );

        Interpreter {
            arena: &program.arena,
            interner: &*program.interner,
            env: self.env.unwrap_or_default(),
            functions,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(self.max_call_depth),
            main: program.main,
        }
    }
}
