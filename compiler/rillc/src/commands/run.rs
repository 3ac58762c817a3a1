//! The `run` command: load a program and evaluate it.

use std::path::Path;

use rill_eval::{stdout_handler, EvalError, Interpreter, SharedPrintHandler, Value};
use rill_ir::Program;

use crate::reporting::{report_eval_error, report_load_error};
use crate::{load_program, EXIT_EVAL_ERROR};

/// Options for `rill run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Function to call, without arguments, after the top level finishes.
    pub entry: Option<String>,
    /// Override for the interpreter's call-depth limit.
    pub max_depth: Option<usize>,
}

/// Run the program at `path`, writing output to stdout.
pub fn run_file(path: &str, options: &RunOptions) -> i32 {
    let program = match load_program(Path::new(path)) {
        Ok(program) => program,
        Err(err) => return report_load_error(&err),
    };
    match execute(&program, options, stdout_handler()) {
        Ok(_) => 0,
        Err(err) => {
            report_eval_error(&err);
            EXIT_EVAL_ERROR
        }
    }
}

/// Evaluate the top-level suite, then the entry function if one is named.
///
/// A value returned by the entry function is written to `output` on its
/// own line. Returns the last value produced by a `return`.
#[tracing::instrument(level = "debug", skip_all, fields(entry = options.entry.as_deref()))]
pub fn execute(
    program: &Program,
    options: &RunOptions,
    output: SharedPrintHandler,
) -> Result<Option<Value>, EvalError> {
    let mut builder = Interpreter::builder(program).print_handler(output.clone());
    if let Some(depth) = options.max_depth {
        builder = builder.max_call_depth(depth);
    }
    let mut interpreter = builder.build();

    let result = interpreter.run()?;
    let Some(entry) = options.entry.as_deref() else {
        return Ok(result);
    };
    let value = interpreter.run_function(entry, Vec::new())?;
    if let Some(value) = &value {
        output.write_line(&value.to_string());
    }
    Ok(value)
}
