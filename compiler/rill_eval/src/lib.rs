#![deny(clippy::arithmetic_side_effects)]
//! Rill Eval - statement execution engine for Rill programs.
//!
//! Walks a [`rill_ir::Program`] directly:
//! - `Interpreter`: owns the environment and runs suites and expressions
//! - `exec`: one handler per statement kind, `ExecOutcome` for early return
//! - `Environment`: global scope plus one scope per active call
//! - `RangeCursor`: drives `for` loops
//! - `evaluate_binary`/`evaluate_unary`: checked operator dispatch
//! - `PrintHandler`: where `print` output goes
//!
//! All failures are `EvalError` values; nothing here exits the process.

mod call_stack;
mod environment;
pub mod errors;
pub mod exec;
mod function_table;
pub mod interpreter;
mod operators;
mod print_handler;
mod range;
mod unary_operators;
mod value;

pub use call_stack::CallStack;
pub use environment::{Environment, IncrementError, Scope};
pub use errors::{EvalBacktrace, EvalError, EvalErrorKind, EvalResult, ErrorCategory};
pub use exec::{ExecOutcome, ExecResult};
pub use function_table::FunctionTable;
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandler,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use range::RangeCursor;
pub use unary_operators::evaluate_unary;
pub use value::{ArrayElement, SharedArray, Value, ValueKind};

#[cfg(test)]
mod tests;
