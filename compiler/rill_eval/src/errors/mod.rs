//! Evaluation errors.
//!
//! Every evaluation step returns `Result<_, EvalError>`; the first error
//! aborts the run. Only the driver turns an error into a process exit.
//!
//! Construct errors with the factory functions below rather than by hand,
//! so messages stay consistent across call sites.

use std::fmt;

use crate::ValueKind;

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Coarse grouping of error kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A value of the wrong kind reached an operation.
    TypeMismatch,
    /// A malformed statement or argument list.
    Structural,
    /// An operation applied to a kind that has no such operation.
    UnsupportedOperation,
    /// Everything else detected while running (lookups, bounds, arithmetic).
    Runtime,
}

/// Typed error category with the data needed to render the message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Type mismatches
    #[error("array index must be an integer, got {got}")]
    IndexNotInteger { got: ValueKind },
    #[error("array value not of compatible types: cannot store {got} in {array}")]
    IncompatibleArrayValue { array: ValueKind, got: ValueKind },
    #[error("members must be of the same type: cannot mix {got} into {array}")]
    MixedArrayMembers { array: ValueKind, got: ValueKind },
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: &'static str, got: ValueKind },
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    InvalidBinaryOp {
        op: &'static str,
        left: ValueKind,
        right: ValueKind,
    },

    // Structural
    #[error("mismatched elif clauses: {tests} tests but {suites} suites")]
    MismatchedElifs { tests: usize, suites: usize },
    #[error("append() requires an element")]
    MissingAppendElement,
    #[error("range() takes 1 to 3 arguments, got {count}")]
    InvalidRangeArity { count: usize },
    #[error("range() step must not be zero")]
    ZeroRangeStep,

    // Unsupported operations
    #[error("append() is not supported for {got}")]
    AppendNotSupported { got: ValueKind },
    #[error("pop is not supported for {got}")]
    PopNotSupported { got: ValueKind },

    // Runtime
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },
    #[error("{name} expects {expected} {}, got {got}", argument_noun(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
    #[error("pop from empty {kind}")]
    PopFromEmpty { kind: ValueKind },
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("function {name} did not return a value")]
    MissingReturnValue { name: String },
    #[error("maximum call depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IndexNotInteger { .. }
            | Self::IncompatibleArrayValue { .. }
            | Self::MixedArrayMembers { .. }
            | Self::TypeMismatch { .. }
            | Self::InvalidBinaryOp { .. } => ErrorCategory::TypeMismatch,
            Self::MismatchedElifs { .. }
            | Self::MissingAppendElement
            | Self::InvalidRangeArity { .. }
            | Self::ZeroRangeStep => ErrorCategory::Structural,
            Self::AppendNotSupported { .. } | Self::PopNotSupported { .. } => {
                ErrorCategory::UnsupportedOperation
            }
            Self::UndefinedVariable { .. }
            | Self::UndefinedFunction { .. }
            | Self::ArityMismatch { .. }
            | Self::IndexOutOfBounds { .. }
            | Self::PopFromEmpty { .. }
            | Self::DivisionByZero
            | Self::ModuloByZero
            | Self::IntegerOverflow { .. }
            | Self::MissingReturnValue { .. }
            | Self::StackOverflow { .. } => ErrorCategory::Runtime,
        }
    }
}

fn argument_noun(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// Function names active when an error escaped, innermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<String>,
}

impl EvalBacktrace {
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "call backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {frame}")?;
        }
        Ok(())
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub backtrace: EvalBacktrace,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            backtrace: EvalBacktrace::default(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Record that the error passed out of function `name`.
    #[must_use]
    pub fn with_frame(mut self, name: impl Into<String>) -> Self {
        self.backtrace.frames.push(name.into());
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Type mismatches

#[cold]
pub fn index_not_integer(got: ValueKind) -> EvalError {
    EvalErrorKind::IndexNotInteger { got }.into()
}

#[cold]
pub fn incompatible_array_value(array: ValueKind, got: ValueKind) -> EvalError {
    EvalErrorKind::IncompatibleArrayValue { array, got }.into()
}

#[cold]
pub fn mixed_array_members(array: ValueKind, got: ValueKind) -> EvalError {
    EvalErrorKind::MixedArrayMembers { array, got }.into()
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: ValueKind) -> EvalError {
    EvalErrorKind::TypeMismatch { expected, got }.into()
}

#[cold]
pub fn invalid_binary_op(op: &'static str, left: ValueKind, right: ValueKind) -> EvalError {
    EvalErrorKind::InvalidBinaryOp { op, left, right }.into()
}

// Structural

#[cold]
pub fn mismatched_elifs(tests: usize, suites: usize) -> EvalError {
    EvalErrorKind::MismatchedElifs { tests, suites }.into()
}

#[cold]
pub fn missing_append_element() -> EvalError {
    EvalErrorKind::MissingAppendElement.into()
}

#[cold]
pub fn invalid_range_arity(count: usize) -> EvalError {
    EvalErrorKind::InvalidRangeArity { count }.into()
}

#[cold]
pub fn zero_range_step() -> EvalError {
    EvalErrorKind::ZeroRangeStep.into()
}

// Unsupported operations

#[cold]
pub fn append_not_supported(got: ValueKind) -> EvalError {
    EvalErrorKind::AppendNotSupported { got }.into()
}

#[cold]
pub fn pop_not_supported(got: ValueKind) -> EvalError {
    EvalErrorKind::PopNotSupported { got }.into()
}

// Runtime

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    }
    .into()
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalErrorKind::IndexOutOfBounds { index, len }.into()
}

#[cold]
pub fn pop_from_empty(kind: ValueKind) -> EvalError {
    EvalErrorKind::PopFromEmpty { kind }.into()
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalErrorKind::ModuloByZero.into()
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

#[cold]
pub fn missing_return_value(name: &str) -> EvalError {
    EvalErrorKind::MissingReturnValue {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalErrorKind::StackOverflow { depth }.into()
}

#[cfg(test)]
mod tests;
