//! Unary operator implementations.

use rill_ir::UnaryOp;

use crate::errors::{integer_overflow, type_mismatch};
use crate::{EvalResult, Value};

/// Evaluate `op value`.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match op {
        UnaryOp::Neg => match value {
            Value::Int(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("negation")),
            other => Err(type_mismatch("integer", other.kind())),
        },
        UnaryOp::Not => Ok(Value::bool(!value.is_truthy())),
    }
}
