//! Binary operator implementations.
//!
//! Direct enum dispatch over the closed value set. `and`/`or` are handled
//! here without short-circuiting; the interpreter short-circuits before it
//! gets this far.

use std::cmp::Ordering;
use std::rc::Rc;

use rill_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, invalid_binary_op, modulo_by_zero};
use crate::{EvalResult, Value};

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate `left op right`.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => return Ok(Value::bool(left.is_truthy() && right.is_truthy())),
        BinaryOp::Or => return Ok(Value::bool(left.is_truthy() || right.is_truthy())),
        _ => {}
    }

    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op)
            .ok_or_else(|| invalid_binary_op(op.as_symbol(), left.kind(), right.kind())),
        _ if left.kind() == right.kind() => match op {
            BinaryOp::Eq => Ok(Value::bool(left == right)),
            BinaryOp::NotEq => Ok(Value::bool(left != right)),
            _ => Err(invalid_binary_op(op.as_symbol(), left.kind(), right.kind())),
        },
        _ => Err(invalid_binary_op(op.as_symbol(), left.kind(), right.kind())),
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(modulo_by_zero())
            } else {
                checked_arith(a.checked_rem(b), "remainder")
            }
        }
        _ => Ok(compare(a.cmp(&b), op)),
    }
}

fn eval_string_binary(a: &Rc<str>, b: &Rc<str>, op: BinaryOp) -> Option<Value> {
    match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
            joined.push_str(a);
            joined.push_str(b);
            Some(Value::Str(Rc::from(joined)))
        }
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => Some(compare(a.cmp(b), op)),
        _ => None,
    }
}

/// Comparison result as an integer truth value. `op` must be a comparison.
fn compare(ordering: Ordering, op: BinaryOp) -> Value {
    let holds = match op {
        BinaryOp::Eq => ordering.is_eq(),
        BinaryOp::NotEq => ordering.is_ne(),
        BinaryOp::Lt => ordering.is_lt(),
        BinaryOp::LtEq => ordering.is_le(),
        BinaryOp::Gt => ordering.is_gt(),
        BinaryOp::GtEq => ordering.is_ge(),
        _ => false,
    };
    Value::bool(holds)
}
