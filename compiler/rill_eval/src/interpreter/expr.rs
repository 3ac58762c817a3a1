//! Expression evaluation.

use rill_ir::{BinaryOp, ExprId, ExprKind, ExprRange, Name};
use rill_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{
    index_not_integer, index_out_of_bounds, integer_overflow, missing_return_value,
    mixed_array_members, type_mismatch,
};
use crate::{
    evaluate_binary, evaluate_unary, EvalError, EvalResult, SharedArray, Value, ValueKind,
};

impl Interpreter<'_> {
    /// Evaluate an expression to a value.
    pub fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(id))
    }

    fn eval_expr_inner(&mut self, id: ExprId) -> EvalResult {
        let arena = self.arena;
        match *arena.expr(id) {
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(name))),
            ExprKind::Var(name) => self.lookup_var(name),
            ExprKind::Array(items) => self.eval_array_literal(items),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(value, op)
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(op, left, right),
            ExprKind::Index { array, index } => {
                let array = self.eval_expr(array)?;
                let index = self.eval_expr(index)?;
                eval_index(&array, &index)
            }
            ExprKind::Len(operand) => {
                let value = self.eval_expr(operand)?;
                eval_len(&value)
            }
            ExprKind::Call { func, args } => {
                let args = self.eval_exprs(args)?;
                self.call_function(func, args)?
                    .ok_or_else(|| missing_return_value(self.interner.lookup(func)))
            }
        }
    }

    /// Evaluate every expression in `range`, left to right.
    pub(crate) fn eval_exprs(&mut self, range: ExprRange) -> Result<Vec<Value>, EvalError> {
        let arena = self.arena;
        arena
            .expr_list(range)
            .iter()
            .map(|&id| self.eval_expr(id))
            .collect()
    }

    fn eval_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> EvalResult {
        let left = self.eval_expr(left)?;
        match op {
            BinaryOp::And if !left.is_truthy() => Ok(Value::bool(false)),
            BinaryOp::Or if left.is_truthy() => Ok(Value::bool(true)),
            _ => {
                let right = self.eval_expr(right)?;
                evaluate_binary(left, right, op)
            }
        }
    }

    /// `[]` is a null array; otherwise every element must share the first
    /// element's kind.
    fn eval_array_literal(&mut self, items: ExprRange) -> EvalResult {
        let values = self.eval_exprs(items)?;
        let Some(first) = values.first() else {
            return Ok(Value::NullArray);
        };
        match first {
            Value::Int(_) => {
                let ints = values
                    .iter()
                    .map(|v| {
                        v.as_int()
                            .ok_or_else(|| mixed_array_members(ValueKind::NumberArray, v.kind()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::NumberArray(SharedArray::new(ints)))
            }
            Value::Str(_) => {
                let strings = values
                    .iter()
                    .map(|v| match v {
                        Value::Str(s) => Ok(s.clone()),
                        other => Err(mixed_array_members(ValueKind::StringArray, other.kind())),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::StringArray(SharedArray::new(strings)))
            }
            other => Err(type_mismatch("integer or string", other.kind())),
        }
    }

    /// Name of the function a call expression invokes, if it is one.
    pub(crate) fn call_target(&self, id: ExprId) -> Option<(Name, ExprRange)> {
        match *self.arena.expr(id) {
            ExprKind::Call { func, args } => Some((func, args)),
            _ => None,
        }
    }
}

fn eval_index(array: &Value, index: &Value) -> EvalResult {
    let Value::Int(i) = *index else {
        return Err(index_not_integer(index.kind()));
    };
    match array {
        Value::NumberArray(items) => items.get(i).map(Value::Int),
        Value::StringArray(items) => items.get(i).map(Value::Str),
        Value::NullArray => Err(index_out_of_bounds(i, 0)),
        other => Err(type_mismatch("array", other.kind())),
    }
}

fn eval_len(value: &Value) -> EvalResult {
    let len = match value {
        Value::NumberArray(items) => items.len(),
        Value::StringArray(items) => items.len(),
        Value::Str(s) => s.chars().count(),
        Value::NullArray => 0,
        Value::Int(_) => return Err(type_mismatch("array or string", value.kind())),
    };
    i64::try_from(len)
        .map(Value::Int)
        .map_err(|_| integer_overflow("len"))
}
