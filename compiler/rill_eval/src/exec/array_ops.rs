//! `append` and `pop`.

use rill_ir::{ArrayOpKind, ExprId, Name};

use super::{ExecOutcome, ExecResult};
use crate::errors::{
    append_not_supported, missing_append_element, mixed_array_members, pop_not_supported,
};
use crate::interpreter::Interpreter;
use crate::{ArrayElement, EvalError, SharedArray, Value};

impl Interpreter<'_> {
    pub(super) fn exec_array_op(
        &mut self,
        target: Name,
        op: ArrayOpKind,
        operand: Option<ExprId>,
    ) -> ExecResult {
        match op {
            ArrayOpKind::Append => self.exec_append(target, operand)?,
            ArrayOpKind::Pop => self.exec_pop(target, operand)?,
        }
        Ok(ExecOutcome::Completed)
    }

    /// Push onto a typed array, or give a null array its element kind.
    ///
    /// The target is read before the operand is evaluated.
    fn exec_append(&mut self, target: Name, operand: Option<ExprId>) -> Result<(), EvalError> {
        let Some(operand) = operand else {
            return Err(missing_append_element());
        };
        let array = self.lookup_var(target)?;
        let value = self.eval_expr(operand)?;

        match (array, value) {
            (Value::NumberArray(items), Value::Int(n)) => items.push(n),
            (Value::StringArray(items), Value::Str(s)) => items.push(s),
            (array @ (Value::NumberArray(_) | Value::StringArray(_)), value) => {
                return Err(mixed_array_members(array.kind(), value.kind()));
            }
            (Value::NullArray, Value::Int(n)) => {
                self.settle_null_array(target, Value::NumberArray(SharedArray::with_element(n)));
            }
            (Value::NullArray, Value::Str(s)) => {
                self.settle_null_array(target, Value::StringArray(SharedArray::with_element(s)));
            }
            (Value::NullArray, value) => return Err(append_not_supported(value.kind())),
            (other, _) => return Err(append_not_supported(other.kind())),
        }
        Ok(())
    }

    /// Replace a null array with the one-element typed array built from its
    /// first append.
    fn settle_null_array(&mut self, target: Name, array: Value) {
        tracing::debug!(
            variable = self.interner.lookup(target),
            kind = %array.kind(),
            "null array takes its element kind from the first append"
        );
        self.env.rebind(target, array);
    }

    /// Remove the last element, or the one at the operand's index.
    fn exec_pop(&mut self, target: Name, operand: Option<ExprId>) -> Result<(), EvalError> {
        let array = self.lookup_var(target)?;
        if !matches!(array, Value::NumberArray(_) | Value::StringArray(_)) {
            return Err(pop_not_supported(array.kind()));
        }
        let index = operand.map(|expr| self.eval_expr(expr)).transpose()?;

        match array {
            Value::NumberArray(items) => pop_from(&items, index.as_ref()),
            Value::StringArray(items) => pop_from(&items, index.as_ref()),
            other => Err(pop_not_supported(other.kind())),
        }
    }
}

fn pop_from<T: ArrayElement>(items: &SharedArray<T>, index: Option<&Value>) -> Result<(), EvalError> {
    match index {
        None => items.pop()?,
        Some(index) => items.pop_at(index)?,
    };
    Ok(())
}
