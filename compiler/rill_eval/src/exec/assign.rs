//! Plain and indexed assignment.

use rill_ir::{ExprId, Name};

use super::{ExecOutcome, ExecResult};
use crate::errors::{incompatible_array_value, index_not_integer};
use crate::interpreter::Interpreter;
use crate::Value;

impl Interpreter<'_> {
    /// `target = value`: bind in the current scope, replacing any previous
    /// binding there.
    pub(super) fn exec_assign(&mut self, target: Name, value: ExprId) -> ExecResult {
        let value = self.eval_expr(value)?;
        self.env.assign(target, value);
        Ok(ExecOutcome::Completed)
    }

    /// `target[index] = value`.
    ///
    /// Order: index, then the target binding, then the value. The value must
    /// match the array's element kind. Targets that are not typed arrays,
    /// null arrays included, are left unchanged.
    pub(super) fn exec_index_assign(
        &mut self,
        target: Name,
        index: ExprId,
        value: ExprId,
    ) -> ExecResult {
        let index = match self.eval_expr(index)? {
            Value::Int(i) => i,
            other => return Err(index_not_integer(other.kind())),
        };
        let array = self.lookup_var(target)?;
        let value = self.eval_expr(value)?;

        match (array, value) {
            (Value::StringArray(items), Value::Str(s)) => items.set(index, s)?,
            (Value::NumberArray(items), Value::Int(n)) => items.set(index, n)?,
            (array @ (Value::StringArray(_) | Value::NumberArray(_)), value) => {
                return Err(incompatible_array_value(array.kind(), value.kind()));
            }
            (other, _) => {
                tracing::warn!(
                    variable = self.interner.lookup(target),
                    kind = %other.kind(),
                    "indexed assignment to a value that is not a typed array has no effect"
                );
            }
        }
        Ok(ExecOutcome::Completed)
    }
}
