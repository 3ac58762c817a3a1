//! Conditionals and loops.

use rill_ir::{ExprRange, IfStmt, Name, SuiteId};

use super::{ExecOutcome, ExecResult};
use crate::errors::mismatched_elifs;
use crate::interpreter::Interpreter;
use crate::{IncrementError, RangeCursor};

impl Interpreter<'_> {
    /// `if`/`elif`/`else`: the first truthy test wins; later tests are not
    /// evaluated. `else` runs only when no test matched.
    pub(super) fn exec_if(&mut self, stmt: &IfStmt) -> ExecResult {
        if stmt.elif_tests.len() != stmt.elif_suites.len() {
            return Err(mismatched_elifs(
                stmt.elif_tests.len(),
                stmt.elif_suites.len(),
            ));
        }

        if self.eval_expr(stmt.test)?.is_truthy() {
            return self.exec_suite(stmt.then_suite);
        }
        for (&test, &suite) in stmt.elif_tests.iter().zip(&stmt.elif_suites) {
            if self.eval_expr(test)?.is_truthy() {
                return self.exec_suite(suite);
            }
        }
        match stmt.else_suite {
            Some(suite) => self.exec_suite(suite),
            None => Ok(ExecOutcome::Completed),
        }
    }

    /// `for var in range(...)`. A `return` in the body ends the loop and
    /// propagates.
    pub(super) fn exec_for(&mut self, var: Name, range: ExprRange, body: SuiteId) -> ExecResult {
        let bounds = self.eval_exprs(range)?;
        let mut cursor = RangeCursor::new(var, &bounds, &mut self.env)?;

        while !cursor.at_end() {
            let outcome = self.exec_suite(body)?;
            if outcome.is_return() {
                return Ok(outcome);
            }
            cursor.advance();
            match self.env.increment(var, cursor.step()) {
                // The variable stays at its last value when the final step
                // leaves the integer range.
                Err(IncrementError::Overflow) if cursor.at_end() => {}
                result => result.map_err(|err| self.increment_error(var, err))?,
            }
        }
        Ok(ExecOutcome::Completed)
    }
}
