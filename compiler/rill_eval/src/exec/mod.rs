//! Statement execution.
//!
//! Every statement yields an [`ExecOutcome`]. A suite runs its statements
//! in order and stops at the first `Return`, handing it to the enclosing
//! suite unchanged, so a `return` at any nesting depth unwinds to the
//! function body that contains it.

mod array_ops;
mod assign;
mod control;

use rill_ir::{ExprId, ExprRange, StmtId, StmtKind, SuiteId};
use rill_stack::ensure_sufficient_stack;

use crate::interpreter::Interpreter;
use crate::{EvalError, Value};

/// How a statement or suite finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Ran to the end; continue with the next statement.
    Completed,
    /// A `return` ran; stop and hand the value to the caller.
    Return(Value),
}

impl ExecOutcome {
    pub fn is_return(&self) -> bool {
        matches!(self, ExecOutcome::Return(_))
    }
}

pub type ExecResult = Result<ExecOutcome, EvalError>;

impl Interpreter<'_> {
    /// Run the statements of `suite` in order.
    pub fn exec_suite(&mut self, suite: SuiteId) -> ExecResult {
        ensure_sufficient_stack(|| {
            let arena = self.arena;
            for &stmt in arena.suite(suite) {
                let outcome = self.exec_stmt(stmt)?;
                if outcome.is_return() {
                    return Ok(outcome);
                }
            }
            Ok(ExecOutcome::Completed)
        })
    }

    /// Run a single statement.
    pub fn exec_stmt(&mut self, id: StmtId) -> ExecResult {
        let arena = self.arena;
        let stmt = arena.stmt(id);
        tracing::trace!(stmt = id.index(), depth = self.call_stack.depth(), "exec");

        match *stmt {
            StmtKind::Assign { target, value } => self.exec_assign(target, value),
            StmtKind::IndexAssign {
                target,
                index,
                value,
            } => self.exec_index_assign(target, index, value),
            StmtKind::Print(values) => self.exec_print(values),
            StmtKind::Call(expr) => self.exec_call(expr),
            StmtKind::Return(expr) => Ok(ExecOutcome::Return(self.eval_expr(expr)?)),
            StmtKind::For { var, range, body } => self.exec_for(var, range, body),
            StmtKind::If(ref if_stmt) => self.exec_if(if_stmt),
            StmtKind::ArrayOp {
                target,
                op,
                operand,
            } => self.exec_array_op(target, op, operand),
        }
    }

    /// Each value's display form followed by one space, then a newline.
    /// Each value is written before the next expression is evaluated.
    fn exec_print(&mut self, values: ExprRange) -> ExecResult {
        let arena = self.arena;
        for &expr in arena.expr_list(values) {
            let value = self.eval_expr(expr)?;
            self.print_handler.write(&format!("{value} "));
        }
        self.print_handler.write_line("");
        Ok(ExecOutcome::Completed)
    }

    /// Evaluate for effect. A call whose function returns nothing is fine
    /// here, unlike in an expression.
    fn exec_call(&mut self, expr: ExprId) -> ExecResult {
        if let Some((func, args)) = self.call_target(expr) {
            let args = self.eval_exprs(args)?;
            self.call_function(func, args)?;
        } else {
            self.eval_expr(expr)?;
        }
        Ok(ExecOutcome::Completed)
    }
}
