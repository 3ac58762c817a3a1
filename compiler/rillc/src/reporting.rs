//! Error rendering for the terminal.

use rill_eval::EvalError;

use crate::{LoadError, EXIT_USAGE_ERROR};

/// `error: <message>` followed by the call backtrace, if any.
pub fn render_eval_error(err: &EvalError) -> String {
    let mut out = format!("error: {err}\n");
    if !err.backtrace.is_empty() {
        out.push_str(&err.backtrace.to_string());
    }
    out
}

pub fn render_load_error(err: &LoadError) -> String {
    format!("error: {err}\n")
}

pub fn report_eval_error(err: &EvalError) {
    tracing::debug!(category = ?err.category(), "evaluation failed");
    eprint!("{}", render_eval_error(err));
}

/// Print a load error and return the matching exit status.
pub fn report_load_error(err: &LoadError) -> i32 {
    eprint!("{}", render_load_error(err));
    EXIT_USAGE_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_eval::errors::{division_by_zero, zero_range_step};

    #[test]
    fn eval_error_without_frames() {
        assert_eq!(
            render_eval_error(&zero_range_step()),
            "error: range() step must not be zero\n"
        );
    }

    #[test]
    fn eval_error_with_backtrace() {
        let err = division_by_zero().with_frame("inner").with_frame("main_loop");
        assert_eq!(
            render_eval_error(&err),
            "error: division by zero\ncall backtrace:\n  0: inner\n  1: main_loop\n"
        );
    }

    #[test]
    fn load_error() {
        let err = LoadError::UnknownOperator { op: "^".into() };
        assert_eq!(render_load_error(&err), "error: unknown operator `^`\n");
    }
}
