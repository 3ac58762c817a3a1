//! Statement nodes.

use crate::{ExprId, ExprRange, Name, SuiteId};

/// Statement kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `target = value`
    Assign { target: Name, value: ExprId },
    /// `target[index] = value`
    IndexAssign {
        target: Name,
        index: ExprId,
        value: ExprId,
    },
    /// `print a, b, c`
    Print(ExprRange),
    /// A call evaluated for its effect.
    Call(ExprId),
    /// `return value`
    Return(ExprId),
    /// `for var in range(...): body`
    For {
        var: Name,
        range: ExprRange,
        body: SuiteId,
    },
    /// `if`/`elif`/`else` chain.
    If(IfStmt),
    /// `target.append(x)`, `target.pop()`, `target.pop(i)`
    ArrayOp {
        target: Name,
        op: ArrayOpKind,
        operand: Option<ExprId>,
    },
}

/// A conditional with any number of `elif` arms.
///
/// `elif_tests[i]` guards `elif_suites[i]`. The lists are kept separate so a
/// malformed node (unequal lengths) can be represented and rejected when it
/// runs.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IfStmt {
    pub test: ExprId,
    pub then_suite: SuiteId,
    pub elif_tests: Vec<ExprId>,
    pub elif_suites: Vec<SuiteId>,
    pub else_suite: Option<SuiteId>,
}

/// In-place array operations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArrayOpKind {
    Append,
    Pop,
}

impl ArrayOpKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Pop => "pop",
        }
    }
}
