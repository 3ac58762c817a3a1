//! Expression nodes.

use super::{BinaryOp, UnaryOp};
use crate::{ExprId, ExprRange, Name};

/// Expression kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal.
    Int(i64),
    /// String literal (interned contents).
    Str(Name),
    /// Variable reference.
    Var(Name),
    /// Array literal: `[a, b, c]`. An empty literal is an untyped array.
    Array(ExprRange),
    /// `-x`, `not x`
    Unary { op: UnaryOp, operand: ExprId },
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    /// `array[index]`
    Index { array: ExprId, index: ExprId },
    /// `len(x)`
    Len(ExprId),
    /// `func(args...)`
    Call { func: Name, args: ExprRange },
}
