//! AST node kinds.
//!
//! Nodes hold ids, never boxes; the [`Arena`](crate::Arena) owns them all.

mod expr;
mod function;
mod operators;
mod stmt;

pub use expr::ExprKind;
pub use function::FunctionDef;
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{ArrayOpKind, IfStmt, StmtKind};
