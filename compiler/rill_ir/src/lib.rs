//! Rill IR - the in-memory form of a Rill program.
//!
//! - [`Name`] / [`StringInterner`]: interned identifiers and string literals
//! - [`Arena`]: flat storage for expressions, statements, and suites,
//!   addressed by [`ExprId`], [`StmtId`], [`SuiteId`]
//! - [`ExprKind`] / [`StmtKind`]: node kinds
//! - [`Program`]: a built arena plus its functions and top-level suite
//! - [`dump`]: source-like rendering for diagnostics
//!
//! Nothing here evaluates; see `rill_eval`.

mod arena;
mod ast;
pub mod dump;
mod ids;
mod interner;
mod name;
mod program;

pub use arena::Arena;
pub use ast::{ArrayOpKind, BinaryOp, ExprKind, FunctionDef, IfStmt, StmtKind, UnaryOp};
pub use ids::{ExprId, ExprRange, StmtId, SuiteId};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use program::Program;
