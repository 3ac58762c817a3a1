//! Flat storage for every AST node of a program.
//!
//! Nodes are appended during construction and never removed or mutated,
//! so ids stay valid for the lifetime of the arena.

use crate::{ExprId, ExprKind, ExprRange, StmtId, StmtKind, SuiteId};

/// Start and length of a suite's statements in the statement list pool.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct StmtRange {
    start: u32,
    len: u32,
}

/// Owner of all expression, statement, and suite nodes.
#[derive(Clone, Debug, Default)]
pub struct Arena {
    exprs: Vec<ExprKind>,
    expr_lists: Vec<ExprId>,
    stmts: Vec<StmtKind>,
    stmt_lists: Vec<StmtId>,
    suites: Vec<StmtRange>,
}

#[inline]
fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena capacity exceeded ({len} nodes)"))
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expression node.
    pub fn alloc_expr(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len()));
        self.exprs.push(kind);
        id
    }

    /// Append an expression list.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len());
        self.expr_lists.extend(ids);
        let len = to_u32(self.expr_lists.len()) - start;
        ExprRange { start, len }
    }

    /// Append a statement node.
    pub fn alloc_stmt(&mut self, kind: StmtKind) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len()));
        self.stmts.push(kind);
        id
    }

    /// Append a suite; statements run in iteration order.
    pub fn alloc_suite(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> SuiteId {
        let start = to_u32(self.stmt_lists.len());
        self.stmt_lists.extend(stmts);
        let len = to_u32(self.stmt_lists.len()) - start;
        let id = SuiteId::new(to_u32(self.suites.len()));
        self.suites.push(StmtRange { start, len });
        id
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &StmtKind {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn suite(&self, id: SuiteId) -> &[StmtId] {
        let range = self.suites[id.index()];
        let start = range.start as usize;
        &self.stmt_lists[start..start + range.len as usize]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}

#[cfg(test)]
mod tests;
