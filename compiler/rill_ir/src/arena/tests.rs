use super::*;
use crate::{BinaryOp, StringInterner};

#[test]
fn expr_ids_are_sequential() {
    let mut arena = Arena::new();
    let a = arena.alloc_expr(ExprKind::Int(1));
    let b = arena.alloc_expr(ExprKind::Int(2));
    assert_eq!(a.raw(), 0);
    assert_eq!(b.raw(), 1);
    assert_eq!(arena.expr(b), &ExprKind::Int(2));
    assert_eq!(arena.expr_count(), 2);
}

#[test]
fn expr_lists_preserve_order() {
    let mut arena = Arena::new();
    let ids: Vec<_> = (1..=3).map(|n| arena.alloc_expr(ExprKind::Int(n))).collect();
    let range = arena.alloc_expr_list(ids.iter().copied());
    assert_eq!(range.len(), 3);
    assert_eq!(arena.expr_list(range), ids.as_slice());
}

#[test]
fn empty_expr_list() {
    let mut arena = Arena::new();
    let range = arena.alloc_expr_list([]);
    assert!(range.is_empty());
    assert!(arena.expr_list(range).is_empty());
}

#[test]
fn nested_suites_do_not_interleave() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let mut arena = Arena::new();

    let one = arena.alloc_expr(ExprKind::Int(1));
    let inner_stmt = arena.alloc_stmt(StmtKind::Assign { target: x, value: one });
    let inner = arena.alloc_suite([inner_stmt]);

    let range = arena.alloc_expr_list([one]);
    let loop_stmt = arena.alloc_stmt(StmtKind::For {
        var: x,
        range,
        body: inner,
    });
    let cond = arena.alloc_expr(ExprKind::Binary {
        op: BinaryOp::Lt,
        left: one,
        right: one,
    });
    let call = arena.alloc_stmt(StmtKind::Call(cond));
    let outer = arena.alloc_suite([loop_stmt, call]);

    assert_eq!(arena.suite(inner), &[inner_stmt]);
    assert_eq!(arena.suite(outer), &[loop_stmt, call]);
    assert_eq!(arena.stmt_count(), 3);
}
