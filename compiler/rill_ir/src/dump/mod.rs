//! Source-like dumps of statements and expressions for diagnostics.
//!
//! Suites are indented four spaces per level. Array operations
//! (`append`/`pop`) produce no text.

use std::fmt::Write;

use crate::{Arena, ExprId, ExprKind, FunctionDef, Program, StmtId, StmtKind, StringInterner, SuiteId};

/// Binding strength of atoms and unary operands; never parenthesized.
const ATOM_PRECEDENCE: u8 = u8::MAX;

/// Render one expression.
pub fn describe_expr(arena: &Arena, interner: &StringInterner, id: ExprId) -> String {
    let mut dumper = Dumper::new(arena, interner);
    dumper.expr(id, 0);
    dumper.out
}

/// Render one statement (with its nested suites) at indentation level 0.
pub fn describe_stmt(arena: &Arena, interner: &StringInterner, id: StmtId) -> String {
    let mut dumper = Dumper::new(arena, interner);
    dumper.stmt(id);
    dumper.out
}

/// Render every statement of a suite at indentation level 0.
pub fn describe_suite(arena: &Arena, interner: &StringInterner, id: SuiteId) -> String {
    let mut dumper = Dumper::new(arena, interner);
    dumper.suite(id);
    dumper.out
}

/// Render a function definition and its body.
pub fn describe_function(arena: &Arena, interner: &StringInterner, func: &FunctionDef) -> String {
    let mut dumper = Dumper::new(arena, interner);
    dumper.function(func);
    dumper.out
}

/// Render all functions, then the top-level suite.
pub fn describe_program(program: &Program) -> String {
    let mut dumper = Dumper::new(&program.arena, &program.interner);
    for func in &program.functions {
        dumper.function(func);
        dumper.out.push('\n');
    }
    dumper.suite(program.main);
    dumper.out
}

struct Dumper<'a> {
    arena: &'a Arena,
    interner: &'a StringInterner,
    out: String,
    indent: usize,
}

impl<'a> Dumper<'a> {
    fn new(arena: &'a Arena, interner: &'a StringInterner) -> Self {
        Dumper {
            arena,
            interner,
            out: String::new(),
            indent: 0,
        }
    }

    fn line_start(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
    }

    fn name(&mut self, name: crate::Name) {
        self.out.push_str(self.interner.lookup(name));
    }

    fn function(&mut self, func: &FunctionDef) {
        self.line_start();
        self.out.push_str("def ");
        self.name(func.name);
        self.out.push('(');
        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.name(*param);
        }
        self.out.push_str("):\n");
        self.block(func.body);
    }

    /// A suite nested one level deeper than the current line.
    fn block(&mut self, id: SuiteId) {
        self.indent += 1;
        self.suite(id);
        self.indent -= 1;
    }

    fn suite(&mut self, id: SuiteId) {
        let arena = self.arena;
        let stmts = arena.suite(id);
        if stmts.is_empty() {
            self.line_start();
            self.out.push_str("pass\n");
            return;
        }
        for &stmt in stmts {
            self.stmt(stmt);
        }
    }

    fn stmt(&mut self, id: StmtId) {
        let arena = self.arena;
        match arena.stmt(id) {
            StmtKind::Assign { target, value } => {
                self.line_start();
                self.name(*target);
                self.out.push_str(" = ");
                self.expr(*value, 0);
            }
            StmtKind::IndexAssign {
                target,
                index,
                value,
            } => {
                self.line_start();
                self.name(*target);
                self.out.push('[');
                self.expr(*index, 0);
                self.out.push_str("] = ");
                self.expr(*value, 0);
            }
            StmtKind::Print(values) => {
                self.line_start();
                self.out.push_str("print");
                for (i, &value) in arena.expr_list(*values).iter().enumerate() {
                    self.out.push_str(if i == 0 { " " } else { ", " });
                    self.expr(value, 0);
                }
            }
            StmtKind::Call(call) => {
                self.line_start();
                self.expr(*call, 0);
            }
            StmtKind::Return(value) => {
                self.line_start();
                self.out.push_str("return ");
                self.expr(*value, 0);
            }
            StmtKind::For { var, range, body } => {
                self.line_start();
                self.out.push_str("for ");
                self.name(*var);
                self.out.push_str(" in range(");
                self.expr_list(arena.expr_list(*range));
                self.out.push_str("):\n");
                self.block(*body);
                return;
            }
            StmtKind::If(if_stmt) => {
                self.line_start();
                self.out.push_str("if ");
                self.expr(if_stmt.test, 0);
                self.out.push_str(":\n");
                self.block(if_stmt.then_suite);
                for (&test, &suite) in if_stmt.elif_tests.iter().zip(&if_stmt.elif_suites) {
                    self.line_start();
                    self.out.push_str("elif ");
                    self.expr(test, 0);
                    self.out.push_str(":\n");
                    self.block(suite);
                }
                if let Some(else_suite) = if_stmt.else_suite {
                    self.line_start();
                    self.out.push_str("else:\n");
                    self.block(else_suite);
                }
                return;
            }
            StmtKind::ArrayOp { .. } => return,
        }
        self.out.push('\n');
    }

    fn expr_list(&mut self, ids: &[ExprId]) {
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.expr(id, 0);
        }
    }

    /// Write `id`, parenthesizing it if it binds looser than `min_precedence`.
    fn expr(&mut self, id: ExprId, min_precedence: u8) {
        let arena = self.arena;
        match arena.expr(id) {
            ExprKind::Int(n) => {
                let _ = write!(self.out, "{n}");
            }
            ExprKind::Str(s) => {
                let _ = write!(self.out, "{:?}", self.interner.lookup(*s));
            }
            ExprKind::Var(name) => self.name(*name),
            ExprKind::Array(items) => {
                self.out.push('[');
                self.expr_list(arena.expr_list(*items));
                self.out.push(']');
            }
            ExprKind::Unary { op, operand } => {
                self.out.push_str(op.as_symbol());
                self.expr(*operand, ATOM_PRECEDENCE);
            }
            ExprKind::Binary { op, left, right } => {
                let precedence = op.precedence();
                let parens = precedence < min_precedence;
                if parens {
                    self.out.push('(');
                }
                self.expr(*left, precedence);
                let _ = write!(self.out, " {} ", op.as_symbol());
                // Left-associative: an equal-precedence right operand needs parens.
                self.expr(*right, precedence + 1);
                if parens {
                    self.out.push(')');
                }
            }
            ExprKind::Index { array, index } => {
                self.expr(*array, ATOM_PRECEDENCE);
                self.out.push('[');
                self.expr(*index, 0);
                self.out.push(']');
            }
            ExprKind::Len(inner) => {
                self.out.push_str("len(");
                self.expr(*inner, 0);
                self.out.push(')');
            }
            ExprKind::Call { func, args } => {
                self.name(*func);
                self.out.push('(');
                self.expr_list(arena.expr_list(*args));
                self.out.push(')');
            }
        }
    }
}
