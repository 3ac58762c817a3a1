//! Behavior tests for the statement engine, grouped by statement kind.
//!
//! Programs are assembled directly in an arena with [`TestProgram`].

mod array_ops_tests;

use rill_ir::{
    Arena, ArrayOpKind, BinaryOp, ExprId, ExprKind, FunctionDef, IfStmt, Name, Program,
    SharedInterner, StmtId, StmtKind, SuiteId, UnaryOp,
};

use crate::{buffer_handler, Interpreter};

/// Arena-backed program under construction.
pub(crate) struct TestProgram {
    pub arena: Arena,
    pub interner: SharedInterner,
    pub functions: Vec<FunctionDef>,
}

impl TestProgram {
    pub fn new() -> Self {
        TestProgram {
            arena: Arena::new(),
            interner: SharedInterner::new(),
            functions: Vec::new(),
        }
    }

    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    // Expressions

    pub fn int(&mut self, n: i64) -> ExprId {
        self.arena.alloc_expr(ExprKind::Int(n))
    }

    pub fn str(&mut self, s: &str) -> ExprId {
        let name = self.name(s);
        self.arena.alloc_expr(ExprKind::Str(name))
    }

    pub fn var(&mut self, s: &str) -> ExprId {
        let name = self.name(s);
        self.arena.alloc_expr(ExprKind::Var(name))
    }

    pub fn array(&mut self, items: &[ExprId]) -> ExprId {
        let items = self.arena.alloc_expr_list(items.iter().copied());
        self.arena.alloc_expr(ExprKind::Array(items))
    }

    pub fn ints(&mut self, values: &[i64]) -> ExprId {
        let items: Vec<_> = values.iter().map(|&n| self.int(n)).collect();
        self.array(&items)
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Unary { op, operand })
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Binary { op, left, right })
    }

    pub fn index(&mut self, array: ExprId, index: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Index { array, index })
    }

    pub fn len(&mut self, operand: ExprId) -> ExprId {
        self.arena.alloc_expr(ExprKind::Len(operand))
    }

    pub fn call(&mut self, func: &str, args: &[ExprId]) -> ExprId {
        let func = self.name(func);
        let args = self.arena.alloc_expr_list(args.iter().copied());
        self.arena.alloc_expr(ExprKind::Call { func, args })
    }

    // Statements

    pub fn assign(&mut self, target: &str, value: ExprId) -> StmtId {
        let target = self.name(target);
        self.arena.alloc_stmt(StmtKind::Assign { target, value })
    }

    pub fn index_assign(&mut self, target: &str, index: ExprId, value: ExprId) -> StmtId {
        let target = self.name(target);
        self.arena.alloc_stmt(StmtKind::IndexAssign {
            target,
            index,
            value,
        })
    }

    pub fn print(&mut self, values: &[ExprId]) -> StmtId {
        let values = self.arena.alloc_expr_list(values.iter().copied());
        self.arena.alloc_stmt(StmtKind::Print(values))
    }

    pub fn call_stmt(&mut self, expr: ExprId) -> StmtId {
        self.arena.alloc_stmt(StmtKind::Call(expr))
    }

    pub fn ret(&mut self, value: ExprId) -> StmtId {
        self.arena.alloc_stmt(StmtKind::Return(value))
    }

    pub fn for_range(&mut self, var: &str, bounds: &[ExprId], body: &[StmtId]) -> StmtId {
        let var = self.name(var);
        let range = self.arena.alloc_expr_list(bounds.iter().copied());
        let body = self.suite(body);
        self.arena.alloc_stmt(StmtKind::For { var, range, body })
    }

    pub fn if_stmt(
        &mut self,
        test: ExprId,
        then_body: &[StmtId],
        elifs: &[(ExprId, &[StmtId])],
        else_body: Option<&[StmtId]>,
    ) -> StmtId {
        let then_suite = self.suite(then_body);
        let elif_tests = elifs.iter().map(|&(test, _)| test).collect();
        let elif_suites = elifs.iter().map(|&(_, body)| self.suite(body)).collect();
        let else_suite = else_body.map(|body| self.suite(body));
        self.raw_if(IfStmt {
            test,
            then_suite,
            elif_tests,
            elif_suites,
            else_suite,
        })
    }

    pub fn raw_if(&mut self, stmt: IfStmt) -> StmtId {
        self.arena.alloc_stmt(StmtKind::If(stmt))
    }

    pub fn append(&mut self, target: &str, operand: Option<ExprId>) -> StmtId {
        self.array_op(target, ArrayOpKind::Append, operand)
    }

    pub fn pop(&mut self, target: &str, operand: Option<ExprId>) -> StmtId {
        self.array_op(target, ArrayOpKind::Pop, operand)
    }

    fn array_op(&mut self, target: &str, op: ArrayOpKind, operand: Option<ExprId>) -> StmtId {
        let target = self.name(target);
        self.arena.alloc_stmt(StmtKind::ArrayOp {
            target,
            op,
            operand,
        })
    }

    pub fn suite(&mut self, stmts: &[StmtId]) -> SuiteId {
        self.arena.alloc_suite(stmts.iter().copied())
    }

    pub fn function(&mut self, name: &str, params: &[&str], body: &[StmtId]) {
        let name = self.name(name);
        let params = params.iter().map(|p| self.name(p)).collect();
        let body = self.suite(body);
        self.functions.push(FunctionDef::new(name, params, body));
    }

    pub fn finish(mut self, main: &[StmtId]) -> Program {
        let main = self.suite(main);
        Program::new(self.arena, self.interner, self.functions, main)
    }
}

/// Interpreter capturing `print` output in a buffer.
pub(crate) fn interpreter(program: &Program) -> Interpreter<'_> {
    Interpreter::builder(program)
        .print_handler(buffer_handler())
        .build()
}
