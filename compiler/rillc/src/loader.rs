//! JSON program loading.
//!
//! A program file is a JSON object with a `main` statement list and an
//! optional `functions` list. Statements and expressions are externally
//! tagged objects:
//!
//! ```json
//! {
//!   "functions": [
//!     { "name": "double", "params": ["n"],
//!       "body": [{ "return": { "binary": { "op": "*", "left": { "var": "n" }, "right": { "int": 2 } } } }] }
//!   ],
//!   "main": [
//!     { "assign": { "target": "xs", "value": { "array": [] } } },
//!     { "append": { "target": "xs", "value": { "call": { "func": "double", "args": [{ "int": 21 }] } } } },
//!     { "print": [{ "var": "xs" }] }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use rill_ir::{
    Arena, ArrayOpKind, BinaryOp, ExprId, ExprKind, FunctionDef, IfStmt, Program, SharedInterner,
    StmtId, StmtKind, SuiteId, UnaryOp,
};

/// Failure to turn a file into a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid program: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown operator `{op}`")]
    UnknownOperator { op: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProgramNode {
    #[serde(default)]
    functions: Vec<FunctionNode>,
    #[serde(default)]
    main: Vec<StmtNode>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FunctionNode {
    name: String,
    #[serde(default)]
    params: Vec<String>,
    body: Vec<StmtNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
enum StmtNode {
    Assign {
        target: String,
        #[serde(default)]
        index: Option<ExprNode>,
        value: ExprNode,
    },
    Print(Vec<ExprNode>),
    Call(ExprNode),
    Return(ExprNode),
    For {
        var: String,
        range: Vec<ExprNode>,
        body: Vec<StmtNode>,
    },
    If {
        test: ExprNode,
        then: Vec<StmtNode>,
        #[serde(default)]
        elifs: Vec<ElifNode>,
        #[serde(default, rename = "else")]
        otherwise: Option<Vec<StmtNode>>,
    },
    Append {
        target: String,
        #[serde(default)]
        value: Option<ExprNode>,
    },
    Pop {
        target: String,
        #[serde(default)]
        index: Option<ExprNode>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElifNode {
    test: ExprNode,
    body: Vec<StmtNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
enum ExprNode {
    Int(i64),
    Str(String),
    Var(String),
    Array(Vec<ExprNode>),
    Unary {
        op: String,
        operand: Box<ExprNode>,
    },
    Binary {
        op: String,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
    },
    Index {
        array: Box<ExprNode>,
        index: Box<ExprNode>,
    },
    Len(Box<ExprNode>),
    Call {
        func: String,
        #[serde(default)]
        args: Vec<ExprNode>,
    },
}

/// Read and lower the program at `path`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn load_program(path: &Path) -> Result<Program, LoadError> {
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&source)
}

/// Lower a program from JSON text.
pub fn parse_program(source: &str) -> Result<Program, LoadError> {
    let node: ProgramNode = serde_json::from_str(source)?;
    let mut lowerer = Lowerer::new();

    let functions = node
        .functions
        .iter()
        .map(|f| lowerer.function(f))
        .collect::<Result<Vec<_>, _>>()?;
    let main = lowerer.suite(&node.main)?;

    tracing::debug!(
        functions = functions.len(),
        exprs = lowerer.arena.expr_count(),
        stmts = lowerer.arena.stmt_count(),
        "program loaded"
    );
    Ok(Program::new(lowerer.arena, lowerer.interner, functions, main))
}

/// Allocates surface nodes into an arena.
struct Lowerer {
    arena: Arena,
    interner: SharedInterner,
}

impl Lowerer {
    fn new() -> Self {
        Lowerer {
            arena: Arena::new(),
            interner: SharedInterner::new(),
        }
    }

    fn function(&mut self, node: &FunctionNode) -> Result<FunctionDef, LoadError> {
        let name = self.interner.intern(&node.name);
        let params = node.params.iter().map(|p| self.interner.intern(p)).collect();
        let body = self.suite(&node.body)?;
        Ok(FunctionDef::new(name, params, body))
    }

    fn suite(&mut self, stmts: &[StmtNode]) -> Result<SuiteId, LoadError> {
        let ids = stmts
            .iter()
            .map(|s| self.stmt(s))
            .collect::<Result<Vec<StmtId>, _>>()?;
        Ok(self.arena.alloc_suite(ids))
    }

    fn stmt(&mut self, node: &StmtNode) -> Result<StmtId, LoadError> {
        let kind = match node {
            StmtNode::Assign {
                target,
                index: None,
                value,
            } => StmtKind::Assign {
                target: self.interner.intern(target),
                value: self.expr(value)?,
            },
            StmtNode::Assign {
                target,
                index: Some(index),
                value,
            } => StmtKind::IndexAssign {
                target: self.interner.intern(target),
                index: self.expr(index)?,
                value: self.expr(value)?,
            },
            StmtNode::Print(values) => StmtKind::Print(self.expr_list(values)?),
            StmtNode::Call(expr) => StmtKind::Call(self.expr(expr)?),
            StmtNode::Return(expr) => StmtKind::Return(self.expr(expr)?),
            StmtNode::For { var, range, body } => StmtKind::For {
                var: self.interner.intern(var),
                range: self.expr_list(range)?,
                body: self.suite(body)?,
            },
            StmtNode::If {
                test,
                then,
                elifs,
                otherwise,
            } => {
                let test = self.expr(test)?;
                let then_suite = self.suite(then)?;
                let mut elif_tests = Vec::with_capacity(elifs.len());
                let mut elif_suites = Vec::with_capacity(elifs.len());
                for elif in elifs {
                    elif_tests.push(self.expr(&elif.test)?);
                    elif_suites.push(self.suite(&elif.body)?);
                }
                let else_suite = otherwise.as_deref().map(|s| self.suite(s)).transpose()?;
                StmtKind::If(IfStmt {
                    test,
                    then_suite,
                    elif_tests,
                    elif_suites,
                    else_suite,
                })
            }
            StmtNode::Append { target, value } => StmtKind::ArrayOp {
                target: self.interner.intern(target),
                op: ArrayOpKind::Append,
                operand: value.as_ref().map(|v| self.expr(v)).transpose()?,
            },
            StmtNode::Pop { target, index } => StmtKind::ArrayOp {
                target: self.interner.intern(target),
                op: ArrayOpKind::Pop,
                operand: index.as_ref().map(|i| self.expr(i)).transpose()?,
            },
        };
        Ok(self.arena.alloc_stmt(kind))
    }

    fn expr_list(&mut self, nodes: &[ExprNode]) -> Result<rill_ir::ExprRange, LoadError> {
        let ids = nodes
            .iter()
            .map(|n| self.expr(n))
            .collect::<Result<Vec<ExprId>, _>>()?;
        Ok(self.arena.alloc_expr_list(ids))
    }

    fn expr(&mut self, node: &ExprNode) -> Result<ExprId, LoadError> {
        let kind = match node {
            ExprNode::Int(n) => ExprKind::Int(*n),
            ExprNode::Str(s) => ExprKind::Str(self.interner.intern(s)),
            ExprNode::Var(name) => ExprKind::Var(self.interner.intern(name)),
            ExprNode::Array(items) => ExprKind::Array(self.expr_list(items)?),
            ExprNode::Unary { op, operand } => ExprKind::Unary {
                op: UnaryOp::from_symbol(op).ok_or_else(|| unknown_operator(op))?,
                operand: self.expr(operand)?,
            },
            ExprNode::Binary { op, left, right } => ExprKind::Binary {
                op: BinaryOp::from_symbol(op).ok_or_else(|| unknown_operator(op))?,
                left: self.expr(left)?,
                right: self.expr(right)?,
            },
            ExprNode::Index { array, index } => ExprKind::Index {
                array: self.expr(array)?,
                index: self.expr(index)?,
            },
            ExprNode::Len(operand) => ExprKind::Len(self.expr(operand)?),
            ExprNode::Call { func, args } => ExprKind::Call {
                func: self.interner.intern(func),
                args: self.expr_list(args)?,
            },
        };
        Ok(self.arena.alloc_expr(kind))
    }
}

#[cold]
fn unknown_operator(op: &str) -> LoadError {
    LoadError::UnknownOperator { op: op.to_string() }
}
