//! A complete program: the arena plus its entry points.

use crate::{Arena, FunctionDef, Name, SharedInterner, SuiteId};

/// Everything the interpreter needs to run a script.
///
/// `main` is the top-level suite; `functions` are registered before it runs.
#[derive(Debug)]
pub struct Program {
    pub arena: Arena,
    pub interner: SharedInterner,
    pub functions: Vec<FunctionDef>,
    pub main: SuiteId,
}

impl Program {
    pub fn new(
        arena: Arena,
        interner: SharedInterner,
        functions: Vec<FunctionDef>,
        main: SuiteId,
    ) -> Self {
        Program {
            arena,
            interner,
            functions,
            main,
        }
    }

    /// Find a function definition by name (last definition wins).
    pub fn function(&self, name: Name) -> Option<&FunctionDef> {
        self.functions.iter().rev().find(|f| f.name == name)
    }
}
