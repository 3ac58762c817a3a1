//! Function definitions.

use crate::{Name, SuiteId};

/// `def name(params...): body`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDef {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: SuiteId,
}

impl FunctionDef {
    pub fn new(name: Name, params: Vec<Name>, body: SuiteId) -> Self {
        FunctionDef { name, params, body }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
