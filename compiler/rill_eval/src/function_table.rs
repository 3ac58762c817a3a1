//! Name-to-definition lookup for user functions.

use rustc_hash::FxHashMap;

use rill_ir::{FunctionDef, Name};

/// Functions callable from a running program.
///
/// Registering a name twice replaces the earlier definition.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable<'a> {
    functions: FxHashMap<Name, &'a FunctionDef>,
}

impl<'a> FunctionTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, func: &'a FunctionDef) {
        if self.functions.insert(func.name, func).is_some() {
            tracing::debug!(name = func.name.index(), "function redefined");
        }
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&'a FunctionDef> {
        self.functions.get(&name).copied()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl<'a> FromIterator<&'a FunctionDef> for FunctionTable<'a> {
    fn from_iter<I: IntoIterator<Item = &'a FunctionDef>>(iter: I) -> Self {
        let mut table = FunctionTable::new();
        for func in iter {
            table.register(func);
        }
        table
    }
}
