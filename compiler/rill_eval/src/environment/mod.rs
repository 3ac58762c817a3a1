//! Variable storage for the interpreter.
//!
//! A global scope plus a stack of function-call scopes. Reads look in the
//! innermost call scope, then the global scope; caller scopes are never
//! visible to a callee. Writes always go to the innermost scope.

use rustc_hash::FxHashMap;

use rill_ir::Name;

use crate::{Value, ValueKind};

/// Error returned by [`Environment::increment`].
///
/// Callers turn this into an `EvalError` once they can name the variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementError {
    /// Variable not bound in any visible scope.
    Undefined,
    /// Variable bound to a non-integer.
    NotInteger(ValueKind),
    /// Sum does not fit in an `i64`.
    Overflow,
}

/// One scope's bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    #[inline]
    pub fn insert(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Global scope plus the call-scope stack.
#[derive(Debug, Default)]
pub struct Environment {
    global: Scope,
    frames: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active call scopes (0 at top level).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Enter a function call.
    #[inline]
    pub fn push_scope(&mut self) {
        self.frames.push(Scope::new());
    }

    /// Leave a function call. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        self.frames.pop();
    }

    #[inline]
    fn current(&self) -> &Scope {
        self.frames.last().unwrap_or(&self.global)
    }

    #[inline]
    fn current_mut(&mut self) -> &mut Scope {
        self.frames.last_mut().unwrap_or(&mut self.global)
    }

    /// Value bound to `name`, innermost scope first, then global.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.current()
            .get(name)
            .or_else(|| self.global.get(name))
            .cloned()
    }

    /// Bind `name` in the innermost scope, replacing any previous binding.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) {
        self.current_mut().insert(name, value);
    }

    /// Replace the value of an existing binding in the scope that holds it
    /// (innermost first, then global). Unbound names are bound in the
    /// innermost scope.
    pub fn rebind(&mut self, name: Name, value: Value) {
        if !self.current().contains(name) && self.global.contains(name) {
            self.global.insert(name, value);
        } else {
            self.assign(name, value);
        }
    }

    /// `true` if `name` is bound in the innermost scope itself.
    pub fn contains_local(&self, name: Name) -> bool {
        self.current().contains(name)
    }

    /// Add `amount` to the integer bound to `name` and store the result in
    /// the innermost scope.
    pub fn increment(&mut self, name: Name, amount: i64) -> Result<(), IncrementError> {
        let current = match self.lookup(name) {
            Some(Value::Int(n)) => n,
            Some(other) => return Err(IncrementError::NotInteger(other.kind())),
            None => return Err(IncrementError::Undefined),
        };
        let next = current
            .checked_add(amount)
            .ok_or(IncrementError::Overflow)?;
        self.assign(name, Value::Int(next));
        Ok(())
    }
}

#[cfg(test)]
mod tests;
