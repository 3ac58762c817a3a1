//! Live function-call stack.

use rill_ir::Name;

use crate::errors::stack_overflow;
use crate::EvalError;

/// Names of the functions currently executing, outermost first.
///
/// Every call pushes a frame and every return pops it. The depth check is
/// part of `push`.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<Name>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Enter `name`. Fails without pushing once `max_depth` frames are live.
    pub fn push(&mut self, name: Name) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(stack_overflow(self.max_depth));
        }
        self.frames.push(name);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn current(&self) -> Option<Name> {
        self.frames.last().copied()
    }
}
