//! Loop cursor for `for v in range(...)`.

use rill_ir::Name;

use crate::errors::{invalid_range_arity, type_mismatch, zero_range_step};
use crate::{Environment, EvalError, Value};

/// Position of a `for` loop within its integer range.
///
/// The cursor tracks the loop counter separately from the loop variable,
/// so a body that reassigns the variable does not change the trip count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeCursor {
    current: i64,
    end: i64,
    step: i64,
    /// Set when the counter stepped past the end of the `i64` range.
    exhausted: bool,
}

impl RangeCursor {
    /// Build a cursor from `range` arguments and bind `var` to the start.
    ///
    /// Accepts `(end)`, `(start, end)` or `(start, end, step)`.
    pub fn new(var: Name, bounds: &[Value], env: &mut Environment) -> Result<Self, EvalError> {
        let ints = bounds
            .iter()
            .map(|v| v.as_int().ok_or_else(|| type_mismatch("integer", v.kind())))
            .collect::<Result<Vec<_>, _>>()?;
        let (start, end, step) = match ints[..] {
            [end] => (0, end, 1),
            [start, end] => (start, end, 1),
            [start, end, step] => (start, end, step),
            _ => return Err(invalid_range_arity(bounds.len())),
        };
        if step == 0 {
            return Err(zero_range_step());
        }
        env.assign(var, Value::Int(start));
        Ok(RangeCursor {
            current: start,
            end,
            step,
            exhausted: false,
        })
    }

    #[inline]
    pub fn current(&self) -> i64 {
        self.current
    }

    #[inline]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// `true` once the counter has reached or passed the end bound.
    #[inline]
    pub fn at_end(&self) -> bool {
        if self.exhausted {
            true
        } else if self.step > 0 {
            self.current >= self.end
        } else {
            self.current <= self.end
        }
    }

    /// Move the counter one step. A step that would leave the `i64` range
    /// lands past the end bound, so it ends the range.
    pub fn advance(&mut self) {
        match self.current.checked_add(self.step) {
            Some(next) => self.current = next,
            None => self.exhausted = true,
        }
    }
}
