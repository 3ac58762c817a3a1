//! Shared, mutable, homogeneous arrays.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::errors::{index_not_integer, index_out_of_bounds, pop_from_empty};
use crate::{EvalError, Value, ValueKind};

/// Element types an array can hold.
pub trait ArrayElement: Clone {
    /// Kind of an array of this element type.
    const ARRAY_KIND: ValueKind;
}

impl ArrayElement for i64 {
    const ARRAY_KIND: ValueKind = ValueKind::NumberArray;
}

impl ArrayElement for Rc<str> {
    const ARRAY_KIND: ValueKind = ValueKind::StringArray;
}

/// Reference-counted handle to an array's elements.
///
/// Cloning the handle aliases the array: a variable assigned from another
/// array variable observes every later `append`/`pop`/element store.
pub struct SharedArray<T>(Rc<RefCell<Vec<T>>>);

impl<T: ArrayElement> SharedArray<T> {
    pub fn new(items: Vec<T>) -> Self {
        SharedArray(Rc::new(RefCell::new(items)))
    }

    /// An array seeded with a single element.
    pub fn with_element(item: T) -> Self {
        Self::new(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Element at `index`.
    pub fn get(&self, index: i64) -> Result<T, EvalError> {
        let items = self.0.borrow();
        let slot = checked_slot(index, items.len())?;
        Ok(items[slot].clone())
    }

    /// Overwrite the element at `index`.
    pub fn set(&self, index: i64, value: T) -> Result<(), EvalError> {
        let mut items = self.0.borrow_mut();
        let slot = checked_slot(index, items.len())?;
        items[slot] = value;
        Ok(())
    }

    pub fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    /// Remove and return the last element.
    pub fn pop(&self) -> Result<T, EvalError> {
        self.0
            .borrow_mut()
            .pop()
            .ok_or_else(|| pop_from_empty(T::ARRAY_KIND))
    }

    /// Remove and return the element at `index`.
    ///
    /// `index` must be an Integer within bounds.
    pub fn pop_at(&self, index: &Value) -> Result<T, EvalError> {
        let Value::Int(index) = index else {
            return Err(index_not_integer(index.kind()));
        };
        let mut items = self.0.borrow_mut();
        let slot = checked_slot(*index, items.len())?;
        Ok(items.remove(slot))
    }

    /// Copy of the current elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.0.borrow().clone()
    }

    /// `true` if both handles refer to the same array.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

fn checked_slot(index: i64, len: usize) -> Result<usize, EvalError> {
    usize::try_from(index)
        .ok()
        .filter(|&slot| slot < len)
        .ok_or_else(|| index_out_of_bounds(index, len))
}

impl<T> Clone for SharedArray<T> {
    fn clone(&self) -> Self {
        SharedArray(Rc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for SharedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || *self.0.borrow() == *other.0.borrow()
    }
}

impl<T: Eq> Eq for SharedArray<T> {}

impl<T: fmt::Debug> fmt::Debug for SharedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}
