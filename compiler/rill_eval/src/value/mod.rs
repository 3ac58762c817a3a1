//! Runtime values.
//!
//! The value set is closed: integers, strings, and arrays of one or the
//! other. An array literal with no elements has no element kind yet and is
//! a [`Value::NullArray`] until its first `append`.

mod array;

use std::fmt;
use std::rc::Rc;

pub use array::{ArrayElement, SharedArray};

/// Kind tag of a [`Value`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    String,
    NumberArray,
    StringArray,
    NullArray,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::NumberArray => "number array",
            Self::StringArray => "string array",
            Self::NullArray => "null array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runtime value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(Rc<str>),
    NumberArray(SharedArray<i64>),
    StringArray(SharedArray<Rc<str>>),
    /// Array with no committed element kind.
    NullArray,
}

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    pub fn number_array(items: impl IntoIterator<Item = i64>) -> Self {
        Value::NumberArray(SharedArray::new(items.into_iter().collect()))
    }

    pub fn string_array<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Self {
        Value::StringArray(SharedArray::new(
            items.into_iter().map(|s| Rc::from(s.as_ref())).collect(),
        ))
    }

    /// Integer truth value: `1` or `0`.
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Int(i64::from(b))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Integer,
            Value::Str(_) => ValueKind::String,
            Value::NumberArray(_) => ValueKind::NumberArray,
            Value::StringArray(_) => ValueKind::StringArray,
            Value::NullArray => ValueKind::NullArray,
        }
    }

    /// Truthiness used by `if`/`elif`, `not`, `and`, `or`.
    ///
    /// Zero, the empty string, and empty arrays are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::NumberArray(items) => !items.is_empty(),
            Value::StringArray(items) => !items.is_empty(),
            Value::NullArray => false,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::NumberArray(items) => {
                f.write_str("[")?;
                for (i, n) in items.to_vec().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{n}")?;
                }
                f.write_str("]")
            }
            Value::StringArray(items) => {
                f.write_str("[")?;
                for (i, s) in items.to_vec().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{s}'")?;
                }
                f.write_str("]")
            }
            Value::NullArray => f.write_str("[]"),
        }
    }
}

#[cfg(test)]
mod tests;
