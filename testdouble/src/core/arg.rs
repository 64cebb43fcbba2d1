//! Opaque argument handles.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type-erased, shared argument or return value.
///
/// Cloning an `Arg` shares the underlying allocation, so two clones are the
/// same value by identity. Doubles never look inside an `Arg` on their own;
/// only comparators do.
#[derive(Clone)]
pub struct Arg(Arc<dyn Any + Send + Sync>);

impl Arg {
    /// Wraps a value in a new handle.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Wraps an already shared value without reallocating.
    #[must_use]
    pub fn from_arc(value: Arc<dyn Any + Send + Sync>) -> Self {
        Self(value)
    }

    /// Creates an `i32` argument.
    #[must_use]
    pub fn i32(value: i32) -> Self {
        Self::new(value)
    }

    /// Creates an owned text argument.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(value.into())
    }

    /// Creates a JSON argument.
    #[must_use]
    pub fn json(value: serde_json::Value) -> Self {
        Self::new(value)
    }

    /// Returns a reference to the inner value if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns true if the inner value is a `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Returns the inner `i32`, if any.
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        self.downcast_ref::<i32>().copied()
    }

    /// Returns the inner text for `String` and `&'static str` values.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| self.downcast_ref::<&'static str>().copied())
    }

    /// Returns the inner JSON value, if any.
    #[must_use]
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        self.downcast_ref::<serde_json::Value>()
    }

    /// Returns true if both handles point at the same allocation.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles sharing this value.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(v) = self.as_i32() {
            write!(f, "Arg({v})")
        } else if let Some(s) = self.as_text() {
            write!(f, "Arg({s:?})")
        } else if let Some(j) = self.as_json() {
            write!(f, "Arg({j})")
        } else {
            write!(f, "Arg({:p})", Arc::as_ptr(&self.0))
        }
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::i32(value)
    }
}

impl From<&'static str> for Arg {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<serde_json::Value> for Arg {
    fn from(value: serde_json::Value) -> Self {
        Self::json(value)
    }
}
