//! Argument comparators and the per-position comparator registry.

use std::fmt;
use std::sync::Arc;

use super::Arg;
use crate::errors::DoubleError;

/// An equality check between an expected and an actual argument.
pub type Comparator = Arc<dyn Fn(&Arg, &Arg) -> bool + Send + Sync>;

/// Compares two `i32` arguments by value.
pub fn i32_eq(expected: &Arg, actual: &Arg) -> bool {
    matches!((expected.as_i32(), actual.as_i32()), (Some(e), Some(a)) if e == a)
}

/// Compares two text arguments by content.
pub fn text_eq(expected: &Arg, actual: &Arg) -> bool {
    matches!((expected.as_text(), actual.as_text()), (Some(e), Some(a)) if e == a)
}

/// Compares two arguments by identity. This is the default comparator.
pub fn ptr_eq(expected: &Arg, actual: &Arg) -> bool {
    expected.same_as(actual)
}

/// Compares two JSON arguments structurally.
pub fn json_eq(expected: &Arg, actual: &Arg) -> bool {
    matches!((expected.as_json(), actual.as_json()), (Some(e), Some(a)) if e == a)
}

/// Builds a comparator that downcasts both sides to `T` and uses `PartialEq`.
///
/// Arguments of any other type never compare equal.
#[must_use]
pub fn eq_as<T: PartialEq + 'static>() -> Comparator {
    Arc::new(|expected: &Arg, actual: &Arg| {
        matches!(
            (expected.downcast_ref::<T>(), actual.downcast_ref::<T>()),
            (Some(e), Some(a)) if e == a
        )
    })
}

/// Per-position comparators for a fixed arity.
#[derive(Clone)]
pub struct ComparatorRegistry {
    slots: Vec<Option<Comparator>>,
}

impl ComparatorRegistry {
    /// Creates a registry with every position on the default comparator.
    #[must_use]
    pub fn new(arity: usize) -> Self {
        Self {
            slots: vec![None; arity],
        }
    }

    /// Number of argument positions.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// Installs a comparator for one argument position.
    ///
    /// # Errors
    ///
    /// Returns `ComparatorIndexOutOfRange` if `index >= arity`; the registry
    /// is left unchanged.
    pub fn set(
        &mut self,
        function: &str,
        index: usize,
        comparator: Comparator,
    ) -> Result<(), DoubleError> {
        let arity = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or_else(|| DoubleError::ComparatorIndexOutOfRange {
                function: function.to_string(),
                index,
                arity,
            })?;
        *slot = Some(comparator);
        Ok(())
    }

    /// Returns true if a custom comparator is installed at `index`.
    #[must_use]
    pub fn is_custom(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Applies the comparator for `index`, falling back to identity.
    #[must_use]
    pub fn compare(&self, index: usize, expected: &Arg, actual: &Arg) -> bool {
        match self.slots.get(index) {
            Some(Some(comparator)) => comparator(expected, actual),
            _ => ptr_eq(expected, actual),
        }
    }
}

impl fmt::Debug for ComparatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let custom: Vec<usize> = (0..self.slots.len()).filter(|&i| self.is_custom(i)).collect();
        f.debug_struct("ComparatorRegistry")
            .field("arity", &self.slots.len())
            .field("custom", &custom)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_i32() {
        assert!(i32_eq(&Arg::i32(42), &Arg::i32(42)));
        assert!(!i32_eq(&Arg::i32(42), &Arg::i32(43)));
        assert!(!i32_eq(&Arg::i32(42), &Arg::text("42")));
    }

    #[test]
    fn test_builtin_text_mixes_owned_and_static() {
        assert!(text_eq(&Arg::text("test"), &Arg::from("test")));
        assert!(!text_eq(&Arg::text("test"), &Arg::text("other")));
    }

    #[test]
    fn test_builtin_ptr() {
        let a = Arg::i32(1);
        assert!(ptr_eq(&a, &a.clone()));
        assert!(!ptr_eq(&a, &Arg::i32(1)));
    }

    #[test]
    fn test_builtin_json() {
        let a = Arg::json(serde_json::json!({"k": [1, 2]}));
        let b = Arg::json(serde_json::json!({"k": [1, 2]}));
        assert!(json_eq(&a, &b));
        assert!(!json_eq(&a, &Arg::json(serde_json::json!({"k": []}))));
    }

    #[test]
    fn test_eq_as() {
        let cmp = eq_as::<u64>();
        assert!(cmp(&Arg::new(9_u64), &Arg::new(9_u64)));
        assert!(!cmp(&Arg::new(9_u64), &Arg::new(9_i64)));
    }

    #[test]
    fn test_registry_defaults_to_identity() {
        let registry = ComparatorRegistry::new(1);
        let a = Arg::i32(5);
        assert!(registry.compare(0, &a, &a.clone()));
        assert!(!registry.compare(0, &a, &Arg::i32(5)));
    }

    #[test]
    fn test_registry_rejects_out_of_range() {
        let mut registry = ComparatorRegistry::new(2);
        assert_eq!(registry.arity(), 2);
        let err = registry.set("f", 2, Arc::new(i32_eq)).unwrap_err();
        assert_eq!(
            err,
            DoubleError::ComparatorIndexOutOfRange {
                function: "f".to_string(),
                index: 2,
                arity: 2,
            }
        );
        assert!(!registry.is_custom(0));
        assert!(!registry.is_custom(1));
    }

    #[test]
    fn test_registry_custom_overrides_default() {
        let mut registry = ComparatorRegistry::new(2);
        registry.set("f", 1, Arc::new(i32_eq)).unwrap();
        assert!(registry.is_custom(1));
        assert!(registry.compare(1, &Arg::i32(5), &Arg::i32(5)));
    }
}
