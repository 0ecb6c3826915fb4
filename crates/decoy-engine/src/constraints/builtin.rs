//! Built-in argument constraints.

use std::sync::Arc;

use decoy_core::constants::{
    IGNORED_DESCRIPTION, NEVER_DESCRIPTION, NOT_NULL_DESCRIPTION, NULL_DESCRIPTION,
};
use decoy_core::types::{ObjectRef, Value};

use super::constraint::ArgumentConstraint;

impl ArgumentConstraint {
    /// Matches any value, including null.
    pub fn any() -> Self {
        Self::new(IGNORED_DESCRIPTION, NEVER_DESCRIPTION, |_| true).wildcard()
    }

    /// Matches the null representation only.
    pub fn is_null() -> Self {
        Self::new(NULL_DESCRIPTION, NOT_NULL_DESCRIPTION, Value::is_null)
    }

    /// Matches every non-null value.
    pub fn is_not_null() -> Self {
        Self::is_null().negate()
    }

    /// Matches values equal to `expected`. Objects compare by identity.
    pub fn equal_to(expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        if expected.is_null() {
            return Self::is_null();
        }
        let description = expected.to_string();
        Self::new(&description, &format!("not {description}"), move |v| {
            *v == expected
        })
    }

    /// Matches exactly the object `expected` (reference identity).
    pub fn same_as(expected: ObjectRef) -> Self {
        let description = format!("same as <{}>", expected.type_name());
        Self::new(&description, &format!("not {description}"), move |v| {
            v.as_object().is_some_and(|o| o.ptr_eq(&expected))
        })
    }

    /// Matches numeric values strictly greater than `bound`.
    pub fn greater_than(bound: f64) -> Self {
        Self::new(
            &format!("greater than {bound}"),
            &format!("not greater than {bound}"),
            move |v| v.as_number().is_some_and(|n| n > bound),
        )
    }

    /// Matches numeric values strictly less than `bound`.
    pub fn less_than(bound: f64) -> Self {
        Self::new(
            &format!("less than {bound}"),
            &format!("not less than {bound}"),
            move |v| v.as_number().is_some_and(|n| n < bound),
        )
    }

    /// Matches strings containing `needle`.
    pub fn contains(needle: &str) -> Self {
        let needle: Arc<str> = Arc::from(needle);
        Self::new(
            &format!("string that contains \"{needle}\""),
            &format!("string that does not contain \"{needle}\""),
            move |v| v.as_str().is_some_and(|s| s.contains(needle.as_ref())),
        )
    }

    /// Matches strings starting with `prefix`.
    pub fn starts_with(prefix: &str) -> Self {
        let prefix: Arc<str> = Arc::from(prefix);
        Self::new(
            &format!("string that starts with \"{prefix}\""),
            &format!("string that does not start with \"{prefix}\""),
            move |v| v.as_str().is_some_and(|s| s.starts_with(prefix.as_ref())),
        )
    }

    /// Matches the empty string.
    pub fn is_empty() -> Self {
        Self::new("empty string", "NOT empty string", |v| {
            v.as_str().is_some_and(str::is_empty)
        })
    }
}
