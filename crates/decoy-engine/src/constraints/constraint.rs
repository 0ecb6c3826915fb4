//! ArgumentConstraint: a named, negatable predicate over one argument.

use std::fmt;
use std::sync::Arc;

use decoy_core::types::Value;

type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A describable predicate over a single argument value.
///
/// Negation flips polarity and swaps in the paired description, so a
/// negated `NULL` reads `NOT NULL` rather than a generic wrapper, and
/// negating twice yields the original constraint. Predicates receive a
/// shared reference and are `Fn`, so evaluation cannot mutate the value and
/// may be repeated in any order.
#[derive(Clone)]
pub struct ArgumentConstraint {
    description: Arc<str>,
    negated_description: Arc<str>,
    predicate: Predicate,
    negated: bool,
    wildcard: bool,
}

impl ArgumentConstraint {
    /// A constraint with an explicit description for each polarity.
    pub fn new<F>(description: &str, negated_description: &str, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            description: Arc::from(description),
            negated_description: Arc::from(negated_description),
            predicate: Arc::new(predicate),
            negated: false,
            wildcard: false,
        }
    }

    /// A custom constraint. The negated description defaults to `not <description>`.
    pub fn that<F>(description: &str, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(description, &format!("not {description}"), predicate)
    }

    /// Replace the description used once this constraint is negated.
    pub fn with_negated_description(mut self, negated_description: &str) -> Self {
        if self.negated {
            self.description = Arc::from(negated_description);
        } else {
            self.negated_description = Arc::from(negated_description);
        }
        self
    }

    pub(crate) fn wildcard(mut self) -> Self {
        self.wildcard = true;
        self
    }

    /// Evaluate against `value`.
    pub fn is_satisfied_by(&self, value: &Value) -> bool {
        (self.predicate)(value) != self.negated
    }

    /// Human-readable description for the current polarity.
    pub fn describe(&self) -> &str {
        if self.negated {
            &self.negated_description
        } else {
            &self.description
        }
    }

    /// The logical complement, with the paired description.
    pub fn negate(&self) -> Self {
        let mut negated = self.clone();
        negated.negated = !self.negated;
        negated
    }

    /// Whether this constraint was produced by `negate`.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// True for the "don't care" constraint (and not its negation).
    pub fn is_wildcard(&self) -> bool {
        self.wildcard && !self.negated
    }
}

impl fmt::Debug for ArgumentConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgumentConstraint")
            .field("description", &self.describe())
            .field("negated", &self.negated)
            .finish()
    }
}

impl fmt::Display for ArgumentConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}
