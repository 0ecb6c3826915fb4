//! Call assertions over recorded calls.

use std::fmt;

use decoy_core::errors::ExpectationError;

use crate::controller::FakeController;
use crate::specification::{CallSpecification, MatchingExt};

/// How many matching calls an assertion expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeated {
    Never,
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
}

impl Repeated {
    /// `Exactly(1)`.
    pub fn once() -> Self {
        Repeated::Exactly(1)
    }

    /// `Exactly(2)`.
    pub fn twice() -> Self {
        Repeated::Exactly(2)
    }

    /// Whether `count` satisfies this expectation.
    pub fn matches(&self, count: usize) -> bool {
        match *self {
            Repeated::Never => count == 0,
            Repeated::Exactly(n) => count == n,
            Repeated::AtLeast(n) => count >= n,
            Repeated::AtMost(n) => count <= n,
        }
    }
}

fn times(n: usize) -> String {
    match n {
        1 => "once".to_string(),
        2 => "twice".to_string(),
        n => format!("{n} times"),
    }
}

impl fmt::Display for Repeated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Repeated::Never => f.write_str("never"),
            Repeated::Exactly(n) => write!(f, "exactly {}", times(n)),
            Repeated::AtLeast(n) => write!(f, "at least {}", times(n)),
            Repeated::AtMost(n) => write!(f, "at most {}", times(n)),
        }
    }
}

/// An assertion about the calls one fake has recorded.
pub struct CallAssertion<'a> {
    controller: &'a FakeController,
    specification: CallSpecification,
}

impl<'a> CallAssertion<'a> {
    pub(crate) fn new(controller: &'a FakeController, specification: CallSpecification) -> Self {
        Self {
            controller,
            specification,
        }
    }

    /// Number of recorded calls matching the specification right now.
    pub fn count(&self) -> usize {
        self.controller
            .get_calls()
            .matching(&self.specification)
            .count()
    }

    /// Fails with `CallCountMismatch` unless the matching count satisfies `repeated`.
    pub fn must_have_happened(&self, repeated: Repeated) -> Result<(), ExpectationError> {
        let calls = self.controller.get_calls();
        let actual = calls.matching(&self.specification).count();
        if repeated.matches(actual) {
            return Ok(());
        }
        let max_len = self.controller.settings().max_value_display_len;
        Err(ExpectationError::CallCountMismatch {
            fake: self.controller.name().to_string(),
            specification: self.specification.to_string(),
            expected: repeated.to_string(),
            actual,
            calls: calls
                .iter()
                .map(|c| format!("{}. {}", c.sequence(), c.render(max_len)))
                .collect(),
        })
    }

    /// Shorthand for `must_have_happened(Repeated::once())`.
    pub fn must_have_happened_once(&self) -> Result<(), ExpectationError> {
        self.must_have_happened(Repeated::once())
    }

    /// Fails if any recorded call matches.
    pub fn must_not_have_happened(&self) -> Result<(), ExpectationError> {
        self.must_have_happened(Repeated::Never)
    }
}
