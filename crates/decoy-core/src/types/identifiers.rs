//! Newtype identifiers for fakes, rules and faked instances.
//!
//! Each ID type wraps an integer to prevent cross-type confusion.
//! A `RuleId` cannot be accidentally used where a `FakeId` is expected.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            /// Allocate the next process-unique ID.
            pub fn next() -> Self {
                static COUNTER: AtomicU64 = AtomicU64::new(1);
                Self(COUNTER.fetch_add(1, Ordering::Relaxed))
            }

            /// Get the inner value.
            pub fn inner(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Identity of one fake (one controller).
    FakeId,
    "fake"
);

define_id!(
    /// Identity of one configured behavior rule.
    RuleId,
    "rule"
);

/// Identity of a faked instance: the address of the proxy object.
///
/// Valid only while the instance is alive; the registry entry must be
/// disposed before the allocation is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub usize);

impl ObjectId {
    /// The identity of `value`, taken from its address.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self(value as *const T as *const () as usize)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
