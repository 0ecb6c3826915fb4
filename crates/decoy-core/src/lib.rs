//! # decoy-core
//!
//! Foundation crate for the decoy fake-object framework.
//! Defines the dynamic value model, method identities, errors, config,
//! events, tracing setup, and constants. The engine crate builds the
//! recording and matching machinery on top of these types.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::DecoyConfig;
pub use errors::{DecoyError, DecoyErrorCode};
pub use types::{FakeId, MethodId, ObjectId, ObjectRef, Parameter, RuleId, TypeRef, Value, ValueKind};
