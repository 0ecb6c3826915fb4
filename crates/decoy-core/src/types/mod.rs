//! Value model and identities for decoy.
//! Dynamic `Value`s, declared `TypeRef`s, `MethodId` signatures, newtype IDs.

pub mod identifiers;
pub mod method;
pub mod type_ref;
pub mod value;

pub use identifiers::{FakeId, ObjectId, RuleId};
pub use method::{MethodId, MethodIdBuilder, Parameter};
pub use type_ref::{TypeRef, ValueKind};
pub use value::{Dummy, ObjectRef, Value};
