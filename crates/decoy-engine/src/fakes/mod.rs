//! Fake creation, handles, and the instance registry.

pub mod fake;
pub mod options;
pub mod registry;

pub use fake::Fake;
pub use options::{ConfigureAction, FakeOptions, ProxyFactory, ProxyRequest};
pub use registry::FakeRegistry;
