//! Observability for decoy.
//! `tracing` crate with `EnvFilter`, filter read from `DECOY_LOG`.

pub mod fields;
pub mod setup;
pub mod spans;

pub use setup::init_tracing;
