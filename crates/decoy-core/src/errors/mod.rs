//! Error handling for decoy.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod argument_error;
pub mod config_error;
pub mod creation_error;
pub mod decoy_error;
pub mod error_code;
pub mod expectation_error;
pub mod registry_error;
pub mod specification_error;

pub use argument_error::ArgumentError;
pub use config_error::ConfigError;
pub use creation_error::CreationError;
pub use decoy_error::{DecoyError, DecoyResult};
pub use error_code::DecoyErrorCode;
pub use expectation_error::ExpectationError;
pub use registry_error::RegistryError;
pub use specification_error::SpecificationError;
