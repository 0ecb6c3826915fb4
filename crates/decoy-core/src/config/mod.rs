//! Configuration system for decoy.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod decoy_config;
pub mod diagnostics_config;
pub mod fake_config;

pub use decoy_config::{ConfigOverrides, DecoyConfig};
pub use diagnostics_config::DiagnosticsConfig;
pub use fake_config::FakeConfig;
