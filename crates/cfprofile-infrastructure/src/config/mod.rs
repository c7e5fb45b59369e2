//! Configuration management
//!
//! Layered configuration built with Figment: defaults, then a TOML file,
//! then `CFPROFILE__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, PlatformConfig, ProfilesConfig};
