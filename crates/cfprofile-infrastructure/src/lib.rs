//! # Infrastructure Layer
//!
//! Technical concerns around profile resolution: configuration, logging and
//! the platform binding sources.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Runs the profile initializer from configuration |
//! | [`config`] | Figment configuration with TOML and env layers |
//! | [`constants`] | Config file names, env vars, platform names |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`logging`] | Structured logging with tracing |
//! | [`platform`] | Cloud Foundry binding source |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod platform;

// Re-export commonly used types
pub use bootstrap::{ResolvedProfiles, resolve};
pub use error_ext::ErrorContext;
