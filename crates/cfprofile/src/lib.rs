//! # cfprofile
//!
//! Decides, once at process startup, which backend integration an
//! application activates: a relational database, a document store, a
//! key-value cache or a message broker.
//!
//! Two signals are combined:
//!
//! - service bindings reported by the runtime platform (Cloud Foundry's
//!   `VCAP_SERVICES`), each mapped to a backend profile;
//! - profiles set explicitly through configuration.
//!
//! At most one backend profile may come from each signal. A binding-derived
//! profile is activated together with its `-cloud` variant. The component
//! groups of every other backend are then published under
//! `autoconfigure.exclude` in the highest-precedence property source.
//!
//! ## Example
//!
//! ```ignore
//! let resolved = cfprofile::initialize(None)?;
//! let excluded = resolved.environment.property(cfprofile::EXCLUDE_PROPERTY_KEY);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Binding kinds, profiles, environment view, catalog, ports
//! - `application` - Detector, validator, selector, exclusion computer
//! - `infrastructure` - Configuration, logging, Cloud Foundry source

use std::path::Path;

/// Domain layer - core types and the binding catalog
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cfprofile_domain::*;
}

/// Application layer - resolution services and initializer
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use cfprofile_application::*;
}

/// Infrastructure layer - config, logging and platform sources
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cfprofile_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use cfprofile_domain::constants::EXCLUDE_PROPERTY_KEY;
pub use cfprofile_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use cfprofile_infrastructure::{ResolvedProfiles, resolve};

/// Load configuration and resolve the active backend profile
///
/// `config_path` selects a TOML file; without it the default locations are
/// searched. Environment variables prefixed `CFPROFILE__` override both.
/// Logging is initialized from the loaded configuration when no subscriber
/// is installed yet.
pub fn initialize(config_path: Option<&Path>) -> Result<ResolvedProfiles> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;

    // A host that already installed its own subscriber keeps it.
    let _ = cfprofile_infrastructure::logging::init_logging(&config.logging);

    resolve(&config)
}
