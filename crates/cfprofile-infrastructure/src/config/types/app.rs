//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;
pub use super::platform::PlatformConfig;
pub use super::profiles::ProfilesConfig;

/// Root configuration
///
/// ```toml
/// [profiles]
/// active = ["mongodb"]
///
/// [platform]
/// enabled = true
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Explicitly activated profiles
    pub profiles: ProfilesConfig,

    /// Platform binding source settings
    pub platform: PlatformConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
