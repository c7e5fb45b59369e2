//! Platform binding source configuration

use crate::constants::{VCAP_APPLICATION_VAR, VCAP_SERVICES_VAR};
use serde::{Deserialize, Serialize};

/// Platform configuration section
///
/// ```toml
/// [platform]
/// enabled = true
/// application_var = "VCAP_APPLICATION"
/// services_var = "VCAP_SERVICES"
/// ```
///
/// With `enabled = false` no platform is queried and only explicit profiles
/// take part in resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Query the platform for service bindings
    pub enabled: bool,

    /// Variable whose presence marks the platform as available
    pub application_var: String,

    /// Variable holding the bound services as JSON
    pub services_var: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            application_var: VCAP_APPLICATION_VAR.to_string(),
            services_var: VCAP_SERVICES_VAR.to_string(),
        }
    }
}
