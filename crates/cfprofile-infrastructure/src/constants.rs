//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `cfprofile_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cfprofile.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cfprofile";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CFPROFILE";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV_VAR: &str = "CFPROFILE_LOG";

// ============================================================================
// CLOUD FOUNDRY CONSTANTS
// ============================================================================

/// Platform name reported in logs
pub const CLOUD_FOUNDRY_PLATFORM_NAME: &str = "cloudfoundry";

/// Variable whose presence marks a Cloud Foundry container
pub const VCAP_APPLICATION_VAR: &str = "VCAP_APPLICATION";

/// Variable carrying the bound services as JSON
pub const VCAP_SERVICES_VAR: &str = "VCAP_SERVICES";

/// Credential keys checked, in order, for a service URI
pub const CREDENTIAL_URI_KEYS: &[&str] = &["uri", "url"];
