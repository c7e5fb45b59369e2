//! Domain layer constants
//!
//! Profile vocabulary and the names under which the resolved exclusions are
//! published. Infrastructure-specific constants (config file names, env var
//! names) live in `cfprofile_infrastructure::constants`.

// ============================================================================
// PROFILE CONSTANTS
// ============================================================================

/// Suffix appended to a profile that was derived from a live platform binding
pub const CLOUD_PROFILE_SUFFIX: &str = "-cloud";

/// Profile accepted when no profile has been activated
pub const DEFAULT_PROFILE: &str = "default";

/// Prefix negating a profile expression in acceptance checks
pub const PROFILE_NEGATION_PREFIX: char = '!';

// ============================================================================
// EXCLUSION PROPERTY CONSTANTS
// ============================================================================

/// Configuration key read by the hosting runtime to skip component groups
pub const EXCLUDE_PROPERTY_KEY: &str = "autoconfigure.exclude";

/// Name of the property source carrying the exclusion entry
pub const EXCLUDE_PROPERTY_SOURCE_NAME: &str = "backendAutoConfig";

/// Separator between component-group identifiers in the published value
pub const EXCLUSION_DELIMITER: &str = ",";
