//! Domain Services
//!
//! The four resolution steps, each usable on its own.

/// Platform binding detection
pub mod detector;
/// Exclusion computation and publication
pub mod exclusions;
/// Binding-derived profile selection
pub mod selector;
/// Explicit profile validation
pub mod validator;

pub use detector::BindingDetector;
pub use exclusions::{DEFAULT_EXCLUSIONS, EXCLUSION_RULES, ExclusionComputer, ExclusionRule};
pub use selector::ProfileSelector;
pub use validator::ProfileValidator;
