//! Application Layer - cfprofile
//!
//! Decision logic that turns platform bindings and explicit profile flags
//! into one active backend profile and a list of component groups to
//! suppress.
//!
//! ## Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`BindingDetector`] | Reads bindings from an optional platform source |
//! | [`ProfileValidator`] | Rejects conflicting explicit profiles |
//! | [`ProfileSelector`] | Activates the profile a single binding selects |
//! | [`ExclusionComputer`] | Computes and publishes suppressed groups |
//!
//! ## Use Cases
//!
//! - [`ProfileInitializer`]: runs the four services once at startup
//!
//! ## Dependencies
//!
//! This crate depends only on `cfprofile-domain` and `tracing`.

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
