//! Startup bootstrap
//!
//! Wires configuration into the profile initializer and runs it once
//! against a fresh environment.

use crate::config::{AppConfig, PlatformConfig};
use crate::platform::CloudFoundryBindingSource;
use cfprofile_application::{BindingDetector, ProfileInitializer};
use cfprofile_domain::error::Result;
use cfprofile_domain::value_objects::{Environment, ExclusionList};
use std::sync::Arc;
use tracing::info;

/// Outcome of startup resolution
#[derive(Debug, Clone)]
pub struct ResolvedProfiles {
    /// Environment with final active profiles and the published exclusions
    pub environment: Environment,
    /// Identifiers published under the exclusion key
    pub exclusions: ExclusionList,
}

/// Build the binding detector described by `config`
pub fn build_detector(config: &PlatformConfig) -> BindingDetector {
    if config.enabled {
        BindingDetector::new(Arc::new(CloudFoundryBindingSource::from_config(config)))
    } else {
        info!("Platform binding detection disabled");
        BindingDetector::without_platform()
    }
}

/// Resolve profiles for `config`, reading bindings from the configured platform
pub fn resolve(config: &AppConfig) -> Result<ResolvedProfiles> {
    resolve_with_detector(config, build_detector(&config.platform))
}

/// Resolve profiles for `config` using `detector` for bindings
pub fn resolve_with_detector(
    config: &AppConfig,
    detector: BindingDetector,
) -> Result<ResolvedProfiles> {
    let mut environment = Environment::with_active_profiles(config.profiles.active.iter().cloned());
    let exclusions = ProfileInitializer::new(detector).initialize(&mut environment)?;
    Ok(ResolvedProfiles {
        environment,
        exclusions,
    })
}
