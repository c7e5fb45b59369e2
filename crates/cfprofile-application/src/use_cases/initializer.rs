//! Profile Initializer Use Case
//!
//! Runs the resolution steps once, in order, against the environment of the
//! process being started. Any error aborts before the exclusion property is
//! published.

use crate::domain_services::{
    BindingDetector, ExclusionComputer, ProfileSelector, ProfileValidator,
};
use cfprofile_domain::error::Result;
use cfprofile_domain::value_objects::{Environment, ExclusionList};
use tracing::info;

/// Startup hook resolving the active backend profile
#[derive(Debug, Clone, Default)]
pub struct ProfileInitializer {
    detector: BindingDetector,
    validator: ProfileValidator,
    selector: ProfileSelector,
    exclusions: ExclusionComputer,
}

impl ProfileInitializer {
    /// Create an initializer reading bindings through `detector`
    pub fn new(detector: BindingDetector) -> Self {
        Self {
            detector,
            validator: ProfileValidator::new(),
            selector: ProfileSelector::new(),
            exclusions: ExclusionComputer::new(),
        }
    }

    /// Resolve profiles and publish exclusions into `env`
    ///
    /// Explicit profiles are validated as they were before any
    /// binding-derived profile is added.
    pub fn initialize(&self, env: &mut Environment) -> Result<ExclusionList> {
        let bindings = self.detector.detect()?;

        self.validator.validate(env.active_profiles().iter())?;

        self.selector.select(&bindings, env)?;

        let exclusions = self.exclusions.publish_exclusions(env);

        info!(
            profiles = ?env.active_profiles().as_slice(),
            excluded = exclusions.len(),
            "Backend profile resolution complete"
        );
        Ok(exclusions)
    }
}
