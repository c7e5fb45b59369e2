//! Exclusion Computer
//!
//! Decides which component groups the hosting runtime must skip, then
//! publishes them as a single highest-precedence property.
//!
//! Rules are checked in order and the first accepted profile wins. When
//! several backend profiles are active at once the earlier rule decides,
//! even though validation and selection normally prevent that state.

use cfprofile_domain::constants::{
    EXCLUDE_PROPERTY_KEY, EXCLUDE_PROPERTY_SOURCE_NAME, EXCLUSION_DELIMITER,
};
use cfprofile_domain::value_objects::{
    ComponentGroup, Environment, ExclusionList, ProfileName, PropertySource,
};
use tracing::{debug, info};

/// A profile and the groups excluded when it is accepted
#[derive(Debug, Clone, Copy)]
pub struct ExclusionRule {
    pub profile: ProfileName,
    pub excluded: &'static [ComponentGroup],
}

/// Priority-ordered exclusion rules
pub const EXCLUSION_RULES: &[ExclusionRule] = &[
    ExclusionRule {
        profile: ProfileName::Redis,
        excluded: &[
            ComponentGroup::Relational,
            ComponentGroup::DocumentStore,
            ComponentGroup::MessageBroker,
        ],
    },
    ExclusionRule {
        profile: ProfileName::Mongodb,
        excluded: &[
            ComponentGroup::Relational,
            ComponentGroup::CacheStore,
            ComponentGroup::MessageBroker,
        ],
    },
    ExclusionRule {
        profile: ProfileName::Rabbitmq,
        excluded: &[
            ComponentGroup::DocumentStore,
            ComponentGroup::CacheStore,
            ComponentGroup::Relational,
        ],
    },
];

/// Groups excluded when no rule matches: a relational backend is assumed
pub const DEFAULT_EXCLUSIONS: &[ComponentGroup] = &[
    ComponentGroup::DocumentStore,
    ComponentGroup::CacheStore,
    ComponentGroup::MessageBroker,
];

/// Computes the component groups to suppress for an environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ExclusionComputer;

impl ExclusionComputer {
    pub fn new() -> Self {
        Self
    }

    /// Exclusions for the profiles `env` accepts
    pub fn compute_exclusions(&self, env: &Environment) -> ExclusionList {
        let groups = EXCLUSION_RULES
            .iter()
            .find(|rule| env.accepts_profile(rule.profile.as_str()))
            .map_or(DEFAULT_EXCLUSIONS, |rule| {
                debug!(profile = %rule.profile, "Exclusion rule matched");
                rule.excluded
            });
        ExclusionList::from_groups(groups)
    }

    /// Compute the exclusions and publish them into `env`
    ///
    /// The entry goes into its own property source at highest precedence,
    /// replacing one published by an earlier run.
    pub fn publish_exclusions(&self, env: &mut Environment) -> ExclusionList {
        let exclusions = self.compute_exclusions(env);
        let value = exclusions.join(EXCLUSION_DELIMITER);
        info!(key = EXCLUDE_PROPERTY_KEY, "Excluding component groups: {value}");

        env.property_sources_mut().add_first(PropertySource::singleton(
            EXCLUDE_PROPERTY_SOURCE_NAME,
            EXCLUDE_PROPERTY_KEY,
            value,
        ));
        exclusions
    }
}
