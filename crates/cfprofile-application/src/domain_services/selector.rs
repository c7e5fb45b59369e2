//! Profile Selector
//!
//! Maps platform bindings to backend profiles through the catalog and
//! activates the single profile they select, plus its cloud variant.

use cfprofile_domain::catalog::{bindable_profile_names, kind_to_profile};
use cfprofile_domain::error::{Error, Result};
use cfprofile_domain::value_objects::{Environment, ProfileName, ServiceBinding};
use tracing::{info, warn};

/// Activates the backend profile selected by platform bindings
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileSelector;

impl ProfileSelector {
    pub fn new() -> Self {
        Self
    }

    /// Profiles derived from `bindings`, in binding order
    ///
    /// Bindings with no catalog entry are dropped. Duplicates are kept: two
    /// bindings of the same kind yield the profile twice.
    pub fn profiles_for(&self, bindings: &[ServiceBinding]) -> Vec<ProfileName> {
        bindings
            .iter()
            .filter_map(|binding| {
                let profile = kind_to_profile(binding.kind());
                if profile.is_none() {
                    warn!(binding = %binding, "Ignoring binding with no backend profile");
                }
                profile
            })
            .collect()
    }

    /// Activate the profile selected by `bindings` in `env`
    ///
    /// Zero mapped bindings leave `env` untouched. More than one fails with
    /// [`Error::ConflictingBindings`] before anything is activated.
    pub fn select(&self, bindings: &[ServiceBinding], env: &mut Environment) -> Result<()> {
        let profiles = self.profiles_for(bindings);

        match profiles.as_slice() {
            [] => Ok(()),
            [profile] => {
                env.add_active_profile(profile.as_str());
                env.add_active_profile(profile.cloud_variant());
                info!(profile = %profile, "Activated profile from platform binding");
                Ok(())
            }
            _ => Err(Error::ConflictingBindings {
                allowed: bindable_profile_names(),
                bound: profiles.iter().map(|p| p.as_str().to_string()).collect(),
            }),
        }
    }
}
