//! Profile Validator

use cfprofile_domain::catalog::{is_local_profile, local_profile_names};
use cfprofile_domain::error::{Error, Result};

/// Rejects explicit profile flags that select more than one backend
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileValidator;

impl ProfileValidator {
    pub fn new() -> Self {
        Self
    }

    /// Fail with [`Error::ConflictingLocalProfiles`] if more than one
    /// local backend profile is among `explicit_profiles`
    pub fn validate<'a, I>(&self, explicit_profiles: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let active: Vec<String> = explicit_profiles
            .into_iter()
            .filter(|p| is_local_profile(p))
            .map(str::to_string)
            .collect();

        if active.len() > 1 {
            return Err(Error::ConflictingLocalProfiles {
                allowed: local_profile_names(),
                active,
            });
        }
        Ok(())
    }
}
