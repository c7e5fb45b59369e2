//! Explicit profile configuration

use serde::{Deserialize, Deserializer, Serialize};

/// Profiles section
///
/// `active` accepts a TOML list or a comma-separated string, so both
/// `active = ["redis"]` and `CFPROFILE__PROFILES__ACTIVE=redis,dev` work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    /// Profiles explicitly activated for this process
    #[serde(deserialize_with = "string_or_list")]
    pub active: Vec<String>,
}

impl ProfilesConfig {
    pub fn with_active<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: profiles.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    String(String),
    List(Vec<String>),
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let profiles = match StringOrList::deserialize(deserializer)? {
        StringOrList::String(s) => s.split(',').map(str::to_string).collect(),
        StringOrList::List(list) => list,
    };
    Ok(profiles
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect())
}
