//! Backend profile names

use crate::constants::CLOUD_PROFILE_SUFFIX;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A profile selecting one backend integration
///
/// The vocabulary is closed: every variant is also a locally-settable
/// profile (see [`crate::catalog::LOCAL_PROFILES`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    Mysql,
    Postgres,
    Sqlserver,
    Oracle,
    Mongodb,
    Redis,
    Rabbitmq,
}

impl ProfileName {
    /// Every profile name, in the order they are listed to users
    pub const ALL: [ProfileName; 7] = [
        ProfileName::Mysql,
        ProfileName::Postgres,
        ProfileName::Sqlserver,
        ProfileName::Oracle,
        ProfileName::Mongodb,
        ProfileName::Redis,
        ProfileName::Rabbitmq,
    ];

    /// The profile string as it appears in the active profile set
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileName::Mysql => "mysql",
            ProfileName::Postgres => "postgres",
            ProfileName::Sqlserver => "sqlserver",
            ProfileName::Oracle => "oracle",
            ProfileName::Mongodb => "mongodb",
            ProfileName::Redis => "redis",
            ProfileName::Rabbitmq => "rabbitmq",
        }
    }

    /// The synthetic profile marking this profile as platform-derived
    pub fn cloud_variant(self) -> String {
        format!("{}{}", self.as_str(), CLOUD_PROFILE_SUFFIX)
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileName::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown backend profile: {s}"))
    }
}
