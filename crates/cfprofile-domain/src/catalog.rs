//! Binding catalog
//!
//! Fixed lookup from binding kind to backend profile, and the profiles that
//! may be set locally. Loaded once per process and never mutated.

use crate::value_objects::{ProfileName, ServiceBindingKind};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Profiles that may be activated explicitly, at most one at a time
pub const LOCAL_PROFILES: [ProfileName; 7] = ProfileName::ALL;

static KIND_TO_PROFILE: Lazy<HashMap<ServiceBindingKind, ProfileName>> = Lazy::new(|| {
    HashMap::from([
        (ServiceBindingKind::DocumentStore, ProfileName::Mongodb),
        (ServiceBindingKind::RelationalPostgres, ProfileName::Postgres),
        (ServiceBindingKind::RelationalMysql, ProfileName::Mysql),
        (ServiceBindingKind::CacheStore, ProfileName::Redis),
        (ServiceBindingKind::RelationalOracle, ProfileName::Oracle),
        (ServiceBindingKind::RelationalSqlserver, ProfileName::Sqlserver),
        (ServiceBindingKind::MessageBroker, ProfileName::Rabbitmq),
    ])
});

/// Profile selected by a binding of `kind`, if any
pub fn kind_to_profile(kind: ServiceBindingKind) -> Option<ProfileName> {
    KIND_TO_PROFILE.get(&kind).copied()
}

/// Whether `profile` is one of [`LOCAL_PROFILES`]
pub fn is_local_profile(profile: &str) -> bool {
    LOCAL_PROFILES.iter().any(|p| p.as_str() == profile)
}

/// Profile names a binding can map to, for error messages
pub fn bindable_profile_names() -> Vec<String> {
    ServiceBindingKind::RECOGNIZED
        .into_iter()
        .filter_map(kind_to_profile)
        .map(|p| p.as_str().to_string())
        .collect()
}

/// Local profile names, for error messages
pub fn local_profile_names() -> Vec<String> {
    LOCAL_PROFILES.iter().map(|p| p.as_str().to_string()).collect()
}
