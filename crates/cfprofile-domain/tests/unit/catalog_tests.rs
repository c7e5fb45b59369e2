//! Binding catalog tests

use cfprofile_domain::catalog::{
    LOCAL_PROFILES, bindable_profile_names, is_local_profile, kind_to_profile,
    local_profile_names,
};
use cfprofile_domain::{ProfileName, ServiceBindingKind};
use std::collections::HashSet;

#[test]
fn test_every_recognized_kind_maps_to_a_profile() {
    let expected = [
        (ServiceBindingKind::RelationalMysql, ProfileName::Mysql),
        (ServiceBindingKind::RelationalPostgres, ProfileName::Postgres),
        (ServiceBindingKind::RelationalOracle, ProfileName::Oracle),
        (ServiceBindingKind::RelationalSqlserver, ProfileName::Sqlserver),
        (ServiceBindingKind::DocumentStore, ProfileName::Mongodb),
        (ServiceBindingKind::CacheStore, ProfileName::Redis),
        (ServiceBindingKind::MessageBroker, ProfileName::Rabbitmq),
    ];
    for (kind, profile) in expected {
        assert_eq!(kind_to_profile(kind), Some(profile), "kind {kind}");
    }
}

#[test]
fn test_generic_kind_has_no_profile() {
    assert_eq!(kind_to_profile(ServiceBindingKind::Generic), None);
}

#[test]
fn test_mapping_is_one_to_one() {
    let profiles: HashSet<_> = ServiceBindingKind::RECOGNIZED
        .into_iter()
        .filter_map(kind_to_profile)
        .collect();
    assert_eq!(profiles.len(), LOCAL_PROFILES.len());
}

#[test]
fn test_local_profiles() {
    for name in ["mysql", "postgres", "sqlserver", "oracle", "mongodb", "redis", "rabbitmq"] {
        assert!(is_local_profile(name), "{name} should be local");
    }
    assert!(!is_local_profile("redis-cloud"));
    assert!(!is_local_profile("default"));
    assert!(!is_local_profile("dev"));
}

#[test]
fn test_profile_name_lists() {
    assert_eq!(
        local_profile_names(),
        vec!["mysql", "postgres", "sqlserver", "oracle", "mongodb", "redis", "rabbitmq"]
    );
    assert_eq!(bindable_profile_names().len(), 7);
}
