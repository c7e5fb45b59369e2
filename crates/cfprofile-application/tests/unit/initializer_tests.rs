//! Profile initializer tests

use crate::support::{AbsentPlatform, BrokenPlatform, FixedBindingSource};
use cfprofile_application::{BindingDetector, ProfileInitializer};
use cfprofile_domain::constants::EXCLUDE_PROPERTY_KEY;
use cfprofile_domain::{ComponentGroup, Environment, Error, ServiceBindingKind};
use std::sync::Arc;

fn initializer_with(kinds: &[ServiceBindingKind]) -> ProfileInitializer {
    ProfileInitializer::new(BindingDetector::new(FixedBindingSource::of_kinds(kinds)))
}

#[test]
fn test_cache_store_binding_scenario() {
    let mut env = Environment::new();

    let list = initializer_with(&[ServiceBindingKind::CacheStore])
        .initialize(&mut env)
        .unwrap();

    assert_eq!(env.active_profiles().as_slice(), ["redis", "redis-cloud"]);
    assert!(list.excludes(ComponentGroup::Relational));
    assert!(list.excludes(ComponentGroup::DocumentStore));
    assert!(list.excludes(ComponentGroup::MessageBroker));
    assert!(!list.excludes(ComponentGroup::CacheStore));
}

#[test]
fn test_document_and_broker_bindings_conflict() {
    let mut env = Environment::new();

    let err = initializer_with(&[
        ServiceBindingKind::DocumentStore,
        ServiceBindingKind::MessageBroker,
    ])
    .initialize(&mut env)
    .unwrap_err();

    match err {
        Error::ConflictingBindings { bound, .. } => assert_eq!(bound, vec!["mongodb", "rabbitmq"]),
        other => panic!("Expected ConflictingBindings, got {other:?}"),
    }
    assert_eq!(env.property(EXCLUDE_PROPERTY_KEY), None);
}

#[test]
fn test_conflicting_explicit_profiles_abort_before_publishing() {
    let mut env = Environment::with_active_profiles(["mysql", "postgres"]);

    let err = ProfileInitializer::new(BindingDetector::new(Arc::new(AbsentPlatform)))
        .initialize(&mut env)
        .unwrap_err();

    assert!(matches!(err, Error::ConflictingLocalProfiles { .. }));
    assert!(env.property_sources().is_empty());
}

#[test]
fn test_platform_failure_aborts_startup() {
    let mut env = Environment::new();
    let err = ProfileInitializer::new(BindingDetector::new(Arc::new(BrokenPlatform)))
        .initialize(&mut env)
        .unwrap_err();
    assert!(matches!(err, Error::Platform { .. }));
    assert!(env.property_sources().is_empty());
}

#[test]
fn test_no_platform_no_profiles_defaults_to_relational() {
    let mut env = Environment::new();

    let list = ProfileInitializer::default().initialize(&mut env).unwrap();

    assert!(env.active_profiles().is_empty());
    assert_eq!(
        env.property(EXCLUDE_PROPERTY_KEY),
        Some("mongo.client,mongo.data,mongo.repositories,redis.client,redis.repositories,amqp.rabbit")
    );
    assert!(!list.excludes(ComponentGroup::Relational));
}

#[test]
fn test_explicit_profile_without_bindings() {
    let mut env = Environment::with_active_profiles(["mongodb"]);

    let list = ProfileInitializer::default().initialize(&mut env).unwrap();

    assert_eq!(env.active_profiles().as_slice(), ["mongodb"]);
    assert!(list.excludes(ComponentGroup::CacheStore));
    assert!(!list.excludes(ComponentGroup::DocumentStore));
}

#[test]
fn test_resolution_is_idempotent() {
    let source = FixedBindingSource::of_kinds(&[ServiceBindingKind::MessageBroker]);
    let initializer = ProfileInitializer::new(BindingDetector::new(source.clone()));

    let mut first_env = Environment::new();
    let mut second_env = Environment::new();
    let first = initializer.initialize(&mut first_env).unwrap();
    let second = initializer.initialize(&mut second_env).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_env, second_env);
    assert_eq!(source.calls(), 2);

    let again = initializer.initialize(&mut first_env).unwrap();
    assert_eq!(again, first);
    assert_eq!(first_env, second_env);
}

// Known gap: an explicit local profile and a different binding-derived
// profile both pass their checks, and the exclusion rules pick by priority.
#[test]
fn test_explicit_and_bound_profiles_resolve_by_rule_priority() {
    let mut env = Environment::with_active_profiles(["mysql"]);

    let list = initializer_with(&[ServiceBindingKind::CacheStore])
        .initialize(&mut env)
        .unwrap();

    assert_eq!(
        env.active_profiles().as_slice(),
        ["mysql", "redis", "redis-cloud"]
    );
    assert!(list.excludes(ComponentGroup::Relational));
}
