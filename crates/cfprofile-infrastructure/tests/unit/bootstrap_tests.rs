//! Bootstrap tests

use cfprofile_application::BindingDetector;
use cfprofile_domain::constants::EXCLUDE_PROPERTY_KEY;
use cfprofile_domain::{ComponentGroup, Error};
use cfprofile_infrastructure::bootstrap::{build_detector, resolve_with_detector};
use cfprofile_infrastructure::config::ConfigBuilder;
use cfprofile_infrastructure::platform::CloudFoundryBindingSource;
use std::sync::Arc;

fn cloud_foundry(services: &str) -> BindingDetector {
    BindingDetector::new(Arc::new(CloudFoundryBindingSource::new(
        Some("{}".to_string()),
        Some(services.to_string()),
    )))
}

#[test]
fn test_disabled_platform_detects_nothing() {
    let config = ConfigBuilder::new().without_platform().build();
    assert!(build_detector(&config.platform).detect().unwrap().is_empty());
}

#[test]
fn test_explicit_profile_only() {
    let config = ConfigBuilder::new()
        .with_active_profiles(["rabbitmq"])
        .without_platform()
        .build();

    let resolved = resolve_with_detector(&config, BindingDetector::without_platform()).unwrap();

    assert_eq!(resolved.environment.active_profiles().as_slice(), ["rabbitmq"]);
    assert!(resolved.exclusions.excludes(ComponentGroup::Relational));
    assert!(!resolved.exclusions.excludes(ComponentGroup::MessageBroker));
}

#[test]
fn test_redis_binding_on_cloud_foundry() {
    let config = ConfigBuilder::new().build();
    let services = r#"{"rediscloud": [{"name": "cache", "label": "rediscloud", "tags": []}]}"#;

    let resolved = resolve_with_detector(&config, cloud_foundry(services)).unwrap();

    assert_eq!(
        resolved.environment.active_profiles().as_slice(),
        ["redis", "redis-cloud"]
    );
    assert_eq!(
        resolved.environment.property(EXCLUDE_PROPERTY_KEY),
        Some("jdbc.datasource,mongo.client,mongo.data,mongo.repositories,amqp.rabbit")
    );
}

#[test]
fn test_two_backends_bound_abort() {
    let config = ConfigBuilder::new().build();
    let services = r#"{
        "mongolab": [{"name": "docs", "label": "mongolab"}],
        "cloudamqp": [{"name": "queue", "label": "cloudamqp"}]
    }"#;

    let err = resolve_with_detector(&config, cloud_foundry(services)).unwrap_err();

    assert!(matches!(err, Error::ConflictingBindings { .. }));
}

#[test]
fn test_conflicting_explicit_profiles_abort() {
    let config = ConfigBuilder::new()
        .with_active_profiles(["mysql", "oracle"])
        .build();

    let err = resolve_with_detector(&config, BindingDetector::without_platform()).unwrap_err();

    assert!(matches!(err, Error::ConflictingLocalProfiles { .. }));
}
