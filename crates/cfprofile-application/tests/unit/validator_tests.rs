//! Profile validator tests

use cfprofile_application::ProfileValidator;
use cfprofile_domain::Error;

const LOCAL: [&str; 7] = [
    "mysql", "postgres", "sqlserver", "oracle", "mongodb", "redis", "rabbitmq",
];

#[test]
fn test_no_profiles_is_valid() {
    assert!(ProfileValidator::new().validate(std::iter::empty()).is_ok());
}

#[test]
fn test_single_local_profile_is_valid() {
    for profile in LOCAL {
        assert!(
            ProfileValidator::new().validate([profile, "dev"]).is_ok(),
            "{profile} alone should be valid"
        );
    }
}

#[test]
fn test_every_pair_of_local_profiles_conflicts() {
    for (i, first) in LOCAL.iter().enumerate() {
        for second in &LOCAL[i + 1..] {
            let err = ProfileValidator::new()
                .validate([*first, *second])
                .unwrap_err();
            assert!(
                matches!(err, Error::ConflictingLocalProfiles { .. }),
                "{first}+{second} should conflict"
            );
        }
    }
}

#[test]
fn test_error_names_allowed_and_active_sets() {
    let err = ProfileValidator::new()
        .validate(["postgres", "redis", "rabbitmq"])
        .unwrap_err();
    match err {
        Error::ConflictingLocalProfiles { allowed, active } => {
            assert_eq!(allowed, LOCAL);
            assert_eq!(active, vec!["postgres", "redis", "rabbitmq"]);
        }
        other => panic!("Expected ConflictingLocalProfiles, got {other:?}"),
    }
}

#[test]
fn test_cloud_variants_are_not_local_profiles() {
    assert!(
        ProfileValidator::new()
            .validate(["mysql", "redis-cloud", "mongodb-cloud"])
            .is_ok()
    );
}
