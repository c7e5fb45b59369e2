//! Environment variable layer tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p cfprofile-infrastructure --test config env_ -- --test-threads=1 --ignored
//! ```

use cfprofile_infrastructure::config::ConfigLoader;
use std::env;
use tempfile::TempDir;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_profiles_override_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cfprofile.toml");
    std::fs::write(&path, "[profiles]\nactive = [\"mysql\"]\n").unwrap();
    set_env("CFPROFILE__PROFILES__ACTIVE", "redis,dev");

    let config = ConfigLoader::new().with_config_path(&path).load().unwrap();

    assert_eq!(config.profiles.active, vec!["redis", "dev"]);
    remove_env("CFPROFILE__PROFILES__ACTIVE");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_env_prefix() {
    set_env("MYAPP__PLATFORM__ENABLED", "false");

    let config = ConfigLoader::new().with_env_prefix("MYAPP").load().unwrap();

    assert!(!config.platform.enabled);
    remove_env("MYAPP__PLATFORM__ENABLED");
}
