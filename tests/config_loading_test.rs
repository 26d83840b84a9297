//! Configuration loading tests
//!
//! Environment overrides use temp-env so variables are restored after each test.

use breedcache::infrastructure::logging::{LogConfig, RotationPolicy};
use breedcache::ConfigLoader;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{contents}").expect("Failed to write config");
    file.flush().expect("Failed to flush config");
    file
}

#[test]
fn test_load_from_file() {
    let file = config_file("dog_api:\n  base_url: http://localhost:9000/api\n  timeout_secs: 7\n");

    temp_env::with_vars_unset(
        ["BREEDCACHE_DOG_API__BASE_URL", "BREEDCACHE_DOG_API__TIMEOUT_SECS"],
        || {
            let config = ConfigLoader::load_from_file(file.path()).expect("config should load");
            assert_eq!(config.dog_api.base_url, "http://localhost:9000/api");
            assert_eq!(config.dog_api.timeout_secs, 7);
            assert_eq!(config.logging.level, "warn");
        },
    );
}

#[test]
fn test_env_overrides_file() {
    let file = config_file("dog_api:\n  timeout_secs: 7\nlogging:\n  level: info\n");

    temp_env::with_vars(
        [
            ("BREEDCACHE_DOG_API__TIMEOUT_SECS", Some("12")),
            ("BREEDCACHE_LOGGING__LEVEL", Some("debug")),
        ],
        || {
            let config = ConfigLoader::load_from_file(file.path()).expect("config should load");
            assert_eq!(config.dog_api.timeout_secs, 12);
            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.dog_api.base_url, "https://dog.ceo/api");
        },
    );
}

#[test]
fn test_invalid_file_values_are_rejected() {
    let file = config_file("dog_api:\n  timeout_secs: 0\n");

    temp_env::with_var_unset("BREEDCACHE_DOG_API__TIMEOUT_SECS", || {
        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    });
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let file = config_file("dog_api: [unclosed\n");

    let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to load config"));
}

#[test]
fn test_file_logging_from_env() {
    let file = config_file("logging:\n  level: info\n");

    temp_env::with_vars(
        [
            ("BREEDCACHE_LOGGING__LOG_DIR", Some("/tmp/breedcache-logs")),
            ("BREEDCACHE_LOGGING__ROTATION", Some("never")),
        ],
        || {
            let config = ConfigLoader::load_from_file(file.path()).expect("config should load");
            assert_eq!(
                config.logging.log_dir,
                Some(PathBuf::from("/tmp/breedcache-logs"))
            );
            assert_eq!(config.logging.rotation, "never");

            let log_config = LogConfig::from(&config.logging);
            assert_eq!(log_config.rotation, RotationPolicy::Never);
            assert!(log_config.log_dir.is_some());
        },
    );
}

#[test]
fn test_unknown_rotation_is_rejected() {
    let file = config_file("logging:\n  rotation: weekly\n");

    temp_env::with_var_unset("BREEDCACHE_LOGGING__ROTATION", || {
        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("rotation"));
    });
}
