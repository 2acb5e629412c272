use std::io::Write;
use std::time::Duration;

use serial_test::serial;
use sonix_api::Language;

use super::*;
use crate::vault::{ApiKey, FixedKeyProvider};

const ENV_KEYS: [&str; 6] = [
    "SONIX_BASE_URL",
    "SONIX_DEFAULT_LANGUAGE",
    "SONIX_POLL_INTERVAL",
    "SONIX_MAX_WAIT",
    "SONIX_UNRECOGNIZED_LIMIT",
    "SONIX_HTTP_TIMEOUT",
];

fn clear_env() {
    for key in ENV_KEYS {
        unsafe { std::env::remove_var(key) };
    }
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn default_config_values() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://api.sonix.ai/v1");
    assert_eq!(config.api.default_language, Language::English);
    assert_eq!(config.polling.interval_secs, 10);
    assert_eq!(config.polling.max_wait_secs, 1800);
    assert_eq!(config.polling.unrecognized_status_limit, 5);
    assert_eq!(config.http.connect_timeout_secs, 30);
    assert_eq!(config.http.request_timeout_secs, 120);
    assert!(config.secrets.api_key.is_none());
}

#[test]
#[serial]
fn load_missing_file_uses_defaults() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.polling.interval_secs, 10);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn load_parses_partial_file() {
    clear_env();
    let file = write_config(
        r#"
[api]
base_url = "http://localhost:9000/v1"
default_language = "fr"

[polling]
interval_secs = 2
"#,
    );
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.api.base_url, "http://localhost:9000/v1");
    assert_eq!(config.api.default_language, Language::French);
    assert_eq!(config.polling.interval_secs, 2);
    assert_eq!(config.polling.max_wait_secs, 1800);
    assert_eq!(config.http.request_timeout_secs, 120);
}

#[test]
#[serial]
fn load_rejects_unknown_language() {
    clear_env();
    let file = write_config("[api]\ndefault_language = \"klingon\"\n");
    let err = Config::load(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config file"));
}

#[test]
#[serial]
fn env_overrides_file_values() {
    clear_env();
    let file = write_config("[polling]\ninterval_secs = 3\nmax_wait_secs = 60\n");
    unsafe {
        std::env::set_var("SONIX_BASE_URL", "http://127.0.0.1:8080");
        std::env::set_var("SONIX_DEFAULT_LANGUAGE", "nb-NO");
        std::env::set_var("SONIX_POLL_INTERVAL", "5");
        std::env::set_var("SONIX_MAX_WAIT", "600");
        std::env::set_var("SONIX_UNRECOGNIZED_LIMIT", "9");
        std::env::set_var("SONIX_HTTP_TIMEOUT", "45");
    }
    let config = Config::load(file.path()).unwrap();
    clear_env();

    assert_eq!(config.api.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.api.default_language, Language::Norwegian);
    assert_eq!(config.polling.interval_secs, 5);
    assert_eq!(config.polling.max_wait_secs, 600);
    assert_eq!(config.polling.unrecognized_status_limit, 9);
    assert_eq!(config.http.request_timeout_secs, 45);
}

#[test]
#[serial]
fn invalid_env_values_are_ignored() {
    clear_env();
    unsafe {
        std::env::set_var("SONIX_POLL_INTERVAL", "soon");
        std::env::set_var("SONIX_DEFAULT_LANGUAGE", "english");
        std::env::set_var("SONIX_HTTP_TIMEOUT", "-1");
    }
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(&dir.path().join("absent.toml")).unwrap();
    clear_env();

    assert_eq!(config.polling.interval_secs, 10);
    assert_eq!(config.api.default_language, Language::English);
    assert_eq!(config.http.request_timeout_secs, 120);
}

#[test]
fn polling_config_builds_policy() {
    let polling = PollingConfig {
        interval_secs: 4,
        max_wait_secs: 40,
        unrecognized_status_limit: 2,
    };
    let policy = polling.policy();
    assert_eq!(policy.interval, Duration::from_secs(4));
    assert_eq!(policy.max_wait, Duration::from_secs(40));
    assert_eq!(policy.unrecognized_status_limit, 2);
}

#[test]
fn validate_rejects_zero_interval() {
    let mut config = Config::default();
    config.polling.interval_secs = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("interval_secs"));
}

#[test]
fn validate_rejects_budget_shorter_than_interval() {
    let mut config = Config::default();
    config.polling.interval_secs = 30;
    config.polling.max_wait_secs = 10;
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_non_http_base_url() {
    let mut config = Config::default();
    config.api.base_url = "ftp://files.example.com".into();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("http or https"));

    config.api.base_url = "::not a url::".into();
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_zero_request_timeout() {
    let mut config = Config::default();
    config.http.request_timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[tokio::test]
async fn resolve_secrets_reads_api_key() {
    let mut config = Config::default();
    let keys = FixedKeyProvider(ApiKey::parse("sk-live"));
    config.resolve_secrets(&keys).await.unwrap();
    assert_eq!(config.secrets.api_key.as_ref().unwrap().expose(), "sk-live");
    assert!(!format!("{config:?}").contains("sk-live"));
}

#[tokio::test]
async fn resolve_secrets_without_key_leaves_none() {
    let mut config = Config::default();
    config
        .resolve_secrets(&FixedKeyProvider(None))
        .await
        .unwrap();
    assert!(config.secrets.api_key.is_none());
}

#[tokio::test]
async fn resolve_secrets_keeps_key_when_provider_has_none() {
    let mut config = Config::default();
    config.secrets.api_key = ApiKey::parse("sk-preset");
    config
        .resolve_secrets(&FixedKeyProvider(None))
        .await
        .unwrap();
    assert_eq!(config.secrets.api_key, ApiKey::parse("sk-preset"));
}

#[test]
fn serialized_config_omits_secrets() {
    let mut config = Config::default();
    config.secrets.api_key = ApiKey::parse("sk-live");
    let toml = toml::to_string(&config).unwrap();
    assert!(!toml.contains("sk-live"));
    assert!(toml.contains("base_url"));
}
