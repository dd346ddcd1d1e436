// ABOUTME: Tests for configuration loading and validation
// ABOUTME: Verifies TOML parsing, env var overrides, defaults, and URL scheme checks

use serial_test::serial;
use sitepulse::config::Config;
use std::io::Write;
use std::time::Duration;

/// Helper to clear all config-related env vars
fn clear_config_env_vars() {
    std::env::remove_var("SITEPULSE_CONFIG_PATH");
    std::env::remove_var("SITEPULSE_API_URL");
    std::env::remove_var("SITEPULSE_WS_URL");
    std::env::remove_var("SITEPULSE_RECONNECT_MS");
    std::env::remove_var("SITEPULSE_REFRESH_MS");
}

fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("sitepulse.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_defaults_point_at_local_backend() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.live.ws_url, "ws://localhost:8000/ws/dashboard");
    assert_eq!(config.live.reconnect_delay_ms, 5000);
    assert_eq!(config.refresh_interval(), Some(Duration::from_secs(30)));
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults_for_missing_fields() {
    let config = Config::from_toml_str(
        r#"
[api]
base_url = "https://site.example.com"
"#,
    )
    .unwrap();

    assert_eq!(config.api.base_url, "https://site.example.com");
    assert_eq!(config.live.ws_url, "ws://localhost:8000/ws/dashboard");
    assert_eq!(config.poll.refresh_interval_ms, 30_000);
}

#[test]
#[serial]
fn test_config_loads_from_toml_file() {
    clear_config_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://site.example.com/"

[live]
ws_url = "wss://site.example.com/ws/dashboard"
reconnect_delay_ms = 2500

[poll]
refresh_interval_ms = 0
"#,
    );
    std::env::set_var("SITEPULSE_CONFIG_PATH", path.to_str().unwrap());

    let config = Config::load().unwrap();

    assert_eq!(config.api.base_url, "https://site.example.com/");
    assert_eq!(config.live.ws_url, "wss://site.example.com/ws/dashboard");
    assert_eq!(config.reconnect().delay, Duration::from_millis(2500));
    assert_eq!(config.refresh_interval(), None);

    clear_config_env_vars();
}

#[test]
#[serial]
fn test_config_env_var_overrides() {
    clear_config_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "http://from-file:8000"
"#,
    );
    std::env::set_var("SITEPULSE_CONFIG_PATH", path.to_str().unwrap());
    std::env::set_var("SITEPULSE_API_URL", "http://from-env:9000");
    std::env::set_var("SITEPULSE_WS_URL", "ws://from-env:9000/ws/dashboard");
    std::env::set_var("SITEPULSE_RECONNECT_MS", "1000");
    std::env::set_var("SITEPULSE_REFRESH_MS", "15000");

    let config = Config::load().unwrap();

    assert_eq!(config.api.base_url, "http://from-env:9000");
    assert_eq!(config.live.ws_url, "ws://from-env:9000/ws/dashboard");
    assert_eq!(config.live.reconnect_delay_ms, 1000);
    assert_eq!(config.refresh_interval(), Some(Duration::from_secs(15)));

    clear_config_env_vars();
}

#[test]
#[serial]
fn test_non_numeric_env_override_is_rejected() {
    clear_config_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "");
    std::env::set_var("SITEPULSE_CONFIG_PATH", path.to_str().unwrap());
    std::env::set_var("SITEPULSE_RECONNECT_MS", "soon");

    let err = Config::load().unwrap_err();
    assert!(err.to_string().contains("SITEPULSE_RECONNECT_MS"));

    clear_config_env_vars();
}

#[test]
fn test_validate_rejects_wrong_schemes() {
    let mut config = Config::default();
    config.live.ws_url = "http://localhost:8000/ws/dashboard".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("ws or wss"));

    let mut config = Config::default();
    config.api.base_url = "ftp://localhost".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("http or https"));
}

#[test]
fn test_validate_rejects_zero_reconnect_delay() {
    let mut config = Config::default();
    config.live.reconnect_delay_ms = 0;
    assert!(config.validate().is_err());
}
