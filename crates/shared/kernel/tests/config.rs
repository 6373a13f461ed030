use serial_test::serial;
use std::fs;
use taco_domain::config::ApiConfig;
use taco_kernel::config::{load_config, load_config_with_env};
use tempfile::tempdir;

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().expect("temp dir");
    let cfg: ApiConfig = load_config(Some(dir.path().join("absent"))).expect("defaults load");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.session.cookie_name, "TACO_SESSION");
}

#[test]
#[serial]
fn file_values_are_loaded() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("taco.toml");
    fs::write(
        &path,
        "[server]\nport = 9000\n\n[session]\ncookie_name = \"SID\"\nidle_timeout_seconds = 60\n",
    )
    .expect("write config");

    let cfg: ApiConfig = load_config(Some(&path)).expect("config loads");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.session.cookie_name, "SID");
    assert_eq!(cfg.session.idle_timeout_seconds, 60);
    assert_eq!(cfg.session.capacity, 10_000);
}

#[test]
#[serial]
fn malformed_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nport = ").expect("write config");

    assert!(load_config::<ApiConfig>(Some(&path)).is_err());
}

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).collect()
}

#[test]
#[serial]
fn env_overrides_reach_typed_fields() {
    let dir = tempdir().expect("temp dir");
    let cfg: ApiConfig = load_config_with_env(
        Some(dir.path().join("absent")),
        vars(&[
            ("TACO__SERVER__PORT", "9123"),
            ("TACO__SESSION__CAPACITY", "42"),
            ("TACO__LOGGING__JSON", "true"),
            ("TACO__LOGGING__LEVEL", "debug"),
        ]),
    )
    .expect("env overrides load");

    assert_eq!(cfg.server.port, 9123);
    assert_eq!(cfg.session.capacity, 42);
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.session.cookie_name, "TACO_SESSION");
}

#[test]
#[serial]
fn env_overrides_win_over_file_values() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("taco.toml");
    fs::write(&path, "[server]\nport = 9000\n\n[session]\ncookie_name = \"SID\"\n")
        .expect("write config");

    let cfg: ApiConfig = load_config_with_env(
        Some(&path),
        vars(&[("TACO__SERVER__PORT", "9500"), ("TACO__SESSION__COOKIE_NAME", "20240101")]),
    )
    .expect("config loads");

    assert_eq!(cfg.server.port, 9500);
    assert_eq!(cfg.session.cookie_name, "20240101");
}

#[test]
#[serial]
fn unprefixed_vars_are_ignored() {
    let dir = tempdir().expect("temp dir");
    let cfg: ApiConfig = load_config_with_env(
        Some(dir.path().join("absent")),
        vars(&[("SERVER__PORT", "1"), ("OTHER__SERVER__PORT", "2")]),
    )
    .expect("defaults load");

    assert_eq!(cfg.server.port, 8080);
}

#[test]
#[serial]
fn non_numeric_port_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let result = load_config_with_env::<ApiConfig, _>(
        Some(dir.path().join("absent")),
        vars(&[("TACO__SERVER__PORT", "eighty")]),
    );

    assert!(result.is_err());
}
