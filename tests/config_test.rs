//! Layered configuration loading from file, environment and flags.

use eavtui::cli::{parse_args, CliCommand};
use eavtui::config::{
    Config, ConfigError, ConfigManager, ENV_API_URL, ENV_DB_HOST, ENV_DB_NAME, ENV_DB_PASSWORD,
    ENV_DB_USER, ENV_LOG_FILE,
};
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

const ALL_VARS: [&str; 6] = [
    ENV_API_URL,
    ENV_DB_HOST,
    ENV_DB_NAME,
    ENV_DB_USER,
    ENV_DB_PASSWORD,
    ENV_LOG_FILE,
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

fn overrides(args: &[&str]) -> eavtui::cli::CliOverrides {
    match parse_args(args.iter().map(|s| s.to_string())) {
        CliCommand::RunTui(overrides) => overrides,
        other => panic!("expected RunTui, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_file_env_and_flags_layer_in_order() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(temp_dir.path().join("config.json"));
    std::fs::write(
        manager.config_path(),
        r#"{"apiUrl":"http://file:1","db":{"host":"filehost","dbName":"filedb","user":"fileuser"}}"#,
    )
    .unwrap();

    std::env::set_var(ENV_DB_NAME, "envdb");
    std::env::set_var(ENV_DB_PASSWORD, "envpw");

    let config = Config::load(&manager, &overrides(&["eavtui", "--host", "clihost"])).unwrap();
    clear_env();

    assert_eq!(config.api_url, "http://file:1");
    assert_eq!(config.db.host, "clihost");
    assert_eq!(config.db.db_name, "envdb");
    assert_eq!(config.db.user, "fileuser");
    assert_eq!(config.db.password, "envpw");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_no_file_no_env_is_default_and_incomplete() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(temp_dir.path().join("missing.json"));

    let config = Config::load(&manager, &overrides(&["eavtui"])).unwrap();

    assert_eq!(config, Config::default());
    assert!(matches!(config.validate(), Err(ConfigError::MissingDatabase)));
}

#[test]
#[serial]
fn test_log_file_from_env() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(temp_dir.path().join("config.json"));
    let log = temp_dir.path().join("logs").join("eav.log");
    std::env::set_var(ENV_LOG_FILE, &log);

    let config = Config::load(&manager, &overrides(&["eavtui"])).unwrap();
    clear_env();

    assert_eq!(config.log_path().unwrap(), PathBuf::from(&log));
}

#[test]
#[serial]
fn test_malformed_file_reports_path() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(temp_dir.path().join("config.json"));
    std::fs::write(manager.config_path(), "[1, 2").unwrap();

    let err = Config::load(&manager, &overrides(&["eavtui"])).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.json"));
}
