//! Configuration loading.
//!
//! Layers, lowest to highest precedence: built-in defaults,
//! `~/.eavtui/config.json`, environment variables, command-line flags.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::DEFAULT_API_URL;
use crate::cli::CliOverrides;
use crate::models::DbAccess;

/// The config directory name under the home directory.
pub const CONFIG_DIR: &str = ".eavtui";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "eavtui.log";

pub const ENV_API_URL: &str = "EAV_API_URL";
pub const ENV_DB_HOST: &str = "EAV_DB_HOST";
pub const ENV_DB_NAME: &str = "EAV_DB_NAME";
pub const ENV_DB_USER: &str = "EAV_DB_USER";
pub const ENV_DB_PASSWORD: &str = "EAV_DB_PASSWORD";
pub const ENV_LOG_FILE: &str = "EAVTUI_LOG_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid backend URL '{0}': expected http:// or https://")]
    InvalidApiUrl(String),

    #[error("Database host and name are required (set EAV_DB_HOST and EAV_DB_NAME, or use --host and --db)")]
    MissingDatabase,

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub api_url: String,
    /// Connection settings posted to the backend on `Connect`
    pub db: DbAccess,
    /// `None` means `~/.eavtui/eavtui.log`
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            db: DbAccess::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// Defaults, then the config file, then the process environment, then
    /// `cli`.
    pub fn load(manager: &ConfigManager, cli: &CliOverrides) -> Result<Self, ConfigError> {
        let mut config = manager.load()?;
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_cli(cli);
        Ok(config)
    }

    /// Override fields from environment variables read through `lookup`.
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(host) = get(ENV_DB_HOST) {
            self.db.host = host;
        }
        if let Some(name) = get(ENV_DB_NAME) {
            self.db.db_name = name;
        }
        if let Some(user) = get(ENV_DB_USER) {
            self.db.user = user;
        }
        if let Some(password) = get(ENV_DB_PASSWORD) {
            self.db.password = password;
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            self.log_file = Some(PathBuf::from(path));
        }
    }

    pub fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(ref url) = cli.api_url {
            self.api_url = url.clone();
        }
        if let Some(ref host) = cli.host {
            self.db.host = host.clone();
        }
        if let Some(ref name) = cli.db_name {
            self.db.db_name = name.clone();
        }
        if let Some(ref user) = cli.user {
            self.db.user = user.clone();
        }
        if let Some(ref path) = cli.log_file {
            self.log_file = Some(path.clone());
        }
    }

    /// Check the backend URL and database settings.
    ///
    /// `MissingDatabase` is not fatal for the UI: the backend answers the
    /// connect request with `Missing required info`, which ends up in the
    /// status bar.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(self.api_url.clone()));
        }
        if !self.db.is_valid() {
            return Err(ConfigError::MissingDatabase);
        }
        Ok(())
    }

    /// Log file path, falling back to `~/.eavtui/eavtui.log`.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.log_file {
            return Ok(path.clone());
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(CONFIG_DIR).join(LOG_FILE))
    }
}

/// Reads and writes the config file.
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for `~/.eavtui/config.json`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self {
            config_path: home.join(CONFIG_DIR).join(CONFIG_FILE),
        })
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config file. A missing file yields the defaults; an
    /// unreadable or malformed one is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let file = File::open(&self.config_path).map_err(|source| ConfigError::Read {
            path: self.config_path.clone(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Save `config`, creating the parent directory if needed.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: self.config_path.clone(),
            source,
        };

        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let file = File::create(&self.config_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config).map_err(|e| ConfigError::Write {
            path: self.config_path.clone(),
            source: e.into(),
        })?;
        writer.flush().map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn manager_in(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = manager_in(&temp_dir).load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);
        let config = Config {
            api_url: "http://eav:9000".to_string(),
            db: DbAccess {
                host: "db".to_string(),
                db_name: "eav".to_string(),
                user: "root".to_string(),
                password: "pw".to_string(),
            },
            log_file: Some(PathBuf::from("/tmp/eav.log")),
        };

        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);
        fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
        fs::write(manager.config_path(), r#"{"db":{"host":"h","dbName":"d"}}"#).unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.db.host, "h");
        assert_eq!(config.db.db_name, "d");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);
        fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
        fs::write(manager.config_path(), "{not json").unwrap();

        assert!(matches!(manager.load(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_env_overrides_and_ignores_blank() {
        let env: HashMap<&str, &str> = [
            (ENV_API_URL, "http://env:1"),
            (ENV_DB_HOST, "envhost"),
            (ENV_DB_NAME, "  "),
            (ENV_DB_PASSWORD, "secret"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.db.db_name = "fromfile".to_string();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_url, "http://env:1");
        assert_eq!(config.db.host, "envhost");
        assert_eq!(config.db.db_name, "fromfile");
        assert_eq!(config.db.password, "secret");
    }

    #[test]
    fn test_cli_wins_over_env() {
        let mut config = Config::default();
        config.apply_env(|key| (key == ENV_DB_HOST).then(|| "envhost".to_string()));
        config.apply_cli(&CliOverrides {
            host: Some("clihost".to_string()),
            ..Default::default()
        });
        assert_eq!(config.db.host, "clihost");
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert!(matches!(config.validate(), Err(ConfigError::MissingDatabase)));

        config.db.host = "h".to_string();
        config.db.db_name = "d".to_string();
        assert!(config.validate().is_ok());

        config.api_url = "localhost:8080".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidApiUrl(_))));
    }

    #[test]
    fn test_explicit_log_path() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/x.log")),
            ..Default::default()
        };
        assert_eq!(config.log_path().unwrap(), PathBuf::from("/tmp/x.log"));
    }
}
