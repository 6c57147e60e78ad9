//! Configuration module for bookfinder
//!
//! Manages the endpoint hosts, request limits and logging settings.
//! Configuration is stored in the user's config directory and can be
//! overridden per key with `BOOKFINDER_*` environment variables.

use crate::client::{DEFAULT_LIMIT, Endpoints, endpoints};
use crate::model::SearchField;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable prefix for per-key overrides
pub const ENV_PREFIX: &str = "BOOKFINDER";

/// Keys understood by `config get` / `config set`
pub const KEYS: &[&str] = &[
    "search_host",
    "covers_host",
    "source_host",
    "limit",
    "default_field",
    "timeout_secs",
    "quiet",
    "log_level",
    "log_file",
];

fn default_search_host() -> String {
    endpoints::DEFAULT_SEARCH_HOST.to_string()
}

fn default_covers_host() -> String {
    endpoints::DEFAULT_COVERS_HOST.to_string()
}

fn default_source_host() -> String {
    endpoints::DEFAULT_SOURCE_HOST.to_string()
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookFinderConfig {
    /// Host serving `/search.json`
    #[serde(default = "default_search_host")]
    pub search_host: String,

    /// Host serving cover images
    #[serde(default = "default_covers_host")]
    pub covers_host: String,

    /// Host the record links point to
    #[serde(default = "default_source_host")]
    pub source_host: String,

    /// Records requested per search
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Field selected when none is given
    #[serde(default)]
    pub default_field: SearchField,

    /// HTTP timeout for one search
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// `tracing` filter directive used when `BOOKFINDER_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Append log output to this file (the only log sink for `browse`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for BookFinderConfig {
    fn default() -> Self {
        Self {
            search_host: default_search_host(),
            covers_host: default_covers_host(),
            source_host: default_source_host(),
            limit: default_limit(),
            default_field: SearchField::default(),
            timeout_secs: default_timeout_secs(),
            quiet: false,
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl BookFinderConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("bookfinder").join("config.toml"))
    }

    /// Load configuration from `path`, creating a default file if missing
    ///
    /// `BOOKFINDER_*` environment variables override values from the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created,
    /// or if a value is out of range.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn load_with_env(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "config file missing, writing defaults");
            Self::default().save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(env)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::Message("limit must be at least 1".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Message("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Hosts for the search client and the view models
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            search_host: self.search_host.clone(),
            covers_host: self.covers_host.clone(),
            source_host: self.source_host.clone(),
        }
    }

    /// HTTP timeout for one search
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read a single key as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "search_host" => self.search_host.clone(),
            "covers_host" => self.covers_host.clone(),
            "source_host" => self.source_host.clone(),
            "limit" => self.limit.to_string(),
            "default_field" => self.default_field.to_string(),
            "timeout_secs" => self.timeout_secs.to_string(),
            "quiet" => self.quiet.to_string(),
            "log_level" => self.log_level.clone(),
            "log_file" => self
                .log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            other => return Err(ConfigError::NotFound(other.to_string())),
        };
        Ok(value)
    }

    /// Update a single key from text
    ///
    /// An empty value for `log_file` clears it. The change is not persisted;
    /// call [`BookFinderConfig::save_to`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys and
    /// `ConfigError::Message` for values that do not parse or are out of range.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: &str| ConfigError::Message(format!("Invalid value '{value}' for {key}: {reason}"));

        match key {
            "search_host" => self.search_host = parse_host(value).map_err(|e| invalid(&e))?,
            "covers_host" => self.covers_host = parse_host(value).map_err(|e| invalid(&e))?,
            "source_host" => self.source_host = parse_host(value).map_err(|e| invalid(&e))?,
            "limit" => {
                self.limit = value
                    .parse()
                    .ok()
                    .filter(|limit| *limit > 0)
                    .ok_or_else(|| invalid("expected a positive whole number"))?;
            }
            "default_field" => self.default_field = value.parse().map_err(|e: String| invalid(&e))?,
            "timeout_secs" => {
                self.timeout_secs = value
                    .parse()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| invalid("expected a positive number of seconds"))?;
            }
            "quiet" => {
                self.quiet = value.parse().map_err(|_| invalid("expected true or false"))?;
            }
            "log_level" => {
                if value.is_empty() {
                    return Err(invalid("expected a filter such as warn or bookfinder=debug"));
                }
                self.log_level = value.to_string();
            }
            "log_file" => {
                self.log_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            other => return Err(ConfigError::NotFound(other.to_string())),
        }
        Ok(())
    }
}

fn parse_host(value: &str) -> Result<String, String> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.trim_end_matches('/').to_string())
    } else {
        Err("expected an http:// or https:// URL".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(config::Map::new()))
    }

    #[test]
    fn test_default_config() {
        let config = BookFinderConfig::default();
        assert_eq!(config.limit, 20);
        assert_eq!(config.default_field, SearchField::Title);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.endpoints(), Endpoints::default());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = BookFinderConfig::load_with_env(&path, no_env()).unwrap();
        assert!(path.exists());
        assert_eq!(config, BookFinderConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = BookFinderConfig::default();
        config.set("limit", "5").unwrap();
        config.set("default_field", "author").unwrap();
        config.set("log_file", "/tmp/bookfinder.log").unwrap();
        config.save_to(&path).unwrap();

        let loaded = BookFinderConfig::load_with_env(&path, no_env()).unwrap();
        assert_eq!(loaded.limit, 5);
        assert_eq!(loaded.default_field, SearchField::Author);
        assert_eq!(loaded.log_file, Some(PathBuf::from("/tmp/bookfinder.log")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "limit = 7\n").unwrap();

        let loaded = BookFinderConfig::load_with_env(&path, no_env()).unwrap();
        assert_eq!(loaded.limit, 7);
        assert_eq!(loaded.search_host, "https://openlibrary.org");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "limit = 7\n").unwrap();

        let mut vars = config::Map::new();
        vars.insert("BOOKFINDER_LIMIT".to_string(), "3".to_string());
        vars.insert("BOOKFINDER_DEFAULT_FIELD".to_string(), "subject".to_string());
        let env = Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(Some(vars));

        let loaded = BookFinderConfig::load_with_env(&path, env).unwrap();
        assert_eq!(loaded.limit, 3);
        assert_eq!(loaded.default_field, SearchField::Subject);
    }

    #[test]
    fn test_zero_limit_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "limit = 0\n").unwrap();

        assert!(BookFinderConfig::load_with_env(&path, no_env()).is_err());
    }

    #[test]
    fn test_get_and_set() {
        let mut config = BookFinderConfig::default();

        config.set("search_host", "http://localhost:8080/").unwrap();
        assert_eq!(config.get("search_host").unwrap(), "http://localhost:8080");

        config.set("quiet", "true").unwrap();
        assert_eq!(config.get("quiet").unwrap(), "true");

        config.set("log_file", "").unwrap();
        assert_eq!(config.get("log_file").unwrap(), "");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = BookFinderConfig::default();

        assert!(config.set("limit", "0").is_err());
        assert!(config.set("limit", "many").is_err());
        assert!(config.set("timeout_secs", "-1").is_err());
        assert!(config.set("default_field", "isbn").is_err());
        assert!(config.set("covers_host", "covers.openlibrary.org").is_err());
        assert!(matches!(
            config.set("colour", "blue"),
            Err(ConfigError::NotFound(_))
        ));
        assert_eq!(config, BookFinderConfig::default());
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = BookFinderConfig::default();
        for key in KEYS {
            assert!(config.get(key).is_ok(), "{key}");
        }
    }
}
