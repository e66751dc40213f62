//! Session and logging configuration.
//!
//! Every field has a default, so an empty TOML document is a valid configuration:
//!
//! ```toml
//! [session]
//! name = "Inu-NC"
//! version = "1.0"
//! max_line_length = 1024
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::parser::DEFAULT_MAX_LINE_LENGTH;

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found at the given path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// The file could not be read or is not valid TOML.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

/// Log verbosity, lowercase in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Controller name, announced when a session starts.
    pub name: String,
    pub version: String,
    /// Longest line accepted, in bytes, terminator excluded.
    pub max_line_length: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: "Inu-NC".into(),
            version: "1.0".into(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Emit JSON lines instead of the compact human readable format.
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if:
    /// - `session.name` or `session.version` is empty
    /// - `session.max_line_length` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.name.is_empty() {
            return Err(ConfigError::Validation("session.name cannot be empty".into()));
        }
        if self.session.version.is_empty() {
            return Err(ConfigError::Validation(
                "session.version cannot be empty".into(),
            ));
        }
        if self.session.max_line_length == 0 {
            return Err(ConfigError::Validation(
                "session.max_line_length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::Parse(e.to_string())
            }
        })?;
        Self::from_toml_str(&content)
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::{Config, ConfigError, LogLevel};
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_document_gives_the_defaults() {
        let config = Config::from_toml_str("").expect("valid config");
        assert_eq!(config, Config::default());
        assert_eq!(config.session.name, "Inu-NC");
        assert_eq!(config.session.version, "1.0");
        assert_eq!(config.session.max_line_length, 1024);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(!config.logging.json);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [session]
            name = "bench"

            [logging]
            level = "trace"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.session.name, "bench");
        assert_eq!(config.session.version, "1.0");
        assert_eq!(config.logging.level, LogLevel::Trace);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("[logging]\nlevel = \"loud\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[session]\nname = \"\""),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[session]\nversion = \"\""),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[session]\nmax_line_length = 0"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "[session]\nmax_line_length = 80").expect("write config");
        let config = Config::load(file.path()).expect("valid config");
        assert_eq!(config.session.max_line_length, 80);
    }

    #[test]
    fn missing_file() {
        assert_eq!(
            Config::load(Path::new("/nonexistent/inu-nc.toml")),
            Err(ConfigError::FileNotFound)
        );
    }

    #[test]
    fn log_level_maps_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
    }
}
