use super::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of the command-line tools.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
}

/// Logging knobs forwarded to the logger builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    /// Extra `EnvFilter` directives, e.g. `smenum_registry=trace`.
    pub filter: Option<String>,
    /// Directory for rolling log files; console only when unset.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}

/// Level names accepted by the logger, compared case-insensitively.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

impl AppConfig {
    /// Rejects values that deserialized but cannot drive the tools.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log.validate()
    }
}

impl LogConfig {
    /// Checks the level name and the optional filter directives.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for an unknown level or a blank filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.trim();
        if !LOG_LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level)) {
            return Err(ConfigError::InvalidValue {
                message: format!("unknown log level '{}'", self.level).into(),
                context: Some("log.level".into()),
            });
        }
        if self.filter.as_deref().is_some_and(|filter| filter.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                message: "filter must not be blank".into(),
                context: Some("log.filter".into()),
            });
        }
        Ok(())
    }
}
