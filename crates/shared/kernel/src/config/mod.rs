mod model;

pub use model::{AppConfig, LogConfig};

use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Prefix for environment overrides (`SMENUM__LOG__LEVEL` maps to `log.level`).
pub const ENV_PREFIX: &str = "SMENUM";
const ENV_SEPARATOR: &str = "__";

/// Custom error type for config loading.
#[smenum_derive::smenum_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// A value parsed but is not acceptable (e.g. an unknown log level).
    #[error("Invalid config value{}: {message}", format_context(.context))]
    InvalidValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Loads configuration by layering an optional file under environment overrides.
///
/// 1. **Base File**: when `path` is given, the file is required and its format is
///    inferred from the extension (`cards.toml`, `cards.json`, ...).
/// 2. **Environment Overrides**: variables prefixed with `SMENUM__`, nested keys
///    separated by double underscores (`SMENUM__LOG__JSON=true`).
///
/// Fields missing from every source fall back to the target's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or if the
/// merged sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let env = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true);

    load_layers(path.as_ref().map(AsRef::as_ref), env)
}

/// Loads [`AppConfig`] through [`load_config`] and validates it.
///
/// # Errors
/// Returns [`ConfigError::Config`] when loading fails and
/// [`ConfigError::InvalidValue`] when a loaded value is unusable.
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = load_config(path)?;
    config.validate()?;
    Ok(config)
}

fn load_layers<T>(path: Option<&Path>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    } else {
        debug!("No config file given, using defaults and environment");
    }

    let config = builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
