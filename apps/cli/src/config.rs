use config::{Config, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tkit_logger::{LevelFilter, LogSettings};
use tkit_textops::TextOpsConfig;
use tracing::debug;

/// Prefix of environment overrides, e.g. `TKIT__TEXT__ENCODING=ascii`.
pub const ENV_PREFIX: &str = "TKIT";

#[tkit_derive::tkit_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Everything the `tkit` binary reads from its configuration.
///
/// ```toml
/// [text]
/// encoding = "utf-8"
///
/// [[text.transliteration]]
/// pattern = "Ä"
/// replacement = "Ae"
///
/// [log]
/// level = "warn"
/// ```
///
/// Without a `[log]` section the binary logs warnings and errors only.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub text: TextOpsConfig,
    pub log: LogSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            text: TextOpsConfig::default(),
            log: LogSettings { level: LevelFilter::WARN, ..LogSettings::default() },
        }
    }
}

/// Loads layered configuration: an optional file, then `TKIT__`-prefixed environment
/// variables on top.
///
/// Nested keys are separated by double underscores (`TKIT__LOG__LEVEL` maps to `log.level`).
/// The file format follows its extension (`.toml`, `.yaml`, `.json`, ...).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use tkit_cli::config::{AppConfig, load_config};
///
/// let cfg: AppConfig = load_config(None).unwrap();
/// assert!(cfg.text.transliteration.is_none());
/// assert_eq!(cfg.log.level, tkit_logger::LevelFilter::WARN);
/// ```
pub fn load_config<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        debug!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
