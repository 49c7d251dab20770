//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from an
//! optional TOML file overlaid with `LINKROOM__`-prefixed environment
//! variables. Every key has a default, so an absent file yields a usable
//! configuration that runs in local mode.

pub mod local;
pub mod logging;
pub mod remote;
pub mod view;

use serde::{Deserialize, Serialize};

use self::local::LocalStoreConfig;
use self::logging::LoggingConfig;
use self::remote::RemoteStoreConfig;
use self::view::ViewConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote document store settings.
    #[serde(default)]
    pub remote: RemoteStoreConfig,
    /// Local single-device store settings.
    #[serde(default)]
    pub local: LocalStoreConfig,
    /// Page and polling settings.
    #[serde(default)]
    pub view: ViewConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables use the `LINKROOM`
    /// prefix and `__` as the section separator, e.g.
    /// `LINKROOM__REMOTE__API_KEY`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("LINKROOM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document (no environment overlay).
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
