//! # cfmeta-config
//!
//! Layered configuration loading for cfmeta using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CFMETA_*` prefix, `__` as separator)
//! 2. Project-level `.cfmeta/config.toml`
//! 3. User-level `~/.config/cfmeta/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `CFMETA_OUTPUT__INDENT` -> `output.indent` and
//! `CFMETA_CHECK__FAIL_ON_DIAGNOSTICS` -> `check.fail_on_diagnostics`.
//!
//! ```no_run
//! use cfmeta_config::CfmetaConfig;
//!
//! let config = CfmetaConfig::load_with_dotenv().expect("config");
//! println!("indent: {}", config.output.indent);
//! ```

mod check;
mod error;
mod output;

pub use check::CheckConfig;
pub use error::ConfigError;
pub use output::{MAX_INDENT, OutputConfig};

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".cfmeta/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CfmetaConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

impl CfmetaConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory (if any), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CFMETA_").split("__"))
    }

    /// Reject values figment accepts but the tool cannot use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.indent > MAX_INDENT {
            return Err(ConfigError::InvalidValue {
                field: "output.indent".into(),
                reason: format!("must be at most {MAX_INDENT}, got {}", self.output.indent),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cfmeta").join("config.toml"))
    }
}
