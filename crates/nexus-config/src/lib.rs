//! # nexus-config
//!
//! Layered configuration loading for the 42Nexus client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NEXUS_*` prefix, `__` as separator)
//! 2. Project-level `.nexus/config.toml`
//! 3. User-level `~/.config/nexus/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NEXUS_API__BASE_URL` -> `api.base_url`,
//! `NEXUS_AUTH__OPEN_BROWSER` -> `auth.open_browser`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use nexus_config::NexusConfig;
//!
//! let config = NexusConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url());
//! println!("login: {}", config.login_url());
//! ```

mod api;
mod auth;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "NEXUS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NexusConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl NexusConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".nexus/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Effective provider login URL.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.auth.login_url(&self.api)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nexus").join("config.toml"))
    }
}
