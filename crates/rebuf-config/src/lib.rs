//! # rebuf-config
//!
//! Layered configuration loading for rebuf using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REBUF_*` prefix, `__` as separator)
//! 2. Project-level `.rebuf.toml`
//! 3. User-level `~/.config/rebuf/config.toml`
//! 4. Built-in defaults
//!
//! `REBUF_NAMING__PREFIX=buf` maps to `naming.prefix`.
//!
//! # Usage
//!
//! ```no_run
//! use rebuf_config::RebufConfig;
//!
//! let config = RebufConfig::load().expect("config");
//! println!("renaming to {}1, {}2, ...", config.naming.prefix, config.naming.prefix);
//! ```

mod error;
mod naming;
mod output;

pub use error::ConfigError;
pub use naming::NamingConfig;
pub use output::OutputConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".rebuf.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RebufConfig {
    #[serde(default)]
    pub naming: NamingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RebufConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`REBUF_*` prefix)
    /// 2. `.rebuf.toml` (project-local)
    /// 3. `~/.config/rebuf/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("REBUF_").split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.naming.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rebuf").join("config.toml"))
    }
}
