//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/skonto/config.toml` (XDG) or platform config dir
//! 2. Project config: `.skonto.toml`
//! 3. Environment variables: `SKONTO_*`
//!
//! # Intended Usage
//!
//! **Project config** (`.skonto.toml` in the working directory):
//! ```toml
//! [pricing]
//! currency = "USD"
//!
//! [pricing.categories.Regular]
//! kind = "percentage"
//! rate = 0.05
//!
//! [pricing.categories.VIP]
//! kind = "percentage"
//! rate = 0.15
//! ```
//!
//! Each entry under `pricing.categories` maps a customer category label to a
//! strategy spec. Labels are case-sensitive: `VIP` and `vip` are distinct
//! categories. The `kind` field selects the strategy implementation; specs
//! with an unrecognized kind are rejected when the config is extracted.

use std::collections::HashMap;
use std::ops::Deref;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub pricing: PricingConfig,
}

/// Discount pricing configuration.
///
/// Typically defined in project config (`.skonto.toml` in the working
/// directory).
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Display currency for quotes (presentation only, no conversion).
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Customer category label -> strategy spec.
    /// An empty table is rejected later, when the registry is built.
    #[serde(default)]
    pub categories: HashMap<String, StrategySpec>,
}

/// Declarative strategy spec, dispatched on the `kind` field.
///
/// Adding a new strategy implementation means adding a variant here and a
/// matching arm in [`crate::registry::StrategyRegistry::from_config`]; the
/// resolution logic never changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StrategySpec {
    /// Fixed percentage of the base amount, e.g. `rate = 0.05` for 5%.
    Percentage { rate: f64 },
}

/// Default display currency used when none is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();

        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(".skonto.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("SKONTO_").split("_"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// User config path: ~/.config/skonto/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("skonto").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("skonto").join("config.toml"))
            .unwrap_or_default()
    }
}
