//! Application context providing dependency injection root.

use std::sync::Arc;

use crate::config::Config;
use crate::di::FromRef;
use crate::error::AppError;
use crate::registry::StrategyRegistry;

/// Root application context for dependency injection.
///
/// The Context holds all shared dependencies; each field has a `FromRef`
/// implementation so services can be resolved from it without knowing how
/// their dependencies were built.
#[derive(Debug, Clone)]
pub struct Context {
    /// Strategy registry, sealed against registration once it lands here.
    pub registry: Arc<StrategyRegistry>,
    /// Application configuration.
    pub config: Arc<Config>,
}

impl Context {
    /// Load configuration from the layered sources and build the context.
    ///
    /// # Errors
    /// Fails with a configuration error if the sources cannot be read or the
    /// pricing section yields an empty or invalid registry.
    pub fn load() -> Result<Self, AppError> {
        let config = Config::load()?;
        Self::from_config(config)
    }

    /// Build the context from loaded configuration.
    ///
    /// # Errors
    /// Fails with a configuration error if the pricing section yields an
    /// empty or invalid registry.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let registry = StrategyRegistry::from_config(&config.pricing)?;
        Ok(Self::new(registry, config))
    }

    /// Creates a new context with the given dependencies.
    pub fn new(registry: StrategyRegistry, config: Config) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }
}

impl FromRef<Context> for Arc<StrategyRegistry> {
    fn from_ref(ctx: &Context) -> Self {
        Arc::clone(&ctx.registry)
    }
}

impl FromRef<Context> for Arc<Config> {
    fn from_ref(ctx: &Context) -> Self {
        Arc::clone(&ctx.config)
    }
}
