//! Check command handler.

use color_eyre::Result;

use crate::context::Context;

use super::App;

impl App {
    /// Run the check command: load config and build the registry.
    ///
    /// Surfaces the first configuration problem (empty registry, invalid
    /// rate, unknown strategy kind) instead of failing later on the first
    /// quote.
    pub fn run_check(&self) -> Result<()> {
        let ctx = Context::load()?;
        tracing::info!(
            currency = %ctx.config.pricing.currency,
            categories = ctx.registry.len(),
            "configuration loaded"
        );

        println!(
            "Configuration OK: {} categories, currency {}",
            ctx.registry.len(),
            ctx.config.pricing.currency
        );
        Ok(())
    }
}
