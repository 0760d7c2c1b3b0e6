//! Quote command handler.

use color_eyre::Result;

use crate::context::Context;
use crate::di::FromRef;
use crate::services::PricingService;

use super::App;

impl App {
    /// Run the quote command: resolve a discount and print it.
    pub fn run_quote(&self, category: &str, amount: f64, json: bool) -> Result<()> {
        let ctx = Context::load()?;
        let currency = &ctx.config.pricing.currency;
        let pricing = PricingService::from_ref(&ctx);

        let quote = pricing.quote(category, amount)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&quote)?);
            return Ok(());
        }

        match &quote.strategy {
            Some(strategy) => println!("Category: {} ({strategy})", quote.category),
            None => println!("Category: {} (no special pricing)", quote.category),
        }
        println!("Amount:   {:.2} {currency}", quote.amount);
        println!("Discount: {:.2} {currency}", quote.discount);
        println!("Total:    {:.2} {currency}", quote.total());
        Ok(())
    }
}
