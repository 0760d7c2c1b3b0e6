//! Categories command handler.

use color_eyre::Result;

use crate::context::Context;
use crate::models::CategoryInfo;

use super::App;

impl App {
    /// Run the categories command: list labels and their strategies.
    pub fn run_categories(&self, json: bool) -> Result<()> {
        let ctx = Context::load()?;

        let listing: Vec<CategoryInfo> = ctx
            .registry
            .categories()
            .into_iter()
            .map(|name| CategoryInfo {
                name: name.to_string(),
                // Every listed label came out of the registry, so the lookup
                // cannot miss; fall back to an empty description regardless.
                strategy: ctx
                    .registry
                    .get(name)
                    .map(|s| s.describe())
                    .unwrap_or_default(),
            })
            .collect();

        if json {
            println!("{}", serde_json::to_string_pretty(&listing)?);
            return Ok(());
        }

        let width = listing.iter().map(|c| c.name.len()).max().unwrap_or(0);
        for category in &listing {
            println!("{:width$}  {}", category.name, category.strategy);
        }
        Ok(())
    }
}
