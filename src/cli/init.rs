//! Init command handler.

use std::path::Path;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use super::App;

/// Starter project config with the classic customer tiers.
const STARTER_CONFIG: &str = r#"[pricing]
currency = "USD"

[pricing.categories.Regular]
kind = "percentage"
rate = 0.05

[pricing.categories.Premium]
kind = "percentage"
rate = 0.10

[pricing.categories.VIP]
kind = "percentage"
rate = 0.15
"#;

impl App {
    /// Run the init command to write a starter project config.
    pub fn run_init(&self) -> Result<()> {
        let path = Path::new(".skonto.toml");
        if path.exists() {
            return Err(eyre!(
                ".skonto.toml already exists, refusing to overwrite it"
            ));
        }

        std::fs::write(path, STARTER_CONFIG)?;
        tracing::info!("wrote starter config");

        println!("Wrote starter config to .skonto.toml");
        println!("Edit it to add categories, then try: skonto quote VIP 100");
        Ok(())
    }
}
