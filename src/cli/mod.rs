//! CLI module for Skonto.
//!
//! Subcommands:
//! - `init`: Write a starter `.skonto.toml` project config
//! - `quote`: Resolve a discount for a category and amount
//! - `categories`: List configured categories and their strategies
//! - `check`: Validate the pricing configuration

mod categories;
mod check;
mod init;
mod quote;

use clap::{Parser, Subcommand};

/// Skonto - Discount Pricing Engine
#[derive(Parser)]
#[command(name = "skonto")]
#[command(about = "Category-based discount pricing engine with pluggable strategies")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a starter `.skonto.toml` with the classic customer tiers
    Init,

    /// Resolve a discount for a customer category and base amount
    Quote {
        /// Customer category label (case-sensitive)
        category: String,

        /// Base amount to discount
        amount: f64,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// List configured categories and the strategies they map to
    Categories {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load the configuration and report whether it is usable
    Check,
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Init => self.run_init(),
            Command::Quote {
                ref category,
                amount,
                json,
            } => self.run_quote(category, amount, json),
            Command::Categories { json } => self.run_categories(json),
            Command::Check => self.run_check(),
        }
    }
}
