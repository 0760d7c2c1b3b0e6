//! Application error types.

use thiserror::Error;

/// Application-level errors for Skonto.
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Invalid amount {0}: must be a finite, non-negative number")]
    InvalidAmount(f64),

    // Registry construction errors
    #[error("Strategy registry is empty: at least one category must be configured")]
    EmptyRegistry,

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Invalid rate {rate} for category '{category}': must be a finite number within 0.0..=1.0")]
    InvalidRate { category: String, rate: f64 },

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
