//! Percentage-of-amount pricing strategy.

use crate::error::AppError;
use crate::strategies::PricingStrategy;

/// Applies a fixed percentage of the base amount as the discount.
///
/// This is the strategy behind the classic customer tiers: Regular (5%),
/// Premium (10%) and VIP (15%) are all percentage strategies with different
/// rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageStrategy {
    rate: f64,
}

impl PercentageStrategy {
    /// Create a strategy for the given rate, where `0.05` means 5%.
    ///
    /// The rate is validated here, at configuration time, so resolution never
    /// has to re-check it. Rates outside `0.0..=1.0` (or non-finite rates)
    /// are rejected; the `category` is only used to name the offender in the
    /// error.
    pub fn new(category: &str, rate: f64) -> Result<Self, AppError> {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(AppError::InvalidRate {
                category: category.to_string(),
                rate,
            });
        }
        Ok(Self { rate })
    }

    /// The configured rate as a fraction of the amount.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl PricingStrategy for PercentageStrategy {
    fn compute_discount(&self, amount: f64) -> f64 {
        amount * self.rate
    }

    fn describe(&self) -> String {
        format!("{}% percentage discount", self.rate * 100.0)
    }
}
