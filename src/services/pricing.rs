//! Discount resolution service.

use std::sync::Arc;

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::Quote;
use crate::registry::StrategyRegistry;

/// Service resolving `(category, amount)` pairs to discounts.
///
/// Resolution is a single registry lookup: categories with a registered
/// strategy get that strategy's discount, everything else falls back to a
/// zero discount. The service itself holds no mutable state, so it can be
/// cloned freely.
#[derive(Clone)]
pub struct PricingService {
    registry: Arc<StrategyRegistry>,
}

impl FromRef<Context> for PricingService {
    fn from_ref(ctx: &Context) -> Self {
        Self {
            registry: Arc::clone(&ctx.registry),
        }
    }
}

impl PricingService {
    /// Creates a service over an already-built registry.
    pub fn new(registry: Arc<StrategyRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve a discount and return the full quote.
    ///
    /// Unknown categories resolve to a zero discount with no strategy
    /// attached; they are "no special pricing", not a failure.
    ///
    /// # Errors
    /// [`AppError::InvalidAmount`] if `amount` is negative or non-finite.
    pub fn quote(&self, category: &str, amount: f64) -> Result<Quote, AppError> {
        validate_amount(amount)?;

        match self.registry.get(category) {
            Some(strategy) => {
                let discount = strategy.compute_discount(amount);
                tracing::debug!(
                    %category,
                    strategy = %strategy.describe(),
                    amount,
                    discount,
                    "resolved discount"
                );
                Ok(Quote {
                    category: category.to_string(),
                    amount,
                    discount,
                    strategy: Some(strategy.describe()),
                })
            }
            None => {
                tracing::debug!(%category, amount, "no strategy registered, falling back to zero discount");
                Ok(Quote {
                    category: category.to_string(),
                    amount,
                    discount: 0.0,
                    strategy: None,
                })
            }
        }
    }

    /// Resolve a discount amount for a category and base amount.
    ///
    /// # Errors
    /// [`AppError::InvalidAmount`] if `amount` is negative or non-finite.
    pub fn resolve(&self, category: &str, amount: f64) -> Result<f64, AppError> {
        self.quote(category, amount).map(|quote| quote.discount)
    }
}

/// An amount is valid when it is finite and non-negative.
fn validate_amount(amount: f64) -> Result<(), AppError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::InvalidAmount(amount));
    }
    Ok(())
}
