//! Pricing strategy implementations.
//!
//! Each strategy implements the [`PricingStrategy`] trait and is selected at
//! runtime by the category label it was registered under, never by branching
//! inside the resolution logic.
//!
//! # Available Strategies
//!
//! | Strategy | Module | Config `kind` |
//! |----------|--------|---------------|
//! | Percentage of amount | [`percentage`] | `percentage` |
//!
//! # Implementing a Strategy
//!
//! To implement a new strategy:
//!
//! 1. Create a struct holding its (immutable) parameters
//! 2. Implement [`PricingStrategy`] for it
//! 3. Add a variant to [`crate::config::StrategySpec`] and a matching arm in
//!    [`crate::registry::StrategyRegistry::from_config`]
//!
//! Existing strategies and the resolution logic stay untouched.

pub mod percentage;

pub use percentage::PercentageStrategy;

/// Computes a discount for a customer category.
///
/// Implementations are stateless after construction and shared for the
/// lifetime of the registry, so they must be `Send + Sync`.
pub trait PricingStrategy: Send + Sync {
    /// Compute the discount for a base amount.
    ///
    /// The amount has already been validated by the caller: it is finite and
    /// non-negative. The returned discount must be non-negative as well.
    fn compute_discount(&self, amount: f64) -> f64;

    /// Human-readable description, e.g. `5% percentage discount`.
    fn describe(&self) -> String;
}
