//! Strategy registry mapping customer categories to pricing strategies.

use std::collections::HashMap;

use crate::config::{PricingConfig, StrategySpec};
use crate::error::AppError;
use crate::strategies::{PercentageStrategy, PricingStrategy};

/// Immutable-after-publication mapping from category label to strategy.
///
/// The registry is built once (from config or programmatically), optionally
/// extended with [`register`](Self::register), and then wrapped in an `Arc`
/// by the [`Context`](crate::context::Context). Because `register` takes
/// `&mut self`, no registration can happen after the registry is shared, so
/// readers never race a writer.
pub struct StrategyRegistry {
    strategies: HashMap<String, Box<dyn PricingStrategy>>,
}

impl StrategyRegistry {
    /// Build the registry from pricing configuration.
    ///
    /// Each `StrategySpec` is turned into its boxed implementation here. TOML
    /// tables cannot express duplicate keys, so only the empty-table and
    /// invalid-parameter cases can fail.
    pub fn from_config(pricing: &PricingConfig) -> Result<Self, AppError> {
        let mut registry = Self {
            strategies: HashMap::with_capacity(pricing.categories.len()),
        };

        for (category, spec) in &pricing.categories {
            let strategy: Box<dyn PricingStrategy> = match spec {
                StrategySpec::Percentage { rate } => {
                    Box::new(PercentageStrategy::new(category, *rate)?)
                }
            };
            registry.register(category.clone(), strategy)?;
        }

        registry.ensure_non_empty()?;
        Ok(registry)
    }

    /// Build the registry from explicit `(label, strategy)` pairs.
    ///
    /// Rejects duplicate labels and the empty mapping.
    pub fn from_entries<I>(entries: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (String, Box<dyn PricingStrategy>)>,
    {
        let mut registry = Self {
            strategies: HashMap::new(),
        };

        for (category, strategy) in entries {
            registry.register(category, strategy)?;
        }

        registry.ensure_non_empty()?;
        Ok(registry)
    }

    /// Register a strategy for a new category.
    ///
    /// Duplicate labels are rejected rather than silently overwritten, so a
    /// registration can never change the behavior of an existing category.
    pub fn register(
        &mut self,
        category: impl Into<String>,
        strategy: Box<dyn PricingStrategy>,
    ) -> Result<(), AppError> {
        let category = category.into();
        if self.strategies.contains_key(&category) {
            return Err(AppError::DuplicateCategory(category));
        }

        tracing::debug!(%category, strategy = %strategy.describe(), "registered strategy");
        self.strategies.insert(category, strategy);
        Ok(())
    }

    /// Look up the strategy for a category label (case-sensitive).
    pub fn get(&self, category: &str) -> Option<&dyn PricingStrategy> {
        self.strategies.get(category).map(Box::as_ref)
    }

    /// Registered category labels, sorted for stable output.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    fn ensure_non_empty(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::EmptyRegistry);
        }
        Ok(())
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("categories", &self.categories())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn tier_config() -> PricingConfig {
        let mut categories = HashMap::new();
        categories.insert(
            "Regular".to_string(),
            StrategySpec::Percentage { rate: 0.05 },
        );
        categories.insert("VIP".to_string(), StrategySpec::Percentage { rate: 0.15 });
        categories.insert(
            "Premium".to_string(),
            StrategySpec::Percentage { rate: 0.10 },
        );
        PricingConfig {
            currency: "USD".to_string(),
            categories,
        }
    }

    #[test]
    fn builds_from_config() {
        let registry = StrategyRegistry::from_config(&tier_config()).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.categories(), vec!["Premium", "Regular", "VIP"]);
        assert_eq!(registry.get("VIP").unwrap().compute_discount(100.0), 15.0);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = StrategyRegistry::from_config(&tier_config()).unwrap();

        assert!(registry.get("VIP").is_some());
        assert!(registry.get("vip").is_none());
    }

    #[test]
    fn rejects_empty_config() {
        let pricing = PricingConfig {
            currency: "USD".to_string(),
            categories: HashMap::new(),
        };

        assert!(matches!(
            StrategyRegistry::from_config(&pricing),
            Err(AppError::EmptyRegistry)
        ));
    }

    #[test]
    fn rejects_empty_entries() {
        assert!(matches!(
            StrategyRegistry::from_entries(Vec::new()),
            Err(AppError::EmptyRegistry)
        ));
    }

    #[test]
    fn rejects_duplicate_labels() {
        let entries: Vec<(String, Box<dyn PricingStrategy>)> = vec![
            (
                "Regular".to_string(),
                Box::new(PercentageStrategy::new("Regular", 0.05).unwrap()),
            ),
            (
                "Regular".to_string(),
                Box::new(PercentageStrategy::new("Regular", 0.20).unwrap()),
            ),
        ];

        assert!(matches!(
            StrategyRegistry::from_entries(entries),
            Err(AppError::DuplicateCategory(category)) if category == "Regular"
        ));
    }

    #[test]
    fn register_rejects_existing_category() {
        let mut registry = StrategyRegistry::from_config(&tier_config()).unwrap();

        let err = registry
            .register(
                "VIP",
                Box::new(PercentageStrategy::new("VIP", 0.50).unwrap()),
            )
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateCategory(_)));
        // The existing strategy is untouched.
        assert_eq!(registry.get("VIP").unwrap().compute_discount(100.0), 15.0);
    }

    #[test]
    fn register_extends_without_touching_existing_categories() {
        let mut registry = StrategyRegistry::from_config(&tier_config()).unwrap();

        registry
            .register(
                "Gold",
                Box::new(PercentageStrategy::new("Gold", 0.20).unwrap()),
            )
            .unwrap();

        assert_eq!(registry.get("Gold").unwrap().compute_discount(100.0), 20.0);
        assert_eq!(
            registry.get("Regular").unwrap().compute_discount(100.0),
            5.0
        );
    }

    #[test]
    fn invalid_rate_in_config_names_the_category() {
        let mut categories = HashMap::new();
        categories.insert("Broken".to_string(), StrategySpec::Percentage { rate: 2.0 });
        let pricing = PricingConfig {
            currency: "USD".to_string(),
            categories,
        };

        assert!(matches!(
            StrategyRegistry::from_config(&pricing),
            Err(AppError::InvalidRate { category, .. }) if category == "Broken"
        ));
    }
}
