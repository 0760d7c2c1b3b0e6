//! Quote model produced by discount resolution.

use serde::Serialize;

/// The result of resolving a discount for a category and base amount.
///
/// `strategy` carries the description of the strategy that was applied, or
/// `None` when the category is unknown and the no-discount fallback kicked
/// in. Unknown categories are a valid outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    /// The customer category the quote was requested for.
    pub category: String,
    /// The validated base amount.
    pub amount: f64,
    /// The computed discount (zero for unknown categories).
    pub discount: f64,
    /// Description of the applied strategy, if any matched.
    pub strategy: Option<String>,
}

impl Quote {
    /// Amount owed after the discount is applied.
    pub fn total(&self) -> f64 {
        self.amount - self.discount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_subtracts_the_discount() {
        let quote = Quote {
            category: "VIP".to_string(),
            amount: 100.0,
            discount: 15.0,
            strategy: Some("15% percentage discount".to_string()),
        };

        assert_eq!(quote.total(), 85.0);
    }

    #[test]
    fn serializes_fallback_quotes_with_null_strategy() {
        let quote = Quote {
            category: "Unknown".to_string(),
            amount: 100.0,
            discount: 0.0,
            strategy: None,
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["discount"], 0.0);
        assert!(json["strategy"].is_null());
    }
}
