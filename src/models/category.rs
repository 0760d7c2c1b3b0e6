//! Category listing model.

use serde::Serialize;

/// A registered category and the strategy it maps to.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    /// Category label as registered (case-sensitive).
    pub name: String,
    /// Description of the mapped strategy.
    pub strategy: String,
}
