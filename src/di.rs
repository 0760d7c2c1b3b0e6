//! Dependency injection infrastructure.
//!
//! This module provides compile-time dependency injection using the `FromRef`
//! trait: services declare what they need and are resolved from the
//! application [`Context`](crate::context::Context) instead of constructing
//! their dependencies themselves.
//!
//! # Example
//!
//! ```ignore
//! use crate::di::FromRef;
//!
//! #[derive(Clone)]
//! pub struct PricingService {
//!     registry: Arc<StrategyRegistry>,
//! }
//!
//! impl FromRef<Context> for PricingService {
//!     fn from_ref(ctx: &Context) -> Self {
//!         Self { registry: Arc::clone(&ctx.registry) }
//!     }
//! }
//!
//! // Usage
//! let ctx = Context::from_config(config)?;
//! let pricing = PricingService::from_ref(&ctx);
//! ```

/// Trait for extracting a value from a reference to another type.
///
/// This is the core trait for compile-time dependency injection.
/// Types that implement `FromRef<T>` can be extracted from `&T`.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Blanket implementation: any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}
