//! Business logic services for discount pricing.
//!
//! Services orchestrate the strategy registry and handle request validation,
//! resolved from the [`Context`](crate::context::Context) via `FromRef`.

mod pricing;

pub use pricing::PricingService;
