//! Car rental pricing: tiered rates, seasonal adjustment and quote formatting.

pub mod config;
pub mod error;
pub mod pricing;
pub mod telemetry;

pub use crate::config::PricingConfig;
pub use crate::error::{PricingError, Result};
