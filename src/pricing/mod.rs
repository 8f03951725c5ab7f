//! Rental pricing engine.
//!
//! Prices a rental from a pricing rule and a duration: tiered
//! daily/weekly/monthly rates with a seasonal multiplier applied last.
//! Rules are plain data supplied by the caller.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod services;
pub mod tiers;

// Re-export commonly used items
pub use calculators::{
    compute_rental_price, effective_daily_rate, effective_monthly_rate, effective_weekly_rate,
    format_currency, quote_rental, rental_days, round_money,
};
pub use models::{CarTypeId, PricingRule};
pub use requests::QuoteRequest;
pub use responses::{QuoteBreakdown, RateCard, RentalQuote};
pub use services::PricingCatalog;
pub use tiers::{select_tier, Tier, TIER_PRIORITY};
