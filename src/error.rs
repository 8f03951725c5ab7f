//! Error handling for the pricing engine

use chrono::NaiveDate;

/// Pricing error type.
///
/// An absent or inactive rule is not an error: it prices at zero.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid rental duration: {days} days")]
    InvalidDuration { days: i64 },

    #[error("Return date {end} is before pick-up date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Pricing rule for car type {car_type_id} does not apply on {date}")]
    RuleNotApplicable {
        car_type_id: i64,
        date: NaiveDate,
        valid_from: Option<NaiveDate>,
        valid_to: Option<NaiveDate>,
    },

    #[error("No pricing rule found for car type {car_type_id}")]
    NoRuleForCarType { car_type_id: i64 },

    #[error("Invalid pricing rule for car type {car_type_id}: {reason}")]
    InvalidRule { car_type_id: i64, reason: String },

    #[error("Price overflow for car type {car_type_id} over {days} days")]
    PriceOverflow { car_type_id: i64, days: i64 },

    #[error("Malformed pricing data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, PricingError>;
