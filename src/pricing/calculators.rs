//! Core pricing calculation functions.
//!
//! Pure functions for rental pricing math. Every function here is a function
//! of its arguments only: no clock, no I/O, no shared state.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use tracing::{debug, warn};

use crate::error::{PricingError, Result};

use super::models::PricingRule;
use super::responses::QuoteBreakdown;
use super::tiers::{select_tier, Tier};

/// Currency symbol used when the caller supplies none
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

/// Round a displayed rate to `places` decimals, ties to even.
///
/// Rate cards use this so seasonally adjusted rates such as `133.335` show
/// as whole cents.
///
/// ```
/// use rust_decimal_macros::dec;
/// use rental_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(133.335), 2), dec!(133.34));
/// assert_eq!(round_money(dec!(133.325), 2), dec!(133.32));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Compute the total price of a rental.
///
/// Returns zero for an absent or inactive rule, whatever `days` is. For an
/// active rule, negative `days` is rejected, and when `start_date` is given
/// it must fall inside the rule's validity window. The first eligible tier
/// prices the rental and the seasonal multiplier is applied last. No
/// rounding is applied.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use rental_pricing::pricing::{compute_rental_price, PricingRule};
///
/// let rule = PricingRule {
///     weekly_rate: Some(dec!(600)),
///     ..PricingRule::new(1, dec!(100))
/// };
/// assert_eq!(compute_rental_price(Some(&rule), 10, None).unwrap(), dec!(900));
/// ```
pub fn compute_rental_price(
    rule: Option<&PricingRule>,
    days: i64,
    start_date: Option<NaiveDate>,
) -> Result<Decimal> {
    Ok(quote_rental(rule, days, start_date)?
        .map(|breakdown| breakdown.total_price)
        .unwrap_or(Decimal::ZERO))
}

/// Price a rental and keep the intermediate figures.
///
/// `None` means there is no active rule, i.e. the price is zero. When a
/// breakdown is returned its `total_price` is exactly what
/// [`compute_rental_price`] returns for the same arguments.
pub fn quote_rental(
    rule: Option<&PricingRule>,
    days: i64,
    start_date: Option<NaiveDate>,
) -> Result<Option<QuoteBreakdown>> {
    let Some(rule) = rule.filter(|r| r.active) else {
        return Ok(None);
    };

    if days < 0 {
        warn!(car_type_id = rule.car_type_id, days, "Rejected negative rental duration");
        return Err(PricingError::InvalidDuration { days });
    }

    if let Some(date) = start_date {
        if !rule.is_valid_on(date) {
            warn!(
                car_type_id = rule.car_type_id,
                %date,
                "Pricing rule not valid on start date"
            );
            return Err(PricingError::RuleNotApplicable {
                car_type_id: rule.car_type_id,
                date,
                valid_from: rule.valid_from,
                valid_to: rule.valid_to,
            });
        }
    }

    let tier = select_tier(rule, days);
    let (full_periods, remainder_days) = tier.split(days);
    let overflow = || {
        warn!(car_type_id = rule.car_type_id, days, "Rental price overflowed");
        PricingError::PriceOverflow {
            car_type_id: rule.car_type_id,
            days,
        }
    };
    let subtotal = tier.price(rule, days).ok_or_else(overflow)?;
    let total_price = rule.apply_seasonal(subtotal).ok_or_else(overflow)?;

    debug!(
        car_type_id = rule.car_type_id,
        days,
        tier = tier.as_str(),
        %subtotal,
        %total_price,
        "Priced rental"
    );

    Ok(Some(QuoteBreakdown {
        car_type_id: rule.car_type_id,
        days,
        tier,
        full_periods,
        period_rate: tier.rate(rule).unwrap_or(Decimal::ZERO),
        remainder_days,
        daily_rate: rule.base_daily_rate,
        subtotal,
        seasonal_multiplier: rule.multiplier(),
        total_price,
    }))
}

/// Base daily rate after seasonal adjustment, zero without a rule.
pub fn effective_daily_rate(rule: Option<&PricingRule>) -> Decimal {
    effective_rate(rule, Tier::Daily)
}

/// Weekly rate after seasonal adjustment, zero without a rule or when the
/// weekly tier is disabled.
pub fn effective_weekly_rate(rule: Option<&PricingRule>) -> Decimal {
    effective_rate(rule, Tier::Weekly)
}

/// Monthly rate after seasonal adjustment, zero without a rule or when the
/// monthly tier is disabled.
pub fn effective_monthly_rate(rule: Option<&PricingRule>) -> Decimal {
    effective_rate(rule, Tier::Monthly)
}

fn effective_rate(rule: Option<&PricingRule>, tier: Tier) -> Decimal {
    rule.and_then(|r| tier.rate(r).map(|rate| rate.saturating_mul(r.multiplier())))
        .unwrap_or(Decimal::ZERO)
}

/// Format an amount as the symbol followed by the amount fixed to two
/// decimal places. Midpoints round away from zero. No grouping separators.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use rental_pricing::pricing::format_currency;
///
/// assert_eq!(format_currency(dec!(1234.5), None), "R1234.50");
/// assert_eq!(format_currency(dec!(0), Some("$")), "$0.00");
/// ```
pub fn format_currency(amount: Decimal, currency_symbol: Option<&str>) -> String {
    let mut fixed = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if fixed.is_zero() {
        fixed = Decimal::ZERO;
    }
    fixed.rescale(2);
    format!(
        "{}{}",
        currency_symbol.unwrap_or(DEFAULT_CURRENCY_SYMBOL),
        fixed
    )
}

/// Number of whole calendar days between pick-up and return.
///
/// A same-day return is zero days.
pub fn rental_days(pick_up: NaiveDate, return_date: NaiveDate) -> Result<i64> {
    if return_date < pick_up {
        return Err(PricingError::InvalidDateRange {
            start: pick_up,
            end: return_date,
        });
    }
    Ok((return_date - pick_up).num_days())
}
