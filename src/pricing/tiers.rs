//! Discount tiers.
//!
//! Tiers are checked in `TIER_PRIORITY` order and the first eligible tier
//! prices the whole rental. Days left over after the last full period are
//! always charged at the base daily rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::PricingRule;

/// Discount bracket with its own rate and day threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Monthly,
    Weekly,
    Daily,
}

/// Tier evaluation order, larger periods first
pub const TIER_PRIORITY: [Tier; 3] = [Tier::Monthly, Tier::Weekly, Tier::Daily];

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Monthly => "monthly",
            Tier::Weekly => "weekly",
            Tier::Daily => "daily",
        }
    }

    /// Number of days one unit of this tier covers
    pub fn period_days(&self) -> i64 {
        match self {
            Tier::Monthly => 30,
            Tier::Weekly => 7,
            Tier::Daily => 1,
        }
    }

    /// Rate charged per full period, `None` when the tier is disabled.
    pub fn rate(&self, rule: &PricingRule) -> Option<Decimal> {
        match self {
            Tier::Monthly => rule.monthly_tier_rate(),
            Tier::Weekly => rule.weekly_tier_rate(),
            Tier::Daily => Some(rule.base_daily_rate),
        }
    }

    /// The daily tier always applies; the others need the day threshold
    /// and an enabled rate.
    pub fn is_eligible(&self, rule: &PricingRule, days: i64) -> bool {
        match self {
            Tier::Daily => true,
            _ => days >= self.period_days() && self.rate(rule).is_some(),
        }
    }

    /// Split a duration into (full periods, remainder days).
    pub fn split(&self, days: i64) -> (i64, i64) {
        let period = self.period_days();
        (days / period, days % period)
    }

    /// Price `days` under this tier, before seasonal adjustment.
    ///
    /// `None` if the amount does not fit in a `Decimal`.
    pub fn price(&self, rule: &PricingRule, days: i64) -> Option<Decimal> {
        let (full_periods, remainder_days) = self.split(days);
        let period_rate = self.rate(rule).unwrap_or(Decimal::ZERO);
        let periods = Decimal::from(full_periods).checked_mul(period_rate)?;
        let remainder = Decimal::from(remainder_days).checked_mul(rule.base_daily_rate)?;
        periods.checked_add(remainder)
    }
}

/// Pick the first eligible tier in priority order.
pub fn select_tier(rule: &PricingRule, days: i64) -> Tier {
    TIER_PRIORITY
        .iter()
        .copied()
        .find(|tier| tier.is_eligible(rule, days))
        .unwrap_or(Tier::Daily)
}
