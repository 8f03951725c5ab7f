//! Pricing rule model.
//!
//! Rules arrive from the rental backend as camelCase JSON records. Decimal
//! fields are accepted either as JSON numbers or as strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, Result};

/// Identifier of a vehicle category
pub type CarTypeId = i64;

/// Rate schedule for one vehicle category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    pub car_type_id: CarTypeId,
    pub base_daily_rate: Decimal,
    /// Zero or absent disables the weekly tier
    #[serde(default)]
    pub weekly_rate: Option<Decimal>,
    /// Zero or absent disables the monthly tier
    #[serde(default)]
    pub monthly_rate: Option<Decimal>,
    /// Carried for display only; no pricing formula reads it
    #[serde(default)]
    pub weekend_rate: Option<Decimal>,
    #[serde(default)]
    pub seasonal_multiplier: Option<Decimal>,
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
    pub active: bool,
}

impl PricingRule {
    /// Active daily-only rule with no validity window
    pub fn new(car_type_id: CarTypeId, base_daily_rate: Decimal) -> Self {
        Self {
            car_type_id,
            base_daily_rate,
            weekly_rate: None,
            monthly_rate: None,
            weekend_rate: None,
            seasonal_multiplier: None,
            valid_from: None,
            valid_to: None,
            active: true,
        }
    }

    /// Weekly rate if the weekly tier is enabled
    pub fn weekly_tier_rate(&self) -> Option<Decimal> {
        self.weekly_rate.filter(|rate| *rate > Decimal::ZERO)
    }

    /// Monthly rate if the monthly tier is enabled
    pub fn monthly_tier_rate(&self) -> Option<Decimal> {
        self.monthly_rate.filter(|rate| *rate > Decimal::ZERO)
    }

    /// Seasonal multiplier, `1` when absent
    pub fn multiplier(&self) -> Decimal {
        self.seasonal_multiplier.unwrap_or(Decimal::ONE)
    }

    /// Apply the seasonal multiplier to an already tier-priced amount.
    ///
    /// `None` if the adjusted amount overflows.
    pub fn apply_seasonal(&self, amount: Decimal) -> Option<Decimal> {
        match self.seasonal_multiplier {
            Some(multiplier) if multiplier != Decimal::ONE => amount.checked_mul(multiplier),
            _ => Some(amount),
        }
    }

    /// Check if the rule's validity window contains the given date.
    ///
    /// Both bounds are inclusive; a missing bound is open.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.valid_from {
            if date < from {
                return false;
            }
        }
        match self.valid_to {
            Some(to) => date <= to,
            None => true,
        }
    }

    /// Check the record against the rate and window invariants.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| PricingError::InvalidRule {
            car_type_id: self.car_type_id,
            reason: reason.to_string(),
        };

        if self.base_daily_rate < Decimal::ZERO {
            return Err(invalid("baseDailyRate is negative"));
        }
        for (name, rate) in [
            ("weeklyRate", self.weekly_rate),
            ("monthlyRate", self.monthly_rate),
            ("weekendRate", self.weekend_rate),
        ] {
            if matches!(rate, Some(r) if r < Decimal::ZERO) {
                return Err(invalid(&format!("{} is negative", name)));
            }
        }
        if matches!(self.seasonal_multiplier, Some(m) if m <= Decimal::ZERO) {
            return Err(invalid("seasonalMultiplier must be positive"));
        }
        if let (Some(from), Some(to)) = (self.valid_from, self.valid_to) {
            if to < from {
                return Err(invalid("validTo is before validFrom"));
            }
        }
        Ok(())
    }
}
