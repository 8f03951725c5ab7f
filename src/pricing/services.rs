//! Pricing catalog: rule lookup and quoting over already-fetched rules.
//!
//! The catalog holds the pricing rules the data-fetch layer returned. It
//! never fetches or stores anything itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::PricingConfig;
use crate::error::{PricingError, Result};

use super::calculators::{
    effective_daily_rate, effective_monthly_rate, effective_weekly_rate, format_currency,
    quote_rental, rental_days, round_money,
};
use super::models::{CarTypeId, PricingRule};
use super::requests::QuoteRequest;
use super::responses::{QuoteBreakdown, RateCard};

/// Validated set of pricing rules
#[derive(Debug, Clone, Default)]
pub struct PricingCatalog {
    rules: Vec<PricingRule>,
}

impl PricingCatalog {
    /// Build a catalog, rejecting rules that break the rate invariants.
    pub fn new(rules: Vec<PricingRule>) -> Result<Self> {
        for rule in &rules {
            rule.validate()?;
        }
        info!("Loaded pricing catalog with {} rules", rules.len());
        Ok(Self { rules })
    }

    /// Parse a JSON array of rule records as returned by the backend.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Vec<PricingRule> = serde_json::from_str(json)?;
        Self::new(rules)
    }

    pub fn rules(&self) -> &[PricingRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn active_rules(&self, car_type_id: CarTypeId) -> impl Iterator<Item = &PricingRule> {
        self.rules
            .iter()
            .filter(move |r| r.car_type_id == car_type_id && r.active)
    }

    /// Find the active rule for a car type.
    ///
    /// With a date, only rules whose window contains it qualify. Among
    /// candidates the one with the latest `valid_from` wins.
    pub fn rule_for(&self, car_type_id: CarTypeId, on: Option<NaiveDate>) -> Option<&PricingRule> {
        self.active_rules(car_type_id)
            .filter(|r| on.map_or(true, |date| r.is_valid_on(date)))
            .max_by_key(|r| r.valid_from)
    }

    /// Price a booking.
    ///
    /// The rule whose window contains the pick-up date prices the booking.
    /// When no window contains it, enforcement rejects the booking; without
    /// enforcement the latest active rule for the car type is used instead.
    pub fn quote(&self, request: &QuoteRequest, config: &PricingConfig) -> Result<QuoteBreakdown> {
        let days = rental_days(request.pick_up_date, request.return_date)?;
        let enforce = config.enforce_validity_window;

        let rule = match self.rule_for(request.car_type_id, Some(request.pick_up_date)) {
            Some(rule) => rule,
            None if !enforce => self.rule_for(request.car_type_id, None).ok_or(
                PricingError::NoRuleForCarType {
                    car_type_id: request.car_type_id,
                },
            )?,
            None => return Err(self.missing_rule_error(request.car_type_id, request.pick_up_date)),
        };

        debug!(
            car_type_id = request.car_type_id,
            days,
            pick_up = %request.pick_up_date,
            "Quoting booking"
        );

        let start_date = enforce.then_some(request.pick_up_date);
        quote_rental(Some(rule), days, start_date)?.ok_or(PricingError::NoRuleForCarType {
            car_type_id: request.car_type_id,
        })
    }

    /// Effective rates for display, rounded to cents.
    pub fn rate_card(&self, car_type_id: CarTypeId, on: Option<NaiveDate>) -> Option<RateCard> {
        let rule = self.rule_for(car_type_id, on)?;
        let non_zero = |rate: Decimal| (rate > Decimal::ZERO).then_some(round_money(rate, 2));
        Some(RateCard {
            car_type_id,
            daily: round_money(effective_daily_rate(Some(rule)), 2),
            weekly: non_zero(effective_weekly_rate(Some(rule))),
            monthly: non_zero(effective_monthly_rate(Some(rule))),
        })
    }

    /// Formatted "from" price for listings.
    pub fn from_price_label(
        &self,
        car_type_id: CarTypeId,
        on: Option<NaiveDate>,
        config: &PricingConfig,
    ) -> Option<String> {
        let card = self.rate_card(car_type_id, on)?;
        Some(format!(
            "from {}/day",
            format_currency(card.daily, Some(&config.currency_symbol))
        ))
    }

    fn missing_rule_error(&self, car_type_id: CarTypeId, date: NaiveDate) -> PricingError {
        match self.active_rules(car_type_id).max_by_key(|r| r.valid_from) {
            Some(rule) => PricingError::RuleNotApplicable {
                car_type_id,
                date,
                valid_from: rule.valid_from,
                valid_to: rule.valid_to,
            },
            None => PricingError::NoRuleForCarType { car_type_id },
        }
    }
}
