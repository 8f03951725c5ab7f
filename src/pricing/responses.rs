//! Quote types handed to presentation code.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::CarTypeId;
use super::tiers::Tier;

/// Total price for one rental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalQuote {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
}

/// Itemised quote for the booking summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub car_type_id: CarTypeId,
    pub days: i64,
    pub tier: Tier,
    pub full_periods: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub period_rate: Decimal,
    pub remainder_days: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub daily_rate: Decimal,
    /// Tier price before seasonal adjustment
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub seasonal_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
}

impl QuoteBreakdown {
    pub fn to_quote(&self) -> RentalQuote {
        RentalQuote {
            total_price: self.total_price,
        }
    }
}

impl From<QuoteBreakdown> for RentalQuote {
    fn from(breakdown: QuoteBreakdown) -> Self {
        breakdown.to_quote()
    }
}

/// Seasonally adjusted rates for listings; disabled tiers are `None`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    pub car_type_id: CarTypeId,
    #[serde(with = "rust_decimal::serde::str")]
    pub daily: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub weekly: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub monthly: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_breakdown_serializes_amounts_as_strings() {
        let breakdown = QuoteBreakdown {
            car_type_id: 1,
            days: 10,
            tier: Tier::Weekly,
            full_periods: 1,
            period_rate: dec!(600),
            remainder_days: 3,
            daily_rate: dec!(100),
            subtotal: dec!(900),
            seasonal_multiplier: dec!(1.5),
            total_price: dec!(1350.0),
        };

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["tier"], "weekly");
        assert_eq!(json["totalPrice"], "1350.0");
        assert_eq!(json["remainderDays"], 3);

        let quote: RentalQuote = breakdown.into();
        assert_eq!(quote.total_price, dec!(1350));
    }

    #[test]
    fn test_rate_card_omits_disabled_tiers() {
        let card = RateCard {
            car_type_id: 2,
            daily: dec!(450),
            weekly: None,
            monthly: Some(dec!(9000)),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["daily"], "450");
        assert!(json["weekly"].is_null());
        assert_eq!(json["monthly"], "9000");
    }
}
