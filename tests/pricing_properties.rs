//! Property tests for the pricing engine.

use proptest::prelude::*;
use rental_pricing::pricing::{compute_rental_price, quote_rental, PricingRule};
use rust_decimal::Decimal;

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn arb_rule() -> impl Strategy<Value = PricingRule> {
    (
        1i64..10_000,
        0i64..200_000,
        prop::option::of(0i64..1_000_000),
        prop::option::of(0i64..5_000_000),
        prop::option::of(50i64..300),
        any::<bool>(),
    )
        .prop_map(|(car_type_id, daily, weekly, monthly, multiplier, active)| PricingRule {
            weekly_rate: weekly.map(money),
            monthly_rate: monthly.map(money),
            seasonal_multiplier: multiplier.map(money),
            active,
            ..PricingRule::new(car_type_id, money(daily))
        })
}

/// Rules whose tier rates never undercut the day before their threshold.
fn arb_non_dipping_rule() -> impl Strategy<Value = PricingRule> {
    (0i64..200_000, 0i64..500_000, 0i64..500_000, prop::option::of(50i64..300)).prop_map(
        |(daily, weekly_extra, monthly_extra, multiplier)| {
            let weekly = 6 * daily + weekly_extra;
            let monthly = (29 * daily).max(4 * weekly + daily) + monthly_extra;
            PricingRule {
                weekly_rate: Some(money(weekly)),
                monthly_rate: Some(money(monthly)),
                seasonal_multiplier: multiplier.map(money),
                ..PricingRule::new(1, money(daily))
            }
        },
    )
}

proptest! {
    #[test]
    fn inactive_or_absent_rules_price_zero(rule in arb_rule(), days in -400i64..400) {
        let inactive = PricingRule { active: false, ..rule };
        prop_assert_eq!(compute_rental_price(Some(&inactive), days, None).unwrap(), Decimal::ZERO);
        prop_assert_eq!(compute_rental_price(None, days, None).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn daily_only_rules_are_linear(daily in 0i64..200_000, days in 0i64..400) {
        let rule = PricingRule {
            weekly_rate: Some(Decimal::ZERO),
            monthly_rate: Some(Decimal::ZERO),
            ..PricingRule::new(1, money(daily))
        };
        prop_assert_eq!(
            compute_rental_price(Some(&rule), days, None).unwrap(),
            Decimal::from(days) * money(daily)
        );
    }

    #[test]
    fn non_dipping_rules_are_monotonic(rule in arb_non_dipping_rule(), days in 0i64..400) {
        let today = compute_rental_price(Some(&rule), days, None).unwrap();
        let tomorrow = compute_rental_price(Some(&rule), days + 1, None).unwrap();
        prop_assert!(tomorrow >= today);
    }

    #[test]
    fn breakdown_matches_total(rule in arb_rule(), days in 0i64..400) {
        let rule = PricingRule { active: true, ..rule };
        let total = compute_rental_price(Some(&rule), days, None).unwrap();
        let quote = quote_rental(Some(&rule), days, None).unwrap().unwrap();
        prop_assert_eq!(quote.total_price, total);
        prop_assert_eq!(
            quote.full_periods * quote.tier.period_days() + quote.remainder_days,
            days
        );
    }

    #[test]
    fn negative_days_rejected_for_active_rules(rule in arb_rule(), days in -400i64..0) {
        let rule = PricingRule { active: true, ..rule };
        prop_assert!(compute_rental_price(Some(&rule), days, None).is_err());
    }
}
