//! Pricing configuration.
//!
//! Loaded once by the embedding application and passed explicitly into
//! catalog calls.

use config::{Config as Cfg, Environment};
use serde::Deserialize;

use crate::error::Result;
use crate::pricing::calculators::DEFAULT_CURRENCY_SYMBOL;

/// Prefix of the environment variables read by [`PricingConfig::from_env`],
/// e.g. `PRICING_CURRENCY_SYMBOL`, `PRICING_ENFORCE_VALIDITY_WINDOW`.
pub const ENV_PREFIX: &str = "PRICING";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PricingConfig {
    /// Prefix for formatted amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Reject quotes whose pick-up date is outside the rule's window
    #[serde(default = "default_enforce_validity_window")]
    pub enforce_validity_window: bool,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_enforce_validity_window() -> bool {
    true
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            enforce_validity_window: default_enforce_validity_window(),
        }
    }
}

impl PricingConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an environment source. Unset keys keep their defaults; a
    /// value that does not parse is an error.
    pub fn load(environment: Environment) -> Result<Self> {
        let config = Cfg::builder().add_source(environment).build()?;
        Ok(config.try_deserialize()?)
    }
}
