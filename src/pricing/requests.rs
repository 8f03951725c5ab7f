//! Quote request DTOs.

use chrono::NaiveDate;
use serde::Deserialize;

use super::models::CarTypeId;

/// Booking form payload asking for a price
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub car_type_id: CarTypeId,
    pub pick_up_date: NaiveDate,
    pub return_date: NaiveDate,
}
