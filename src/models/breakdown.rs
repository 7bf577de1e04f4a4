//! Payment breakdown value object

use serde::{Deserialize, Serialize};

/// Split of a booking total into deposit, remainder, platform fee and
/// guide payout. All values are rounded to 2 decimal places; the JSON
/// shape (camelCase) is consumed directly by checkout and dashboard UIs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub total_price: f64,
    /// Captured at booking time
    pub deposit_amount: f64,
    /// Captured closer to the activity date
    pub remainder_amount: f64,
    /// Platform commission, computed from the total
    pub platform_fee: f64,
    /// What the guide receives: total minus platform fee
    pub guide_payout: f64,
}
