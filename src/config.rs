//! Finance policy configuration
//!
//! Deposit/fee rates and the banded refund schedule are platform policy,
//! not per-request input. They live here as data so call sites receive
//! them by injection and overriding a rate never touches the calculators.

use rust_decimal::Decimal;

/// One band of the refund schedule: cancellations at least
/// `min_days_before_start` days ahead of the activity refund
/// `refund_percent` of the amount paid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefundBand {
    pub min_days_before_start: f64,
    pub refund_percent: u32,
}

/// Platform finance policy
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceConfig {
    /// Share of the total collected up front as a deposit
    pub deposit_rate: Decimal,
    /// Platform commission, computed from the total (not from the deposit)
    pub platform_fee_rate: Decimal,
    /// Refund schedule, ordered from most to least generous band.
    /// Cancellations matching no band refund nothing.
    pub refund_bands: Vec<RefundBand>,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            // 25% deposit
            deposit_rate: Decimal::new(25, 2),
            // 5% platform fee
            platform_fee_rate: Decimal::new(5, 2),
            refund_bands: vec![
                RefundBand {
                    min_days_before_start: 14.0,
                    refund_percent: 100,
                },
                RefundBand {
                    min_days_before_start: 7.0,
                    refund_percent: 50,
                },
                RefundBand {
                    min_days_before_start: 2.0,
                    refund_percent: 25,
                },
            ],
        }
    }
}

impl FinanceConfig {
    /// Refund percentage for a cancellation `days_before_start` days
    /// ahead of the activity (fractional days allowed)
    pub fn refund_percent_for(&self, days_before_start: f64) -> u32 {
        self.refund_bands
            .iter()
            .find(|band| days_before_start >= band.min_days_before_start)
            .map(|band| band.refund_percent)
            .unwrap_or(0)
    }
}
