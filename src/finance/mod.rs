//! Booking finance calculations
//!
//! Pure calculation layer for the marketplace: payment splits, the
//! cancellation window, refund amounts and check-in payloads. No I/O and
//! no shared state — every method is a transform over explicit inputs,
//! with "now" coming from the injected [`Clock`] in a single read.
//!
//! Booking status progression is owned by the booking-management layer;
//! this module only reads the status to decide eligibility.

use crate::checkin::{CheckInPayload, verification_code};
use crate::clock::{Clock, SystemClock};
use crate::config::FinanceConfig;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Booking, BookingStatus, CancellationPolicy, PaymentBreakdown};
use crate::money::{DECIMAL_PLACES, require_finite, to_decimal, to_f64};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;

/// Finance calculator for bookings
///
/// Holds the platform policy ([`FinanceConfig`]) and a clock. The
/// default construction uses production rates and the system clock;
/// tests inject fixed instants via [`crate::clock::FixedClock`].
pub struct BookingFinance<C: Clock = SystemClock> {
    config: FinanceConfig,
    clock: C,
}

impl BookingFinance {
    pub fn new() -> Self {
        Self::with_config(FinanceConfig::default())
    }

    pub fn with_config(config: FinanceConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }
}

impl Default for BookingFinance {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BookingFinance<C> {
    pub fn with_clock(config: FinanceConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &FinanceConfig {
        &self.config
    }

    /// Split a booking total into deposit, remainder, platform fee and
    /// guide payout
    ///
    /// Deposit and platform fee are each computed from the total and
    /// rounded to the cent half-up; remainder and payout are the exact
    /// complements, so the pairs always sum back to the total.
    pub fn payment_breakdown(&self, total_price: f64) -> FinanceResult<PaymentBreakdown> {
        require_finite(total_price, "total_price")?;
        if total_price < 0.0 {
            return Err(FinanceError::invalid(
                "total_price",
                format!("must be non-negative, got {}", total_price),
            ));
        }

        let total = to_decimal(total_price)
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        let deposit = (total * self.config.deposit_rate)
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        let platform_fee = (total * self.config.platform_fee_rate)
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

        Ok(PaymentBreakdown {
            total_price: to_f64(total),
            deposit_amount: to_f64(deposit),
            remainder_amount: to_f64(total - deposit),
            platform_fee: to_f64(platform_fee),
            guide_payout: to_f64(total - platform_fee),
        })
    }

    /// Full-refund deadline for an activity start instant under a policy
    pub fn deadline(&self, start: DateTime<Utc>, policy: CancellationPolicy) -> DateTime<Utc> {
        start - policy.full_refund_lookback()
    }

    /// Full-refund deadline from a stored start date string
    pub fn cancellation_deadline(
        &self,
        start_date: &str,
        policy: CancellationPolicy,
    ) -> FinanceResult<DateTime<Utc>> {
        let start = crate::models::booking::parse_instant(start_date).ok_or_else(|| {
            FinanceError::invalid(
                "start_date",
                format!("does not parse to a valid instant: {:?}", start_date),
            )
        })?;
        Ok(self.deadline(start, policy))
    }

    /// Whether the traveler can still cancel this booking
    ///
    /// Terminal statuses and past start dates are not cancellable. An
    /// unparseable start date fails open: the booking is treated as
    /// cancellable and the row is flagged for follow-up, never surfaced
    /// as an error to the traveler.
    pub fn can_cancel_booking(&self, booking: &Booking) -> bool {
        if booking.status.is_terminal() {
            return false;
        }

        match booking.parse_start() {
            Some(start) => start >= self.clock.now(),
            None => {
                tracing::warn!(
                    booking_id = %booking.id,
                    start_date = %booking.start_date,
                    "Unparseable booking start date, treating booking as cancellable"
                );
                true
            }
        }
    }

    /// Refund due for a cancellation at `cancelled_at`
    ///
    /// Already cancelled or refunded bookings return the recorded refund
    /// unchanged (0 if none was recorded) — calling this twice never
    /// recomputes. Otherwise the banded schedule in [`FinanceConfig`]
    /// applies over the fractional days between `cancelled_at` and the
    /// activity start. The schedule is independent of the guide's
    /// assigned cancellation policy; that policy lives on the guide
    /// profile and only drives the full-refund deadline shown to
    /// travelers.
    pub fn refund_amount(
        &self,
        booking: &Booking,
        cancelled_at: DateTime<Utc>,
    ) -> FinanceResult<f64> {
        if matches!(
            booking.status,
            BookingStatus::Refunded | BookingStatus::Cancelled
        ) {
            let recorded = booking.refund_amount.unwrap_or(0.0);
            require_finite(recorded, "refund_amount")?;
            return Ok(recorded);
        }

        require_finite(booking.amount_paid, "amount_paid")?;
        if booking.amount_paid <= 0.0 {
            return Ok(0.0);
        }

        let start = booking.parse_start().ok_or_else(|| {
            FinanceError::invalid(
                "start_date",
                format!("does not parse to a valid instant: {:?}", booking.start_date),
            )
        })?;

        let days_until_start =
            start.signed_duration_since(cancelled_at).num_seconds() as f64 / 86_400.0;
        let percent = self.config.refund_percent_for(days_until_start);

        let refund = (to_decimal(booking.amount_paid) * Decimal::from(percent)
            / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .max(Decimal::ZERO);

        Ok(to_f64(refund))
    }

    /// Assemble the check-in payload for a booking
    pub fn check_in_payload(&self, booking: &Booking) -> FinanceResult<CheckInPayload> {
        if booking.id.is_empty() {
            return Err(FinanceError::invalid("id", "must not be empty"));
        }
        if booking.booking_number.is_empty() {
            return Err(FinanceError::invalid("booking_number", "must not be empty"));
        }

        Ok(CheckInPayload {
            booking_id: booking.id.clone(),
            booking_number: booking.booking_number.clone(),
            client_name: booking.client_name().to_string(),
            guide_id: booking.guide_id.clone(),
            service_id: booking.service_id.clone(),
            start_date: booking.start_date.clone(),
            start_time: booking.start_time.clone(),
            participants: booking.participants,
            status: booking.status,
            verification_code: verification_code(&booking.id, &booking.booking_number),
            generated_at: self.clock.now(),
        })
    }

    /// Serialized check-in payload for QR rendering
    pub fn check_in_qr_data(&self, booking: &Booking) -> FinanceResult<String> {
        let payload = self.check_in_payload(booking)?;
        serde_json::to_string(&payload).map_err(|e| {
            FinanceError::Computation(format!("failed to generate check-in data: {}", e))
        })
    }
}
