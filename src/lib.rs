//! Booking finance core for the guide marketplace
//!
//! Pure calculation layer shared by checkout, dashboards and the booking
//! management backend: payment splits, cancellation deadlines, refund
//! amounts, status formatting and check-in QR payloads. Persistence,
//! payment capture and status transitions live with the callers — this
//! crate only derives values from the `Booking` records it is handed.

pub mod checkin;
pub mod clock;
pub mod config;
pub mod error;
pub mod finance;
pub mod models;
pub mod money;

// Re-exports
pub use checkin::{CheckInPayload, verification_code};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{FinanceConfig, RefundBand};
pub use error::{FinanceError, FinanceResult};
pub use finance::BookingFinance;
pub use models::{Booking, BookingStatus, CancellationPolicy, ClientDetails, PaymentBreakdown};
pub use money::{format_usd, money_eq, round_money};
