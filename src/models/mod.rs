//! Data models for the booking finance core

pub mod booking;
pub mod breakdown;
pub mod policy;

pub use booking::{Booking, BookingStatus, ClientDetails};
pub use breakdown::PaymentBreakdown;
pub use policy::CancellationPolicy;
