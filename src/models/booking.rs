//! Booking Model

use crate::money::round_money;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Booking status
///
/// Status transitions are owned by the booking-management layer; this
/// crate only reads the status to decide refund/cancellation eligibility
/// and display formatting. `Unknown` catches unrecognized stored values
/// so a bad row never fails deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    Disputed,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Human-readable label for dashboards and receipts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending Confirmation",
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Disputed => "Disputed",
            Self::Refunded => "Refunded",
            Self::Unknown => "Unknown Status",
        }
    }

    /// Color-scheme token for status badges
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Pending => "yellow",
            Self::Confirmed => "green",
            Self::InProgress => "blue",
            Self::Completed => "teal",
            Self::Cancelled => "red",
            Self::Disputed => "orange",
            Self::Refunded => "purple",
            Self::Unknown => "gray",
        }
    }

    /// States that can no longer be cancelled by the traveler
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed | Self::Refunded)
    }
}

/// Traveler contact details attached to a booking
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Booking entity (externally owned record; consumed read-only here)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    /// Human-facing identifier, unique per booking
    pub booking_number: String,
    pub status: BookingStatus,
    /// Scheduled activity date as stored (ISO 8601; older rows carry a
    /// bare date). Kept opaque so parse failures stay observable.
    pub start_date: String,
    /// Activity start time, opaque display string
    pub start_time: String,
    pub participants: i32,
    /// Total amount in currency unit
    pub total_price: f64,
    /// Amount already captured in currency unit
    pub amount_paid: f64,
    /// Amount already refunded, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<f64>,
    pub guide_id: String,
    pub service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_details: Option<ClientDetails>,
}

impl Booking {
    /// Parse the stored start date into an instant
    ///
    /// Accepts RFC 3339 (`2026-07-04T09:00:00Z`, offset forms included)
    /// and bare `YYYY-MM-DD`, treated as midnight UTC. Returns `None`
    /// when the stored value is unparseable.
    pub fn parse_start(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.start_date)
    }

    /// Traveler display name, falling back to "Unknown" when absent
    pub fn client_name(&self) -> &str {
        self.client_details
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("Unknown")
    }

    /// Remainder the payment layer still has to capture
    /// (total minus paid, clamped to zero, 2dp)
    pub fn outstanding_balance(&self) -> f64 {
        round_money((self.total_price - self.amount_paid).max(0.0))
    }
}

/// Parse a stored date string into an instant
///
/// RFC 3339 first (offset forms included), then bare `YYYY-MM-DD` as
/// midnight UTC for older rows.
pub(crate) fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
