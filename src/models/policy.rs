//! Cancellation policy

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Guide cancellation policy
///
/// Each policy fixes how far ahead of the activity a traveler must
/// cancel to qualify for a full refund. Unrecognized stored values
/// deserialize to `Moderate`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancellationPolicy {
    Flexible,
    Strict,
    SuperStrict,
    NonRefundable,
    // Catch-all must stay the last variant for serde
    #[default]
    #[serde(other)]
    Moderate,
}

impl CancellationPolicy {
    /// How long before the activity start the full-refund window closes
    ///
    /// `SuperStrict` marks the 50% boundary rather than a full refund;
    /// `NonRefundable` never refunds, so the window closes at the start
    /// instant itself.
    pub fn full_refund_lookback(&self) -> Duration {
        match self {
            Self::Flexible => Duration::hours(24),
            Self::Moderate => Duration::days(5),
            Self::Strict => Duration::days(14),
            Self::SuperStrict => Duration::days(30),
            Self::NonRefundable => Duration::zero(),
        }
    }
}
