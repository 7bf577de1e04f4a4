//! Check-in QR payload and verification code
//!
//! Guides scan a QR code at the trailhead to confirm the traveler's
//! booking. The payload is plain JSON; the embedded verification code is
//! a deterministic checksum over the booking identifiers, reproduced
//! bit-for-bit (32-bit wraparound included) so codes issued before this
//! port still verify. It is a display convenience, not a security
//! control — anything gating access must switch to an HMAC first.

use crate::models::BookingStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const CODE_LEN: usize = 8;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Payload encoded into the check-in QR code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckInPayload {
    pub booking_id: String,
    pub booking_number: String,
    pub client_name: String,
    pub guide_id: String,
    pub service_id: String,
    pub start_date: String,
    pub start_time: String,
    pub participants: i32,
    pub status: BookingStatus,
    pub verification_code: String,
    pub generated_at: DateTime<Utc>,
}

/// Deterministic verification code over `"<id>-<booking_number>"`
///
/// Multiplicative string hash (multiplier 31) accumulated per UTF-16
/// code unit with 32-bit signed wraparound at every step, then absolute
/// value, uppercase base-36, truncated to 8 characters and left-padded
/// with `0`.
pub fn verification_code(booking_id: &str, booking_number: &str) -> String {
    let seed = format!("{}-{}", booking_id, booking_number);

    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        // hash = hash * 31 + unit, truncated to i32 at each step
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }

    // i64 keeps abs() exact for i32::MIN
    let code = to_base36((hash as i64).unsigned_abs()).to_uppercase();
    let code = &code[..code.len().min(CODE_LEN)];
    format!("{:0>width$}", code, width = CODE_LEN)
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).expect("base36 digits are ASCII")
}
