//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary math is done using `Decimal` internally, then converted
//! to `f64` for storage/serialization. Values are rounded to 2 decimal
//! places with half-up semantics at the cent boundary.

use crate::error::{FinanceError, FinanceResult};
use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub(crate) const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
pub(crate) fn require_finite(value: f64, field: &'static str) -> FinanceResult<()> {
    if !value.is_finite() {
        return Err(FinanceError::invalid(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the
/// boundary. If NaN/Infinity somehow reaches here, logs an error and
/// returns ZERO to avoid silent data corruption in financial math.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with inputs bounded at the
        // boundary is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Round a monetary f64 to 2 decimal places (half-up)
#[inline]
pub fn round_money(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Format an amount as USD with 2 decimal places and thousands grouping
///
/// `1234.5` formats as `"$1,234.50"`; negative amounts carry a leading
/// minus sign (`"-$12.00"`). Non-finite input is rejected.
pub fn format_usd(amount: f64) -> FinanceResult<String> {
    require_finite(amount, "amount")?;

    let rounded = to_decimal(amount)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    // Work in integer cents so grouping never touches fractional digits
    let cents = (rounded.abs() * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| {
            FinanceError::Computation(format!(
                "amount out of range for currency formatting: {}",
                amount
            ))
        })?;
    let dollars = group_thousands(cents / 100);
    let fraction = cents % 100;

    Ok(if negative {
        format!("-${}.{:02}", dollars, fraction)
    } else {
        format!("${}.{:02}", dollars, fraction)
    })
}

/// Insert commas every three digits, right to left
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}
