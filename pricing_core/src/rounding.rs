//! Rounding rules used by the pricing strategies.
//!
//! Three different rules are in play and they are not interchangeable:
//!
//! - [`round_to`] rounds half away from zero at a fixed number of decimal
//!   places, looking at the exact binary value of the `f64` the way a decimal
//!   formatter does (`1.115` is stored just below the midpoint and rounds to
//!   `1.11`). Glass size areas are rounded to two places per entry before
//!   they are summed.
//! - [`round_whole`] rounds to an integer, half away from zero. Glass pricing
//!   applies it twice.
//! - [`floor_price`] truncates toward negative infinity. Waltz and accessory
//!   prices are floored, never rounded up.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `amount` to `places` decimal places, half away from zero.
///
/// Values outside the range of [`Decimal`] fall back to scaled float
/// rounding.
///
/// # Examples
/// ```
/// use pricing_core::rounding::round_to;
///
/// assert_eq!(round_to(1.234, 2), 1.23);
/// assert_eq!(round_to(1.115, 2), 1.11);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
pub fn round_to(amount: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(amount)
        .map(|exact| exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.to_string().parse().ok())
        .unwrap_or_else(|| {
            let scale = 10f64.powi(places as i32);
            (amount * scale).round() / scale
        })
}

/// Two-place rounding applied to each glass size entry.
pub fn round2(amount: f64) -> f64 {
    round_to(amount, 2)
}

/// Round to a whole currency unit, half away from zero.
pub fn round_whole(amount: f64) -> f64 {
    amount.round()
}

/// Truncate a price down to a whole currency unit.
pub fn floor_price(amount: f64) -> f64 {
    amount.floor()
}
