//! Currency helpers shared across the cart and presentation code.
//!
//! All arithmetic on prices happens in exact [`Decimal`] values; rounding
//! to two decimal places is a display concern and must never be applied
//! before summation.

use rust_decimal::Decimal;

/// Rounds a currency amount to exactly two decimal places using half-up
/// rounding (midpoints go away from zero, the standard financial rule).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use zest_core::pricing::round_half_up;
///
/// assert_eq!(round_half_up(dec!(12.994)), dec!(12.99));
/// assert_eq!(round_half_up(dec!(12.995)), dec!(13.00));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a currency amount for display, e.g. `$12.99`.
///
/// Rounding happens here, at the presentation boundary.
pub fn format_usd(value: Decimal) -> String {
    format!("${:.2}", round_half_up(value))
}

/// The flat per-order delivery fee used when no configuration overrides it.
pub fn default_delivery_fee() -> Decimal {
    Decimal::new(299, 2)
}
