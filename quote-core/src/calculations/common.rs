//! Shared helpers for monetary display formatting.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero). The calculator never calls
/// this internally; it exists for the rendering boundary, so repeated
/// calculations stay composable and free of accumulated rounding error.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(266.804)), dec!(266.80));
/// assert_eq!(round_half_up(dec!(266.805)), dec!(266.81));
/// assert_eq!(round_half_up(dec!(-266.805)), dec!(-266.81)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
