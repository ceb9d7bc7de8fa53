//! Wide-intermediate division helpers.
//!
//! Every product of two reserve-scale values is formed here, in `u128`,
//! before the division that brings it back to amount scale.  The helpers
//! are the only place the engine divides.
//!
//! # Examples
//!
//! ```
//! use duet_amm::domain::Rounding;
//! use duet_amm::math::{div_round, mul_div, narrow};
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! let max = u128::from(u64::MAX);
//! assert_eq!(mul_div(max, max, max, Rounding::Down), Ok(max));
//! assert!(narrow(u128::from(u64::MAX) + 1, "too wide").is_err());
//! ```

use crate::domain::Rounding;
use crate::error::AmmError;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a non-zero remainder implies q < u128::MAX.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}

/// Computes `a × b / denominator` with the product held in `u128`.
///
/// # Errors
///
/// - [`AmmError::ArithmeticOverflow`] if `a × b` exceeds `u128`.  Two
///   64-bit operands can never trigger this; it guards callers that pass
///   already-widened sums.
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
pub const fn mul_div(
    a: u128,
    b: u128,
    denominator: u128,
    rounding: Rounding,
) -> Result<u128, AmmError> {
    let Some(product) = a.checked_mul(b) else {
        return Err(AmmError::ArithmeticOverflow("wide product overflow"));
    };
    match div_round(product, denominator, rounding) {
        Some(v) => Ok(v),
        None => Err(AmmError::DivisionByZero),
    }
}

/// Narrows a wide intermediate back to the 64-bit amount width.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] tagged with `context` if the
/// value does not fit in `u64`.
pub const fn narrow(value: u128, context: &'static str) -> Result<u64, AmmError> {
    if value > u64::MAX as u128 {
        return Err(AmmError::ArithmeticOverflow(context));
    }
    Ok(value as u64)
}
