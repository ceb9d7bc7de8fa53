//! Constant-product swap pricing with an input-side fee.
//!
//! # Swap Algorithm
//!
//! 1. `net = floor(amount_in × (10 000 − fee_bps) / 10 000)`, `fee = amount_in − net`
//! 2. `amount_out = floor(reserve_out × net / (reserve_in + net))`
//! 3. `reserve_in' = reserve_in + amount_in` (fee stays in the pool)
//! 4. `reserve_out' = reserve_out − amount_out`
//!
//! Step 2 is the constant-product solution `(reserve_in + net) × (reserve_out − amount_out) ≥ k`
//! rounded so the remainder stays with the pool; `k` never decreases.
//!
//! A swap is refused with [`AmmError::InsufficientLiquidity`] when the exact
//! post-trade output reserve `k / (reserve_in + net)` would fall below one
//! unit, i.e. when the trade would all but empty the pool.

use crate::domain::{Amount, FeeTier, Reserves, Rounding, SwapDirection, SwapQuote};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, narrow, CheckedArithmetic};

/// Quotes the output of selling `amount_in` into a pool.
///
/// Pure: reads nothing but its arguments.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or the
///   trade would drain the output reserve.
/// - [`AmmError::ArithmeticOverflow`] if `reserve_in + amount_in` does not
///   fit an [`Amount`].
/// - [`AmmError::InvalidFee`] if `fee_tier` is 100% or more.
///
/// # Examples
///
/// ```
/// use duet_amm::domain::{Amount, FeeTier};
/// use duet_amm::engine::quote_swap;
///
/// let q = quote_swap(
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
///     Amount::new(10_000),
///     FeeTier::TIER_0_30_PERCENT,
/// )
/// .expect("quote");
/// assert_eq!(q.amount_out(), Amount::new(19_743));
/// assert_eq!(q.fee(), Amount::new(30));
/// ```
pub fn quote_swap(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    fee_tier: FeeTier,
) -> Result<SwapQuote> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidQuantity("swap amount must be non-zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    // The committed input reserve must be representable.
    reserve_in.safe_add(&amount_in)?;

    let (net, fee) = fee_tier.split(amount_in)?;

    // Both operands are 64-bit, so the sum cannot overflow 128 bits.
    let denominator = reserve_in.wide() + net.wide();

    let residual = mul_div(reserve_in.wide(), reserve_out.wide(), denominator, Rounding::Down)?;
    if residual == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    let out = mul_div(reserve_out.wide(), net.wide(), denominator, Rounding::Down)?;
    let amount_out = Amount::new(narrow(out, "swap output overflow")?);

    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    Ok(SwapQuote::new(amount_in, amount_out, fee))
}

/// Quotes a swap against a reserve snapshot in the given direction.
///
/// # Errors
///
/// Same as [`quote_swap`].
pub fn quote_directed(
    reserves: &Reserves,
    direction: SwapDirection,
    amount_in: Amount,
    fee_tier: FeeTier,
) -> Result<SwapQuote> {
    let (reserve_in, reserve_out) = direction.orient(reserves);
    quote_swap(reserve_in, reserve_out, amount_in, fee_tier)
}

/// Enforces the caller's minimum-output guard.
///
/// # Errors
///
/// Returns [`AmmError::SlippageExceeded`] if the quoted output is below
/// `min_amount_out`.
pub const fn check_min_output(quote: &SwapQuote, min_amount_out: Amount) -> Result<()> {
    if quote.amount_out().get() < min_amount_out.get() {
        return Err(AmmError::SlippageExceeded {
            minimum: min_amount_out,
            actual: quote.amount_out(),
        });
    }
    Ok(())
}

/// Computes the reserves after executing `quote` in `direction`.
///
/// The share supply is carried over unchanged.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if the input reserve overflows
/// or the output reserve would go negative.
pub fn apply_swap(
    reserves: &Reserves,
    direction: SwapDirection,
    quote: &SwapQuote,
) -> Result<Reserves> {
    let (reserve_in, reserve_out) = direction.orient(reserves);
    let new_in = reserve_in.safe_add(&quote.amount_in())?;
    let new_out = reserve_out.safe_sub(&quote.amount_out())?;
    Ok(direction.reorient(reserves, new_in, new_out))
}
