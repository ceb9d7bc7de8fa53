//! Core swap trait for executing swaps and querying pool state.
//!
//! [`SwapPool`] covers the swap side of a two-asset pool:
//!
//! 1. **Quote**: [`SwapPool::quote_swap`] prices a trade without changing
//!    state.
//! 2. **Execute**: [`SwapPool::swap`] prices, guards, and commits a trade.
//! 3. **Inspect**: [`SwapPool::reserves`] and [`SwapPool::fee_tier`].
//!
//! # Fee Deduction Invariant
//!
//! Implementations deduct the fee from the input before pricing and keep
//! the whole input in the pool:
//!
//! ```text
//! net_input  = floor(amount_in × (10_000 − fee_bps) / 10_000)
//! amount_out = price_curve(net_input)
//! reserve_in = reserve_in + amount_in
//! ```
//!
//! # Atomicity
//!
//! A failed [`SwapPool::swap`] leaves the pool exactly as it was.

use crate::domain::{
    Amount, FeeTier, Reserves, SwapDirection, SwapQuote, SwapRequest, SwapResult,
};
use crate::error::AmmError;

/// Swap behaviour of a two-asset pool.
///
/// # Errors
///
/// Methods that can fail return [`Result<T, AmmError>`].  Common variants:
///
/// - [`AmmError::InsufficientLiquidity`]: pool unfunded or trade too large
/// - [`AmmError::SlippageExceeded`]: output below the caller's minimum
/// - [`AmmError::InvalidQuantity`]: zero input
/// - [`AmmError::ArithmeticOverflow`]: result does not fit
pub trait SwapPool {
    /// Quotes selling `amount_in` in `direction` against current reserves.
    ///
    /// Never mutates the pool.
    ///
    /// # Errors
    ///
    /// The same errors as [`swap`](Self::swap), minus slippage.
    fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote, AmmError>;

    /// Executes a swap.
    ///
    /// On success the returned [`SwapResult`] carries the post-trade
    /// reserves; on failure the pool is unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `request.min_amount_out()`.
    /// - Any error from [`quote_swap`](Self::quote_swap).
    fn swap(&mut self, request: &SwapRequest) -> Result<SwapResult, AmmError>;

    /// Returns the current reserves and share supply.
    fn reserves(&self) -> Reserves;

    /// Returns the pool's fee tier.
    fn fee_tier(&self) -> FeeTier;
}
