//! Liquidity provision trait.
//!
//! [`LiquidityPool`] extends [`SwapPool`] with share-based deposits and
//! withdrawals.  Shares are fungible claims on a pro-rata slice of both
//! reserves; there are no positions.

use crate::domain::{
    Amount, DepositResult, LiquidityChange, LiquidityResult, Shares, WithdrawalResult,
};
use crate::error::AmmError;
use crate::traits::SwapPool;

/// Deposit and withdrawal behaviour of a two-asset pool.
pub trait LiquidityPool: SwapPool {
    /// Deposits up to `amount_a` and `amount_b`.
    ///
    /// The first deposit into an unfunded pool sets the price.  Later
    /// deposits use only the balanced portion and report the remainder as
    /// a refund.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInitialLiquidity`] if a first deposit
    ///   mints too few shares.
    /// - [`AmmError::InvalidQuantity`] if a later deposit is one-sided or
    ///   mints nothing.
    fn add_liquidity(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositResult, AmmError>;

    /// Burns `shares` for a proportional slice of both reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `shares` is zero or
    /// exceeds the outstanding supply.
    fn remove_liquidity(&mut self, shares: Shares) -> Result<WithdrawalResult, AmmError>;

    /// Applies a [`LiquidityChange`], dispatching on its kind.
    ///
    /// # Errors
    ///
    /// The errors of [`add_liquidity`](Self::add_liquidity) or
    /// [`remove_liquidity`](Self::remove_liquidity).
    fn apply(&mut self, change: &LiquidityChange) -> Result<LiquidityResult, AmmError> {
        match *change {
            LiquidityChange::Add { amount_a, amount_b } => self
                .add_liquidity(amount_a, amount_b)
                .map(LiquidityResult::Deposit),
            LiquidityChange::Remove { shares } => {
                self.remove_liquidity(shares).map(LiquidityResult::Withdrawal)
            }
        }
    }

    /// Returns the outstanding share supply.
    fn share_supply(&self) -> Shares {
        self.reserves().share_supply()
    }
}
