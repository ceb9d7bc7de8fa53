//! Liquidity requests: deposits and withdrawals.

use core::fmt;

use super::{Amount, DepositResult, Shares, WithdrawalResult};
use crate::error::AmmError;

/// A request to change a pool's liquidity.
///
/// # Examples
///
/// ```
/// use duet_amm::domain::{Amount, LiquidityChange, Shares};
///
/// assert!(LiquidityChange::add(Amount::new(100), Amount::new(200)).is_ok());
/// assert!(LiquidityChange::add(Amount::ZERO, Amount::new(200)).is_err());
/// assert!(LiquidityChange::remove(Shares::new(10)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiquidityChange {
    /// Deposit up to these amounts.  The pool uses the amounts matching its
    /// current ratio and refunds the rest.
    Add {
        /// Maximum amount of asset A to deposit.
        amount_a: Amount,
        /// Maximum amount of asset B to deposit.
        amount_b: Amount,
    },
    /// Burn shares and withdraw the proportional reserves.
    Remove {
        /// Shares to burn.
        shares: Shares,
    },
}

impl LiquidityChange {
    /// Creates an `Add` variant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if either amount is zero:
    /// deposits are always two-sided.
    pub const fn add(amount_a: Amount, amount_b: Amount) -> crate::error::Result<Self> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "deposit requires both assets",
            ));
        }
        Ok(Self::Add { amount_a, amount_b })
    }

    /// Creates a `Remove` variant.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `shares` is zero.
    pub const fn remove(shares: Shares) -> crate::error::Result<Self> {
        if shares.is_zero() {
            return Err(AmmError::InsufficientShares {
                requested: shares,
                available: Shares::ZERO,
            });
        }
        Ok(Self::Remove { shares })
    }

}

impl fmt::Display for LiquidityChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add { amount_a, amount_b } => write!(f, "Add(a={amount_a}, b={amount_b})"),
            Self::Remove { shares } => write!(f, "Remove(shares={shares})"),
        }
    }
}

/// The committed outcome of a [`LiquidityChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiquidityResult {
    /// Outcome of an `Add`.
    Deposit(DepositResult),
    /// Outcome of a `Remove`.
    Withdrawal(WithdrawalResult),
}
