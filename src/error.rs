//! Unified error types for the Duet AMM engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant is final: the engine never retries, and a
//! failed operation leaves the pool exactly as it was.

use crate::domain::{Amount, PoolId, Shares};

/// Errors produced by the AMM engine.
///
/// The first five variants are the economically meaningful rejections a
/// ledger integration is expected to surface to users.  The remaining ones
/// signal malformed input or an integration bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// An intermediate computation exceeded the wide-arithmetic bound, or a
    /// result did not fit back into the 64-bit amount type.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// A division had a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// The swap would consume the whole output reserve, or the pool has no
    /// reserves to trade against.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The computed output is below the caller's declared minimum.
    #[error("slippage exceeded: output {actual} is below minimum {minimum}")]
    SlippageExceeded {
        /// Minimum output the caller accepts.
        minimum: Amount,
        /// Output the pool would have paid.
        actual: Amount,
    },

    /// The first deposit is too small to mint a usable share amount.
    #[error("insufficient initial liquidity")]
    InsufficientInitialLiquidity,

    /// A withdrawal asked for zero shares or more shares than exist.
    #[error("insufficient shares: requested {requested}, supply {available}")]
    InsufficientShares {
        /// Shares the caller asked to burn.
        requested: Shares,
        /// Outstanding share supply of the pool.
        available: Shares,
    },

    /// A caller-supplied quantity is unusable (zero where positive is
    /// required, or too small to produce any effect).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// The fee rate is outside `[0, 10000)` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A candidate pool state broke a pool invariant and was not committed.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// No pool is registered under the given identifier.
    #[error("pool not found: {0}")]
    PoolNotFound(PoolId),
}

impl AmmError {
    /// Always `false`: every rejection reflects the request or the pool
    /// state, never a transient fault.  Retry policy belongs to the caller.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        false
    }

    /// Returns `true` if the error was caused by the request itself rather
    /// than by current market conditions.
    ///
    /// Slippage and liquidity rejections depend on the pool state at
    /// execution time and may succeed when resubmitted with new bounds.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        !matches!(
            self,
            Self::InsufficientLiquidity
                | Self::SlippageExceeded { .. }
                | Self::InvariantViolation(_)
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_retriable() {
        assert!(!AmmError::InsufficientLiquidity.is_retriable());
        assert!(!AmmError::ArithmeticOverflow("x").is_retriable());
        assert!(!AmmError::PoolNotFound(PoolId::new(3)).is_retriable());
    }

    #[test]
    fn caller_error_classification() {
        assert!(AmmError::InvalidQuantity("zero").is_caller_error());
        assert!(AmmError::InsufficientInitialLiquidity.is_caller_error());
        assert!(!AmmError::InsufficientLiquidity.is_caller_error());
        assert!(
            !AmmError::SlippageExceeded {
                minimum: Amount::new(10),
                actual: Amount::new(9),
            }
            .is_caller_error()
        );
    }

    #[test]
    fn display_includes_details() {
        let err = AmmError::SlippageExceeded {
            minimum: Amount::new(100),
            actual: Amount::new(99),
        };
        assert_eq!(
            err.to_string(),
            "slippage exceeded: output 99 is below minimum 100"
        );

        let err = AmmError::InsufficientShares {
            requested: Shares::new(5),
            available: Shares::new(4),
        };
        assert_eq!(err.to_string(), "insufficient shares: requested 5, supply 4");

        assert_eq!(
            AmmError::PoolNotFound(PoolId::new(7)).to_string(),
            "pool not found: pool#7"
        );
    }
}
