//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use duet_amm::prelude::*;
//! ```

pub use crate::domain::{
    Amount, BasisPoints, DepositResult, FeeTier, LiquidityChange, LiquidityResult, PoolId,
    Reserves, Rounding, Shares, SwapDirection, SwapQuote, SwapRequest, SwapResult,
    WithdrawalResult,
};

pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::PoolConfig;

pub use crate::error::{AmmError, Result};

pub use crate::pools::{ConstantProductPool, PoolRegistry, PoolSnapshot, PoolStatus};
