//! Plain record of a pool's persisted fields.

use crate::domain::{Amount, FeeTier, Reserves, Shares};
use crate::pools::PoolStatus;

/// Every field of a [`ConstantProductPool`](crate::pools::ConstantProductPool).
///
/// Produced by `snapshot()` and accepted by `restore()`.  The pool itself
/// defines no storage layout; with the `serde` feature this record can be
/// written in any format the host ledger uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolSnapshot {
    /// Immutable swap fee.
    pub fee_tier: FeeTier,
    /// Smallest share batch a first deposit must mint.
    pub min_initial_shares: Shares,
    /// Reserves and share supply.
    pub reserves: Reserves,
    /// Lifecycle state.
    pub status: PoolStatus,
    /// Lifetime fees charged on A inputs.
    pub accumulated_fees_a: Amount,
    /// Lifetime fees charged on B inputs.
    pub accumulated_fees_b: Amount,
}
