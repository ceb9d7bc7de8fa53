//! Pool lifecycle states.

use core::fmt;

use crate::domain::Reserves;

/// Lifecycle state of a pool.
///
/// ```text
/// Uninitialized ──first deposit──▶ Active ◀──swap / add / partial remove──┐
///                                    │  └──────────────────────────────────┘
///                                    └──burn whole supply──▶ Drained ──deposit──▶ Active
/// ```
///
/// There is no terminal state: a drained pool keeps its fee tier and can be
/// funded again through the first-deposit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolStatus {
    /// Never funded.
    #[default]
    Uninitialized,
    /// Holds reserves and outstanding shares.
    Active,
    /// Was funded, then every share was burned.
    Drained,
}

impl PoolStatus {
    /// Returns `true` if the pool holds reserves.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns the state a pool in `self` moves to once `reserves` is
    /// committed.
    #[must_use]
    pub const fn after(&self, reserves: &Reserves) -> Self {
        if !reserves.share_supply().is_zero() {
            Self::Active
        } else if matches!(self, Self::Uninitialized) {
            Self::Uninitialized
        } else {
            Self::Drained
        }
    }

    /// Returns `true` if this state agrees with the given share supply.
    #[must_use]
    pub const fn agrees_with(&self, reserves: &Reserves) -> bool {
        self.is_active() != reserves.share_supply().is_zero()
    }
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Active => write!(f, "active"),
            Self::Drained => write!(f, "drained"),
        }
    }
}
