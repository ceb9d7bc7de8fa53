//! Consistent snapshot of a pool's balances.

use core::fmt;

use super::{Amount, Shares};

/// The two reserve balances and the outstanding share supply of a pool.
///
/// This is the value returned by reserve queries.  It is always taken as a
/// whole under the pool's lock, so callers never see one reserve updated
/// and the other not.
///
/// # Examples
///
/// ```
/// use duet_amm::domain::{Amount, Reserves, Shares};
///
/// let r = Reserves::new(Amount::new(1_000), Amount::new(2_000), Shares::new(1_414));
/// assert_eq!(r.product(), 2_000_000);
/// assert!(r.is_consistent());
/// assert!(Reserves::EMPTY.is_consistent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reserves {
    reserve_a: Amount,
    reserve_b: Amount,
    share_supply: Shares,
}

impl Reserves {
    /// An unfunded pool.
    pub const EMPTY: Self = Self {
        reserve_a: Amount::ZERO,
        reserve_b: Amount::ZERO,
        share_supply: Shares::ZERO,
    };

    /// Creates a snapshot from raw parts.  No invariant is checked here;
    /// see [`is_consistent`](Self::is_consistent).
    pub const fn new(reserve_a: Amount, reserve_b: Amount, share_supply: Shares) -> Self {
        Self {
            reserve_a,
            reserve_b,
            share_supply,
        }
    }

    /// Reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Outstanding liquidity-share supply.
    pub const fn share_supply(&self) -> Shares {
        self.share_supply
    }

    /// Returns `true` when nothing is deposited.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.share_supply.is_zero() && self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// The constant-product `reserve_a × reserve_b`, exact in 128 bits.
    #[must_use]
    pub const fn product(&self) -> u128 {
        self.reserve_a.wide() * self.reserve_b.wide()
    }

    /// Checks that the pool is either fully empty or fully funded: shares
    /// are outstanding exactly when both reserves are positive.
    ///
    /// Non-negativity holds by construction of the unsigned types.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        if self.share_supply.is_zero() {
            self.reserve_a.is_zero() && self.reserve_b.is_zero()
        } else {
            !self.reserve_a.is_zero() && !self.reserve_b.is_zero()
        }
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reserves(a={}, b={}, shares={})",
            self.reserve_a, self.reserve_b, self.share_supply
        )
    }
}
