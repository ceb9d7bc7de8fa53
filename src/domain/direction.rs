//! Swap direction selector.

use core::fmt;

use super::{Amount, Reserves};

/// Which asset the trader sells into the pool.
///
/// Direction only decides which reserve plays the input role; the pricing
/// math is shared, so both directions round identically.
///
/// # Examples
///
/// ```
/// use duet_amm::domain::{Amount, Reserves, Shares, SwapDirection};
///
/// let r = Reserves::new(Amount::new(10), Amount::new(20), Shares::new(14));
/// assert_eq!(SwapDirection::AToB.orient(&r), (Amount::new(10), Amount::new(20)));
/// assert_eq!(SwapDirection::BToA.orient(&r), (Amount::new(20), Amount::new(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// Builds a direction from the `is_a_to_b` flag used by ledger call sites.
    #[must_use]
    pub const fn from_a_to_b(is_a_to_b: bool) -> Self {
        if is_a_to_b { Self::AToB } else { Self::BToA }
    }

    /// Returns `(reserve_in, reserve_out)` for this direction.
    #[must_use]
    pub const fn orient(&self, reserves: &Reserves) -> (Amount, Amount) {
        match self {
            Self::AToB => (reserves.reserve_a(), reserves.reserve_b()),
            Self::BToA => (reserves.reserve_b(), reserves.reserve_a()),
        }
    }

    /// Writes oriented reserves back into A/B order, keeping the share
    /// supply untouched.
    pub const fn reorient(
        &self,
        reserves: &Reserves,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Reserves {
        match self {
            Self::AToB => Reserves::new(reserve_in, reserve_out, reserves.share_supply()),
            Self::BToA => Reserves::new(reserve_out, reserve_in, reserves.share_supply()),
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Shares;

    fn reserves() -> Reserves {
        Reserves::new(Amount::new(100), Amount::new(300), Shares::new(173))
    }

    #[test]
    fn from_flag() {
        assert_eq!(SwapDirection::from_a_to_b(true), SwapDirection::AToB);
        assert_eq!(SwapDirection::from_a_to_b(false), SwapDirection::BToA);
    }

    #[test]
    fn reorient_round_trips() {
        let r = reserves();
        for dir in [SwapDirection::AToB, SwapDirection::BToA] {
            let (rin, rout) = dir.orient(&r);
            assert_eq!(dir.reorient(&r, rin, rout), r);
        }
    }

    #[test]
    fn reorient_b_to_a_swaps_slots() {
        let r = reserves();
        let next = SwapDirection::BToA.reorient(&r, Amount::new(310), Amount::new(90));
        assert_eq!(next.reserve_a(), Amount::new(90));
        assert_eq!(next.reserve_b(), Amount::new(310));
        assert_eq!(next.share_supply(), r.share_supply());
    }

    #[test]
    fn display() {
        assert_eq!(SwapDirection::AToB.to_string(), "A->B");
        assert_eq!(SwapDirection::BToA.to_string(), "B->A");
    }
}
