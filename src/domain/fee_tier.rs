//! Pool fee tiers built on [`BasisPoints`].

use core::fmt;

use super::{Amount, BasisPoints, Rounding};
use crate::error::AmmError;

/// The immutable swap fee of a pool, charged on the input side.
///
/// Any `BasisPoints` value can be wrapped; pool construction rejects tiers
/// that are not [`valid`](Self::is_valid).  The four presets match the tiers
/// commonly deployed by constant-product venues.
///
/// # Examples
///
/// ```
/// use duet_amm::domain::{Amount, FeeTier};
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// let (net, fee) = tier.split(Amount::new(10_000)).expect("valid tier");
/// assert_eq!(net, Amount::new(9_970));
/// assert_eq!(fee, Amount::new(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.05% fee, stable pairs (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee, standard volatile pairs (30 bp).
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee, exotic pairs (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Creates a new `FeeTier` from a raw basis-point count.
    pub const fn from_bps(bps: u32) -> Self {
        Self(BasisPoints::new(bps))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` if the rate lies in `[0, 10_000)`.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.0.is_valid_fee()
    }

    /// Checks the rate, for use by constructors.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the rate is 100% or more.
    pub const fn validate(&self) -> Result<(), AmmError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AmmError::InvalidFee("fee rate must be below 10000 bps"))
        }
    }

    /// Splits a swap input into `(amount_after_fee, fee)`.
    ///
    /// `amount_after_fee = floor(amount × (10_000 − bps) / 10_000)` and the
    /// fee is the remainder, so rounding dust always counts as fee and
    /// stays in the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the tier is not valid.
    /// - [`AmmError::ArithmeticOverflow`] if the scaled amount does not fit.
    pub fn split(&self, amount: Amount) -> Result<(Amount, Amount), AmmError> {
        self.validate()?;
        let net = BasisPoints::new(self.0.complement()).apply(amount, Rounding::Down)?;
        let fee = amount
            .checked_sub(&net)
            .ok_or(AmmError::ArithmeticOverflow("fee split underflow"))?;
        Ok((net, fee))
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
