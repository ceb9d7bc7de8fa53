//! Configuration for constant-product pools.

use crate::domain::{Amount, FeeTier, Shares};
use crate::error::AmmError;

/// Blueprint for creating and funding a constant-product pool (`x · y = k`).
///
/// Holds the immutable fee rate, the first deposit, and the smallest
/// share batch a first deposit may mint.
///
/// # Derived Values
///
/// - Initial shares: `floor(√(initial_a × initial_b))`
/// - Initial price of A in B: `initial_b / initial_a`
///
/// # Validation
///
/// - Fee rate below 10 000 bps.
/// - Both initial amounts non-zero.
/// - `min_initial_shares ≥ 1`.
///
/// # Examples
///
/// ```
/// use duet_amm::config::PoolConfig;
/// use duet_amm::domain::{Amount, FeeTier, Shares};
///
/// let cfg = PoolConfig::new(FeeTier::TIER_0_30_PERCENT, Amount::new(1_000), Amount::new(2_000))
///     .expect("valid")
///     .with_min_initial_shares(Shares::new(1_000))
///     .expect("valid");
/// assert_eq!(cfg.min_initial_shares(), Shares::new(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    fee_tier: FeeTier,
    initial_a: Amount,
    initial_b: Amount,
    #[cfg_attr(feature = "serde", serde(default = "default_min_initial_shares"))]
    min_initial_shares: Shares,
}

#[cfg(feature = "serde")]
const fn default_min_initial_shares() -> Shares {
    Shares::ONE
}

impl PoolConfig {
    /// Creates a new `PoolConfig` with a one-share minimum.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    /// - [`AmmError::InsufficientInitialLiquidity`] if either amount is zero.
    pub fn new(fee_tier: FeeTier, initial_a: Amount, initial_b: Amount) -> Result<Self, AmmError> {
        let config = Self {
            fee_tier,
            initial_a,
            initial_b,
            min_initial_shares: Shares::ONE,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different minimum first-deposit share count.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `minimum` is zero.
    pub fn with_min_initial_shares(self, minimum: Shares) -> Result<Self, AmmError> {
        let config = Self {
            min_initial_shares: minimum,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new) and
    /// [`with_min_initial_shares`](Self::with_min_initial_shares).
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fee_tier.validate()?;
        if self.initial_a.is_zero() || self.initial_b.is_zero() {
            return Err(AmmError::InsufficientInitialLiquidity);
        }
        if self.min_initial_shares.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "minimum initial shares must be positive",
            ));
        }
        Ok(())
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the first deposit of asset A.
    pub const fn initial_a(&self) -> Amount {
        self.initial_a
    }

    /// Returns the first deposit of asset B.
    pub const fn initial_b(&self) -> Amount {
        self.initial_b
    }

    /// Returns the minimum share batch a first deposit must mint.
    pub const fn min_initial_shares(&self) -> Shares {
        self.min_initial_shares
    }
}
