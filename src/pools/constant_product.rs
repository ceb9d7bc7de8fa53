//! Constant Product pool manager (`x · y = k`).
//!
//! The pool owns its reserves and share supply and sequences the pure
//! functions in [`engine`](crate::engine).  Every mutating operation runs
//! in two phases:
//!
//! 1. **Plan**: compute the full candidate state (reserves, status, fee
//!    counters) from the current state without touching `self`.
//! 2. **Commit**: validate the candidate and, only if it passes, assign it
//!    in one step.
//!
//! A failed operation therefore leaves the pool exactly as it was.
//!
//! # Checked Invariants
//!
//! - Shares are outstanding exactly when both reserves are positive.
//! - Swaps never decrease `reserve_a × reserve_b`.
//! - Deposits and withdrawals never decrease either reserve per share.
//! - The lifecycle status agrees with the share supply.

use tracing::debug;

use crate::config::PoolConfig;
use crate::domain::{
    Amount, DepositResult, FeeTier, Reserves, Shares, SwapDirection, SwapQuote, SwapRequest,
    SwapResult, WithdrawalResult,
};
use crate::engine::{
    apply_deposit, apply_swap, apply_withdrawal, check_min_output, quote_deposit, quote_directed,
    quote_withdrawal,
};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::pools::{PoolSnapshot, PoolStatus};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A Constant Product AMM pool (`x · y = k`).
///
/// Built either empty with [`ConstantProductPool::new`] or funded from a
/// [`PoolConfig`] via [`ConstantProductPool::create`] / [`FromConfig`].
///
/// # State
///
/// - `reserves`: current balances of A and B (fees included) and the
///   outstanding share supply
/// - `status`: lifecycle state, see [`PoolStatus`]
/// - `accumulated_fees_a` / `accumulated_fees_b`: lifetime fee counters;
///   the fees themselves stay in the reserves
///
/// # Example
///
/// ```rust
/// use duet_amm::config::PoolConfig;
/// use duet_amm::domain::{Amount, FeeTier, Shares, SwapDirection, SwapRequest};
/// use duet_amm::pools::ConstantProductPool;
/// use duet_amm::traits::SwapPool;
///
/// let (a, b) = (Amount::new(1_000_000), Amount::new(2_000_000));
/// let cfg = PoolConfig::new(FeeTier::TIER_0_30_PERCENT, a, b).expect("valid config");
/// let (mut pool, funded) = ConstantProductPool::create(&cfg).expect("pool created");
/// assert_eq!(funded.shares_minted(), Shares::new(1_414_213));
///
/// let req = SwapRequest::unguarded(SwapDirection::AToB, Amount::new(10_000)).expect("non-zero");
/// let result = pool.swap(&req).expect("swap ok");
/// assert_eq!(result.amount_out(), Amount::new(19_743));
/// assert_eq!(pool.accumulated_fees_a(), Amount::new(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    fee_tier: FeeTier,
    min_initial_shares: Shares,
    reserves: Reserves,
    status: PoolStatus,
    accumulated_fees_a: Amount,
    accumulated_fees_b: Amount,
}

/// Candidate post-state of a mutating operation.
struct Transition {
    reserves: Reserves,
    status: PoolStatus,
    accumulated_fees_a: Amount,
    accumulated_fees_b: Amount,
}

impl ConstantProductPool {
    /// Creates an unfunded pool.
    ///
    /// The first [`add_liquidity`](LiquidityPool::add_liquidity) sets the
    /// price and must mint at least `min_initial_shares`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee tier is 100% or more.
    /// - [`AmmError::InvalidQuantity`] if `min_initial_shares` is zero.
    pub fn new(fee_tier: FeeTier, min_initial_shares: Shares) -> Result<Self, AmmError> {
        fee_tier.validate()?;
        if min_initial_shares.is_zero() {
            return Err(AmmError::InvalidQuantity(
                "minimum initial shares must be positive",
            ));
        }
        Ok(Self {
            fee_tier,
            min_initial_shares,
            reserves: Reserves::EMPTY,
            status: PoolStatus::Uninitialized,
            accumulated_fees_a: Amount::ZERO,
            accumulated_fees_b: Amount::ZERO,
        })
    }

    /// Creates a pool and runs its first deposit.
    ///
    /// Returns the funded pool together with the initial deposit, whose
    /// `shares_minted()` is owed to the creator.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PoolConfig::validate`].
    /// - [`AmmError::InsufficientInitialLiquidity`] if
    ///   `floor(√(initial_a × initial_b))` is below the configured minimum.
    pub fn create(config: &PoolConfig) -> Result<(Self, DepositResult), AmmError> {
        config.validate()?;
        let mut pool = Self::new(config.fee_tier(), config.min_initial_shares())?;
        let deposit = pool.add_liquidity(config.initial_a(), config.initial_b())?;
        Ok((pool, deposit))
    }

    /// Returns the current reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserves.reserve_a()
    }

    /// Returns the current reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserves.reserve_b()
    }

    /// Returns the lifecycle state.
    pub const fn status(&self) -> PoolStatus {
        self.status
    }

    /// Returns the minimum share batch a first deposit must mint.
    pub const fn min_initial_shares(&self) -> Shares {
        self.min_initial_shares
    }

    /// Returns the lifetime fees charged on A inputs.
    pub const fn accumulated_fees_a(&self) -> Amount {
        self.accumulated_fees_a
    }

    /// Returns the lifetime fees charged on B inputs.
    pub const fn accumulated_fees_b(&self) -> Amount {
        self.accumulated_fees_b
    }

    /// Copies every field into a [`PoolSnapshot`].
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            fee_tier: self.fee_tier,
            min_initial_shares: self.min_initial_shares,
            reserves: self.reserves,
            status: self.status,
            accumulated_fees_a: self.accumulated_fees_a,
            accumulated_fees_b: self.accumulated_fees_b,
        }
    }

    /// Rebuilds a pool from a persisted [`PoolSnapshot`].
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee tier is 100% or more.
    /// - [`AmmError::InvalidQuantity`] if `min_initial_shares` is zero.
    /// - [`AmmError::InvariantViolation`] if the reserves are inconsistent
    ///   or the status disagrees with the share supply.
    pub fn restore(snapshot: PoolSnapshot) -> Result<Self, AmmError> {
        let mut pool = Self::new(snapshot.fee_tier, snapshot.min_initial_shares)?;
        if !snapshot.reserves.is_consistent() {
            return Err(AmmError::InvariantViolation(
                "snapshot reserves disagree with share supply",
            ));
        }
        if !snapshot.status.agrees_with(&snapshot.reserves) {
            return Err(AmmError::InvariantViolation(
                "snapshot status disagrees with share supply",
            ));
        }
        pool.reserves = snapshot.reserves;
        pool.status = snapshot.status;
        pool.accumulated_fees_a = snapshot.accumulated_fees_a;
        pool.accumulated_fees_b = snapshot.accumulated_fees_b;
        Ok(pool)
    }

    /// Builds the transition for new reserves, keeping the fee counters.
    const fn transition(&self, reserves: Reserves) -> Transition {
        Transition {
            reserves,
            status: self.status.after(&reserves),
            accumulated_fees_a: self.accumulated_fees_a,
            accumulated_fees_b: self.accumulated_fees_b,
        }
    }

    /// Validates `next` against the current state and assigns it.
    fn commit(&mut self, next: Transition) -> Result<(), AmmError> {
        if !next.reserves.is_consistent() {
            return Err(AmmError::InvariantViolation(
                "reserves disagree with share supply",
            ));
        }
        if !next.status.agrees_with(&next.reserves) {
            return Err(AmmError::InvariantViolation(
                "status disagrees with share supply",
            ));
        }
        self.reserves = next.reserves;
        self.status = next.status;
        self.accumulated_fees_a = next.accumulated_fees_a;
        self.accumulated_fees_b = next.accumulated_fees_b;
        Ok(())
    }

    fn try_swap(&mut self, request: &SwapRequest) -> Result<SwapResult, AmmError> {
        let direction = request.direction();
        let quote = self.quote_swap(direction, request.amount_in())?;
        check_min_output(&quote, request.min_amount_out())?;

        let reserves = apply_swap(&self.reserves, direction, &quote)?;
        if reserves.product() < self.reserves.product() {
            return Err(AmmError::InvariantViolation("swap decreased the product"));
        }

        let mut next = self.transition(reserves);
        match direction {
            SwapDirection::AToB => {
                next.accumulated_fees_a = next.accumulated_fees_a.safe_add(&quote.fee())?;
            }
            SwapDirection::BToA => {
                next.accumulated_fees_b = next.accumulated_fees_b.safe_add(&quote.fee())?;
            }
        }
        self.commit(next)?;
        Ok(SwapResult::new(direction, quote, reserves))
    }

    fn try_add_liquidity(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositResult, AmmError> {
        let quote = quote_deposit(&self.reserves, amount_a, amount_b, self.min_initial_shares)?;
        let reserves = apply_deposit(&self.reserves, &quote)?;
        if diluted(&self.reserves, &reserves) {
            return Err(AmmError::InvariantViolation("deposit diluted existing shares"));
        }
        let refund_a = amount_a.safe_sub(&quote.used_a())?;
        let refund_b = amount_b.safe_sub(&quote.used_b())?;

        self.commit(self.transition(reserves))?;
        Ok(DepositResult::new(quote, refund_a, refund_b, reserves))
    }

    fn try_remove_liquidity(&mut self, shares: Shares) -> Result<WithdrawalResult, AmmError> {
        let quote = quote_withdrawal(&self.reserves, shares)?;
        let reserves = apply_withdrawal(&self.reserves, shares, &quote)?;
        if diluted(&self.reserves, &reserves) {
            return Err(AmmError::InvariantViolation(
                "withdrawal diluted remaining shares",
            ));
        }

        self.commit(self.transition(reserves))?;
        Ok(WithdrawalResult::new(shares, quote, reserves))
    }
}

/// Returns `true` if either reserve per share fell from `before` to `after`.
///
/// Cross-multiplied so the check is exact: `R'_x × S < R_x × S'`.
const fn diluted(before: &Reserves, after: &Reserves) -> bool {
    let s = before.share_supply().wide();
    let s_next = after.share_supply().wide();
    after.reserve_a().wide() * s < before.reserve_a().wide() * s_next
        || after.reserve_b().wide() * s < before.reserve_b().wide() * s_next
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates a funded pool, discarding the initial deposit receipt.
    ///
    /// Use [`ConstantProductPool::create`] to keep it.
    ///
    /// # Errors
    ///
    /// Same as [`ConstantProductPool::create`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        Self::create(config).map(|(pool, _)| pool)
    }
}

impl SwapPool for ConstantProductPool {
    fn quote_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote, AmmError> {
        quote_directed(&self.reserves, direction, amount_in, self.fee_tier)
    }

    /// Executes a swap against the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if the pool is unfunded or the
    ///   trade would drain the output reserve.
    /// - [`AmmError::SlippageExceeded`] if the output is below the minimum.
    /// - [`AmmError::ArithmeticOverflow`] if a reserve or fee counter
    ///   overflows.
    fn swap(&mut self, request: &SwapRequest) -> Result<SwapResult, AmmError> {
        let result = self.try_swap(request).inspect_err(|err| {
            debug!(request = %request, error = %err, "swap rejected");
        })?;
        debug!(
            direction = %result.direction(),
            amount_in = result.amount_in().get(),
            amount_out = result.amount_out().get(),
            fee = result.fee().get(),
            reserve_a = result.reserves().reserve_a().get(),
            reserve_b = result.reserves().reserve_b().get(),
            "swap committed"
        );
        Ok(result)
    }

    fn reserves(&self) -> Reserves {
        self.reserves
    }

    fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

impl LiquidityPool for ConstantProductPool {
    /// Adds liquidity to the pool.
    ///
    /// For an unfunded pool the whole deposit becomes the reserves and
    /// `√(amount_a × amount_b)` shares are minted.  Otherwise shares are
    /// minted against the limiting asset and the rest is refunded.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInitialLiquidity`] if a first deposit
    ///   mints fewer than [`min_initial_shares`](Self::min_initial_shares).
    /// - [`AmmError::InvalidQuantity`] if a later deposit is one-sided or
    ///   too small to mint a share.
    /// - [`AmmError::ArithmeticOverflow`] if a reserve or the supply
    ///   overflows.
    fn add_liquidity(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositResult, AmmError> {
        let result = self.try_add_liquidity(amount_a, amount_b).inspect_err(|err| {
            debug!(
                amount_a = amount_a.get(),
                amount_b = amount_b.get(),
                error = %err,
                "deposit rejected"
            );
        })?;
        debug!(
            shares_minted = result.shares_minted().get(),
            used_a = result.used_a().get(),
            used_b = result.used_b().get(),
            refund_a = result.refund_a().get(),
            refund_b = result.refund_b().get(),
            "deposit committed"
        );
        Ok(result)
    }

    /// Burns shares for a proportional slice of both reserves.
    ///
    /// Burning the whole supply returns the reserves exactly and leaves the
    /// pool [`Drained`](PoolStatus::Drained).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientShares`] if `shares` is zero or
    /// exceeds the supply.
    fn remove_liquidity(&mut self, shares: Shares) -> Result<WithdrawalResult, AmmError> {
        let result = self.try_remove_liquidity(shares).inspect_err(|err| {
            debug!(shares = shares.get(), error = %err, "withdrawal rejected");
        })?;
        debug!(
            shares_burned = result.shares_burned().get(),
            amount_a = result.amount_a().get(),
            amount_b = result.amount_b().get(),
            "withdrawal committed"
        );
        Ok(result)
    }
}
