//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers:
//!
//! 1. **Invariant preservation**: random operation sequences keep the pool
//!    either empty or fully funded, with a matching status.
//! 2. **Product monotonicity**: swaps never decrease `k`; any fee makes it
//!    grow strictly.
//! 3. **No dilution**: deposits never lower either reserve per share.
//! 4. **Round-trip proportionality**: deposit then withdraw returns no more
//!    than was used.
//! 5. **Slippage guard**: `quote + 1` fails, the exact quote succeeds.
//! 6. **Square root bounds**: `r² ≤ n < (r + 1)²`.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{Amount, FeeTier, Reserves, Shares, SwapDirection, SwapRequest};
use crate::error::AmmError;
use crate::math::isqrt;
use crate::pools::ConstantProductPool;
use crate::traits::{LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn make_pool(fee_bps: u32, ra: u64, rb: u64) -> ConstantProductPool {
    let Ok(cfg) = PoolConfig::new(FeeTier::from_bps(fee_bps), Amount::new(ra), Amount::new(rb))
    else {
        panic!("valid config");
    };
    let Ok((pool, _)) = ConstantProductPool::create(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn unguarded(direction: SwapDirection, amount_in: u64) -> SwapRequest {
    let Ok(req) = SwapRequest::unguarded(direction, Amount::new(amount_in)) else {
        panic!("non-zero input");
    };
    req
}

/// `R'_x × S ≥ R_x × S'` for both assets.
fn per_share_kept(before: &Reserves, after: &Reserves) -> bool {
    let s = before.share_supply().wide();
    let s_next = after.share_supply().wide();
    after.reserve_a().wide() * s >= before.reserve_a().wide() * s_next
        && after.reserve_b().wide() * s >= before.reserve_b().wide() * s_next
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn reserve_strategy() -> impl Strategy<Value = u64> {
    1_000u64..=1_000_000_000_000
}

fn amount_strategy() -> impl Strategy<Value = u64> {
    1u64..=10_000_000_000
}

fn fee_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), Just(5), Just(30), Just(100), 0u32..10_000]
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    any::<bool>().prop_map(SwapDirection::from_a_to_b)
}

#[derive(Debug, Clone)]
enum Op {
    Swap(SwapDirection, u64),
    Add(u64, u64),
    /// Burn this many thousandths of the supply, at least one share.
    Remove(u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (direction_strategy(), amount_strategy()).prop_map(|(d, a)| Op::Swap(d, a)),
        2 => (amount_strategy(), amount_strategy()).prop_map(|(a, b)| Op::Add(a, b)),
        1 => (1u16..=1_000).prop_map(Op::Remove),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_operation_sequences_keep_pool_consistent(
        fee in fee_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut pool = make_pool(fee, ra, rb);

        for op in ops {
            let before = pool.clone();
            let outcome = match op {
                Op::Swap(direction, amount) => pool.swap(&unguarded(direction, amount)).map(|_| ()),
                Op::Add(a, b) => pool.add_liquidity(Amount::new(a), Amount::new(b)).map(|_| ()),
                Op::Remove(thousandths) => {
                    let supply = pool.share_supply().get();
                    let burn = (u128::from(supply) * u128::from(thousandths) / 1_000) as u64;
                    pool.remove_liquidity(Shares::new(burn.max(1))).map(|_| ())
                }
            };

            if outcome.is_err() {
                prop_assert_eq!(&pool, &before, "failed operation must not mutate the pool");
            }
            let reserves = pool.reserves();
            prop_assert!(reserves.is_consistent(), "inconsistent reserves: {}", reserves);
            prop_assert!(pool.status().agrees_with(&reserves));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Product Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swaps_never_decrease_product(
        fee in fee_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        direction in direction_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(fee, ra, rb);
        let k_before = pool.reserves().product();
        let Ok(_) = pool.swap(&unguarded(direction, amount)) else {
            return Ok(());
        };
        let k_after = pool.reserves().product();

        if fee > 0 {
            prop_assert!(k_after > k_before, "k must grow: {} <= {}", k_after, k_before);
        } else {
            prop_assert!(k_after >= k_before, "k must not shrink: {} < {}", k_after, k_before);
        }
    }
}

// ---------------------------------------------------------------------------
// Properties 3 & 4: No Dilution / Round-Trip Proportionality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_deposit_never_dilutes(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let mut pool = make_pool(30, ra, rb);
        let before = pool.reserves();
        let Ok(deposit) = pool.add_liquidity(Amount::new(da), Amount::new(db)) else {
            return Ok(());
        };
        prop_assert!(per_share_kept(&before, &pool.reserves()));
        prop_assert!(deposit.used_a().get() <= da);
        prop_assert!(deposit.used_b().get() <= db);
        prop_assert_eq!(deposit.used_a().get() + deposit.refund_a().get(), da);
        prop_assert_eq!(deposit.used_b().get() + deposit.refund_b().get(), db);
    }

    #[test]
    fn prop_deposit_withdraw_round_trip_loses_nothing_for_pool(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let mut pool = make_pool(30, ra, rb);
        let Ok(deposit) = pool.add_liquidity(Amount::new(da), Amount::new(db)) else {
            return Ok(());
        };
        let Ok(withdrawal) = pool.remove_liquidity(deposit.shares_minted()) else {
            return Err(TestCaseError::fail("withdrawing fresh shares must succeed"));
        };
        prop_assert!(withdrawal.amount_a() <= deposit.used_a());
        prop_assert!(withdrawal.amount_b() <= deposit.used_b());
        prop_assert!(pool.reserve_a().get() >= ra);
        prop_assert!(pool.reserve_b().get() >= rb);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Slippage Guard
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_slippage_guard_is_exact(
        fee in fee_strategy(),
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        direction in direction_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(fee, ra, rb);
        let Ok(quote) = pool.quote_swap(direction, Amount::new(amount)) else {
            return Ok(());
        };
        let quoted = quote.amount_out().get();

        let before = pool.clone();
        let too_tight = SwapRequest::new(direction, Amount::new(amount), Amount::new(quoted + 1));
        let Ok(too_tight) = too_tight else {
            return Err(TestCaseError::fail("valid request"));
        };
        let rejected = matches!(pool.swap(&too_tight), Err(AmmError::SlippageExceeded { .. }));
        prop_assert!(rejected, "quote + 1 must be rejected");
        prop_assert_eq!(&pool, &before);

        let Ok(exact) = SwapRequest::new(direction, Amount::new(amount), Amount::new(quoted)) else {
            return Err(TestCaseError::fail("valid request"));
        };
        let Ok(result) = pool.swap(&exact) else {
            return Err(TestCaseError::fail("exact quote must succeed"));
        };
        prop_assert_eq!(result.amount_out().get(), quoted);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Square Root Bounds
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_isqrt_bounds(n in any::<u128>()) {
        let r = isqrt(n);
        prop_assert!(r.checked_mul(r).is_some_and(|sq| sq <= n));
        let next = r + 1;
        prop_assert!(next.checked_mul(next).is_none_or(|sq| n < sq));
    }
}
