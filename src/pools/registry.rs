//! Arena of pools addressed by [`PoolId`].
//!
//! Each pool sits behind its own [`parking_lot::RwLock`], which makes it a
//! single serialization domain: a mutation holds the write lock for its
//! whole read-modify-write, while reserve reads and quotes share the read
//! lock and always see a committed state.  Different pools never contend
//! with each other.  The outer lock only guards the arena itself and is
//! released before any pool lock is taken.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::config::PoolConfig;
use crate::domain::{
    Amount, DepositResult, LiquidityChange, LiquidityResult, PoolId, Reserves, Shares,
    SwapDirection, SwapQuote, SwapRequest, SwapResult, WithdrawalResult,
};
use crate::error::{AmmError, Result};
use crate::pools::{ConstantProductPool, PoolSnapshot, PoolStatus};
use crate::traits::{LiquidityPool, SwapPool};

type Handle = Arc<RwLock<ConstantProductPool>>;

/// Thread-safe collection of constant-product pools.
///
/// # Example
///
/// ```rust
/// use duet_amm::config::PoolConfig;
/// use duet_amm::domain::{Amount, FeeTier, SwapDirection, SwapRequest};
/// use duet_amm::pools::PoolRegistry;
///
/// let registry = PoolRegistry::new();
/// let (a, b) = (Amount::new(1_000_000), Amount::new(2_000_000));
/// let cfg = PoolConfig::new(FeeTier::TIER_0_30_PERCENT, a, b).expect("valid config");
/// let (id, _) = registry.create_pool(&cfg).expect("created");
///
/// let req = SwapRequest::unguarded(SwapDirection::AToB, Amount::new(10_000)).expect("non-zero");
/// let result = registry.swap(id, &req).expect("swap ok");
/// assert_eq!(result.amount_out(), Amount::new(19_743));
/// assert_eq!(registry.get_reserves(id).expect("known id").reserve_a(), Amount::new(1_010_000));
/// ```
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: RwLock<Vec<Handle>>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and funds a pool, returning its id and the initial deposit.
    ///
    /// # Errors
    ///
    /// Same as [`ConstantProductPool::create`], plus
    /// [`AmmError::ArithmeticOverflow`] if the id space is exhausted.
    pub fn create_pool(&self, config: &PoolConfig) -> Result<(PoolId, DepositResult)> {
        let (pool, deposit) = ConstantProductPool::create(config)?;
        let id = self.insert(pool)?;
        info!(
            pool = %id,
            fee = %config.fee_tier(),
            reserve_a = deposit.used_a().get(),
            reserve_b = deposit.used_b().get(),
            shares = deposit.shares_minted().get(),
            "pool created"
        );
        Ok((id, deposit))
    }

    /// Adopts an existing pool, such as one rebuilt with
    /// [`ConstantProductPool::restore`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the id space is exhausted.
    pub fn insert(&self, pool: ConstantProductPool) -> Result<PoolId> {
        let mut pools = self.pools.write();
        let index = u32::try_from(pools.len())
            .map_err(|_| AmmError::ArithmeticOverflow("pool id space exhausted"))?;
        pools.push(Arc::new(RwLock::new(pool)));
        Ok(PoolId::new(index))
    }

    /// Executes a swap on pool `id`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] for an unknown id, otherwise the errors of
    /// [`SwapPool::swap`].
    pub fn swap(&self, id: PoolId, request: &SwapRequest) -> Result<SwapResult> {
        self.mutate(id, |pool| pool.swap(request))
    }

    /// Deposits into pool `id`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] for an unknown id, otherwise the errors of
    /// [`LiquidityPool::add_liquidity`].
    pub fn add_liquidity(
        &self,
        id: PoolId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<DepositResult> {
        self.mutate(id, |pool| pool.add_liquidity(amount_a, amount_b))
    }

    /// Burns shares of pool `id`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] for an unknown id, otherwise the errors of
    /// [`LiquidityPool::remove_liquidity`].
    pub fn remove_liquidity(&self, id: PoolId, shares: Shares) -> Result<WithdrawalResult> {
        self.mutate(id, |pool| pool.remove_liquidity(shares))
    }

    /// Applies a liquidity change to pool `id`.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] for an unknown id, otherwise the errors of
    /// [`LiquidityPool::apply`].
    pub fn apply(&self, id: PoolId, change: &LiquidityChange) -> Result<LiquidityResult> {
        self.mutate(id, |pool| pool.apply(change))
    }

    /// Returns a consistent view of pool `id`'s reserves and share supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] for an unknown id.
    pub fn get_reserves(&self, id: PoolId) -> Result<Reserves> {
        Ok(self.handle(id)?.read().reserves())
    }

    /// Quotes a swap on pool `id` without executing it.
    ///
    /// # Errors
    ///
    /// [`AmmError::PoolNotFound`] for an unknown id, otherwise the errors of
    /// [`SwapPool::quote_swap`].
    pub fn quote_swap_output(
        &self,
        id: PoolId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote> {
        self.handle(id)?.read().quote_swap(direction, amount_in)
    }

    /// Returns the lifecycle state of pool `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] for an unknown id.
    pub fn status(&self, id: PoolId) -> Result<PoolStatus> {
        Ok(self.handle(id)?.read().status())
    }

    /// Copies every field of pool `id` for persistence.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] for an unknown id.
    pub fn snapshot(&self, id: PoolId) -> Result<PoolSnapshot> {
        Ok(self.handle(id)?.read().snapshot())
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// Returns `true` if no pool has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }

    /// Ids of all registered pools, in creation order.
    #[must_use]
    pub fn ids(&self) -> Vec<PoolId> {
        (0..self.len())
            .filter_map(|index| u32::try_from(index).ok())
            .map(PoolId::new)
            .collect()
    }

    fn handle(&self, id: PoolId) -> Result<Handle> {
        let pools = self.pools.read();
        usize::try_from(id.get())
            .ok()
            .and_then(|index| pools.get(index))
            .cloned()
            .ok_or(AmmError::PoolNotFound(id))
    }

    /// Runs `op` under pool `id`'s write lock and reports status changes.
    fn mutate<T>(
        &self,
        id: PoolId,
        op: impl FnOnce(&mut ConstantProductPool) -> Result<T>,
    ) -> Result<T> {
        let handle = self.handle(id)?;
        let mut pool = handle.write();
        let before = pool.status();
        let out = op(&mut *pool)?;
        let after = pool.status();
        if before != after {
            info!(pool = %id, from = %before, to = %after, "pool status changed");
        }
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::fmt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use tracing::field::{Field, Visit};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;
    use crate::domain::FeeTier;

    /// Counts events whose message is "pool status changed".
    struct StatusEvents(Arc<AtomicUsize>);

    struct Message(String);

    impl Visit for Message {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for StatusEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut message = Message(String::new());
            event.record(&mut message);
            if message.0 == "pool status changed" {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn config(a: u64, b: u64) -> PoolConfig {
        let Ok(cfg) = PoolConfig::new(FeeTier::TIER_0_30_PERCENT, Amount::new(a), Amount::new(b))
        else {
            panic!("expected valid config");
        };
        cfg
    }

    fn unguarded(direction: SwapDirection, amount_in: u64) -> SwapRequest {
        let Ok(req) = SwapRequest::unguarded(direction, Amount::new(amount_in)) else {
            panic!("valid request");
        };
        req
    }

    #[test]
    fn ids_are_sequential() {
        let registry = PoolRegistry::new();
        assert!(registry.is_empty());
        let Ok((first, _)) = registry.create_pool(&config(1_000, 1_000)) else {
            panic!("expected Ok");
        };
        let Ok((second, _)) = registry.create_pool(&config(2_000, 2_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(first, PoolId::new(0));
        assert_eq!(second, PoolId::new(1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ids(), vec![first, second]);
    }

    #[test]
    fn unknown_id_rejected() {
        let registry = PoolRegistry::new();
        let missing = PoolId::new(7);
        let Err(AmmError::PoolNotFound(id)) = registry.get_reserves(missing) else {
            panic!("expected PoolNotFound");
        };
        assert_eq!(id, missing);
        assert!(matches!(
            registry.swap(missing, &unguarded(SwapDirection::AToB, 1)),
            Err(AmmError::PoolNotFound(_))
        ));
    }

    #[test]
    fn failed_create_registers_nothing() {
        let registry = PoolRegistry::new();
        let Ok(cfg) = config(1, 1).with_min_initial_shares(Shares::new(2)) else {
            panic!("expected valid config");
        };
        assert!(registry.create_pool(&cfg).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn pools_are_independent() {
        let registry = PoolRegistry::new();
        let Ok((a, _)) = registry.create_pool(&config(1_000_000, 2_000_000)) else {
            panic!("expected Ok");
        };
        let Ok((b, _)) = registry.create_pool(&config(1_000_000, 2_000_000)) else {
            panic!("expected Ok");
        };
        let Ok(_) = registry.swap(a, &unguarded(SwapDirection::AToB, 10_000)) else {
            panic!("expected Ok");
        };
        let Ok(untouched) = registry.get_reserves(b) else {
            panic!("expected Ok");
        };
        assert_eq!(untouched.reserve_a(), Amount::new(1_000_000));
    }

    #[test]
    fn status_follows_liquidity() {
        let registry = PoolRegistry::new();
        let Ok((id, deposit)) = registry.create_pool(&config(4_000, 9_000)) else {
            panic!("expected Ok");
        };
        assert!(matches!(registry.status(id), Ok(PoolStatus::Active)));
        let Ok(_) = registry.remove_liquidity(id, deposit.shares_minted()) else {
            panic!("expected Ok");
        };
        assert!(matches!(registry.status(id), Ok(PoolStatus::Drained)));
        let Ok(_) = registry.add_liquidity(id, Amount::new(100), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert!(matches!(registry.status(id), Ok(PoolStatus::Active)));
    }

    #[test]
    fn each_status_change_logged_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(StatusEvents(Arc::clone(&count)));
        tracing::subscriber::with_default(subscriber, || {
            let registry = PoolRegistry::new();
            let Ok((id, deposit)) = registry.create_pool(&config(4_000, 9_000)) else {
                panic!("expected Ok");
            };
            let Ok(_) = registry.swap(id, &unguarded(SwapDirection::AToB, 100)) else {
                panic!("expected Ok");
            };
            let Ok(reserves) = registry.get_reserves(id) else {
                panic!("expected Ok");
            };
            assert_eq!(reserves.share_supply(), deposit.shares_minted());
            // Active -> Drained -> Active.
            let Ok(_) = registry.remove_liquidity(id, deposit.shares_minted()) else {
                panic!("expected Ok");
            };
            let Ok(_) = registry.add_liquidity(id, Amount::new(100), Amount::new(100)) else {
                panic!("expected Ok");
            };
        });
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn concurrent_swaps_serialize_per_pool() {
        let registry = Arc::new(PoolRegistry::new());
        let Ok((id, _)) = registry.create_pool(&config(1_000_000_000, 1_000_000_000)) else {
            panic!("expected Ok");
        };
        let Ok(start) = registry.get_reserves(id) else {
            panic!("expected Ok");
        };

        let workers: Vec<_> = (0..8)
            .map(|worker| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let direction = SwapDirection::from_a_to_b(worker % 2 == 0);
                    for _ in 0..100 {
                        if registry.swap(id, &unguarded(direction, 1_000)).is_err() {
                            return false;
                        }
                        let Ok(seen) = registry.get_reserves(id) else {
                            return false;
                        };
                        if !seen.is_consistent() {
                            return false;
                        }
                    }
                    true
                })
            })
            .collect();
        for worker in workers {
            assert!(matches!(worker.join(), Ok(true)));
        }

        let Ok(snapshot) = registry.snapshot(id) else {
            panic!("expected Ok");
        };
        // 400 swaps per side, fee = 1_000 - floor(1_000 × 0.997) = 3 each.
        assert_eq!(snapshot.accumulated_fees_a, Amount::new(1_200));
        assert_eq!(snapshot.accumulated_fees_b, Amount::new(1_200));
        assert!(snapshot.reserves.product() > start.product());
    }
}
