//! # Duet AMM
//!
//! Deterministic constant-product market maker engine for two-asset pools.
//!
//! Given pool state and a requested operation, the engine computes the
//! resulting state and the amounts owed to the caller.  It has no ledger,
//! wallet, or network dependency: the host passes plain integer amounts in
//! and receives plain integer amounts back.
//!
//! - Swaps use `x · y = k` with an input-side fee in basis points.
//! - Liquidity is tracked as fungible shares; the first deposit mints
//!   `floor(√(a × b))`.
//! - Every mutation is atomic: a rejected operation leaves the pool as it
//!   was.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for value types, configs and snapshots |
//!
//! # Quick Start
//!
//! ```rust
//! use duet_amm::prelude::*;
//!
//! // 1. Describe the pool: 0.30% fee, funded with 1 000 000 A and 2 000 000 B.
//! let config = PoolConfig::new(
//!     FeeTier::TIER_0_30_PERCENT,
//!     Amount::new(1_000_000),
//!     Amount::new(2_000_000),
//! )
//! .expect("valid config");
//!
//! // 2. Create it; the creator receives floor(√(1e6 × 2e6)) shares.
//! let (mut pool, funded) = ConstantProductPool::create(&config).expect("pool created");
//! assert_eq!(funded.shares_minted(), Shares::new(1_414_213));
//!
//! // 3. Sell 10 000 A, requiring at least 19 000 B back.
//! let request = SwapRequest::new(SwapDirection::AToB, Amount::new(10_000), Amount::new(19_000))
//!     .expect("non-zero input");
//! let result = pool.swap(&request).expect("swap succeeded");
//! assert_eq!(result.amount_out(), Amount::new(19_743));
//!
//! // 4. Burn every share: the pool pays out its reserves exactly.
//! let exit = pool.remove_liquidity(pool.share_supply()).expect("withdrawal");
//! assert_eq!(exit.amount_a(), Amount::new(1_010_000));
//! assert_eq!(pool.status(), PoolStatus::Drained);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ PoolRegistry │  arena of pools, one RwLock per pool
//! └──────┬───────┘
//!        │ PoolId
//!        ▼
//! ┌──────────────┐
//! │     Pool     │  plan → validate → commit, status, fee counters
//! └──────┬───────┘
//!        │ SwapPool + LiquidityPool traits
//!        ▼
//! ┌──────────────┐
//! │    Engine    │  pure quote_* / apply_* functions
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │     Math     │  u128 mul_div with explicit rounding, isqrt
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Reserves`](domain::Reserves), requests and results |
//! | [`math`]   | Wide multiply-divide, checked narrowing, integer square root |
//! | [`engine`] | Pricing and liquidity formulas |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) and [`PoolRegistry`](pools::PoolRegistry) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber: `debug`
//! for each committed or rejected operation, `info` for pool creation and
//! status changes in the registry.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
