//! Core trait abstractions for pool operations.
//!
//! [`SwapPool`] prices and executes swaps, [`LiquidityPool`] mints and
//! burns shares, and [`FromConfig`] builds a funded pool from a
//! [`PoolConfig`](crate::config::PoolConfig).

mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
