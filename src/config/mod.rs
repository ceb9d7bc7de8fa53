//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for creating a funded pool.
//! It is validated on construction and again when a pool is built from it.

mod pool_config;

pub use pool_config::PoolConfig;
