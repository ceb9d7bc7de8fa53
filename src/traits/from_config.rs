//! Construction trait for building a pool from configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed pool is guaranteed to be in a
//! valid, funded initial state:
//!
//! - Fee tier is below 100%.
//! - Both initial amounts are non-zero.
//! - The first deposit mints at least the configured minimum of shares.

use crate::error::AmmError;

/// Builds a pool from a configuration value.
///
/// The configuration is taken by reference so it can be reused, for
/// example to create several identical pools in a registry.
///
/// # Errors
///
/// Returns the configuration's own validation error, or the error of the
/// initial deposit.
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] if the fee tier is 100% or more.
    /// - [`AmmError::InsufficientInitialLiquidity`] if the first deposit
    ///   is too small.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
