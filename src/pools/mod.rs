//! The constant-product pool manager and the registry that hosts many pools.
//!
//! | Item | Role |
//! |------|------|
//! | [`ConstantProductPool`] | Single pool: sequences engine calls, checks invariants, commits atomically |
//! | [`PoolStatus`] | Lifecycle: `Uninitialized → Active ⇄ Active → Drained` |
//! | [`PoolSnapshot`] | Plain record of every pool field for persistence |
//! | [`PoolRegistry`] | Arena of pools keyed by [`PoolId`](crate::domain::PoolId), one lock per pool |

pub mod constant_product;
pub mod registry;
mod snapshot;
mod status;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use registry::PoolRegistry;
pub use snapshot::PoolSnapshot;
pub use status::PoolStatus;
