//! Fundamental domain value types used throughout the engine.
//!
//! Amounts, shares and fee rates are newtypes so that a reserve can never
//! be passed where a share count is expected.  Requests validate their
//! inputs on construction; results are produced only by the engine.

mod amount;
mod basis_points;
mod direction;
mod fee_tier;
mod liquidity_change;
mod liquidity_result;
mod pool_id;
mod reserves;
mod rounding;
mod shares;
mod swap_request;
mod swap_result;

pub use amount::Amount;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use direction::SwapDirection;
pub use fee_tier::FeeTier;
pub use liquidity_change::{LiquidityChange, LiquidityResult};
pub use liquidity_result::{DepositQuote, DepositResult, WithdrawalQuote, WithdrawalResult};
pub use pool_id::PoolId;
pub use reserves::Reserves;
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_request::SwapRequest;
pub use swap_result::{SwapQuote, SwapResult};
