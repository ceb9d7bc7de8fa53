//! Deterministic integer arithmetic for pool calculations.
//!
//! Amounts and shares are 64-bit.  Products of two of them are formed in
//! 128-bit space by [`mul_div`] and narrowed back with [`narrow`], which
//! reports [`ArithmeticOverflow`](crate::error::AmmError::ArithmeticOverflow)
//! rather than truncating.  No floating point is used anywhere on the
//! pricing path.
//!
//! | Item | Role |
//! |------|------|
//! | [`mul_div`] | `a × b / d` with explicit [`Rounding`](crate::domain::Rounding) |
//! | [`div_round`] | floor or ceiling division |
//! | [`narrow`] | checked `u128 → u64` |
//! | [`isqrt`] | floor square root for initial share minting |
//! | [`CheckedArithmetic`] | `Result`-returning add/sub on domain types |

mod checked;
mod rounding;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, mul_div, narrow};
pub use sqrt::isqrt;
