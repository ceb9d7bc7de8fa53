//! Pure pricing and liquidity functions.
//!
//! Nothing here holds state.  Each `quote_*` function computes what an
//! operation would do from a reserve snapshot; each `apply_*` function
//! computes the candidate post-state.  The pool manager in
//! [`pools`](crate::pools) sequences them and decides whether to commit.

pub mod liquidity;
pub mod pricing;

pub use liquidity::{
    apply_deposit, apply_withdrawal, quote_deposit, quote_initial_deposit, quote_withdrawal,
};
pub use pricing::{apply_swap, check_min_output, quote_directed, quote_swap};
