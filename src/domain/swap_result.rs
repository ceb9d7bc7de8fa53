//! Outcome of a swap quote or execution.

use core::fmt;

use super::{Amount, Reserves, SwapDirection};

/// Output of the pricing engine for a given input, before anything is
/// committed.
///
/// `amount_out` may be zero: a tiny input against a deep pool is a legal
/// (if useless) trade, and the caller's slippage guard decides whether to
/// accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapQuote {
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapQuote {
    pub(crate) const fn new(amount_in: Amount, amount_out: Amount, fee: Amount) -> Self {
        Self {
            amount_in,
            amount_out,
            fee,
        }
    }

    /// Full input amount, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output paid to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Portion of the input retained as fee.
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

/// The committed outcome of a swap.
///
/// # Examples
///
/// ```
/// use duet_amm::config::PoolConfig;
/// use duet_amm::domain::{Amount, FeeTier, SwapDirection, SwapRequest};
/// use duet_amm::pools::ConstantProductPool;
/// use duet_amm::traits::{FromConfig, SwapPool};
///
/// let (a, b) = (Amount::new(1_000_000), Amount::new(2_000_000));
/// let cfg = PoolConfig::new(FeeTier::TIER_0_30_PERCENT, a, b).expect("valid config");
/// let mut pool = ConstantProductPool::from_config(&cfg).expect("pool");
/// let req = SwapRequest::unguarded(SwapDirection::AToB, Amount::new(10_000)).expect("non-zero");
/// let result = pool.swap(&req).expect("swap");
///
/// assert_eq!(result.amount_out(), Amount::new(19_743));
/// assert_eq!(result.reserves().reserve_b(), Amount::new(1_980_257));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    direction: SwapDirection,
    quote: SwapQuote,
    reserves: Reserves,
}

impl SwapResult {
    pub(crate) const fn new(
        direction: SwapDirection,
        quote: SwapQuote,
        reserves: Reserves,
    ) -> Self {
        Self {
            direction,
            quote,
            reserves,
        }
    }

    /// Direction the swap was executed in.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Input taken from the trader.
    pub const fn amount_in(&self) -> Amount {
        self.quote.amount_in()
    }

    /// Output paid to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.quote.amount_out()
    }

    /// Fee retained by the pool.
    pub const fn fee(&self) -> Amount {
        self.quote.fee()
    }

    /// The quote the swap executed at.
    pub const fn quote(&self) -> SwapQuote {
        self.quote
    }

    /// Pool balances after the swap.
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }
}

impl fmt::Display for SwapResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapResult({} in={}, out={}, fee={})",
            self.direction,
            self.amount_in(),
            self.amount_out(),
            self.fee()
        )
    }
}
