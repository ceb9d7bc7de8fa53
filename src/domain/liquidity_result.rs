//! Deposit and withdrawal outcomes.

use core::fmt;

use super::{Amount, Reserves, Shares};

/// Shares a deposit would mint and the collateral it would consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositQuote {
    shares_minted: Shares,
    used_a: Amount,
    used_b: Amount,
}

impl DepositQuote {
    pub(crate) const fn new(shares_minted: Shares, used_a: Amount, used_b: Amount) -> Self {
        Self {
            shares_minted,
            used_a,
            used_b,
        }
    }

    /// Shares minted to the depositor.
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }

    /// Asset A moved into the pool.
    pub const fn used_a(&self) -> Amount {
        self.used_a
    }

    /// Asset B moved into the pool.
    pub const fn used_b(&self) -> Amount {
        self.used_b
    }
}

/// The committed outcome of a deposit.
///
/// `used + refund` always equals the offered amount for each asset; the
/// pool never keeps collateral it did not mint shares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepositResult {
    quote: DepositQuote,
    refund_a: Amount,
    refund_b: Amount,
    reserves: Reserves,
}

impl DepositResult {
    pub(crate) const fn new(
        quote: DepositQuote,
        refund_a: Amount,
        refund_b: Amount,
        reserves: Reserves,
    ) -> Self {
        Self {
            quote,
            refund_a,
            refund_b,
            reserves,
        }
    }

    /// Shares minted to the depositor.
    pub const fn shares_minted(&self) -> Shares {
        self.quote.shares_minted()
    }

    /// Asset A moved into the pool.
    pub const fn used_a(&self) -> Amount {
        self.quote.used_a()
    }

    /// Asset B moved into the pool.
    pub const fn used_b(&self) -> Amount {
        self.quote.used_b()
    }

    /// Asset A returned to the depositor.
    pub const fn refund_a(&self) -> Amount {
        self.refund_a
    }

    /// Asset B returned to the depositor.
    pub const fn refund_b(&self) -> Amount {
        self.refund_b
    }

    /// Pool balances after the deposit.
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }
}

impl fmt::Display for DepositResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(minted={}, used=({}, {}), refund=({}, {}))",
            self.shares_minted(),
            self.used_a(),
            self.used_b(),
            self.refund_a,
            self.refund_b
        )
    }
}

/// Amounts a burn of shares would redeem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalQuote {
    amount_a: Amount,
    amount_b: Amount,
}

impl WithdrawalQuote {
    pub(crate) const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// Asset A paid out.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Asset B paid out.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

/// The committed outcome of a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WithdrawalResult {
    shares_burned: Shares,
    quote: WithdrawalQuote,
    reserves: Reserves,
}

impl WithdrawalResult {
    pub(crate) const fn new(
        shares_burned: Shares,
        quote: WithdrawalQuote,
        reserves: Reserves,
    ) -> Self {
        Self {
            shares_burned,
            quote,
            reserves,
        }
    }

    /// Shares removed from the supply.
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }

    /// Asset A paid out.
    pub const fn amount_a(&self) -> Amount {
        self.quote.amount_a()
    }

    /// Asset B paid out.
    pub const fn amount_b(&self) -> Amount {
        self.quote.amount_b()
    }

    /// Pool balances after the withdrawal.
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }
}

impl fmt::Display for WithdrawalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(burned={}, out=({}, {}))",
            self.shares_burned,
            self.amount_a(),
            self.amount_b()
        )
    }
}
