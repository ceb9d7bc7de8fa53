//! Share minting and redemption.
//!
//! Deposits into an empty pool mint `floor(√(amount_a × amount_b))` shares
//! and set the reserves outright.  Later deposits mint against the
//! limiting asset,
//!
//! ```text
//! minted = min(amount_a × S / R_a, amount_b × S / R_b)      (floor)
//! used_x = ceil(minted × R_x / S)
//! ```
//!
//! so each new share is backed by at least as much of each reserve as an
//! existing one.  Withdrawals pay `floor(burned × R_x / S)` of each asset.

use crate::domain::{
    Amount, DepositQuote, Reserves, Rounding, Shares, WithdrawalQuote,
};
use crate::error::{AmmError, Result};
use crate::math::{isqrt, mul_div, narrow, CheckedArithmetic};

/// Quotes a deposit of up to `amount_a` / `amount_b` into `reserves`.
///
/// When the pool has no shares outstanding the first-deposit rule applies
/// and at least `minimum_initial` shares must be minted.
///
/// # Errors
///
/// - [`AmmError::InsufficientInitialLiquidity`] if a first deposit mints
///   fewer than `minimum_initial` shares (including any zero amount).
/// - [`AmmError::InvalidQuantity`] if a later deposit has a zero side or
///   is too small to mint a single share.
/// - [`AmmError::ArithmeticOverflow`] if the minted share count does not
///   fit in 64 bits.
///
/// # Examples
///
/// ```
/// use duet_amm::domain::{Amount, Reserves, Shares};
/// use duet_amm::engine::quote_deposit;
///
/// let (a, b) = (Amount::new(1_000_000), Amount::new(2_000_000));
/// let q = quote_deposit(&Reserves::EMPTY, a, b, Shares::ONE).expect("first deposit");
/// assert_eq!(q.shares_minted(), Shares::new(1_414_213));
/// ```
pub fn quote_deposit(
    reserves: &Reserves,
    amount_a: Amount,
    amount_b: Amount,
    minimum_initial: Shares,
) -> Result<DepositQuote> {
    if reserves.share_supply().is_zero() {
        return quote_initial_deposit(amount_a, amount_b, minimum_initial);
    }
    if amount_a.is_zero() || amount_b.is_zero() {
        return Err(AmmError::InvalidQuantity("deposit requires both assets"));
    }

    let supply = reserves.share_supply().wide();
    let reserve_a = reserves.reserve_a().wide();
    let reserve_b = reserves.reserve_b().wide();

    let by_a = mul_div(amount_a.wide(), supply, reserve_a, Rounding::Down)?;
    let by_b = mul_div(amount_b.wide(), supply, reserve_b, Rounding::Down)?;
    let minted = narrow(by_a.min(by_b), "minted shares overflow")?;
    if minted == 0 {
        return Err(AmmError::InvalidQuantity("deposit too small to mint shares"));
    }

    let used_a = narrow(
        mul_div(u128::from(minted), reserve_a, supply, Rounding::Up)?,
        "deposit amount overflow",
    )?;
    let used_b = narrow(
        mul_div(u128::from(minted), reserve_b, supply, Rounding::Up)?,
        "deposit amount overflow",
    )?;
    if used_a > amount_a.get() || used_b > amount_b.get() {
        return Err(AmmError::InvariantViolation("deposit uses more than offered"));
    }

    Ok(DepositQuote::new(
        Shares::new(minted),
        Amount::new(used_a),
        Amount::new(used_b),
    ))
}

/// Quotes the deposit that funds an empty pool.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientInitialLiquidity`] if fewer than
/// `minimum` shares would be minted.
pub fn quote_initial_deposit(
    amount_a: Amount,
    amount_b: Amount,
    minimum: Shares,
) -> Result<DepositQuote> {
    // Two 64-bit factors: the product fits and its root fits back in 64 bits.
    let root = isqrt(amount_a.wide() * amount_b.wide());
    let minted = Shares::new(narrow(root, "initial shares overflow")?);
    if minted.is_zero() || minted < minimum {
        return Err(AmmError::InsufficientInitialLiquidity);
    }
    Ok(DepositQuote::new(minted, amount_a, amount_b))
}

/// Computes the reserves after a quoted deposit.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if a reserve or the share
/// supply would exceed 64 bits.
pub fn apply_deposit(reserves: &Reserves, quote: &DepositQuote) -> Result<Reserves> {
    Ok(Reserves::new(
        reserves.reserve_a().safe_add(&quote.used_a())?,
        reserves.reserve_b().safe_add(&quote.used_b())?,
        reserves.share_supply().safe_add(&quote.shares_minted())?,
    ))
}

/// Quotes the proportional redemption of `shares`.
///
/// Burning the whole supply returns the reserves exactly.
///
/// # Errors
///
/// Returns [`AmmError::InsufficientShares`] if `shares` is zero or exceeds
/// the outstanding supply.
///
/// # Examples
///
/// ```
/// use duet_amm::domain::{Amount, Reserves, Shares};
/// use duet_amm::engine::quote_withdrawal;
///
/// let r = Reserves::new(Amount::new(1_000), Amount::new(3_000), Shares::new(100));
/// let q = quote_withdrawal(&r, Shares::new(10)).expect("withdrawal");
/// assert_eq!((q.amount_a(), q.amount_b()), (Amount::new(100), Amount::new(300)));
/// ```
pub fn quote_withdrawal(reserves: &Reserves, shares: Shares) -> Result<WithdrawalQuote> {
    let supply = reserves.share_supply();
    if shares.is_zero() || shares > supply {
        return Err(AmmError::InsufficientShares {
            requested: shares,
            available: supply,
        });
    }

    let amount_a = mul_div(
        shares.wide(),
        reserves.reserve_a().wide(),
        supply.wide(),
        Rounding::Down,
    )?;
    let amount_b = mul_div(
        shares.wide(),
        reserves.reserve_b().wide(),
        supply.wide(),
        Rounding::Down,
    )?;

    Ok(WithdrawalQuote::new(
        Amount::new(narrow(amount_a, "withdrawal amount overflow")?),
        Amount::new(narrow(amount_b, "withdrawal amount overflow")?),
    ))
}

/// Computes the reserves after burning `shares` for `quote`.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if a balance would go negative.
pub fn apply_withdrawal(
    reserves: &Reserves,
    shares: Shares,
    quote: &WithdrawalQuote,
) -> Result<Reserves> {
    Ok(Reserves::new(
        reserves.reserve_a().safe_sub(&quote.amount_a())?,
        reserves.reserve_b().safe_sub(&quote.amount_b())?,
        reserves.share_supply().safe_sub(&shares)?,
    ))
}
