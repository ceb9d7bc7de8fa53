//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait turns the `Option`-returning checked
//! operations of [`Amount`] and [`Shares`] into
//! [`Result<Self, AmmError>`](crate::error::AmmError) so they compose with
//! `?` inside the engine.
//!
//! # Examples
//!
//! ```
//! use duet_amm::domain::Amount;
//! use duet_amm::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//! assert!(Amount::MAX.safe_add(&Amount::new(1)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
/// - Overflow and underflow both report [`AmmError::ArithmeticOverflow`],
///   since for unsigned balances either one means a caller supplied an
///   amount the pool cannot represent.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ArithmeticOverflow`] if the result would be
    /// negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("amount subtraction underflow"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("share supply overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("share supply underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    mod amount {
        use super::*;

        #[test]
        fn add_ok() {
            let Ok(r) = Amount::new(100).safe_add(&Amount::new(200)) else {
                panic!("expected Ok");
            };
            assert_eq!(r, Amount::new(300));
        }

        #[test]
        fn add_overflow() {
            let Err(AmmError::ArithmeticOverflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
                panic!("expected ArithmeticOverflow");
            };
        }

        #[test]
        fn sub_underflow() {
            let Err(AmmError::ArithmeticOverflow(_)) = Amount::new(1).safe_sub(&Amount::new(2))
            else {
                panic!("expected ArithmeticOverflow");
            };
        }

        #[test]
        fn chaining_works() {
            let result = Amount::new(100)
                .safe_add(&Amount::new(200))
                .and_then(|v| v.safe_sub(&Amount::new(50)));
            assert_eq!(result, Ok(Amount::new(250)));
        }
    }

    mod shares {
        use super::*;

        #[test]
        fn add_overflow() {
            let Err(AmmError::ArithmeticOverflow(_)) =
                Shares::new(u64::MAX).safe_add(&Shares::ONE)
            else {
                panic!("expected ArithmeticOverflow");
            };
        }

        #[test]
        fn sub_to_zero() {
            let Ok(r) = Shares::new(42).safe_sub(&Shares::new(42)) else {
                panic!("expected Ok");
            };
            assert!(r.is_zero());
        }
    }
}
