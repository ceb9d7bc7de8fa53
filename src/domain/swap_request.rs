//! Swap request value object.

use core::fmt;

use super::{Amount, SwapDirection};
use crate::error::AmmError;

/// A request to sell `amount_in` of one asset, accepting no less than
/// `min_amount_out` of the other.
///
/// # Invariants
///
/// `amount_in` is always non-zero.  `min_amount_out` may be zero, which
/// disables the slippage guard.
///
/// # Examples
///
/// ```
/// use duet_amm::domain::{Amount, SwapDirection, SwapRequest};
///
/// let req = SwapRequest::new(SwapDirection::AToB, Amount::new(1_000), Amount::new(1_900));
/// assert!(req.is_ok());
/// assert!(SwapRequest::new(SwapDirection::AToB, Amount::ZERO, Amount::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapRequest {
    direction: SwapDirection,
    amount_in: Amount,
    min_amount_out: Amount,
}

impl SwapRequest {
    /// Creates a swap request with a slippage floor.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be non-zero"));
        }
        Ok(Self {
            direction,
            amount_in,
            min_amount_out,
        })
    }

    /// Creates a swap request that accepts any output, including zero.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    pub const fn unguarded(
        direction: SwapDirection,
        amount_in: Amount,
    ) -> crate::error::Result<Self> {
        Self::new(direction, amount_in, Amount::ZERO)
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum acceptable output.
    pub const fn min_amount_out(&self) -> Amount {
        self.min_amount_out
    }
}

impl fmt::Display for SwapRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapRequest({} in={}, min_out={})",
            self.direction, self.amount_in, self.min_amount_out
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn zero_input_rejected() {
        let Err(AmmError::InvalidQuantity(_)) =
            SwapRequest::new(SwapDirection::BToA, Amount::ZERO, Amount::new(1))
        else {
            panic!("expected InvalidQuantity");
        };
    }

    #[test]
    fn unguarded_has_zero_floor() {
        let Ok(req) = SwapRequest::unguarded(SwapDirection::AToB, Amount::new(5)) else {
            panic!("expected Ok");
        };
        assert_eq!(req.min_amount_out(), Amount::ZERO);
        assert_eq!(req.amount_in(), Amount::new(5));
        assert_eq!(req.direction(), SwapDirection::AToB);
    }

    #[test]
    fn display() {
        let Ok(req) = SwapRequest::new(SwapDirection::AToB, Amount::new(10), Amount::new(9)) else {
            panic!("expected Ok");
        };
        assert_eq!(req.to_string(), "SwapRequest(A->B in=10, min_out=9)");
    }
}
