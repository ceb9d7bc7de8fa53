//! Explicit rounding direction for integer division.

/// Rounding direction for every division the engine performs.
///
/// The engine rounds so that remainders stay with the pool:
///
/// | Quantity | Direction |
/// |----------|-----------|
/// | Swap output, withdrawal amounts, minted shares | [`Rounding::Down`] |
/// | Collateral consumed by a deposit | [`Rounding::Up`] |
///
/// # Examples
///
/// ```
/// use duet_amm::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert_eq!(Rounding::Up.description(), "ceiling");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor for unsigned operands).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }

    /// Short name of the rounding mode.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Up => "ceiling",
            Self::Down => "floor",
        }
    }
}
