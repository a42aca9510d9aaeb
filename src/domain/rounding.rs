//! Explicit rounding direction for division and settlement.

/// Rounding direction for division and for [`settle`](crate::math::settle).
///
/// Output-side quantities round [`Down`](Rounding::Down), input-side
/// quantities round [`Up`](Rounding::Up); see [`Rounding::for_output`] and
/// [`Rounding::for_input`].
///
/// # Examples
///
/// ```
/// use amm_pricing::domain::Rounding;
///
/// assert!(Rounding::for_input().is_up());
/// assert!(Rounding::for_output().is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Direction for amounts the trader receives.
    #[must_use]
    pub const fn for_output() -> Self {
        Self::Down
    }

    /// Direction for amounts the trader pays.
    #[must_use]
    pub const fn for_input() -> Self {
        Self::Up
    }

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
}
