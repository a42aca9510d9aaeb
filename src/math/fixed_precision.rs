//! Fixed-point implementation of the [`Precision`] trait.
//!
//! Only available with the `fixed-point` Cargo feature.
//! [`FixedPointArithmetic`] wraps [`I80F48`](fixed::types::I80F48) from the
//! [`fixed`] crate and gives bit-for-bit deterministic results for every
//! operation except the weighted power (see below).
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Integer bits | 80 (signed) |
//! | Fractional bits | 48 |
//! | Precision | 2^−48 ≈ 3.55 × 10⁻¹⁵ |
//! | Range | ±2^79 |
//! | Division rounding | honoured (`Up` adds one ULP on a remainder) |
//! | `powf` | evaluated through `f64`, then converted back |
//!
//! The weighted model raises a ratio in `(0, 1]` to a weight ratio.  `fixed`
//! has no real-valued power, so that single step round-trips through `f64`
//! and carries `f64` precision (~15 significant digits) instead of the full
//! 48 fractional bits.

use core::fmt;

use fixed::types::I80F48;

use crate::domain::Rounding;
use crate::error::AmmError;

use super::Precision;

/// `I80F48`-backed precision type for deterministic computation.
///
/// # Examples
///
/// ```
/// use fixed::types::I80F48;
/// use amm_pricing::domain::Rounding;
/// use amm_pricing::math::{FixedPointArithmetic, Precision};
///
/// let a = FixedPointArithmetic::new(I80F48::from_num(10));
/// let b = FixedPointArithmetic::new(I80F48::from_num(3));
/// let down = a.checked_div(&b, Rounding::Down).expect("non-zero");
/// let up = a.checked_div(&b, Rounding::Up).expect("non-zero");
/// assert!(up > down);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedPointArithmetic(I80F48);

impl FixedPointArithmetic {
    /// Creates a new `FixedPointArithmetic` from a raw [`I80F48`].
    #[inline]
    #[must_use]
    pub const fn new(value: I80F48) -> Self {
        Self(value)
    }

    /// Returns the underlying [`I80F48`] value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> I80F48 {
        self.0
    }
}

impl From<I80F48> for FixedPointArithmetic {
    #[inline]
    fn from(value: I80F48) -> Self {
        Self(value)
    }
}

impl From<u32> for FixedPointArithmetic {
    #[inline]
    fn from(value: u32) -> Self {
        Self(I80F48::from_num(value))
    }
}

impl fmt::Display for FixedPointArithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Precision for FixedPointArithmetic {
    #[inline]
    fn zero() -> Self {
        Self(I80F48::ZERO)
    }

    #[inline]
    fn one() -> Self {
        Self(I80F48::ONE)
    }

    /// Saturates at `I80F48::MAX` for values above 2^79.
    #[inline]
    fn from_u128(value: u128) -> Self {
        Self(I80F48::saturating_from_num(value))
    }

    /// Negative values are clamped to `0`; the fraction is truncated.
    #[inline]
    fn to_u128(&self) -> u128 {
        if self.0 < I80F48::ZERO {
            return 0;
        }
        self.0.to_num::<u128>()
    }

    /// Saturating conversion; `NaN` maps to zero.
    #[inline]
    fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self(I80F48::ZERO);
        }
        Self(I80F48::saturating_from_num(value))
    }

    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        self.0.to_num::<f64>()
    }

    fn checked_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(AmmError::Overflow("fixed-point addition overflow"))
    }

    fn checked_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(AmmError::Underflow("fixed-point subtraction underflow"))
    }

    fn checked_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.0
            .checked_mul(other.0)
            .map(Self)
            .ok_or(AmmError::Overflow("fixed-point multiplication overflow"))
    }

    /// - [`Rounding::Down`] truncates toward zero.
    /// - [`Rounding::Up`] adds one ULP when truncation discarded a
    ///   remainder.
    fn checked_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError> {
        if other.0 == I80F48::ZERO {
            return Err(AmmError::DivisionByZero);
        }

        let quotient = self
            .0
            .checked_div(other.0)
            .ok_or(AmmError::Overflow("fixed-point division overflow"))?;

        if rounding.is_down() {
            return Ok(Self(quotient));
        }

        let product = quotient
            .checked_mul(other.0)
            .ok_or(AmmError::Overflow("fixed-point division rounding overflow"))?;
        if product == self.0 {
            return Ok(Self(quotient));
        }
        quotient
            .checked_add(I80F48::DELTA)
            .map(Self)
            .ok_or(AmmError::Overflow("fixed-point division rounding overflow"))
    }

    fn checked_pow(&self, exponent: &Self) -> Result<Self, AmmError> {
        if self.0 <= I80F48::ZERO {
            return Err(AmmError::NumericDomain("power base must be positive"));
        }
        if self.0 == I80F48::ONE || exponent.0 == I80F48::ZERO {
            return Ok(Self::one());
        }
        if exponent.0 == I80F48::ONE {
            return Ok(*self);
        }
        let raised = self.to_f64_lossy().powf(exponent.to_f64_lossy());
        I80F48::checked_from_num(raised)
            .map(Self)
            .ok_or(AmmError::Overflow("fixed-point power overflow"))
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == I80F48::ZERO
    }
}
