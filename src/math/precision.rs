//! Precision trait for feature-gated numeric backends.
//!
//! The [`Precision`] trait abstracts over the real-number representation
//! the pricing formulas are evaluated in.  Every calculator is generic over
//! `P: Precision`, so the same formula runs with either floating-point or
//! fixed-point arithmetic depending on compile-time feature selection.
//!
//! | Feature | Backend | Type |
//! |---------|---------|------|
//! | `float` | IEEE 754 `f64` | `FloatArithmetic` |
//! | `fixed-point` | `I80F48` (80-bit int, 48-bit frac) | `FixedPointArithmetic` |

use crate::domain::Rounding;
use crate::error::AmmError;

/// Abstraction over numeric types used in AMM pricing.
///
/// # Contract
///
/// - All checked methods return [`Err`] on overflow, underflow, division
///   by zero, or a domain violation. They **never** panic.
/// - Conversion helpers (`from_u128`, `from_f64`) are infallible but may
///   lose precision for values outside the representable range (documented
///   per implementation).
/// - `zero()` and `one()` return the additive and multiplicative identities.
/// - `PartialOrd` comparisons against `zero()` are how callers validate
///   sign; a `NaN` value compares false against everything and is therefore
///   rejected by every positivity check.
pub trait Precision: Clone + Copy + core::fmt::Debug + PartialEq + PartialOrd {
    // -- Identity constants -------------------------------------------------

    /// Returns the additive identity (zero).
    #[must_use]
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    #[must_use]
    fn one() -> Self;

    // -- Conversions --------------------------------------------------------

    /// Converts a `u128` value to this precision type.
    #[must_use]
    fn from_u128(value: u128) -> Self;

    /// Extracts the integer part as `u128`, truncating toward zero.
    ///
    /// Negative values are clamped to `0`.
    #[must_use]
    fn to_u128(&self) -> u128;

    /// Converts an `f64` value to this precision type.
    #[must_use]
    fn from_f64(value: f64) -> Self;

    /// Converts this value to `f64`, potentially losing precision.
    #[must_use]
    fn to_f64_lossy(&self) -> f64;

    // -- Checked arithmetic -------------------------------------------------

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not representable.
    fn checked_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result is not representable.
    fn checked_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not representable.
    fn checked_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    /// Returns [`AmmError::Overflow`] if the result is not representable.
    fn checked_div(&self, other: &Self, rounding: Rounding) -> Result<Self, AmmError>;

    /// Raises `self` to a real-valued power.
    ///
    /// Used by the weighted model where the exponent is a weight ratio.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NumericDomain`] if `self` is not strictly
    /// positive, and [`AmmError::Overflow`] if the result is not
    /// representable.
    fn checked_pow(&self, exponent: &Self) -> Result<Self, AmmError>;

    // -- Predicates ---------------------------------------------------------

    /// Returns `true` if the value is zero.
    #[must_use]
    fn is_zero(&self) -> bool;

    /// Returns `true` if the value is strictly greater than zero.
    #[must_use]
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }

    /// Returns `true` if the value is zero or greater.
    #[must_use]
    fn is_non_negative(&self) -> bool {
        *self >= Self::zero()
    }
}
