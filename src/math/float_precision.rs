//! Floating-point implementation of the [`Precision`] trait.
//!
//! Only available with the `float` Cargo feature (enabled by default).
//! [`FloatArithmetic`] is a newtype over `f64` and reproduces the
//! reference formulas exactly as they are written in real-valued
//! arithmetic.
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Significant digits | ~15–17 |
//! | Range | ±2^1024 |
//! | Determinism | Subject to IEEE 754 rounding |
//! | `powf` | native |

use core::fmt;

use crate::domain::Rounding;
use crate::error::AmmError;

use super::Precision;

/// IEEE 754 `f64`-backed precision type.
///
/// Every checked method returns [`Err`] when the result is non-finite
/// (`NaN` or `±∞`).
///
/// # Examples
///
/// ```
/// use amm_pricing::math::{FloatArithmetic, Precision};
///
/// let base = FloatArithmetic::new(0.25);
/// let half = FloatArithmetic::new(0.5);
/// let root = base.checked_pow(&half).expect("positive base");
/// assert!((root.get() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FloatArithmetic(f64);

impl FloatArithmetic {
    /// Creates a new `FloatArithmetic` from a raw `f64`.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying `f64` value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    #[inline]
    fn finite(value: f64, err: AmmError) -> Result<Self, AmmError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(err)
        }
    }
}

impl From<f64> for FloatArithmetic {
    #[inline]
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<u32> for FloatArithmetic {
    #[inline]
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for FloatArithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Precision for FloatArithmetic {
    #[inline]
    fn zero() -> Self {
        Self(0.0)
    }

    #[inline]
    fn one() -> Self {
        Self(1.0)
    }

    /// Values above 2^53 lose precision (53-bit mantissa).
    #[inline]
    fn from_u128(value: u128) -> Self {
        #[allow(clippy::cast_precision_loss)]
        Self(value as f64)
    }

    /// Truncates toward zero. Negative values and `NaN` produce `0`,
    /// values above `u128::MAX` saturate.
    #[inline]
    fn to_u128(&self) -> u128 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = self.0 as u128;
        v
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    fn to_f64_lossy(&self) -> f64 {
        self.0
    }

    fn checked_add(&self, other: &Self) -> Result<Self, AmmError> {
        Self::finite(self.0 + other.0, AmmError::Overflow("float addition overflow"))
    }

    fn checked_sub(&self, other: &Self) -> Result<Self, AmmError> {
        Self::finite(
            self.0 - other.0,
            AmmError::Underflow("float subtraction underflow"),
        )
    }

    fn checked_mul(&self, other: &Self) -> Result<Self, AmmError> {
        Self::finite(
            self.0 * other.0,
            AmmError::Overflow("float multiplication overflow"),
        )
    }

    /// `f64` division always rounds to nearest-even; `_rounding` is
    /// accepted for API parity with the fixed-point backend.
    fn checked_div(&self, other: &Self, _rounding: Rounding) -> Result<Self, AmmError> {
        if other.0 == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        Self::finite(self.0 / other.0, AmmError::Overflow("float division overflow"))
    }

    fn checked_pow(&self, exponent: &Self) -> Result<Self, AmmError> {
        if self.0.is_nan() || self.0 <= 0.0 {
            return Err(AmmError::NumericDomain("power base must be positive"));
        }
        Self::finite(
            self.0.powf(exponent.0),
            AmmError::Overflow("float power overflow"),
        )
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}
