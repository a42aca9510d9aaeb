//! Settlement of real-valued results into raw integer token units.
//!
//! The formulas evaluate in real-valued arithmetic; a caller that has to
//! move whole token units picks a rounding direction with [`settle`].
//!
//! # Convention
//!
//! **Always round against the trader** (pool-favourable):
//!
//! | Quantity | Direction | Effect |
//! |----------|-----------|--------|
//! | Output amount | [`Rounding::Down`] | trader receives less |
//! | Input amount | [`Rounding::Up`] | trader pays more |
//! | Fee amount | [`Rounding::Up`] | pool keeps more |
//!
//! # Examples
//!
//! ```
//! use amm_pricing::domain::{Amount, Rounding};
//! use amm_pricing::math::{settle, FloatArithmetic};
//!
//! let out = FloatArithmetic::new(39_876.024);
//! assert_eq!(settle(out, Rounding::Down), Ok(Amount::new(39_876)));
//! assert_eq!(settle(out, Rounding::Up), Ok(Amount::new(39_877)));
//! ```

use tracing::debug;

use super::Precision;
use crate::domain::{Amount, Rounding};
use crate::error::{AmmError, Result};

/// 2^128, the first value that no longer fits in `u128`.
const U128_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Converts a real-valued amount into raw units with explicit rounding.
///
/// - [`Rounding::Down`]: truncate toward zero.
/// - [`Rounding::Up`]: smallest integer ≥ `value`.
///
/// # Errors
///
/// - [`AmmError::InvalidInput`] if `value` is negative or `NaN`.
/// - [`AmmError::Overflow`] if the value does not fit in `u128`, or the
///   ceiling step overflows.
pub fn settle<P: Precision>(value: P, rounding: Rounding) -> Result<Amount> {
    if !value.is_non_negative() {
        debug!(?value, "refusing to settle a negative or NaN amount");
        return Err(AmmError::InvalidInput("settled amount must be non-negative"));
    }
    let approx = value.to_f64_lossy();
    if !approx.is_finite() {
        return Err(AmmError::Overflow("settled amount is not finite"));
    }
    if approx >= U128_LIMIT {
        return Err(AmmError::Overflow("settled amount exceeds u128"));
    }

    let floor = value.to_u128();

    let settled = match rounding {
        Rounding::Down => floor,
        Rounding::Up if P::from_u128(floor) < value => floor
            .checked_add(1)
            .ok_or(AmmError::Overflow("settlement ceiling overflow"))?,
        Rounding::Up => floor,
    };
    Ok(Amount::new(settled))
}
