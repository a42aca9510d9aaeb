//! Input amount required to extract a given output amount.
//!
//! # Constant product
//!
//! ```text
//! amount_in = 1 + reserve_in × amount_out × 10 000
//!                 / ((reserve_out − amount_out) × (10 000 − fee_bps))
//! ```
//!
//! # Weighted (Bancor)
//!
//! ```text
//! amount_in = 1 + reserve_in × amount_out × 10 000
//!                 / ((reserve_out − amount_out) × (10 000 − fee_bps)
//!                    × weight_in / weight_out)
//! ```
//!
//! The leading `1 +` is a ceiling bias: feeding the result back into
//! [`AmountOutCalculator`](super::AmountOutCalculator) never under-delivers
//! `amount_out` once real trades truncate to whole units.  It must stay.
//!
//! The weighted variant is an algebraic approximation, not the exact
//! inverse of the weighted output formula.  Its round-trip error is
//! measured, not bounded; with reserves 1e8/4e8, weights 400 000/600 000
//! and a 30 bp fee, 10 000 in → 26 584.46 out → 10 000.83 in.

use tracing::{debug, trace};

use crate::domain::FeeRate;
use crate::error::{AmmError, Result};
use crate::math::guards::{
    biased_input, ensure_non_negative, ensure_positive, fee_complement, weight_ratio,
};
use crate::math::Precision;

/// Computes the input amount for an exact output.
///
/// # Examples
///
/// ```
/// use amm_pricing::calculators::AmountInCalculator;
/// use amm_pricing::domain::FeeRate;
/// use amm_pricing::math::FloatArithmetic as F;
///
/// let needed = AmountInCalculator::constant_product(
///     F::new(39_876.0),
///     F::new(100_000_000.0),
///     F::new(400_000_000.0),
///     FeeRate::TIER_0_30_PERCENT,
/// )
/// .expect("amount below reserve");
/// assert!((needed.get() - 10_000.0).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AmountInCalculator;

impl AmountInCalculator {
    /// Constant-product (Uniswap V2) required input.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] if `amount_out` is negative or a reserve
    ///   is not positive.
    /// - [`AmmError::AmountExceedsReserve`] if `amount_out >= reserve_out`.
    /// - [`AmmError::DivisionByZero`] for a 100% fee.
    /// - [`AmmError::Overflow`] if an intermediate product overflows.
    pub fn constant_product<P: Precision>(
        amount_out: P,
        reserve_in: P,
        reserve_out: P,
        fee: FeeRate,
    ) -> Result<P> {
        let remaining = validate(amount_out, reserve_in, reserve_out)?;
        let denominator = remaining.checked_mul(&fee_complement(fee))?;
        let amount_in = biased_input(amount_out, reserve_in, denominator)?;

        trace!(?amount_out, ?amount_in, %fee, "constant-product amount in");
        Ok(amount_in)
    }

    /// Weighted (Bancor) required input.
    ///
    /// With `weight_in == weight_out` this equals
    /// [`constant_product`](Self::constant_product).
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] if `amount_out` is negative or a reserve
    ///   or weight is not positive.
    /// - [`AmmError::AmountExceedsReserve`] if `amount_out >= reserve_out`.
    /// - [`AmmError::DivisionByZero`] for a 100% fee.
    /// - [`AmmError::Overflow`] if an intermediate overflows.
    pub fn weighted_bancor<P: Precision>(
        amount_out: P,
        reserve_in: P,
        weight_in: P,
        reserve_out: P,
        weight_out: P,
        fee: FeeRate,
    ) -> Result<P> {
        let ratio = weight_ratio(weight_in, weight_out)?;
        let remaining = validate(amount_out, reserve_in, reserve_out)?;
        let denominator = remaining
            .checked_mul(&fee_complement(fee))?
            .checked_mul(&ratio)?;
        let amount_in = biased_input(amount_out, reserve_in, denominator)?;

        trace!(?amount_out, ?amount_in, ?ratio, %fee, "weighted amount in");
        Ok(amount_in)
    }
}

/// Checks arguments and returns `reserve_out - amount_out`.
fn validate<P: Precision>(amount_out: P, reserve_in: P, reserve_out: P) -> Result<P> {
    ensure_non_negative(amount_out, "amount_out must be non-negative")?;
    ensure_positive(reserve_in, "reserve_in must be positive")?;
    ensure_positive(reserve_out, "reserve_out must be positive")?;
    if amount_out >= reserve_out {
        debug!(?amount_out, ?reserve_out, "requested output exhausts the reserve");
        return Err(AmmError::AmountExceedsReserve);
    }
    reserve_out.checked_sub(&amount_out)
}
