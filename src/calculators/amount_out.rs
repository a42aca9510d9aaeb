//! Output amount obtainable for a given input amount.
//!
//! # Constant product
//!
//! ```text
//! net        = amount_in × (10 000 − fee_bps)
//! amount_out = net × reserve_out / (reserve_in × 10 000 + net)
//! ```
//!
//! # Weighted (Bancor)
//!
//! ```text
//! weight_ratio = weight_in / weight_out
//! net          = amount_in × (10 000 − fee_bps)
//! ratio        = reserve_in × 10 000 / (reserve_in × 10 000 + net)
//! amount_out   = reserve_out × (1 − ratio ^ weight_ratio)
//! ```
//!
//! Both results lie in `[0, reserve_out)`; equal weights make the second
//! formula collapse to the first.

use tracing::{debug, trace};

use crate::domain::{FeeRate, Rounding};
use crate::error::{AmmError, Result};
use crate::math::guards::{
    biased_input, bps_scale, ensure_non_negative, ensure_positive, fee_complement, weight_ratio,
};
use crate::math::Precision;

/// Computes the output amount for an exact input.
///
/// # Examples
///
/// ```
/// use amm_pricing::calculators::AmountOutCalculator;
/// use amm_pricing::domain::FeeRate;
/// use amm_pricing::math::FloatArithmetic as F;
///
/// let out = AmountOutCalculator::constant_product(
///     F::new(10_000.0),
///     F::new(100_000_000.0),
///     F::new(400_000_000.0),
///     FeeRate::TIER_0_30_PERCENT,
/// )
/// .expect("valid pool");
/// assert_eq!(out.get().floor(), 39_876.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AmountOutCalculator;

impl AmountOutCalculator {
    /// Constant-product (Uniswap V2) output amount.
    ///
    /// Returns zero when `amount_in` is zero.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] if `amount_in` is negative or a reserve
    ///   is not positive.
    /// - [`AmmError::Overflow`] if an intermediate product overflows.
    /// - [`AmmError::NumericDomain`] if precision loss pushes the result up
    ///   to `reserve_out`, or leaves `reserve_out - amount_out` too coarse
    ///   for [`AmountInCalculator::constant_product`] to charge at least
    ///   `amount_in` for the result.  With `f64` this starts once `amount_in`
    ///   exceeds a few thousand times `reserve_in`.
    ///
    /// [`AmountInCalculator::constant_product`]: super::AmountInCalculator::constant_product
    pub fn constant_product<P: Precision>(
        amount_in: P,
        reserve_in: P,
        reserve_out: P,
        fee: FeeRate,
    ) -> Result<P> {
        ensure_non_negative(amount_in, "amount_in must be non-negative")?;
        ensure_positive(reserve_in, "reserve_in must be positive")?;
        ensure_positive(reserve_out, "reserve_out must be positive")?;

        let net = amount_in.checked_mul(&fee_complement(fee))?;
        let numerator = net.checked_mul(&reserve_out)?;
        let denominator = reserve_in.checked_mul(&bps_scale())?.checked_add(&net)?;
        let amount_out = numerator.checked_div(&denominator, Rounding::for_output())?;

        ensure_below_reserve(amount_out, reserve_out)?;
        ensure_invertible(amount_in, amount_out, reserve_in, reserve_out, fee)?;
        trace!(?amount_in, ?amount_out, %fee, "constant-product amount out");
        Ok(amount_out)
    }

    /// Weighted (Bancor) output amount.
    ///
    /// The power step uses real-valued exponentiation; with
    /// `weight_in == weight_out` the result equals
    /// [`constant_product`](Self::constant_product) up to rounding.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] if `amount_in` is negative or a reserve
    ///   or weight is not positive.
    /// - [`AmmError::Overflow`] if an intermediate overflows.
    /// - [`AmmError::NumericDomain`] if the power base leaves `(0, 1]` or the
    ///   result reaches `reserve_out`.
    pub fn weighted_bancor<P: Precision>(
        amount_in: P,
        reserve_in: P,
        weight_in: P,
        reserve_out: P,
        weight_out: P,
        fee: FeeRate,
    ) -> Result<P> {
        ensure_non_negative(amount_in, "amount_in must be non-negative")?;
        ensure_positive(reserve_in, "reserve_in must be positive")?;
        ensure_positive(reserve_out, "reserve_out must be positive")?;
        let exponent = weight_ratio(weight_in, weight_out)?;

        let net = amount_in.checked_mul(&fee_complement(fee))?;
        let scaled_reserve = reserve_in.checked_mul(&bps_scale())?;
        // Rounding the base up keeps more of reserve_out in the pool.
        let ratio =
            scaled_reserve.checked_div(&scaled_reserve.checked_add(&net)?, Rounding::Up)?;
        let retained = ratio.checked_pow(&exponent)?;
        if retained > P::one() {
            debug!(?ratio, ?retained, "weighted power left the unit interval");
            return Err(AmmError::NumericDomain("weighted power exceeded one"));
        }

        let amount_out = reserve_out.checked_mul(&P::one().checked_sub(&retained)?)?;

        ensure_below_reserve(amount_out, reserve_out)?;
        trace!(?amount_in, ?amount_out, ?exponent, %fee, "weighted amount out");
        Ok(amount_out)
    }
}

fn ensure_below_reserve<P: Precision>(amount_out: P, reserve_out: P) -> Result<()> {
    if amount_out < reserve_out {
        return Ok(());
    }
    debug!(?amount_out, ?reserve_out, "output not below reserve after rounding");
    Err(AmmError::NumericDomain(
        "precision exhausted: output reached reserve_out",
    ))
}

/// Prices `amount_out` back the way the required-input formula does and
/// rejects results it would sell for less than `amount_in`.
fn ensure_invertible<P: Precision>(
    amount_in: P,
    amount_out: P,
    reserve_in: P,
    reserve_out: P,
    fee: FeeRate,
) -> Result<()> {
    if amount_out.is_zero() {
        return Ok(());
    }
    let denominator = reserve_out
        .checked_sub(&amount_out)?
        .checked_mul(&fee_complement(fee))?;
    let charged = biased_input(amount_out, reserve_in, denominator)?;
    if charged >= amount_in {
        return Ok(());
    }
    debug!(?amount_in, ?amount_out, ?charged, "output too close to reserve to price back");
    Err(AmmError::NumericDomain(
        "precision exhausted: output cannot be priced back to its input",
    ))
}
