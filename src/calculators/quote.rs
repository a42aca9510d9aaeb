//! Fee-free, impact-free equivalent amount at the current spot ratio.
//!
//! Quotes are for display and estimation only; they are not executable
//! trade amounts.
//!
//! ```text
//! constant product: amount_a × reserve_b / reserve_a
//! weighted:         amount_a × (reserve_b × 10 000 / weight_b)
//!                            / (reserve_a × 10 000 / weight_a)
//! ```
//!
//! The spot ratio is formed first and then scaled by `amount_a`, which
//! keeps the quote linear in `amount_a` and returns `amount_a` unchanged
//! when both sides are identical.

use tracing::trace;

use crate::domain::Rounding;
use crate::error::Result;
use crate::math::guards::{bps_scale, ensure_non_negative, ensure_positive};
use crate::math::Precision;

/// Computes spot-ratio quotes.
///
/// # Examples
///
/// ```
/// use amm_pricing::calculators::QuoteCalculator;
/// use amm_pricing::math::FloatArithmetic as F;
///
/// let b = QuoteCalculator::constant_product(
///     F::new(10_000.0),
///     F::new(100_000_000.0),
///     F::new(400_000_000.0),
/// )
/// .expect("positive reserves");
/// assert_eq!(b.get(), 40_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QuoteCalculator;

impl QuoteCalculator {
    /// Constant-product quote: `amount_a × reserve_b / reserve_a`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`](crate::error::AmmError::InvalidInput)
    ///   if `amount_a` is negative or a reserve is not positive.
    /// - [`AmmError::Overflow`](crate::error::AmmError::Overflow) if the
    ///   product overflows.
    pub fn constant_product<P: Precision>(amount_a: P, reserve_a: P, reserve_b: P) -> Result<P> {
        ensure_non_negative(amount_a, "amount_a must be non-negative")?;
        ensure_positive(reserve_a, "reserve_a must be positive")?;
        ensure_positive(reserve_b, "reserve_b must be positive")?;

        let spot = reserve_b.checked_div(&reserve_a, Rounding::for_output())?;
        let amount_b = amount_a.checked_mul(&spot)?;

        trace!(?amount_a, ?amount_b, "constant-product quote");
        Ok(amount_b)
    }

    /// Weighted quote: each reserve is normalised by its weight before the
    /// ratio is taken.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`](crate::error::AmmError::InvalidInput)
    ///   if `amount_a` is negative or a reserve or weight is not positive.
    /// - [`AmmError::Overflow`](crate::error::AmmError::Overflow) if an
    ///   intermediate overflows.
    pub fn weighted_bancor<P: Precision>(
        amount_a: P,
        reserve_a: P,
        weight_a: P,
        reserve_b: P,
        weight_b: P,
    ) -> Result<P> {
        ensure_non_negative(amount_a, "amount_a must be non-negative")?;
        ensure_positive(reserve_a, "reserve_a must be positive")?;
        ensure_positive(weight_a, "weight_a must be positive")?;
        ensure_positive(reserve_b, "reserve_b must be positive")?;
        ensure_positive(weight_b, "weight_b must be positive")?;

        let scale: P = bps_scale();
        let normalised_a = reserve_a
            .checked_mul(&scale)?
            .checked_div(&weight_a, Rounding::for_output())?;
        let normalised_b = reserve_b
            .checked_mul(&scale)?
            .checked_div(&weight_b, Rounding::for_output())?;
        let spot = normalised_b.checked_div(&normalised_a, Rounding::for_output())?;
        let amount_b = amount_a.checked_mul(&spot)?;

        trace!(?amount_a, ?amount_b, "weighted quote");
        Ok(amount_b)
    }
}
