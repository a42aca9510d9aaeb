//! Shared numeric helpers used by every calculator.
//!
//! Input validation lives here so that each formula rejects bad arguments
//! the same way, before any arithmetic runs.

use tracing::debug;

use super::Precision;
use crate::domain::{FeeRate, Rounding};
use crate::error::{AmmError, Result};

/// Basis-point denominator (10 000 = 100%).
pub(crate) const BPS_DENOMINATOR: u32 = 10_000;

/// The basis-point scale `10_000` in the target precision.
#[inline]
pub(crate) fn bps_scale<P: Precision>() -> P {
    P::from_u128(u128::from(BPS_DENOMINATOR))
}

/// `10_000 - fee_bps` in the target precision.
#[inline]
pub(crate) fn fee_complement<P: Precision>(fee: FeeRate) -> P {
    P::from_u128(u128::from(fee.complement().get()))
}

/// Rejects zero, negative and `NaN` values.
pub(crate) fn ensure_positive<P: Precision>(value: P, what: &'static str) -> Result<()> {
    if value.is_positive() {
        Ok(())
    } else {
        debug!(?value, what, "rejected non-positive input");
        Err(AmmError::InvalidInput(what))
    }
}

/// Rejects negative and `NaN` values.
pub(crate) fn ensure_non_negative<P: Precision>(value: P, what: &'static str) -> Result<()> {
    if value.is_non_negative() {
        Ok(())
    } else {
        debug!(?value, what, "rejected negative input");
        Err(AmmError::InvalidInput(what))
    }
}

/// `weight_in / weight_out`, after checking both weights are positive.
pub(crate) fn weight_ratio<P: Precision>(weight_in: P, weight_out: P) -> Result<P> {
    ensure_positive(weight_in, "weight_in must be positive")?;
    ensure_positive(weight_out, "weight_out must be positive")?;
    weight_in.checked_div(&weight_out, Rounding::Down)
}

/// `1 + reserve_in × amount_out × 10 000 / denominator`, rounded up.
///
/// `denominator` is `(reserve_out − amount_out) × (10 000 − fee_bps)`,
/// further scaled by the weight ratio for weighted pools.
pub(crate) fn biased_input<P: Precision>(
    amount_out: P,
    reserve_in: P,
    denominator: P,
) -> Result<P> {
    let numerator = reserve_in
        .checked_mul(&amount_out)?
        .checked_mul(&bps_scale())?;
    numerator
        .checked_div(&denominator, Rounding::for_input())?
        .checked_add(&P::one())
}

#[cfg(all(test, feature = "float"))]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::math::FloatArithmetic;

    type F = FloatArithmetic;

    #[test]
    fn scale_is_ten_thousand() {
        assert!((bps_scale::<F>().get() - 10_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn complement_of_thirty_bps() {
        let Ok(fee) = FeeRate::from_bps(30) else {
            panic!("valid fee");
        };
        assert!((fee_complement::<F>(fee).get() - 9_970.0).abs() < f64::EPSILON);
    }

    #[test]
    fn positive_check() {
        assert!(ensure_positive(F::new(1.0), "x").is_ok());
        assert_eq!(
            ensure_positive(F::zero(), "reserve_in must be positive"),
            Err(AmmError::InvalidInput("reserve_in must be positive"))
        );
        assert!(ensure_positive(F::new(f64::NAN), "x").is_err());
    }

    #[test]
    fn non_negative_check() {
        assert!(ensure_non_negative(F::zero(), "x").is_ok());
        assert!(ensure_non_negative(F::new(-1.0), "x").is_err());
    }

    #[test]
    fn ratio_of_weights() {
        let Ok(r) = weight_ratio(F::new(400_000.0), F::new(600_000.0)) else {
            panic!("expected Ok");
        };
        assert!((r.get() - 2.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn ratio_rejects_zero_weight() {
        assert_eq!(
            weight_ratio(F::new(1.0), F::zero()),
            Err(AmmError::InvalidInput("weight_out must be positive"))
        );
    }
}
