//! Validated trading fee built on [`BasisPoints`].

use core::fmt;

use super::{BasisPoints, Rounding};
use crate::error::{AmmError, Result};
use crate::math::guards::bps_scale;
use crate::math::Precision;

/// The fraction of a trade retained by the pool, in basis points.
///
/// Unlike a bare [`BasisPoints`], a `FeeRate` is always within
/// `0..=10_000`: construction outside that range fails, so the formulas
/// never see an invalid fee.
///
/// # Examples
///
/// ```
/// use amm_pricing::domain::{BasisPoints, FeeRate};
///
/// let fee = FeeRate::from_bps(30).expect("in range");
/// assert_eq!(fee, FeeRate::TIER_0_30_PERCENT);
/// assert_eq!(fee.complement(), BasisPoints::new(9_970));
/// assert!(FeeRate::from_bps(10_001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeeRate(BasisPoints);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.01% fee (1 bp).
    pub const TIER_0_01_PERCENT: Self = Self(BasisPoints::new(1));

    /// 0.05% fee (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp), the Uniswap V2 rate.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a fee from [`BasisPoints`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if `basis_points` exceeds 10 000.
    pub const fn new(basis_points: BasisPoints) -> Result<Self> {
        if !basis_points.is_valid_percent() {
            return Err(AmmError::InvalidInput(
                "fee must not exceed 10000 basis points",
            ));
        }
        Ok(Self(basis_points))
    }

    /// Creates a fee from a raw basis-point count.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if `bps` exceeds 10 000.
    pub const fn from_bps(bps: u32) -> Result<Self> {
        Self::new(BasisPoints::new(bps))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `10_000 - fee`, the share of the input that reaches the curve.
    #[must_use]
    pub const fn complement(&self) -> BasisPoints {
        match self.0.complement() {
            Some(c) => c,
            None => BasisPoints::ZERO,
        }
    }

    /// Returns `true` for a 100% fee, where no input reaches the curve.
    #[must_use]
    pub const fn is_total(&self) -> bool {
        self.0.get() == BasisPoints::MAX_PERCENT.get()
    }

    /// Returns `true` if this fee matches one of the four standard presets.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        matches!(self.0.get(), 1 | 5 | 30 | 100)
    }

    /// The fee portion of `amount`: `amount * fee_bps / 10_000`, rounded up.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`] if `amount` is negative.
    /// - [`AmmError::Overflow`] if the product is not representable.
    pub fn apply_to<P: Precision>(&self, amount: P) -> Result<P> {
        if !amount.is_non_negative() {
            return Err(AmmError::InvalidInput("fee base amount must be non-negative"));
        }
        amount
            .checked_mul(&self.0.to_precision())?
            .checked_div(&bps_scale(), Rounding::Up)
    }
}

impl TryFrom<u32> for FeeRate {
    type Error = AmmError;

    fn try_from(bps: u32) -> Result<Self> {
        Self::from_bps(bps)
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeRate({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        assert_eq!(FeeRate::from_bps(0), Ok(FeeRate::ZERO));
        let Ok(total) = FeeRate::from_bps(10_000) else {
            panic!("100% is a valid fee");
        };
        assert!(total.is_total());
        assert_eq!(total.complement(), BasisPoints::ZERO);
    }

    #[test]
    fn rejects_above_hundred_percent() {
        assert!(matches!(
            FeeRate::from_bps(10_001),
            Err(AmmError::InvalidInput(_))
        ));
        assert!(FeeRate::try_from(u32::MAX).is_err());
    }

    #[test]
    fn presets_are_standard() {
        for tier in [
            FeeRate::TIER_0_01_PERCENT,
            FeeRate::TIER_0_05_PERCENT,
            FeeRate::TIER_0_30_PERCENT,
            FeeRate::TIER_1_00_PERCENT,
        ] {
            assert!(tier.is_standard());
        }
        assert!(!FeeRate::ZERO.is_standard());
    }

    #[test]
    fn complement_thirty() {
        assert_eq!(
            FeeRate::TIER_0_30_PERCENT.complement(),
            BasisPoints::new(9_970)
        );
    }

    #[cfg(feature = "float")]
    #[test]
    fn apply_to_amount() {
        use crate::math::FloatArithmetic;
        let Ok(fee) = FeeRate::TIER_0_30_PERCENT.apply_to(FloatArithmetic::new(10_000.0)) else {
            panic!("expected Ok");
        };
        assert!((fee.get() - 30.0).abs() < 1e-9);
    }

    #[cfg(feature = "float")]
    #[test]
    fn apply_to_negative_amount() {
        use crate::math::FloatArithmetic;
        assert!(FeeRate::TIER_0_30_PERCENT
            .apply_to(FloatArithmetic::new(-1.0))
            .is_err());
    }

    #[test]
    fn display() {
        assert_eq!(FeeRate::TIER_0_30_PERCENT.to_string(), "FeeRate(30bp)");
    }
}
