//! Tagged pool model dispatching to the calculators.

use core::fmt;

use super::FeeRate;
use crate::calculators::{AmountInCalculator, AmountOutCalculator, QuoteCalculator};
use crate::error::Result;
use crate::math::guards::{ensure_positive, weight_ratio};
use crate::math::Precision;

/// The invariant family a pool prices with.
///
/// Weights are stored from the perspective of one trade direction:
/// `weight_in` belongs to the side being sold.  [`reversed`](Self::reversed)
/// flips the perspective.
///
/// # Examples
///
/// ```
/// use amm_pricing::domain::{FeeRate, PoolModel};
/// use amm_pricing::math::FloatArithmetic as F;
///
/// let model = PoolModel::weighted_bancor(F::new(400_000.0), F::new(600_000.0))
///     .expect("positive weights");
/// let out = model
///     .amount_out(F::new(10_000.0), F::new(1e8), F::new(4e8), FeeRate::TIER_0_30_PERCENT)
///     .expect("valid inputs");
/// assert!(out.get() > 26_584.0 && out.get() < 26_585.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoolModel<P> {
    /// Uniswap-style `x · y = k`.
    ConstantProduct,
    /// Bancor-style weighted reserves.
    WeightedBancor {
        /// Weight of the input side.
        weight_in: P,
        /// Weight of the output side.
        weight_out: P,
    },
}

impl<P: Precision> PoolModel<P> {
    /// Creates a validated weighted model.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`](crate::error::AmmError::InvalidInput)
    /// if either weight is not positive.
    pub fn weighted_bancor(weight_in: P, weight_out: P) -> Result<Self> {
        let model = Self::WeightedBancor {
            weight_in,
            weight_out,
        };
        model.validate()?;
        Ok(model)
    }

    /// Checks the weights of a weighted model.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`](crate::error::AmmError::InvalidInput)
    /// if either weight is not positive.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::ConstantProduct => Ok(()),
            Self::WeightedBancor {
                weight_in,
                weight_out,
            } => {
                ensure_positive(*weight_in, "weight_in must be positive")?;
                ensure_positive(*weight_out, "weight_out must be positive")
            }
        }
    }

    /// Returns `true` for [`ConstantProduct`](Self::ConstantProduct).
    #[must_use]
    pub const fn is_constant_product(&self) -> bool {
        matches!(self, Self::ConstantProduct)
    }

    /// Returns `true` for [`WeightedBancor`](Self::WeightedBancor).
    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        matches!(self, Self::WeightedBancor { .. })
    }

    /// `weight_in / weight_out`; exactly one for the constant-product model.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`](crate::error::AmmError::InvalidInput)
    /// if a weight is not positive.
    pub fn weight_ratio(&self) -> Result<P> {
        match self {
            Self::ConstantProduct => Ok(P::one()),
            Self::WeightedBancor {
                weight_in,
                weight_out,
            } => weight_ratio(*weight_in, *weight_out),
        }
    }

    /// The same model seen from the opposite trade direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match *self {
            Self::ConstantProduct => Self::ConstantProduct,
            Self::WeightedBancor {
                weight_in,
                weight_out,
            } => Self::WeightedBancor {
                weight_in: weight_out,
                weight_out: weight_in,
            },
        }
    }

    /// Output amount for `amount_in`.
    ///
    /// # Errors
    ///
    /// See [`AmountOutCalculator`].
    pub fn amount_out(
        &self,
        amount_in: P,
        reserve_in: P,
        reserve_out: P,
        fee: FeeRate,
    ) -> Result<P> {
        match *self {
            Self::ConstantProduct => {
                AmountOutCalculator::constant_product(amount_in, reserve_in, reserve_out, fee)
            }
            Self::WeightedBancor {
                weight_in,
                weight_out,
            } => AmountOutCalculator::weighted_bancor(
                amount_in,
                reserve_in,
                weight_in,
                reserve_out,
                weight_out,
                fee,
            ),
        }
    }

    /// Input amount required for `amount_out`.
    ///
    /// # Errors
    ///
    /// See [`AmountInCalculator`].
    pub fn amount_in(
        &self,
        amount_out: P,
        reserve_in: P,
        reserve_out: P,
        fee: FeeRate,
    ) -> Result<P> {
        match *self {
            Self::ConstantProduct => {
                AmountInCalculator::constant_product(amount_out, reserve_in, reserve_out, fee)
            }
            Self::WeightedBancor {
                weight_in,
                weight_out,
            } => AmountInCalculator::weighted_bancor(
                amount_out,
                reserve_in,
                weight_in,
                reserve_out,
                weight_out,
                fee,
            ),
        }
    }

    /// Fee-free quote of `amount` input-side units in output-side units.
    ///
    /// # Errors
    ///
    /// See [`QuoteCalculator`].
    pub fn quote(&self, amount: P, reserve_in: P, reserve_out: P) -> Result<P> {
        match *self {
            Self::ConstantProduct => {
                QuoteCalculator::constant_product(amount, reserve_in, reserve_out)
            }
            Self::WeightedBancor {
                weight_in,
                weight_out,
            } => QuoteCalculator::weighted_bancor(
                amount,
                reserve_in,
                weight_in,
                reserve_out,
                weight_out,
            ),
        }
    }
}

impl<P> fmt::Display for PoolModel<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantProduct => write!(f, "ConstantProduct"),
            Self::WeightedBancor { .. } => write!(f, "WeightedBancor"),
        }
    }
}
