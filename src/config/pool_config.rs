//! Validated pricing context for one trade direction.

use core::fmt;

use crate::domain::{FeeRate, PoolModel, TradeQuote, TradeRequest};
use crate::error::{AmmError, Result};
use crate::math::guards::ensure_positive;
use crate::math::Precision;
use crate::traits::PricingCurve;

/// Reserves, weights and fee of a pool, seen from the side being sold.
///
/// # Validation
///
/// - Both reserves must be strictly positive.
/// - Weighted models must carry strictly positive weights.
/// - The fee is a [`FeeRate`], so it is already within `0..=10_000` bp.
///
/// A `PoolConfig` that exists is valid; every [`PricingCurve`] call on it
/// only has to check the trade amount.
///
/// # Examples
///
/// ```
/// use amm_pricing::config::PoolConfig;
/// use amm_pricing::domain::{FeeRate, TradeRequest};
/// use amm_pricing::math::FloatArithmetic as F;
/// use amm_pricing::traits::PricingCurve;
///
/// let pool = PoolConfig::constant_product(
///     F::new(100_000_000.0),
///     F::new(400_000_000.0),
///     FeeRate::TIER_0_30_PERCENT,
/// )
/// .expect("valid pool");
///
/// let quote = pool
///     .evaluate(TradeRequest::exact_in(F::new(10_000.0)).expect("non-negative"))
///     .expect("priced");
/// assert_eq!(quote.amount_out().get().floor(), 39_876.0);
/// assert_eq!(pool.quote(F::new(10_000.0)).expect("quoted").get(), 40_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolConfig<P> {
    model: PoolModel<P>,
    reserve_in: P,
    reserve_out: P,
    fee: FeeRate,
}

impl<P: Precision> PoolConfig<P> {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if a reserve or weight is not
    /// positive.
    pub fn new(model: PoolModel<P>, reserve_in: P, reserve_out: P, fee: FeeRate) -> Result<Self> {
        let config = Self {
            model,
            reserve_in,
            reserve_out,
            fee,
        };
        config.validate()?;
        Ok(config)
    }

    /// Shorthand for a constant-product pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if a reserve is not positive.
    pub fn constant_product(reserve_in: P, reserve_out: P, fee: FeeRate) -> Result<Self> {
        Self::new(PoolModel::ConstantProduct, reserve_in, reserve_out, fee)
    }

    /// Shorthand for a weighted pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if a reserve or weight is not
    /// positive.
    pub fn weighted_bancor(
        reserve_in: P,
        weight_in: P,
        reserve_out: P,
        weight_out: P,
        fee: FeeRate,
    ) -> Result<Self> {
        Self::new(
            PoolModel::weighted_bancor(weight_in, weight_out)?,
            reserve_in,
            reserve_out,
            fee,
        )
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if a reserve or weight is not
    /// positive.
    pub fn validate(&self) -> Result<()> {
        ensure_positive(self.reserve_in, "reserve_in must be positive")?;
        ensure_positive(self.reserve_out, "reserve_out must be positive")?;
        self.model.validate()
    }

    /// Returns the pool model.
    #[must_use]
    pub const fn model(&self) -> &PoolModel<P> {
        &self.model
    }

    /// Returns the reserve of the side being sold.
    #[must_use]
    pub fn reserve_in(&self) -> P {
        self.reserve_in
    }

    /// Returns the reserve of the side being bought.
    #[must_use]
    pub fn reserve_out(&self) -> P {
        self.reserve_out
    }

    /// The same pool priced in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            model: self.model.reversed(),
            reserve_in: self.reserve_out,
            reserve_out: self.reserve_in,
            fee: self.fee,
        }
    }

    /// Prices a [`TradeRequest`] and reports the fee taken from the input.
    ///
    /// # Errors
    ///
    /// Propagates calculator errors; see [`PricingCurve::amount_out`] and
    /// [`PricingCurve::amount_in`].
    pub fn evaluate(&self, request: TradeRequest<P>) -> Result<TradeQuote<P>> {
        let (amount_in, amount_out) = match request {
            TradeRequest::ExactIn { amount_in } => (amount_in, self.amount_out(amount_in)?),
            TradeRequest::ExactOut { amount_out } => (self.amount_in(amount_out)?, amount_out),
        };
        let fee = self.fee.apply_to(amount_in)?;
        TradeQuote::new(amount_in, amount_out, fee)
    }
}

impl<P: Precision> PricingCurve<P> for PoolConfig<P> {
    fn amount_out(&self, amount_in: P) -> Result<P> {
        self.model
            .amount_out(amount_in, self.reserve_in, self.reserve_out, self.fee)
    }

    fn amount_in(&self, amount_out: P) -> Result<P> {
        self.model
            .amount_in(amount_out, self.reserve_in, self.reserve_out, self.fee)
    }

    fn quote(&self, amount: P) -> Result<P> {
        self.model.quote(amount, self.reserve_in, self.reserve_out)
    }

    fn spot_price(&self) -> Result<P> {
        self.quote(P::one())
    }

    fn fee_rate(&self) -> FeeRate {
        self.fee
    }
}

impl<P> fmt::Display for PoolConfig<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pool, fee {}", self.model, self.fee)
    }
}

impl<P: Precision> TryFrom<(PoolModel<P>, P, P, FeeRate)> for PoolConfig<P> {
    type Error = AmmError;

    fn try_from(parts: (PoolModel<P>, P, P, FeeRate)) -> Result<Self> {
        let (model, reserve_in, reserve_out, fee) = parts;
        Self::new(model, reserve_in, reserve_out, fee)
    }
}
