//! Core pricing trait.
//!
//! [`PricingCurve`] is the single interface callers price through,
//! whatever the pool family:
//!
//! 1. **Sell**: [`PricingCurve::amount_out`] for an exact input.
//! 2. **Buy**: [`PricingCurve::amount_in`] for an exact output.
//! 3. **Quote**: [`PricingCurve::quote`] and [`PricingCurve::spot_price`]
//!    for fee-free estimates.
//! 4. **Inspect fees**: [`PricingCurve::fee_rate`].
//!
//! # Fee Deduction Invariant
//!
//! Fees are deducted from the input **before** the curve is applied:
//!
//! ```text
//! net_input  = amount_in × (10 000 − fee_bps) / 10 000
//! amount_out = curve(net_input)
//! ```

use crate::domain::FeeRate;
use crate::error::Result;
use crate::math::Precision;

/// Prices trades against one direction of a pool.
///
/// Implementations are pure: no method mutates state, so a value can be
/// shared across threads and priced concurrently.
///
/// # Implementors
///
/// - [`PoolConfig`](crate::config::PoolConfig)
pub trait PricingCurve<P: Precision> {
    /// Output amount for an exact `amount_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`](crate::error::AmmError::InvalidInput)
    ///   if `amount_in` is negative.
    /// - [`AmmError::Overflow`](crate::error::AmmError::Overflow) or
    ///   [`AmmError::NumericDomain`](crate::error::AmmError::NumericDomain)
    ///   from the numeric backend.
    fn amount_out(&self, amount_in: P) -> Result<P>;

    /// Input amount required for an exact `amount_out`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`](crate::error::AmmError::InvalidInput)
    ///   if `amount_out` is negative.
    /// - [`AmmError::AmountExceedsReserve`](crate::error::AmmError::AmountExceedsReserve)
    ///   if `amount_out` is not below the output reserve.
    /// - [`AmmError::DivisionByZero`](crate::error::AmmError::DivisionByZero)
    ///   for a 100% fee.
    fn amount_in(&self, amount_out: P) -> Result<P>;

    /// Fee-free equivalent of `amount` at the current spot ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInput`](crate::error::AmmError::InvalidInput)
    ///   if `amount` is negative.
    fn quote(&self, amount: P) -> Result<P>;

    /// Output units per input unit, without fee or impact.
    ///
    /// # Errors
    ///
    /// Same as [`quote`](Self::quote).
    fn spot_price(&self) -> Result<P>;

    /// Returns the fee applied to inputs.
    fn fee_rate(&self) -> FeeRate;
}
