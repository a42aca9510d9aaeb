//! What the caller wants to trade.

use core::fmt;

use crate::error::{AmmError, Result};
use crate::math::Precision;

/// Which side of a trade is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TradeKind {
    /// The input amount is fixed; output is computed.
    ExactIn = 0,
    /// The output amount is fixed; input is computed.
    ExactOut = 1,
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn => write!(f, "ExactIn"),
            Self::ExactOut => write!(f, "ExactOut"),
        }
    }
}

/// A trade to price: either an exact input or an exact output.
///
/// The amount is non-negative; the reserve, weight and fee context comes
/// from the [`PoolConfig`](crate::config::PoolConfig) the request is
/// evaluated against.
///
/// # Examples
///
/// ```
/// use amm_pricing::domain::{TradeKind, TradeRequest};
/// use amm_pricing::math::FloatArithmetic as F;
///
/// let request = TradeRequest::exact_in(F::new(10_000.0)).expect("non-negative");
/// assert_eq!(request.kind(), TradeKind::ExactIn);
/// assert!(TradeRequest::exact_out(F::new(-1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeRequest<P> {
    /// Sell exactly `amount_in`.
    ExactIn {
        /// The fixed input amount.
        amount_in: P,
    },
    /// Buy exactly `amount_out`.
    ExactOut {
        /// The desired output amount.
        amount_out: P,
    },
}

impl<P: Precision> TradeRequest<P> {
    /// Creates an exact-input request.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if `amount` is negative or `NaN`.
    pub fn exact_in(amount: P) -> Result<Self> {
        if !amount.is_non_negative() {
            return Err(AmmError::InvalidInput("amount_in must be non-negative"));
        }
        Ok(Self::ExactIn { amount_in: amount })
    }

    /// Creates an exact-output request.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if `amount` is negative or `NaN`.
    pub fn exact_out(amount: P) -> Result<Self> {
        if !amount.is_non_negative() {
            return Err(AmmError::InvalidInput("amount_out must be non-negative"));
        }
        Ok(Self::ExactOut { amount_out: amount })
    }

    /// Returns the fixed amount regardless of direction.
    #[must_use]
    pub fn amount(&self) -> P {
        match *self {
            Self::ExactIn { amount_in } => amount_in,
            Self::ExactOut { amount_out } => amount_out,
        }
    }

    /// Returns which side is fixed.
    #[must_use]
    pub const fn kind(&self) -> TradeKind {
        match self {
            Self::ExactIn { .. } => TradeKind::ExactIn,
            Self::ExactOut { .. } => TradeKind::ExactOut,
        }
    }
}

impl<P: fmt::Display> fmt::Display for TradeRequest<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn { amount_in } => write!(f, "ExactIn({amount_in})"),
            Self::ExactOut { amount_out } => write!(f, "ExactOut({amount_out})"),
        }
    }
}
