//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use amm_pricing::prelude::*;
//!
//! let pool = PoolConfig::constant_product(
//!     FloatArithmetic::new(1_000.0),
//!     FloatArithmetic::new(2_000.0),
//!     FeeRate::ZERO,
//! )
//! .expect("valid pool");
//! assert_eq!(pool.spot_price(), Ok(FloatArithmetic::new(2.0)));
//! ```

pub use crate::calculators::{AmountInCalculator, AmountOutCalculator, QuoteCalculator};
pub use crate::config::PoolConfig;
pub use crate::domain::{
    Amount, BasisPoints, FeeRate, PoolModel, Rounding, TradeKind, TradeQuote, TradeRequest,
};
pub use crate::error::{AmmError, Result};
pub use crate::math::{settle, Precision};
pub use crate::traits::PricingCurve;

#[cfg(feature = "fixed-point")]
pub use crate::math::FixedPointArithmetic;
#[cfg(feature = "float")]
pub use crate::math::FloatArithmetic;
