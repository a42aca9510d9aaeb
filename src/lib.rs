//! # AMM Pricing
//!
//! Pricing formulas for two automated-market-maker families:
//!
//! - **Constant Product** (Uniswap style, `x · y = k`)
//! - **Weighted** (Bancor style, reserves weighted by a connector weight)
//!
//! Given pool reserves and a trade size, the crate computes the output for an
//! exact input, the input required for an exact output, or a fee-free quote
//! at the current reserve ratio.  Every function is pure: no state survives a
//! call.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `float` | yes | f64 floating-point backend |
//! | `fixed-point` | no | I80F48 fixed-point backend |
//!
//! # Quick Start
//!
//! ```toml
//! [dependencies]
//! amm-pricing = "0.1"
//! ```
//!
//! ## Price a swap
//!
//! ```rust
//! use amm_pricing::calculators::{AmountInCalculator, AmountOutCalculator, QuoteCalculator};
//! use amm_pricing::domain::FeeRate;
//! use amm_pricing::math::FloatArithmetic as F;
//!
//! let fee = FeeRate::TIER_0_30_PERCENT;
//! let (reserve_in, reserve_out) = (F::new(100_000_000.0), F::new(400_000_000.0));
//!
//! // Sell 10 000 units of the input token.
//! let out = AmountOutCalculator::constant_product(F::new(10_000.0), reserve_in, reserve_out, fee)
//!     .expect("valid pool");
//! assert_eq!(out.get().floor(), 39_876.0);
//!
//! // How much must be sold to receive 39 876 units?
//! let needed = AmountInCalculator::constant_product(F::new(39_876.0), reserve_in, reserve_out, fee)
//!     .expect("valid pool");
//! assert_eq!(needed.get().floor(), 10_000.0);
//!
//! // Fee-free quote at the spot ratio.
//! let quote = QuoteCalculator::constant_product(F::new(10_000.0), reserve_in, reserve_out)
//!     .expect("valid pool");
//! assert_eq!(quote.get(), 40_000.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  PoolConfig  │  validated reserves + model + fee, implements PricingCurve
//! └──────┬──────┘
//!        │ dispatch on PoolModel
//!        ▼
//! ┌─────────────┐
//! │ Calculators  │  AmountOut, AmountIn, Quote (constant_product / weighted_bancor)
//! └──────┬──────┘
//!        │ generic over P: Precision
//!        ▼
//! ┌─────────────┐
//! │    Math      │  FloatArithmetic, FixedPointArithmetic, settle
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`calculators`] | The three pricing components |
//! | [`domain`] | Value types: [`FeeRate`](domain::FeeRate), [`PoolModel`](domain::PoolModel), [`TradeRequest`](domain::TradeRequest), etc. |
//! | [`traits`] | [`PricingCurve`](traits::PricingCurve) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) pricing context |
//! | [`math`] | Precision backends and integer settlement |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! Rejected inputs are reported as `tracing` `debug` events and computed
//! results as `trace` events.  The crate installs no subscriber.

pub mod calculators;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod traits;
