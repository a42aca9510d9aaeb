//! Numeric backends and shared helpers for the pricing formulas.
//!
//! This module provides the [`Precision`] trait for feature-gated numeric
//! backends, [`settle`] for converting real-valued results into raw token
//! units, and the crate-internal input guards shared by every calculator.
//!
//! # Feature-gated backends
//!
//! | Feature | Type | Use case |
//! |---------|------|----------|
//! | `float` | `FloatArithmetic` | Off-chain quoting, reference behaviour |
//! | `fixed-point` | `FixedPointArithmetic` | Deterministic evaluation |

pub(crate) mod guards;
mod precision;
mod rounding;

#[cfg(feature = "fixed-point")]
mod fixed_precision;
#[cfg(feature = "float")]
mod float_precision;

pub use precision::Precision;
pub use rounding::settle;

#[cfg(feature = "fixed-point")]
pub use fixed_precision::FixedPointArithmetic;
#[cfg(feature = "float")]
pub use float_precision::FloatArithmetic;
