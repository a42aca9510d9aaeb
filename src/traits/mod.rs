//! Core trait abstractions.
//!
//! [`PricingCurve`] is the uniform pricing interface over both pool
//! families.

mod pricing_curve;

pub use pricing_curve::PricingCurve;
