//! The three pricing components.
//!
//! Each component is a unit struct whose associated functions implement
//! one operation for both pool families:
//!
//! | Component | Constant product | Weighted (Bancor) |
//! |-----------|------------------|-------------------|
//! | [`AmountOutCalculator`] | `constant_product` | `weighted_bancor` |
//! | [`AmountInCalculator`] | `constant_product` | `weighted_bancor` |
//! | [`QuoteCalculator`] | `constant_product` | `weighted_bancor` |
//!
//! The components are independent leaves: none calls another.  Callers
//! that hold a [`PoolModel`](crate::domain::PoolModel) dispatch through it
//! instead of picking a variant by hand.

mod amount_in;
mod amount_out;
mod quote;

#[cfg(all(test, feature = "float"))]
#[allow(clippy::panic)]
mod proptest_properties;

pub use amount_in::AmountInCalculator;
pub use amount_out::AmountOutCalculator;
pub use quote::QuoteCalculator;
