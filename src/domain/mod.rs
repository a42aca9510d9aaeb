//! Value types used by the pricing formulas.
//!
//! Fees, rounding directions, pool models, trade requests and their priced
//! outcomes.  Every type is a small `Copy` value with a validated
//! constructor where an invariant exists.

mod amount;
mod basis_points;
mod fee_rate;
mod pool_model;
mod rounding;
mod trade_quote;
mod trade_request;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use fee_rate::FeeRate;
pub use pool_model::PoolModel;
pub use rounding::Rounding;
pub use trade_quote::TradeQuote;
pub use trade_request::{TradeKind, TradeRequest};
