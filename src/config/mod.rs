//! Declarative pool configuration.
//!
//! [`PoolConfig`] bundles the [`PoolModel`](crate::domain::PoolModel), the
//! two reserves and the [`FeeRate`](crate::domain::FeeRate) a caller read
//! from live pool state.  It is validated on construction and implements
//! [`PricingCurve`](crate::traits::PricingCurve).

mod pool_config;

pub use pool_config::PoolConfig;
