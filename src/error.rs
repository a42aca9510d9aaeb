//! Unified error types for the AMM pricing library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! # Taxonomy
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`InvalidInput`](AmmError::InvalidInput) | reserve or weight ≤ 0, fee outside `0..=10_000`, negative amount |
//! | [`AmountExceedsReserve`](AmmError::AmountExceedsReserve) | requested output ≥ output-side reserve |
//! | [`Overflow`](AmmError::Overflow) / [`Underflow`](AmmError::Underflow) | an intermediate is not representable |
//! | [`DivisionByZero`](AmmError::DivisionByZero) | a divisor collapses to zero (e.g. 100% fee) |
//! | [`NumericDomain`](AmmError::NumericDomain) | a power base is not positive, or precision is exhausted |

use thiserror::Error;

/// Errors produced by the pricing formulas.
///
/// Payloads are static strings so the enum stays `Copy` and allocation
/// free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// A reserve, weight, fee, or amount is outside its valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The requested output amount is not strictly below the output reserve.
    #[error("requested amount out must be strictly less than the output reserve")]
    AmountExceedsReserve,

    /// An intermediate result exceeds the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// An intermediate result falls below the representable range.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A divisor evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operation was evaluated outside its mathematical domain.
    #[error("numeric domain error: {0}")]
    NumericDomain(&'static str),
}

impl AmmError {
    /// Returns `true` for errors caused by the caller's arguments rather
    /// than by the numeric backend.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::AmountExceedsReserve)
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
