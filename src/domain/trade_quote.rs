//! Priced outcome of a [`TradeRequest`](super::TradeRequest).

use core::fmt;

use super::{Amount, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{settle, Precision};

/// Input, output and fee of a priced trade, in real-valued units.
///
/// # Invariants
///
/// - All three amounts are non-negative.
/// - `fee <= amount_in`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeQuote<P> {
    amount_in: P,
    amount_out: P,
    fee: P,
}

impl<P: Precision> TradeQuote<P> {
    /// Creates a validated quote.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidInput`] if an amount is negative or the
    /// fee exceeds the input.
    pub fn new(amount_in: P, amount_out: P, fee: P) -> Result<Self> {
        if !(amount_in.is_non_negative() && amount_out.is_non_negative() && fee.is_non_negative()) {
            return Err(AmmError::InvalidInput("quote amounts must be non-negative"));
        }
        if fee > amount_in {
            return Err(AmmError::InvalidInput("fee must not exceed amount_in"));
        }
        Ok(Self {
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Returns the input amount.
    #[must_use]
    pub fn amount_in(&self) -> P {
        self.amount_in
    }

    /// Returns the output amount.
    #[must_use]
    pub fn amount_out(&self) -> P {
        self.amount_out
    }

    /// Returns the part of the input retained as fee.
    #[must_use]
    pub fn fee(&self) -> P {
        self.fee
    }

    /// Realised price `amount_out / amount_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] for a zero input.
    pub fn effective_price(&self) -> Result<P> {
        self.amount_out
            .checked_div(&self.amount_in, Rounding::for_output())
    }

    /// Rounds the quote to whole units against the trader: the input up,
    /// the output down.  Returns `(amount_in, amount_out)`.
    ///
    /// # Errors
    ///
    /// Propagates [`settle`] errors.
    pub fn settle(&self) -> Result<(Amount, Amount)> {
        Ok((
            settle(self.amount_in, Rounding::for_input())?,
            settle(self.amount_out, Rounding::for_output())?,
        ))
    }
}

impl<P: fmt::Display> fmt::Display for TradeQuote<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TradeQuote(in={}, out={}, fee={})",
            self.amount_in, self.amount_out, self.fee
        )
    }
}
