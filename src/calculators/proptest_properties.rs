//! Property-based tests for the pricing formulas.
//!
//! 1. **Bounded output**: constant-product output stays below the reserve
//!    and is zero for a zero input.
//! 2. **Round trip**: pricing the output back never asks for less input.
//! 3. **Fee monotonicity**: a higher fee lowers output and raises input.
//! 4. **Equal-weight reduction**: weighted formulas match constant product.
//! 5. **Reserve exhaustion**: buying the whole reserve is rejected.
//! 6. **Quote linearity**: quotes scale linearly with the amount.

use proptest::prelude::*;

use super::{AmountInCalculator, AmountOutCalculator, QuoteCalculator};
use crate::domain::FeeRate;
use crate::error::AmmError;
use crate::math::FloatArithmetic;

type F = FloatArithmetic;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn f(v: f64) -> F {
    F::new(v)
}

fn fee(bps: u32) -> FeeRate {
    let Ok(fee) = FeeRate::from_bps(bps) else {
        panic!("valid fee");
    };
    fee
}

fn relative_gap(a: f64, b: f64) -> f64 {
    (a - b).abs() / a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves in [1e6, 1e9] raw units.
fn reserve_strategy() -> impl Strategy<Value = f64> {
    (1_000_000u64..=1_000_000_000u64).prop_map(|v| v as f64)
}

/// Fractions in (0, 1] with millesimal resolution.
fn fraction_strategy() -> impl Strategy<Value = f64> {
    (1u32..=1_000u32).prop_map(|v| f64::from(v) / 1_000.0)
}

/// Fees that leave some input for the curve.
fn partial_fee_strategy() -> impl Strategy<Value = u32> {
    0u32..10_000u32
}

/// Weights in [1, 1e6].
fn weight_strategy() -> impl Strategy<Value = f64> {
    (1u32..=1_000_000u32).prop_map(f64::from)
}

/// Bancor connector weights in [10%, 90%], in parts per million.
fn connector_weight_strategy() -> impl Strategy<Value = f64> {
    (100_000u32..=900_000u32).prop_map(f64::from)
}

// ---------------------------------------------------------------------------
// Property 1: Bounded output
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_output_below_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        scale in 1u32..=1_000u32,
        frac in fraction_strategy(),
        bps in 0u32..=10_000u32,
    ) {
        let amount = ra * f64::from(scale) * frac;
        let out = match AmountOutCalculator::constant_product(f(amount), f(ra), f(rb), fee(bps)) {
            Ok(out) => out,
            Err(AmmError::NumericDomain(_)) => return Ok(()),
            Err(err) => {
                return Err(TestCaseError::fail(format!("unexpected error: {err}")));
            }
        };
        prop_assert!(out.get() >= 0.0);
        prop_assert!(out.get() < rb, "out {} reached reserve {}", out.get(), rb);
    }

    #[test]
    fn prop_zero_input_gives_zero_output(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        wa in weight_strategy(),
        wb in weight_strategy(),
        bps in 0u32..=10_000u32,
    ) {
        let cp = AmountOutCalculator::constant_product(f(0.0), f(ra), f(rb), fee(bps));
        let wbo =
            AmountOutCalculator::weighted_bancor(f(0.0), f(ra), f(wa), f(rb), f(wb), fee(bps));
        prop_assert_eq!(cp, Ok(f(0.0)));
        prop_assert_eq!(wbo, Ok(f(0.0)));
    }
}

// ---------------------------------------------------------------------------
// Property 2: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_round_trip_never_undercharges(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        frac in fraction_strategy(),
        depth in 0i32..=6i32,
        bps in partial_fee_strategy(),
    ) {
        // Up to a million times the input reserve.
        let amount_in = ra * frac * 10f64.powi(depth);
        let out = match AmountOutCalculator::constant_product(
            f(amount_in),
            f(ra),
            f(rb),
            fee(bps),
        ) {
            Ok(out) => out,
            Err(AmmError::NumericDomain(_)) if depth > 3 => return Ok(()),
            Err(err) => {
                return Err(TestCaseError::fail(format!("amount out failed: {err}")));
            }
        };
        let Ok(back) = AmountInCalculator::constant_product(out, f(ra), f(rb), fee(bps)) else {
            return Err(TestCaseError::fail("amount in failed"));
        };
        prop_assert!(
            back.get() >= amount_in,
            "round trip {} -> {} -> {}",
            amount_in,
            out.get(),
            back.get()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_higher_fee_lowers_output(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        frac in fraction_strategy(),
        bps in partial_fee_strategy(),
    ) {
        let amount = ra * frac;
        let (Ok(low), Ok(high)) = (
            AmountOutCalculator::constant_product(f(amount), f(ra), f(rb), fee(bps)),
            AmountOutCalculator::constant_product(f(amount), f(ra), f(rb), fee(bps + 1)),
        ) else {
            return Err(TestCaseError::fail("amount out failed"));
        };
        prop_assert!(high.get() < low.get(), "fee {} -> {}: {} vs {}", bps, bps + 1,
            low.get(), high.get());
    }

    #[test]
    fn prop_higher_fee_raises_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        frac in fraction_strategy(),
        bps in 0u32..9_999u32,
    ) {
        let amount_out = (rb / 2.0 * frac).max(1_000.0);
        let (Ok(low), Ok(high)) = (
            AmountInCalculator::constant_product(f(amount_out), f(ra), f(rb), fee(bps)),
            AmountInCalculator::constant_product(f(amount_out), f(ra), f(rb), fee(bps + 1)),
        ) else {
            return Err(TestCaseError::fail("amount in failed"));
        };
        prop_assert!(high.get() > low.get(), "fee {} -> {}: {} vs {}", bps, bps + 1,
            low.get(), high.get());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_higher_fee_lowers_weighted_output(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        wa in connector_weight_strategy(),
        wb in connector_weight_strategy(),
        frac in fraction_strategy(),
        bps in partial_fee_strategy(),
    ) {
        prop_assume!(wa != wb);
        let amount = ra * frac;
        let price = |bps: u32| {
            AmountOutCalculator::weighted_bancor(f(amount), f(ra), f(wa), f(rb), f(wb), fee(bps))
        };
        let (Ok(low), Ok(high)) = (price(bps), price(bps + 1)) else {
            return Err(TestCaseError::fail("weighted amount out failed"));
        };
        prop_assert!(high.get() < low.get(), "fee {} -> {}: {} vs {}", bps, bps + 1,
            low.get(), high.get());
    }

    #[test]
    fn prop_higher_fee_raises_weighted_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        wa in connector_weight_strategy(),
        wb in connector_weight_strategy(),
        frac in fraction_strategy(),
        bps in 0u32..9_999u32,
    ) {
        prop_assume!(wa != wb);
        let amount_out = (rb / 2.0 * frac).max(1_000.0);
        let price = |bps: u32| {
            AmountInCalculator::weighted_bancor(f(amount_out), f(ra), f(wa), f(rb), f(wb), fee(bps))
        };
        let (Ok(low), Ok(high)) = (price(bps), price(bps + 1)) else {
            return Err(TestCaseError::fail("weighted amount in failed"));
        };
        prop_assert!(high.get() > low.get(), "fee {} -> {}: {} vs {}", bps, bps + 1,
            low.get(), high.get());
    }
}

// ---------------------------------------------------------------------------
// Property 4: Equal-weight reduction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_equal_weights_match_constant_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        w in weight_strategy(),
        frac in fraction_strategy(),
        bps in partial_fee_strategy(),
    ) {
        let amount = ra * frac;
        let fee = fee(bps);

        let (Ok(cp_out), Ok(wb_out)) = (
            AmountOutCalculator::constant_product(f(amount), f(ra), f(rb), fee),
            AmountOutCalculator::weighted_bancor(f(amount), f(ra), f(w), f(rb), f(w), fee),
        ) else {
            return Err(TestCaseError::fail("amount out failed"));
        };
        prop_assert!(relative_gap(cp_out.get(), wb_out.get()) < 1e-6);

        let amount_out = rb / 2.0 * frac;
        let (Ok(cp_in), Ok(wb_in)) = (
            AmountInCalculator::constant_product(f(amount_out), f(ra), f(rb), fee),
            AmountInCalculator::weighted_bancor(f(amount_out), f(ra), f(w), f(rb), f(w), fee),
        ) else {
            return Err(TestCaseError::fail("amount in failed"));
        };
        prop_assert!(relative_gap(cp_in.get(), wb_in.get()) < 1e-6);

        let (Ok(cp_q), Ok(wb_q)) = (
            QuoteCalculator::constant_product(f(amount), f(ra), f(rb)),
            QuoteCalculator::weighted_bancor(f(amount), f(ra), f(w), f(rb), f(w)),
        ) else {
            return Err(TestCaseError::fail("quote failed"));
        };
        prop_assert!(relative_gap(cp_q.get(), wb_q.get()) < 1e-6);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Reserve exhaustion
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_buying_whole_reserve_is_rejected(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        excess in 0u32..=1_000_000u32,
        bps in 0u32..=10_000u32,
    ) {
        let amount_out = rb + f64::from(excess);
        prop_assert_eq!(
            AmountInCalculator::constant_product(f(amount_out), f(ra), f(rb), fee(bps)),
            Err(AmmError::AmountExceedsReserve)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: Quote linearity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_quote_is_linear(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        wa in weight_strategy(),
        wb in weight_strategy(),
        a in 1u32..=1_000_000u32,
        b in 1u32..=1_000_000u32,
    ) {
        let (a, b) = (f64::from(a), f64::from(b));
        let quote = |x: f64| QuoteCalculator::weighted_bancor(f(x), f(ra), f(wa), f(rb), f(wb));
        let (Ok(qa), Ok(qb), Ok(qab)) = (quote(a), quote(b), quote(a + b)) else {
            return Err(TestCaseError::fail("quote failed"));
        };
        prop_assert!(relative_gap(qab.get(), qa.get() + qb.get()) < 1e-9);
    }
}
