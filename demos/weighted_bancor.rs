//! Weighted pricing example (Bancor style).
//!
//! Prices a 40 / 60 weighted pool, feeds the output back through the
//! required-input formula, and shows that equal weights reproduce the
//! constant-product result.
//!
//! # Run
//!
//! ```bash
//! cargo run --example weighted_bancor
//! ```

use amm_pricing::calculators::{AmountInCalculator, AmountOutCalculator};
use amm_pricing::domain::{FeeRate, PoolModel};
use amm_pricing::math::FloatArithmetic as F;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Weighted pricing (Bancor) ===\n");

    let fee = FeeRate::TIER_0_30_PERCENT;
    let reserve_in = F::new(100_000_000.0);
    let reserve_out = F::new(400_000_000.0);
    let amount_in = F::new(10_000.0);

    // ── 1. 40 / 60 weights ──────────────────────────────────────────────
    let (weight_in, weight_out) = (F::new(400_000.0), F::new(600_000.0));
    let out = AmountOutCalculator::weighted_bancor(
        amount_in,
        reserve_in,
        weight_in,
        reserve_out,
        weight_out,
        fee,
    )?;
    println!("Weights {weight_in} / {weight_out}");
    println!("  sell {amount_in} -> receive {out}");

    let back = AmountInCalculator::weighted_bancor(
        out,
        reserve_in,
        weight_in,
        reserve_out,
        weight_out,
        fee,
    )?;
    println!("  buying {out} back costs {back}");

    // ── 2. Equal weights reduce to constant product ─────────────────────
    let equal = PoolModel::weighted_bancor(F::new(500_000.0), F::new(500_000.0))?;
    let weighted = equal.amount_out(amount_in, reserve_in, reserve_out, fee)?;
    let constant =
        PoolModel::ConstantProduct.amount_out(amount_in, reserve_in, reserve_out, fee)?;
    println!("\n{equal}");
    println!("  weighted:         {weighted}");
    println!("  constant product: {constant}");

    let needed = equal.amount_in(F::new(39_876.0), reserve_in, reserve_out, fee)?;
    println!("  buy 39876 -> pay {needed}");

    println!("\n=== Done ===");
    Ok(())
}
