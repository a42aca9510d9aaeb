//! Constant Product pricing example (Uniswap V2 style).
//!
//! Prices a sell and a buy against a 1 : 4 pool with a 0.30% fee, then
//! runs the same trades through a `PoolConfig` and settles them into raw
//! token units.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use amm_pricing::calculators::{AmountInCalculator, AmountOutCalculator};
use amm_pricing::config::PoolConfig;
use amm_pricing::domain::{FeeRate, TradeRequest};
use amm_pricing::math::FloatArithmetic as F;
use amm_pricing::traits::PricingCurve;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant Product pricing (x · y = k) ===\n");

    // ── 1. Pool state ───────────────────────────────────────────────────
    let fee = FeeRate::TIER_0_30_PERCENT;
    let reserve_in = F::new(100_000_000.0);
    let reserve_out = F::new(400_000_000.0);

    println!("Reserve in:  {reserve_in}");
    println!("Reserve out: {reserve_out}");
    println!("Fee:         {fee}");

    // ── 2. Exact input ──────────────────────────────────────────────────
    let amount_in = F::new(10_000.0);
    let out = AmountOutCalculator::constant_product(amount_in, reserve_in, reserve_out, fee)?;
    println!("\nSell {amount_in} -> receive {out}");

    // ── 3. Exact output ─────────────────────────────────────────────────
    let wanted = F::new(39_876.0);
    let needed = AmountInCalculator::constant_product(wanted, reserve_in, reserve_out, fee)?;
    println!("Buy {wanted} -> pay {needed}");

    // ── 4. Round trip ───────────────────────────────────────────────────
    let back = AmountInCalculator::constant_product(out, reserve_in, reserve_out, fee)?;
    println!("Round trip: {amount_in} -> {out} -> {back}");

    // ── 5. Same trades through a PoolConfig ─────────────────────────────
    let pool = PoolConfig::constant_product(reserve_in, reserve_out, fee)?;
    println!("\nPool: {pool}");
    println!("Spot price: {}", pool.spot_price()?);

    for request in [TradeRequest::exact_in(amount_in)?, TradeRequest::exact_out(wanted)?] {
        let quote = pool.evaluate(request)?;
        let (paid, received) = quote.settle()?;
        println!("  {request}: {quote}");
        println!("    settled: pay {paid}, receive {received}");
        println!("    effective price: {}", quote.effective_price()?);
    }

    println!("\n=== Done ===");
    Ok(())
}
