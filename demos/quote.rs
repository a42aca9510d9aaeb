//! Fee-free quote example.
//!
//! Quotes an amount at the current reserve ratio for both pool families
//! and in both trade directions.
//!
//! # Run
//!
//! ```bash
//! cargo run --example quote
//! ```

use amm_pricing::calculators::QuoteCalculator;
use amm_pricing::config::PoolConfig;
use amm_pricing::domain::FeeRate;
use amm_pricing::math::FloatArithmetic as F;
use amm_pricing::traits::PricingCurve;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Quotes ===\n");

    let amount = F::new(10_000.0);
    let reserve_a = F::new(100_000_000.0);
    let reserve_b = F::new(400_000_000.0);
    let weight = F::new(500_000.0);

    let constant = QuoteCalculator::constant_product(amount, reserve_a, reserve_b)?;
    let weighted = QuoteCalculator::weighted_bancor(amount, reserve_a, weight, reserve_b, weight)?;
    println!("Constant product: {amount} -> {constant}");
    println!("Weighted (50/50): {amount} -> {weighted}");

    // ── Uneven weights shift the spot price ─────────────────────────────
    let pool = PoolConfig::weighted_bancor(
        reserve_a,
        F::new(400_000.0),
        reserve_b,
        F::new(600_000.0),
        FeeRate::TIER_0_30_PERCENT,
    )?;
    let reverse = pool.reversed();
    println!("\nWeighted (40/60) spot price: {}", pool.spot_price()?);
    println!("  {amount} -> {}", pool.quote(amount)?);
    println!("Reverse spot price:          {}", reverse.spot_price()?);

    println!("\n=== Done ===");
    Ok(())
}
