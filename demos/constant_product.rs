//! Constant Product AMM walkthrough.
//!
//! Creates a pool, trades through it in both directions, adds and removes
//! liquidity, and persists the pool through a snapshot.  Set `RUST_LOG`
//! to `debug` to see every committed and rejected operation.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example constant_product
//! ```

use std::env;

use duet_amm::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Constant Product AMM (x · y = k) ===\n");

    // ── 1. Create a pool through the registry ───────────────────────────
    let registry = PoolRegistry::new();
    let config = PoolConfig::new(
        FeeTier::TIER_0_30_PERCENT,
        Amount::new(1_000_000),
        Amount::new(2_000_000),
    )?;
    let (id, seed) = registry.create_pool(&config)?;
    println!("Created {id} with fee {}", config.fee_tier());
    println!("  Shares minted: {}", seed.shares_minted());
    println!("  {}", registry.get_reserves(id)?);

    // ── 2. Quote, then swap A → B with a slippage guard ─────────────────
    let quote = registry.quote_swap_output(id, SwapDirection::AToB, Amount::new(10_000))?;
    println!("\nQuote A->B 10000: out {} (fee {})", quote.amount_out(), quote.fee());

    let request = SwapRequest::new(SwapDirection::AToB, Amount::new(10_000), quote.amount_out())?;
    let result = registry.swap(id, &request)?;
    println!("Swapped: {} in, {} out", result.amount_in(), result.amount_out());
    println!("  {}", result.reserves());

    // ── 3. A guard one unit above the quote is refused ──────────────────
    let quote = registry.quote_swap_output(id, SwapDirection::BToA, Amount::new(25_000))?;
    let greedy = SwapRequest::new(
        SwapDirection::BToA,
        Amount::new(25_000),
        Amount::new(quote.amount_out().get() + 1),
    )?;
    match registry.swap(id, &greedy) {
        Err(err) => println!("\nRejected as expected: {err}"),
        Ok(_) => println!("\nUnexpectedly accepted"),
    }

    // ── 4. Unbalanced deposit: the excess is refunded ───────────────────
    let deposit = registry.add_liquidity(id, Amount::new(500_000), Amount::new(2_000_000))?;
    println!("\nDeposit: {deposit}");
    println!("  Refund A: {}, refund B: {}", deposit.refund_a(), deposit.refund_b());

    // ── 5. Persist and restore ──────────────────────────────────────────
    let snapshot = registry.snapshot(id)?;
    let restored = ConstantProductPool::restore(snapshot)?;
    let copy = registry.insert(restored)?;
    println!("\nRestored snapshot as {copy}: {}", registry.get_reserves(copy)?);

    // ── 6. Burn everything ──────────────────────────────────────────────
    let supply = registry.get_reserves(id)?.share_supply();
    let exit = registry.remove_liquidity(id, supply)?;
    println!("\nWithdrew {} A and {} B", exit.amount_a(), exit.amount_b());
    println!("Pool {id} is now {}", registry.status(id)?);

    Ok(())
}
