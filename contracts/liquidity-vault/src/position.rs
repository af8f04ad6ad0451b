//! Position lifecycle manager: open/add/remove/close of the pool's one
//! external position, built on the settlement protocol and the ledger.
//! Every entry point is gated to the pool's stored admin identity before
//! any external call or mutation.

use crate::storage::{get_pool, set_pool};
use crate::{events, ledger, settlement, venue};
use soroban_sdk::{Address, Env};
use vault_types::{PoolInfo, PositionInfo, PositionStatus};

/// Open a new position from pooled base capital: debit `amount`, swap half
/// of it for the paired asset, deposit both sides, and credit every unused
/// remainder back to the ledger as an explicit refund.
#[allow(clippy::too_many_arguments)]
pub fn open(
    env: &Env,
    caller: Address,
    pool_id: u32,
    amount: i128,
    tick_lower: i32,
    tick_upper: i32,
    min_swap_out: i128,
    price_limit: u128,
) -> u64 {
    let mut pool = get_pool(env, pool_id);
    require_admin(&pool, &caller);
    if let PositionStatus::Open(_) = pool.position {
        panic!("Position already open");
    }
    if amount <= 0 {
        panic!("Amount must be non-zero");
    }
    // Half of it must survive the integer split
    if amount < 2 {
        panic!("Amount too small");
    }

    let before = pool.snapshot();
    ledger::debit_base(&mut pool, amount);

    let swap_in = amount / 2;
    let base_side = amount - swap_in;
    let outcome = settlement::settle_exact_in(
        env,
        &mut pool,
        true,
        swap_in,
        min_swap_out,
        price_limit,
    );

    let position_id = venue::open_position(env, &pool.venue, tick_lower, tick_upper);
    let (used_base, used_quote) = venue::add_liquidity(
        env,
        &pool.venue,
        position_id,
        &env.current_contract_address(),
        base_side,
        outcome.amount_out,
    );

    // Explicit refunds, never silently absorbed
    ledger::credit_base(&mut pool, base_side - used_base);
    ledger::credit_quote(&mut pool, outcome.amount_out - used_quote);

    pool.position = PositionStatus::Open(PositionInfo {
        id: position_id,
        tick_lower,
        tick_upper,
    });
    set_pool(env, pool_id, &pool);

    events::position_opened(
        env,
        pool_id,
        position_id,
        used_base,
        used_quote,
        &before,
        &pool.snapshot(),
    );

    position_id
}

/// Same split-and-swap procedure against the existing position.
pub fn add(
    env: &Env,
    caller: Address,
    pool_id: u32,
    amount: i128,
    min_swap_out: i128,
    price_limit: u128,
) -> (i128, i128) {
    let mut pool = get_pool(env, pool_id);
    require_admin(&pool, &caller);
    let info = open_position_info(&pool);
    if amount <= 0 {
        panic!("Amount must be non-zero");
    }
    if amount < 2 {
        panic!("Amount too small");
    }

    let before = pool.snapshot();
    ledger::debit_base(&mut pool, amount);

    let swap_in = amount / 2;
    let base_side = amount - swap_in;
    let outcome = settlement::settle_exact_in(
        env,
        &mut pool,
        true,
        swap_in,
        min_swap_out,
        price_limit,
    );

    let (used_base, used_quote) = venue::add_liquidity(
        env,
        &pool.venue,
        info.id,
        &env.current_contract_address(),
        base_side,
        outcome.amount_out,
    );

    ledger::credit_base(&mut pool, base_side - used_base);
    ledger::credit_quote(&mut pool, outcome.amount_out - used_quote);
    set_pool(env, pool_id, &pool);

    events::liquidity_added(
        env,
        pool_id,
        info.id,
        used_base,
        used_quote,
        &before,
        &pool.snapshot(),
    );

    (used_base, used_quote)
}

/// Pull `liquidity` back out of the position. Both assets return to the
/// ledger; with `consolidate` the quote side is routed through the
/// settlement protocol into base. Returns the amounts credited per asset.
#[allow(clippy::too_many_arguments)]
pub fn remove(
    env: &Env,
    caller: Address,
    pool_id: u32,
    liquidity: u128,
    consolidate: bool,
    min_swap_out: i128,
    price_limit: u128,
) -> (i128, i128) {
    let mut pool = get_pool(env, pool_id);
    require_admin(&pool, &caller);
    let info = open_position_info(&pool);
    if liquidity == 0 {
        panic!("Amount must be non-zero");
    }

    let before = pool.snapshot();
    let (base_returned, quote_returned) = venue::remove_liquidity(
        env,
        &pool.venue,
        info.id,
        &env.current_contract_address(),
        liquidity,
    );

    ledger::credit_base(&mut pool, base_returned);
    let (base_credited, quote_credited) = if consolidate && quote_returned > 0 {
        let outcome = settlement::settle_exact_in(
            env,
            &mut pool,
            false,
            quote_returned,
            min_swap_out,
            price_limit,
        );
        ledger::credit_base(&mut pool, outcome.amount_out);
        (base_returned + outcome.amount_out, outcome.surplus)
    } else {
        ledger::credit_quote(&mut pool, quote_returned);
        (base_returned, quote_returned)
    };
    set_pool(env, pool_id, &pool);

    events::liquidity_removed(
        env,
        pool_id,
        info.id,
        base_credited,
        quote_credited,
        &before,
        &pool.snapshot(),
    );

    (base_credited, quote_credited)
}

/// Destroy the position. The venue rejects a non-empty position and that
/// rejection propagates here unmasked.
pub fn close(env: &Env, caller: Address, pool_id: u32) {
    let mut pool = get_pool(env, pool_id);
    require_admin(&pool, &caller);
    let info = open_position_info(&pool);

    let before = pool.snapshot();
    venue::close_position(env, &pool.venue, info.id);

    pool.position = PositionStatus::Closed;
    set_pool(env, pool_id, &pool);

    events::position_closed(env, pool_id, info.id, &before, &pool.snapshot());
}

/// The entire authorization surface: caller identity equals the stored
/// admin field. No role hierarchy, no multi-admin, no timelock.
fn require_admin(pool: &PoolInfo, caller: &Address) {
    if *caller != pool.admin {
        panic!("Not pool admin");
    }
}

fn open_position_info(pool: &PoolInfo) -> PositionInfo {
    match &pool.position {
        PositionStatus::Open(info) => info.clone(),
        _ => panic!("No open position"),
    }
}
