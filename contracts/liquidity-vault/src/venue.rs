//! Invoke helpers for the external liquidity venue. The venue owns the
//! pricing curve and position bookkeeping; the vault only consumes this
//! interface.

use soroban_sdk::{Address, Env, IntoVal, Symbol};
use vault_types::SwapDebt;

/// Request a flash swap: output is transferred to `recipient` immediately,
/// the returned debt must be repaid within the same invocation tree.
pub fn flash_swap(
    env: &Env,
    venue: &Address,
    recipient: &Address,
    base_for_quote: bool,
    amount_in: i128,
    price_limit: u128,
) -> (i128, i128, SwapDebt) {
    env.invoke_contract(
        venue,
        &Symbol::new(env, "flash_swap"),
        (recipient, base_for_quote, amount_in, price_limit).into_val(env),
    )
}

/// Repay a flash-swap debt from `from`'s funds. The venue rejects offers
/// that do not cover the debt.
pub fn repay(
    env: &Env,
    venue: &Address,
    from: &Address,
    debt: &SwapDebt,
    base_amount: i128,
    quote_amount: i128,
) {
    env.invoke_contract::<()>(
        venue,
        &Symbol::new(env, "repay"),
        (from, debt.clone(), base_amount, quote_amount).into_val(env),
    )
}

pub fn open_position(env: &Env, venue: &Address, tick_lower: i32, tick_upper: i32) -> u64 {
    env.invoke_contract(
        venue,
        &Symbol::new(env, "open_position"),
        (tick_lower, tick_upper).into_val(env),
    )
}

/// Deposit both assets into a position. Returns the amounts the venue
/// actually consumed; anything else stays with `from`.
pub fn add_liquidity(
    env: &Env,
    venue: &Address,
    position_id: u64,
    from: &Address,
    base_amount: i128,
    quote_amount: i128,
) -> (i128, i128) {
    env.invoke_contract(
        venue,
        &Symbol::new(env, "add_liquidity"),
        (position_id, from, base_amount, quote_amount).into_val(env),
    )
}

pub fn remove_liquidity(
    env: &Env,
    venue: &Address,
    position_id: u64,
    recipient: &Address,
    liquidity: u128,
) -> (i128, i128) {
    env.invoke_contract(
        venue,
        &Symbol::new(env, "remove_liquidity"),
        (position_id, recipient, liquidity).into_val(env),
    )
}

/// Destroy a position. The venue rejects this for non-empty positions and
/// the rejection propagates to the caller unmasked.
pub fn close_position(env: &Env, venue: &Address, position_id: u64) {
    env.invoke_contract::<()>(
        venue,
        &Symbol::new(env, "close_position"),
        (position_id,).into_val(env),
    )
}
