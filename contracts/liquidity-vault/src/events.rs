//! Event emission. Every ledger-mutating event carries before/after
//! snapshots so an observer can reconstruct pool state without re-deriving
//! the share math.

use soroban_sdk::{Address, Env, String, Symbol};
use vault_types::PoolSnapshot;

pub fn pool_created(env: &Env, pool_id: u32, admin: &Address, name: &String) {
    env.events().publish(
        (Symbol::new(env, "pool_created"), pool_id),
        (admin.clone(), name.clone()),
    );
}

#[allow(clippy::too_many_arguments)]
pub fn deposited(
    env: &Env,
    pool_id: u32,
    depositor: &Address,
    base_in: i128,
    quote_in: i128,
    minted: i128,
    before: &PoolSnapshot,
    after: &PoolSnapshot,
) {
    env.events().publish(
        (Symbol::new(env, "deposited"), pool_id),
        (
            depositor.clone(),
            base_in,
            quote_in,
            minted,
            before.clone(),
            after.clone(),
        ),
    );
}

#[allow(clippy::too_many_arguments)]
pub fn withdrawn(
    env: &Env,
    pool_id: u32,
    owner: &Address,
    base_out: i128,
    quote_out: i128,
    burned: i128,
    before: &PoolSnapshot,
    after: &PoolSnapshot,
) {
    env.events().publish(
        (Symbol::new(env, "withdrawn"), pool_id),
        (
            owner.clone(),
            base_out,
            quote_out,
            burned,
            before.clone(),
            after.clone(),
        ),
    );
}

pub fn position_opened(
    env: &Env,
    pool_id: u32,
    position_id: u64,
    used_base: i128,
    used_quote: i128,
    before: &PoolSnapshot,
    after: &PoolSnapshot,
) {
    env.events().publish(
        (Symbol::new(env, "position_opened"), pool_id),
        (position_id, used_base, used_quote, before.clone(), after.clone()),
    );
}

pub fn liquidity_added(
    env: &Env,
    pool_id: u32,
    position_id: u64,
    used_base: i128,
    used_quote: i128,
    before: &PoolSnapshot,
    after: &PoolSnapshot,
) {
    env.events().publish(
        (Symbol::new(env, "liquidity_added"), pool_id),
        (position_id, used_base, used_quote, before.clone(), after.clone()),
    );
}

pub fn liquidity_removed(
    env: &Env,
    pool_id: u32,
    position_id: u64,
    base_out: i128,
    quote_out: i128,
    before: &PoolSnapshot,
    after: &PoolSnapshot,
) {
    env.events().publish(
        (Symbol::new(env, "liquidity_removed"), pool_id),
        (position_id, base_out, quote_out, before.clone(), after.clone()),
    );
}

pub fn position_closed(
    env: &Env,
    pool_id: u32,
    position_id: u64,
    before: &PoolSnapshot,
    after: &PoolSnapshot,
) {
    env.events().publish(
        (Symbol::new(env, "position_closed"), pool_id),
        (position_id, before.clone(), after.clone()),
    );
}
