#![no_std]

//! Liquidity vault: share-based pool accounting with flash-swap settlement
//! against an external liquidity venue and admin-managed range positions.
//!
//! Every public operation is one atomic invocation: the Soroban host
//! discards all storage writes and token transfers of an invocation that
//! panics, so a violated precondition leaves zero partial effects.

mod deposit;
mod events;
mod ledger;
mod position;
mod settlement;
mod storage;
#[cfg(test)]
mod testutils;
mod venue;

use soroban_sdk::{contract, contractimpl, Address, Env, IntoVal, String, Symbol};
use storage::{
    extend_instance_ttl, get_pool, get_receipt, get_registry, has_registry, next_pool_id,
    set_pool, set_registry,
};
use vault_types::{PoolInfo, PoolSnapshot, ShareReceipt};

#[contract]
pub struct LiquidityVault;

#[contractimpl]
impl LiquidityVault {
    /// Initialize with the name registry address
    pub fn initialize(env: Env, registry: Address) {
        if has_registry(&env) {
            panic!("Already initialized");
        }
        set_registry(&env, &registry);
    }

    /// Create a pool: reserve the name, store a zero-balance ledger entry,
    /// set the admin. Pools are never deleted.
    pub fn create_pool(
        env: Env,
        admin: Address,
        name: String,
        base_token: Address,
        quote_token: Address,
        venue: Address,
    ) -> u32 {
        admin.require_auth();
        extend_instance_ttl(&env);

        let registry = get_registry(&env);
        let taken: bool = env.invoke_contract(
            &registry,
            &Symbol::new(&env, "exists"),
            (name.clone(),).into_val(&env),
        );
        if taken {
            panic!("Name already registered");
        }

        let pool_id = next_pool_id(&env);
        env.invoke_contract::<()>(
            &registry,
            &Symbol::new(&env, "register"),
            (name.clone(), pool_id).into_val(&env),
        );

        let pool = PoolInfo::new(name.clone(), admin.clone(), base_token, quote_token, venue);
        set_pool(&env, pool_id, &pool);

        events::pool_created(&env, pool_id, &admin, &name);
        pool_id
    }

    // === Deposit/Withdraw Engine ===

    /// Deposit base asset for a proportional share receipt.
    /// Returns the receipt id.
    pub fn deposit(env: Env, depositor: Address, pool_id: u32, amount: i128) -> u64 {
        depositor.require_auth();
        extend_instance_ttl(&env);
        deposit::deposit(&env, depositor, pool_id, amount)
    }

    /// Deposit both assets; the scarcer side determines minted shares.
    /// Returns the receipt id.
    pub fn deposit_dual(
        env: Env,
        depositor: Address,
        pool_id: u32,
        base_amount: i128,
        quote_amount: i128,
    ) -> u64 {
        depositor.require_auth();
        extend_instance_ttl(&env);
        deposit::deposit_dual(&env, depositor, pool_id, base_amount, quote_amount)
    }

    /// Burn shares from a receipt for a proportional slice of both balances.
    ///
    /// # Returns
    /// (base_out, quote_out) - Amounts paid out
    pub fn withdraw(
        env: Env,
        owner: Address,
        pool_id: u32,
        receipt_id: u64,
        shares: i128,
    ) -> (i128, i128) {
        owner.require_auth();
        extend_instance_ttl(&env);
        deposit::withdraw(&env, owner, pool_id, receipt_id, shares)
    }

    /// Fold one receipt into another (same pool, asset, owner)
    pub fn merge_receipts(env: Env, owner: Address, target_id: u64, source_id: u64) {
        owner.require_auth();
        extend_instance_ttl(&env);
        deposit::merge_receipts(&env, owner, target_id, source_id)
    }

    /// Carve shares out of a receipt into a new one. Returns the new id.
    pub fn split_receipt(env: Env, owner: Address, receipt_id: u64, shares: i128) -> u64 {
        owner.require_auth();
        extend_instance_ttl(&env);
        deposit::split_receipt(&env, owner, receipt_id, shares)
    }

    // === Flash-Swap Settlement ===

    /// Swap the caller's funds through the pool's venue, enforcing the
    /// slippage floor before the flash-swap debt is repaid.
    ///
    /// # Returns
    /// Output amount forwarded to the caller
    pub fn swap_exact_in(
        env: Env,
        caller: Address,
        pool_id: u32,
        base_for_quote: bool,
        amount_in: i128,
        min_amount_out: i128,
        price_limit: u128,
    ) -> i128 {
        caller.require_auth();
        extend_instance_ttl(&env);
        settlement::swap_exact_in(
            &env,
            caller,
            pool_id,
            base_for_quote,
            amount_in,
            min_amount_out,
            price_limit,
        )
    }

    // === Position Lifecycle (admin only) ===

    /// Deploy pooled base capital into a new venue position over
    /// [tick_lower, tick_upper]. Returns the venue position id.
    #[allow(clippy::too_many_arguments)]
    pub fn open_position(
        env: Env,
        caller: Address,
        pool_id: u32,
        amount: i128,
        tick_lower: i32,
        tick_upper: i32,
        min_swap_out: i128,
        price_limit: u128,
    ) -> u64 {
        caller.require_auth();
        extend_instance_ttl(&env);
        position::open(
            &env,
            caller,
            pool_id,
            amount,
            tick_lower,
            tick_upper,
            min_swap_out,
            price_limit,
        )
    }

    /// Deploy more pooled capital into the existing position.
    ///
    /// # Returns
    /// (used_base, used_quote) - Amounts the venue consumed
    pub fn add_liquidity(
        env: Env,
        caller: Address,
        pool_id: u32,
        amount: i128,
        min_swap_out: i128,
        price_limit: u128,
    ) -> (i128, i128) {
        caller.require_auth();
        extend_instance_ttl(&env);
        position::add(&env, caller, pool_id, amount, min_swap_out, price_limit)
    }

    /// Pull liquidity back out of the position into the ledger; with
    /// `consolidate` the quote side is swapped into base.
    ///
    /// # Returns
    /// (base_credited, quote_credited)
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity(
        env: Env,
        caller: Address,
        pool_id: u32,
        liquidity: u128,
        consolidate: bool,
        min_swap_out: i128,
        price_limit: u128,
    ) -> (i128, i128) {
        caller.require_auth();
        extend_instance_ttl(&env);
        position::remove(
            &env,
            caller,
            pool_id,
            liquidity,
            consolidate,
            min_swap_out,
            price_limit,
        )
    }

    /// Destroy the position; legal only once it holds zero liquidity
    pub fn close_position(env: Env, caller: Address, pool_id: u32) {
        caller.require_auth();
        extend_instance_ttl(&env);
        position::close(&env, caller, pool_id)
    }

    // === View Functions ===

    /// Get a pool's full ledger entry
    pub fn get_pool(env: Env, pool_id: u32) -> PoolInfo {
        get_pool(&env, pool_id)
    }

    /// Get a pool's balance/supply snapshot
    pub fn pool_snapshot(env: Env, pool_id: u32) -> PoolSnapshot {
        get_pool(&env, pool_id).snapshot()
    }

    /// Get a pool's admin identity
    pub fn pool_admin(env: Env, pool_id: u32) -> Address {
        get_pool(&env, pool_id).admin
    }

    /// Total pools created
    pub fn pool_count(env: Env) -> u32 {
        storage::pool_count(&env)
    }

    /// Get a share receipt
    pub fn get_receipt(env: Env, receipt_id: u64) -> ShareReceipt {
        get_receipt(&env, receipt_id)
    }

    /// Get the name registry address
    pub fn registry(env: Env) -> Address {
        get_registry(&env)
    }
}
