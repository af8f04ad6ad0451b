//! Deposit/withdraw engine: proportional share mint/burn on top of the
//! ledger primitives, with the bootstrap and full-exit edge cases.

use crate::storage::{
    get_pool, get_receipt, next_receipt_id, remove_receipt, set_pool, set_receipt,
};
use crate::{events, ledger};
use soroban_sdk::{token, Address, Env};
use vault_math::mul_div_floor_i128;
use vault_types::ShareReceipt;

/// Single-asset deposit. Mints 1:1 on an empty pool, proportionally against
/// the pre-deposit base balance otherwise. Returns the new receipt id.
pub fn deposit(env: &Env, depositor: Address, pool_id: u32, amount: i128) -> u64 {
    if amount <= 0 {
        panic!("Amount must be non-zero");
    }

    let mut pool = get_pool(env, pool_id);
    let before = pool.snapshot();

    // Ratio against the balance before this deposit is credited
    let minted = shares_for_deposit(env, amount, pool.share_supply, pool.base_balance);

    token::Client::new(env, &pool.base_token).transfer(
        &depositor,
        &env.current_contract_address(),
        &amount,
    );

    ledger::credit_base(&mut pool, amount);
    ledger::mint_shares(&mut pool, minted);

    let receipt_id = next_receipt_id(env);
    set_receipt(
        env,
        receipt_id,
        &ShareReceipt {
            pool_id,
            asset: pool.base_token.clone(),
            owner: depositor.clone(),
            shares: minted,
        },
    );
    set_pool(env, pool_id, &pool);

    events::deposited(
        env,
        pool_id,
        &depositor,
        amount,
        0,
        minted,
        &before,
        &pool.snapshot(),
    );

    receipt_id
}

/// Dual-asset deposit. The scarcer side determines minted shares; excess of
/// the other asset is absorbed by the pool without refund. On bootstrap the
/// paired ratio is unchecked and minting follows the base amount alone.
pub fn deposit_dual(
    env: &Env,
    depositor: Address,
    pool_id: u32,
    base_amount: i128,
    quote_amount: i128,
) -> u64 {
    if base_amount <= 0 || quote_amount <= 0 {
        panic!("Amount must be non-zero");
    }

    let mut pool = get_pool(env, pool_id);
    let before = pool.snapshot();

    let minted = shares_for_dual_deposit(
        env,
        base_amount,
        quote_amount,
        pool.share_supply,
        pool.base_balance,
        pool.quote_balance,
    );

    let vault = env.current_contract_address();
    token::Client::new(env, &pool.base_token).transfer(&depositor, &vault, &base_amount);
    token::Client::new(env, &pool.quote_token).transfer(&depositor, &vault, &quote_amount);

    ledger::credit_base(&mut pool, base_amount);
    ledger::credit_quote(&mut pool, quote_amount);
    ledger::mint_shares(&mut pool, minted);

    let receipt_id = next_receipt_id(env);
    set_receipt(
        env,
        receipt_id,
        &ShareReceipt {
            pool_id,
            asset: pool.base_token.clone(),
            owner: depositor.clone(),
            shares: minted,
        },
    );
    set_pool(env, pool_id, &pool);

    events::deposited(
        env,
        pool_id,
        &depositor,
        base_amount,
        quote_amount,
        minted,
        &before,
        &pool.snapshot(),
    );

    receipt_id
}

/// Burn `shares` from a receipt and pay out the proportional slice of both
/// balances. Burning the entire supply drives balances and supply to exactly
/// zero. A full-receipt burn removes the receipt; a partial burn decrements
/// it in place (split-then-burn in one write).
pub fn withdraw(
    env: &Env,
    owner: Address,
    pool_id: u32,
    receipt_id: u64,
    shares: i128,
) -> (i128, i128) {
    if shares <= 0 {
        panic!("Amount must be non-zero");
    }

    let mut pool = get_pool(env, pool_id);
    let mut receipt = get_receipt(env, receipt_id);

    // All receipt preconditions before any mutation
    if receipt.owner != owner {
        panic!("Not receipt owner");
    }
    if receipt.pool_id != pool_id {
        panic!("Receipt pool mismatch");
    }
    if receipt.asset != pool.base_token {
        panic!("Receipt asset mismatch");
    }
    if shares > receipt.shares {
        panic!("Insufficient shares");
    }

    let before = pool.snapshot();

    let (base_out, quote_out) = amounts_for_shares(
        env,
        shares,
        pool.share_supply,
        pool.base_balance,
        pool.quote_balance,
    );

    ledger::burn_shares(&mut pool, shares);
    ledger::debit_base(&mut pool, base_out);
    ledger::debit_quote(&mut pool, quote_out);

    if shares == receipt.shares {
        remove_receipt(env, receipt_id);
    } else {
        receipt.shares -= shares;
        set_receipt(env, receipt_id, &receipt);
    }
    set_pool(env, pool_id, &pool);

    let vault = env.current_contract_address();
    if base_out > 0 {
        token::Client::new(env, &pool.base_token).transfer(&vault, &owner, &base_out);
    }
    if quote_out > 0 {
        token::Client::new(env, &pool.quote_token).transfer(&vault, &owner, &quote_out);
    }

    events::withdrawn(
        env,
        pool_id,
        &owner,
        base_out,
        quote_out,
        shares,
        &before,
        &pool.snapshot(),
    );

    (base_out, quote_out)
}

/// Fold `source` into `target`. Both receipts must belong to `owner` and
/// reference the same pool and asset tag.
pub fn merge_receipts(env: &Env, owner: Address, target_id: u64, source_id: u64) {
    if target_id == source_id {
        panic!("Cannot merge receipt with itself");
    }

    let mut target = get_receipt(env, target_id);
    let source = get_receipt(env, source_id);

    if target.owner != owner || source.owner != owner {
        panic!("Not receipt owner");
    }

    target.combine(&source);
    remove_receipt(env, source_id);
    set_receipt(env, target_id, &target);
}

/// Carve `shares` out of a receipt into a new one. Returns the new id.
pub fn split_receipt(env: &Env, owner: Address, receipt_id: u64, shares: i128) -> u64 {
    let mut receipt = get_receipt(env, receipt_id);
    if receipt.owner != owner {
        panic!("Not receipt owner");
    }

    let carved = receipt.split(shares);
    let new_id = next_receipt_id(env);
    set_receipt(env, receipt_id, &receipt);
    set_receipt(env, new_id, &carved);
    new_id
}

// === Share math ===

/// supply == 0 is the bootstrap (first deposit or fully-withdrawn pool):
/// mint 1:1. Otherwise floor(amount * supply / pre-deposit balance).
/// Outstanding shares with no base backing (all capital deployed into the
/// position) leave the ratio undefined and the deposit is rejected.
fn shares_for_deposit(env: &Env, amount: i128, supply: i128, base_balance: i128) -> i128 {
    if supply == 0 {
        return amount;
    }
    if base_balance == 0 {
        panic!("Insufficient balance");
    }
    mul_div_floor_i128(env, amount, supply, base_balance)
}

/// Dual-asset variant: min of the two proportional quotients. A side the
/// pool holds none of cannot bind the ratio; its contribution is absorbed
/// as excess like any other non-scarce remainder.
fn shares_for_dual_deposit(
    env: &Env,
    base_amount: i128,
    quote_amount: i128,
    supply: i128,
    base_balance: i128,
    quote_balance: i128,
) -> i128 {
    if supply == 0 {
        return base_amount;
    }
    match (base_balance, quote_balance) {
        (0, 0) => panic!("Insufficient balance"),
        (0, _) => mul_div_floor_i128(env, quote_amount, supply, quote_balance),
        (_, 0) => mul_div_floor_i128(env, base_amount, supply, base_balance),
        _ => {
            let by_base = mul_div_floor_i128(env, base_amount, supply, base_balance);
            let by_quote = mul_div_floor_i128(env, quote_amount, supply, quote_balance);
            by_base.min(by_quote)
        }
    }
}

/// Proportional floor payout of both assets for `shares` out of `supply`.
fn amounts_for_shares(
    env: &Env,
    shares: i128,
    supply: i128,
    base_balance: i128,
    quote_balance: i128,
) -> (i128, i128) {
    (
        mul_div_floor_i128(env, shares, base_balance, supply),
        mul_div_floor_i128(env, shares, quote_balance, supply),
    )
}
