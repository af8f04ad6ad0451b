//! Flash-swap settlement protocol: one venue swap wrapped so that, within a
//! single invocation tree, the borrowed amount is exactly repaid and the
//! slippage floor is enforced before any repayment leaves the vault.

use crate::storage::{get_pool, set_pool};
use crate::{ledger, venue};
use soroban_sdk::{token, Address, Env};
use vault_types::PoolInfo;

pub struct SettlementOutcome {
    /// Output-side amount received from the venue
    pub amount_out: i128,
    /// Input-side amount the venue did not consume, already credited back
    /// to the pool ledger
    pub surplus: i128,
}

/// Swap `amount_in` (already held by the vault) through the pool's venue.
///
/// Ordering is the whole point here: the slippage floor is asserted before
/// the debt is repaid, because repayment irreversibly consumes vault funds.
/// A slippage panic aborts the invocation with no persisted state change.
/// Any input-side surplus beyond the debt is credited to the pool ledger,
/// never discarded.
pub fn settle_exact_in(
    env: &Env,
    pool: &mut PoolInfo,
    base_for_quote: bool,
    amount_in: i128,
    min_amount_out: i128,
    price_limit: u128,
) -> SettlementOutcome {
    if amount_in <= 0 {
        panic!("Amount must be non-zero");
    }

    let vault = env.current_contract_address();
    let (amount_out, _returned_input, debt) = venue::flash_swap(
        env,
        &pool.venue,
        &vault,
        base_for_quote,
        amount_in,
        price_limit,
    );

    // Must precede repayment
    if amount_out < min_amount_out {
        panic!("Slippage check failed");
    }

    // The venue may never claim more than it was offered; repaying such a
    // debt would draw on pooled tokens the ledger still counts
    if debt.owed() > amount_in {
        panic!("Debt exceeds input");
    }

    // Repay exactly the owed side; under-repayment is the venue's to reject
    venue::repay(
        env,
        &pool.venue,
        &vault,
        &debt,
        debt.base_owed,
        debt.quote_owed,
    );

    let surplus = amount_in - debt.owed();
    if surplus > 0 {
        if base_for_quote {
            ledger::credit_base(pool, surplus);
        } else {
            ledger::credit_quote(pool, surplus);
        }
    }

    SettlementOutcome {
        amount_out,
        surplus,
    }
}

/// Public settlement entry point: swap the caller's funds through the
/// pool's venue. The caller fronts the input, the output is forwarded back
/// to them, and any input-side surplus stays with the pool ledger.
pub fn swap_exact_in(
    env: &Env,
    caller: Address,
    pool_id: u32,
    base_for_quote: bool,
    amount_in: i128,
    min_amount_out: i128,
    price_limit: u128,
) -> i128 {
    if amount_in <= 0 {
        panic!("Amount must be non-zero");
    }

    let mut pool = get_pool(env, pool_id);
    let vault = env.current_contract_address();
    let (in_token, out_token) = if base_for_quote {
        (pool.base_token.clone(), pool.quote_token.clone())
    } else {
        (pool.quote_token.clone(), pool.base_token.clone())
    };

    token::Client::new(env, &in_token).transfer(&caller, &vault, &amount_in);

    let outcome = settle_exact_in(
        env,
        &mut pool,
        base_for_quote,
        amount_in,
        min_amount_out,
        price_limit,
    );
    set_pool(env, pool_id, &pool);

    if outcome.amount_out > 0 {
        token::Client::new(env, &out_token).transfer(&vault, &caller, &outcome.amount_out);
    }

    outcome.amount_out
}
