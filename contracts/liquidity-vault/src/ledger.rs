//! Balance-ledger primitives. Only the deposit/withdraw engine and the
//! position lifecycle manager mutate pool balances, and only through these
//! functions, which keep every field non-negative.

use vault_types::PoolInfo;

pub fn credit_base(pool: &mut PoolInfo, amount: i128) {
    require_non_negative(amount);
    pool.base_balance += amount;
}

pub fn debit_base(pool: &mut PoolInfo, amount: i128) {
    require_non_negative(amount);
    if amount > pool.base_balance {
        panic!("Insufficient balance");
    }
    pool.base_balance -= amount;
}

pub fn credit_quote(pool: &mut PoolInfo, amount: i128) {
    require_non_negative(amount);
    pool.quote_balance += amount;
}

pub fn debit_quote(pool: &mut PoolInfo, amount: i128) {
    require_non_negative(amount);
    if amount > pool.quote_balance {
        panic!("Insufficient balance");
    }
    pool.quote_balance -= amount;
}

pub fn mint_shares(pool: &mut PoolInfo, shares: i128) {
    require_non_negative(shares);
    pool.share_supply += shares;
}

pub fn burn_shares(pool: &mut PoolInfo, shares: i128) {
    require_non_negative(shares);
    if shares > pool.share_supply {
        panic!("Insufficient shares");
    }
    pool.share_supply -= shares;
}

fn require_non_negative(amount: i128) {
    if amount < 0 {
        panic!("Negative amount");
    }
}
