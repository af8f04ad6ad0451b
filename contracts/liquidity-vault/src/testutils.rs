//! Test doubles. `MockVenue` simulates the external liquidity venue with a
//! fixed quote rate: it is deliberately not a pricing curve, only enough
//! venue behavior to exercise the settlement protocol and the position
//! lifecycle (flash-swap debt enforcement, partial fills, liquidity
//! bookkeeping, non-empty close rejection).

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env};
use vault_types::SwapDebt;

#[contract]
pub struct MockVenue;

#[contracttype]
#[derive(Clone)]
pub enum VenueKey {
    BaseToken,
    QuoteToken,
    /// Quote units per 10_000 base units
    RateBps,
    /// Portion of the requested input actually consumed, in bps
    FillBps,
    NextPositionId,
    /// Position id -> liquidity
    Liquidity(u64),
}

const BPS: i128 = 10_000;

#[contractimpl]
impl MockVenue {
    pub fn initialize(env: Env, base_token: Address, quote_token: Address, rate_bps: i128) {
        env.storage()
            .instance()
            .set(&VenueKey::BaseToken, &base_token);
        env.storage()
            .instance()
            .set(&VenueKey::QuoteToken, &quote_token);
        env.storage().instance().set(&VenueKey::RateBps, &rate_bps);
        env.storage().instance().set(&VenueKey::FillBps, &BPS);
        env.storage()
            .instance()
            .set(&VenueKey::NextPositionId, &1u64);
    }

    pub fn set_rate(env: Env, rate_bps: i128) {
        env.storage().instance().set(&VenueKey::RateBps, &rate_bps);
    }

    /// Simulate a price-limited partial fill: only `fill_bps` of any
    /// requested input is consumed, the rest is reported as returned input.
    pub fn set_fill(env: Env, fill_bps: i128) {
        env.storage().instance().set(&VenueKey::FillBps, &fill_bps);
    }

    pub fn flash_swap(
        env: Env,
        recipient: Address,
        base_for_quote: bool,
        amount_in: i128,
        _price_limit: u128,
    ) -> (i128, i128, SwapDebt) {
        let rate: i128 = env.storage().instance().get(&VenueKey::RateBps).unwrap();
        let fill: i128 = env.storage().instance().get(&VenueKey::FillBps).unwrap();

        let consumed = amount_in * fill / BPS;
        let returned = amount_in - consumed;
        let amount_out = if base_for_quote {
            consumed * rate / BPS
        } else {
            consumed * BPS / rate
        };

        let out_token = if base_for_quote {
            quote_token(&env)
        } else {
            base_token(&env)
        };
        if amount_out > 0 {
            token::Client::new(&env, &out_token).transfer(
                &env.current_contract_address(),
                &recipient,
                &amount_out,
            );
        }

        let debt = if base_for_quote {
            SwapDebt {
                base_owed: consumed,
                quote_owed: 0,
            }
        } else {
            SwapDebt {
                base_owed: 0,
                quote_owed: consumed,
            }
        };

        (amount_out, returned, debt)
    }

    pub fn repay(env: Env, from: Address, debt: SwapDebt, base_amount: i128, quote_amount: i128) {
        if base_amount < debt.base_owed || quote_amount < debt.quote_owed {
            panic!("Insufficient repayment");
        }
        let venue = env.current_contract_address();
        if base_amount > 0 {
            token::Client::new(&env, &base_token(&env)).transfer(&from, &venue, &base_amount);
        }
        if quote_amount > 0 {
            token::Client::new(&env, &quote_token(&env)).transfer(&from, &venue, &quote_amount);
        }
    }

    pub fn open_position(env: Env, _tick_lower: i32, _tick_upper: i32) -> u64 {
        let id: u64 = env
            .storage()
            .instance()
            .get(&VenueKey::NextPositionId)
            .unwrap();
        env.storage()
            .instance()
            .set(&VenueKey::NextPositionId, &(id + 1));
        env.storage()
            .instance()
            .set(&VenueKey::Liquidity(id), &0u128);
        id
    }

    /// Consumes matched amounts 1:1 from both sides; the unmatched excess
    /// stays with `from`.
    pub fn add_liquidity(
        env: Env,
        position_id: u64,
        from: Address,
        base_amount: i128,
        quote_amount: i128,
    ) -> (i128, i128) {
        let liquidity = position_liquidity(&env, position_id);
        let used = base_amount.min(quote_amount);
        let venue = env.current_contract_address();
        if used > 0 {
            token::Client::new(&env, &base_token(&env)).transfer(&from, &venue, &used);
            token::Client::new(&env, &quote_token(&env)).transfer(&from, &venue, &used);
        }
        env.storage()
            .instance()
            .set(&VenueKey::Liquidity(position_id), &(liquidity + used as u128));
        (used, used)
    }

    pub fn remove_liquidity(
        env: Env,
        position_id: u64,
        recipient: Address,
        liquidity: u128,
    ) -> (i128, i128) {
        let held = position_liquidity(&env, position_id);
        if liquidity > held {
            panic!("Insufficient liquidity");
        }
        env.storage()
            .instance()
            .set(&VenueKey::Liquidity(position_id), &(held - liquidity));

        let amount = liquidity as i128;
        let venue = env.current_contract_address();
        if amount > 0 {
            token::Client::new(&env, &base_token(&env)).transfer(&venue, &recipient, &amount);
            token::Client::new(&env, &quote_token(&env)).transfer(&venue, &recipient, &amount);
        }
        (amount, amount)
    }

    pub fn close_position(env: Env, position_id: u64) {
        let held = position_liquidity(&env, position_id);
        if held != 0 {
            panic!("Position not empty");
        }
        env.storage()
            .instance()
            .remove(&VenueKey::Liquidity(position_id));
    }

    pub fn liquidity(env: Env, position_id: u64) -> u128 {
        position_liquidity(&env, position_id)
    }
}

fn base_token(env: &Env) -> Address {
    env.storage().instance().get(&VenueKey::BaseToken).unwrap()
}

fn quote_token(env: &Env) -> Address {
    env.storage().instance().get(&VenueKey::QuoteToken).unwrap()
}

fn position_liquidity(env: &Env, position_id: u64) -> u128 {
    env.storage()
        .instance()
        .get(&VenueKey::Liquidity(position_id))
        .expect("Position not found")
}
