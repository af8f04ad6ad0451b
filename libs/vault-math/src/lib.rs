#![no_std]

//! Integer math helpers for share-weighted accounting.
//!
//! Every proportional calculation in the vault (share mint, withdrawal
//! payout) is a `floor(a * b / denominator)` with a 256-bit intermediate, so
//! products of two large i128 amounts never phantom-overflow.

use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down).
/// Returns (a * b) / denominator.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let result = product.div(&denom_256);

    u128_from_u256(env, &result)
}

/// Floor-proportional math on token amounts. All inputs must be
/// non-negative; the result always fits in i128 when `a <= denominator` or
/// `b <= denominator`, which holds for every share-weighted call site
/// (shares <= supply, amount <= balance).
pub fn mul_div_floor_i128(env: &Env, a: i128, b: i128, denominator: i128) -> i128 {
    if a < 0 || b < 0 || denominator < 0 {
        panic!("Negative amount");
    }
    let result = mul_div(env, a as u128, b as u128, denominator as u128);
    if result > i128::MAX as u128 {
        panic!("Amount overflow");
    }
    result as i128
}

/// Convert U256 to u128, panics if overflow
fn u128_from_u256(env: &Env, value: &U256) -> u128 {
    let max_u128 = U256::from_u128(env, u128::MAX);
    if value.gt(&max_u128) {
        panic!("U256 overflow when converting to u128");
    }
    value.to_u128().unwrap()
}
