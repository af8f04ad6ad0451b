use soroban_sdk::{contracttype, Env};
use vault_types::{PoolInfo, ShareReceipt};

/// Storage keys for the vault contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Name registry contract address (Instance storage)
    Registry,
    /// Number of pools created; next pool id (Instance storage)
    PoolCount,
    /// Next receipt id counter (Instance storage)
    NextReceiptId,
    /// Pool id -> PoolInfo (Persistent storage)
    Pool(u32),
    /// Receipt id -> ShareReceipt (Persistent storage)
    Receipt(u64),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Registry ===

pub fn get_registry(env: &Env) -> soroban_sdk::Address {
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .expect("Not initialized")
}

pub fn set_registry(env: &Env, registry: &soroban_sdk::Address) {
    env.storage().instance().set(&DataKey::Registry, registry);
    extend_instance_ttl(env);
}

pub fn has_registry(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Registry)
}

// === Pools ===

pub fn pool_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PoolCount)
        .unwrap_or(0)
}

/// Allocate the next pool id (ids are dense, starting at 0)
pub fn next_pool_id(env: &Env) -> u32 {
    let id = pool_count(env);
    env.storage().instance().set(&DataKey::PoolCount, &(id + 1));
    id
}

pub fn get_pool(env: &Env, pool_id: u32) -> PoolInfo {
    env.storage()
        .persistent()
        .get(&DataKey::Pool(pool_id))
        .expect("Pool not found")
}

pub fn set_pool(env: &Env, pool_id: u32, pool: &PoolInfo) {
    let key = DataKey::Pool(pool_id);
    env.storage().persistent().set(&key, pool);
    extend_persistent_ttl(env, &key);
}

// === Receipts ===

pub fn next_receipt_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::NextReceiptId)
        .unwrap_or(1);
    env.storage()
        .instance()
        .set(&DataKey::NextReceiptId, &(id + 1));
    id
}

pub fn get_receipt(env: &Env, receipt_id: u64) -> ShareReceipt {
    env.storage()
        .persistent()
        .get(&DataKey::Receipt(receipt_id))
        .expect("Receipt not found")
}

pub fn set_receipt(env: &Env, receipt_id: u64, receipt: &ShareReceipt) {
    let key = DataKey::Receipt(receipt_id);
    env.storage().persistent().set(&key, receipt);
    extend_persistent_ttl(env, &key);
}

pub fn remove_receipt(env: &Env, receipt_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Receipt(receipt_id));
}
