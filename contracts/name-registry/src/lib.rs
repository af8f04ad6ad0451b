#![no_std]

//! Name registry: maps display names to pool ids with uniqueness enforced at
//! registration. The vault consults it during pool creation; it owns no
//! other state.

use soroban_sdk::{contract, contractimpl, contracttype, Env, String, Symbol};

#[contract]
pub struct NameRegistry;

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Name -> pool id
    Entry(String),
}

// TTL constants
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

#[contractimpl]
impl NameRegistry {
    /// Check whether a name is already taken
    pub fn exists(env: Env, name: String) -> bool {
        env.storage().persistent().has(&DataKey::Entry(name))
    }

    /// Reserve a name for a pool. Fails if the name is taken.
    pub fn register(env: Env, name: String, pool_id: u32) {
        let key = DataKey::Entry(name.clone());
        if env.storage().persistent().has(&key) {
            panic!("Name already registered");
        }

        env.storage().persistent().set(&key, &pool_id);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);

        env.events()
            .publish((Symbol::new(&env, "name_registered"),), (name, pool_id));
    }

    /// Look up the pool id reserved under a name
    pub fn lookup(env: Env, name: String) -> Option<u32> {
        env.storage().persistent().get(&DataKey::Entry(name))
    }
}
