// Pool manager storage module for KelpSwap

use soroban_sdk::{contracttype, Address, Env};

use crate::error::ErrorMsg;
use crate::types::{ManagerConfig, PoolKey, PoolState};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Manager configuration (instance)
    Config,
    /// Pool state by key
    Pool(PoolKey),
    /// Accrued protocol fees by currency
    ProtocolFeesAccrued(Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

const INSTANCE_LIFETIME: u32 = 6_307_200;
const INSTANCE_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME, INSTANCE_BUMP);
}

// ============================================================
// MANAGER CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &ManagerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

pub fn read_config(env: &Env) -> ManagerConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic!("{}", ErrorMsg::MANAGER_NOT_CONFIGURED))
}

// ============================================================
// POOL STATE
// ============================================================

pub fn pool_exists(env: &Env, key: &PoolKey) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Pool(key.clone()))
}

pub fn read_pool_state(env: &Env, key: &PoolKey) -> Option<PoolState> {
    env.storage()
        .persistent()
        .get(&DataKey::Pool(key.clone()))
}

pub fn write_pool_state(env: &Env, key: &PoolKey, state: &PoolState) {
    let data_key = DataKey::Pool(key.clone());
    env.storage().persistent().set(&data_key, state);
    extend_ttl(env, &data_key);
}

// ============================================================
// ACCRUED PROTOCOL FEES
// ============================================================

pub fn read_protocol_fees_accrued(env: &Env, currency: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::ProtocolFeesAccrued(currency.clone()))
        .unwrap_or(0)
}

pub fn write_protocol_fees_accrued(env: &Env, currency: &Address, amount: i128) {
    let data_key = DataKey::ProtocolFeesAccrued(currency.clone());
    env.storage().persistent().set(&data_key, &amount);
    extend_ttl(env, &data_key);
}
