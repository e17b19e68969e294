// Protocol fee ledger
//
// Per-pool protocol fee register plus per-currency accrued balances.
// Accrued balances only ever hold fees that were withheld and are still
// in the manager's custody.

use soroban_sdk::{Address, Env};

use crate::error::{ErrorMsg, PoolManagerError};
use crate::storage::{
    read_pool_state, read_protocol_fees_accrued, write_pool_state, write_protocol_fees_accrued,
};
use crate::types::PoolKey;

/// Protocol fee register of a pool, 0 if the pool does not exist or the
/// stored word does not fit 16 bits
pub fn get_fee(env: &Env, key: &PoolKey) -> u16 {
    read_pool_state(env, key)
        .and_then(|state| u16::try_from(state.protocol_fee).ok())
        .unwrap_or(0)
}

/// Rewrite the protocol fee register of an initialized pool
pub fn set_fee(env: &Env, key: &PoolKey, fee_packed: u16) -> Result<(), PoolManagerError> {
    let mut state = read_pool_state(env, key).ok_or(PoolManagerError::PoolNotInitialized)?;
    state.protocol_fee = u32::from(fee_packed);
    write_pool_state(env, key, &state);
    Ok(())
}

/// Accrued protocol fees for a currency
pub fn accrued(env: &Env, currency: &Address) -> i128 {
    read_protocol_fees_accrued(env, currency)
}

/// Credit withheld protocol fees.
///
/// # Panics
/// On overflow. Balances are bounded by token supply, so this is an
/// invariant violation rather than a user error.
pub fn accrue(env: &Env, currency: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    let balance = read_protocol_fees_accrued(env, currency)
        .checked_add(amount)
        .unwrap_or_else(|| panic!("{}", ErrorMsg::ACCRUED_FEE_OVERFLOW));
    write_protocol_fees_accrued(env, currency, balance);
}

/// Remove collected protocol fees; never partial.
pub fn debit(env: &Env, currency: &Address, amount: i128) -> Result<(), PoolManagerError> {
    let balance = read_protocol_fees_accrued(env, currency);
    if amount < 0 {
        return Err(PoolManagerError::InvalidAmount);
    }
    if amount > balance {
        return Err(PoolManagerError::InsufficientProtocolFees);
    }
    write_protocol_fees_accrued(env, currency, balance - amount);
    Ok(())
}
