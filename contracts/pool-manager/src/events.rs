//! Pool manager events

use soroban_sdk::{Address, Env, Symbol};

use crate::types::PoolKey;

/// Emitted when a pool is initialized
pub fn emit_initialize(env: &Env, key: &PoolKey, protocol_fee: u32, lp_fee: u32) {
    env.events().publish(
        (Symbol::new(env, "Initialize"),),
        (
            key.currency0.clone(),
            key.currency1.clone(),
            key.manager.clone(),
            key.fee,
            protocol_fee,
            lp_fee,
        ),
    );
}

/// Emitted when liquidity is added to a pool
pub fn emit_add_liquidity(env: &Env, key: &PoolKey, provider: &Address, amount0: i128, amount1: i128) {
    env.events().publish(
        (Symbol::new(env, "AddLiquidity"), provider.clone()),
        (key.currency0.clone(), key.currency1.clone(), amount0, amount1),
    );
}

/// Emitted on every settled swap
pub fn emit_swap(
    env: &Env,
    key: &PoolKey,
    sender: &Address,
    zero_for_one: bool,
    amount_in: i128,
    amount_out: i128,
    protocol_fee_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "Swap"), sender.clone()),
        (
            key.currency0.clone(),
            key.currency1.clone(),
            zero_for_one,
            amount_in,
            amount_out,
            protocol_fee_amount,
        ),
    );
}

/// Emitted when a pool's protocol fee register is rewritten
pub fn emit_protocol_fee_updated(env: &Env, key: &PoolKey, protocol_fee: u32) {
    env.events().publish(
        (Symbol::new(env, "ProtocolFeeUpdated"),),
        (key.currency0.clone(), key.currency1.clone(), key.fee, protocol_fee),
    );
}

/// Emitted when a dynamic-fee pool's LP fee changes
pub fn emit_dynamic_lp_fee_updated(env: &Env, key: &PoolKey, lp_fee: u32) {
    env.events().publish(
        (Symbol::new(env, "DynamicLpFeeUpdated"),),
        (key.currency0.clone(), key.currency1.clone(), lp_fee),
    );
}

/// Emitted when the protocol fee controller reference changes
pub fn emit_protocol_fee_controller_updated(env: &Env, controller: &Option<Address>) {
    env.events().publish(
        (Symbol::new(env, "ProtocolFeeControllerUpdated"),),
        (controller.clone(),),
    );
}

/// Emitted when accrued protocol fees leave custody
pub fn emit_protocol_fees_collected(
    env: &Env,
    collector: &Address,
    recipient: &Address,
    currency: &Address,
    amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "ProtocolFeesCollected"), currency.clone()),
        (collector.clone(), recipient.clone(), amount),
    );
}

/// Emitted when ownership changes
pub fn emit_owner_updated(env: &Env, old_owner: &Address, new_owner: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnerUpdated"),),
        (old_owner.clone(), new_owner.clone()),
    );
}
