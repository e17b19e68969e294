#![no_std]

//! # KelpSwap Pool Manager
//!
//! Singleton manager for every KelpSwap pool, keyed by `PoolKey`.
//!
//! ## Responsibilities:
//! 1. Pool initialization with a controller-supplied protocol fee
//! 2. Swap settlement with protocol fee withholding
//! 3. Accrued protocol fee custody and collection
//! 4. Protocol fee controller administration

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

use kelpswap_protocol_fee::MAX_LP_FEE;

mod controller;
mod curve;
mod error;
mod events;
mod ledger;
mod storage;
mod types;

pub use error::PoolManagerError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct KelpPoolManager;

#[contractimpl]
impl KelpPoolManager {
    /// Deploy with an owner and no protocol fee controller
    pub fn __constructor(env: Env, owner: Address) {
        write_config(
            &env,
            &ManagerConfig {
                owner,
                protocol_fee_controller: None,
            },
        );
    }

    // ========================================================
    // POOL LIFECYCLE
    // ========================================================

    /// Initialize a pool and fix its protocol fee from the controller.
    ///
    /// Controller failures leave the pool with protocol fee 0; only a
    /// starved lookup fails the call.
    ///
    /// # Returns
    /// The stored protocol fee
    pub fn initialize(env: Env, key: PoolKey) -> Result<u32, PoolManagerError> {
        Self::validate_pool_key(&key)?;

        if pool_exists(&env, &key) {
            return Err(PoolManagerError::PoolAlreadyInitialized);
        }

        let config = read_config(&env);
        let protocol_fee =
            controller::fetch_protocol_fee(&env, config.protocol_fee_controller.as_ref(), &key)?
                .unwrap_or(0);

        // Dynamic pools start at 0 until the manager sets a fee
        let lp_fee = if key.is_dynamic_fee() {
            0
        } else {
            key.static_fee()
        };

        write_pool_state(
            &env,
            &key,
            &PoolState {
                lp_fee,
                ..PoolState::default()
            },
        );
        ledger::set_fee(&env, &key, protocol_fee)?;

        emit_initialize(&env, &key, u32::from(protocol_fee), lp_fee);

        Ok(u32::from(protocol_fee))
    }

    /// Deposit both currencies into a pool's reserves.
    ///
    /// Reserves only back swaps; there are no position shares and deposits
    /// cannot be withdrawn.
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        key: PoolKey,
        amount0: i128,
        amount1: i128,
    ) -> Result<(), PoolManagerError> {
        provider.require_auth();

        if amount0 < 0 || amount1 < 0 || (amount0 == 0 && amount1 == 0) {
            return Err(PoolManagerError::InvalidAmount);
        }

        let mut state = read_pool_state(&env, &key).ok_or(PoolManagerError::PoolNotInitialized)?;
        state.reserve0 = state
            .reserve0
            .checked_add(amount0)
            .ok_or(PoolManagerError::Overflow)?;
        state.reserve1 = state
            .reserve1
            .checked_add(amount1)
            .ok_or(PoolManagerError::Overflow)?;
        write_pool_state(&env, &key, &state);

        let manager = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(&env, &key.currency0).transfer(&provider, &manager, &amount0);
        }
        if amount1 > 0 {
            token::Client::new(&env, &key.currency1).transfer(&provider, &manager, &amount1);
        }

        emit_add_liquidity(&env, &key, &provider, amount0, amount1);

        Ok(())
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Swap an exact input amount.
    ///
    /// The protocol share of the LP fee is credited to the ledger in the
    /// same invocation, before any token moves.
    pub fn swap(
        env: Env,
        sender: Address,
        key: PoolKey,
        zero_for_one: bool,
        amount_in: i128,
        amount_out_min: i128,
    ) -> Result<SwapResult, PoolManagerError> {
        sender.require_auth();

        let mut state = read_pool_state(&env, &key).ok_or(PoolManagerError::PoolNotInitialized)?;
        let protocol_fee = ledger::get_fee(&env, &key);

        let quote = curve::quote_swap(&state, zero_for_one, amount_in, protocol_fee)?;
        if quote.amount_out < amount_out_min {
            return Err(PoolManagerError::SlippageExceeded);
        }

        let (currency_in, currency_out) = if zero_for_one {
            (&key.currency0, &key.currency1)
        } else {
            (&key.currency1, &key.currency0)
        };

        state.reserve0 = quote.reserve0;
        state.reserve1 = quote.reserve1;
        write_pool_state(&env, &key, &state);
        ledger::accrue(&env, currency_in, quote.protocol_fee_amount);

        let manager = env.current_contract_address();
        token::Client::new(&env, currency_in).transfer(&sender, &manager, &amount_in);
        token::Client::new(&env, currency_out).transfer(&manager, &sender, &quote.amount_out);

        emit_swap(
            &env,
            &key,
            &sender,
            zero_for_one,
            amount_in,
            quote.amount_out,
            quote.protocol_fee_amount,
        );

        Ok(SwapResult {
            amount_in,
            amount_out: quote.amount_out,
            lp_fee_amount: quote.lp_fee_amount,
            protocol_fee_amount: quote.protocol_fee_amount,
        })
    }

    // ========================================================
    // FEE MANAGEMENT
    // ========================================================

    /// Re-fetch a pool's protocol fee from the current controller.
    ///
    /// Unlike `initialize`, a controller fault or an invalid fee fails the
    /// call and the stored fee is kept. With no controller registered the
    /// fee is reset to 0.
    pub fn refresh_protocol_fee(env: Env, key: PoolKey) -> Result<u32, PoolManagerError> {
        if !pool_exists(&env, &key) {
            return Err(PoolManagerError::PoolNotInitialized);
        }

        let config = read_config(&env);
        let protocol_fee =
            controller::fetch_protocol_fee(&env, config.protocol_fee_controller.as_ref(), &key)?
                .ok_or(PoolManagerError::ProtocolFeeControllerCallFailed)?;
        ledger::set_fee(&env, &key, protocol_fee)?;

        emit_protocol_fee_updated(&env, &key, u32::from(protocol_fee));

        Ok(u32::from(protocol_fee))
    }

    /// Set the LP fee of a dynamic-fee pool (pool manager only)
    pub fn update_dynamic_lp_fee(env: Env, key: PoolKey, lp_fee: u32) -> Result<(), PoolManagerError> {
        key.manager.require_auth();

        if !key.is_dynamic_fee() {
            return Err(PoolManagerError::NotDynamicFee);
        }
        if lp_fee > MAX_LP_FEE {
            return Err(PoolManagerError::FeeTooLarge);
        }

        let mut state = read_pool_state(&env, &key).ok_or(PoolManagerError::PoolNotInitialized)?;
        state.lp_fee = lp_fee;
        write_pool_state(&env, &key, &state);

        emit_dynamic_lp_fee_updated(&env, &key, lp_fee);

        Ok(())
    }

    /// Withdraw accrued protocol fees.
    ///
    /// `caller` must be the owner or the registered controller.
    /// `amount == 0` collects the whole accrued balance.
    ///
    /// # Returns
    /// Amount transferred to `recipient`
    pub fn collect_protocol_fees(
        env: Env,
        caller: Address,
        recipient: Address,
        currency: Address,
        amount: i128,
    ) -> Result<i128, PoolManagerError> {
        caller.require_auth();

        let config = read_config(&env);
        let is_controller = config.protocol_fee_controller.as_ref() == Some(&caller);
        if caller != config.owner && !is_controller {
            return Err(PoolManagerError::InvalidProtocolFeeCollector);
        }

        if amount < 0 {
            return Err(PoolManagerError::InvalidAmount);
        }
        let amount_collected = if amount == 0 {
            ledger::accrued(&env, &currency)
        } else {
            amount
        };

        // Debit before the transfer
        ledger::debit(&env, &currency, amount_collected)?;

        if amount_collected > 0 {
            token::Client::new(&env, &currency).transfer(
                &env.current_contract_address(),
                &recipient,
                &amount_collected,
            );
        }

        log!(&env, "protocol fees collected", currency.clone(), amount_collected);
        emit_protocol_fees_collected(&env, &caller, &recipient, &currency, amount_collected);

        Ok(amount_collected)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Replace the protocol fee controller (owner only).
    ///
    /// Already-initialized pools keep their stored fee.
    pub fn set_protocol_fee_controller(env: Env, controller: Option<Address>) {
        let mut config = read_config(&env);
        config.owner.require_auth();

        config.protocol_fee_controller = controller;
        write_config(&env, &config);

        emit_protocol_fee_controller_updated(&env, &config.protocol_fee_controller);
    }

    /// Transfer ownership. Both old and new owner must authorize.
    pub fn set_owner(env: Env, new_owner: Address) {
        let mut config = read_config(&env);
        config.owner.require_auth();
        new_owner.require_auth();

        emit_owner_updated(&env, &config.owner, &new_owner);

        config.owner = new_owner;
        write_config(&env, &config);
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn owner(env: Env) -> Address {
        read_config(&env).owner
    }

    pub fn protocol_fee_controller(env: Env) -> Option<Address> {
        read_config(&env).protocol_fee_controller
    }

    /// Stored protocol fee of a pool, 0 if not initialized
    pub fn get_protocol_fee(env: Env, key: PoolKey) -> u32 {
        u32::from(ledger::get_fee(&env, &key))
    }

    /// Protocol fees accrued and not yet collected for a currency
    pub fn protocol_fees_accrued(env: Env, currency: Address) -> i128 {
        ledger::accrued(&env, &currency)
    }

    pub fn get_pool_state(env: Env, key: PoolKey) -> Option<PoolState> {
        read_pool_state(&env, &key)
    }

    pub fn is_initialized(env: Env, key: PoolKey) -> bool {
        pool_exists(&env, &key)
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn validate_pool_key(key: &PoolKey) -> Result<(), PoolManagerError> {
        if key.currency0 == key.currency1 {
            return Err(PoolManagerError::IdenticalCurrencies);
        }
        if key.currency0 > key.currency1 {
            return Err(PoolManagerError::CurrenciesOutOfOrder);
        }
        if !key.is_dynamic_fee() && key.static_fee() > MAX_LP_FEE {
            return Err(PoolManagerError::FeeTooLarge);
        }
        Ok(())
    }
}
