mod common;

use soroban_sdk::{testutils::Address as _, Address, Env};
use kelpswap_pool_manager::{PoolKey, PoolManagerError};
use kelpswap_protocol_fee::{DYNAMIC_FEE_FLAG, MAX_LP_FEE};

#[test]
fn test_initialize_without_controller() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, owner) = common::setup_manager(&env);
    let key = common::new_pool_key(&env, common::DEFAULT_LP_FEE);

    assert_eq!(client.owner(), owner);
    assert_eq!(client.protocol_fee_controller(), None);

    let fee = client.initialize(&key);
    assert_eq!(fee, 0);
    assert!(client.is_initialized(&key));

    let state = client.get_pool_state(&key).unwrap();
    assert_eq!(state.protocol_fee, 0);
    assert_eq!(state.lp_fee, common::DEFAULT_LP_FEE);
    assert_eq!(state.reserve0, 0);
    assert_eq!(state.reserve1, 0);
}

#[test]
fn test_uninitialized_pool_reads_zero_fee() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    let key = common::new_pool_key(&env, common::DEFAULT_LP_FEE);

    assert_eq!(client.get_protocol_fee(&key), 0);
    assert!(!client.is_initialized(&key));
    assert!(client.get_pool_state(&key).is_none());
}

#[test]
fn test_pool_key_sorts_currencies() {
    let env = Env::default();

    let a = common::create_token(&env);
    let b = common::create_token(&env);
    let manager = Address::generate(&env);

    let key_ab = PoolKey::new(a.clone(), b.clone(), manager.clone(), 500);
    let key_ba = PoolKey::new(b, a, manager, 500);

    assert_eq!(key_ab, key_ba);
    assert!(key_ab.currency0 < key_ab.currency1);
}

#[test]
fn test_double_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    let key = common::new_pool_key(&env, common::DEFAULT_LP_FEE);

    client.initialize(&key);
    assert_eq!(
        client.try_initialize(&key),
        Err(Ok(PoolManagerError::PoolAlreadyInitialized))
    );
}

#[test]
fn test_currencies_out_of_order() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    let sorted = common::new_pool_key(&env, common::DEFAULT_LP_FEE);
    let key = PoolKey {
        currency0: sorted.currency1.clone(),
        currency1: sorted.currency0.clone(),
        manager: sorted.manager.clone(),
        fee: sorted.fee,
    };

    assert_eq!(
        client.try_initialize(&key),
        Err(Ok(PoolManagerError::CurrenciesOutOfOrder))
    );
}

#[test]
fn test_identical_currencies() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    let token = common::create_token(&env);
    let key = PoolKey {
        currency0: token.clone(),
        currency1: token,
        manager: Address::generate(&env),
        fee: common::DEFAULT_LP_FEE,
    };

    assert_eq!(
        client.try_initialize(&key),
        Err(Ok(PoolManagerError::IdenticalCurrencies))
    );
}

#[test]
fn test_fee_tier_too_large() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    let key = common::new_pool_key(&env, MAX_LP_FEE + 1);

    assert_eq!(
        client.try_initialize(&key),
        Err(Ok(PoolManagerError::FeeTooLarge))
    );
}

#[test]
fn test_max_fee_tier_accepted() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    let key = common::new_pool_key(&env, MAX_LP_FEE);

    client.initialize(&key);
    assert_eq!(client.get_pool_state(&key).unwrap().lp_fee, MAX_LP_FEE);
}

// ============================================================
// DYNAMIC FEE POOLS
// ============================================================

#[test]
fn test_dynamic_fee_pool_starts_at_zero_lp_fee() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    // nominal 3_000 is advisory only
    let key = common::new_pool_key(&env, DYNAMIC_FEE_FLAG | 3_000);

    client.initialize(&key);
    assert_eq!(client.get_pool_state(&key).unwrap().lp_fee, 0);

    client.update_dynamic_lp_fee(&key, &5_000);
    assert_eq!(client.get_pool_state(&key).unwrap().lp_fee, 5_000);
}

#[test]
fn test_dynamic_lp_fee_bounded() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    let key = common::new_pool_key(&env, DYNAMIC_FEE_FLAG);
    client.initialize(&key);

    assert_eq!(
        client.try_update_dynamic_lp_fee(&key, &(MAX_LP_FEE + 1)),
        Err(Ok(PoolManagerError::FeeTooLarge))
    );
}

#[test]
fn test_static_pool_rejects_dynamic_lp_fee() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    let key = common::new_pool_key(&env, common::DEFAULT_LP_FEE);
    client.initialize(&key);

    assert_eq!(
        client.try_update_dynamic_lp_fee(&key, &100),
        Err(Ok(PoolManagerError::NotDynamicFee))
    );
}

#[test]
#[should_panic]
fn test_only_pool_manager_sets_dynamic_lp_fee() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = common::setup_manager(&env);
    let key = common::new_pool_key(&env, DYNAMIC_FEE_FLAG);
    client.initialize(&key);

    env.mock_auths(&[]);
    client.update_dynamic_lp_fee(&key, &100);
}
