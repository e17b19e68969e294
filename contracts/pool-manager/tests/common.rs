use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Env};
use kelpswap_pool_manager::{KelpPoolManager, KelpPoolManagerClient, PoolKey};

// Test constants
pub const DEFAULT_LP_FEE: u32 = 3_000; // 0.30%
pub const INITIAL_RESERVE: i128 = 1_000_000_000;
pub const SWAP_AMOUNT: i128 = 10_000_000;

/// Deploy a pool manager owned by a fresh address
pub fn setup_manager(env: &Env) -> (KelpPoolManagerClient<'_>, Address) {
    let owner = Address::generate(env);
    let manager_id = env.register(KelpPoolManager, (owner.clone(),));
    let client = KelpPoolManagerClient::new(env, &manager_id);
    (client, owner)
}

/// Create a test token
pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, who: &Address) -> i128 {
    soroban_sdk::token::Client::new(env, token).balance(who)
}

/// Pool key over two fresh tokens with the given fee tier
pub fn new_pool_key(env: &Env, fee: u32) -> PoolKey {
    PoolKey::new(create_token(env), create_token(env), Address::generate(env), fee)
}

/// Register a controller that returns `fee` for every pool
pub fn register_fixed_controller(env: &Env, fee: u32) -> Address {
    let id = env.register(fixed_fee::FixedFeeController, ());
    fixed_fee::FixedFeeControllerClient::new(env, &id).set_fee(&fee);
    id
}

/// Manager + controller + initialized pool with reserves
pub fn setup_funded_pool(
    env: &Env,
    controller_fee: u32,
) -> (KelpPoolManagerClient<'_>, Address, Address, PoolKey) {
    let (client, owner) = setup_manager(env);
    let controller = register_fixed_controller(env, controller_fee);
    client.set_protocol_fee_controller(&Some(controller.clone()));

    let key = new_pool_key(env, DEFAULT_LP_FEE);
    client.initialize(&key);

    let provider = Address::generate(env);
    mint_tokens(env, &key.currency0, &provider, INITIAL_RESERVE);
    mint_tokens(env, &key.currency1, &provider, INITIAL_RESERVE);
    client.add_liquidity(&provider, &key, &INITIAL_RESERVE, &INITIAL_RESERVE);

    (client, owner, controller, key)
}

/// Mint the input and swap from a fresh trader
pub fn swap_from_new_trader(
    env: &Env,
    client: &KelpPoolManagerClient<'_>,
    key: &PoolKey,
    zero_for_one: bool,
    amount_in: i128,
) -> kelpswap_pool_manager::SwapResult {
    let trader = Address::generate(env);
    let currency_in = if zero_for_one { &key.currency0 } else { &key.currency1 };
    mint_tokens(env, currency_in, &trader, amount_in);
    client.swap(&trader, key, &zero_for_one, &amount_in, &0)
}

// ============================================================
// MOCK CONTROLLERS
// ============================================================

pub mod fixed_fee {
    use soroban_sdk::{contract, contractimpl, contracttype, Env};
    use kelpswap_pool_manager::PoolKey;

    #[contracttype]
    pub enum DataKey {
        Fee,
    }

    #[contract]
    pub struct FixedFeeController;

    #[contractimpl]
    impl FixedFeeController {
        pub fn set_fee(env: Env, fee: u32) {
            env.storage().instance().set(&DataKey::Fee, &fee);
        }

        pub fn protocol_fee_for_pool(env: Env, _key: PoolKey) -> u32 {
            env.storage().instance().get(&DataKey::Fee).unwrap_or(0)
        }
    }
}

pub mod reverting {
    use soroban_sdk::{contract, contractimpl, Env};
    use kelpswap_pool_manager::PoolKey;

    #[contract]
    pub struct RevertingController;

    #[contractimpl]
    impl RevertingController {
        pub fn protocol_fee_for_pool(_env: Env, _key: PoolKey) -> u32 {
            panic!("controller unavailable")
        }
    }
}

pub mod malformed {
    use soroban_sdk::{contract, contractimpl, symbol_short, Env, Symbol};
    use kelpswap_pool_manager::PoolKey;

    #[contract]
    pub struct MalformedController;

    #[contractimpl]
    impl MalformedController {
        pub fn protocol_fee_for_pool(_env: Env, _key: PoolKey) -> Symbol {
            symbol_short!("TEN_PCT")
        }
    }
}

pub mod wide {
    use soroban_sdk::{contract, contractimpl, Env};
    use kelpswap_pool_manager::PoolKey;

    #[contract]
    pub struct WideController;

    #[contractimpl]
    impl WideController {
        /// Right value, wider type than the interface declares
        pub fn protocol_fee_for_pool(_env: Env, _key: PoolKey) -> u64 {
            0x0A0A
        }
    }
}

pub mod missing {
    use soroban_sdk::{contract, contractimpl, Env};

    #[contract]
    pub struct NoLookupController;

    #[contractimpl]
    impl NoLookupController {
        pub fn version(_env: Env) -> u32 {
            1
        }
    }
}

pub mod burning {
    use soroban_sdk::{contract, contractimpl, Bytes, Env};
    use kelpswap_pool_manager::PoolKey;

    #[contract]
    pub struct BurningController;

    #[contractimpl]
    impl BurningController {
        /// Hashes until the invocation budget runs out
        pub fn protocol_fee_for_pool(env: Env, _key: PoolKey) -> u32 {
            let data = Bytes::from_array(&env, &[7u8; 1024]);
            loop {
                env.crypto().sha256(&data);
            }
        }
    }
}
