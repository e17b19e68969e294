use soroban_sdk::{contractclient, Env};

use crate::types::PoolKey;

/// Interface a protocol fee controller contract exposes.
///
/// The pool manager treats every implementation as untrusted: it may panic,
/// burn compute, or return a value of the wrong width or type.
#[contractclient(name = "ProtocolFeeControllerClient")]
pub trait ProtocolFeeControllerInterface {
    /// Proposed packed protocol fee (`fee0 | fee1 << 8`) for a pool
    fn protocol_fee_for_pool(env: Env, key: PoolKey) -> u32;
}
