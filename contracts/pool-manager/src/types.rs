// Pool Manager Types

use soroban_sdk::{contracttype, Address};

pub use kelpswap_protocol_fee::PoolKey;

// ============================================================
// MANAGER CONFIG
// ============================================================

#[contracttype]
#[derive(Clone, Debug)]
pub struct ManagerConfig {
    /// Privileged owner: sets the controller, may collect protocol fees
    pub owner: Address,
    /// Untrusted fee controller; None means new pools get no protocol fee
    pub protocol_fee_controller: Option<Address>,
}

// ============================================================
// POOL STATE
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Currency0 reserve backing swaps (excludes accrued protocol fees)
    pub reserve0: i128,
    /// Currency1 reserve backing swaps
    pub reserve1: i128,
    /// Packed protocol fee `fee0 | fee1 << 8` (upper 16 bits always zero)
    pub protocol_fee: u32,
    /// Effective LP fee in pips
    pub lp_fee: u32,
}

// ============================================================
// SWAP RESULT
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapResult {
    pub amount_in: i128,
    pub amount_out: i128,
    /// Total LP fee taken from the input
    pub lp_fee_amount: i128,
    /// Part of the LP fee withheld for the protocol
    pub protocol_fee_amount: i128,
}
