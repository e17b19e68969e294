use soroban_sdk::{contracttype, Address};

use crate::constants::{DYNAMIC_FEE_FLAG, FEE_FLAGS_MASK};

// ============================================================
// POOL KEY
// ============================================================

/// Identifies a pool. Immutable once the pool is initialized.
///
/// Fee tier layout (24-bit word, in pips):
/// - bits 0..20: nominal LP fee
/// - bits 20..24: reserved flags (`0x80_0000` = dynamic fee)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolKey {
    /// Numerically lower currency
    pub currency0: Address,
    /// Numerically higher currency
    pub currency1: Address,
    /// Managing authority of the pool
    pub manager: Address,
    /// LP fee tier with flag bits
    pub fee: u32,
}

impl PoolKey {
    /// Build a key with currencies in canonical order
    pub fn new(currency_a: Address, currency_b: Address, manager: Address, fee: u32) -> Self {
        let (currency0, currency1) = if currency_a < currency_b {
            (currency_a, currency_b)
        } else {
            (currency_b, currency_a)
        };
        Self {
            currency0,
            currency1,
            manager,
            fee,
        }
    }

    #[inline]
    pub fn is_dynamic_fee(&self) -> bool {
        self.fee & DYNAMIC_FEE_FLAG != 0
    }

    /// Nominal LP fee with flag bits stripped
    #[inline]
    pub fn static_fee(&self) -> u32 {
        self.fee & !FEE_FLAGS_MASK
    }
}
