// ============================================================
// PROTOCOL FEE CONSTANTS
// ============================================================

/// Smallest nonzero sub-fee denominator accepted (1/4 = 25% cap)
pub const MIN_PROTOCOL_FEE_DENOMINATOR: u8 = 4;

/// Compute allowance granted to the fee controller lookup.
/// A caller left with less than this after a failed lookup was starved.
pub const CONTROLLER_GAS_BUDGET: u64 = 500_000;

// ============================================================
// LP FEE CONSTANTS (pips: 1_000_000 = 100%)
// ============================================================

/// Maximum static LP fee (100%)
pub const MAX_LP_FEE: u32 = 1_000_000;

/// Pip denominator for LP fee math
pub const PIPS_DENOMINATOR: u32 = 1_000_000;

/// Reserved flag bits at the top of the 24-bit fee word
pub const FEE_FLAGS_MASK: u32 = 0xF0_0000;

/// Nominal fee is advisory; the pool manager sets the effective LP fee
pub const DYNAMIC_FEE_FLAG: u32 = 0x80_0000;

// ============================================================
// SWAP CONSTANTS
// ============================================================

/// Minimum amount for a swap
pub const MIN_SWAP_AMOUNT: i128 = 1;
