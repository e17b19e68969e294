// Pool manager error module for KelpSwap

use kelpswap_protocol_fee::ProtocolFeeCannotBeFetched;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolManagerError {
    // Pool lifecycle errors (100-199)
    PoolAlreadyInitialized = 100,
    PoolNotInitialized = 101,

    // Pool key errors (200-299)
    CurrenciesOutOfOrder = 200,
    IdenticalCurrencies = 201,
    FeeTooLarge = 202,
    NotDynamicFee = 203,

    // Protocol fee errors (300-399)
    ProtocolFeeCannotBeFetched = 300,
    ProtocolFeeControllerCallFailed = 301,

    // Collection errors (400-499)
    InvalidProtocolFeeCollector = 400,
    InsufficientProtocolFees = 401,
    InvalidAmount = 402,

    // Swap errors (500-599)
    SwapAmountTooSmall = 500,
    NoLiquidity = 501,
    SlippageExceeded = 502,
    OutputTooSmall = 503,

    // Math errors (600-699)
    Overflow = 600,
}

impl From<ProtocolFeeCannotBeFetched> for PoolManagerError {
    fn from(_: ProtocolFeeCannotBeFetched) -> Self {
        PoolManagerError::ProtocolFeeCannotBeFetched
    }
}

/// Panic messages for invariant violations
pub struct ErrorMsg;

impl ErrorMsg {
    pub const ACCRUED_FEE_OVERFLOW: &'static str = "accrued protocol fee overflow";
    pub const MANAGER_NOT_CONFIGURED: &'static str = "pool manager not configured";
}
