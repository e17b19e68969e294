// Constant-product settlement
//
// amount_out = reserve_out * in_after_fee / (reserve_in + in_after_fee)
// The LP share of the fee stays in reserves; the protocol share leaves them
// and is credited to the fee ledger by the caller.

use kelpswap_protocol_fee::{split_swap_fee, MIN_SWAP_AMOUNT, PIPS_DENOMINATOR};

use crate::error::PoolManagerError;
use crate::types::PoolState;

/// Fully computed swap, not yet applied to storage
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub amount_out: i128,
    pub lp_fee_amount: i128,
    pub protocol_fee_amount: i128,
    pub reserve0: i128,
    pub reserve1: i128,
}

/// LP fee on a swap input in pips, rounded up
pub fn lp_fee_amount(amount_in: i128, lp_fee: u32) -> Result<i128, PoolManagerError> {
    if lp_fee == 0 {
        return Ok(0);
    }
    let denominator = PIPS_DENOMINATOR as i128;
    let numerator = amount_in
        .checked_mul(lp_fee as i128)
        .ok_or(PoolManagerError::Overflow)?;
    let fee = numerator / denominator;
    Ok(if numerator % denominator != 0 { fee + 1 } else { fee })
}

/// Quote a swap against the pool's reserves with the pool's protocol fee
pub fn quote_swap(
    state: &PoolState,
    zero_for_one: bool,
    amount_in: i128,
    protocol_fee: u16,
) -> Result<SwapQuote, PoolManagerError> {
    if amount_in < MIN_SWAP_AMOUNT {
        return Err(PoolManagerError::SwapAmountTooSmall);
    }

    let (reserve_in, reserve_out) = if zero_for_one {
        (state.reserve0, state.reserve1)
    } else {
        (state.reserve1, state.reserve0)
    };
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(PoolManagerError::NoLiquidity);
    }

    let lp_fee = lp_fee_amount(amount_in, state.lp_fee)?.min(amount_in);
    let (_lp_share, protocol_share) = split_swap_fee(lp_fee, zero_for_one, protocol_fee);
    let in_after_fee = amount_in - lp_fee;

    let numerator = reserve_out
        .checked_mul(in_after_fee)
        .ok_or(PoolManagerError::Overflow)?;
    let denominator = reserve_in
        .checked_add(in_after_fee)
        .ok_or(PoolManagerError::Overflow)?;
    let amount_out = numerator / denominator;

    if amount_out <= 0 || amount_out >= reserve_out {
        return Err(PoolManagerError::OutputTooSmall);
    }

    let new_reserve_in = reserve_in
        .checked_add(amount_in - protocol_share)
        .ok_or(PoolManagerError::Overflow)?;
    let new_reserve_out = reserve_out - amount_out;

    let (reserve0, reserve1) = if zero_for_one {
        (new_reserve_in, new_reserve_out)
    } else {
        (new_reserve_out, new_reserve_in)
    };

    Ok(SwapQuote {
        amount_out,
        lp_fee_amount: lp_fee,
        protocol_fee_amount: protocol_share,
        reserve0,
        reserve1,
    })
}
