use crate::codec::decode;

/// Protocol fee charged on each side of a swap.
///
/// For side `i` with sub-fee `fee_i`: 0 when `fee_i == 0`, else
/// `amount_i / fee_i` rounded toward zero. Negative amounts are never charged.
pub fn apply_fee(amount0: i128, amount1: i128, fee_packed: u16) -> (i128, i128) {
    let (fee0, fee1) = decode(fee_packed);
    (charge(amount0, fee0), charge(amount1, fee1))
}

#[inline]
fn charge(amount: i128, fee: u8) -> i128 {
    if fee == 0 || amount <= 0 {
        0
    } else {
        amount / fee as i128
    }
}

/// Split the LP fee of one swap between liquidity providers and the protocol.
///
/// Returns `(lp_share, protocol_share)` in the input currency. The protocol
/// share is `apply_fee` over the side matching the swap direction.
pub fn split_swap_fee(lp_fee: i128, zero_for_one: bool, fee_packed: u16) -> (i128, i128) {
    let (charged0, charged1) = if zero_for_one {
        apply_fee(lp_fee, 0, fee_packed)
    } else {
        apply_fee(0, lp_fee, fee_packed)
    };
    let protocol = charged0 + charged1;
    (lp_fee - protocol, protocol)
}
