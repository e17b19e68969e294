// Protocol fee packing
//
// A protocol fee is one 16-bit word: `fee0 | (fee1 << 8)`.
// Each nonzero sub-fee is a denominator: 4 withholds 1/4 (25%).

/// Split a packed protocol fee into `(fee0, fee1)`
#[inline]
pub fn decode(fee_packed: u16) -> (u8, u8) {
    ((fee_packed % 256) as u8, (fee_packed / 256) as u8)
}

/// Pack two sub-fees into one protocol fee word
#[inline]
pub fn encode(fee0: u8, fee1: u8) -> u16 {
    (fee0 as u16) | ((fee1 as u16) << 8)
}

/// True iff every sub-fee is either disabled (0) or at least `min_denominator`
#[inline]
pub fn validate(fee0: u8, fee1: u8, min_denominator: u8) -> bool {
    let ok = |fee: u8| fee == 0 || fee >= min_denominator;
    ok(fee0) && ok(fee1)
}

/// Returns `fee_packed` if both sides are valid, otherwise 0.
///
/// Never applies one side alone: a controller that sets one valid and one
/// invalid sub-fee gets no protocol fee at all.
pub fn normalize(fee_packed: u16, min_denominator: u8) -> u16 {
    let (fee0, fee1) = decode(fee_packed);
    if validate(fee0, fee1, min_denominator) {
        fee_packed
    } else {
        0
    }
}
