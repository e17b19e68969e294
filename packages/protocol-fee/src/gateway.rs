// Controller response normalization
//
// The host performs the bounded call and reports what happened as a
// `ControllerCall`. Everything except caller starvation resolves to a
// definite fee; the controller's failure never reaches the caller.

/// Outcome of one bounded call to the protocol fee controller
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControllerCall {
    /// Controller returned a single integer word
    Returned(u64),
    /// Controller panicked or returned a contract error
    Reverted,
    /// Return value had the wrong type or shape
    Malformed,
    /// Call ran out of compute; `gas_remaining` is what the caller has left
    OutOfGas { gas_remaining: u64 },
}

/// Why a controller response was discarded
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControllerFault {
    Reverted,
    Malformed,
    Overflow,
    OutOfGas,
}

/// The lookup failed because the caller did not forward enough compute
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProtocolFeeCannotBeFetched;

/// Result of resolving a controller call
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    /// Raw fee as returned, before codec validation
    Fee(u16),
    /// Tolerated controller fault, fee defaults to 0
    Defaulted(ControllerFault),
}

impl Resolution {
    /// Fee to hand to the codec
    #[inline]
    pub fn fee(&self) -> u16 {
        match self {
            Resolution::Fee(fee) => *fee,
            Resolution::Defaulted(_) => 0,
        }
    }

    /// The controller's fee if it returned one the codec accepts.
    ///
    /// `None` for tolerated faults and for words with an invalid sub-fee.
    pub fn validated(&self, min_denominator: u8) -> Option<u16> {
        match self {
            Resolution::Fee(fee) => {
                let (fee0, fee1) = crate::codec::decode(*fee);
                crate::codec::validate(fee0, fee1, min_denominator).then_some(*fee)
            }
            Resolution::Defaulted(_) => None,
        }
    }
}

/// Resolve a controller call into a raw protocol fee.
///
/// # Errors
/// `ProtocolFeeCannotBeFetched` when the call ran out of compute and the
/// caller holds less than `gas_budget` afterwards.
pub fn resolve(call: ControllerCall, gas_budget: u64) -> Result<Resolution, ProtocolFeeCannotBeFetched> {
    match call {
        ControllerCall::Returned(raw) => Ok(match u16::try_from(raw) {
            Ok(fee) => Resolution::Fee(fee),
            Err(_) => Resolution::Defaulted(ControllerFault::Overflow),
        }),
        ControllerCall::Reverted => Ok(Resolution::Defaulted(ControllerFault::Reverted)),
        ControllerCall::Malformed => Ok(Resolution::Defaulted(ControllerFault::Malformed)),
        ControllerCall::OutOfGas { gas_remaining } => {
            if gas_remaining < gas_budget {
                Err(ProtocolFeeCannotBeFetched)
            } else {
                Ok(Resolution::Defaulted(ControllerFault::OutOfGas))
            }
        }
    }
}
