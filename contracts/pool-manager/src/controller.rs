// Protocol fee controller gateway
//
// Host side of the bounded controller lookup. The call goes through
// `try_protocol_fee_for_pool` so every controller failure comes back as a
// value; `kelpswap_protocol_fee::gateway` decides what each outcome means.

use kelpswap_protocol_fee::{
    gateway, ControllerCall, ControllerFault, ProtocolFeeControllerClient, Resolution,
    CONTROLLER_GAS_BUDGET, MIN_PROTOCOL_FEE_DENOMINATOR,
};
use soroban_sdk::{log, symbol_short, xdr::ScErrorType, Address, Env, Symbol};

use crate::error::PoolManagerError;
use crate::types::PoolKey;

/// Call the controller once and classify what came back.
///
/// Budget exhaustion inside the callee is normally fatal to the whole
/// invocation on Soroban. If the host ever surfaces it as a recoverable
/// error the caller's residual is unknown, so it is reported as zero.
pub fn call_controller(env: &Env, controller: &Address, key: &PoolKey) -> ControllerCall {
    let client = ProtocolFeeControllerClient::new(env, controller);
    match client.try_protocol_fee_for_pool(key) {
        Ok(Ok(fee)) => ControllerCall::Returned(u64::from(fee)),
        Ok(Err(_)) => ControllerCall::Malformed,
        Err(Ok(err)) if err.is_type(ScErrorType::Budget) => {
            ControllerCall::OutOfGas { gas_remaining: 0 }
        }
        Err(_) => ControllerCall::Reverted,
    }
}

/// Fetch the protocol fee the controller proposes for a pool.
///
/// `Some(0)` without calling anything when no controller is registered.
/// `None` when the controller faulted or proposed an invalid fee; the
/// caller decides whether that means 0 or a failed call.
///
/// # Errors
/// `ProtocolFeeCannotBeFetched` if the lookup was starved of compute.
pub fn fetch_protocol_fee(
    env: &Env,
    controller: Option<&Address>,
    key: &PoolKey,
) -> Result<Option<u16>, PoolManagerError> {
    let Some(controller) = controller else {
        return Ok(Some(0));
    };

    let call = call_controller(env, controller, key);
    let resolution = gateway::resolve(call, CONTROLLER_GAS_BUDGET).map_err(|err| {
        log!(env, "protocol fee lookup starved", controller.clone());
        PoolManagerError::from(err)
    })?;

    let fee = resolution.validated(MIN_PROTOCOL_FEE_DENOMINATOR);
    match resolution {
        Resolution::Defaulted(fault) => {
            log!(env, "controller fault", fault_symbol(fault));
        }
        Resolution::Fee(raw) if fee.is_none() => {
            log!(env, "controller fee rejected by codec", u32::from(raw));
        }
        Resolution::Fee(_) => {}
    }
    Ok(fee)
}

fn fault_symbol(fault: ControllerFault) -> Symbol {
    match fault {
        ControllerFault::Reverted => symbol_short!("REVERTED"),
        ControllerFault::Malformed => symbol_short!("MALFORMED"),
        ControllerFault::Overflow => symbol_short!("OVERFLOW"),
        ControllerFault::OutOfGas => symbol_short!("NO_GAS"),
    }
}
