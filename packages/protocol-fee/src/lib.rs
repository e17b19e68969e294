// KelpSwap Protocol Fee Package

#![no_std]

pub mod applicator;
pub mod codec;
pub mod constants;
pub mod gateway;
pub mod interface;
pub mod types;

pub use constants::*;

pub use applicator::{apply_fee, split_swap_fee};
pub use codec::{decode, encode, normalize, validate};
pub use gateway::{resolve, ControllerCall, ControllerFault, ProtocolFeeCannotBeFetched, Resolution};
pub use interface::{ProtocolFeeControllerClient, ProtocolFeeControllerInterface};
pub use types::PoolKey;
