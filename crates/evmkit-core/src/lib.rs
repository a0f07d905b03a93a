//! EVM client-side toolkit: re-exports the primitives, ABI codec, JSON-ABI
//! parser and JSON-RPC transaction pipeline crates under one name, mirroring
//! the teacher's `alloy-core` facade.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[doc(inline)]
pub use evmkit_primitives as primitives;
#[doc(no_inline)]
pub use primitives::hex;

#[cfg(feature = "abi")]
#[doc(inline)]
pub use evmkit_abi as abi;

#[cfg(feature = "json-abi")]
#[doc(inline)]
pub use evmkit_json_abi as json_abi;

#[cfg(feature = "rpc")]
#[doc(inline)]
pub use evmkit_rpc as rpc;
