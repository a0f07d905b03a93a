//! Ethereum primitive types: fixed-width integers, addresses, byte arrays,
//! and the Keccak-256/EIP-55/ENS hashing utilities the rest of this
//! workspace's ABI codec and JSON-ABI crates build on.
#![warn(missing_docs, unreachable_pub, clippy::missing_const_for_fn)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate alloc;

pub mod aliases;
#[doc(no_inline)]
pub use aliases::{
    BlockHash, BlockNumber, ChainId, Selector, StorageKey, StorageValue, TxHash, TxIndex, TxNumber,
    B128, B256, B512, B64, I128, I16, I256, I32, I64, I8, U128, U16, U256, U32, U512, U64, U8,
};

mod bits;
pub use bits::{Address, AddressError, FixedBytes, Function};

mod bytes;
pub use self::bytes::Bytes;

mod signed;
pub use signed::{BigIntConversionError, ParseSignedError, Sign, Signed};

mod utils;
pub use utils::{checksum_address, keccak256, namehash, selector, topic};

#[doc(no_inline)]
pub use ruint::{self, uint, Uint};

#[doc(no_inline)]
pub use tiny_keccak::{self, Hasher, Keccak};

// Not public API.
#[doc(hidden)]
pub mod private {
    pub use derive_more;

    #[cfg(feature = "serde")]
    pub use serde;
}
