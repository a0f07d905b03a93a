//! ABI codec: the tagged value tree ([`EVMValue`]) and type template
//! ([`TypeTemplate`]) that describe Solidity values, and the encoder/decoder
//! pair that convert between a value tree and the EVM's head/tail,
//! 32-byte-word wire format.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

extern crate alloc;

mod error;
pub use error::{DecodingError, EncodingError};

mod value;
pub use value::{EVMValue, I256, U256};

mod type_template;
pub use type_template::TypeTemplate;

mod encoder;
pub use encoder::{encode, Encoder};

mod decoder;
pub use decoder::{decode, Decoder};
