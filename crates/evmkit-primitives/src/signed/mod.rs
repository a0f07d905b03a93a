//! A fixed-width, two's-complement signed integer implementation backed by
//! [`ruint::Uint`], used for Solidity's `intN` types.

mod conversions;

mod errors;
pub use errors::{BigIntConversionError, ParseSignedError};

mod sign;
pub use sign::Sign;

mod int;
pub use int::Signed;

pub(crate) mod utils;
pub use utils::const_eq;
