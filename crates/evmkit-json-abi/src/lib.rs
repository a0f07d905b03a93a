//! Solidity JSON-ABI parsing: turns an ABI JSON document into canonical
//! function/event/error signatures with their Keccak-256 selectors/topics,
//! and exposes a searchable [`ContractDescriptor`].
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

extern crate alloc;

mod error;
pub use error::{AbiParseError, LookupError};

mod param;
pub use param::{EventParam, Param};

mod state_mutability;
pub use state_mutability::StateMutability;

mod resolve;
pub use resolve::resolve;

mod item;
pub use item::{AbiItem, Constructor, CustomError, Event, Fallback, Function, Receive};

mod abi;
pub use abi::JsonAbi;

mod artifact;
pub use artifact::ContractArtifact;

mod contract;
pub use contract::{ContractDescriptor, Criterion};
