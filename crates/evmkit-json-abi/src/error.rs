use alloc::string::String;
use thiserror::Error;

/// Errors parsing a Solidity type string or JSON ABI document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiParseError {
    /// A `type` field did not match the closed type grammar.
    #[error("unrecognized or malformed Solidity type: {0}")]
    BadType(String),
    /// The ABI JSON document itself was malformed.
    #[error("invalid ABI JSON: {0}")]
    Json(String),
    /// Two functions in the same document produced the same 4-byte selector.
    #[error("selector collision between two functions, both producing {0}")]
    HashCollision(String),
    /// An undeployed descriptor was requested from a build artifact that
    /// carried no creation bytecode (`bytecode`/`evm.bytecode.object`).
    #[error("artifact carries no creation bytecode")]
    MissingBytecode,
}

/// Errors looking up a function/event/error by criterion on a [`crate::ContractDescriptor`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No function matched the criterion.
    #[error("no function matches the given criterion")]
    FunctionNotFound,
    /// More than one function matched the criterion; the caller must narrow it.
    #[error("{0} functions matched; narrow by selector, input types, or mutability")]
    Ambiguous(usize),
}
