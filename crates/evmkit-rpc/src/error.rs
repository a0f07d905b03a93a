use evmkit_abi::{DecodingError, EncodingError};
use thiserror::Error;

use crate::request::JsonRpcError;

// evmkit-rpc links tokio/reqwest, which already require std, so this crate
// never builds no_std and can use `String` directly.

/// Errors building and validating a transaction before it is sent.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// A non-zero `value` was given to a function whose state mutability isn't `payable`.
    #[error("value sent to a non-payable function")]
    ValueToNonPayable,
    /// A call targeted a contract's `fallback`, but it declares none.
    #[error("contract has no fallback function")]
    ContractLacksFallback,
    /// A call targeted a contract's `receive`, but it declares none.
    #[error("contract has no receive function")]
    ContractLacksReceive,
    /// Arguments were given for `fallback`/`receive`, which take no encoded selector.
    #[error("arguments given to a call with no function signature")]
    ArgumentsToEmptyFunctionSignature,
    /// A function requires arguments, none were given.
    #[error("function requires arguments but none were given")]
    FunctionArgumentsMissing,
    /// `value` failed to parse as a base-unit quantity.
    #[error("invalid value argument")]
    InvalidValueArgument,
    /// The signer's chain ID does not match the one the descriptor was loaded for.
    #[error("signer is on chain {got}, expected {expected}")]
    WrongChainInSigner {
        /// Chain ID the descriptor expects.
        expected: u64,
        /// Chain ID the signer actually reported.
        got: u64,
    },
    /// A non-fatal warning: a payable function was called with `value = 0`.
    #[error("calling a payable function with a zero value")]
    PayableZeroValueWarning,
    /// A 1559 call object field failed its wire-format validation.
    #[error("field {field} failed validation: {value:?} does not match the expected format")]
    InvalidField {
        /// Name of the offending call-object field.
        field: &'static str,
        /// The value that failed validation.
        value: String,
    },
    /// Encoding the call's input data failed.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// Decoding a call's return data failed.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
    /// Looking up the target function on the contract's ABI failed.
    #[error(transparent)]
    Lookup(#[from] evmkit_json_abi::LookupError),
}

/// Errors from the transport/RPC layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The node returned a JSON-RPC protocol-level error.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    RpcError(JsonRpcError),
    /// The node returned a successful envelope with a `null` result where one was required.
    #[error("RPC call returned a null result")]
    RpcNullResult,
    /// The underlying HTTP client failed (connection, timeout, TLS, ...).
    #[error("HTTP client error: {0}")]
    HttpClient(String),
    /// The response body could not be deserialized as the expected JSON shape.
    #[error("failed to deserialize RPC response: {0}")]
    Deserialization(String),
    /// The mailbox's background task has already shut down.
    #[error("RPC handle's background task is no longer running")]
    HandleClosed,
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpClient(e.to_string())
    }
}
