//! The JSON-RPC transaction pipeline: builds EIP-1559 call objects from a
//! contract descriptor, validates their wire format, and sends them over a
//! mailbox-pattern RPC handle with a fixed-backoff receipt poller.
#![warn(missing_docs, unreachable_pub)]
#![deny(unused_must_use, rust_2018_idioms)]

mod error;
pub use error::{TransactionError, TransportError};

mod request;
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId, RpcParam};

mod call;
pub use call::{AccessListEntry, CallObject};

mod transport;
pub use transport::{HttpTransport, RpcTransport};

mod mailbox;
pub use mailbox::RpcHandle;

mod receipt;
pub use receipt::{ReceiptPoller, ReceiptWait, DEFAULT_POLL_INTERVAL};

mod config;
pub use config::RpcConfig;

mod transaction;
pub use transaction::{parse_value, BlockTag, SessionConstants, TransactionBuilder};

mod client;
pub use client::{RpcClient, Session};
