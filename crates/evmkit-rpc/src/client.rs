//! The library's single ergonomic entry point: wires a config, transport,
//! mailbox handle and receipt poller together behind one handle a caller
//! constructs once and clones freely.

use std::sync::Arc;

use evmkit_json_abi::ContractDescriptor;
use serde_json::Value;

use crate::call::CallObject;
use crate::config::RpcConfig;
use crate::error::TransportError;
use crate::mailbox::RpcHandle;
use crate::receipt::{ReceiptPoller, ReceiptWait};
use crate::transaction::{BlockTag, SessionConstants, TransactionBuilder};
use crate::transport::HttpTransport;

/// A live connection to one JSON-RPC endpoint: a shared mailbox handle plus
/// the receipt-polling cadence configured for it.
///
/// Cloning an [`RpcClient`] is cheap; clones share the same background task
/// and submit onto the same FIFO queue.
#[derive(Clone)]
pub struct RpcClient {
    handle: Arc<RpcHandle>,
    poller: ReceiptPoller,
}

impl RpcClient {
    /// Builds a client against `config`'s endpoint over HTTP.
    pub fn new(config: &RpcConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.endpoint, config.request_timeout)?;
        let handle = Arc::new(RpcHandle::new(Arc::new(transport)));
        let poller = ReceiptPoller::new(config.receipt_poll_interval);
        Ok(Self { handle, poller })
    }

    /// Sends `call` via `eth_call` against `block_tag` and returns the raw
    /// hex-encoded return data.
    pub async fn eth_call(&self, call: &CallObject, block_tag: &BlockTag) -> Result<Value, TransportError> {
        self.handle
            .call("eth_call", vec![serde_json::to_value(call).unwrap(), block_tag.as_param()])
            .await
    }

    /// Sends `call` via `eth_estimateGas`.
    pub async fn eth_estimate_gas(&self, call: &CallObject) -> Result<Value, TransportError> {
        self.handle.call("eth_estimateGas", vec![serde_json::to_value(call).unwrap()]).await
    }

    /// Submits `call` via `eth_sendTransaction` and returns the transaction hash.
    pub async fn eth_send_transaction(&self, call: &CallObject) -> Result<Value, TransportError> {
        self.handle.call("eth_sendTransaction", vec![serde_json::to_value(call).unwrap()]).await
    }

    /// Reads an account's balance via `eth_getBalance`.
    pub async fn eth_get_balance(&self, address: &str, block_tag: &BlockTag) -> Result<Value, TransportError> {
        self.handle
            .call("eth_getBalance", vec![Value::String(address.into()), block_tag.as_param()])
            .await
    }

    /// Starts polling for `tx_hash`'s receipt. Drop the returned [`ReceiptWait`]
    /// to abandon polling before it resolves.
    pub fn poll_receipt(&self, tx_hash: impl Into<String>) -> ReceiptWait {
        self.poller.poll(self.handle.clone(), tx_hash.into())
    }

    /// The endpoint this client is connected to.
    pub fn endpoint(&self) -> &str {
        self.handle.url()
    }
}

/// Convenience constants bundling an [`RpcClient`] with the contract and
/// session it is about to build calls for.
pub struct Session<'a> {
    /// The connected RPC client.
    pub client: RpcClient,
    /// The contract being called.
    pub contract: &'a ContractDescriptor,
    /// The signer/gas/block constants held fixed across the session.
    pub constants: SessionConstants,
}

impl<'a> Session<'a> {
    /// Builds a session over `client` and `contract`.
    pub fn new(client: RpcClient, contract: &'a ContractDescriptor, constants: SessionConstants) -> Self {
        Self { client, contract, constants }
    }

    /// The transaction builder for this session's contract.
    pub fn builder(&self) -> TransactionBuilder<'_> {
        TransactionBuilder::new(self.contract)
    }
}
