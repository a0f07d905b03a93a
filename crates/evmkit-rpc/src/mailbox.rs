//! The mailbox-pattern RPC handle: a single background task owns the
//! transport and serialises every outbound request through it, so callers
//! can clone and share the handle without coordinating among themselves.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

use crate::error::TransportError;
use crate::request::JsonRpcRequest;
use crate::transport::RpcTransport;

enum Command {
    Send { req: JsonRpcRequest, reply: oneshot::Sender<Result<Value, TransportError>> },
    Shutdown,
}

/// A shared, mailbox-like endpoint onto one RPC connection.
///
/// Requests submitted through the same handle are observed by the node in
/// submission order; there is no ordering guarantee between handles.
pub struct RpcHandle {
    cmd_tx: mpsc::UnboundedSender<Command>,
    next_id: AtomicU64,
    url: String,
}

impl RpcHandle {
    /// Spawns the background task owning `transport` and returns a handle to it.
    pub fn new(transport: Arc<dyn RpcTransport>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let url = transport.url().to_string();
        tokio::spawn(mailbox_task(transport, cmd_rx));
        Self { cmd_tx, next_id: AtomicU64::new(1), url }
    }

    /// Calls `method` with `params` and returns the decoded result, or the
    /// node's RPC error.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let req = JsonRpcRequest::new(id, method, params);
        let (reply_tx, reply_rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Send { req, reply: reply_tx })
            .map_err(|_| TransportError::HandleClosed)?;
        reply_rx.await.map_err(|_| TransportError::HandleClosed)?
    }

    /// The endpoint this handle's background task is connected to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for RpcHandle {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(Command::Shutdown);
    }
}

async fn mailbox_task(transport: Arc<dyn RpcTransport>, mut cmd_rx: mpsc::UnboundedReceiver<Command>) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            Command::Shutdown => break,
            Command::Send { req, reply } => {
                let result = transport.send(req).await.and_then(|resp| {
                    resp.into_result().map_err(TransportError::RpcError)
                });
                let _ = reply.send(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::JsonRpcResponse;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    struct EchoTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RpcTransport for EchoTransport {
        async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(JsonRpcResponse {
                jsonrpc: "2.0".into(),
                id: req.id,
                result: Some(Value::String("0x1".into())),
                error: None,
            })
        }

        fn url(&self) -> &str {
            "test://echo"
        }
    }

    #[tokio::test]
    async fn calls_are_served_in_submission_order() {
        let transport = Arc::new(EchoTransport { calls: AtomicUsize::new(0) });
        let handle = RpcHandle::new(transport.clone());
        for _ in 0..5 {
            let result = handle.call("eth_blockNumber", vec![]).await.unwrap();
            assert_eq!(result, Value::String("0x1".into()));
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 5);
    }
}
