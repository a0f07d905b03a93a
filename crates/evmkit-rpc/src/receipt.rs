//! The receipt poller: one long-lived task per pending transaction, polling
//! `eth_getTransactionReceipt` with a fixed back-off until the node returns a
//! non-null result or an error.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::oneshot;

use crate::error::TransportError;
use crate::mailbox::RpcHandle;

/// Polling cadence recommended by the teacher's retry policy when no other
/// guidance is given: frequent enough that most transactions resolve within
/// one or two polls, infrequent enough not to spam the node.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(7_500);

/// Polls a single pending transaction's receipt at a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptPoller {
    interval: Duration,
}

impl ReceiptPoller {
    /// Builds a poller with the given fixed back-off between attempts.
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Starts polling for `tx_hash`'s receipt and returns a handle to await it.
    ///
    /// Dropping the returned [`ReceiptWait`] cooperatively cancels the poll:
    /// the background task notices its reply channel closed and stops before
    /// its next sleep, rather than polling forever. There is no built-in
    /// deadline; callers add one externally (e.g. `tokio::time::timeout`).
    pub fn poll(&self, handle: Arc<RpcHandle>, tx_hash: String) -> ReceiptWait {
        let (tx, rx) = oneshot::channel();
        let interval = self.interval;
        tokio::spawn(async move {
            loop {
                if tx.is_closed() {
                    return;
                }
                match handle.call("eth_getTransactionReceipt", vec![Value::String(tx_hash.clone())]).await {
                    Ok(Value::Null) => {}
                    Ok(receipt) => {
                        let _ = tx.send(Ok(receipt));
                        return;
                    }
                    Err(e) => {
                        let _ = tx.send(Err(e));
                        return;
                    }
                }
                tokio::select! {
                    _ = tx.closed() => return,
                    _ = tokio::time::sleep(interval) => {}
                }
            }
        });
        ReceiptWait { rx }
    }
}

impl Default for ReceiptPoller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

/// A pending receipt poll. Await it to block until the receipt is mined, or
/// drop it to abandon polling.
pub struct ReceiptWait {
    rx: oneshot::Receiver<Result<Value, TransportError>>,
}

impl ReceiptWait {
    /// Awaits the receipt, or the error that ended polling.
    pub async fn wait(self) -> Result<Value, TransportError> {
        self.rx.await.map_err(|_| TransportError::HandleClosed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{JsonRpcRequest, JsonRpcResponse};
    use crate::transport::RpcTransport;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FlakyTransport {
        calls: AtomicUsize,
        resolve_after: usize,
    }

    #[async_trait]
    impl RpcTransport for FlakyTransport {
        async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let result = if n < self.resolve_after {
                Value::Null
            } else {
                Value::String("0xreceipt".into())
            };
            Ok(JsonRpcResponse { jsonrpc: "2.0".into(), id: req.id, result: Some(result), error: None })
        }

        fn url(&self) -> &str {
            "test://flaky"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn poller_retries_until_receipt_is_non_null() {
        let transport = Arc::new(FlakyTransport { calls: AtomicUsize::new(0), resolve_after: 3 });
        let handle = Arc::new(RpcHandle::new(transport.clone()));
        let wait = ReceiptPoller::new(Duration::from_millis(10)).poll(handle, "0xabc".into());
        let receipt = wait.wait().await.unwrap();
        assert_eq!(receipt, Value::String("0xreceipt".into()));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_wait_handle_stops_polling() {
        let transport = Arc::new(FlakyTransport { calls: AtomicUsize::new(0), resolve_after: 1000 });
        let handle = Arc::new(RpcHandle::new(transport.clone()));
        let wait = ReceiptPoller::new(Duration::from_millis(10)).poll(handle, "0xabc".into());
        tokio::time::sleep(Duration::from_millis(35)).await;
        drop(wait);
        tokio::task::yield_now().await;
        let seen = transport.calls.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        assert_eq!(transport.calls.load(Ordering::SeqCst), seen);
    }
}
