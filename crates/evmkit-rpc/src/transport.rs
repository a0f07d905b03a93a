//! The [`RpcTransport`] trait and its HTTP implementation.

use std::time::Duration;

use crate::error::TransportError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// A transport capable of sending a single JSON-RPC request and awaiting its response.
///
/// Implementations must be `Send + Sync`: the mailbox task holds one behind an `Arc`.
#[async_trait::async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Sends `req` and returns the node's response, or a transport-level error.
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError>;

    /// The transport's endpoint, for logging.
    fn url(&self) -> &str;
}

/// An HTTP JSON-RPC transport backed by `reqwest`.
///
/// Every JSON-RPC method this library speaks (`eth_call`, `eth_sendTransaction`,
/// receipt/balance/block lookups, ...) is a single POST to this one endpoint.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Builds a transport against `url`, applying `timeout` to every request.
    ///
    /// `url` is parsed and validated before any connection is attempted.
    pub fn new(url: impl AsRef<str>, timeout: Duration) -> Result<Self, TransportError> {
        let parsed = url::Url::parse(url.as_ref())
            .map_err(|e| TransportError::Deserialization(format!("invalid endpoint URL: {e}")))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url: parsed.to_string() })
    }
}

#[async_trait::async_trait]
impl RpcTransport for HttpTransport {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        tracing::debug!(method = %req.method, id = %req.id, "sending RPC request");
        let resp = self.client.post(&self.url).json(&req).send().await?;
        let body: JsonRpcResponse =
            resp.json().await.map_err(|e| TransportError::Deserialization(e.to_string()))?;
        Ok(body)
    }

    fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_endpoint() {
        let t = HttpTransport::new("https://eth-mainnet.example.com/v1", Duration::from_secs(5)).unwrap();
        assert_eq!(t.url(), "https://eth-mainnet.example.com/v1");
    }

    #[test]
    fn rejects_a_malformed_endpoint() {
        let err = HttpTransport::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, TransportError::Deserialization(_)));
    }
}
