//! Per-client configuration, constructed explicitly by the caller rather
//! than read from the environment or a config file.

use std::time::Duration;

use crate::receipt::DEFAULT_POLL_INTERVAL;

/// Configuration for one [`crate::RpcClient`].
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// The JSON-RPC endpoint, e.g. `"https://eth-mainnet.example.com"`.
    pub endpoint: String,
    /// How often the receipt poller retries `eth_getTransactionReceipt`.
    pub receipt_poll_interval: Duration,
    /// Timeout applied to each individual HTTP request.
    pub request_timeout: Duration,
}

impl RpcConfig {
    /// Builds a config for `endpoint` with the library's default poll
    /// interval and a 30-second request timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            receipt_poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: Duration::from_secs(30),
        }
    }
}
