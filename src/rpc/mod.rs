//! Thin JSON-RPC client for a Sui fullnode.
//!
//! One request, one response: no pooled reconnection logic, no automatic
//! retry. A failed call is reported as a [`NetworkError`] and retried only
//! when the user asks for a refresh.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::errors::NetworkError;
use crate::types::{ObjectId, SuiAddress};

/// Connect timeout for fullnode requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Overall timeout for a single RPC round-trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    result: Option<Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC 2.0 client over HTTPS with connection pooling.
#[derive(Debug, Clone)]
pub struct SuiRpcClient {
    http: Client,
    rpc_url: String,
}

impl SuiRpcClient {
    /// Create a client for the given fullnode URL. Does not connect until the
    /// first call.
    pub fn new(rpc_url: impl Into<String>) -> Result<Self, NetworkError> {
        let url = rpc_url.into();
        let http = Client::builder()
            .pool_max_idle_per_host(4)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| NetworkError::with_url(format!("failed to build HTTP client: {e}"), &url))?;
        Ok(Self { http, rpc_url: url })
    }

    /// The fullnode URL this client talks to.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Issue a raw JSON-RPC call and return the `result` payload.
    pub async fn call(&self, method: &str, params: Value) -> Result<Value, NetworkError> {
        let request_id = Uuid::new_v4().to_string();
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": request_id,
            "method": method,
            "params": params,
        });
        trace!(method, request_id = %request_id, "sending RPC request");

        let response = self
            .http
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| NetworkError::with_url(format!("{method} failed: {e}"), &self.rpc_url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::with_url(
                format!("{method} returned HTTP {status}"),
                &self.rpc_url,
            ));
        }

        let envelope: RpcEnvelope = response.json().await.map_err(|e| {
            NetworkError::with_url(format!("{method} returned invalid JSON: {e}"), &self.rpc_url)
        })?;

        if let Some(err) = envelope.error {
            return Err(NetworkError::with_url(
                format!("{method} failed with RPC error {}: {}", err.code, err.message),
                &self.rpc_url,
            ));
        }

        debug!(method, "RPC request succeeded");
        envelope.result.ok_or_else(|| {
            NetworkError::with_url(
                format!("{method} response carried neither result nor error"),
                &self.rpc_url,
            )
        })
    }

    /// Read an object with its content included.
    pub async fn get_object(&self, id: &ObjectId) -> Result<Value, NetworkError> {
        self.call(
            "sui_getObject",
            serde_json::json!([id.as_str(), { "showContent": true }]),
        )
        .await
    }

    /// Page of objects owned by `owner`, filtered to one struct type.
    pub async fn get_owned_objects(
        &self,
        owner: &SuiAddress,
        struct_type: &str,
    ) -> Result<Value, NetworkError> {
        self.call(
            "suix_getOwnedObjects",
            serde_json::json!([
                owner.as_str(),
                { "filter": { "StructType": struct_type }, "options": { "showType": true } },
            ]),
        )
        .await
    }
}
