//! The wallet-signing boundary.
//!
//! Signing, key custody, and transaction byte encoding are owned entirely by
//! an external wallet collaborator; this crate hands it a semantic
//! [`MoveCall`] and gets back a [`TxResponse`]. The whole exchange is one
//! fire-and-await operation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::errors::TransactionError;
use crate::types::{MoveCall, TxResponse};

/// Timeout for a wallet round-trip (the user may be approving interactively).
pub const WALLET_TIMEOUT: Duration = Duration::from_secs(120);

/// A collaborator that signs and broadcasts a Move call.
///
/// Implementations decide how the user approves: a browser wallet behind a
/// bridge, a hardware signer, a test double. Rejection at any stage — user,
/// signer, or chain — surfaces as [`TransactionError`].
#[async_trait]
pub trait WalletSigner: Send + Sync {
    async fn sign_and_execute(&self, call: &MoveCall) -> Result<TxResponse, TransactionError>;
}

/// Wallet collaborator reached over HTTP.
///
/// POSTs the semantic call as JSON to a local wallet-bridge endpoint and
/// interprets the bridge's [`TxResponse`]. A `failure` status is mapped to an
/// error so that callers never mistake a rejected vote for a cast one.
pub struct HttpWalletBridge {
    http: Client,
    endpoint: String,
}

impl HttpWalletBridge {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransactionError> {
        let http = Client::builder()
            .timeout(WALLET_TIMEOUT)
            .build()
            .map_err(|e| TransactionError::new(format!("failed to build wallet client: {e}")))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WalletSigner for HttpWalletBridge {
    async fn sign_and_execute(&self, call: &MoveCall) -> Result<TxResponse, TransactionError> {
        debug!(target_call = %call.target(), endpoint = %self.endpoint, "forwarding call to wallet bridge");

        let response = self
            .http
            .post(&self.endpoint)
            .json(call)
            .send()
            .await
            .map_err(|e| TransactionError::new(format!("wallet bridge unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransactionError::new(format!(
                "wallet bridge returned HTTP {status}"
            )));
        }

        let tx: TxResponse = response
            .json()
            .await
            .map_err(|e| TransactionError::new(format!("malformed wallet response: {e}")))?;

        if tx.is_success() {
            info!(digest = %tx.digest, "transaction executed");
            Ok(tx)
        } else {
            let message = tx
                .error
                .clone()
                .unwrap_or_else(|| "transaction rejected".to_string());
            Err(TransactionError::with_digest(message, tx.digest))
        }
    }
}
