//! Configuration for the voting DAO SDK.
//!
//! The DAO, package, and admin-capability identifiers are externally supplied
//! identity parameters with process-wide scope. They are resolved once — at
//! startup, from the environment or a builder — into an explicit [`Config`]
//! that is passed by reference to the reader and the transaction builders.
//! The pure engines never see configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::constants;
use crate::errors::ConfigError;
use crate::types::ObjectId;

/// Default network when nothing else is configured.
pub const DEFAULT_NETWORK: &str = "testnet";

/// Environment variable holding the voting package id.
pub const ENV_PACKAGE_ID: &str = "SUIVOTE_PACKAGE_ID";
/// Environment variable holding the shared DAO object id.
pub const ENV_DAO_ID: &str = "SUIVOTE_DAO_ID";
/// Environment variable holding the admin capability object id.
pub const ENV_ADMIN_CAP_ID: &str = "SUIVOTE_ADMIN_CAP_ID";
/// Environment variable selecting the network.
pub const ENV_NETWORK: &str = "SUIVOTE_NETWORK";
/// Environment variable overriding the fullnode URL.
pub const ENV_RPC_URL: &str = "SUIVOTE_RPC_URL";
/// Environment variable enabling debug logging.
pub const ENV_DEBUG: &str = "SUIVOTE_DEBUG";

/// Fullnode endpoint for a named network.
pub fn network_endpoint(network: &str) -> &'static str {
    match network {
        "mainnet" => constants::MAINNET_FULLNODE,
        "testnet" => constants::TESTNET_FULLNODE,
        "devnet" => constants::DEVNET_FULLNODE,
        "local" | "localnet" => constants::LOCAL_FULLNODE,
        _ => constants::TESTNET_FULLNODE,
    }
}

/// Logging configuration carried inside [`Config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub debug: bool,
    pub record_log: bool,
    pub logging_dir: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            debug: false,
            record_log: false,
            logging_dir: "~/.suivote/logs".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Network name ("mainnet", "testnet", "devnet", "local").
    pub network: String,
    /// Fullnode JSON-RPC endpoint.
    pub rpc_url: String,
    /// Id of the published voting package.
    pub package_id: ObjectId,
    /// Id of the shared DAO object holding the proposals.
    pub dao_id: ObjectId,
    /// Id of the admin capability object gating proposal creation.
    pub admin_cap_id: ObjectId,
    pub logging: LoggingSettings,
}

impl Config {
    /// Create a config for the default network with the three required
    /// identifiers.
    pub fn new(package_id: ObjectId, dao_id: ObjectId, admin_cap_id: ObjectId) -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            rpc_url: network_endpoint(DEFAULT_NETWORK).to_string(),
            package_id,
            dao_id,
            admin_cap_id,
            logging: LoggingSettings::default(),
        }
    }

    /// Select a named network (updates the fullnode endpoint too).
    pub fn with_network(mut self, network: &str) -> Self {
        self.network = network.to_string();
        self.rpc_url = network_endpoint(network).to_string();
        self
    }

    /// Override the fullnode endpoint directly.
    pub fn with_rpc_url(mut self, rpc_url: &str) -> Self {
        self.rpc_url = rpc_url.to_string();
        self
    }

    /// Enable debug logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.logging.debug = debug;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// The three object identifiers are required; everything else falls back
    /// to defaults. A missing or malformed identifier fails here, at startup,
    /// rather than at the first chain call.
    pub fn from_env() -> Result<Self, ConfigError> {
        let package_id = require_id(ENV_PACKAGE_ID)?;
        let dao_id = require_id(ENV_DAO_ID)?;
        let admin_cap_id = require_id(ENV_ADMIN_CAP_ID)?;

        let mut config = Self::new(package_id, dao_id, admin_cap_id);

        if let Ok(network) = std::env::var(ENV_NETWORK) {
            config = config.with_network(&network);
        }
        if let Ok(rpc_url) = std::env::var(ENV_RPC_URL) {
            config.rpc_url = rpc_url;
        }
        if std::env::var(ENV_DEBUG).is_ok() {
            config.logging.debug = true;
        }

        Ok(config)
    }
}

fn require_id(key: &str) -> Result<ObjectId, ConfigError> {
    let raw = std::env::var(key)
        .map_err(|_| ConfigError::with_field("missing required environment variable", key))?;
    ObjectId::from_str(&raw).map_err(|e| ConfigError::with_field(e.to_string(), key))
}
