//! Error types for the voting DAO SDK.
//!
//! Boundary failures (`NetworkError`, `TransactionError`) are always surfaced
//! to the caller and never auto-retried; a manual refresh or re-submission is
//! the only recovery path. `ShapeError` marks a snapshot fetch as wholly
//! failed rather than partially usable. `DataShapeError` indicates the reader
//! and the tally engine disagree on data shape, which is an integration fault
//! rather than a user-recoverable condition.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Boundary Errors
// =============================================================================

/// Error when the fullnode RPC endpoint is unreachable or rejects a request.
///
/// Transient: callers surface it and let the user trigger a refresh.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
#[error("Network error: {message}")]
pub struct NetworkError {
    /// Detailed error message
    pub message: String,
    /// The RPC URL that failed
    pub rpc_url: Option<String>,
}

impl NetworkError {
    /// Create a new network error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rpc_url: None,
        }
    }

    /// Create a new network error carrying the failing RPC URL
    pub fn with_url(message: impl Into<String>, rpc_url: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rpc_url: Some(rpc_url.into()),
        }
    }
}

/// Error when a fetched payload does not match the expected DAO object shape.
///
/// The whole fetch is treated as failed; no partially populated proposal list
/// is ever returned.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
#[error("Shape error: {message}")]
pub struct ShapeError {
    /// Detailed error message
    pub message: String,
    /// The field or path that failed validation, when known
    pub field: Option<String>,
}

impl ShapeError {
    /// Create a new shape error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new shape error naming the offending field
    pub fn with_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

// =============================================================================
// Engine Errors
// =============================================================================

/// Error when the tally engine receives misaligned input vectors.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
#[error("Data shape error: {message}")]
pub struct DataShapeError {
    /// Detailed error message
    pub message: String,
    /// Length of the vote-count vector
    pub votes_len: Option<usize>,
    /// Length of the option-label vector
    pub options_len: Option<usize>,
}

impl DataShapeError {
    /// Create a new data shape error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            votes_len: None,
            options_len: None,
        }
    }

    /// Create a new data shape error for misaligned vote/option vectors
    pub fn misaligned(votes_len: usize, options_len: usize) -> Self {
        Self {
            message: format!(
                "vote counters ({}) and option labels ({}) are not index-aligned",
                votes_len, options_len
            ),
            votes_len: Some(votes_len),
            options_len: Some(options_len),
        }
    }
}

// =============================================================================
// Transaction Errors
// =============================================================================

/// Error when a vote or create-proposal call is rejected.
///
/// Covers wallet rejection, signing failure, and chain rejection. Always
/// user-visible; a failed submission never marks the user as having voted.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
#[error("Transaction error: {message}")]
pub struct TransactionError {
    /// Detailed error message
    pub message: String,
    /// The transaction digest if the chain assigned one
    pub digest: Option<String>,
}

impl TransactionError {
    /// Create a new transaction error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            digest: None,
        }
    }

    /// Create a new transaction error with the chain-assigned digest
    pub fn with_digest(message: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            digest: Some(digest.into()),
        }
    }
}

/// Error when a draft proposal fails client-side validation before any wallet
/// round-trip is attempted.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
#[error("Invalid proposal: {message}")]
pub struct InvalidProposal {
    /// Detailed error message
    pub message: String,
    /// The offending field
    pub field: Option<String>,
}

impl InvalidProposal {
    /// Create a new invalid proposal error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new invalid proposal error naming the offending field
    pub fn with_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

// =============================================================================
// Lookup / Configuration Errors
// =============================================================================

/// Error when a proposal id is not part of the current snapshot.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
#[error("Proposal not found: {message}")]
pub struct ProposalNotFound {
    /// Detailed error message
    pub message: String,
    /// The proposal id that was looked up
    pub proposal_id: Option<String>,
}

impl ProposalNotFound {
    /// Create a new proposal not found error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            proposal_id: None,
        }
    }

    /// Create a new proposal not found error with the looked-up id
    pub fn with_id(message: impl Into<String>, proposal_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            proposal_id: Some(proposal_id.into()),
        }
    }
}

/// Error when required configuration is missing or malformed at startup.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
#[error("Config error: {message}")]
pub struct ConfigError {
    /// Detailed error message
    pub message: String,
    /// The configuration field or environment variable involved
    pub field: Option<String>,
}

impl ConfigError {
    /// Create a new config error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new config error naming the field or variable
    pub fn with_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

// =============================================================================
// Unified Error Enum
// =============================================================================

/// Unified error type for all SDK operations.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum DaoError {
    // Boundary errors
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Shape(#[from] ShapeError),

    // Engine errors
    #[error(transparent)]
    DataShape(#[from] DataShapeError),

    // Transaction errors
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error(transparent)]
    InvalidProposal(#[from] InvalidProposal),

    // Lookup / configuration errors
    #[error(transparent)]
    ProposalNotFound(#[from] ProposalNotFound),
    #[error(transparent)]
    Config(#[from] ConfigError),

    // External library errors (converted to String for Serialize/Deserialize)
    #[error("JSON error: {0}")]
    Json(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for DaoError {
    fn from(err: serde_json::Error) -> Self {
        DaoError::Json(err.to_string())
    }
}

impl From<std::io::Error> for DaoError {
    fn from(err: std::io::Error) -> Self {
        DaoError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for DaoError {
    fn from(err: reqwest::Error) -> Self {
        DaoError::Network(NetworkError::new(err.to_string()))
    }
}

/// Result type alias for SDK operations
pub type DaoResult<T> = Result<T, DaoError>;

impl DaoError {
    /// Check if this is a network error (retryable by user-triggered refresh)
    pub fn is_network(&self) -> bool {
        matches!(self, DaoError::Network(_))
    }

    /// Check if this is a snapshot shape error
    pub fn is_shape(&self) -> bool {
        matches!(self, DaoError::Shape(_))
    }

    /// Check if this is a transaction failure
    pub fn is_transaction(&self) -> bool {
        matches!(self, DaoError::Transaction(_))
    }

    /// Check if the failed operation can be retried by the user
    /// (manual refresh or re-submission)
    pub fn is_user_retryable(&self) -> bool {
        matches!(self, DaoError::Network(_) | DaoError::Transaction(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_with_url() {
        let err = NetworkError::with_url("connection refused", "https://fullnode.example:443");
        assert_eq!(err.message, "connection refused");
        assert_eq!(err.rpc_url.as_deref(), Some("https://fullnode.example:443"));
    }

    #[test]
    fn test_data_shape_error_misaligned() {
        let err = DataShapeError::misaligned(2, 1);
        assert_eq!(err.votes_len, Some(2));
        assert_eq!(err.options_len, Some(1));
        assert!(err.message.contains("not index-aligned"));
    }

    #[test]
    fn test_dao_error_predicates() {
        let net: DaoError = NetworkError::new("down").into();
        assert!(net.is_network());
        assert!(net.is_user_retryable());
        assert!(!net.is_shape());

        let shape: DaoError = ShapeError::with_field("missing field", "proposals").into();
        assert!(shape.is_shape());
        assert!(!shape.is_user_retryable());

        let tx: DaoError = TransactionError::new("rejected by wallet").into();
        assert!(tx.is_transaction());
        assert!(tx.is_user_retryable());
    }

    #[test]
    fn test_transaction_error_display() {
        let err = TransactionError::with_digest("chain rejected vote", "0xabc");
        assert_eq!(err.to_string(), "Transaction error: chain rejected vote");
        assert_eq!(err.digest.as_deref(), Some("0xabc"));
    }

    #[test]
    fn test_error_serialization_roundtrip() {
        let err = ShapeError::with_field("dataType mismatch", "data.content.dataType");
        let serialized = serde_json::to_string(&err).expect("should serialize");
        let deserialized: ShapeError =
            serde_json::from_str(&serialized).expect("should deserialize");
        assert_eq!(err.message, deserialized.message);
        assert_eq!(err.field, deserialized.field);
    }

    #[test]
    fn test_dao_error_from_serde_json() {
        let bad: Result<u64, _> = serde_json::from_str("not json");
        let err: DaoError = bad.expect_err("should fail").into();
        assert!(matches!(err, DaoError::Json(_)));
    }
}
