//! # suivote-rs
//!
//! SDK for an on-chain voting DAO on Sui. The crate reads the shared DAO
//! object over fullnode JSON-RPC, derives tallies and open/closed status
//! with pure engines, and submits vote / create-proposal calls through an
//! external wallet-signing collaborator.
//!
//! The contract owns the voting rules — one vote per address, deadline
//! cutoff, counter updates. This SDK only reflects that state and surfaces
//! chain rejections as transaction errors.

pub mod cli;
pub mod config;
pub mod core;
pub mod dao;
pub mod errors;
pub mod logging;
pub mod queries;
pub mod rpc;
pub mod status;
pub mod store;
pub mod tally;
pub mod tx;
pub mod types;
pub mod wallet;

pub use config::{Config, LoggingSettings};
pub use dao::{DaoClient, VoteOutcome};

// Re-export logging module
pub use logging::{init_default_logging, init_logging, is_initialized, LogFormat, LoggingConfig};

// Re-export data types
pub use types::*;

// Re-export the pure engines
pub use status::{classify, partition, ProposalStatus};
pub use tally::{
    derive_tally, sentiment, Outcome, Sentiment, Tally, NO_VOTES_LABEL, TIE_LABEL,
};

// Re-export the read path
pub use queries::{admin_cap_type, fetch_snapshot, is_admin, parse_snapshot};
pub use rpc::SuiRpcClient;
pub use store::{FetchTicket, SnapshotStore, VotedRegistry};

// Re-export the write path
pub use tx::{
    create_proposal_call, parse_options, submit_create_proposal, submit_vote, vote_call,
    NewProposal,
};
pub use wallet::{HttpWalletBridge, WalletSigner};

// Re-export comprehensive error types
pub use errors::{
    ConfigError, DaoError, DaoResult, DataShapeError, InvalidProposal, NetworkError,
    ProposalNotFound, ShapeError, TransactionError,
};
