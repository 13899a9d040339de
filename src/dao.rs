//! High-level DAO client — the main entry point for applications.
//!
//! Wraps the RPC client, the snapshot store, and the voted registry behind
//! one handle. Reads refresh the shared snapshot; writes go through an
//! injected [`WalletSigner`]. Post-vote counts are eventually consistent and
//! reconcile on the next refresh, whenever that naturally occurs.
//!
//! # Example
//!
//! ```ignore
//! use suivote_rs::{Config, DaoClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let dao = DaoClient::new(config)?;
//!
//!     let snapshot = dao.refresh().await?;
//!     for proposal in &snapshot.proposals {
//!         println!("{}: {} votes", proposal.title, proposal.total_votes());
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use tracing::debug;

use crate::config::Config;
use crate::errors::{DaoResult, NetworkError, ProposalNotFound};
use crate::queries;
use crate::rpc::SuiRpcClient;
use crate::store::{SnapshotStore, VotedRegistry};
use crate::tx::{self, NewProposal};
use crate::types::{ObjectId, Proposal, Snapshot, SuiAddress, TxResponse};
use crate::wallet::WalletSigner;

/// What happened to a vote request.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteOutcome {
    /// The wallet signed and the chain executed the vote.
    Submitted(TxResponse),
    /// A vote for this proposal was already submitted in this session;
    /// nothing was re-sent.
    AlreadyVoted,
}

impl VoteOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, VoteOutcome::Submitted(_))
    }
}

/// Client for one voting DAO.
pub struct DaoClient {
    rpc: SuiRpcClient,
    config: Config,
    store: SnapshotStore,
    voted: VotedRegistry,
}

impl DaoClient {
    /// Create a client from a resolved configuration. No connection is made
    /// until the first read.
    pub fn new(config: Config) -> DaoResult<Self> {
        let rpc = SuiRpcClient::new(&config.rpc_url)?;
        Ok(Self {
            rpc,
            config,
            store: SnapshotStore::new(),
            voted: VotedRegistry::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rpc(&self) -> &SuiRpcClient {
        &self.rpc
    }

    // ==========================================================================
    // READ PATH
    // ==========================================================================

    /// Fetch a fresh snapshot and make it current.
    ///
    /// Concurrent refreshes race freely; a refresh that was superseded while
    /// in flight has its result discarded in favor of the newer one.
    pub async fn refresh(&self) -> DaoResult<Arc<Snapshot>> {
        let ticket = self.store.begin_fetch().await;
        let snapshot = queries::fetch_snapshot(&self.rpc, &self.config).await?;
        if !self.store.commit(ticket, snapshot).await {
            debug!("refresh superseded while in flight");
        }
        self.store.current().await.ok_or_else(|| {
            NetworkError::new("snapshot refresh was superseded before any fetch completed").into()
        })
    }

    /// The current snapshot, if one has been fetched.
    pub async fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.store.current().await
    }

    /// Look up one proposal, refreshing first if nothing is cached.
    pub async fn proposal(&self, id: &ObjectId) -> DaoResult<Proposal> {
        let snapshot = match self.store.current().await {
            Some(snapshot) => snapshot,
            None => self.refresh().await?,
        };
        snapshot.find(id).cloned().ok_or_else(|| {
            ProposalNotFound::with_id("no such proposal in the DAO", id.as_str()).into()
        })
    }

    /// Whether the connected address owns the admin capability.
    pub async fn is_admin(&self, address: &SuiAddress) -> DaoResult<bool> {
        queries::is_admin(&self.rpc, &self.config, address).await
    }

    // ==========================================================================
    // WRITE PATH
    // ==========================================================================

    /// Cast a vote through the wallet collaborator.
    ///
    /// Submission is recorded optimistically on success, so repeating the
    /// call for the same proposal returns [`VoteOutcome::AlreadyVoted`]
    /// without a second wallet round-trip. A failed submission records
    /// nothing. The deadline is not checked here — the contract rejects late
    /// votes and that rejection surfaces as a transaction error.
    pub async fn vote(
        &self,
        wallet: &dyn WalletSigner,
        proposal_id: &ObjectId,
        option_index: u64,
    ) -> DaoResult<VoteOutcome> {
        if self.voted.has_voted(proposal_id).await {
            return Ok(VoteOutcome::AlreadyVoted);
        }
        let response = tx::submit_vote(wallet, &self.config, proposal_id, option_index).await?;
        self.voted.mark_voted(proposal_id).await;
        Ok(VoteOutcome::Submitted(response))
    }

    /// Whether a vote for this proposal was submitted in this session.
    pub async fn has_voted(&self, proposal_id: &ObjectId) -> bool {
        self.voted.has_voted(proposal_id).await
    }

    /// Publish a new proposal through the wallet collaborator. Requires the
    /// admin capability on chain; the draft is validated client-side first.
    pub async fn create_proposal(
        &self,
        wallet: &dyn WalletSigner,
        proposal: &NewProposal,
    ) -> DaoResult<TxResponse> {
        let now_ms = chrono::Utc::now().timestamp_millis() as u64;
        tx::submit_create_proposal(wallet, &self.config, proposal, now_ms).await
    }
}
