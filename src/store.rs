//! Shared snapshot state and optimistic vote tracking.
//!
//! Fetches race freely: nothing orders a refresh against another refresh or
//! against chain-side propagation after a vote. The store's job is to make
//! sure a superseded fetch can never clobber the screen that outlived it —
//! the last request whose completion is observed wins, never "requests
//! complete in the order issued".

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::types::{ObjectId, Snapshot};

/// Proof that a fetch was started; only the newest ticket may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Debug, Default)]
struct StoreInner {
    snapshot: Option<Arc<Snapshot>>,
    latest_issued: u64,
}

/// Holder of the current, read-only snapshot shared by every consumer.
///
/// Committed snapshots are handed out behind `Arc`: the tally engine, the
/// status classifier, and the display layer all derive fresh values from the
/// same immutable data without coordination.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    inner: Mutex<StoreInner>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the start of a fetch. Issuing a new ticket supersedes every
    /// ticket issued before it.
    pub async fn begin_fetch(&self) -> FetchTicket {
        let mut inner = self.inner.lock().await;
        inner.latest_issued += 1;
        FetchTicket {
            generation: inner.latest_issued,
        }
    }

    /// Apply a completed fetch. Returns `false` and discards the result when
    /// the ticket has been superseded by a newer `begin_fetch`.
    pub async fn commit(&self, ticket: FetchTicket, snapshot: Snapshot) -> bool {
        let mut inner = self.inner.lock().await;
        if ticket.generation < inner.latest_issued {
            debug!(
                generation = ticket.generation,
                latest = inner.latest_issued,
                "discarding superseded snapshot fetch"
            );
            return false;
        }
        inner.snapshot = Some(Arc::new(snapshot));
        true
    }

    /// The most recently committed snapshot, if any.
    pub async fn current(&self) -> Option<Arc<Snapshot>> {
        self.inner.lock().await.snapshot.clone()
    }
}

/// Client-side record of successful vote submissions.
///
/// Post-vote tallies are eventually consistent — a re-read may race the
/// chain's own propagation — so the "you have voted" state is tracked
/// optimistically here at submission time instead of being derived from the
/// next snapshot. Marking is idempotent: a re-render never re-submits.
#[derive(Debug, Default)]
pub struct VotedRegistry {
    voted: Mutex<HashSet<ObjectId>>,
}

impl VotedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful submission. Returns `true` only the first time a
    /// proposal is marked.
    pub async fn mark_voted(&self, proposal_id: &ObjectId) -> bool {
        self.voted.lock().await.insert(proposal_id.clone())
    }

    /// Whether a vote was already submitted for this proposal in this
    /// session.
    pub async fn has_voted(&self, proposal_id: &ObjectId) -> bool {
        self.voted.lock().await.contains(proposal_id)
    }
}
