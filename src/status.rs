//! Open/closed classification of proposals against a caller-supplied clock.
//!
//! Status is never persisted: it is a pure function of wall-clock time and
//! can flip from open to closed without any write to the proposal. Callers
//! inject `now_ms`, which keeps every function here trivially testable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Proposal;

/// Voting status of a proposal at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalStatus {
    Open,
    Closed,
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposalStatus::Open => write!(f, "OPEN"),
            ProposalStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

/// Classify a deadline against the supplied clock.
///
/// The boundary is closed-inclusive: `now_ms == deadline_ms` is `Closed`.
/// No skew correction, no grace period.
pub fn classify(deadline_ms: u64, now_ms: u64) -> ProposalStatus {
    if now_ms < deadline_ms {
        ProposalStatus::Open
    } else {
        ProposalStatus::Closed
    }
}

/// Split proposals into `(active, closed)`, preserving the source order
/// within each half. A stable partition, not a re-sort.
pub fn partition(proposals: &[Proposal], now_ms: u64) -> (Vec<&Proposal>, Vec<&Proposal>) {
    let mut active = Vec::new();
    let mut closed = Vec::new();
    for proposal in proposals {
        match classify(proposal.deadline_ms, now_ms) {
            ProposalStatus::Open => active.push(proposal),
            ProposalStatus::Closed => closed.push(proposal),
        }
    }
    (active, closed)
}
