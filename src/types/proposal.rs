//! In-memory shape of the DAO's proposals.

use serde::{Deserialize, Serialize};

use crate::status::{classify, ProposalStatus};
use crate::types::{ObjectId, SuiAddress};

/// One governance question submitted to the DAO.
///
/// Everything except `votes` and `voters` is immutable after creation; those
/// two grow only through chain-side vote transactions. `votes[i]` is the
/// counter for `options[i]` — index position is the canonical identity of an
/// option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// Chain-assigned object id, unique within the DAO.
    pub id: ObjectId,
    pub title: String,
    /// Free-form text; may contain lightweight markup.
    pub description: String,
    /// Ordered option labels, length >= 2 by contract convention.
    pub options: Vec<String>,
    /// Vote counters, index-aligned with `options`, monotonically
    /// non-decreasing over the proposal's lifetime.
    pub votes: Vec<u64>,
    /// Voting cutoff, milliseconds since the epoch.
    pub deadline_ms: u64,
    /// Addresses that have voted; used only for the unique-voter count.
    pub voters: Vec<SuiAddress>,
}

impl Proposal {
    /// Sum of all vote counters.
    pub fn total_votes(&self) -> u64 {
        self.votes.iter().sum()
    }

    /// Number of distinct wallets that have voted.
    pub fn unique_voters(&self) -> usize {
        self.voters.len()
    }

    /// Open/closed classification against a caller-supplied clock.
    pub fn status(&self, now_ms: u64) -> ProposalStatus {
        classify(self.deadline_ms, now_ms)
    }
}

/// A point-in-time, read-only copy of the DAO's proposal collection.
///
/// Proposals appear in the order the chain supplied them; any sorting or
/// filtering is the consumer's concern. Derived values (tallies, status)
/// are always fresh computations over a snapshot, never in-place updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub proposals: Vec<Proposal>,
}

impl Snapshot {
    pub fn new(proposals: Vec<Proposal>) -> Self {
        Self { proposals }
    }

    /// Look up a proposal by object id.
    pub fn find(&self, id: &ObjectId) -> Option<&Proposal> {
        self.proposals.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn proposal(id: &str, votes: Vec<u64>) -> Proposal {
        Proposal {
            id: ObjectId::from_str(id).expect("valid id"),
            title: "Test".to_string(),
            description: String::new(),
            options: votes.iter().map(|_| "opt".to_string()).collect(),
            votes,
            deadline_ms: 1_000,
            voters: Vec::new(),
        }
    }

    #[test]
    fn test_totals() {
        let p = proposal("0x1", vec![3, 4, 0]);
        assert_eq!(p.total_votes(), 7);
        assert_eq!(p.unique_voters(), 0);
    }

    #[test]
    fn test_status_uses_injected_clock() {
        let p = proposal("0x1", vec![0, 0]);
        assert_eq!(p.status(999), ProposalStatus::Open);
        assert_eq!(p.status(1_000), ProposalStatus::Closed);
    }

    #[test]
    fn test_snapshot_find() {
        let snapshot = Snapshot::new(vec![proposal("0x1", vec![1, 2]), proposal("0x2", vec![0])]);
        let wanted = ObjectId::from_str("0x2").expect("valid id");
        assert!(snapshot.find(&wanted).is_some());
        let missing = ObjectId::from_str("0x3").expect("valid id");
        assert!(snapshot.find(&missing).is_none());
        assert_eq!(snapshot.len(), 2);
    }
}
