//! Property-based tests for the tally engine and status classifier.
//!
//! Uses proptest to verify the derivation invariants hold across a wide
//! range of vote vectors, not just the handful of worked examples.

use proptest::prelude::*;
use suivote_rs::{classify, derive_tally, Outcome, ProposalStatus};

fn votes_and_options() -> impl Strategy<Value = (Vec<u64>, Vec<String>)> {
    prop::collection::vec(0u64..10_000, 1..8).prop_map(|votes| {
        let options = (0..votes.len()).map(|i| format!("Option {i}")).collect();
        (votes, options)
    })
}

proptest! {
    #[test]
    fn zero_total_has_no_winner((votes, options) in votes_and_options()) {
        let zeroed: Vec<u64> = votes.iter().map(|_| 0).collect();
        let tally = derive_tally(&zeroed, &options).unwrap();
        prop_assert_eq!(tally.total, 0);
        prop_assert!(tally.outcome.winner_index().is_none());
        prop_assert_eq!(tally.outcome.label(), "NO VOTES");
        prop_assert!(tally.percentages.iter().all(|p| *p == 0.0));
    }

    #[test]
    fn outcome_matches_leader_count((votes, options) in votes_and_options()) {
        let tally = derive_tally(&votes, &options).unwrap();
        let total: u64 = votes.iter().sum();
        prop_assume!(total > 0);

        let max = *votes.iter().max().unwrap();
        let leaders = votes.iter().filter(|v| **v == max).count();
        match &tally.outcome {
            Outcome::Winner { index, label } => {
                prop_assert_eq!(leaders, 1);
                prop_assert_eq!(votes[*index], max);
                prop_assert_eq!(label, &options[*index]);
            }
            Outcome::Tie => prop_assert!(leaders > 1),
            Outcome::NoVotes => prop_assert!(false, "positive total cannot be NoVotes"),
        }
    }

    #[test]
    fn unrounded_percentages_sum_to_100((votes, options) in votes_and_options()) {
        let tally = derive_tally(&votes, &options).unwrap();
        prop_assume!(tally.total > 0);
        let sum: f64 = tally.percentages.iter().sum();
        prop_assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn rounded_percentages_sum_within_tolerance((votes, options) in votes_and_options()) {
        let tally = derive_tally(&votes, &options).unwrap();
        prop_assume!(tally.total > 0);
        // Each option rounds independently, so the sum can drift by at most
        // one per option beyond the first.
        let sum: i64 = tally.rounded_percentages().iter().map(|p| *p as i64).sum();
        let tolerance = options.len() as i64 - 1;
        prop_assert!((sum - 100).abs() <= tolerance);
    }

    #[test]
    fn deadline_boundary_is_closed(deadline in 1u64..u64::MAX) {
        prop_assert_eq!(classify(deadline, deadline), ProposalStatus::Closed);
        prop_assert_eq!(classify(deadline, deadline - 1), ProposalStatus::Open);
    }
}
