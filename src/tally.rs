//! Tally derivation from raw on-chain vote counters.
//!
//! Everything here is a pure computation over a snapshot: totals, unrounded
//! per-option ratios, and the winner/tie outcome. Rounding is a presentation
//! choice and happens only in [`Tally::rounded_percentages`].

use serde::{Deserialize, Serialize};

use crate::errors::DataShapeError;

/// Outcome label when no vote has been cast.
pub const NO_VOTES_LABEL: &str = "NO VOTES";

/// Outcome label when two or more options share the maximum count.
pub const TIE_LABEL: &str = "TIE";

/// Winning labels treated as affirmative by the display heuristic.
const AFFIRMATIVE_LABELS: &[&str] = &["yes", "setuju"];

/// Outcome of a proposal derived from its vote counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Not a single vote was cast.
    NoVotes,
    /// Two or more options share the maximum count.
    Tie,
    /// Exactly one option holds the maximum count.
    Winner { index: usize, label: String },
}

impl Outcome {
    /// Index of the winning option, when there is exactly one.
    pub fn winner_index(&self) -> Option<usize> {
        match self {
            Outcome::Winner { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Display label for the outcome. Winner labels keep the case the
    /// proposal author wrote.
    pub fn label(&self) -> &str {
        match self {
            Outcome::NoVotes => NO_VOTES_LABEL,
            Outcome::Tie => TIE_LABEL,
            Outcome::Winner { label, .. } => label,
        }
    }
}

/// Derived summary of a proposal's vote counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    /// Sum of all counters.
    pub total: u64,
    /// Unrounded per-option share of the total, in percent. All zeros when
    /// `total == 0`.
    pub percentages: Vec<f64>,
    pub outcome: Outcome,
}

impl Tally {
    /// Per-option percentages rounded to the nearest integer, independently.
    ///
    /// The rounded values sum to 100 only within a tolerance of
    /// `options.len() - 1` because each option rounds on its own.
    pub fn rounded_percentages(&self) -> Vec<u32> {
        self.percentages.iter().map(|p| p.round() as u32).collect()
    }
}

/// Derive totals, percentages, and the winner/tie outcome from index-aligned
/// vote counters and option labels.
///
/// Tie detection is exact integer equality across the full vote vector, not a
/// top-two comparison: with `[3, 3, 1]` the third option trailing does not
/// turn the tie into a win.
///
/// Zero-length input is a degenerate success (`total == 0`, no winner).
/// Misaligned lengths are an integration fault and fail with
/// [`DataShapeError`] instead of guessing an alignment.
pub fn derive_tally(votes: &[u64], options: &[String]) -> Result<Tally, DataShapeError> {
    if votes.len() != options.len() {
        return Err(DataShapeError::misaligned(votes.len(), options.len()));
    }

    let total: u64 = votes.iter().sum();
    if total == 0 {
        return Ok(Tally {
            total: 0,
            percentages: vec![0.0; votes.len()],
            outcome: Outcome::NoVotes,
        });
    }

    let max = votes.iter().copied().max().unwrap_or(0);
    let mut leaders = votes
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == max)
        .map(|(i, _)| i);

    let first = leaders.next();
    let outcome = match (first, leaders.next()) {
        (Some(index), None) => Outcome::Winner {
            index,
            label: options[index].clone(),
        },
        _ => Outcome::Tie,
    };

    let percentages = votes
        .iter()
        .map(|v| *v as f64 / total as f64 * 100.0)
        .collect();

    Ok(Tally {
        total,
        percentages,
        outcome,
    })
}

/// Display-level color classification of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Affirmative,
    Negative,
    Neutral,
}

/// Best-effort affirmative/negative classification of a winning label.
///
/// Matches the label case-insensitively against a small allow-list of
/// affirmative synonyms; everything else wins as `Negative`. This guesses
/// intent from free option text — there is no on-chain affirmative marker —
/// so it is a presentation heuristic, not a contract guarantee. Ties and
/// empty tallies are `Neutral`.
pub fn sentiment(outcome: &Outcome) -> Sentiment {
    match outcome {
        Outcome::Winner { label, .. } => {
            let lowered = label.to_lowercase();
            if AFFIRMATIVE_LABELS.contains(&lowered.as_str()) {
                Sentiment::Affirmative
            } else {
                Sentiment::Negative
            }
        }
        Outcome::NoVotes | Outcome::Tie => Sentiment::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_votes() {
        let tally = derive_tally(&[0, 0], &labels(&["Yes", "No"])).expect("valid input");
        assert_eq!(tally.total, 0);
        assert_eq!(tally.outcome, Outcome::NoVotes);
        assert_eq!(tally.outcome.label(), "NO VOTES");
        assert_eq!(tally.percentages, vec![0.0, 0.0]);
    }

    #[test]
    fn test_single_winner_preserves_case() {
        let tally = derive_tally(&[1, 5, 2], &labels(&["a", "MiXeD", "c"])).expect("valid input");
        assert_eq!(tally.outcome.winner_index(), Some(1));
        assert_eq!(tally.outcome.label(), "MiXeD");
    }

    #[test]
    fn test_tie_over_full_vector() {
        // Two leaders and a trailing third option: still a tie.
        let tally =
            derive_tally(&[3, 3, 1], &labels(&["Yes", "No", "Abstain"])).expect("valid input");
        assert_eq!(tally.total, 7);
        assert_eq!(tally.outcome, Outcome::Tie);
        assert_eq!(tally.outcome.label(), "TIE");
        assert!(tally.outcome.winner_index().is_none());

        assert!((tally.percentages[0] - 42.857).abs() < 0.01);
        assert!((tally.percentages[2] - 14.285).abs() < 0.01);
        assert_eq!(tally.rounded_percentages(), vec![43, 43, 14]);
        let sum: u32 = tally.rounded_percentages().iter().sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn test_misaligned_input_fails() {
        let err = derive_tally(&[1, 2], &labels(&["A"])).expect_err("must fail");
        assert_eq!(err.votes_len, Some(2));
        assert_eq!(err.options_len, Some(1));
    }

    #[test]
    fn test_empty_input_is_degenerate_success() {
        let tally = derive_tally(&[], &[]).expect("empty input is not an error");
        assert_eq!(tally.total, 0);
        assert_eq!(tally.outcome, Outcome::NoVotes);
        assert!(tally.percentages.is_empty());
    }

    #[test]
    fn test_sentiment_allow_list() {
        let win = |label: &str| Outcome::Winner {
            index: 0,
            label: label.to_string(),
        };
        assert_eq!(sentiment(&win("Yes")), Sentiment::Affirmative);
        assert_eq!(sentiment(&win("YES")), Sentiment::Affirmative);
        assert_eq!(sentiment(&win("Setuju")), Sentiment::Affirmative);
        assert_eq!(sentiment(&win("No")), Sentiment::Negative);
        assert_eq!(sentiment(&win("Option A")), Sentiment::Negative);
        assert_eq!(sentiment(&Outcome::Tie), Sentiment::Neutral);
        assert_eq!(sentiment(&Outcome::NoVotes), Sentiment::Neutral);
    }
}
