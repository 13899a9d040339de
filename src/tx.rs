//! Construction and submission of the DAO's two entry-function calls.
//!
//! Only semantic arguments are built here — which option index, which
//! deadline. The deadline cutoff itself is never enforced client-side: the
//! contract rejects late votes and that rejection surfaces as a transaction
//! failure.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

use crate::config::Config;
use crate::core::constants::{CLOCK_OBJECT_ID, VOTE_MODULE};
use crate::errors::{DaoResult, InvalidProposal};
use crate::types::{CallArg, MoveCall, ObjectId, TxResponse};
use crate::wallet::WalletSigner;

fn clock_arg() -> CallArg {
    let clock = ObjectId::from_str(CLOCK_OBJECT_ID).expect("clock object id is valid");
    CallArg::object(&clock)
}

/// Build the `vote` entry-function call.
pub fn vote_call(config: &Config, proposal_id: &ObjectId, option_index: u64) -> MoveCall {
    MoveCall {
        package: config.package_id.clone(),
        module: VOTE_MODULE.to_string(),
        function: "vote".to_string(),
        arguments: vec![
            CallArg::object(&config.dao_id),
            CallArg::pure(proposal_id.as_str()),
            CallArg::pure(option_index),
            clock_arg(),
        ],
    }
}

/// Sign and broadcast a vote through the wallet collaborator.
pub async fn submit_vote(
    wallet: &dyn WalletSigner,
    config: &Config,
    proposal_id: &ObjectId,
    option_index: u64,
) -> DaoResult<TxResponse> {
    let call = vote_call(config, proposal_id, option_index);
    info!(proposal = %proposal_id, option_index, "submitting vote");
    let response = wallet.sign_and_execute(&call).await?;
    info!(digest = %response.digest, "vote cast");
    Ok(response)
}

/// A draft proposal, validated client-side before any wallet round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProposal {
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
    pub deadline_ms: u64,
}

impl NewProposal {
    /// Reject drafts the contract would refuse anyway: empty text fields,
    /// fewer than two options, a deadline that is not in the future.
    pub fn validate(&self, now_ms: u64) -> Result<(), InvalidProposal> {
        if self.title.trim().is_empty() {
            return Err(InvalidProposal::with_field("title must not be empty", "title"));
        }
        if self.description.trim().is_empty() {
            return Err(InvalidProposal::with_field(
                "description must not be empty",
                "description",
            ));
        }
        if self.options.len() < 2 {
            return Err(InvalidProposal::with_field(
                "at least two options are required",
                "options",
            ));
        }
        if self.deadline_ms <= now_ms {
            return Err(InvalidProposal::with_field(
                "deadline must be in the future",
                "deadline_ms",
            ));
        }
        Ok(())
    }
}

/// Split a comma-separated option string into labels, dropping empties.
///
/// `"Yes, No"` becomes `["Yes", "No"]`.
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the `create_proposal` entry-function call.
pub fn create_proposal_call(config: &Config, proposal: &NewProposal) -> MoveCall {
    MoveCall {
        package: config.package_id.clone(),
        module: VOTE_MODULE.to_string(),
        function: "create_proposal".to_string(),
        arguments: vec![
            CallArg::object(&config.admin_cap_id),
            CallArg::object(&config.dao_id),
            CallArg::pure(proposal.title.clone()),
            CallArg::pure(proposal.description.clone()),
            CallArg::pure(proposal.options.clone()),
            CallArg::pure(proposal.deadline_ms),
            clock_arg(),
        ],
    }
}

/// Validate a draft against the supplied clock, then sign and broadcast it
/// through the wallet collaborator.
pub async fn submit_create_proposal(
    wallet: &dyn WalletSigner,
    config: &Config,
    proposal: &NewProposal,
    now_ms: u64,
) -> DaoResult<TxResponse> {
    proposal.validate(now_ms)?;
    let call = create_proposal_call(config, proposal);
    info!(title = %proposal.title, options = proposal.options.len(), "submitting proposal");
    let response = wallet.sign_and_execute(&call).await?;
    info!(digest = %response.digest, "proposal published");
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::new(
            "0xabc".parse().expect("valid id"),
            "0xdef".parse().expect("valid id"),
            "0x123".parse().expect("valid id"),
        )
    }

    fn draft() -> NewProposal {
        NewProposal {
            title: "Fund the grant".to_string(),
            description: "Pay the team".to_string(),
            options: vec!["Yes".to_string(), "No".to_string()],
            deadline_ms: 2_000,
        }
    }

    #[test]
    fn test_vote_call_shape() {
        let config = config();
        let proposal_id: ObjectId = "0x11".parse().expect("valid id");
        let call = vote_call(&config, &proposal_id, 1);

        assert!(call.target().ends_with("::vote::vote"));
        assert_eq!(call.arguments.len(), 4);
        assert_eq!(call.arguments[0], CallArg::object(&config.dao_id));
        assert_eq!(call.arguments[2], CallArg::pure(1u64));
        // Last argument is always the shared clock.
        assert_eq!(call.arguments[3], clock_arg());
    }

    #[test]
    fn test_create_call_shape() {
        let config = config();
        let call = create_proposal_call(&config, &draft());
        assert!(call.target().ends_with("::vote::create_proposal"));
        assert_eq!(call.arguments.len(), 7);
        assert_eq!(call.arguments[0], CallArg::object(&config.admin_cap_id));
        assert_eq!(call.arguments[1], CallArg::object(&config.dao_id));
    }

    #[test]
    fn test_validation_rejects_bad_drafts() {
        let now = 1_000;
        assert!(draft().validate(now).is_ok());

        let mut blank_title = draft();
        blank_title.title = "  ".to_string();
        assert_eq!(
            blank_title.validate(now).expect_err("must fail").field.as_deref(),
            Some("title")
        );

        let mut one_option = draft();
        one_option.options.pop();
        assert_eq!(
            one_option.validate(now).expect_err("must fail").field.as_deref(),
            Some("options")
        );

        let mut past_deadline = draft();
        past_deadline.deadline_ms = 1_000;
        assert_eq!(
            past_deadline
                .validate(now)
                .expect_err("must fail")
                .field
                .as_deref(),
            Some("deadline_ms")
        );
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(parse_options("Yes, No"), vec!["Yes", "No"]);
        assert_eq!(parse_options(" a ,, b , "), vec!["a", "b"]);
        assert!(parse_options("").is_empty());
    }
}
