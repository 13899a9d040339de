//! Vote submission through a wallet bridge.

use clap::Args;
use dialoguer::Select;

use crate::cli::utils::{
    confirm, format_ms, load_config, now_ms, print_error, print_info, print_success, print_warning,
    spinner,
};
use crate::cli::Cli;
use crate::dao::{DaoClient, VoteOutcome};
use crate::status::ProposalStatus;
use crate::types::ObjectId;
use crate::wallet::HttpWalletBridge;

/// Vote command
#[derive(Args, Clone)]
pub struct VoteCommand {
    /// Proposal object id
    pub id: String,

    /// Zero-based option index (interactive selection when omitted)
    pub option: Option<u64>,

    /// Wallet bridge endpoint that signs and broadcasts the transaction
    #[arg(long)]
    pub wallet_url: String,
}

/// Cast a vote on a proposal
pub async fn execute(cmd: VoteCommand, cli: &Cli) -> anyhow::Result<()> {
    let proposal_id: ObjectId = cmd.id.parse()?;
    let config = load_config(cli)?;
    let dao = DaoClient::new(config)?;

    let sp = spinner("Fetching proposal...");
    let proposal = dao
        .proposal(&proposal_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch proposal: {}", e))?;
    sp.finish_and_clear();

    if proposal.status(now_ms()) == ProposalStatus::Closed {
        print_warning(&format!(
            "'{}' ended on {}",
            proposal.title,
            format_ms(proposal.deadline_ms)
        ));
        return Ok(());
    }

    if dao.has_voted(&proposal_id).await {
        print_info("You have already voted on this proposal in this session");
        return Ok(());
    }

    let option_index = match cmd.option {
        Some(index) => index,
        None => {
            if cli.no_prompt {
                anyhow::bail!("an option index is required with --no-prompt");
            }
            Select::new()
                .with_prompt(format!("Cast your vote on '{}'", proposal.title))
                .items(&proposal.options)
                .default(0)
                .interact()? as u64
        }
    };

    let label = proposal
        .options
        .get(option_index as usize)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "option index {} is out of range ({} options)",
                option_index,
                proposal.options.len()
            )
        })?;

    if !confirm(
        &format!("Vote '{}' on '{}'?", label, proposal.title),
        cli.no_prompt,
    ) {
        print_info("Aborted");
        return Ok(());
    }

    let wallet = HttpWalletBridge::new(&cmd.wallet_url)?;

    let sp = spinner("Submitting vote...");
    let outcome = dao.vote(&wallet, &proposal_id, option_index).await;
    sp.finish_and_clear();

    match outcome {
        Ok(VoteOutcome::Submitted(tx)) => {
            print_success(&format!("Vote successfully cast! Digest: {}", tx.digest));
            Ok(())
        }
        Ok(VoteOutcome::AlreadyVoted) => {
            print_info("You have already voted on this proposal in this session");
            Ok(())
        }
        Err(e) => {
            print_error(&format!("Voting failed: {}", e));
            Err(e.into())
        }
    }
}
