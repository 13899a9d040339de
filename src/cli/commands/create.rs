//! Proposal creation, gated on the admin capability.

use clap::Args;

use crate::cli::utils::{
    confirm, format_ms, load_config, now_ms, print_error, print_info, print_success, spinner,
};
use crate::cli::Cli;
use crate::dao::DaoClient;
use crate::tx::{parse_options, NewProposal};
use crate::types::SuiAddress;
use crate::wallet::HttpWalletBridge;

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Create-proposal command
#[derive(Args, Clone)]
pub struct CreateCommand {
    /// Proposal title
    #[arg(long)]
    pub title: String,

    /// Proposal description (may contain markdown)
    #[arg(long)]
    pub description: String,

    /// Comma-separated option labels, e.g. "Yes, No"
    #[arg(long)]
    pub options: String,

    /// Voting duration in days from now
    #[arg(long, default_value_t = 7)]
    pub days: u64,

    /// Address of the connected wallet (checked for the admin capability)
    #[arg(long)]
    pub sender: String,

    /// Wallet bridge endpoint that signs and broadcasts the transaction
    #[arg(long)]
    pub wallet_url: String,
}

/// Publish a new proposal
pub async fn execute(cmd: CreateCommand, cli: &Cli) -> anyhow::Result<()> {
    let sender: SuiAddress = cmd.sender.parse()?;
    let config = load_config(cli)?;
    let dao = DaoClient::new(config)?;

    let sp = spinner("Checking admin capability...");
    let is_admin = dao
        .is_admin(&sender)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to check admin capability: {}", e))?;
    sp.finish_and_clear();

    if !is_admin {
        print_error("Access denied: only the admin can create proposals");
        anyhow::bail!("address {} does not own the admin capability", sender);
    }

    let proposal = NewProposal {
        title: cmd.title.clone(),
        description: cmd.description.clone(),
        options: parse_options(&cmd.options),
        deadline_ms: now_ms() + cmd.days * MS_PER_DAY,
    };

    println!("\nTitle:    {}", proposal.title);
    println!("Options:  {}", proposal.options.join(" / "));
    println!("Deadline: {}", format_ms(proposal.deadline_ms));

    if !confirm("Publish this proposal?", cli.no_prompt) {
        print_info("Aborted");
        return Ok(());
    }

    let wallet = HttpWalletBridge::new(&cmd.wallet_url)?;

    let sp = spinner("Publishing proposal...");
    let result = dao.create_proposal(&wallet, &proposal).await;
    sp.finish_and_clear();

    match result {
        Ok(tx) => {
            print_success(&format!("Proposal published! Digest: {}", tx.digest));
            Ok(())
        }
        Err(e) => {
            print_error(&format!("Failed to publish proposal: {}", e));
            Err(e.into())
        }
    }
}
