//! Proposal listing and detail views.

use clap::{Args, ValueEnum};
use console::style;

use crate::cli::utils::{
    create_table_with_headers, format_ms, load_config, now_ms, percent_bar, print_info, short_id,
    spinner,
};
use crate::cli::Cli;
use crate::dao::DaoClient;
use crate::status::{partition, ProposalStatus};
use crate::tally::derive_tally;
use crate::types::{ObjectId, Proposal};

/// Which proposals to list.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Active,
    Closed,
}

/// Proposal listing command
#[derive(Args, Clone)]
pub struct ProposalsCommand {
    /// Restrict the list to active or closed proposals
    #[arg(long, value_enum, default_value = "all")]
    pub filter: StatusFilter,
}

/// List proposals
pub async fn execute(cmd: ProposalsCommand, cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let dao = DaoClient::new(config)?;

    let sp = spinner("Fetching proposals...");
    let snapshot = dao
        .refresh()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch proposals: {}", e))?;
    sp.finish_and_clear();

    let now = now_ms();
    let (active, closed) = partition(&snapshot.proposals, now);
    let rows: Vec<&Proposal> = match cmd.filter {
        StatusFilter::All => snapshot.proposals.iter().collect(),
        StatusFilter::Active => active.clone(),
        StatusFilter::Closed => closed.clone(),
    };

    if rows.is_empty() {
        print_info("No proposals found");
        return Ok(());
    }

    let mut table =
        create_table_with_headers(&["ID", "Title", "Status", "Deadline", "Votes", "Voters"]);
    for proposal in &rows {
        table.add_row(vec![
            short_id(&proposal.id),
            proposal.title.clone(),
            proposal.status(now).to_string(),
            format_ms(proposal.deadline_ms),
            proposal.total_votes().to_string(),
            proposal.unique_voters().to_string(),
        ]);
    }

    println!("\n{table}");
    println!(
        "\nTotal proposals: {} ({} active, {} closed)",
        snapshot.len(),
        active.len(),
        closed.len()
    );

    Ok(())
}

/// Show one proposal with live statistics
pub async fn show(id: &str, cli: &Cli) -> anyhow::Result<()> {
    let proposal_id: ObjectId = id.parse()?;
    let config = load_config(cli)?;
    let dao = DaoClient::new(config)?;

    let sp = spinner("Fetching proposal...");
    let proposal = dao
        .proposal(&proposal_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch proposal: {}", e))?;
    sp.finish_and_clear();

    let now = now_ms();
    let status = proposal.status(now);
    let badge = match status {
        ProposalStatus::Open => style(status.to_string()).green().bold(),
        ProposalStatus::Closed => style(status.to_string()).red().bold(),
    };

    println!("\n[{badge}] {}", style(&proposal.title).bold());
    println!("ID: {}", proposal.id);
    println!("Deadline: {}", format_ms(proposal.deadline_ms));
    println!(
        "Votes: {}   Voters: {}",
        proposal.total_votes(),
        proposal.unique_voters()
    );

    println!("\n{}", style("Description").bold());
    println!("{}", proposal.description);

    let tally = derive_tally(&proposal.votes, &proposal.options)?;
    let rounded = tally.rounded_percentages();

    println!("\n{}", style("Live Statistics").bold());
    for (idx, option) in proposal.options.iter().enumerate() {
        println!(
            "  {:<20} {:>4}% {} {} votes",
            option,
            rounded[idx],
            percent_bar(tally.percentages[idx], 24),
            proposal.votes[idx]
        );
    }

    if status == ProposalStatus::Open {
        println!(
            "\nCast a vote with: daocli vote {} <option-index> --wallet-url <bridge>",
            proposal.id
        );
    } else {
        println!("\nThis proposal has ended.");
    }

    Ok(())
}
