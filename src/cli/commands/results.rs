//! Final results of closed proposals.

use comfy_table::{Cell, Color};
use console::style;

use crate::cli::utils::{
    create_table_with_headers, format_ms, load_config, now_ms, percent_bar, print_info, short_id,
    spinner,
};
use crate::cli::Cli;
use crate::core::constants::EXPLORER_URL;
use crate::dao::DaoClient;
use crate::status::partition;
use crate::tally::{derive_tally, sentiment, Sentiment, Tally};
use crate::types::{ObjectId, Proposal};

/// Show final results: all closed proposals, or one breakdown.
pub async fn execute(id: Option<&str>, cli: &Cli) -> anyhow::Result<()> {
    match id {
        Some(id) => show_result(id, cli).await,
        None => list_results(cli).await,
    }
}

fn outcome_cell(tally: &Tally) -> Cell {
    let label = tally.outcome.label().to_uppercase();
    match sentiment(&tally.outcome) {
        Sentiment::Affirmative => Cell::new(label).fg(Color::Green),
        Sentiment::Negative => Cell::new(label).fg(Color::Red),
        Sentiment::Neutral => Cell::new(label).fg(Color::Grey),
    }
}

/// List the outcome of every finished proposal.
async fn list_results(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let dao = DaoClient::new(config)?;

    let sp = spinner("Fetching results...");
    let snapshot = dao
        .refresh()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch proposals: {}", e))?;
    sp.finish_and_clear();

    let (_, closed) = partition(&snapshot.proposals, now_ms());
    if closed.is_empty() {
        print_info("No closed proposals yet");
        return Ok(());
    }

    let mut table =
        create_table_with_headers(&["ID", "Title", "Final Outcome", "Total Votes", "Ended"]);
    for proposal in &closed {
        let tally = derive_tally(&proposal.votes, &proposal.options)?;
        table.add_row(vec![
            Cell::new(short_id(&proposal.id)),
            Cell::new(&proposal.title),
            outcome_cell(&tally),
            Cell::new(tally.total),
            Cell::new(format_ms(proposal.deadline_ms)),
        ]);
    }

    println!("\n{table}");
    println!("\nClosed proposals: {}", closed.len());

    Ok(())
}

/// Full breakdown for one finished proposal.
async fn show_result(id: &str, cli: &Cli) -> anyhow::Result<()> {
    let proposal_id: ObjectId = id.parse()?;
    let config = load_config(cli)?;
    let dao_id = config.dao_id.clone();
    let dao = DaoClient::new(config)?;

    let sp = spinner("Fetching result...");
    let proposal = dao
        .proposal(&proposal_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch result: {}", e))?;
    sp.finish_and_clear();

    let tally = derive_tally(&proposal.votes, &proposal.options)?;
    print_breakdown(&proposal, &tally, dao_id.as_str());

    Ok(())
}

fn print_breakdown(proposal: &Proposal, tally: &Tally, dao_id: &str) {
    let label = tally.outcome.label().to_uppercase();
    let headline = match sentiment(&tally.outcome) {
        Sentiment::Affirmative => style(label).green().bold(),
        Sentiment::Negative => style(label).red().bold(),
        Sentiment::Neutral => style(label).dim().bold(),
    };

    println!("\n{}", style("FINAL RESULT").dim());
    println!("{headline}");
    println!("Ended on {}", format_ms(proposal.deadline_ms));

    let rounded = tally.rounded_percentages();
    println!("\n{}", style("Vote Breakdown").bold());
    for (idx, option) in proposal.options.iter().enumerate() {
        let marker = if tally.outcome.winner_index() == Some(idx) {
            "▸"
        } else {
            " "
        };
        println!(
            "{marker} {:<20} {:>4}% {} {} votes",
            option,
            rounded[idx],
            percent_bar(tally.percentages[idx], 24),
            proposal.votes[idx]
        );
    }

    println!(
        "\nTotal Votes: {}   Unique Wallets: {}",
        tally.total,
        proposal.unique_voters()
    );

    println!("\n{}", style("Proposal Context").bold());
    println!("{}", proposal.title);
    println!("{}", proposal.description);
    println!("\nID: {}", proposal.id);
    println!("Verify on explorer: {}/{}", EXPLORER_URL, dao_id);
}
