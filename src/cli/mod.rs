//! Command-line client for the voting DAO.
//!
//! # Commands
//!
//! - `proposals` - List proposals with status and vote totals
//! - `show` - One proposal with live statistics
//! - `results` - Final outcomes of closed proposals
//! - `vote` - Cast a vote through a wallet bridge
//! - `create` - Publish a new proposal (admin capability required)

use clap::{Parser, Subcommand};

pub mod commands;
pub mod utils;

use crate::config::ENV_DEBUG;
use crate::logging::{init_logging, LogFormat, LoggingConfig};

/// DAO voting CLI
#[derive(Parser)]
#[command(name = "daocli")]
#[command(version = "0.1.0")]
#[command(about = "Terminal client for an on-chain voting DAO on Sui", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Network to connect to (mainnet, testnet, devnet, local)
    #[arg(short, long, global = true)]
    pub network: Option<String>,

    /// Custom fullnode RPC endpoint (overrides --network)
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Don't prompt for confirmations (auto-approve)
    #[arg(long, global = true)]
    pub no_prompt: bool,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List proposals
    #[command(alias = "p")]
    Proposals(commands::proposals::ProposalsCommand),

    /// Show one proposal with live statistics
    Show {
        /// Proposal object id
        id: String,
    },

    /// Show final results of closed proposals
    #[command(alias = "r")]
    Results {
        /// Proposal object id (all closed proposals when omitted)
        id: Option<String>,
    },

    /// Cast a vote on a proposal
    Vote(commands::vote::VoteCommand),

    /// Create a new proposal (requires the admin capability)
    Create(commands::create::CreateCommand),
}

/// Run the CLI application
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        debug: std::env::var(ENV_DEBUG).is_ok(),
        format: LogFormat::Compact,
        ..Default::default()
    });

    match &cli.command {
        Commands::Proposals(cmd) => commands::proposals::execute(cmd.clone(), &cli).await,
        Commands::Show { id } => commands::proposals::show(id, &cli).await,
        Commands::Results { id } => commands::results::execute(id.as_deref(), &cli).await,
        Commands::Vote(cmd) => commands::vote::execute(cmd.clone(), &cli).await,
        Commands::Create(cmd) => commands::create::execute(cmd.clone(), &cli).await,
    }
}
