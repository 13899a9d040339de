//! CLI utility functions for terminal interaction and formatting.

use chrono::{TimeZone, Utc};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use console::{style, Term};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::cli::Cli;
use crate::config::Config;
use crate::types::ObjectId;

/// Resolve the effective configuration: environment first, then the global
/// CLI flags on top.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(network) = &cli.network {
        config = config.with_network(network);
    }
    if let Some(rpc_url) = &cli.rpc_url {
        config.rpc_url = rpc_url.clone();
    }
    Ok(config)
}

/// Current wall-clock time in milliseconds since the epoch.
pub fn now_ms() -> u64 {
    Utc::now().timestamp_millis() as u64
}

/// Render an epoch-milliseconds timestamp for display.
pub fn format_ms(ms: u64) -> String {
    match Utc.timestamp_millis_opt(ms as i64).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => format!("{ms} ms"),
    }
}

/// Abbreviate a canonical object id for table columns.
pub fn short_id(id: &ObjectId) -> String {
    let s = id.as_str();
    format!("{}…{}", &s[..4], &s[s.len() - 4..])
}

/// A fixed-width unicode bar for a percentage value.
pub fn percent_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Prompt for confirmation. If `no_prompt` is true, returns true without
/// prompting.
pub fn confirm(message: &str, no_prompt: bool) -> bool {
    if no_prompt {
        return true;
    }

    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Create a spinner progress bar with message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.blue} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Create a table with the standard preset and headers.
pub fn create_table_with_headers(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.to_vec());
    table
}

/// Print success message in green.
pub fn print_success(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("✓").green().bold(), message));
}

/// Print error message in red.
pub fn print_error(message: &str) {
    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {}", style("✗").red().bold(), message));
}

/// Print info message in blue.
pub fn print_info(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("ℹ").blue().bold(), message));
}

/// Print warning message in yellow.
pub fn print_warning(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("⚠").yellow().bold(), message));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_short_id() {
        let id = ObjectId::from_str("0x6").expect("valid id");
        let short = short_id(&id);
        assert!(short.starts_with("0x00"));
        assert!(short.ends_with("0006"));
    }

    #[test]
    fn test_percent_bar_bounds() {
        assert_eq!(percent_bar(0.0, 10), "░".repeat(10));
        assert_eq!(percent_bar(100.0, 10), "█".repeat(10));
        assert_eq!(percent_bar(150.0, 10), "█".repeat(10));
        let half = percent_bar(50.0, 10);
        assert_eq!(half.chars().filter(|c| *c == '█').count(), 5);
    }

    #[test]
    fn test_format_ms() {
        let formatted = format_ms(0);
        assert!(formatted.starts_with("1970-01-01"));
    }
}
