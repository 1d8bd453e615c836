use anyhow::{Context, Result};
use colored::Colorize;
use infra_cost::survey::{bucket_frequencies, most_common_response};
use std::path::PathBuf;
use tracing::info;

use super::read_input;

/// Execute the survey command
///
/// Input is a JSON array of day buckets, each an array of response strings.
pub fn execute(file: Option<PathBuf>) -> Result<()> {
    let input = read_input(file.as_deref())?;
    let buckets: Vec<Vec<String>> = serde_json::from_str(&input)
        .context("Invalid input: expected a JSON array of string arrays")?;

    let winner = most_common_response(&buckets)?;
    let days = bucket_frequencies(&buckets)
        .get(winner.as_str())
        .copied()
        .unwrap_or(0);

    info!(buckets = buckets.len(), "Aggregated survey responses");

    println!(
        "{} {} ({} of {} days)",
        "Most common response:".green().bold(),
        winner,
        days,
        buckets.len()
    );

    Ok(())
}
