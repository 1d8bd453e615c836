use anyhow::Result;
use colored::Colorize;
use infra_cost::{config, init_tracing, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// Tracing is initialized here, after the configuration is loaded, so the
/// configured log format applies from the first line.
pub async fn execute(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    init_tracing(cfg.server.log_format == "json");

    println!("{}", "Starting cost calculator...".green());
    info!("Configuration loaded from {}", config_path.display());

    server::start_server(cfg).await
}
