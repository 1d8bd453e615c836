use anyhow::Result;
use colored::Colorize;
use infra_cost::config;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration after defaults, file and environment
/// are merged
pub fn show(path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", toml::to_string_pretty(&cfg)?);

    Ok(())
}

/// Execute the config validate command
pub fn validate(path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file {}", path.display());

    let cfg = config::load_config(path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}:{}", "Listen".cyan(), cfg.server.host, cfg.server.port);
    println!("  {}: {}", "Log Format".cyan(), cfg.server.log_format);
    println!("  {}: {} bytes", "Body Limit".cyan(), cfg.server.body_limit_bytes);
    println!(
        "  {}: {}",
        "Metrics".cyan(),
        if cfg.metrics.enabled {
            format!("enabled at {}", cfg.metrics.endpoint).green()
        } else {
            "disabled".red()
        }
    );

    info!("Configuration validation successful");
    Ok(())
}
