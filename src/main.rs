use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use infra_cost::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.get_command();

    // The server initializes tracing itself once the log format is known
    if !matches!(command, cli::Commands::Start) {
        init_tracing(false);
    }

    match command {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Calculate { file } => {
            commands::calculate::execute(file)?;
        }
        cli::Commands::Survey { file } => {
            commands::survey::execute(file)?;
        }
        cli::Commands::Estimate(estimate_args) => {
            commands::estimate::execute(estimate_args)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("infra-cost v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
