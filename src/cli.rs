use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "infra-cost", version, about = "Infrastructure cost estimation tools")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the pricing API server (default)
    Start,

    /// Price a cost request (JSON, same shape as POST /api/calculate)
    Calculate {
        /// Read the request from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Find the most common survey response across day buckets
    Survey {
        /// JSON array of day buckets, e.g. [["good","ok"],["ok"]]; stdin if omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Estimate a project's cost from form selections
    Estimate(crate::commands::estimate::EstimateArgs),

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
