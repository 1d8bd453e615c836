//! Command implementations for the CLI
//!
//! - start: Start the pricing API server
//! - calculate: Price a single cost request
//! - survey: Most common survey response
//! - estimate: Project cost estimator
//! - config: Configuration display and validation

pub mod calculate;
pub mod config;
pub mod estimate;
pub mod start;
pub mod survey;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read command input from a file, or from stdin when no file is given
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
