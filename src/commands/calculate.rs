use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use infra_cost::pricing::{CostCalculator, CostEstimate, CostRequest, PriceTable};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use super::read_input;

/// Execute the calculate command
///
/// Reads a cost request in the `/api/calculate` JSON shape and prints the
/// itemized estimate.
pub fn execute(file: Option<PathBuf>) -> Result<()> {
    let input = read_input(file.as_deref())?;
    let request: CostRequest =
        serde_json::from_str(&input).context("Invalid input: expected a cost request object")?;

    let calculator = CostCalculator::new(Arc::new(PriceTable::standard()));
    let estimate = calculator.calculate(&request)?;
    info!(categories = estimate.breakdown.len(), "Cost request priced");

    if estimate.breakdown.is_empty() {
        println!("{}", "Nothing to price: every quantity is zero or its tier is unknown".yellow());
    } else {
        println!("{}", render_table(&estimate));
    }
    println!(
        "{} ${:.2} / month",
        "Total:".green().bold(),
        estimate.total_cost
    );

    Ok(())
}

fn render_table(estimate: &CostEstimate) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("CATEGORY").fg(Color::Cyan),
        Cell::new("ITEM").fg(Color::Cyan),
        Cell::new("DETAILS").fg(Color::Cyan),
        Cell::new("COST").fg(Color::Cyan),
    ]);

    for (category, item) in &estimate.breakdown {
        table.add_row(vec![
            Cell::new(category),
            Cell::new(&item.label),
            Cell::new(&item.details),
            Cell::new(format!("${:.2}", item.cost)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
