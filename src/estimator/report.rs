//! Rendering of an estimate: configuration summary, bar chart and CSV export

use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use std::path::{Path, PathBuf};
use tracing::info;

use super::calculator::CostBreakdown;
use super::form::{EstimatorForm, GenAiBackend};
use super::EstimatorError;

pub const DISCLAIMER: &str = "This estimate is based on typical industry pricing and may vary \
depending on specific provider rates and additional services required.";

const BAR_GLYPH: char = '█';

/// One-line description of the Gen AI selections
pub fn gen_ai_details(gen_ai: &GenAiBackend) -> String {
    match gen_ai {
        GenAiBackend::Opensource => {
            "Opensource, Open AI: Opensource, Parsing: Opensource, Embedding: Opensource"
                .to_string()
        }
        GenAiBackend::Framework(selection) => format!(
            "{}, Open AI: {}, Parsing: {}, Embedding: {}",
            gen_ai.label(),
            selection.service.label(),
            selection.parsing.label(),
            selection.embeddings.label()
        ),
    }
}

/// Parameter/value pairs echoed back to the user
pub fn summary_rows(form: &EstimatorForm) -> Vec<(&'static str, String)> {
    vec![
        ("VM Type", form.vm_type.label().to_string()),
        ("Instance Type", form.instance_type.label().to_string()),
        ("VM Instances", form.vm_instances.to_string()),
        ("Storage (GB)", form.storage_gb.to_string()),
        ("Server URL", form.server_url.clone()),
        ("Frontend Framework", form.frontend.label().to_string()),
        ("Duration (months)", form.duration_months.to_string()),
        ("Gen AI Framework", gen_ai_details(&form.gen_ai)),
    ]
}

pub fn summary_table(form: &EstimatorForm) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("PARAMETER").fg(Color::Cyan),
        Cell::new("VALUE").fg(Color::Cyan),
    ]);

    for (parameter, value) in summary_rows(form) {
        table.add_row(vec![Cell::new(parameter), Cell::new(value)]);
    }

    table
}

/// Horizontal bar chart, one line per category
///
/// Bars are scaled to `width` against the largest category. Any positive
/// cost gets at least one glyph so small items stay visible.
pub fn bar_chart(breakdown: &CostBreakdown, width: usize) -> String {
    let categories = breakdown.categories();
    let max = categories
        .iter()
        .map(|(_, cost)| *cost)
        .fold(0.0_f64, f64::max);
    let name_width = categories
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    let mut chart = String::new();
    for (name, cost) in categories {
        let len = if max > 0.0 && cost > 0.0 {
            ((cost / max) * width as f64).round().max(1.0) as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat(BAR_GLYPH).take(len).collect();
        chart.push_str(&format!(
            "{:<name_width$} │{:<width$} ${:.2}\n",
            name,
            bar,
            cost,
            name_width = name_width,
            width = width
        ));
    }

    chart
}

/// Two-column CSV of the monthly breakdown
pub fn to_csv(breakdown: &CostBreakdown) -> String {
    let mut csv = String::from("Category,Cost\n");
    for (name, cost) in breakdown.categories() {
        csv.push_str(&format!("{},{:.2}\n", name, cost));
    }
    csv
}

pub fn csv_file_name(date: NaiveDate) -> String {
    format!("project_cost_estimate_{}.csv", date.format("%Y%m%d"))
}

/// Write the CSV export into `dir` and return the file path
pub fn export_csv(
    breakdown: &CostBreakdown,
    dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, EstimatorError> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(csv_file_name(date));
    std::fs::write(&path, to_csv(breakdown))?;

    info!("Wrote estimate export to {}", path.display());
    Ok(path)
}
