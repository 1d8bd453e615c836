use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::pricing::CostEstimate;

/// Install the Prometheus recorder and return its render handle
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "cost_calculations_total",
        "Total number of cost calculation requests by outcome"
    );
    describe_counter!(
        "cost_line_items_total",
        "Number of breakdown entries produced per category"
    );
    describe_histogram!(
        "cost_calculation_total_usd",
        "Monthly total of successful calculations"
    );
    describe_gauge!("infra_cost_info", "Service version information");

    gauge!("infra_cost_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a successful calculation
pub fn record_calculation(estimate: &CostEstimate) {
    counter!("cost_calculations_total", "outcome" => "ok").increment(1);

    for category in estimate.breakdown.keys() {
        counter!("cost_line_items_total", "category" => category.as_str()).increment(1);
    }

    histogram!("cost_calculation_total_usd").record(estimate.total_cost);
}

/// Record a rejected calculation
pub fn record_rejection(kind: &'static str) {
    counter!("cost_calculations_total", "outcome" => kind).increment(1);
}
