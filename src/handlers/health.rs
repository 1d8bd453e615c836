use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::handlers::calculate::AppState;

/// Liveness check for the cost calculator
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "infra-cost",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness check endpoint
///
/// Ready once the shared price table can price every category: at least one
/// VM, database and storage tier. Reports the tier counts so a deployment can
/// tell which table it is serving; an incomplete table answers 503.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let table = state.calculator.table();
    let tiers = json!({
        "vm": table.vm.len(),
        "database": table.database.len(),
        "storage": table.storage.len(),
    });

    if table.vm.is_empty() || table.database.is_empty() || table.storage.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({
            "status": "not_ready",
            "reason": "price table is missing a category",
            "tiers": tiers,
        })));
    }

    (StatusCode::OK, Json(json!({
        "status": "ready",
        "service": "infra-cost",
        "tiers": tiers,
        "bandwidthCostPerGB": table.bandwidth.cost_per_gb,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{CostCalculator, PriceTable};
    use std::sync::Arc;

    fn state(table: PriceTable) -> AppState {
        AppState {
            calculator: Arc::new(CostCalculator::new(Arc::new(table))),
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_reports_standard_tiers() {
        let response = readiness_check(State(state(PriceTable::standard())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "ready");
        assert_eq!(body["tiers"], json!({ "vm": 3, "database": 2, "storage": 2 }));
        assert_eq!(body["bandwidthCostPerGB"], 0.09);
    }

    #[tokio::test]
    async fn test_readiness_fails_without_vm_tiers() {
        let mut table = PriceTable::standard();
        table.vm.clear();

        let response = readiness_check(State(state(table))).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["status"], "not_ready");
        assert_eq!(body["tiers"]["vm"], 0);
    }
}
