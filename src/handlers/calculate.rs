use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    error::AppError,
    metrics,
    pricing::{CostCalculator, CostEstimate, CostRequest},
};

/// Shared state for the pricing routes
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<CostCalculator>,
}

/// Handle `POST /api/calculate`
///
/// A missing or malformed body is answered with 400 `{"error": "Invalid input"}`
/// instead of axum's default rejection statuses.
///
/// An empty object `{}` is a valid request: every quantity defaults to zero,
/// so it is priced at a total of 0 with an empty breakdown. Only a missing
/// body or a non-object is refused; callers that relied on `{}` being a 400
/// get a zero estimate here.
pub async fn handle_calculate(
    State(state): State<AppState>,
    payload: Result<Json<CostRequest>, JsonRejection>,
) -> Result<Json<CostEstimate>, AppError> {
    let result = calculate(&state, payload);

    match &result {
        Ok(estimate) => metrics::record_calculation(estimate),
        Err(e) => {
            warn!("Rejected cost calculation: {}", e);
            metrics::record_rejection(e.kind());
        }
    }

    result.map(Json)
}

fn calculate(
    state: &AppState,
    payload: Result<Json<CostRequest>, JsonRejection>,
) -> Result<CostEstimate, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Cost request body rejected: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    Ok(state.calculator.calculate(&request)?)
}
