use axum::{extract::State, Json};

use crate::handlers::calculate::AppState;
use crate::pricing::PriceTable;

/// Handle `GET /api/prices`: the price table used by `/api/calculate`
pub async fn list_prices(State(state): State<AppState>) -> Json<PriceTable> {
    Json(state.calculator.table().clone())
}
