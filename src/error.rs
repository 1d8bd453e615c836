use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::pricing::ValidationError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body missing or not a valid cost request
    #[error("Invalid input")]
    InvalidInput,
    /// Body parsed but a quantity was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AppError {
    /// Every rejection is the caller's fault; the calculator itself cannot fail
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Label used for the outcome metric
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Validation(_) => "validation_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(_: JsonRejection) -> Self {
        Self::InvalidInput
    }
}
