pub mod entries;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::RelayError;

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

#[derive(Serialize)]
pub struct HealthResponse {
    ok: bool,
}

/// Standard error envelope
#[derive(Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: Value,
}

impl ErrorResponse {
    pub fn new(error: impl Into<Value>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match &self {
            RelayError::Upstream { status, .. } => {
                tracing::warn!(status = *status, "Upstream rejected request");
            }
            RelayError::InvalidRequest(msg) => {
                tracing::info!(error = %msg, "Rejected invalid request");
            }
            RelayError::Configuration(_) | RelayError::Transport(_) => {
                tracing::error!(error = %self, "Relay request failed");
            }
        }

        (status, Json(ErrorResponse::new(self.error_value()))).into_response()
    }
}
