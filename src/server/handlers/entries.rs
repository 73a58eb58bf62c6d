use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::error::RelayError;
use crate::models::CreateEntryRequest;
use crate::relay;
use crate::server::AppState;

#[derive(Serialize)]
pub struct ReadResponse {
    pub ok: bool,
    pub results: Vec<Value>,
}

#[derive(Serialize)]
pub struct CreateResponse {
    pub ok: bool,
    pub result: Value,
}

/// List the most recent entries of the database
pub async fn read(State(state): State<Arc<AppState>>) -> Response {
    match relay::read_entries(&state.settings, state.api.as_ref()).await {
        Ok(results) => Json(ReadResponse { ok: true, results }).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create an entry from the request body
pub async fn create(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    // Configuration is checked before the body is even looked at
    if let Err(e) = state.settings.require() {
        return e.into_response();
    }

    let req = match parse_create_body(&body) {
        Ok(req) => req,
        Err(e) => return e.into_response(),
    };

    let today = Local::now().date_naive();

    match relay::create_entry(&state.settings, state.api.as_ref(), req, today).await {
        Ok(result) => Json(CreateResponse { ok: true, result }).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Parse a create body regardless of content type. An empty body means `{}`.
fn parse_create_body(body: &[u8]) -> Result<CreateEntryRequest, RelayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateEntryRequest::default());
    }

    match serde_json::from_slice::<Option<CreateEntryRequest>>(body) {
        Ok(req) => Ok(req.unwrap_or_default()),
        Err(e) => Err(RelayError::InvalidRequest(e.to_string())),
    }
}
