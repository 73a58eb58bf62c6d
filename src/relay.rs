//! The relay operations shared by the HTTP handlers and the CLI.
//!
//! Each operation checks configuration first and performs at most one
//! upstream call. Nothing is retried.

use chrono::NaiveDate;
use serde_json::Value;

use crate::config::Settings;
use crate::error::RelayError;
use crate::models::{CreateEntryRequest, Entry, PageRequest, QueryRequest};
use crate::notion::ContentApi;

/// Fetch the most recent entries of the configured database
pub async fn read_entries(
    settings: &Settings,
    api: &dyn ContentApi,
) -> Result<Vec<Value>, RelayError> {
    let target = settings.require()?;

    let query = QueryRequest::recent(settings.page_size);
    let body = api.query_database(target, &query).await?.into_result()?;

    // A missing `results` field means an empty list; any other shape is a decode failure
    let results = match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(results)) => results,
            None | Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(RelayError::Transport(format!(
                    "Unexpected upstream results: expected a list, got {}",
                    other
                )));
            }
        },
        other => {
            return Err(RelayError::Transport(format!(
                "Unexpected upstream response: expected an object, got {}",
                other
            )));
        }
    };

    tracing::info!(
        database_id = %target.database_id,
        count = results.len(),
        "Read entries"
    );

    Ok(results)
}

/// Create one entry in the configured database and return the created page
pub async fn create_entry(
    settings: &Settings,
    api: &dyn ContentApi,
    req: CreateEntryRequest,
    today: NaiveDate,
) -> Result<Value, RelayError> {
    let target = settings.require()?;

    let entry = Entry::from_request(req, today)?;
    let page = PageRequest::from_entry(&entry, target.database_id, &settings.properties);

    let created = api.create_page(target, &page).await?.into_result()?;
    let page_id = created.get("id").and_then(Value::as_str).unwrap_or("unknown");

    tracing::info!(
        database_id = %target.database_id,
        page_id,
        "Created entry"
    );

    Ok(created)
}
