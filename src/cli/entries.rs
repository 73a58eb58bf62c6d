use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use serde_json::Value;

use super::{relay_failure, OutputFormat};
use crate::config::Settings;
use crate::models::CreateEntryRequest;
use crate::notion::NotionClient;
use crate::relay;

/// Entries returned by `read`
#[derive(Debug, Serialize)]
pub struct ReadOutput {
    pub ok: bool,
    pub results: Vec<Value>,
}

impl std::fmt::Display for ReadOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.results.is_empty() {
            return writeln!(f, "No entries.");
        }
        for page in &self.results {
            writeln!(
                f,
                "{}  {}",
                page.get("id").and_then(Value::as_str).unwrap_or("-"),
                page_title(page).unwrap_or_else(|| "(untitled)".to_string())
            )?;
        }
        Ok(())
    }
}

/// Page returned by `create`
#[derive(Debug, Serialize)]
pub struct CreateOutput {
    pub ok: bool,
    pub result: Value,
}

impl std::fmt::Display for CreateOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Entry created!")?;
        if let Some(id) = self.result.get("id").and_then(Value::as_str) {
            writeln!(f, "Page ID: {}", id)?;
        }
        if let Some(url) = self.result.get("url").and_then(Value::as_str) {
            writeln!(f, "URL: {}", url)?;
        }
        Ok(())
    }
}

/// Read the most recent entries once and print them
pub async fn run_read(settings: &Settings, format: OutputFormat) -> Result<()> {
    let client = NotionClient::from_settings(settings);
    let results = relay::read_entries(settings, &client)
        .await
        .map_err(|e| relay_failure("Read", e))?;

    format.print(&ReadOutput { ok: true, results })
}

/// Create one entry and print the created page
pub async fn run_create(
    settings: &Settings,
    title: Option<&str>,
    content: Option<&str>,
    tags: &[String],
    date: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let request = CreateEntryRequest {
        title: title.map(|s| s.to_string()),
        content: content.map(|s| s.to_string()),
        tags: Some(tags.to_vec()),
        date: date.map(|s| s.to_string()),
    };

    let client = NotionClient::from_settings(settings);
    let result = relay::create_entry(settings, &client, request, Local::now().date_naive())
        .await
        .map_err(|e| relay_failure("Create", e))?;

    format.print(&CreateOutput { ok: true, result })
}

/// Plain text of the first title-typed property of a page
fn page_title(page: &Value) -> Option<String> {
    page.get("properties")?
        .as_object()?
        .values()
        .find_map(|prop| prop.get("title")?.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| {
                    p.get("plain_text")
                        .or_else(|| p.get("text").and_then(|t| t.get("content")))
                        .and_then(Value::as_str)
                })
                .collect::<String>()
        })
        .filter(|t| !t.is_empty())
}
