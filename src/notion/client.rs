use async_trait::async_trait;
use serde::Serialize;

use super::{ContentApi, UpstreamResponse};
use crate::config::{Settings, Target};
use crate::error::{upstream_body, RelayError};
use crate::models::{PageRequest, QueryRequest};

/// Notion API client using direct calls over reqwest
pub struct NotionClient {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl NotionClient {
    pub fn new(base_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_version: api_version.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.base_url.clone(), settings.api_version.clone())
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        target: Target<'_>,
        body: &T,
    ) -> Result<UpstreamResponse, RelayError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(target.credential.expose())
            .header("Notion-Version", &self.api_version)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;

        let body = if status < 300 {
            serde_json::from_str(&text).map_err(|e| {
                RelayError::Transport(format!("Failed to parse upstream response: {}", e))
            })?
        } else {
            upstream_body(&text)
        };

        tracing::debug!(path = %path, status, "Upstream call finished");

        Ok(UpstreamResponse::new(status, body))
    }
}

#[async_trait]
impl ContentApi for NotionClient {
    async fn query_database(
        &self,
        target: Target<'_>,
        query: &QueryRequest,
    ) -> Result<UpstreamResponse, RelayError> {
        let path = format!("/databases/{}/query", target.database_id);
        self.post(&path, target, query).await
    }

    async fn create_page(
        &self,
        target: Target<'_>,
        page: &PageRequest,
    ) -> Result<UpstreamResponse, RelayError> {
        self.post("/pages", target, page).await
    }
}
