use anyhow::Result;
use serde::Serialize;

use super::OutputFormat;
use crate::config::{PropertyNames, Settings};

/// Config show response. The credential is only reported as set or not.
#[derive(Debug, Serialize)]
pub struct ConfigShowResponse {
    pub token_set: bool,
    pub database_id: Option<String>,
    pub base_url: String,
    pub api_version: String,
    pub page_size: u32,
    pub properties: PropertyNames,
}

impl From<&Settings> for ConfigShowResponse {
    fn from(settings: &Settings) -> Self {
        Self {
            token_set: settings.credential.is_some(),
            database_id: settings.database_id.clone(),
            base_url: settings.base_url.clone(),
            api_version: settings.api_version.clone(),
            page_size: settings.page_size,
            properties: settings.properties.clone(),
        }
    }
}

impl std::fmt::Display for ConfigShowResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Token: {}",
            if self.token_set { "<redacted>" } else { "not set" }
        )?;
        writeln!(
            f,
            "Database: {}",
            self.database_id.as_deref().unwrap_or("not set")
        )?;
        writeln!(f, "API: {} (version {})", self.base_url, self.api_version)?;
        writeln!(f, "Page size: {}", self.page_size)?;
        writeln!(
            f,
            "Properties: title={}, tags={}, date={}",
            self.properties.title, self.properties.tags, self.properties.date
        )
    }
}

/// Show the loaded configuration
pub fn run_config_show(settings: &Settings, format: OutputFormat) -> Result<()> {
    format.print(&ConfigShowResponse::from(settings))
}
