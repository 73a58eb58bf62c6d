use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;

use crate::error::RelayError;
use crate::{DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION, DEFAULT_PAGE_SIZE};

pub const TOKEN_VAR: &str = "NOTION_TOKEN";
pub const DATABASE_ID_VAR: &str = "NOTION_DATABASE_ID";

/// Secret token sent upstream. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Names of the database properties entries are written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyNames {
    pub title: String,
    pub tags: String,
    pub date: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            title: "Title".to_string(),
            tags: "Tags".to_string(),
            date: "Date".to_string(),
        }
    }
}

/// Process-wide settings, loaded once at startup and shared read-only.
///
/// `credential` and `database_id` stay optional here: a missing value only
/// fails the requests that need it, see [`Settings::require`].
#[derive(Debug, Clone)]
pub struct Settings {
    pub credential: Option<Credential>,
    pub database_id: Option<String>,
    pub base_url: String,
    pub api_version: String,
    pub page_size: u32,
    pub properties: PropertyNames,
}

/// Borrowed view of the settings once both required values are known present
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    pub credential: &'a Credential,
    pub database_id: &'a str,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            credential: None,
            database_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_NOTION_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            properties: PropertyNames::default(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let base_url = match var("NOTION_BASE_URL") {
            Some(raw) => {
                url::Url::parse(&raw)
                    .with_context(|| format!("Invalid NOTION_BASE_URL: {}", raw))?;
                raw.trim_end_matches('/').to_string()
            }
            None => defaults.base_url,
        };

        let page_size = match var("NOTION_PAGE_SIZE") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| (1..=100).contains(n))
                .with_context(|| {
                    format!("NOTION_PAGE_SIZE must be between 1 and 100, got {}", raw)
                })?,
            None => defaults.page_size,
        };

        let properties = PropertyNames {
            title: var("NOTION_TITLE_PROPERTY").unwrap_or(defaults.properties.title),
            tags: var("NOTION_TAGS_PROPERTY").unwrap_or(defaults.properties.tags),
            date: var("NOTION_DATE_PROPERTY").unwrap_or(defaults.properties.date),
        };

        Ok(Self {
            credential: var(TOKEN_VAR).map(Credential::new),
            database_id: var(DATABASE_ID_VAR),
            base_url,
            api_version: var("NOTION_VERSION").unwrap_or(defaults.api_version),
            page_size,
            properties,
        })
    }

    /// Check that the credential and database id are both set
    pub fn require(&self) -> Result<Target<'_>, RelayError> {
        let credential = self
            .credential
            .as_ref()
            .ok_or(RelayError::Configuration(TOKEN_VAR))?;
        let database_id = self
            .database_id
            .as_deref()
            .ok_or(RelayError::Configuration(DATABASE_ID_VAR))?;

        Ok(Target {
            credential,
            database_id,
        })
    }
}
