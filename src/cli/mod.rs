mod config;
mod entries;

pub use config::*;
pub use entries::*;

use serde::Serialize;

use crate::error::RelayError;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn print<T: Serialize + std::fmt::Display>(&self, value: &T) -> anyhow::Result<()> {
        match self {
            OutputFormat::Human => println!("{}", value),
            OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        }
        Ok(())
    }
}

/// Turn a relay failure into a CLI error that keeps the upstream body
fn relay_failure(action: &str, err: RelayError) -> anyhow::Error {
    match err {
        RelayError::Upstream { status, body } => {
            anyhow::anyhow!("{} failed with upstream status {}: {}", action, status, body)
        }
        other => anyhow::anyhow!("{} failed: {}", action, other),
    }
}
