mod client;

pub use client::*;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Target;
use crate::error::RelayError;
use crate::models::{PageRequest, QueryRequest};

/// Trait for the upstream content API
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Query a database for entries
    async fn query_database(
        &self,
        target: Target<'_>,
        query: &QueryRequest,
    ) -> Result<UpstreamResponse, RelayError>;

    /// Create a page inside a database
    async fn create_page(
        &self,
        target: Target<'_>,
        page: &PageRequest,
    ) -> Result<UpstreamResponse, RelayError>;
}

/// Status and decoded body of one upstream call.
///
/// An `Err` from [`ContentApi`] means the call itself failed; any status the
/// upstream answered with comes back here.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Value,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        self.status < 300
    }

    /// Body on success, [`RelayError::Upstream`] otherwise
    pub fn into_result(self) -> Result<Value, RelayError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(RelayError::Upstream {
                status: self.status,
                body: self.body,
            })
        }
    }
}
