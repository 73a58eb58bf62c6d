pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod notion;
pub mod relay;
pub mod server;

pub use config::Settings;
pub use error::RelayError;

/// Default base URL of the Notion API
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Notion-Version header sent with every upstream call
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Number of entries `/read` asks for
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Title used when a create request has none
pub const DEFAULT_TITLE: &str = "Untitled";
