use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;

use notion_relay::cli::{self, OutputFormat};
use notion_relay::Settings;

#[derive(Parser)]
#[command(name = "notion-relay")]
#[command(about = "Thin HTTP relay in front of a Notion database", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the relay server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(long, default_value = "5000")]
        port: u16,
    },
    /// Print the most recent entries
    Read,
    /// Create an entry
    Create {
        /// Entry title
        #[arg(long)]
        title: Option<String>,
        /// Body text
        #[arg(long)]
        content: Option<String>,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the loaded configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notion_relay=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let settings = Settings::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .with_context(|| format!("Invalid listen address {}:{}", host, port))?;
            notion_relay::server::run_server(addr, settings).await?;
        }
        Commands::Read => {
            cli::run_read(&settings, format).await?;
        }
        Commands::Create {
            title,
            content,
            tags,
            date,
        } => {
            cli::run_create(
                &settings,
                title.as_deref(),
                content.as_deref(),
                &tags,
                date.as_deref(),
                format,
            )
            .await?;
        }
        Commands::Config => {
            cli::run_config_show(&settings, format)?;
        }
    }

    Ok(())
}
