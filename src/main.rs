//! urlshort server
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────────┐
//!                       │                    URLSHORT                      │
//!                       │                                                  │
//!   Client Request      │  ┌──────────┐   ┌──────────┐   ┌─────────────┐   │
//!   ────────────────────┼─▶│  http    │──▶│ document │──▶│ inline map  │   │
//!                       │  │ server   │   │ redirects│   │ redirects   │   │
//!                       │  └──────────┘   └────┬─────┘   └──────┬──────┘   │
//!                       │                      │ hit            │ miss     │
//!   301 / fallback      │                      ▼                ▼          │
//!   ◀───────────────────┼────────────── 301 Location      default mux      │
//!                       │                                                  │
//!                       │  config · observability · lifecycle              │
//!                       └──────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use urlshort::config::{load_config, validate_config, ConfigError, ShortenerConfig};
use urlshort::http::HttpServer;
use urlshort::lifecycle::{signals, Shutdown};
use urlshort::observability::init_logging;
use urlshort::redirect::DocumentFormat;

#[derive(Parser)]
#[command(name = "urlshort")]
#[command(about = "Redirect configured paths, fall back to a default handler", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML redirect document (overrides redirects.document).
    #[arg(long, conflicts_with = "json")]
    yaml: Option<PathBuf>,

    /// JSON redirect document (overrides redirects.document).
    #[arg(long)]
    json: Option<PathBuf>,

    /// Bind address (overrides listener.bind_address).
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

impl Cli {
    fn resolve_config(&self) -> Result<ShortenerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ShortenerConfig::default(),
        };

        if let Some(path) = &self.yaml {
            config.redirects.document = Some(path.clone());
            config.redirects.format = Some(DocumentFormat::Yaml);
        }
        if let Some(path) = &self.json {
            config.redirects.document = Some(path.clone());
            config.redirects.format = Some(DocumentFormat::Json);
        }
        if let Some(addr) = self.bind {
            config.listener.bind_address = addr.to_string();
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    init_logging(&config.observability)?;

    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        document = ?config.redirects.document,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(&shutdown);

    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
