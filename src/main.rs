//! Submission relay (v1)
//!
//! Accepts `{ "text": ... }` from browsers and forwards it to a Telegram chat
//! so the bot token never leaves the server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──POST /api/submit──▶ http::server ──▶ relay::handler
//!                                      │                 │
//!                                      │                 ▼
//!                                      │          relay::client ──HTTPS──▶ api.telegram.org
//!                                      │                 │
//!     Client ◀──── JSON {ok, ...} ─────┴─────────────────┘
//!
//!     GET /api/health → {ok:true}        GET /* → static files (denylist applied)
//! ```

use clap::Parser;
use std::path::PathBuf;

use submission_relay::config::load_config;
use submission_relay::lifecycle::{signals, start, Shutdown};
use submission_relay::observability::logging;

#[derive(Parser)]
#[command(name = "submission-relay")]
#[command(about = "Relay form submissions to a Telegram chat", long_about = None)]
struct Args {
    /// Optional TOML config file; environment variables override it.
    #[arg(short, long, env = "RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Skip loading `.env` from the working directory.
    #[arg(long)]
    no_dotenv: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if !args.no_dotenv {
        // A missing .env is normal in production.
        dotenvy::dotenv().ok();
    }

    let config = load_config(args.config.as_deref())?;
    logging::init_logging(&config.observability);

    tracing::info!("submission-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        max_body_bytes = config.limits.max_body_bytes,
        static_root = %config.static_files.root,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(signals::forward_signals(shutdown.clone()));

    start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
