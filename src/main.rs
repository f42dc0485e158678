//! Standings API Server
//!
//! Fetches the league standings page on demand and serves it as JSON.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use url::Url;

use standings_web::config::ScrapeConfig;
use standings_web::fetch::HttpSource;
use standings_web::handlers::{router, AppState};

/// Standings API Server
#[derive(Parser, Debug)]
#[command(name = "standings-api")]
#[command(version)]
#[command(about = "Serves the league standings table as JSON")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Override the standings page URL (fixture servers, mirrors)
    #[arg(long)]
    source: Option<Url>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = ScrapeConfig::default();
    if let Some(source) = args.source {
        config.source = source;
    }

    tracing::info!(
        source = %config.source,
        "Standings API starting on {}:{}",
        args.host,
        args.port
    );

    let source = HttpSource::new(config.source.clone())?;
    let state = Arc::new(AppState::new(source, config));
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
