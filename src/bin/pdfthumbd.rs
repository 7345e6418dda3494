//! Server binary for pdfthumb.
//!
//! A thin shim over the library crate: parse flags, set up logging, bind,
//! and serve the router.

use anyhow::{Context, Result};
use clap::Parser;
use pdfthumb::ServerConfig;
use std::io;
use tracing_subscriber::EnvFilter;

/// Serve PDF first-page PNG thumbnails over HTTP.
#[derive(Parser, Debug)]
#[command(
    name = "pdfthumbd",
    version,
    about = "Serve PDF first-page PNG thumbnails over HTTP",
    long_about = "A stateless conversion service: POST a PDF to /pdf and receive a PNG raster \
of its first page, rendered at 150 DPI. Pass optimize=true for a 60%-scale, \
maximally-compressed variant. Nothing is persisted server-side."
)]
struct Cli {
    /// Listen address.
    #[arg(long, env = "PDFTHUMB_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Listen port.
    #[arg(short, long, env = "PDFTHUMB_PORT", default_value_t = 3000)]
    port: u16,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFTHUMB_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDFTHUMB_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Bind and serve ───────────────────────────────────────────────────
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
    };
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let local_addr = listener
        .local_addr()
        .context("listener has no local address")?;
    tracing::info!(addr = %local_addr, "pdfthumb listening");

    axum::serve(listener, pdfthumb::app())
        .await
        .context("server error")?;

    Ok(())
}
