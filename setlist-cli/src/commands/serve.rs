//! HTTP server command
//!
//! Runs the setlist HTTP server with a fresh, empty library.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use setlist_core::{Library, SetlistConfig};
use setlist_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config and SETLIST_BIND)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Merge CLI flags over the loaded configuration
fn server_config(args: &ServeArgs, config: &SetlistConfig) -> ServerConfig {
    let mut server = ServerConfig::from(&config.server);
    if let Some(bind) = args.bind {
        server.bind_addr = bind;
    }
    server.cors_permissive |= args.cors_permissive;
    server
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = SetlistConfig::load().context("Failed to load configuration")?;
    let server = server_config(&args, &config);

    tracing::info!("Starting setlist server on {}", server.bind_addr);

    // Run server (blocks until shutdown)
    run_server(Library::new(), server)
        .await
        .context("Server error")?;

    Ok(())
}
