//! Shortcuts Panel server - open host applications from a phone on the LAN.
//!
//! Serves the control page and a small JSON API over the shortcut catalog
//! and the host's application launcher.

mod error;
mod handlers;
mod server;

use anyhow::Result;
use clap::Parser;
use panel_core::config::{AppConfig, CatalogConfig, ServerConfig};
use panel_core::{network, PanelApi};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "panel-server")]
#[command(about = "Open host applications from any device on the local network")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Directory holding one subdirectory per shortcut
    #[arg(long, default_value = CatalogConfig::DIR_NAME)]
    catalog_dir: PathBuf,

    /// Serve index.html and /static from this directory instead of the
    /// built-in page
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Seconds to wait for the launcher before giving up
    #[arg(long)]
    launch_timeout_secs: Option<u64>,

    /// Launcher program (defaults to the platform's "open app" command)
    #[arg(long)]
    launcher_program: Option<String>,

    /// Argument placed before the app name; repeat for several
    #[arg(long = "launcher-arg", allow_hyphen_values = true, requires = "launcher_program")]
    launcher_args: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting {}", AppConfig::APP_NAME);
    info!("Catalog root: {}", args.catalog_dir.display());

    let mut builder = PanelApi::builder(&args.catalog_dir).auto_create_root(true);
    if let Some(program) = args.launcher_program {
        builder = builder.launcher_command(program, args.launcher_args);
    }
    if let Some(secs) = args.launch_timeout_secs {
        builder = builder.launch_timeout(Duration::from_secs(secs));
    }
    let api = builder.build()?;

    let handle = server::start_server(api, args.static_dir, &args.host, args.port).await?;
    let port = handle.addr().port();

    // Machine-readable line for scripts and tests that start with --port 0
    println!("PANEL_PORT={}", port);

    match network::local_ip() {
        Ok(ip) => {
            info!("{}", "=".repeat(60));
            info!("{} running", AppConfig::APP_NAME);
            info!("Access from your phone: {}", network::panel_url(ip, port));
            info!("Access from this machine: http://localhost:{}", port);
            info!("{}", "=".repeat(60));
        }
        Err(e) => warn!("LAN address unavailable: {}", e),
    }

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");
    handle.shutdown().await;

    Ok(())
}
