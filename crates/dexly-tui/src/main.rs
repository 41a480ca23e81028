//! `dexly-tui` -- terminal browser for the PokeAPI catalog.
//!
//! Two screens: the catalog list (first page, one row per entry with its
//! type badges) and the detail view for a single entry (sprites, info and
//! stat bars). Each screen is driven by a `ViewController` from
//! `dexly-core`; a background bridge forwards its state into the action loop.
//!
//! Logs are written to a file (default `/tmp/dexly-tui.log`) to avoid
//! corrupting the terminal UI.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod view_bridge;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dexly_core::Catalog;

use crate::app::App;

/// Terminal browser for the PokeAPI catalog.
#[derive(Parser, Debug)]
#[command(name = "dexly-tui", version, about)]
struct Cli {
    /// Catalog API root (e.g., https://pokeapi.co/api/v2)
    #[arg(short = 'u', long, env = "DEXLY_BASE_URL")]
    base_url: Option<String>,

    /// Number of entries to list
    #[arg(short = 'n', long, env = "DEXLY_PAGE_SIZE")]
    page_size: Option<u32>,

    /// Maximum concurrent requests while listing
    #[arg(long, env = "DEXLY_CONCURRENCY")]
    concurrency: Option<usize>,

    /// Log file path (defaults to /tmp/dexly-tui.log)
    #[arg(long, default_value = "/tmp/dexly-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing. Nothing may log to stdout/stderr while the TUI
/// owns the terminal. Hold the guard until exit so logs flush.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("dexly_tui={log_level},dexly_core={log_level}"))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("dexly-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Build the catalog from the shared config file with flag overrides.
fn build_catalog(cli: &Cli) -> Result<Catalog> {
    let mut section = dexly_config::load_config_or_default().catalog;

    if let Some(ref url) = cli.base_url {
        section.base_url.clone_from(url);
    }
    if let Some(page_size) = cli.page_size {
        section.page_size = page_size;
    }
    if let Some(concurrency) = cli.concurrency {
        section.max_concurrency = concurrency;
    }

    let config = dexly_config::to_catalog_config(&section)?;
    Ok(Catalog::new(config)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks first, so a panic during init still restores the terminal
    tui::install_hooks()?;

    let _log_guard = setup_tracing(&cli);

    let catalog = build_catalog(&cli)?;
    let page_size = catalog.config().page_size;

    info!(
        base_url = %catalog.config().base_url,
        page_size,
        "starting dexly-tui"
    );

    let mut app = App::new(catalog, page_size);
    app.run().await?;

    Ok(())
}
