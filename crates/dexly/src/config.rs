//! CLI configuration -- thin wrapper around `dexly_config` shared types.
//!
//! Re-exports the shared types and layers `GlobalOpts` flag overrides
//! (--base-url, --concurrency, --timeout, --output, --color) on top.

use clap::ValueEnum;

use dexly_core::CatalogConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use dexly_config::{Config, config_path, load_config, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Translate the `[catalog]` section + global flags into a `CatalogConfig`.
///
/// Flags (and their env vars) take priority over file values.
pub fn resolve_catalog(global: &GlobalOpts, config: &Config) -> Result<CatalogConfig, CliError> {
    let mut section = config.catalog.clone();

    if let Some(ref url) = global.base_url {
        section.base_url.clone_from(url);
    }
    if let Some(concurrency) = global.concurrency {
        section.max_concurrency = concurrency;
    }
    if let Some(timeout) = global.timeout {
        section.timeout_secs = Some(timeout);
    }

    Ok(dexly_config::to_catalog_config(&section)?)
}

/// Output format: flag > env > `[defaults] output` > table.
pub fn resolve_output(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global
        .output
        .or_else(|| OutputFormat::from_str(&config.defaults.output, true).ok())
        .unwrap_or(OutputFormat::Table)
}

/// Color mode: flag > `[defaults] color` > auto.
pub fn resolve_color(global: &GlobalOpts, config: &Config) -> ColorMode {
    global
        .color
        .or_else(|| ColorMode::from_str(&config.defaults.color, true).ok())
        .unwrap_or(ColorMode::Auto)
}
