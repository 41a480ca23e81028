//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use dexly_config::ConfigError;
use dexly_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const NETWORK: i32 = 7;
    pub const DECODE: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("Missing pokemon name")]
    #[diagnostic(
        code(dexly::missing_name),
        help("Pass a name or id, e.g.: dexly show pikachu")
    )]
    MissingName,

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(dexly::validation))]
    Validation { field: String, reason: String },

    // ── Remote ───────────────────────────────────────────────────────
    #[error("'{identifier}' not found in the catalog")]
    #[diagnostic(
        code(dexly::not_found),
        help("Names are lowercase in the catalog. Run: dexly list")
    )]
    NotFound { identifier: String },

    #[error("Could not reach the catalog server")]
    #[diagnostic(
        code(dexly::network),
        help("Check your connection, or point --base-url at a reachable server.\n{reason}")
    )]
    Network { reason: String },

    #[error("Catalog request failed: HTTP {status}")]
    #[diagnostic(code(dexly::http_status), help("URL: {url}"))]
    HttpStatus { status: u16, url: String },

    #[error("Could not load pokemon details")]
    #[diagnostic(
        code(dexly::unexpected_response),
        help("The server answered with data dexly cannot read.\n{message}")
    )]
    UnexpectedResponse { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dexly::config),
        help("Inspect the active settings with: dexly config show")
    )]
    Config { message: String },

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(dexly::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render TOML: {0}")]
    #[diagnostic(code(dexly::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingName
            | Self::Validation { .. }
            | Self::Config { .. }
            | Self::ConfigExists { .. } => exit_code::USAGE,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Network { .. } => exit_code::NETWORK,
            Self::UnexpectedResponse { .. } => exit_code::DECODE,
            Self::HttpStatus { .. } | Self::Io(_) | Self::Toml(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput => CliError::MissingName,
            CoreError::Network { message } => CliError::Network { reason: message },
            CoreError::HttpStatus { status: 404, url } => CliError::NotFound {
                identifier: last_segment(&url),
            },
            CoreError::HttpStatus { status, url } => CliError::HttpStatus { status, url },
            CoreError::Decode { message } | CoreError::DetailLoad { message, .. } => {
                CliError::UnexpectedResponse { message }
            }
            CoreError::Config { message } => CliError::Config { message },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}

fn last_segment(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url)
        .to_owned()
}
