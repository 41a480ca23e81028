use thiserror::Error;

/// Top-level error type for the `dexly-api` crate.
///
/// Covers every failure mode of a catalog request: transport, HTTP status,
/// body decoding, and response shape. `dexly-core` maps these into its own
/// taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// The request could not complete (DNS, TLS, connection reset, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── HTTP ────────────────────────────────────────────────────────
    /// The server answered with a non-success status code.
    #[error("Request failed: HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    // ── Data ────────────────────────────────────────────────────────
    /// The body is not valid JSON. Carries the raw body for debugging.
    #[error("Invalid JSON body: {message}")]
    Decode { message: String, body: String },

    /// The body is valid JSON but lacks fields the caller requires.
    #[error("Unexpected {resource} shape: {message}")]
    Shape { resource: String, message: String },
}

impl Error {
    /// Returns `true` if the server answered 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 404, .. })
    }

    /// Returns `true` if the transport itself failed (no HTTP response).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
