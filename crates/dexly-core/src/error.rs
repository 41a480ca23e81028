// ── Core error types ──
//
// Errors surfaced by the catalog operations. The `From<dexly_api::Error>`
// impl maps transport failures one-to-one; shape problems in well-formed
// JSON become `DetailLoad` so front ends can tell "the server said no"
// apart from "the server said something we can't use".

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Caller errors ────────────────────────────────────────────────
    /// The identifier was absent or empty. No request was issued.
    #[error("Missing pokemon name.")]
    InvalidInput,

    // ── Transport errors ─────────────────────────────────────────────
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Response is not valid JSON: {message}")]
    Decode { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    /// The response parsed but lacks fields the record needs.
    #[error("Could not load {resource} details: {message}")]
    DetailLoad { resource: String, message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Short message suitable for an error panel.
    ///
    /// Transport detail (URLs, serde positions) is left out; callers that
    /// want it can log the `Display` form instead.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput => "Missing pokemon name.".into(),
            Self::HttpStatus { status: 404, .. } => "Pokemon not found.".into(),
            Self::Network { .. } => "Could not reach the catalog server.".into(),
            Self::Config { message } => format!("Configuration error: {message}"),
            Self::HttpStatus { .. } | Self::Decode { .. } | Self::DetailLoad { .. } => {
                "Could not load pokemon details.".into()
            }
        }
    }

    /// Returns `true` for a 404 answer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 404, .. })
    }

    pub(crate) fn shape(resource: &str, message: impl Into<String>) -> Self {
        Self::DetailLoad {
            resource: resource.to_owned(),
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<dexly_api::Error> for CoreError {
    fn from(err: dexly_api::Error) -> Self {
        match err {
            dexly_api::Error::Network(e) => CoreError::Network {
                message: e.to_string(),
            },
            dexly_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            dexly_api::Error::HttpStatus { status, url } => CoreError::HttpStatus { status, url },
            dexly_api::Error::Decode { message, body: _ } => CoreError::Decode { message },
            dexly_api::Error::Shape { resource, message } => {
                CoreError::DetailLoad { resource, message }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn shape_errors_become_detail_load() {
        let err: CoreError = dexly_api::Error::Shape {
            resource: "pokemon".into(),
            message: "missing field `stats`".into(),
        }
        .into();

        assert!(matches!(err, CoreError::DetailLoad { ref resource, .. } if resource == "pokemon"));
        assert_eq!(err.user_message(), "Could not load pokemon details.");
    }

    #[test]
    fn not_found_keeps_status() {
        let err: CoreError = dexly_api::Error::HttpStatus {
            status: 404,
            url: "https://pokeapi.co/api/v2/pokemon/missingno".into(),
        }
        .into();

        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Pokemon not found.");
    }

    #[test]
    fn invalid_url_is_config_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: CoreError = dexly_api::Error::InvalidUrl(parse_err).into();

        assert!(matches!(err, CoreError::Config { .. }));
    }
}
