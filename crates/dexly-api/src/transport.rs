// Transport layer for catalog requests.
//
// `CatalogTransport` is the seam between the catalog client and the wire:
// the reqwest-backed `HttpTransport` is used in production, tests plug in
// canned responses. Every call is a plain GET that yields parsed JSON.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;

const DEFAULT_USER_AGENT: &str = concat!("dexly/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Whole-request timeout. `None` leaves reqwest's defaults in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().map_err(Error::Network)
    }
}

/// Something that can GET a URL and hand back the parsed JSON body.
///
/// Implementations must report failures using the crate [`Error`] kinds:
/// `Network` when no response arrived, `HttpStatus` for non-2xx answers,
/// and `Decode` when the body is not JSON.
pub trait CatalogTransport: Send + Sync + 'static {
    fn get_json(&self, url: Url) -> impl Future<Output = Result<Value, Error>> + Send;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: config.build_client()?,
        })
    }

    /// Wrap a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl CatalogTransport for HttpTransport {
    async fn get_json(&self, url: Url) -> Result<Value, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();
        trace!(%status, "response received");

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Decode {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}
