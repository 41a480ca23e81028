// Catalog HTTP client
//
// Wraps a `CatalogTransport` with PokeAPI URL construction and typed
// decoding. The client itself is stateless apart from the base URL; shape
// validation of the JSON it returns is the caller's concern, helped along
// by `decode()`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::{CatalogTransport, HttpTransport, TransportConfig};
use crate::types::{ListingPage, PokemonResource, PokemonSummaryResource};

/// Public PokeAPI v2 root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Raw client for the catalog API.
///
/// Related resources are addressed by the absolute URLs the API returns,
/// so most calls take a [`Url`] rather than a path.
pub struct CatalogClient<T = HttpTransport> {
    transport: T,
    base_url: Url,
}

impl CatalogClient<HttpTransport> {
    /// Create a client backed by reqwest.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(base_url, HttpTransport::new(transport)?))
    }
}

impl<T: CatalogTransport> CatalogClient<T> {
    /// Create a client over any transport (tests use canned responses).
    pub fn with_transport(base_url: Url, transport: T) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// The API root (e.g. `https://pokeapi.co/api/v2`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── URL builders ─────────────────────────────────────────────────

    fn root(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// `{base}/pokemon/?limit={page_size}`
    pub fn listing_url(&self, page_size: u32) -> Result<Url, Error> {
        let full = format!("{}/pokemon/?limit={page_size}", self.root());
        Ok(Url::parse(&full)?)
    }

    /// `{base}/pokemon/{name}`. The identifier is interpolated as given.
    pub fn pokemon_url(&self, name: &str) -> Result<Url, Error> {
        let full = format!("{}/pokemon/{name}", self.root());
        Ok(Url::parse(&full)?)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// GET a URL and return the parsed JSON body.
    pub async fn get(&self, url: Url) -> Result<Value, Error> {
        self.transport.get_json(url).await
    }

    /// Fetch the first listing page.
    pub async fn list_page(&self, page_size: u32) -> Result<ListingPage, Error> {
        let url = self.listing_url(page_size)?;
        debug!(page_size, "listing catalog page");
        decode("listing", self.get(url).await?)
    }

    /// Fetch a full pokemon resource from an absolute URL.
    pub async fn fetch_pokemon(&self, url: Url) -> Result<PokemonResource, Error> {
        decode("pokemon", self.get(url).await?)
    }

    /// Fetch the sprite + type subset of a pokemon resource.
    pub async fn fetch_pokemon_summary(&self, url: Url) -> Result<PokemonSummaryResource, Error> {
        decode("pokemon", self.get(url).await?)
    }
}

/// Decode a JSON value into a typed resource, reporting missing or
/// mistyped fields as [`Error::Shape`].
pub fn decode<D: DeserializeOwned>(resource: &str, value: Value) -> Result<D, Error> {
    serde_json::from_value(value).map_err(|e| Error::Shape {
        resource: resource.to_owned(),
        message: e.to_string(),
    })
}
