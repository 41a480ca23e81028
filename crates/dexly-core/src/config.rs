// ── Runtime catalog configuration ──
//
// Describes where the catalog lives and how hard to hit it. Core never
// reads config files; the CLI/TUI build a `CatalogConfig` and hand it in.

use std::time::Duration;

use url::Url;

/// Entries requested from the listing endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Detail requests in flight at once during aggregation.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Configuration for a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API root (e.g., `https://pokeapi.co/api/v2`).
    pub base_url: Url,
    /// Listing page size used when the caller doesn't pass one.
    pub page_size: u32,
    /// Upper bound on concurrent detail fetches. Values below 1 are treated as 1.
    pub max_concurrency: usize,
    /// Whole-request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl CatalogConfig {
    /// Default limits pointed at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout: None,
        }
    }
}
