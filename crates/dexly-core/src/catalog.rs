// ── Catalog facade ──
//
// List aggregation and detail loading over a `CatalogClient`. Every call
// goes to the network; nothing is cached between calls.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};
use url::Url;

use dexly_api::{CatalogClient, CatalogTransport, HttpTransport, NamedResource, TransportConfig};

use crate::config::CatalogConfig;
use crate::convert;
use crate::error::CoreError;
use crate::model::{DetailRecord, RouteParam, SummaryEntry};

/// Entry point for front ends.
///
/// Cheaply cloneable via `Arc`; clones share the HTTP client and its
/// connection pool.
pub struct Catalog<T: CatalogTransport = HttpTransport> {
    inner: Arc<CatalogInner<T>>,
}

struct CatalogInner<T> {
    config: CatalogConfig,
    client: CatalogClient<T>,
}

impl<T: CatalogTransport> Clone for Catalog<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Catalog<HttpTransport> {
    /// Build a catalog backed by reqwest.
    pub fn new(config: CatalogConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
            ..TransportConfig::default()
        };
        let transport = HttpTransport::new(&transport)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: CatalogTransport> Catalog<T> {
    /// Build a catalog over any transport.
    pub fn with_transport(config: CatalogConfig, transport: T) -> Self {
        let client = CatalogClient::with_transport(config.base_url.clone(), transport);
        Self {
            inner: Arc::new(CatalogInner { config, client }),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    pub fn client(&self) -> &CatalogClient<T> {
        &self.inner.client
    }

    // ── List aggregation ─────────────────────────────────────────

    /// Fetch the first listing page and resolve every entry's details.
    ///
    /// Detail requests run concurrently, at most `max_concurrency` at a
    /// time, and results come back in listing order regardless of which
    /// request finished first. Any failure fails the whole call.
    pub async fn list_summaries(&self, page_size: u32) -> Result<Vec<SummaryEntry>, CoreError> {
        let client = &self.inner.client;
        let page = client.list_page(page_size).await?;
        let limit = self.inner.config.max_concurrency.max(1);

        debug!(
            entries = page.results.len(),
            max_concurrency = limit,
            "resolving listing entries"
        );

        let entries: Vec<SummaryEntry> = stream::iter(page.results)
            .map(|item| async move { resolve_summary(client, item).await })
            .buffered(limit)
            .try_collect()
            .await?;

        info!(count = entries.len(), "catalog listing loaded");
        Ok(entries)
    }

    /// [`list_summaries`](Self::list_summaries) with the configured page size.
    pub async fn list_default(&self) -> Result<Vec<SummaryEntry>, CoreError> {
        self.list_summaries(self.inner.config.page_size).await
    }

    // ── Detail loading ───────────────────────────────────────────

    /// Load one record by identifier.
    ///
    /// An absent or blank identifier fails with [`CoreError::InvalidInput`]
    /// before any request is made. The identifier is used verbatim in the
    /// request path and as the record's `name`.
    pub async fn load_detail(&self, name: Option<&str>) -> Result<DetailRecord, CoreError> {
        let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
            return Err(CoreError::InvalidInput);
        };

        let client = &self.inner.client;
        let url = client.pokemon_url(name)?;
        let resource = client.fetch_pokemon(url).await?;

        debug!(name, id = resource.id, "detail loaded");
        Ok(convert::detail_record(name, resource))
    }

    /// Load the record named by a navigation parameter.
    pub async fn load_route(&self, param: &RouteParam) -> Result<DetailRecord, CoreError> {
        self.load_detail(param.normalize()).await
    }
}

async fn resolve_summary<T: CatalogTransport>(
    client: &CatalogClient<T>,
    item: NamedResource,
) -> Result<SummaryEntry, CoreError> {
    let url = Url::parse(&item.url).map_err(|e| {
        CoreError::shape("listing", format!("invalid url {:?} for {}: {e}", item.url, item.name))
    })?;
    let resource = client.fetch_pokemon_summary(url).await?;
    Ok(convert::summary_entry(item.name, resource))
}
