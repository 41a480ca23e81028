//! Catalog logic shared by the dexly front ends.
//!
//! - **[`Catalog`]** wraps a [`dexly_api::CatalogClient`] and offers the two
//!   high-level reads: [`list_summaries`](Catalog::list_summaries) (listing
//!   page plus a bounded, order-preserving detail fan-out) and
//!   [`load_detail`](Catalog::load_detail).
//!
//! - **[`ViewController`]** holds one screen's [`FetchState`], re-fetches
//!   when its key changes, and discards results from superseded fetches.
//!
//! - **Domain model** ([`model`]) -- [`SummaryEntry`], [`DetailRecord`],
//!   and the [`RouteParam`] normalizer.
//!
//! - **[`display`]** -- color and stat-bar hints derived from records.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod display;
pub mod error;
pub mod model;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::Catalog;
pub use dexly_api::DEFAULT_BASE_URL;
pub use config::{CatalogConfig, DEFAULT_MAX_CONCURRENCY, DEFAULT_PAGE_SIZE};
pub use error::CoreError;
pub use model::{DetailRecord, RouteParam, Stat, SummaryEntry};
pub use view::{FetchState, ViewController};
