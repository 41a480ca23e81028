// dexly-api: Async Rust client for the PokeAPI catalog

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{CatalogClient, DEFAULT_BASE_URL, decode};
pub use error::Error;
pub use transport::{CatalogTransport, HttpTransport, TransportConfig};
pub use types::{ListingPage, NamedResource, PokemonResource, PokemonSummaryResource};
