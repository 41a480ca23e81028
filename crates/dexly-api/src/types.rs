// Wire types for the PokeAPI v2 resources the catalog uses.
//
// Only the fields the client reads are modelled; everything else in the
// (large) pokemon resource is ignored by serde.

use serde::{Deserialize, Serialize};

// ── Listing ──────────────────────────────────────────────────────────

/// `GET /pokemon/?limit=N` response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingPage {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `{ name, url }` reference used throughout the API. `url` is absolute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

// ── Pokemon ──────────────────────────────────────────────────────────

/// Full `GET /pokemon/{name}` response, reduced to the fields we render.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonResource {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
}

/// The subset of a pokemon resource the list view needs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonSummaryResource {
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
}

/// `types[]` entry: `{ slot, type: { name, url } }`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u32>,
    #[serde(rename = "type")]
    pub kind: TypeRef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// `stats[]` entry: `{ base_stat, effort, stat: { name, url } }`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: StatRef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatRef {
    pub name: String,
}
