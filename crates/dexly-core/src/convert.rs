// ── API-to-domain type conversions ──
//
// Bridges raw `dexly_api::types` responses into `dexly_core::model`
// records. Missing sprites stay `None`; a missing type list is a shape
// error caught at decode time, not here. Type names keep response order,
// so the first listed type is the primary one.

use dexly_api::types::{PokemonResource, PokemonSummaryResource, StatSlot, TypeSlot};

use crate::model::{DetailRecord, Stat, SummaryEntry};

// ── Helpers ────────────────────────────────────────────────────────

fn categories(types: Vec<TypeSlot>) -> Vec<String> {
    types.into_iter().map(|t| t.kind.name).collect()
}

impl From<StatSlot> for Stat {
    fn from(slot: StatSlot) -> Self {
        Self {
            label: slot.stat.name,
            value: slot.base_stat,
        }
    }
}

// ── Records ────────────────────────────────────────────────────────

/// Combine a listing name with its summary resource.
pub(crate) fn summary_entry(name: String, resource: PokemonSummaryResource) -> SummaryEntry {
    SummaryEntry {
        name,
        front_image_url: resource.sprites.front_default,
        back_image_url: resource.sprites.back_default,
        categories: categories(resource.types),
    }
}

/// Build a detail record, keeping the identifier it was requested with.
pub(crate) fn detail_record(requested: &str, resource: PokemonResource) -> DetailRecord {
    DetailRecord {
        id: resource.id,
        name: requested.to_owned(),
        height: resource.height,
        weight: resource.weight,
        front_image_url: resource.sprites.front_default,
        back_image_url: resource.sprites.back_default,
        categories: categories(resource.types),
        stats: resource.stats.into_iter().map(Stat::from).collect(),
    }
}
