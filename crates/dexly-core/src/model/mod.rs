// ── Domain model ──
//
// Records handed to front ends. Built fresh per fetch, never cached.

mod detail;
mod route;
mod summary;

pub use detail::{DetailRecord, Stat};
pub use route::RouteParam;
pub use summary::SummaryEntry;
