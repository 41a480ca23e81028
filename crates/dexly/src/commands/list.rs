//! `dexly list` -- first catalog page with types and sprites.

use tabled::Tabled;

use dexly_core::{Catalog, SummaryEntry};

use crate::cli::ListArgs;
use crate::error::CliError;
use crate::output::{self, OutputOpts};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
    #[tabled(rename = "Sprite")]
    sprite: String,
}

impl SummaryRow {
    fn new(position: usize, entry: &SummaryEntry, color: bool) -> Self {
        Self {
            position,
            name: entry.name.clone(),
            types: output::category_list(&entry.categories, color),
            sprite: entry.front_image_url.clone().unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(catalog: &Catalog, args: ListArgs, out: OutputOpts) -> Result<(), CliError> {
    let page_size = args.limit.unwrap_or(catalog.config().page_size);
    if page_size == 0 {
        return Err(CliError::Validation {
            field: "limit".into(),
            reason: "must be at least 1".into(),
        });
    }

    let spinner = output::spinner(format!("Fetching {page_size} entries..."), out.quiet);
    let result = catalog.list_summaries(page_size).await;
    spinner.finish_and_clear();
    let entries = result?;

    let mut position = 0;
    let rendered = output::render_list(
        out.format,
        &entries,
        |e| {
            position += 1;
            SummaryRow::new(position, e, out.color)
        },
        |e| e.name.clone(),
    );
    output::print_output(&rendered, out.quiet);
    Ok(())
}
