//! `dexly show <NAME>` -- one entry's details and base stats.

use std::fmt::Write;

use dexly_core::display::{self, capitalize};
use dexly_core::{Catalog, DetailRecord, RouteParam};

use crate::cli::ShowArgs;
use crate::error::CliError;
use crate::output::{self, OutputOpts};

const BAR_WIDTH: usize = 30;

// ── Detail rendering ────────────────────────────────────────────────

fn render_detail(record: &DetailRecord, color: bool) -> String {
    let mut out = String::new();
    let label_width = record
        .stats
        .iter()
        .map(|s| s.label.len())
        .max()
        .unwrap_or(0);
    let tint = color.then(|| display::primary_color(record.primary_category()));

    let _ = writeln!(out, "{}  #{}", capitalize(&record.name), record.id);
    let _ = writeln!(
        out,
        "Types   {}",
        output::category_list(&record.categories, color)
    );
    if let Some(ref front) = record.front_image_url {
        let _ = writeln!(out, "Front   {front}");
    }
    if let Some(ref back) = record.back_image_url {
        let _ = writeln!(out, "Back    {back}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Info");
    let _ = writeln!(out, "  ID      {}", record.id);
    let _ = writeln!(out, "  Height  {}", record.height);
    let _ = writeln!(out, "  Weight  {}", record.weight);

    if !record.stats.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Stats");
        for stat in &record.stats {
            let _ = writeln!(
                out,
                "  {:<label_width$}  {:>3}  {}",
                capitalize(&stat.label),
                stat.value,
                output::stat_bar(stat.value, BAR_WIDTH, tint),
            );
        }
    }

    out.trim_end().to_owned()
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(catalog: &Catalog, args: ShowArgs, out: OutputOpts) -> Result<(), CliError> {
    let route = RouteParam::from(args.name);

    let spinner = output::spinner(
        format!("Loading {}...", route.normalize().unwrap_or("details")),
        out.quiet,
    );
    let result = catalog.load_route(&route).await;
    spinner.finish_and_clear();
    let record = result?;

    let rendered = output::render_single(
        out.format,
        &record,
        |r| render_detail(r, out.color),
        |r| r.name.clone(),
    );
    output::print_output(&rendered, out.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use dexly_core::Stat;

    use super::*;

    fn record() -> DetailRecord {
        DetailRecord {
            id: 25,
            name: "pikachu".into(),
            height: 4,
            weight: 60,
            front_image_url: Some("https://img.test/25.png".into()),
            back_image_url: None,
            categories: vec!["electric".into()],
            stats: vec![
                Stat {
                    label: "hp".into(),
                    value: 35,
                },
                Stat {
                    label: "speed".into(),
                    value: 150,
                },
            ],
        }
    }

    #[test]
    fn detail_lists_info_and_capitalized_stats() {
        let text = render_detail(&record(), false);

        assert!(text.starts_with("Pikachu  #25"));
        assert!(text.contains("Types   electric"));
        assert!(text.contains("  Weight  60"));
        assert!(text.contains("Speed  150"));
        assert!(!text.contains("Back"));
    }

    #[test]
    fn stat_over_cap_renders_full_bar() {
        let text = render_detail(&record(), false);
        let speed = text.lines().find(|l| l.contains("Speed")).unwrap_or_default();

        assert!(speed.ends_with(&"█".repeat(BAR_WIDTH)));
    }
}
