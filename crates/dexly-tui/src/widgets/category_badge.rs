//! Category badges -- ` Electric ` on the category's color.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use dexly_core::display::capitalize;

use crate::theme;

/// A single badge span.
pub fn badge(category: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", capitalize(category)),
        Style::default()
            .fg(Color::Black)
            .bg(theme::category(category))
            .add_modifier(Modifier::BOLD),
    )
}

/// Badges separated by single spaces. Empty categories render as a dim dash.
pub fn badges(categories: &[String]) -> Vec<Span<'static>> {
    if categories.is_empty() {
        return vec![Span::styled("—", theme::label())];
    }

    let mut spans = Vec::with_capacity(categories.len() * 2);
    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(badge(category));
    }
    spans
}
