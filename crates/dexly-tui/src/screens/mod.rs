pub mod detail;
pub mod list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::component::Component;
use crate::screen::ScreenId;
use crate::theme;

/// Build every screen, keyed by id.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (ScreenId::List, Box::new(list::ListScreen::new())),
        (ScreenId::Detail, Box::new(detail::DetailScreen::new())),
    ]
}

// ── Shared state panels ──────────────────────────────────────────────

/// Centered throbber with a label.
pub(crate) fn render_loading(frame: &mut Frame, area: Rect, label: &str, state: &ThrobberState) {
    let layout = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let throbber = Throbber::default()
        .label(format!("  {label}"))
        .style(Style::default().fg(theme::NEON_CYAN))
        .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));

    frame.render_stateful_widget(throbber, layout[1], &mut state.clone());
}

/// Error message with a retry hint.
pub(crate) fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let layout = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .split(area);

    let text = vec![
        Line::from(Span::styled(format!("  {message}"), theme::error())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  r ", theme::key_hint_key()),
            Span::styled("retry", theme::key_hint()),
        ]),
    ];
    frame.render_widget(Paragraph::new(text), layout[1]);
}
