//! Detail screen -- sprites, types, info and stat bars for one entry.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use throbber_widgets_tui::ThrobberState;

use dexly_core::display::capitalize;
use dexly_core::{DetailRecord, FetchState};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::category_badge;
use crate::widgets::stat_bar::StatBar;

pub struct DetailScreen {
    focused: bool,
    requested: Option<String>,
    state: FetchState<DetailRecord>,
    throbber_state: ThrobberState,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            requested: None,
            state: FetchState::Loading,
            throbber_state: ThrobberState::default(),
        }
    }

    fn title(&self) -> String {
        match (&self.state, &self.requested) {
            (FetchState::Ready(record), _) => {
                format!(" {}  #{} ", capitalize(&record.name), record.id)
            }
            (_, Some(name)) => format!(" {} ", capitalize(name)),
            (_, None) => " Details ".to_owned(),
        }
    }

    fn render_record(frame: &mut Frame, area: Rect, record: &DetailRecord) {
        let stat_rows = u16::try_from(record.stats.len()).unwrap_or(u16::MAX);
        let layout = Layout::vertical([
            Constraint::Length(1), // types
            Constraint::Length(1),
            Constraint::Length(3), // sprites
            Constraint::Length(1),
            Constraint::Length(4), // info
            Constraint::Length(1),
            Constraint::Length(1), // stats heading
            Constraint::Length(stat_rows),
            Constraint::Min(0),
        ])
        .split(area);

        let mut types = vec![Span::styled("  Types    ", theme::label())];
        types.extend(category_badge::badges(&record.categories));
        frame.render_widget(Paragraph::new(Line::from(types)), layout[0]);

        let sprite = |label: &'static str, url: Option<&String>| {
            Line::from(vec![
                Span::styled(format!("  {label:<9}"), theme::label()),
                Span::styled(
                    url.map_or_else(|| "—".to_owned(), Clone::clone),
                    theme::value(),
                ),
            ])
        };
        let sprites = vec![
            Line::from(Span::styled("  Sprites", theme::section_style())),
            sprite("Front", record.front_image_url.as_ref()),
            sprite("Back", record.back_image_url.as_ref()),
        ];
        frame.render_widget(Paragraph::new(sprites), layout[2]);

        let field = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("  {label:<9}"), theme::label()),
                Span::styled(value, theme::value()),
            ])
        };
        let info = vec![
            Line::from(Span::styled("  Info", theme::section_style())),
            field("ID", record.id.to_string()),
            field("Height", record.height.to_string()),
            field("Weight", record.weight.to_string()),
        ];
        frame.render_widget(Paragraph::new(info), layout[4]);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("  Stats", theme::section_style()))),
            layout[6],
        );

        let accent = theme::accent(record.primary_category());
        let rows = Layout::vertical(vec![Constraint::Length(1); record.stats.len()])
            .horizontal_margin(2)
            .split(layout[7]);
        for (stat, row) in record.stats.iter().zip(rows.iter()) {
            frame.render_widget(StatBar::new(&stat.label, stat.value, accent), *row);
        }
    }
}

impl Component for DetailScreen {
    fn on_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => Some(Action::GoBack),
            KeyCode::Char('r') => Some(Action::Reload),
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::OpenDetail(name) => {
                if self.requested.as_deref() != Some(name.as_str()) {
                    self.requested = Some(name.clone());
                    self.state = FetchState::Loading;
                }
            }
            Action::DetailState(state) => self.state = state.clone(),
            Action::Tick if self.state.is_loading() => self.throbber_state.calc_next(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(self.title())
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),    // content
            Constraint::Length(1), // hints
        ])
        .split(inner);

        match &self.state {
            FetchState::Loading => {
                super::render_loading(frame, layout[1], "Loading details...", &self.throbber_state);
            }
            FetchState::Failed(message) => super::render_error(frame, layout[1], message),
            FetchState::Ready(record) => Self::render_record(frame, layout[1], record),
        }

        let hints = Line::from(vec![
            Span::styled("  Esc ", theme::key_hint_key()),
            Span::styled("back  ", theme::key_hint()),
            Span::styled("r ", theme::key_hint_key()),
            Span::styled("reload", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[2]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
