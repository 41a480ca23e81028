//! Catalog list screen -- one row per entry with type badges.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};
use throbber_widgets_tui::ThrobberState;

use dexly_core::{FetchState, SummaryEntry};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::category_badge;

pub struct ListScreen {
    focused: bool,
    state: FetchState<Vec<SummaryEntry>>,
    table_state: TableState,
    throbber_state: ThrobberState,
}

impl ListScreen {
    pub fn new() -> Self {
        Self {
            focused: true,
            state: FetchState::Loading,
            table_state: TableState::default(),
            throbber_state: ThrobberState::default(),
        }
    }

    fn entries(&self) -> &[SummaryEntry] {
        self.state.value().map(Vec::as_slice).unwrap_or_default()
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn select(&mut self, idx: usize) {
        let len = self.entries().len();
        if len == 0 {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(idx.min(len - 1)));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let current = self.selected_index();
        let next = current.saturating_add_signed(delta);
        self.select(next);
    }

    fn selected_entry(&self) -> Option<&SummaryEntry> {
        self.entries().get(self.selected_index())
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, entries: &[SummaryEntry]) {
        let header = Row::new(vec![
            Cell::from("#").style(theme::table_header()),
            Cell::from("Name").style(theme::table_header()),
            Cell::from("Types").style(theme::table_header()),
            Cell::from("Sprite").style(theme::table_header()),
        ]);

        let selected_idx = self.selected_index();
        let rows: Vec<Row> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_selected = i == selected_idx;
                let prefix = if is_selected { "▸" } else { " " };
                let accent = theme::accent(entry.primary_category());

                Row::new(vec![
                    Cell::from((i + 1).to_string()),
                    Cell::from(format!("{prefix}{}", entry.name)).style(
                        Style::default().fg(accent).add_modifier(if is_selected {
                            Modifier::BOLD
                        } else {
                            Modifier::empty()
                        }),
                    ),
                    Cell::from(Line::from(category_badge::badges(&entry.categories))),
                    Cell::from(entry.front_image_url.clone().unwrap_or_else(|| "—".into()))
                        .style(theme::label()),
                ])
                .style(theme::table_row())
            })
            .collect();

        let widths = [
            Constraint::Length(4),
            Constraint::Min(16),
            Constraint::Length(22),
            Constraint::Min(20),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state;
        frame.render_stateful_widget(table, area, &mut state);
    }
}

impl Component for ListScreen {
    fn on_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('g') | KeyCode::Home => self.select(0),
            KeyCode::Char('G') | KeyCode::End => self.select(usize::MAX),
            KeyCode::Enter | KeyCode::Char('l') => {
                return self
                    .selected_entry()
                    .map(|e| Action::OpenDetail(e.name.clone()));
            }
            KeyCode::Char('r') => return Some(Action::Reload),
            _ => {}
        }
        None
    }

    fn on_scroll(&mut self, delta: isize) {
        self.move_selection(delta);
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::ListState(state) => {
                self.state = state.clone();
                let current = self.table_state.selected().unwrap_or(0);
                self.select(current);
            }
            Action::Tick if self.state.is_loading() => self.throbber_state.calc_next(),
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = match &self.state {
            FetchState::Ready(entries) => format!(" Catalog ({}) ", entries.len()),
            _ => " Catalog ".to_owned(),
        };
        let block = Block::default()
            .title(title)
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
            Constraint::Min(1),    // content
            Constraint::Length(1), // hints
        ])
        .split(inner);

        match &self.state {
            FetchState::Loading => {
                super::render_loading(frame, layout[0], "Loading catalog...", &self.throbber_state);
            }
            FetchState::Failed(message) => super::render_error(frame, layout[0], message),
            FetchState::Ready(entries) => self.render_table(frame, layout[0], entries),
        }

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("navigate  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("details  ", theme::key_hint()),
            Span::styled("r ", theme::key_hint_key()),
            Span::styled("reload", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[1]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
