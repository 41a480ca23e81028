//! Application core -- event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use dexly_core::{Catalog, DetailRecord, SummaryEntry, ViewController};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, Events};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Session;

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen.
    active_screen: ScreenId,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Help overlay visibility.
    help_visible: bool,
    /// Action sender -- components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver -- main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Catalog API root, shown in the status bar.
    base_url: String,
    /// Listing page size, the list view's key.
    page_size: u32,
    list_view: ViewController<u32, Vec<SummaryEntry>>,
    detail_view: ViewController<String, DetailRecord>,
    /// Cancellation token for the view bridge task.
    bridge_cancel: CancellationToken,
}

impl App {
    pub fn new(catalog: Catalog, page_size: u32) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let base_url = catalog.config().base_url.to_string();

        let list_catalog = catalog.clone();
        let list_view = ViewController::new("list", move |page_size: u32| {
            let catalog = list_catalog.clone();
            async move { catalog.list_summaries(page_size).await }
        });

        let detail_view = ViewController::new("detail", move |name: String| {
            let catalog = catalog.clone();
            async move { catalog.load_detail(Some(&name)).await }
        });

        Self {
            active_screen: ScreenId::List,
            screens: create_screens().into_iter().collect(),
            running: true,
            help_visible: false,
            action_tx,
            action_rx,
            base_url,
            page_size,
            list_view,
            detail_view,
            bridge_cancel: CancellationToken::new(),
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut session = Session::start()?;

        for (id, screen) in &mut self.screens {
            screen.set_focused(*id == self.active_screen);
        }

        tokio::spawn(crate::view_bridge::spawn_view_bridge(
            self.list_view.subscribe(),
            self.detail_view.subscribe(),
            self.action_tx.clone(),
            self.bridge_cancel.clone(),
        ));
        self.list_view.set_key(self.page_size);

        let mut events = Events::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!(base_url = %self.base_url, "TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key) {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Scroll(delta) => {
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.on_scroll(delta);
                    }
                }
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action);

                if let Action::Render = action {
                    session.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.bridge_cancel.cancel();
        drop(session);
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if self.help_visible {
            return matches!(key.code, KeyCode::Esc | KeyCode::Char('?'))
                .then_some(Action::ToggleHelp);
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE, KeyCode::Char('?')) => Some(Action::ToggleHelp),
            _ => self
                .screens
                .get_mut(&self.active_screen)
                .and_then(|screen| screen.on_key(key)),
        }
    }

    /// Process a single action -- update app state and propagate to screens.
    fn process_action(&mut self, action: &Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::OpenDetail(name) => {
                self.detail_view.set_key(name.clone());
                self.switch_screen(ScreenId::Detail);
            }
            Action::GoBack => self.switch_screen(ScreenId::List),
            Action::Reload => {
                debug!(screen = ?self.active_screen, "reload requested");
                match self.active_screen {
                    ScreenId::List => self.list_view.reload(),
                    ScreenId::Detail => self.detail_view.reload(),
                };
            }
            _ => {}
        }

        // Inactive screens still track their data
        for screen in self.screens.values_mut() {
            screen.update(action);
        }
    }

    fn switch_screen(&mut self, target: ScreenId) {
        if target == self.active_screen {
            return;
        }
        debug!(from = ?self.active_screen, to = ?target, "switching screen");

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(false);
        }
        self.active_screen = target;
        if let Some(screen) = self.screens.get_mut(&target) {
            screen.set_focused(true);
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }

        self.render_status_bar(frame, layout[1]);

        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    /// Bottom status bar: screen, API root, global hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.active_screen.label()),
                Style::default().fg(theme::ELECTRIC_PURPLE),
            ),
            Span::styled(
                format!("● {}", self.base_url),
                Style::default().fg(theme::NEON_CYAN),
            ),
            Span::styled(" │ ? help  q quit", theme::key_hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let help_width = 44u16.min(area.width.saturating_sub(4));
        let help_height = 14u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let entry = |key: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            entry("j/k ↑/↓", "Move up/down"),
            entry("g/G", "Top / bottom"),
            entry("Enter", "Open details"),
            entry("Esc", "Back to list"),
            entry("r", "Reload"),
            entry("?", "This help"),
            entry("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled("        Esc or ? to close", theme::key_hint())),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
