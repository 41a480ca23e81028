//! Input and clocks for the app loop.
//!
//! Polled inline with `select!` over the crossterm stream and two
//! intervals: a slow tick that animates throbbers and a fast one that
//! triggers redraws. Only the input the screens use gets through.

use std::time::Duration;

use crossterm::event::{Event as TermEvent, EventStream, KeyEvent, KeyEventKind, MouseEventKind};
use futures::StreamExt;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Wheel movement: +1 down, -1 up.
    Scroll(isize),
    Tick,
    /// Redraw. Also produced on terminal resize.
    Render,
}

pub struct Events {
    input: EventStream,
    tick: Interval,
    render: Interval,
}

impl Events {
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        Self {
            input: EventStream::new(),
            tick: interval(tick_rate),
            render: interval(render_rate),
        }
    }

    /// Next event, or `None` once terminal input is gone.
    pub async fn next(&mut self) -> Option<Event> {
        loop {
            tokio::select! {
                _ = self.tick.tick() => return Some(Event::Tick),
                _ = self.render.tick() => return Some(Event::Render),
                input = self.input.next() => match input {
                    Some(Ok(raw)) => {
                        if let Some(event) = translate(raw) {
                            return Some(event);
                        }
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "terminal input failed");
                        return None;
                    }
                    None => return None,
                },
            }
        }
    }
}

fn interval(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

fn translate(raw: TermEvent) -> Option<Event> {
    match raw {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        TermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(Event::Scroll(1)),
            MouseEventKind::ScrollUp => Some(Event::Scroll(-1)),
            _ => None,
        },
        TermEvent::Resize(..) => Some(Event::Render),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent};
    use pretty_assertions::assert_eq;

    use super::*;

    fn mouse(kind: MouseEventKind) -> TermEvent {
        TermEvent::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_presses_pass_and_releases_drop() {
        let press = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(translate(TermEvent::Key(press)), Some(Event::Key(press)));

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        assert_eq!(translate(TermEvent::Key(release)), None);
    }

    #[test]
    fn wheel_becomes_scroll_and_clicks_drop() {
        assert_eq!(translate(mouse(MouseEventKind::ScrollDown)), Some(Event::Scroll(1)));
        assert_eq!(translate(mouse(MouseEventKind::ScrollUp)), Some(Event::Scroll(-1)));
        assert_eq!(translate(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn resize_requests_redraw() {
        assert_eq!(translate(TermEvent::Resize(120, 40)), Some(Event::Render));
        assert_eq!(translate(TermEvent::FocusGained), None);
    }
}
