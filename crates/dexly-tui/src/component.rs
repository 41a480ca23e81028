//! What the app needs from a screen.
//!
//! The app owns routing and focus. A screen turns input into actions and
//! redraws from whatever state the actions have handed it.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::action::Action;

pub trait Component {
    /// Map a key press to an action for the app to dispatch.
    fn on_key(&mut self, key: KeyEvent) -> Option<Action>;

    /// Wheel movement (+1 down, -1 up).
    fn on_scroll(&mut self, _delta: isize) {}

    /// Every dispatched action reaches every screen.
    fn update(&mut self, action: &Action);

    fn render(&self, frame: &mut Frame, area: Rect);

    fn set_focused(&mut self, focused: bool);
}
