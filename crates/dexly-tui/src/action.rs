//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::fmt;

use dexly_core::{DetailRecord, FetchState, SummaryEntry};

/// Every state change in the TUI flows through an Action.
#[derive(Clone)]
pub enum Action {
    // ── Lifecycle ──
    Quit,
    Tick,
    Render,

    // ── Navigation ──
    /// Open the detail screen for a name.
    OpenDetail(String),
    /// Return from detail to the list.
    GoBack,
    /// Re-fetch the active screen's data.
    Reload,
    ToggleHelp,

    // ── Data (from the view bridge) ──
    ListState(FetchState<Vec<SummaryEntry>>),
    DetailState(FetchState<DetailRecord>),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => write!(f, "Quit"),
            Self::Tick => write!(f, "Tick"),
            Self::Render => write!(f, "Render"),
            Self::OpenDetail(name) => write!(f, "OpenDetail({name})"),
            Self::GoBack => write!(f, "GoBack"),
            Self::Reload => write!(f, "Reload"),
            Self::ToggleHelp => write!(f, "ToggleHelp"),
            Self::ListState(state) => write!(f, "ListState({})", state_label(state)),
            Self::DetailState(state) => write!(f, "DetailState({})", state_label(state)),
        }
    }
}

fn state_label<T>(state: &FetchState<T>) -> &'static str {
    match state {
        FetchState::Loading => "loading",
        FetchState::Failed(_) => "failed",
        FetchState::Ready(_) => "ready",
    }
}
