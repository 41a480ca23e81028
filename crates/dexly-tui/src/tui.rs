//! Terminal session and crash hooks.
//!
//! `ratatui::try_init` handles raw mode and the alternate screen; the
//! session adds mouse capture so the list can scroll. Dropping it hands
//! the terminal back.

use std::io::stdout;

use color_eyre::eyre::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::{DefaultTerminal, Frame};

pub struct Session {
    terminal: DefaultTerminal,
}

impl Session {
    pub fn start() -> Result<Self> {
        let terminal = ratatui::try_init()?;
        stdout().execute(EnableMouseCapture)?;
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    let _ = stdout().execute(DisableMouseCapture);
    ratatui::restore();
}

/// color-eyre error reports, and a panic hook that restores the terminal
/// before anything is printed. Debug builds format panics with better-panic.
///
/// Install before [`Session::start`].
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        if cfg!(debug_assertions) {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .create_panic_handler()(info);
        } else {
            panic_hook(info);
        }
    }));

    Ok(())
}
