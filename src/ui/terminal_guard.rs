//! Terminal session that restores the shell on drop.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

/// Raw-mode, alternate-screen terminal owned for the lifetime of the wizard.
///
/// Dropping the guard restores the terminal, which also covers early
/// returns through `?`. Panics are covered by [`install_panic_hook`].
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(err) => {
                Self::cleanup();
                return Err(err).context("Failed to create terminal");
            }
        };
        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Restore the terminal; safe to call more than once
    pub fn cleanup() {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        let _ = io::stdout().flush();
    }

    /// Restore the terminal now instead of at drop
    pub fn restore(&mut self) {
        if std::mem::replace(&mut self.active, false) {
            Self::cleanup();
        }
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Install panic hook that restores terminal before printing panic.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        TerminalGuard::cleanup();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_is_callable() {
        // Terminal ops fail without a tty but must not panic
        TerminalGuard::cleanup();
        TerminalGuard::cleanup();
    }
}
