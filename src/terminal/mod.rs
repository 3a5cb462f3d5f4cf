//! Terminal lifecycle for hosting the widgets.
//!
//! [`TerminalSession`] enters raw mode on creation and restores the
//! terminal when dropped. The panic hook from [`install_panic_hook`] covers
//! the paths where drop never runs.

mod panic;
mod setup;

pub use panic::install_panic_hook;
pub use setup::{emergency_restore, enter_widget_mode, leave_widget_mode};

use std::io::{self, Stdout};

use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{KitError, KitResult};

pub type DemoTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the ratatui terminal for the lifetime of the UI.
pub struct TerminalSession {
    terminal: DemoTerminal,
    restored: bool,
}

impl TerminalSession {
    pub fn new() -> KitResult<Self> {
        let mut stdout = io::stdout();
        enter_widget_mode(&mut stdout).map_err(KitError::Terminal)?;

        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                emergency_restore();
                return Err(KitError::Terminal(e));
            }
        };
        terminal.clear().map_err(KitError::Terminal)?;
        tracing::debug!("Terminal session started");

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut DemoTerminal {
        &mut self.terminal
    }

    /// Leave raw mode now. Later calls, including the one from drop, are
    /// no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_widget_mode(self.terminal.backend_mut());
        tracing::debug!("Terminal session restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}
