//! Raw terminal mode switches used by the demo host.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Switch to raw mode on the alternate screen with mouse reporting.
///
/// Mouse capture is needed for carousel drags and list wheel scrolling.
pub fn enter_widget_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Undo [`enter_widget_mode`]. Errors are ignored so this is safe to call
/// from drop and panic paths, more than once.
pub fn leave_widget_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout without access to the owning terminal.
pub fn emergency_restore() {
    leave_widget_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_writes_restore_sequences() {
        let mut buffer = Vec::new();
        leave_widget_mode(&mut buffer);
        // Show cursor is always emitted last
        assert!(buffer.ends_with(b"\x1b[?25h"));
    }

    #[test]
    fn test_leave_twice_is_harmless() {
        let mut buffer = Vec::new();
        leave_widget_mode(&mut buffer);
        leave_widget_mode(&mut buffer);
    }
}
