#![forbid(unsafe_code)]

//! Terminal session guard.
//!
//! Enters raw mode and the alternate screen on creation and restores the
//! terminal on drop, including when the demo unwinds from a panic.

use std::io::{self, Write};

/// RAII guard over the terminal state the demo changes.
pub struct TerminalSession {
    restored: bool,
}

impl TerminalSession {
    /// Enter raw mode, switch to the alternate screen and hide the cursor.
    pub fn new() -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = crossterm::execute!(
            stdout,
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide
        ) {
            let _ = crossterm::terminal::disable_raw_mode();
            return Err(err);
        }
        tracing::debug!("terminal session started");
        Ok(Self { restored: false })
    }

    /// Restore the terminal; later calls are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let mut stdout = io::stdout();
        let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
        let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = stdout.flush();
        tracing::debug!("terminal session restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}
