//! Minimal terminal handling for the interactive drills.

use std::io::{IsTerminal, Write};

/// Clears the screen and homes the cursor when stdout is a terminal.
/// A no-op for piped output, which keeps transcripts and tests clean.
pub fn clear_screen() {
    let mut stdout = std::io::stdout();
    if stdout.is_terminal() {
        let _ = write!(stdout, "\x1b[2J\x1b[1;1H");
        let _ = stdout.flush();
    }
}
