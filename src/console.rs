//! Console interaction helpers.

use std::io::{BufRead, IsTerminal, Write};

/// Block for a line of input so a double-clicked console window stays open.
///
/// Skipped when disabled or when stdin is not a terminal, so scripted runs
/// never hang. Holding the window open is a UX choice, not a correctness
/// mechanism; read errors are ignored.
pub fn pause_for_ack(enabled: bool) {
    if !enabled || !std::io::stdin().is_terminal() {
        return;
    }

    print!("\nPress Enter to exit...");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
