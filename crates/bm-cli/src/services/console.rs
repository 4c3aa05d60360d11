// crates/bm-cli/src/services/console.rs - Terminal output
//
// The terminal implementation of the core `Output` sink. Marker prefixes are
// coloured when stdout is a terminal that supports it; when piped, output is
// plain text identical to what `MemoryOutput` records.

use bm_core::{Marker, Output};
use console::{Term, style};
use tracing::warn;

/// Writes command output to stdout
pub struct ConsoleOutput {
    term: Term,
}

impl ConsoleOutput {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Output for ConsoleOutput {
    fn emit(&mut self, marker: Marker, line: &str) {
        let prefix = marker.prefix();
        let text = match marker {
            Marker::Plain => line.to_string(),
            Marker::Added => format!("{}{line}", style(prefix).green()),
            Marker::Removed => format!("{}{line}", style(prefix).red()),
            Marker::Updated => format!("{}{line}", style(prefix).yellow()),
        };

        // e.g. `bm ls | head -1` closing the pipe early
        if let Err(err) = self.term.write_line(&text) {
            warn!(%err, "failed to write to stdout");
        }
    }
}
