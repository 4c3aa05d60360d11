// crates/bm-core/src/output.rs - Where user-facing lines go
//
// Commands and the help renderer never print on their own. They receive an
// `Output` and emit lines into it; the binary hands them a terminal writer,
// tests hand them a `MemoryOutput` and inspect what was written.

/// Kind of line being emitted, shown as a short prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// No prefix
    Plain,
    /// Something was created: "(+) "
    Added,
    /// Something was deleted: "(-) "
    Removed,
    /// Something was changed: "(*) "
    Updated,
}

impl Marker {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Added => "(+) ",
            Self::Removed => "(-) ",
            Self::Updated => "(*) ",
        }
    }
}

/// Sink for user-facing output
pub trait Output {
    /// Write one line. The line carries no trailing newline.
    fn emit(&mut self, marker: Marker, line: &str);
}

/// Collects emitted lines in memory, prefix included
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Vec<String>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Everything emitted so far, one line per row
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Output for MemoryOutput {
    fn emit(&mut self, marker: Marker, line: &str) {
        self.lines.push(format!("{}{}", marker.prefix(), line));
    }
}
