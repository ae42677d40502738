//! Line Splitting and Classification
//!
//! Turns raw catalogue text into lines and decides what each line is.
//!
//! Classification follows this order:
//! 1. Header lines (start with the exact marker `"## "`)
//! 2. Blank lines (nothing left after trimming whitespace)
//! 3. Identifier lines (everything else)
//!
//! A header wins over blank, so `"## "` on its own is a header with an empty name.

/// Marker that opens a section header line.
pub const HEADER_MARKER: &str = "## ";

/// The type of a single catalogue line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineType {
    /// Starts a new section. Carries the trimmed section name.
    Header(String),
    /// Empty or whitespace-only; a separator, never an identifier.
    Blank,
    /// A symbol name belonging to the currently open section.
    Identifier,
}

/// Split raw text into lines on `\n`.
///
/// Lines are returned exactly as they appear, untrimmed. Zero-length segments are
/// omitted, so `""` yields no lines and a trailing newline yields no final empty
/// line. Whitespace-only lines are kept; filtering them is the section
/// extractor's job.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Determine the type of a line.
pub fn classify_line(line: &str) -> LineType {
    if let Some(name) = line.strip_prefix(HEADER_MARKER) {
        return LineType::Header(name.trim().to_string());
    }

    if line.trim().is_empty() {
        return LineType::Blank;
    }

    LineType::Identifier
}
