//! Section Extraction
//!
//!     Groups an ordered sequence of lines into named sections. A section opens at
//!     every header line and collects the identifier lines that follow it, up to the
//!     next header or the end of input.
//!
//!     Identifiers that appear before the first header belong to a section whose
//!     name is the empty string. The empty name is part of the public data shape:
//!     callers present it as "ungrouped".
//!
//! Emission Rules
//!
//!     | Event          | Pending has identifiers | Pending is empty |
//!     |----------------|-------------------------|------------------|
//!     | Header line    | emit, then rename       | rename only      |
//!     | Identifier     | append                  | append           |
//!     | Blank line     | no change               | no change        |
//!     | End of input   | emit                    | nothing          |
//!
//!     A header followed by no identifiers is therefore never emitted, and neither is
//!     a header on the very last line.
//!
//!     Identifiers are stored in their original, untrimmed form.

use super::lexing::{classify_line, LineType};
use serde::{Deserialize, Serialize};

/// A named, ordered run of identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub(crate) name: String,
    pub(crate) identifiers: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, identifiers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            identifiers,
        }
    }

    /// The section name; empty for identifiers that precede any header.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// True when the name is empty, as for identifiers ahead of the first header.
    pub fn is_ungrouped(&self) -> bool {
        self.name.is_empty()
    }
}

/// Fold state: the sections emitted so far plus the one still collecting.
#[derive(Debug, Default)]
struct Extraction {
    sections: Vec<Section>,
    pending: Section,
}

impl Extraction {
    fn step(mut self, line: &str) -> Self {
        match classify_line(line) {
            LineType::Header(name) => {
                self.flush();
                self.pending.name = name;
            }
            LineType::Identifier => self.pending.identifiers.push(line.to_string()),
            LineType::Blank => {}
        }
        self
    }

    /// Move the pending section into the output if it collected anything.
    /// The pending name is reset too; callers rename right after.
    fn flush(&mut self) {
        if !self.pending.identifiers.is_empty() {
            self.sections.push(std::mem::take(&mut self.pending));
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.sections
    }
}

/// Group lines into sections delimited by `"## "` header lines.
///
/// Total over any input: an empty slice yields no sections, input without headers
/// yields at most one section named `""`.
pub fn extract_sections<S: AsRef<str>>(lines: &[S]) -> Vec<Section> {
    lines
        .iter()
        .fold(Extraction::default(), |state, line| state.step(line.as_ref()))
        .finish()
}
