//! Catalogue text serializer
//!
//! Converts a catalogue back into catalogue text. This is useful for:
//!
//! - Round-trip testing (text -> catalogue -> text -> catalogue)
//! - Writing out a catalogue assembled from a list
//!
//! Sections are written as a `## <name>` header followed by their identifiers, one
//! blank line between sections. A leading section with an empty name is written
//! without a header, since identifiers ahead of the first header already land in
//! that section. Any later empty-named section gets a bare `## ` header so it stays
//! separate from the section before it.
//!
//! Catalogues without sections are written as their identifier list.

use crate::symbols::catalogue::Catalogue;
use crate::symbols::lexing::HEADER_MARKER;

pub fn to_source(catalogue: &Catalogue) -> String {
    let mut out = String::new();

    if !catalogue.has_sections() {
        for identifier in catalogue.identifiers() {
            out.push_str(identifier);
            out.push('\n');
        }
        return out;
    }

    for (index, section) in catalogue.sections().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if index > 0 || !section.is_ungrouped() {
            out.push_str(HEADER_MARKER);
            out.push_str(section.name());
            out.push('\n');
        }
        for identifier in section.identifiers() {
            out.push_str(identifier);
            out.push('\n');
        }
    }

    out
}
