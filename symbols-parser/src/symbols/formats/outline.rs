//! Outline formatter
//!
//! One line per node, nesting encoded as 2 spaces per level:
//!
//!     ⧉ Symbols (4 identifiers, 2 sections)
//!       § Shapes (2)
//!         • square
//!         • circle
//!       § Arrows (2)
//!         • up
//!         • down
//!
//! Icons
//!     Catalogue: ⧉
//!     Section: §
//!     Identifier: •
//!
//! Identifiers are shown trimmed. The empty-named section prints as `(ungrouped)`.
//! A catalogue without sections lists its identifiers directly under the root.

use crate::symbols::catalogue::Catalogue;

const CATALOGUE_ICON: &str = "⧉";
const SECTION_ICON: &str = "§";
const IDENTIFIER_ICON: &str = "•";
const UNGROUPED_LABEL: &str = "(ungrouped)";

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

pub fn to_outline(catalogue: &Catalogue) -> String {
    let mut out = format!(
        "{} {} ({}, {})\n",
        CATALOGUE_ICON,
        catalogue.name(),
        plural(catalogue.len(), "identifier"),
        plural(catalogue.sections().len(), "section"),
    );

    if !catalogue.has_sections() {
        for identifier in catalogue.identifiers() {
            out.push_str(&format!("  {} {}\n", IDENTIFIER_ICON, identifier.trim()));
        }
        return out;
    }

    for section in catalogue.sections() {
        let label = if section.is_ungrouped() {
            UNGROUPED_LABEL
        } else {
            section.name()
        };
        out.push_str(&format!("  {} {} ({})\n", SECTION_ICON, label, section.len()));
        for identifier in section.identifiers() {
            out.push_str(&format!("    {} {}\n", IDENTIFIER_ICON, identifier.trim()));
        }
    }

    out
}
