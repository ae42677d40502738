//! Catalogue element
//!
//!     A catalogue is a named collection of symbol identifiers. It carries the flat
//!     identifier list in source order and, when built from text, the same identifiers
//!     grouped into sections by `## ` header lines.
//!
//! Construction
//!
//!     - [Catalogue::from_list]: a small ad-hoc set. Sections stay empty; no grouping
//!       is attempted on a list.
//!     - [Catalogue::from_text]: curated text. Identifiers are the split lines,
//!       sections are extracted from those lines.
//!     - [Catalogue::from_resource]: text looked up through a [ResourceLoader]. A failed
//!       lookup yields an empty catalogue rather than an error.
//!
//!     Catalogues are never modified after construction.

use super::lexing::split_lines;
use super::loader::ResourceLoader;
use super::parsing::{extract_sections, Section};
use serde::Serialize;

/// Display name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "Symbols";

/// Resource name of the built-in catalogue.
pub const DEFAULT_RESOURCE: &str = "SFSymbols";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalogue {
    name: String,
    identifiers: Vec<String>,
    sections: Vec<Section>,
}

impl Catalogue {
    pub fn from_list<I, S>(name: impl Into<String>, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            sections: Vec::new(),
        }
    }

    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let name = name.into();
        let identifiers = split_lines(text);
        let sections = extract_sections(&identifiers);
        tracing::debug!(
            catalogue = %name,
            identifiers = identifiers.len(),
            sections = sections.len(),
            "parsed catalogue text"
        );
        Self {
            name,
            identifiers,
            sections,
        }
    }

    /// Load `filename` through `loader` and parse it. Any loading failure produces
    /// an empty catalogue with the given name.
    pub fn from_resource(
        name: impl Into<String>,
        filename: &str,
        loader: &dyn ResourceLoader,
    ) -> Self {
        let name = name.into();
        match loader.load_text(filename) {
            Ok(text) => Self::from_text(name, &text),
            Err(err) => {
                tracing::warn!(
                    catalogue = %name,
                    resource = filename,
                    error = %err,
                    "catalogue resource unavailable, using an empty catalogue"
                );
                Self::from_list(name, Vec::<String>::new())
            }
        }
    }

    /// The default catalogue: [DEFAULT_RESOURCE] loaded under [DEFAULT_NAME].
    pub fn builtin(loader: &dyn ResourceLoader) -> Self {
        Self::from_resource(DEFAULT_NAME, DEFAULT_RESOURCE, loader)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every split line in source order, including whitespace-only lines and lines
    /// ahead of the first header.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section with the given name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name() == name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(Section::name)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::from_list(DEFAULT_NAME, Vec::<String>::new())
    }
}
