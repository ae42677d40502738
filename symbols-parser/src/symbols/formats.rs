//! Output formats for catalogues
//!
//!     - source: catalogue text that parses back to the same sections
//!     - outline: one line per node, for reading in a terminal
//!     - json / yaml: the serde view of the catalogue
//!
//! Structured formats serialize the whole value (`name`, `identifiers`, `sections`).

pub mod outline;
pub mod source;

pub use outline::to_outline;
pub use source::to_source;

use super::catalogue::Catalogue;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("unknown format '{0}' (expected one of: source, outline, json, yaml)")]
    Unknown(String),
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Source,
    Outline,
    Json,
    Yaml,
}

impl Format {
    pub fn all() -> &'static [Format] {
        &[Format::Source, Format::Outline, Format::Json, Format::Yaml]
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Source => "source",
            Format::Outline => "outline",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Format::Source => "Catalogue text with ## section headers",
            Format::Outline => "Indented tree of sections and identifiers",
            Format::Json => "Pretty-printed JSON",
            Format::Yaml => "YAML document",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::all()
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatError::Unknown(s.to_string()))
    }
}

pub fn to_json(catalogue: &Catalogue) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(catalogue)?)
}

pub fn to_yaml(catalogue: &Catalogue) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(catalogue)?)
}

/// Render a catalogue in the requested format.
pub fn format_catalogue(catalogue: &Catalogue, format: Format) -> Result<String, FormatError> {
    match format {
        Format::Source => Ok(to_source(catalogue)),
        Format::Outline => Ok(to_outline(catalogue)),
        Format::Json => to_json(catalogue),
        Format::Yaml => to_yaml(catalogue),
    }
}
