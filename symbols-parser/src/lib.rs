//! # symbols-parser
//!
//! A parser for sectioned symbol catalogues.
//!
//! A catalogue is a flat text file of symbol names, one per line, optionally
//! grouped by `## ` header lines:
//!
//!     ## Shapes
//!     square
//!     circle
//!
//!     ## Arrows
//!     arrow.up
//!
//! File Layout
//!
//! src/symbols
//!   ├── lexing       Line splitting and line classification
//!   ├── parsing      Section extraction over classified lines
//!   ├── catalogue    The Catalogue value and its constructors
//!   ├── loader       Resource loading (directory, in-memory)
//!   ├── formats      Rendering catalogues back to text, outline, json, yaml
//!   └── testing      Fluent assertions and curated sample fixtures
//!
//! Parsing never fails. The only fallible step is loading the resource text, and
//! [Catalogue::from_resource](symbols::catalogue::Catalogue::from_resource) absorbs
//! that failure into an empty catalogue.

pub mod symbols;

pub use symbols::catalogue::{Catalogue, DEFAULT_NAME, DEFAULT_RESOURCE};
pub use symbols::parsing::Section;
