//! Testing utilities for catalogue assertions
//!
//!     Tests share two habits:
//!
//!         1. Prefer curated fixture catalogues (via [Samples](samples::Samples)) over
//!            ad-hoc strings when a test is about realistic input.
//!         2. Assert on the whole structure (via [assert_catalogue]) rather than on
//!            counts alone.
//!
//!     Examples:
//!
//!     ```rust,ignore
//!     use symbols_parser::symbols::testing::{assert_catalogue, samples::Samples};
//!
//!     let catalogue = Samples::get("shapes-arrows");
//!     assert_catalogue(&catalogue)
//!         .section_count(2)
//!         .section(0, |s| {
//!             s.name("Shapes").identifiers(&["square", "circle"]);
//!         });
//!     ```

pub mod assertions;
pub mod samples;

pub use assertions::{assert_catalogue, CatalogueAssertion, SectionAssertion};
