//! Curated sample catalogues
//!
//! Fixtures live in `symbols-parser/tests/fixtures/<name>.txt` and are loaded
//! through the same [DirectoryLoader] production code uses.

use crate::symbols::catalogue::Catalogue;
use crate::symbols::loader::{DirectoryLoader, ResourceLoader};
use std::path::PathBuf;

pub struct Samples;

impl Samples {
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    pub fn loader() -> DirectoryLoader {
        DirectoryLoader::new(Self::dir())
    }

    /// Raw text of a fixture. Panics if the fixture is missing.
    pub fn source(name: &str) -> String {
        Self::loader()
            .load_text(name)
            .unwrap_or_else(|err| panic!("sample '{}' failed to load: {}", name, err))
    }

    /// Parse a fixture into a catalogue named after it.
    pub fn get(name: &str) -> Catalogue {
        Catalogue::from_text(name, &Self::source(name))
    }

    /// All fixture names, sorted.
    pub fn names() -> Vec<String> {
        Self::loader()
            .list()
            .unwrap_or_else(|err| panic!("sample directory unreadable: {}", err))
    }
}
