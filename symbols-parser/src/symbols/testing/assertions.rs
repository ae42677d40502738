//! Fluent assertions over a [Catalogue]

use crate::symbols::catalogue::Catalogue;
use crate::symbols::parsing::Section;

pub fn assert_catalogue(catalogue: &Catalogue) -> CatalogueAssertion<'_> {
    CatalogueAssertion { catalogue }
}

pub struct CatalogueAssertion<'a> {
    catalogue: &'a Catalogue,
}

impl<'a> CatalogueAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.catalogue.name(),
            expected,
            "catalogue name mismatch"
        );
        self
    }

    pub fn identifiers(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.catalogue.identifiers(),
            expected,
            "catalogue identifiers mismatch"
        );
        self
    }

    pub fn identifier_count(self, expected: usize) -> Self {
        assert_eq!(
            self.catalogue.len(),
            expected,
            "expected {} identifiers, found {}: {:?}",
            expected,
            self.catalogue.len(),
            self.catalogue.identifiers()
        );
        self
    }

    pub fn section_count(self, expected: usize) -> Self {
        let names: Vec<&str> = self.catalogue.section_names().collect();
        assert_eq!(
            self.catalogue.sections().len(),
            expected,
            "expected {} sections, found {:?}",
            expected,
            names
        );
        self
    }

    pub fn no_sections(self) -> Self {
        self.section_count(0)
    }

    /// Run assertions against the section at `index`.
    pub fn section<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(SectionAssertion<'_>),
    {
        let sections = self.catalogue.sections();
        let section = sections.get(index).unwrap_or_else(|| {
            panic!(
                "section index {} out of bounds ({} sections)",
                index,
                sections.len()
            )
        });
        check(SectionAssertion { section, index });
        self
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    index: usize,
}

impl<'a> SectionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.section.name(),
            expected,
            "section {} name mismatch",
            self.index
        );
        self
    }

    pub fn ungrouped(self) -> Self {
        assert!(
            self.section.is_ungrouped(),
            "section {} expected to be ungrouped, named {:?}",
            self.index,
            self.section.name()
        );
        self
    }

    pub fn identifiers(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.section.identifiers(),
            expected,
            "section {} ({:?}) identifiers mismatch",
            self.index,
            self.section.name()
        );
        self
    }

    pub fn identifier_count(self, expected: usize) -> Self {
        assert_eq!(
            self.section.len(),
            expected,
            "section {} ({:?}) identifier count mismatch",
            self.index,
            self.section.name()
        );
        self
    }

    pub fn contains(self, identifier: &str) -> Self {
        assert!(
            self.section.identifiers().iter().any(|i| i == identifier),
            "section {} ({:?}) does not contain {:?}",
            self.index,
            self.section.name(),
            identifier
        );
        self
    }
}
