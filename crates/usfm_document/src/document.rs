//! The parsed document and its metadata.

use crate::element::Element;

/// A fully parsed USFM document.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Top-level ("higher") elements, in source order.
    pub elements: Vec<Element>,
    /// The document heading (`\h`), if one was given.
    pub heading: Option<String>,
    /// Table-of-contents metadata, if any `\toc` marker appeared.
    pub table_of_contents: Option<TableOfContentsInfo>,
}

impl Document {
    /// Creates a document.
    #[must_use]
    pub const fn new(
        elements: Vec<Element>,
        heading: Option<String>,
        table_of_contents: Option<TableOfContentsInfo>,
    ) -> Self {
        Self {
            elements,
            heading,
            table_of_contents,
        }
    }
}

/// Table-of-contents descriptions for a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableOfContentsInfo {
    /// The long description (`\toc1`).
    pub long_description: Option<String>,
    /// The short description (`\toc2`).
    pub short_description: Option<String>,
    /// The book abbreviation (`\toc3`).
    pub abbreviation: Option<String>,
}

impl TableOfContentsInfo {
    /// Returns true if no field has been set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.long_description.is_none()
            && self.short_description.is_none()
            && self.abbreviation.is_none()
    }
}
