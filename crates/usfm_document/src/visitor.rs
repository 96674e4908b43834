//! Element tree traversal.
//!
//! [`ElementVisitor`] is the whole contract tree consumers implement: enter
//! and exit hooks per container kind, plus leaf visits for text and
//! whitespace. Default implementations do nothing, so a consumer overrides
//! only the hooks it cares about.
//!
//! # Example
//!
//! ```
//! use usfm_document::{ElementVisitor, Text, walk_element};
//!
//! struct WordCounter(usize);
//!
//! impl ElementVisitor for WordCounter {
//!     fn visit_text(&mut self, text: &Text) {
//!         self.0 += text.content.split_whitespace().count();
//!     }
//! }
//!
//! let element = Text::element("In the beginning");
//! let mut counter = WordCounter(0);
//! walk_element(&mut counter, &element);
//! assert_eq!(counter.0, 3);
//! ```

use crate::document::Document;
use crate::element::{
    ChapterNumber, Element, Footnote, FormattedText, Heading, OtherText, Paragraph, Reference,
    Text, Whitespace,
};

/// Trait for read-only traversal of the element tree.
///
/// For each container, [`walk_element`] calls the `enter_*` hook, visits the
/// children left to right, then calls the `exit_*` hook. Leaves get a single
/// `visit_*` call. Visitors holding mutable accumulation state must not be
/// shared across concurrent traversals.
#[allow(unused_variables)]
pub trait ElementVisitor {
    /// Called before visiting a paragraph's children.
    fn enter_paragraph(&mut self, paragraph: &Paragraph) {}

    /// Called after visiting a paragraph's children.
    fn exit_paragraph(&mut self, paragraph: &Paragraph) {}

    /// Called before visiting a formatted span's children.
    fn enter_formatted_text(&mut self, formatted: &FormattedText) {}

    /// Called after visiting a formatted span's children.
    fn exit_formatted_text(&mut self, formatted: &FormattedText) {}

    /// Called before visiting a heading's children.
    fn enter_heading(&mut self, heading: &Heading) {}

    /// Called after visiting a heading's children.
    fn exit_heading(&mut self, heading: &Heading) {}

    /// Called before visiting an other-text element's children.
    fn enter_other_text(&mut self, other: &OtherText) {}

    /// Called after visiting an other-text element's children.
    fn exit_other_text(&mut self, other: &OtherText) {}

    /// Called before visiting a reference's children.
    fn enter_reference(&mut self, reference: &Reference) {}

    /// Called after visiting a reference's children.
    fn exit_reference(&mut self, reference: &Reference) {}

    /// Called before visiting a chapter number's children.
    fn enter_chapter_number(&mut self, chapter: &ChapterNumber) {}

    /// Called after visiting a chapter number's children.
    fn exit_chapter_number(&mut self, chapter: &ChapterNumber) {}

    /// Called before visiting a footnote's children.
    fn enter_footnote(&mut self, footnote: &Footnote) {}

    /// Called after visiting a footnote's children.
    fn exit_footnote(&mut self, footnote: &Footnote) {}

    /// Visit a text leaf.
    fn visit_text(&mut self, text: &Text) {}

    /// Visit a whitespace leaf.
    fn visit_whitespace(&mut self, whitespace: &Whitespace) {}
}

/// Walks one element, calling the appropriate visitor hooks.
pub fn walk_element<V: ElementVisitor>(visitor: &mut V, element: &Element) {
    match element {
        Element::Text(text) => visitor.visit_text(text),
        Element::Whitespace(whitespace) => visitor.visit_whitespace(whitespace),

        Element::FormattedText(formatted) => {
            visitor.enter_formatted_text(formatted);
            for child in &formatted.children {
                walk_element(visitor, child);
            }
            visitor.exit_formatted_text(formatted);
        }
        Element::Heading(heading) => {
            visitor.enter_heading(heading);
            for child in &heading.children {
                walk_element(visitor, child);
            }
            visitor.exit_heading(heading);
        }
        Element::OtherText(other) => {
            visitor.enter_other_text(other);
            for child in &other.children {
                walk_element(visitor, child);
            }
            visitor.exit_other_text(other);
        }
        Element::Paragraph(paragraph) => {
            visitor.enter_paragraph(paragraph);
            for child in &paragraph.children {
                walk_element(visitor, child);
            }
            visitor.exit_paragraph(paragraph);
        }
        Element::Reference(reference) => {
            visitor.enter_reference(reference);
            for child in &reference.children {
                walk_element(visitor, child);
            }
            visitor.exit_reference(reference);
        }
        Element::ChapterNumber(chapter) => {
            visitor.enter_chapter_number(chapter);
            for child in &chapter.children {
                walk_element(visitor, child);
            }
            visitor.exit_chapter_number(chapter);
        }
        Element::Footnote(footnote) => {
            visitor.enter_footnote(footnote);
            for child in &footnote.children {
                walk_element(visitor, child);
            }
            visitor.exit_footnote(footnote);
        }
    }
}

/// Walks every top-level element of a document, in order.
pub fn walk_document<V: ElementVisitor>(visitor: &mut V, document: &Document) {
    for element in &document.elements {
        walk_element(visitor, element);
    }
}
