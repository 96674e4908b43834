//! Typed element tree for parsed USFM documents.
//!
//! This crate provides:
//! - [`Element`] - The closed set of tree node variants
//! - [`Document`] - A parsed document: top-level elements plus metadata
//! - [`ParagraphLayout`] / [`FootnoteLabel`] - Layout and label variants
//! - [`ElementVisitor`] - The traversal contract consumers implement
//!
//! All tree nodes are immutable value objects: the parser constructs them
//! once and nothing mutates them afterward. Consumers fold the tree through
//! [`walk_document`] / [`walk_element`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod element;
pub mod footnote;
pub mod layout;
pub mod visitor;

pub use document::{Document, TableOfContentsInfo};
pub use element::{
    ChapterNumber, ChapterNumberKind, Element, Footnote, FootnoteKind, FormattedText,
    FormattedTextKind, Heading, HeadingKind, OtherText, OtherTextKind, Paragraph, Reference,
    ReferenceKind, Text, Whitespace, WhitespaceKind,
};
pub use footnote::FootnoteLabel;
pub use layout::{FirstLineIndent, LeftAligned, ParagraphLayout};
pub use visitor::{ElementVisitor, walk_document, walk_element};
