//! USFM parsing - markup to typed document trees
//!
//! This crate re-exports both layers of the USFM pipeline for convenient
//! access. For detailed documentation, see the individual crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: usfm_parser   — Position tracking, marker catalogue, lexer, parser
//! Layer 0: usfm_document — Element tree, paragraph layout, visitor contract
//! ```

pub use usfm_document as document;
pub use usfm_parser as parser;

pub use usfm_parser::parse;
