//! Lexer and parser for USFM markup.
//!
//! This crate provides:
//! - `Lexer` - single-pass tokenization of USFM source
//! - `Parser` - recursive-descent parsing into a `usfm_document` tree
//! - `catalogue` - the static table of supported markers
//! - `parse` - one-call convenience over both

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalogue;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod token;


pub use catalogue::{Build, LexRule, Marker, MARKERS};
pub use error::{Error, ErrorKind, Result};
pub use lexer::{ESCAPE_PREFIX, Lexer};
pub use parser::{Parser, parse};
pub use position::{Position, PositionTracker};
pub use token::{Token, TokenKind};
