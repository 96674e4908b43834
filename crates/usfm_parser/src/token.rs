//! Tokens emitted by the lexer.

use crate::catalogue::Marker;
use crate::position::Position;
use usfm_document::FootnoteLabel;

/// A lexed token: a kind plus the position its input starts at.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Where the token's input starts.
    pub position: Position,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// The kinds of token the lexer produces.
///
/// Marker tokens carry a reference into the static catalogue; the parser
/// dispatches on the marker's construction rule rather than its spelling.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// A run of plain text, whitespace preserved.
    Text(String),
    /// A standalone marker (paragraphs, whitespace, no-break).
    Flag(&'static Marker),
    /// A marker with a numeric suffix (indented paragraphs).
    ScaledFlag(&'static Marker, u32),
    /// A marker carrying the rest of its line; `number` is the numeric
    /// suffix, 1 when the marker takes none or it is absent.
    Line {
        /// The catalogue entry.
        marker: &'static Marker,
        /// The numeric suffix.
        number: u32,
        /// The line's payload, verbatim.
        text: String,
    },
    /// A marker with a one-word argument (chapter and verse numbers).
    Word {
        /// The catalogue entry.
        marker: &'static Marker,
        /// The argument word.
        word: String,
    },
    /// The opening half of a paired marker.
    Open(&'static Marker),
    /// The closing half of a paired marker.
    Close(&'static Marker),
    /// A marker whose payload runs until the next marker.
    Span {
        /// The catalogue entry.
        marker: &'static Marker,
        /// Everything up to the next marker, leading whitespace dropped.
        text: String,
    },
    /// A footnote label from the lexer's sub-mode.
    Label(FootnoteLabel),
    /// End of input; emitted exactly once per source text.
    Eof,
}

impl TokenKind {
    /// A short human-readable description, used in diagnostics.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Text(_) => "text".to_string(),
            Self::Flag(marker)
            | Self::ScaledFlag(marker, _)
            | Self::Open(marker)
            | Self::Line { marker, .. }
            | Self::Word { marker, .. }
            | Self::Span { marker, .. } => format!("\\{}", marker.spelling),
            Self::Close(marker) => format!("\\{}*", marker.spelling),
            Self::Label(_) => "footnote label".to_string(),
            Self::Eof => "end of input".to_string(),
        }
    }
}
