//! Lexing and parsing errors.

use crate::position::Position;

/// A convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while lexing or parsing USFM source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a lexical error at the given position.
    #[must_use]
    pub fn lexical(message: impl Into<String>, position: Position) -> Self {
        Self {
            kind: ErrorKind::Lexical {
                message: message.into(),
                position,
            },
        }
    }

    /// Creates a structural error at the given position.
    #[must_use]
    pub fn structural(message: impl Into<String>, position: Position) -> Self {
        Self {
            kind: ErrorKind::Structural {
                message: message.into(),
                position,
            },
        }
    }

    /// The position the error was raised at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self.kind {
            ErrorKind::Lexical { position, .. } | ErrorKind::Structural { position, .. } => {
                position
            }
        }
    }
}

/// The kinds of error the pipeline can raise.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// The lexer could not form a token from the input.
    #[error("{message} at {position}")]
    Lexical {
        /// Human-readable description of the problem.
        message: String,
        /// Where the offending input starts.
        position: Position,
    },
    /// The token stream does not match the document grammar.
    #[error("{message} at {position}")]
    Structural {
        /// Human-readable description of the problem.
        message: String,
        /// The position of the offending token.
        position: Position,
    },
}
