//! Source positions for tokens and diagnostics.

use std::fmt;

/// A 1-indexed line and column in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1. Columns count characters, not bytes.
    pub column: u32,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the first character of a source text.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, col: {}", self.line, self.column)
    }
}

/// Tracks the current position while text is consumed.
///
/// The lexer feeds every consumed slice through [`update`], including
/// whitespace runs and discarded input, so positions stay accurate for
/// diagnostics.
///
/// [`update`]: PositionTracker::update
#[derive(Clone, Debug)]
pub struct PositionTracker {
    line: u32,
    column: u32,
}

impl PositionTracker {
    /// Creates a tracker at the start of the source.
    #[must_use]
    pub const fn new() -> Self {
        Self { line: 1, column: 1 }
    }

    /// The position of the next character to be consumed.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Advances the tracker over a consumed slice of source text.
    pub fn update(&mut self, consumed: &str) {
        for character in consumed.chars() {
            if character == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}
