//! The lexer: raw USFM text to a stream of tokens.
//!
//! Lexing is a single forward pass with no backtracking. Each marker's
//! mnemonic is scanned maximal-munch over ASCII letters and looked up in the
//! catalogue; the entry's [`LexRule`] then decides how much following input
//! belongs to the token. A small sub-mode handles the label that must follow
//! a footnote-class opening marker.

use crate::catalogue::{self, LexRule, Marker};
use crate::error::{Error, Result};
use crate::position::{Position, PositionTracker};
use crate::token::{Token, TokenKind};
use usfm_document::FootnoteLabel;

/// The marker escape prefix in raw USFM text.
pub const ESCAPE_PREFIX: char = '\\';

/// Private-use stand-in for the escape prefix. [`Lexer::input`] substitutes
/// it for every literal prefix so scanning never confuses marker starts with
/// prefix characters inside payloads; it cannot occur in well-formed user
/// text.
const PREFIX_SENTINEL: char = '\u{E000}';

/// The character after a mnemonic or numeric suffix must not extend the word.
fn is_word(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Normal,
    NoteLabel,
}

/// A single-pass lexer over USFM source text.
///
/// Feed it text with [`input`], then drain tokens with [`token`] until it
/// returns `Ok(None)`. The end-of-input token is emitted exactly once, at
/// the position just past the final newline.
///
/// [`input`]: Lexer::input
/// [`token`]: Lexer::token
#[derive(Debug)]
pub struct Lexer {
    text: String,
    offset: usize,
    tracker: PositionTracker,
    mode: Mode,
    reached_end: bool,
}

impl Lexer {
    /// Creates a lexer with no input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: String::new(),
            offset: 0,
            tracker: PositionTracker::new(),
            mode: Mode::Normal,
            reached_end: false,
        }
    }

    /// Resets the lexer and feeds it a new source text.
    ///
    /// Every literal escape prefix is substituted with a private sentinel,
    /// and the text is normalized to end with a newline.
    pub fn input(&mut self, source: &str) {
        let mut text = source.replace(ESCAPE_PREFIX, "\u{E000}");
        if !text.ends_with('\n') {
            text.push('\n');
        }
        self.text = text;
        self.offset = 0;
        self.tracker = PositionTracker::new();
        self.mode = Mode::Normal;
        self.reached_end = false;
    }

    /// The position of the next character to be consumed.
    #[must_use]
    pub fn position(&self) -> Position {
        self.tracker.position()
    }

    /// Returns the next token, or `None` once the end-of-input token has
    /// been emitted.
    ///
    /// # Errors
    ///
    /// Returns a lexical error when the input at the current position does
    /// not form a token.
    pub fn token(&mut self) -> Result<Option<Token>> {
        loop {
            if self.mode == Mode::NoteLabel {
                return self.label_token().map(Some);
            }
            if self.offset >= self.text.len() {
                if self.reached_end {
                    return Ok(None);
                }
                self.reached_end = true;
                return Ok(Some(Token::new(TokenKind::Eof, self.tracker.position())));
            }
            let position = self.tracker.position();
            if !self.rest().starts_with(PREFIX_SENTINEL) {
                let rest = self.rest();
                let len = rest.find(PREFIX_SENTINEL).unwrap_or(rest.len());
                let run = rest[..len].to_string();
                self.consume(len);
                if run.trim().is_empty() {
                    // whitespace-only runs are dropped, but still advance
                    continue;
                }
                return Ok(Some(Token::new(TokenKind::Text(run), position)));
            }
            if let Some(token) = self.marker_token(position)? {
                return Ok(Some(token));
            }
            // ignored line; keep scanning
        }
    }

    fn rest(&self) -> &str {
        &self.text[self.offset..]
    }

    fn consume(&mut self, len: usize) {
        let end = self.offset + len;
        self.tracker.update(&self.text[self.offset..end]);
        self.offset = end;
    }

    /// Lexes the marker starting at the current offset. Returns `Ok(None)`
    /// for ignored-line markers.
    fn marker_token(&mut self, position: Position) -> Result<Option<Token>> {
        let head = {
            let after_prefix = &self.rest()[PREFIX_SENTINEL.len_utf8()..];
            let mnemonic_len = after_prefix
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(after_prefix.len());
            PREFIX_SENTINEL.len_utf8() + mnemonic_len
        };
        let mnemonic = &self.rest()[PREFIX_SENTINEL.len_utf8()..head];
        let Some(marker) = catalogue::lookup(mnemonic) else {
            return Err(self.unrecognized(position));
        };
        match marker.rule {
            LexRule::Standalone => {
                self.boundary_check(head, position)?;
                self.consume(head);
                Ok(Some(Token::new(TokenKind::Flag(marker), position)))
            }
            LexRule::NumericSuffix => self.scaled_token(marker, head, position).map(Some),
            LexRule::SuffixedLine => self.line_token(marker, head, position, true).map(Some),
            LexRule::RestOfLine => self.line_token(marker, head, position, false).map(Some),
            LexRule::IgnoredLine => {
                self.line_token(marker, head, position, false)?;
                Ok(None)
            }
            LexRule::OneWord => self.word_token(marker, head, position).map(Some),
            LexRule::OpenClose => self.pair_token(marker, head, position, false).map(Some),
            LexRule::NoteOpenClose => self.pair_token(marker, head, position, true).map(Some),
            LexRule::UntilNextMarker => self.span_token(marker, head, position).map(Some),
        }
    }

    fn boundary_check(&self, head: usize, position: Position) -> Result<()> {
        match self.text[self.offset + head..].chars().next() {
            Some(next) if is_word(next) => Err(self.unrecognized(position)),
            _ => Ok(()),
        }
    }

    fn scaled_token(
        &mut self,
        marker: &'static Marker,
        head: usize,
        position: Position,
    ) -> Result<Token> {
        let (digits_len, number) = self.numeric_suffix(head, position)?;
        self.boundary_check(head + digits_len, position)?;
        self.consume(head + digits_len);
        Ok(Token::new(TokenKind::ScaledFlag(marker, number), position))
    }

    /// Scans the optional decimal suffix after the mnemonic. Returns its
    /// byte length and decoded value, defaulting to 1 when absent.
    fn numeric_suffix(&self, head: usize, position: Position) -> Result<(usize, u32)> {
        let tail = &self.text[self.offset + head..];
        let digits_len = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        let digits = &tail[..digits_len];
        if digits.is_empty() {
            return Ok((0, 1));
        }
        let number = digits.parse().map_err(|_| {
            Error::lexical(format!("Malformed numeric suffix: \"{digits}\""), position)
        })?;
        Ok((digits_len, number))
    }

    fn line_token(
        &mut self,
        marker: &'static Marker,
        head: usize,
        position: Position,
        suffixed: bool,
    ) -> Result<Token> {
        let (digits_len, number) = if suffixed {
            self.numeric_suffix(head, position)?
        } else {
            (0, 1)
        };
        let after = &self.text[self.offset + head + digits_len..];
        let (text, consumed) = match after.chars().next() {
            Some('\n') => (String::new(), head + digits_len + 1),
            Some(' ' | '\t' | '\r') => {
                let skipped = after
                    .find(|c: char| !matches!(c, ' ' | '\t' | '\r'))
                    .unwrap_or(after.len());
                let line = &after[skipped..];
                let line_len = line.find('\n').unwrap_or(line.len());
                let newline = usize::from(line_len < line.len());
                let text = line[..line_len].replace(PREFIX_SENTINEL, "\\");
                (text, head + digits_len + skipped + line_len + newline)
            }
            _ => return Err(self.unrecognized(position)),
        };
        self.consume(consumed);
        Ok(Token::new(
            TokenKind::Line {
                marker,
                number,
                text,
            },
            position,
        ))
    }

    fn word_token(
        &mut self,
        marker: &'static Marker,
        head: usize,
        position: Position,
    ) -> Result<Token> {
        let tail = &self.text[self.offset + head..];
        let skipped = tail
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(tail.len());
        if skipped == 0 {
            return Err(self.unrecognized(position));
        }
        let rest = &tail[skipped..];
        let word_len = rest
            .find(|c: char| c.is_whitespace() || c == PREFIX_SENTINEL)
            .unwrap_or(rest.len());
        if word_len == 0 {
            return Err(self.unrecognized(position));
        }
        let word = rest[..word_len].to_string();
        self.consume(head + skipped + word_len);
        Ok(Token::new(TokenKind::Word { marker, word }, position))
    }

    fn pair_token(
        &mut self,
        marker: &'static Marker,
        head: usize,
        position: Position,
        note: bool,
    ) -> Result<Token> {
        match self.text[self.offset + head..].chars().next() {
            Some('*') => {
                self.consume(head + 1);
                Ok(Token::new(TokenKind::Close(marker), position))
            }
            Some(next) if !is_word(next) => {
                // the opening half consumes one separator character
                self.consume(head + next.len_utf8());
                if note {
                    self.mode = Mode::NoteLabel;
                }
                Ok(Token::new(TokenKind::Open(marker), position))
            }
            _ => Err(self.unrecognized(position)),
        }
    }

    fn span_token(
        &mut self,
        marker: &'static Marker,
        head: usize,
        position: Position,
    ) -> Result<Token> {
        let tail = &self.text[self.offset + head..];
        if !tail.starts_with(|c: char| c.is_whitespace()) {
            return Err(self.unrecognized(position));
        }
        let skipped = tail
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(tail.len());
        let rest = &tail[skipped..];
        let len = rest.find(PREFIX_SENTINEL).unwrap_or(rest.len());
        let text = rest[..len].to_string();
        self.consume(head + skipped + len);
        Ok(Token::new(TokenKind::Span { marker, text }, position))
    }

    /// Lexes the label that must follow a footnote-class opening marker.
    fn label_token(&mut self) -> Result<Token> {
        let skipped = self
            .rest()
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(self.rest().len());
        self.consume(skipped);
        let position = self.tracker.position();
        let rest = self.rest();
        if rest.is_empty() || rest.starts_with(PREFIX_SENTINEL) {
            return Err(Error::lexical("Expected a footnote label", position));
        }
        let len = rest
            .find(|c: char| c.is_whitespace() || c == PREFIX_SENTINEL)
            .unwrap_or(rest.len());
        let label = match &rest[..len] {
            "+" => FootnoteLabel::Automatic,
            "-" => FootnoteLabel::NoLabel,
            text => FootnoteLabel::Custom(text.to_string()),
        };
        self.consume(len);
        self.mode = Mode::Normal;
        Ok(Token::new(TokenKind::Label(label), position))
    }

    fn unrecognized(&self, position: Position) -> Error {
        let rest = self.rest();
        let line = &rest[..rest.find('\n').unwrap_or(rest.len())];
        let preview: String = line.chars().take(80).collect();
        let preview = preview.replace(PREFIX_SENTINEL, "\\");
        Error::lexical(format!("Unrecognized token: \"{preview}\""), position)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}
