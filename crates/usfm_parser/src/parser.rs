//! The parser: token stream to typed document tree.
//!
//! A recursive-descent parser with one token of lookahead. Top-level
//! ("higher") elements are paragraphs, headings, chapter numbers, and
//! friends; "lower" elements are the text runs, inline spans, verse numbers,
//! and footnotes that live inside them. A run of lower elements left
//! trailing after a non-paragraph higher element is wrapped in an implicit
//! plain paragraph.
//!
//! The parser carries a little cross-token state: the pending relative
//! chapter label, the flags of the last explicit paragraph (for `\nb`), and
//! the document heading and table-of-contents metadata.

use usfm_document::{
    ChapterNumber, ChapterNumberKind, Document, Element, Footnote, FootnoteKind, FormattedText,
    FormattedTextKind, OtherText, OtherTextKind, Paragraph, Text, Whitespace,
    FirstLineIndent, LeftAligned, ParagraphLayout, TableOfContentsInfo,
};

use crate::catalogue::{Build, Marker};
use crate::error::{Error, Result};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Lexes and parses a complete source text in one call.
///
/// # Errors
///
/// Returns an error when the text fails to lex or does not match the
/// document grammar.
pub fn parse(source: &str) -> Result<Document> {
    let mut lexer = Lexer::new();
    lexer.input(source);
    Parser::new().parse(&mut lexer)
}

/// Flags remembered from the last explicit paragraph, consulted by `\nb`.
#[derive(Clone, Copy, Debug)]
struct ParagraphMemo {
    embedded: bool,
    introductory: bool,
    poetic: bool,
}

impl ParagraphMemo {
    fn of(paragraph: &Paragraph) -> Self {
        Self {
            embedded: paragraph.embedded,
            introductory: paragraph.introductory,
            poetic: paragraph.poetic,
        }
    }
}

/// One token of lookahead over a lexer.
struct Tokens<'a> {
    lexer: &'a mut Lexer,
    current: Token,
}

impl<'a> Tokens<'a> {
    fn new(lexer: &'a mut Lexer) -> Result<Self> {
        let position = lexer.position();
        let current = lexer
            .token()?
            .unwrap_or_else(|| Token::new(TokenKind::Eof, position));
        Ok(Self { lexer, current })
    }

    fn current(&self) -> &Token {
        &self.current
    }

    fn advance(&mut self) -> Result<()> {
        // past the end-of-input token the lexer yields nothing; stay on Eof
        if let Some(token) = self.lexer.token()? {
            self.current = token;
        }
        Ok(())
    }
}

/// A recursive-descent USFM parser.
///
/// A parser can be reused across documents; call [`reset`] between them to
/// clear the cross-token state (pending chapter label, previous-paragraph
/// flags, heading, table of contents).
///
/// [`reset`]: Parser::reset
#[derive(Debug, Default)]
pub struct Parser {
    pending_chapter_label: Option<String>,
    previous_paragraph: Option<ParagraphMemo>,
    heading: Option<String>,
    table_of_contents: TableOfContentsInfo,
}

impl Parser {
    /// Creates a parser with no cross-token state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all state carried across tokens and documents.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parses one document from the lexer's token stream.
    ///
    /// Accumulated heading and table-of-contents metadata moves into the
    /// returned document.
    ///
    /// # Errors
    ///
    /// Returns an error when lexing fails or the token stream does not
    /// match the document grammar.
    pub fn parse(&mut self, lexer: &mut Lexer) -> Result<Document> {
        let mut tokens = Tokens::new(lexer)?;
        let mut elements = Vec::new();
        while !matches!(tokens.current().kind, TokenKind::Eof) {
            self.higher_element(&mut tokens, &mut elements)?;
        }
        let heading = self.heading.take();
        let table_of_contents = std::mem::take(&mut self.table_of_contents);
        let table_of_contents = if table_of_contents.is_empty() {
            None
        } else {
            Some(table_of_contents)
        };
        Ok(Document::new(elements, heading, table_of_contents))
    }

    fn higher_element(&mut self, tokens: &mut Tokens<'_>, out: &mut Vec<Element>) -> Result<()> {
        let token = tokens.current().clone();
        match &token.kind {
            TokenKind::Flag(marker) => match &marker.build {
                Build::Paragraph(build) => {
                    tokens.advance()?;
                    let children = self.lower_elements(tokens)?;
                    let paragraph = build.construct(children);
                    self.previous_paragraph = Some(ParagraphMemo::of(&paragraph));
                    out.push(Element::Paragraph(paragraph));
                    Ok(())
                }
                Build::NoBreak => {
                    tokens.advance()?;
                    let children = self.lower_elements(tokens)?;
                    let paragraph = self.no_break_paragraph(children);
                    self.previous_paragraph = Some(ParagraphMemo::of(&paragraph));
                    out.push(Element::Paragraph(paragraph));
                    Ok(())
                }
                Build::Whitespace(kind) => {
                    tokens.advance()?;
                    let trailing = self.lower_elements(tokens)?;
                    out.push(Element::Whitespace(Whitespace::new(*kind)));
                    push_implicit_paragraph(out, trailing);
                    Ok(())
                }
                _ => Err(unexpected(&token)),
            },
            TokenKind::ScaledFlag(marker, indent) => match &marker.build {
                Build::IndentedParagraph(build) => {
                    tokens.advance()?;
                    let children = self.lower_elements(tokens)?;
                    let paragraph = build.construct(children, *indent);
                    self.previous_paragraph = Some(ParagraphMemo::of(&paragraph));
                    out.push(Element::Paragraph(paragraph));
                    Ok(())
                }
                _ => Err(unexpected(&token)),
            },
            TokenKind::Line {
                marker,
                number,
                text,
            } => match &marker.build {
                Build::Heading(build) => {
                    tokens.advance()?;
                    let heading = build.construct(vec![Text::element(text.clone())], *number);
                    let trailing = self.lower_elements(tokens)?;
                    out.push(Element::Heading(heading));
                    push_implicit_paragraph(out, trailing);
                    Ok(())
                }
                Build::OtherLine(kind) => {
                    tokens.advance()?;
                    let element = OtherText::new(*kind, vec![Text::element(text.clone())]);
                    let trailing = self.lower_elements(tokens)?;
                    out.push(Element::OtherText(element));
                    push_implicit_paragraph(out, trailing);
                    Ok(())
                }
                Build::DocumentHeading => {
                    self.heading = Some(text.clone());
                    tokens.advance()
                }
                Build::TableOfContents => {
                    match *number {
                        1 => self.table_of_contents.long_description = Some(text.clone()),
                        2 => self.table_of_contents.short_description = Some(text.clone()),
                        3 => self.table_of_contents.abbreviation = Some(text.clone()),
                        _ => {} // out-of-range weights are silently dropped
                    }
                    tokens.advance()
                }
                Build::ChapterLabel => {
                    tokens.advance()?;
                    self.labelled_chapter(tokens, out, text.clone())
                }
                _ => Err(unexpected(&token)),
            },
            TokenKind::Word { marker, word } => match &marker.build {
                Build::Chapter => {
                    tokens.advance()?;
                    self.chapter(tokens, out, word.clone())
                }
                _ => Err(unexpected(&token)),
            },
            TokenKind::Open(marker) => match &marker.build {
                Build::AlternateChapter => self.higher_pair(tokens, out, *marker, |children| {
                    Element::ChapterNumber(ChapterNumber::new(
                        ChapterNumberKind::Alternate,
                        children,
                    ))
                }),
                Build::Selah => self.higher_pair(tokens, out, *marker, |children| {
                    Element::OtherText(OtherText::new(OtherTextKind::Selah, children))
                }),
                _ => Err(unexpected(&token)),
            },
            _ => Err(unexpected(&token)),
        }
    }

    /// A chapter whose number word has already been consumed. If a chapter
    /// label follows immediately, it replaces the chapter text outright;
    /// otherwise any pending relative label prefixes the number.
    fn chapter(&mut self, tokens: &mut Tokens<'_>, out: &mut Vec<Element>, word: String) -> Result<()> {
        let label = match &tokens.current().kind {
            TokenKind::Line { marker, text, .. } if matches!(marker.build, Build::ChapterLabel) => {
                Some(text.clone())
            }
            _ => None,
        };
        let text = match label {
            Some(label) => {
                tokens.advance()?;
                label
            }
            None => match &self.pending_chapter_label {
                Some(pending) => format!("{pending} {word}"),
                None => word,
            },
        };
        let trailing = self.lower_elements(tokens)?;
        out.push(Element::ChapterNumber(ChapterNumber::new(
            ChapterNumberKind::Standard,
            vec![Text::element(text)],
        )));
        push_implicit_paragraph(out, trailing);
        Ok(())
    }

    /// A chapter label followed by a chapter. Sets the pending relative
    /// label and applies it to this chapter as well.
    fn labelled_chapter(
        &mut self,
        tokens: &mut Tokens<'_>,
        out: &mut Vec<Element>,
        label: String,
    ) -> Result<()> {
        let word = match &tokens.current().kind {
            TokenKind::Word { marker, word } if matches!(marker.build, Build::Chapter) => {
                word.clone()
            }
            _ => return Err(unexpected(tokens.current())),
        };
        tokens.advance()?;
        let text = format!("{label} {word}");
        self.pending_chapter_label = Some(label);
        let trailing = self.lower_elements(tokens)?;
        out.push(Element::ChapterNumber(ChapterNumber::new(
            ChapterNumberKind::Standard,
            vec![Text::element(text)],
        )));
        push_implicit_paragraph(out, trailing);
        Ok(())
    }

    /// A top-level open/close pair: inner lower elements become the
    /// element's children, trailing ones an implicit paragraph.
    fn higher_pair(
        &mut self,
        tokens: &mut Tokens<'_>,
        out: &mut Vec<Element>,
        marker: &'static Marker,
        construct: impl FnOnce(Vec<Element>) -> Element,
    ) -> Result<()> {
        tokens.advance()?;
        let inner = self.lower_elements(tokens)?;
        expect_close(tokens, marker)?;
        let trailing = self.lower_elements(tokens)?;
        out.push(construct(inner));
        push_implicit_paragraph(out, trailing);
        Ok(())
    }

    fn lower_elements(&mut self, tokens: &mut Tokens<'_>) -> Result<Vec<Element>> {
        let mut elements = Vec::new();
        loop {
            let token = tokens.current().clone();
            match &token.kind {
                TokenKind::Text(text) => {
                    tokens.advance()?;
                    elements.push(Text::element(text.clone()));
                }
                TokenKind::Span { marker, text } => {
                    let Build::Inline(kind) = marker.build else {
                        return Err(unexpected(&token));
                    };
                    tokens.advance()?;
                    elements.push(Element::FormattedText(FormattedText::new(
                        kind,
                        vec![Text::element(text.clone())],
                    )));
                }
                TokenKind::Word { marker, word }
                    if matches!(marker.build, Build::Verse) =>
                {
                    tokens.advance()?;
                    elements.push(self.verse(tokens, word.clone())?);
                }
                TokenKind::Open(marker) => match marker.build {
                    Build::Inline(kind) => {
                        tokens.advance()?;
                        let children = self.lower_elements(tokens)?;
                        expect_close(tokens, *marker)?;
                        elements.push(Element::FormattedText(FormattedText::new(kind, children)));
                    }
                    Build::BoldAndItalics => {
                        tokens.advance()?;
                        let children = self.lower_elements(tokens)?;
                        expect_close(tokens, *marker)?;
                        elements.push(Element::FormattedText(FormattedText::new(
                            FormattedTextKind::Bold,
                            vec![Element::FormattedText(FormattedText::new(
                                FormattedTextKind::Italics,
                                children,
                            ))],
                        )));
                    }
                    Build::Note(kind) => {
                        tokens.advance()?;
                        elements.push(self.note(tokens, *marker, kind)?);
                    }
                    _ => break,
                },
                _ => break,
            }
        }
        Ok(elements)
    }

    /// A verse number, optionally overridden by a published-verse pair.
    fn verse(&mut self, tokens: &mut Tokens<'_>, word: String) -> Result<Element> {
        if let TokenKind::Open(marker) = &tokens.current().kind {
            if matches!(marker.build, Build::PublishedVerse) {
                let marker = *marker;
                tokens.advance()?;
                let children = self.lower_elements(tokens)?;
                expect_close(tokens, marker)?;
                return Ok(Element::FormattedText(FormattedText::new(
                    FormattedTextKind::VerseNo,
                    children,
                )));
            }
        }
        Ok(Element::FormattedText(FormattedText::new(
            FormattedTextKind::VerseNo,
            vec![Text::element(word)],
        )))
    }

    fn note(
        &mut self,
        tokens: &mut Tokens<'_>,
        open: &'static Marker,
        kind: FootnoteKind,
    ) -> Result<Element> {
        let label = match &tokens.current().kind {
            TokenKind::Label(label) => label.clone(),
            _ => {
                return Err(Error::structural(
                    "Expected a footnote label",
                    tokens.current().position,
                ))
            }
        };
        tokens.advance()?;
        let children = self.lower_elements(tokens)?;
        expect_close(tokens, open)?;
        Ok(Element::Footnote(Footnote::new(kind, label, children)))
    }

    /// The `\nb` paragraph: continues the previous paragraph's flags with a
    /// flush layout. Without a previous paragraph it degrades to a plain
    /// one.
    fn no_break_paragraph(&self, children: Vec<Element>) -> Paragraph {
        match self.previous_paragraph {
            Some(memo) => Paragraph::new(
                ParagraphLayout::LeftAligned(LeftAligned::new(FirstLineIndent::None, 0)),
                memo.embedded,
                memo.introductory,
                memo.poetic,
                true,
                children,
            ),
            None => Paragraph::plain(children),
        }
    }
}

fn expect_close(tokens: &mut Tokens<'_>, open: &'static Marker) -> Result<()> {
    match &tokens.current().kind {
        TokenKind::Close(close) if close.spelling == open.spelling => tokens.advance(),
        _ => Err(unexpected(tokens.current())),
    }
}

fn push_implicit_paragraph(out: &mut Vec<Element>, children: Vec<Element>) {
    if !children.is_empty() {
        out.push(Element::Paragraph(Paragraph::plain(children)));
    }
}

fn unexpected(token: &Token) -> Error {
    Error::structural(
        format!("Unexpected token: {}", token.kind.name()),
        token.position,
    )
}
