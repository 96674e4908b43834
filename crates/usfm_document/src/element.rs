//! Element tree node types.
//!
//! [`Element`] is a closed set of variants; the marker catalogue is fixed, so
//! no open-ended subclassing is needed and every traversal can match
//! exhaustively. Container children are ordered and fixed at construction.

use crate::footnote::FootnoteLabel;
use crate::layout::ParagraphLayout;

/// A node in the parsed document tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// A raw text run (leaf).
    Text(Text),
    /// An inline formatted span.
    FormattedText(FormattedText),
    /// A section or title heading.
    Heading(Heading),
    /// Text that is neither heading, paragraph, nor formatting.
    OtherText(OtherText),
    /// A block of body text.
    Paragraph(Paragraph),
    /// A reference to another passage.
    Reference(Reference),
    /// A chapter number.
    ChapterNumber(ChapterNumber),
    /// A footnote, endnote, or cross-reference.
    Footnote(Footnote),
    /// Explicit vertical whitespace (leaf).
    Whitespace(Whitespace),
}

impl Element {
    /// Returns this element's children, if it is a container.
    #[must_use]
    pub fn children(&self) -> Option<&[Element]> {
        match self {
            Self::FormattedText(e) => Some(&e.children),
            Self::Heading(e) => Some(&e.children),
            Self::OtherText(e) => Some(&e.children),
            Self::Paragraph(e) => Some(&e.children),
            Self::Reference(e) => Some(&e.children),
            Self::ChapterNumber(e) => Some(&e.children),
            Self::Footnote(e) => Some(&e.children),
            Self::Text(_) | Self::Whitespace(_) => None,
        }
    }

    /// Returns the text content, if this is a text leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(&text.content),
            _ => None,
        }
    }

    /// Returns the paragraph payload, if this is a paragraph.
    #[must_use]
    pub const fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Self::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    /// Returns true if this is a paragraph.
    #[must_use]
    pub const fn is_paragraph(&self) -> bool {
        matches!(self, Self::Paragraph(_))
    }
}

/// A raw text run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    /// The literal text, whitespace preserved.
    pub content: String,
}

impl Text {
    /// Creates a text leaf.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Wraps the text in an [`Element`].
    #[must_use]
    pub fn element(content: impl Into<String>) -> Element {
        Element::Text(Self::new(content))
    }
}

/// An inline span of formatted text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattedText {
    /// The formatting applied to the children.
    pub kind: FormattedTextKind,
    /// Contained elements, in source order.
    pub children: Vec<Element>,
}

impl FormattedText {
    /// Creates a formatted span.
    #[must_use]
    pub const fn new(kind: FormattedTextKind, children: Vec<Element>) -> Self {
        Self { kind, children }
    }
}

/// The closed set of inline formatting kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormattedTextKind {
    // Text formatting
    /// Bold text.
    Bold,
    /// Emphasized text.
    Emphasis,
    /// Italic text.
    Italics,
    /// Normal text inside an otherwise-styled context.
    Normal,
    /// Small-caps / lower-case rendering.
    LowerCase,

    // Special text
    /// Words the translators supplied.
    TranslatorAddition,
    /// The title of another book.
    BookTitle,
    /// Deuterocanonical material.
    Deuterocanonical,
    /// A keyword or glossary term.
    Keyword,
    /// Liturgical instruction.
    Liturgical,
    /// The name of God rendered specially.
    NameOfGod,
    /// An ordinal suffix ("1st" = 1 + ordinal "st").
    Ordinal,
    /// A proper name.
    ProperName,
    /// Quoted material.
    Quotation,
    /// A signature line.
    Signature,
    /// Text in a secondary language.
    SecondaryLanguage,
    /// Transliterated text.
    Transliterated,
    /// Words spoken by Jesus.
    WordsOfJesus,

    // Numbers
    /// A verse number.
    VerseNo,
    /// An alternate verse number.
    AlternateVerseNo,

    // Footnote interiors
    /// Alternate rendering of quoted footnote text.
    FootnoteAlternateQuotation,
    /// A keyword inside a footnote.
    FootnoteKeyword,
    /// The footnote's own label text.
    FootnoteLabelText,
    /// New Testament cross-reference material.
    FootnoteNewTestament,
    /// Old Testament cross-reference material.
    FootnoteOldTestament,
    /// The origin reference of a footnote.
    FootnoteOrigin,
    /// Quoted scripture inside a footnote.
    FootnoteQuotation,
    /// A scripture reference inside a footnote.
    FootnoteReference,
    /// The in-text mark pointing at a footnote.
    FootnoteReferenceMark,
    /// The target of a footnote link.
    FootnoteTarget,
    /// A verse number inside a footnote.
    FootnoteVerse,

    // Poetry
    /// An acrostic letter heading within poetry.
    PoeticAcrostic,

    /// No visual effect; groups children without styling them.
    NoEffect,
}

/// A section or title heading.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// What sort of heading this is.
    pub kind: HeadingKind,
    /// Heading weight; 1 is the most prominent.
    pub weight: u32,
    /// True for headings inside introductory material.
    pub introductory: bool,
    /// Contained elements, normally a single text leaf.
    pub children: Vec<Element>,
}

impl Heading {
    /// Creates a heading.
    #[must_use]
    pub const fn new(
        kind: HeadingKind,
        weight: u32,
        introductory: bool,
        children: Vec<Element>,
    ) -> Self {
        Self {
            kind,
            weight,
            introductory,
            children,
        }
    }
}

/// The closed set of heading kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadingKind {
    /// The major title of a book.
    MajorTitle,
    /// A major title at the end of introductory material.
    MajorTitleEnd,
    /// A major section heading.
    MajorSection,
    /// An ordinary section heading.
    Section,
    /// An outline title in introductory material.
    OutlineTitle,
}

/// Text that is neither heading, paragraph, nor inline formatting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OtherText {
    /// What sort of text this is.
    pub kind: OtherTextKind,
    /// Contained elements.
    pub children: Vec<Element>,
}

impl OtherText {
    /// Creates an other-text element.
    #[must_use]
    pub const fn new(kind: OtherTextKind, children: Vec<Element>) -> Self {
        Self { kind, children }
    }
}

/// The closed set of other-text kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OtherTextKind {
    /// A selah interjection in poetry.
    Selah,
    /// An acrostic heading.
    AcrosticHeading,
    /// Explanatory or descriptive material.
    Explanatory,
    /// Identifies the speaker of following text.
    SpeakerId,
    /// A descriptive title.
    DescriptiveTitle,
}

/// A block of body text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paragraph {
    /// Horizontal layout of the paragraph.
    pub layout: ParagraphLayout,
    /// True if the paragraph is embedded inside surrounding flow.
    pub embedded: bool,
    /// True for paragraphs in introductory material.
    pub introductory: bool,
    /// True for poetic lines.
    pub poetic: bool,
    /// True if this paragraph continues the previous one without a break.
    pub continuation: bool,
    /// Contained elements, in source order.
    pub children: Vec<Element>,
}

impl Paragraph {
    /// Creates a paragraph with explicit layout and flags.
    #[must_use]
    pub const fn new(
        layout: ParagraphLayout,
        embedded: bool,
        introductory: bool,
        poetic: bool,
        continuation: bool,
        children: Vec<Element>,
    ) -> Self {
        Self {
            layout,
            embedded,
            introductory,
            poetic,
            continuation,
            children,
        }
    }

    /// Creates a plain paragraph: default layout, all flags false.
    #[must_use]
    pub fn plain(children: Vec<Element>) -> Self {
        Self::new(ParagraphLayout::default(), false, false, false, false, children)
    }
}

/// A reference to another passage (distinct from cross-reference footnotes).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    /// What sort of reference this is.
    pub kind: ReferenceKind,
    /// Contained elements.
    pub children: Vec<Element>,
}

impl Reference {
    /// Creates a reference.
    #[must_use]
    pub const fn new(kind: ReferenceKind, children: Vec<Element>) -> Self {
        Self { kind, children }
    }
}

/// The closed set of reference kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceKind {
    /// The range of chapters/verses a section covers.
    SectionRange,
    /// A parallel passage reference.
    Parallel,
    /// A reference inline with body text.
    Inline,
}

/// A chapter number.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChapterNumber {
    /// Standard or alternate numbering.
    pub kind: ChapterNumberKind,
    /// Contained elements, normally a single text leaf.
    pub children: Vec<Element>,
}

impl ChapterNumber {
    /// Creates a chapter number.
    #[must_use]
    pub const fn new(kind: ChapterNumberKind, children: Vec<Element>) -> Self {
        Self { kind, children }
    }
}

/// The closed set of chapter-number kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChapterNumberKind {
    /// The canonical chapter number.
    Standard,
    /// An alternate chapter number.
    Alternate,
}

/// A footnote, endnote, or cross-reference.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footnote {
    /// Whether this is a footnote, endnote, or cross-reference.
    pub kind: FootnoteKind,
    /// How the note is labelled; always present.
    pub label: FootnoteLabel,
    /// The note's content.
    pub children: Vec<Element>,
}

impl Footnote {
    /// Creates a footnote.
    #[must_use]
    pub const fn new(kind: FootnoteKind, label: FootnoteLabel, children: Vec<Element>) -> Self {
        Self {
            kind,
            label,
            children,
        }
    }
}

/// The closed set of footnote kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FootnoteKind {
    /// A footnote rendered at the bottom of the page.
    Footnote,
    /// An endnote rendered at the end of the book.
    Endnote,
    /// A cross-reference to related passages.
    CrossReference,
}

/// Explicit vertical whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Whitespace {
    /// What sort of whitespace to render.
    pub kind: WhitespaceKind,
}

impl Whitespace {
    /// Creates a whitespace element.
    #[must_use]
    pub const fn new(kind: WhitespaceKind) -> Self {
        Self { kind }
    }
}

/// The closed set of whitespace kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WhitespaceKind {
    /// A blank line.
    NewLine,
    /// A page break.
    PageBreak,
}
