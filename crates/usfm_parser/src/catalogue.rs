//! The static marker catalogue.
//!
//! One table maps every supported marker spelling to the lexical rule that
//! consumes its input and the construction the parser performs for it. The
//! lexer and parser share this table; neither hard-codes a spelling outside
//! of it.

use phf::phf_map;
use usfm_document::{
    Element, FirstLineIndent, FootnoteKind, FormattedText, FormattedTextKind, Heading,
    HeadingKind, LeftAligned, OtherTextKind, Paragraph, ParagraphLayout, WhitespaceKind,
};

/// How the lexer consumes input after a marker's mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexRule {
    /// The mnemonic alone, at a word boundary.
    Standalone,
    /// An optional decimal suffix, defaulting to 1.
    NumericSuffix,
    /// An optional decimal suffix, then the remainder of the line.
    SuffixedLine,
    /// The remainder of the line.
    RestOfLine,
    /// The remainder of the line, lexed and then discarded.
    IgnoredLine,
    /// Exactly one whitespace-delimited word.
    OneWord,
    /// An opening (`\x `) or closing (`\x*`) half of a paired marker.
    OpenClose,
    /// Like [`OpenClose`], but the opening half switches the lexer into the
    /// footnote-label sub-mode.
    ///
    /// [`OpenClose`]: LexRule::OpenClose
    NoteOpenClose,
    /// All text up to the next marker.
    UntilNextMarker,
}

/// What the parser builds when it sees a marker's token.
///
/// Bespoke markers (chapter, verse, heading metadata and friends) get their
/// own variants; everything else is data-driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Build {
    /// A paragraph with fixed layout and flags.
    Paragraph(ParagraphBuild),
    /// A paragraph whose left margin indent comes from the numeric suffix.
    IndentedParagraph(IndentedParagraphBuild),
    /// A heading whose weight comes from the numeric suffix.
    Heading(HeadingBuild),
    /// An inline formatted span.
    Inline(FormattedTextKind),
    /// A bold span wrapping an italics span (`\bdit`).
    BoldAndItalics,
    /// An alternate chapter number (`\ca`).
    AlternateChapter,
    /// A selah interjection (`\qs`).
    Selah,
    /// A line-scoped other-text element.
    OtherLine(OtherTextKind),
    /// A footnote, endnote, or cross-reference.
    Note(FootnoteKind),
    /// Explicit vertical whitespace.
    Whitespace(WhitespaceKind),
    /// A chapter number (`\c`).
    Chapter,
    /// A verse number (`\v`).
    Verse,
    /// A published verse number overriding `\v` (`\vp`).
    PublishedVerse,
    /// The document heading (`\h`).
    DocumentHeading,
    /// A table-of-contents field (`\toc1`..`\toc3`).
    TableOfContents,
    /// A paragraph continuing the previous one (`\nb`).
    NoBreak,
    /// A chapter label (`\cl`).
    ChapterLabel,
    /// Lexed and discarded (`\id`, `\ide`, `\sts`, `\rem`).
    Ignored,
}

/// Layout and flags for a paragraph marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParagraphBuild {
    /// The paragraph's layout.
    pub layout: ParagraphLayout,
    /// True for embedded paragraphs.
    pub embedded: bool,
    /// True for introductory paragraphs.
    pub introductory: bool,
    /// True for poetic lines.
    pub poetic: bool,
    /// True when the children are wrapped in a quotation span.
    pub quoted: bool,
}

const DEFAULT_INDENT: ParagraphLayout =
    ParagraphLayout::LeftAligned(LeftAligned::new(FirstLineIndent::Default, 0));
const FLUSH: ParagraphLayout =
    ParagraphLayout::LeftAligned(LeftAligned::new(FirstLineIndent::None, 0));
const INDENTED: ParagraphLayout =
    ParagraphLayout::LeftAligned(LeftAligned::new(FirstLineIndent::Default, 1));
const FLUSH_INDENTED: ParagraphLayout =
    ParagraphLayout::LeftAligned(LeftAligned::new(FirstLineIndent::None, 1));

impl ParagraphBuild {
    const fn with_layout(layout: ParagraphLayout) -> Self {
        Self {
            layout,
            embedded: false,
            introductory: false,
            poetic: false,
            quoted: false,
        }
    }

    const fn plain() -> Self {
        Self::with_layout(DEFAULT_INDENT)
    }

    const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    const fn introductory(mut self) -> Self {
        self.introductory = true;
        self
    }

    const fn poetic(mut self) -> Self {
        self.poetic = true;
        self
    }

    const fn quoted(mut self) -> Self {
        self.quoted = true;
        self
    }

    /// Builds the paragraph for this marker.
    #[must_use]
    pub fn construct(&self, children: Vec<Element>) -> Paragraph {
        let children = if self.quoted {
            vec![Element::FormattedText(FormattedText::new(
                FormattedTextKind::Quotation,
                children,
            ))]
        } else {
            children
        };
        Paragraph::new(
            self.layout,
            self.embedded,
            self.introductory,
            self.poetic,
            false,
            children,
        )
    }
}

/// Flags for an indented paragraph marker; the margin comes from the suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndentedParagraphBuild {
    /// First-line indentation of the produced paragraphs.
    pub first_line_indent: FirstLineIndent,
    /// True for embedded paragraphs.
    pub embedded: bool,
    /// True for introductory paragraphs.
    pub introductory: bool,
    /// True for poetic lines.
    pub poetic: bool,
}

impl IndentedParagraphBuild {
    const fn new(
        first_line_indent: FirstLineIndent,
        embedded: bool,
        introductory: bool,
        poetic: bool,
    ) -> Self {
        Self {
            first_line_indent,
            embedded,
            introductory,
            poetic,
        }
    }

    /// Builds the paragraph for this marker at the given indent.
    #[must_use]
    pub fn construct(&self, children: Vec<Element>, indent: u32) -> Paragraph {
        Paragraph::new(
            ParagraphLayout::LeftAligned(LeftAligned::new(self.first_line_indent, indent)),
            self.embedded,
            self.introductory,
            self.poetic,
            false,
            children,
        )
    }
}

/// Kind and flags for a heading marker; the weight comes from the suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeadingBuild {
    /// The heading kind.
    pub kind: HeadingKind,
    /// True for headings in introductory material.
    pub introductory: bool,
}

impl HeadingBuild {
    const fn new(kind: HeadingKind, introductory: bool) -> Self {
        Self { kind, introductory }
    }

    /// Builds the heading for this marker at the given weight.
    #[must_use]
    pub const fn construct(&self, children: Vec<Element>, weight: u32) -> Heading {
        Heading::new(self.kind, weight, self.introductory, children)
    }
}

/// One catalogue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    /// The marker's spelling, without the escape prefix.
    pub spelling: &'static str,
    /// How the lexer consumes the marker's input.
    pub rule: LexRule,
    /// What the parser builds for it.
    pub build: Build,
}

impl Marker {
    const fn new(spelling: &'static str, rule: LexRule, build: Build) -> Self {
        Self {
            spelling,
            rule,
            build,
        }
    }
}

const fn paragraph(spelling: &'static str, build: ParagraphBuild) -> Marker {
    Marker::new(spelling, LexRule::Standalone, Build::Paragraph(build))
}

const fn indented(spelling: &'static str, build: IndentedParagraphBuild) -> Marker {
    Marker::new(
        spelling,
        LexRule::NumericSuffix,
        Build::IndentedParagraph(build),
    )
}

const fn heading(spelling: &'static str, kind: HeadingKind, introductory: bool) -> Marker {
    Marker::new(
        spelling,
        LexRule::SuffixedLine,
        Build::Heading(HeadingBuild::new(kind, introductory)),
    )
}

const fn inline(spelling: &'static str, kind: FormattedTextKind) -> Marker {
    Marker::new(spelling, LexRule::OpenClose, Build::Inline(kind))
}

const fn span(spelling: &'static str, kind: FormattedTextKind) -> Marker {
    Marker::new(spelling, LexRule::UntilNextMarker, Build::Inline(kind))
}

const fn note(spelling: &'static str, kind: FootnoteKind) -> Marker {
    Marker::new(spelling, LexRule::NoteOpenClose, Build::Note(kind))
}

const fn other_line(spelling: &'static str, kind: OtherTextKind) -> Marker {
    Marker::new(spelling, LexRule::RestOfLine, Build::OtherLine(kind))
}

const fn whitespace(spelling: &'static str, kind: WhitespaceKind) -> Marker {
    Marker::new(spelling, LexRule::Standalone, Build::Whitespace(kind))
}

const fn ignored(spelling: &'static str) -> Marker {
    Marker::new(spelling, LexRule::IgnoredLine, Build::Ignored)
}

/// Every supported marker, keyed by spelling.
pub static MARKERS: phf::Map<&'static str, Marker> = phf_map! {
    // Paragraphs
    "p" => paragraph("p", ParagraphBuild::plain()),
    "pc" => paragraph("pc", ParagraphBuild::with_layout(ParagraphLayout::Centered)),
    "m" => paragraph("m", ParagraphBuild::with_layout(FLUSH)),
    "pmo" => paragraph("pmo", ParagraphBuild::with_layout(FLUSH).embedded()),
    "pm" => paragraph("pm", ParagraphBuild::plain().embedded()),
    "pmc" => paragraph("pmc", ParagraphBuild::with_layout(FLUSH).embedded()),
    "pmr" => paragraph("pmr", ParagraphBuild::with_layout(ParagraphLayout::RightAligned).embedded()),
    "qr" => paragraph("qr", ParagraphBuild::with_layout(ParagraphLayout::RightAligned).poetic()),
    "qc" => paragraph("qc", ParagraphBuild::with_layout(ParagraphLayout::Centered).poetic()),
    "ip" => paragraph("ip", ParagraphBuild::plain().introductory()),
    "ipi" => paragraph("ipi", ParagraphBuild::with_layout(INDENTED).introductory()),
    "im" => paragraph("im", ParagraphBuild::with_layout(FLUSH).introductory()),
    "imi" => paragraph("imi", ParagraphBuild::with_layout(FLUSH_INDENTED).introductory()),
    "ipq" => paragraph("ipq", ParagraphBuild::plain().introductory().quoted()),
    "imq" => paragraph("imq", ParagraphBuild::plain().introductory().quoted()),
    "ipr" => paragraph("ipr", ParagraphBuild::with_layout(ParagraphLayout::RightAligned).introductory()),
    "nb" => Marker::new("nb", LexRule::Standalone, Build::NoBreak),

    // Indented paragraphs
    "pi" => indented("pi", IndentedParagraphBuild::new(FirstLineIndent::Default, false, false, false)),
    "li" => indented("li", IndentedParagraphBuild::new(FirstLineIndent::Outdent, true, false, false)),
    "q" => indented("q", IndentedParagraphBuild::new(FirstLineIndent::Default, false, false, true)),
    "qm" => indented("qm", IndentedParagraphBuild::new(FirstLineIndent::Default, true, false, true)),
    "ili" => indented("ili", IndentedParagraphBuild::new(FirstLineIndent::Outdent, false, true, false)),
    "iq" => indented("iq", IndentedParagraphBuild::new(FirstLineIndent::Default, false, true, true)),

    // Headings
    "mt" => heading("mt", HeadingKind::MajorTitle, false),
    "mte" => heading("mte", HeadingKind::MajorTitleEnd, false),
    "ms" => heading("ms", HeadingKind::MajorSection, false),
    "s" => heading("s", HeadingKind::Section, false),
    "imt" => heading("imt", HeadingKind::MajorTitle, true),
    "imte" => heading("imte", HeadingKind::MajorTitleEnd, true),
    "is" => heading("is", HeadingKind::Section, true),
    "iot" => heading("iot", HeadingKind::OutlineTitle, true),
    "h" => Marker::new("h", LexRule::SuffixedLine, Build::DocumentHeading),
    "toc" => Marker::new("toc", LexRule::SuffixedLine, Build::TableOfContents),

    // One-word arguments
    "c" => Marker::new("c", LexRule::OneWord, Build::Chapter),
    "v" => Marker::new("v", LexRule::OneWord, Build::Verse),

    // Inline open/close pairs
    "va" => inline("va", FormattedTextKind::AlternateVerseNo),
    "bd" => inline("bd", FormattedTextKind::Bold),
    "bdit" => Marker::new("bdit", LexRule::OpenClose, Build::BoldAndItalics),
    "bk" => inline("bk", FormattedTextKind::BookTitle),
    "dc" => inline("dc", FormattedTextKind::Deuterocanonical),
    "xdc" => inline("xdc", FormattedTextKind::Deuterocanonical),
    "fdc" => inline("fdc", FormattedTextKind::Deuterocanonical),
    "xnt" => inline("xnt", FormattedTextKind::FootnoteNewTestament),
    "xot" => inline("xot", FormattedTextKind::FootnoteOldTestament),
    "em" => inline("em", FormattedTextKind::Emphasis),
    "fm" => inline("fm", FormattedTextKind::FootnoteReferenceMark),
    "it" => inline("it", FormattedTextKind::Italics),
    "k" => inline("k", FormattedTextKind::Keyword),
    "nd" => inline("nd", FormattedTextKind::NameOfGod),
    "no" => inline("no", FormattedTextKind::Normal),
    "ord" => inline("ord", FormattedTextKind::Ordinal),
    "pn" => inline("pn", FormattedTextKind::ProperName),
    "qt" => inline("qt", FormattedTextKind::Quotation),
    "sls" => inline("sls", FormattedTextKind::SecondaryLanguage),
    "sig" => inline("sig", FormattedTextKind::Signature),
    "sc" => inline("sc", FormattedTextKind::LowerCase),
    "add" => inline("add", FormattedTextKind::TranslatorAddition),
    "wj" => inline("wj", FormattedTextKind::WordsOfJesus),
    "vp" => Marker::new("vp", LexRule::OpenClose, Build::PublishedVerse),

    // Higher open/close pairs
    "ca" => Marker::new("ca", LexRule::OpenClose, Build::AlternateChapter),
    "qs" => Marker::new("qs", LexRule::OpenClose, Build::Selah),

    // Rest-of-line elements
    "qa" => other_line("qa", OtherTextKind::AcrosticHeading),
    "d" => other_line("d", OtherTextKind::Explanatory),
    "iex" => other_line("iex", OtherTextKind::Explanatory),
    "sp" => other_line("sp", OtherTextKind::SpeakerId),
    "cl" => Marker::new("cl", LexRule::RestOfLine, Build::ChapterLabel),

    // Ignored rest-of-line markers
    "id" => ignored("id"),
    "ide" => ignored("ide"),
    "sts" => ignored("sts"),
    "rem" => ignored("rem"),

    // Until-next-marker spans (footnote and cross-reference interiors)
    "fqa" => span("fqa", FormattedTextKind::FootnoteAlternateQuotation),
    "fk" => span("fk", FormattedTextKind::FootnoteKeyword),
    "xk" => span("xk", FormattedTextKind::FootnoteKeyword),
    "ft" => span("ft", FormattedTextKind::NoEffect),
    "fq" => span("fq", FormattedTextKind::FootnoteQuotation),
    "xq" => span("xq", FormattedTextKind::FootnoteQuotation),
    "fr" => span("fr", FormattedTextKind::FootnoteReference),
    "fv" => span("fv", FormattedTextKind::FootnoteVerse),
    "xo" => span("xo", FormattedTextKind::FootnoteOrigin),

    // Footnote-class pairs
    "f" => note("f", FootnoteKind::Footnote),
    "fe" => note("fe", FootnoteKind::Endnote),
    "x" => note("x", FootnoteKind::CrossReference),

    // Whitespace
    "b" => whitespace("b", WhitespaceKind::NewLine),
    "ib" => whitespace("ib", WhitespaceKind::NewLine),
    "pb" => whitespace("pb", WhitespaceKind::PageBreak),
};

/// Looks up a marker by its spelling.
#[must_use]
pub fn lookup(spelling: &str) -> Option<&'static Marker> {
    MARKERS.get(spelling)
}
