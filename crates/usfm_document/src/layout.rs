//! Paragraph layout variants.
//!
//! A paragraph's layout decides horizontal placement: left-aligned text with
//! configurable indentation, centered, or right-aligned.

/// How a paragraph is laid out on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParagraphLayout {
    /// Left-aligned text with first-line and left-margin indentation.
    LeftAligned(LeftAligned),
    /// Centered text.
    Centered,
    /// Right-aligned text.
    RightAligned,
}

impl ParagraphLayout {
    /// Left-aligned layout with the default first-line indent and no margin.
    #[must_use]
    pub const fn default_left_aligned() -> Self {
        Self::LeftAligned(LeftAligned::new(FirstLineIndent::Default, 0))
    }
}

impl Default for ParagraphLayout {
    fn default() -> Self {
        Self::default_left_aligned()
    }
}

/// Indentation settings for a left-aligned paragraph.
///
/// `left_margin_indent` is bounded to single digits by the marker grammar
/// (`\pi3` and friends) but the type does not enforce an upper bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeftAligned {
    /// How the first line of the paragraph is indented.
    pub first_line_indent: FirstLineIndent,
    /// Indentation of the whole paragraph from the left margin.
    pub left_margin_indent: u32,
}

impl LeftAligned {
    /// Creates a left-aligned layout.
    #[must_use]
    pub const fn new(first_line_indent: FirstLineIndent, left_margin_indent: u32) -> Self {
        Self {
            first_line_indent,
            left_margin_indent,
        }
    }
}

/// First-line indentation of a left-aligned paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FirstLineIndent {
    /// The first line is flush with the rest of the paragraph.
    None,
    /// The first line carries the renderer's default indent.
    Default,
    /// The first line hangs left of the paragraph body (list items).
    Outdent,
}
