//! Footnote label variants.

/// How a footnote, endnote, or cross-reference is labelled for the reader.
///
/// A footnote always carries a label value; "no label" is the [`NoLabel`]
/// variant rather than an absent field.
///
/// [`NoLabel`]: FootnoteLabel::NoLabel
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FootnoteLabel {
    /// The renderer supplies a running numeric label (`+` in the source).
    Automatic,
    /// The renderer supplies no label at all (`-` in the source).
    NoLabel,
    /// A literal label taken verbatim from the source.
    Custom(String),
}

impl FootnoteLabel {
    /// Returns the literal label text, if this is a custom label.
    #[must_use]
    pub fn custom_text(&self) -> Option<&str> {
        match self {
            Self::Custom(text) => Some(text),
            Self::Automatic | Self::NoLabel => None,
        }
    }
}
