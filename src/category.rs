//! Transformation categories
//!
//! This module defines the independently toggleable rule groups and
//! the fixed replacement alphabet they emit. Every directive produced
//! by the mapper carries one of these strings and nothing else.

/// Left single quotation mark (U+2018)
pub const LEFT_SINGLE: &str = "\u{2018}";
/// Right single quotation mark (U+2019)
pub const RIGHT_SINGLE: &str = "\u{2019}";
/// Left double quotation mark (U+201C)
pub const LEFT_DOUBLE: &str = "\u{201C}";
/// Right double quotation mark (U+201D)
pub const RIGHT_DOUBLE: &str = "\u{201D}";
/// En dash (U+2013)
pub const EN_DASH: &str = "\u{2013}";
/// Em dash (U+2014)
pub const EM_DASH: &str = "\u{2014}";
/// Two-space string used by the sentence-spacing extension
pub const SENTENCE_SPACE: &str = "  ";

/// A toggleable group of replacement rules
///
/// The four punctuation categories are enabled by default;
/// `SentenceSpacing` is an extension that is off unless requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Straight apostrophes to curly single quotes
    SingleQuote,
    /// Straight double quotes to curly double quotes
    DoubleQuote,
    /// Two-hyphen runs to en dashes
    EnDash,
    /// Three-hyphen runs to em dashes
    EmDash,
    /// Single space after sentence-ending punctuation to two spaces
    SentenceSpacing,
}

impl Category {
    /// All categories, in rule-priority order
    pub const ALL: [Category; 5] = [
        Category::DoubleQuote,
        Category::SingleQuote,
        Category::EnDash,
        Category::EmDash,
        Category::SentenceSpacing,
    ];

    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::SingleQuote => "single-quotes",
            Category::DoubleQuote => "double-quotes",
            Category::EnDash => "en-dash",
            Category::EmDash => "em-dash",
            Category::SentenceSpacing => "sentence-spacing",
        }
    }

    /// Parse a category from a string name (for config loading)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single-quotes" => Some(Category::SingleQuote),
            "double-quotes" => Some(Category::DoubleQuote),
            "en-dash" => Some(Category::EnDash),
            "em-dash" => Some(Category::EmDash),
            "sentence-spacing" => Some(Category::SentenceSpacing),
            _ => None,
        }
    }

    /// The replacement strings this category can emit
    pub fn glyphs(&self) -> &'static [&'static str] {
        match self {
            Category::SingleQuote => &[LEFT_SINGLE, RIGHT_SINGLE],
            Category::DoubleQuote => &[LEFT_DOUBLE, RIGHT_DOUBLE],
            Category::EnDash => &[EN_DASH],
            Category::EmDash => &[EM_DASH],
            Category::SentenceSpacing => &[SENTENCE_SPACE],
        }
    }

    /// Which category a replacement string belongs to
    ///
    /// Used by hosts that clear directives by recognizing the known
    /// glyph set rather than by bookkeeping.
    pub fn of_replacement(replacement: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.glyphs().contains(&replacement))
    }
}
