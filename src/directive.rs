//! Display directives
//!
//! A directive tells the host to display a replacement string over a
//! byte range of the text, without touching the stored content.

/// A display replacement over a span of text
///
/// Offsets are byte positions into the scanned text: `start` inclusive,
/// `end` exclusive. The span covers exactly the ASCII character(s)
/// being reinterpreted, never the neighboring characters a rule only
/// examined for disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// Byte offset where the replaced span starts (inclusive)
    pub start: usize,
    /// Byte offset where the replaced span ends (exclusive)
    pub end: usize,
    /// String to display instead of the spanned characters
    pub replacement: &'static str,
}

impl Directive {
    /// Create a new directive
    pub fn new(start: usize, end: usize, replacement: &'static str) -> Self {
        Self { start, end, replacement }
    }

    /// Check if this directive's span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of the replaced span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check whether two directives cover intersecting ranges
    pub fn overlaps(&self, other: &Directive) -> bool {
        self.start < other.end && other.start < self.end
    }
}
