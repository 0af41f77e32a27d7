//! # Source Span
//!
//! Half-open byte range `[start, end)` into the Java source a node was
//! parsed from. ANTLR reports token ranges with an inclusive stop index;
//! [`Span::from_antlr`] converts them.
//!
//! ```rust
//! use java_cst::Span;
//!
//! let source = "int x = 1;";
//! let span = Span::from_antlr(4, 4);
//! assert_eq!(span, Span::new(4, 5));
//! assert_eq!(span.text(source), Some("x"));
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawSpan")]
pub struct Span {
    start: usize,
    end: usize,
}

/// Wire form; deserialized spans go through [`Span::new`].
#[derive(Deserialize)]
struct RawSpan {
    start: usize,
    end: usize,
}

impl From<RawSpan> for Span {
    fn from(raw: RawSpan) -> Self {
        Span::new(raw.start, raw.end)
    }
}

impl Span {
    /// `end` is exclusive; an `end` before `start` is clamped to `start`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Converts an ANTLR `(startIndex, stopIndex)` pair. ANTLR marks an
    /// empty range with `stop == start - 1`.
    pub fn from_antlr(start_index: usize, stop_index: usize) -> Self {
        Self::new(start_index, stop_index.saturating_add(1))
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when `other` lies within this span.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Source text covered by the span, or `None` when it falls outside
    /// `source` or splits a UTF-8 character.
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_is_clamped() {
        let span = Span::new(7, 3);
        assert!(span.is_empty());
        assert_eq!(span.end(), 7);
    }

    #[test]
    fn test_antlr_empty_range() {
        // EOF-like tokens: stop = start - 1
        assert!(Span::from_antlr(5, 4).is_empty());
        assert_eq!(Span::from_antlr(0, 2).len(), 3);
    }

    #[test]
    fn test_deserialized_inverted_range_is_clamped() {
        let span: Span = serde_json::from_str(r#"{"start":5,"end":2}"#).unwrap();
        assert_eq!(span, Span::new(5, 5));
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_serde_keeps_field_names() {
        let json = serde_json::to_string(&Span::new(1, 4)).unwrap();
        assert_eq!(json, r#"{"start":1,"end":4}"#);
        assert_eq!(serde_json::from_str::<Span>(&json).unwrap(), Span::new(1, 4));
    }

    #[test]
    fn test_contains() {
        let outer = Span::new(2, 10);
        assert!(outer.contains(Span::new(2, 10)));
        assert!(outer.contains(Span::new(4, 6)));
        assert!(!outer.contains(Span::new(1, 6)));
        assert!(!outer.contains(Span::new(9, 11)));
    }

    #[test]
    fn test_text_outside_source() {
        assert_eq!(Span::new(0, 3).text("ab"), None);
        assert_eq!(Span::new(0, 2).text("ab"), Some("ab"));
    }
}
