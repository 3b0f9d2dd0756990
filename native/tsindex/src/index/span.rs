//! Span - bounded byte range into the original document
//!
//! Every search takes a span instead of sharing a cursor, so region
//! narrowing is just a smaller span and no scan state outlives a call.

/// A half-open byte range `[start, end)` of the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first byte
    pub start: usize,
    /// Byte offset one past the last byte
    pub end: usize,
}

impl Span {
    /// Create a new span; an inverted range collapses to empty at `start`
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        if end < start {
            Self { start, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Span covering the whole input
    #[inline]
    pub const fn full(input: &str) -> Self {
        Self::new(0, input.len())
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Intersect with `[start, end)`, staying inside this span
    #[inline]
    pub fn narrow(&self, start: usize, end: usize) -> Self {
        let start = start.clamp(self.start, self.end);
        let end = end.clamp(start, self.end);
        Self { start, end }
    }

    /// Remainder of this span from `offset` on
    #[inline]
    pub fn starting_at(&self, offset: usize) -> Self {
        self.narrow(offset, self.end)
    }

    /// Extract the byte slice from input
    #[inline]
    pub fn bytes<'a>(&self, input: &'a str) -> &'a [u8] {
        input.as_bytes().get(self.start..self.end).unwrap_or(&[])
    }

    /// Extract the text from input (empty when the span splits a character)
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.start..self.end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
        assert!(span.contains(5));
        assert!(!span.contains(15));
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_inverted_is_empty() {
        let span = Span::new(8, 3);
        assert!(span.is_empty());
        assert_eq!(span.start, 8);
    }

    #[test]
    fn test_span_narrow_clamps() {
        let span = Span::new(10, 20);
        assert_eq!(span.narrow(0, 15), Span::new(10, 15));
        assert_eq!(span.narrow(12, 99), Span::new(12, 20));
        assert_eq!(span.narrow(30, 40), Span::new(20, 20));
        assert_eq!(span.starting_at(18), Span::new(18, 20));
    }

    #[test]
    fn test_span_slice() {
        let input = "hello world";
        assert_eq!(Span::new(6, 11).slice(input), "world");
        assert_eq!(Span::new(6, 50).slice(input), "");
        assert_eq!(Span::full(input).bytes(input), b"hello world");
    }

    #[test]
    fn test_span_slice_on_char_boundary_only() {
        let input = "é";
        assert_eq!(Span::new(0, 1).slice(input), "");
        assert_eq!(Span::full(input).slice(input), "é");
    }
}
