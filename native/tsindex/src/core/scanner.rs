//! SIMD-accelerated marker scanning using memchr
//!
//! Uses memchr crate for fast byte searching with SIMD acceleration:
//! - SSE2 (default x86_64)
//! - AVX2 (runtime detection)
//! - NEON (aarch64)
//!
//! The scanner holds no position. Every search is bounded by an explicit
//! [`Span`], so callers narrow regions by passing smaller spans and
//! independent passes can share one scanner.

use memchr::{memchr, memmem};

use super::markers::Tag;
use crate::index::span::Span;

/// An opening tag located in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenTag {
    /// Offset of the '<'
    pub start: usize,
    /// Raw attribute text between the element name and '>' (or '/>')
    pub attrs: Span,
    /// Offset one past the closing '>'
    pub end: usize,
    /// Tag ends with '/>'
    pub self_closing: bool,
}

/// Stateless scanner over a borrowed document
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    input: &'a str,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Scanner { input }
    }

    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Span covering the whole input
    #[inline]
    pub fn full(&self) -> Span {
        Span::full(self.input)
    }

    #[inline]
    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    /// Find the '<' of the next `<tag` whose name ends at '>', '/' or whitespace.
    ///
    /// Does not require the tag to be closed; use [`Scanner::find_open_tag`]
    /// for that.
    pub fn find_open_start(&self, span: Span, tag: Tag) -> Option<usize> {
        let prefix = tag.open_prefix();
        let finder = memmem::Finder::new(prefix);
        let mut from = span.start;

        while from < span.end {
            let pos = from + finder.find(span.starting_at(from).bytes(self.input))?;
            let after = pos + prefix.len();
            match self.bytes().get(after) {
                Some(&b) if after < span.end && is_name_end(b) => return Some(pos),
                Some(_) if after < span.end => from = pos + 1,
                _ => return None,
            }
        }
        None
    }

    /// Find the next complete opening tag for `tag` inside `span`
    ///
    /// A `<tag` whose '>' is missing before the span end counts as absent.
    pub fn find_open_tag(&self, span: Span, tag: Tag) -> Option<OpenTag> {
        let start = self.find_open_start(span, tag)?;
        let name_end = start + tag.open_prefix().len();
        let gt = self.find_tag_end_quoted(span.starting_at(name_end))?;

        let self_closing = gt > name_end && self.bytes()[gt - 1] == b'/';
        let attrs_end = if self_closing { gt - 1 } else { gt };

        Some(OpenTag {
            start,
            attrs: Span::new(name_end, attrs_end),
            end: gt + 1,
            self_closing,
        })
    }

    /// Find the offset of the next `</tag>` inside `span`
    #[inline]
    pub fn find_close_tag(&self, span: Span, tag: Tag) -> Option<usize> {
        memmem::find(span.bytes(self.input), tag.close_tag()).map(|i| span.start + i)
    }

    /// End of the block whose opening tag starts at `start`
    ///
    /// The nearer of the block's own closing tag (inclusive) and the next
    /// sibling opening of the same tag. Without either, the block runs to the
    /// end of `span`; that fallback is best-effort on unterminated input.
    pub fn block_end(&self, start: usize, span: Span, tag: Tag) -> usize {
        let rest = span.starting_at(start + 1);
        let close = self
            .find_close_tag(rest, tag)
            .map(|pos| pos + tag.close_tag().len());
        let sibling = self.find_open_start(rest, tag);

        match (close, sibling) {
            (Some(c), Some(s)) => c.min(s),
            (Some(c), None) => c,
            (None, Some(s)) => s,
            (None, None) => span.end,
        }
    }

    /// Find next '<' inside `span` using SIMD
    #[inline]
    pub fn find_tag_start(&self, span: Span) -> Option<usize> {
        memchr(b'<', span.bytes(self.input)).map(|i| span.start + i)
    }

    /// Find tag end while handling quotes properly
    /// Returns the position of '>' that is not inside quotes
    pub fn find_tag_end_quoted(&self, span: Span) -> Option<usize> {
        let bytes = span.bytes(self.input);
        let mut in_single_quote = false;
        let mut in_double_quote = false;

        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'"' if !in_single_quote => in_double_quote = !in_double_quote,
                b'\'' if !in_double_quote => in_single_quote = !in_single_quote,
                b'>' if !in_single_quote && !in_double_quote => return Some(span.start + i),
                _ => {}
            }
        }
        None
    }

    /// Check if input starts with a byte sequence at `pos`, within `span`
    #[inline]
    pub fn starts_with(&self, pos: usize, span: Span, needle: &[u8]) -> bool {
        span.starting_at(pos).bytes(self.input).starts_with(needle)
    }

    /// Shrink `span` past leading and trailing whitespace runs
    pub fn trim_whitespace(&self, span: Span) -> Span {
        let bytes = span.bytes(self.input);
        let lead = bytes.iter().take_while(|&&b| is_whitespace(b)).count();
        let trail = bytes[lead..]
            .iter()
            .rev()
            .take_while(|&&b| is_whitespace(b))
            .count();
        Span::new(span.start + lead, span.end - trail)
    }
}

/// Check if byte is whitespace
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Byte that may follow an element name inside a tag
#[inline]
fn is_name_end(b: u8) -> bool {
    b == b'>' || b == b'/' || is_whitespace(b)
}
