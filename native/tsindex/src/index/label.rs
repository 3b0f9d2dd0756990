//! Label Scanner
//!
//! Finds `<tag>label</tag>` pairs and the enclosing blocks they name. The
//! scan is tolerant: anything that does not look like a label is treated as
//! "no label here" instead of an error, since documents may be mid-edit.

use crate::core::markers::Tag;
use crate::core::scanner::Scanner;

use super::span::Span;

/// Text of a label element, trimmed of surrounding whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    /// Label text as written in the document
    pub text: &'a str,
    /// Location of `text` in the document
    pub span: Span,
    /// Offset one past the closing delimiter, where a follow-up search resumes
    pub resume: usize,
}

/// Find the first `tag` label inside `span`
///
/// Only the first opening delimiter is considered. If its content is
/// followed by anything other than the matching closing delimiter, is
/// blank, or the element is self-closing, there is no label.
pub fn find_label<'a>(scanner: &Scanner<'a>, span: Span, tag: Tag) -> Option<Label<'a>> {
    let open = scanner.find_open_tag(span, tag)?;
    if open.self_closing {
        return None;
    }

    let content = span.starting_at(open.end);
    let lt = scanner.find_tag_start(content)?;
    if !scanner.starts_with(lt, span, tag.close_tag()) {
        return None;
    }

    let text = scanner.trim_whitespace(Span::new(content.start, lt));
    if text.is_empty() {
        return None;
    }

    Some(Label {
        text: text.slice(scanner.input()),
        span: text,
        resume: lt + tag.close_tag().len(),
    })
}

/// A block together with the label that names it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledBlock<'a> {
    /// Offset of the block's '<'
    pub start: usize,
    /// End of the block's extent (see [`Scanner::block_end`])
    pub end: usize,
    pub label: Label<'a>,
}

/// Iterator over the `outer` blocks of a region that carry a `label`
///
/// Blocks without a resolvable label are skipped. The label must lie inside
/// its own block, so an unlabeled block never borrows the next block's label.
#[derive(Debug, Clone)]
pub struct LabeledBlocks<'a> {
    scanner: Scanner<'a>,
    region: Span,
    outer: Tag,
    label: Tag,
    cursor: usize,
}

impl<'a> LabeledBlocks<'a> {
    pub fn new(scanner: Scanner<'a>, region: Span, outer: Tag, label: Tag) -> Self {
        LabeledBlocks {
            scanner,
            region,
            outer,
            label,
            cursor: region.start,
        }
    }
}

impl<'a> Iterator for LabeledBlocks<'a> {
    type Item = LabeledBlock<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self
                .scanner
                .find_open_start(self.region.starting_at(self.cursor), self.outer)?;
            let end = self.scanner.block_end(start, self.region, self.outer);
            self.cursor = end.max(start + 1);

            match find_label(&self.scanner, Span::new(start, end), self.label) {
                Some(label) => return Some(LabeledBlock { start, end, label }),
                None => log::trace!("skipping <{}> at {} without <{}>", self.outer, start, self.label),
            }
        }
    }
}

/// Enumerate labeled `outer` blocks inside `region`
#[inline]
pub fn labeled_blocks<'a>(
    scanner: Scanner<'a>,
    region: Span,
    outer: Tag,
    label: Tag,
) -> LabeledBlocks<'a> {
    LabeledBlocks::new(scanner, region, outer, label)
}
