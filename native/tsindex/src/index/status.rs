//! Status-Filtered Indexer
//!
//! Flat list of messages whose `<translation>` carries a given `type`,
//! across all contexts. Used for "show me everything still unfinished".

use crate::core::attributes::attribute_value;
use crate::core::markers::{Status, Tag};
use crate::core::scanner::Scanner;

use super::label::find_label;
use super::messages::MessageEntry;
use super::span::Span;

/// Entry of a status-filtered index; same shape as a message entry
pub type StatusFilteredEntry<'a> = MessageEntry<'a>;

/// Per-status message tallies for one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub vanished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
    /// Labeled messages without a recognized status
    pub none: usize,
}

impl StatusCounts {
    #[inline]
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Vanished => self.vanished,
            Status::Unfinished => self.unfinished,
            Status::Obsolete => self.obsolete,
        }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.vanished + self.unfinished + self.obsolete + self.none
    }

    fn record(&mut self, status: Option<Status>) {
        match status {
            Some(Status::Vanished) => self.vanished += 1,
            Some(Status::Unfinished) => self.unfinished += 1,
            Some(Status::Obsolete) => self.obsolete += 1,
            None => self.none += 1,
        }
    }
}

/// Extents of every `<message>` block in document order
fn message_blocks<'a>(scanner: Scanner<'a>) -> impl Iterator<Item = Span> + 'a {
    let full = scanner.full();
    let mut cursor = full.start;
    std::iter::from_fn(move || {
        let start = scanner.find_open_start(full.starting_at(cursor), Tag::Message)?;
        let end = scanner.block_end(start, full, Tag::Message);
        cursor = end.max(start + 1);
        Some(Span::new(start, end))
    })
}

/// Status of the first `<translation>` inside a message block
fn translation_status(scanner: &Scanner<'_>, block: Span) -> Option<Status> {
    let open = scanner.find_open_tag(block, Tag::Translation)?;
    let raw = open.attrs.slice(scanner.input());
    attribute_value(raw, Status::ATTRIBUTE)?.parse().ok()
}

/// Index messages whose translation has `type="<status>"`
pub fn index_by_status(text: &str, status: Status) -> Vec<StatusFilteredEntry<'_>> {
    let scanner = Scanner::new(text);
    let mut entries = Vec::new();

    for block in message_blocks(scanner) {
        if translation_status(&scanner, block) != Some(status) {
            continue;
        }
        match find_label(&scanner, block, Tag::Source) {
            Some(label) => entries.push(MessageEntry {
                source: label.text,
                offset: block.start,
            }),
            None => log::trace!("{} message at {} has no <source>", status, block.start),
        }
    }

    entries
}

/// Count labeled messages per translation status in one pass
pub fn count_by_status(text: &str) -> StatusCounts {
    let scanner = Scanner::new(text);
    let mut counts = StatusCounts::default();

    for block in message_blocks(scanner) {
        if find_label(&scanner, block, Tag::Source).is_some() {
            counts.record(translation_status(&scanner, block));
        }
    }

    counts
}
