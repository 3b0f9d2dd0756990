//! Context Indexer
//!
//! Flat list of named contexts in document order.

use crate::core::markers::Tag;
use crate::core::scanner::Scanner;

use super::label::labeled_blocks;

/// A named `<context>` block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextEntry<'a> {
    pub name: &'a str,
    /// Offset of the context's '<'
    pub offset: usize,
}

/// Index every `<context>` that carries a `<name>`
pub fn index_contexts(text: &str) -> Vec<ContextEntry<'_>> {
    let scanner = Scanner::new(text);
    labeled_blocks(scanner, scanner.full(), Tag::Context, Tag::Name)
        .map(|block| ContextEntry {
            name: block.label.text,
            offset: block.start,
        })
        .collect()
}
