//! Message Indexer
//!
//! Two-level index: each named context with the messages inside it.
//!
//! Messages are only searched inside their context's region, which ends at
//! the context's closing tag or, for an unterminated context, at the next
//! `<context>` (or end of document). A message therefore never shows up
//! under a neighbouring context.

use crate::core::markers::Tag;
use crate::core::scanner::Scanner;

use super::label::labeled_blocks;
use super::span::Span;

/// A `<message>` block with a `<source>` label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEntry<'a> {
    pub source: &'a str,
    /// Offset of the message's '<'
    pub offset: usize,
}

/// A named context and its labeled messages (never empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextGroup<'a> {
    pub name: &'a str,
    /// Offset of the context's '<'
    pub offset: usize,
    pub messages: Vec<MessageEntry<'a>>,
}

/// A message prefixed by its context, for single-level navigation lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatMessageEntry<'a> {
    pub context: &'a str,
    pub source: &'a str,
    pub offset: usize,
}

impl FlatMessageEntry<'_> {
    /// `context/source`
    pub fn label(&self) -> String {
        format!("{}/{}", self.context, self.source)
    }
}

impl<'a> ContextGroup<'a> {
    /// Messages of this group prefixed by the context name
    pub fn flatten(&self) -> impl Iterator<Item = FlatMessageEntry<'a>> + '_ {
        let context = self.name;
        self.messages.iter().map(move |m| FlatMessageEntry {
            context,
            source: m.source,
            offset: m.offset,
        })
    }
}

/// Index messages grouped under their named context
pub fn index_messages(text: &str) -> Vec<ContextGroup<'_>> {
    let scanner = Scanner::new(text);
    let mut groups = Vec::new();

    for context in labeled_blocks(scanner, scanner.full(), Tag::Context, Tag::Name) {
        let region = Span::new(context.start, context.end);
        let messages: Vec<_> = labeled_blocks(scanner, region, Tag::Message, Tag::Source)
            .map(|block| MessageEntry {
                source: block.label.text,
                offset: block.start,
            })
            .collect();

        if messages.is_empty() {
            log::trace!("context {:?} has no labeled messages", context.label.text);
            continue;
        }

        groups.push(ContextGroup {
            name: context.label.text,
            offset: context.start,
            messages,
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de_DE">
<context>
    <name>Dialog</name>
    <message>
        <location filename="dialog.ui" line="14"/>
        <source>OK</source>
        <translation>OK</translation>
    </message>
    <message>
        <source>Cancel</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

    #[test]
    fn test_messages_grouped_by_context() {
        let groups = index_messages(DIALOG);
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(group.name, "Dialog");
        assert_eq!(group.offset, DIALOG.find("<context>").unwrap());

        let first = DIALOG.find("<message>").unwrap();
        let second = DIALOG.rfind("<message>").unwrap();
        assert_eq!(
            group.messages,
            vec![
                MessageEntry { source: "OK", offset: first },
                MessageEntry { source: "Cancel", offset: second },
            ]
        );
    }

    #[test]
    fn test_adjacent_contexts_do_not_leak() {
        let text = "<context><name>A</name><message><source>a1</source></message></context><context><name>B</name><message><source>b1</source></message></context>";
        let groups = index_messages(text);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "A");
        assert_eq!(groups[0].messages.len(), 1);
        assert_eq!(groups[0].messages[0].source, "a1");
        assert_eq!(groups[1].name, "B");
        assert_eq!(groups[1].messages.len(), 1);
        assert_eq!(groups[1].messages[0].source, "b1");
    }

    #[test]
    fn test_context_without_messages_is_omitted() {
        let text = "<context><name>Empty</name></context><context><name>Full</name><message><source>x</source></message></context>";
        let groups = index_messages(text);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Full");
    }

    #[test]
    fn test_message_without_source_is_skipped() {
        let text = "<context><name>C</name><message><translation>t</translation></message><message><source>s</source></message></context>";
        let groups = index_messages(text);
        assert_eq!(groups[0].messages.len(), 1);
        assert_eq!(groups[0].messages[0].source, "s");
    }

    #[test]
    fn test_unterminated_context_runs_to_end() {
        let text = "<context><name>Open</name><message><source>last</source></message>";
        let groups = index_messages(text);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].messages[0].source, "last");
    }

    #[test]
    fn test_unnamed_context_contributes_nothing() {
        let text = "<context><message><source>orphan</source></message></context>";
        assert!(index_messages(text).is_empty());
    }

    #[test]
    fn test_flatten_prefixes_context() {
        let groups = index_messages(DIALOG);
        let labels: Vec<_> = groups[0].flatten().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Dialog/OK", "Dialog/Cancel"]);
    }
}
