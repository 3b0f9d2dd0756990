//! Property-based tests for the indexers
//!
//! Documents are generated from a small model (contexts with optional names,
//! messages with optional sources and statuses), rendered with varying
//! whitespace between markers, and the indexes are checked against the model.

use proptest::prelude::*;

use super::*;
use crate::core::markers::Status;

#[derive(Debug, Clone)]
struct MessageModel {
    source: Option<String>,
    status: Option<Status>,
}

#[derive(Debug, Clone)]
struct ContextModel {
    name: Option<String>,
    messages: Vec<MessageModel>,
}

/// Rendered document plus the offsets every block was written at
struct Rendered {
    text: String,
    contexts: Vec<usize>,
    messages: Vec<Vec<usize>>,
}

fn label_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_.]{0,10}"
}

fn message_strategy() -> impl Strategy<Value = MessageModel> {
    (
        proptest::option::weighted(0.85, label_strategy()),
        proptest::option::of(prop::sample::select(Status::ALL.to_vec())),
    )
        .prop_map(|(source, status)| MessageModel { source, status })
}

fn context_strategy() -> impl Strategy<Value = ContextModel> {
    (
        proptest::option::weighted(0.85, label_strategy()),
        prop::collection::vec(message_strategy(), 0..5),
    )
        .prop_map(|(name, messages)| ContextModel { name, messages })
}

fn document_strategy() -> impl Strategy<Value = (Vec<ContextModel>, &'static str)> {
    (
        prop::collection::vec(context_strategy(), 0..6),
        prop::sample::select(vec!["", " ", "\n", "\n    "]),
    )
}

fn render(contexts: &[ContextModel], sep: &str) -> Rendered {
    let mut text = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<TS version=\"2.1\">");
    let mut context_offsets = Vec::new();
    let mut message_offsets = Vec::new();

    for context in contexts {
        text.push_str(sep);
        context_offsets.push(text.len());
        text.push_str("<context>");
        if let Some(name) = &context.name {
            text.push_str(&format!("{sep}<name>{sep}{name}{sep}</name>"));
        }

        let mut offsets = Vec::new();
        for message in &context.messages {
            text.push_str(sep);
            offsets.push(text.len());
            text.push_str("<message>");
            if let Some(source) = &message.source {
                text.push_str(&format!("{sep}<source>{source}</source>"));
            }
            match message.status {
                Some(status) => text.push_str(&format!(
                    "{sep}<translation type=\"{status}\">t</translation>"
                )),
                None => text.push_str(&format!("{sep}<translation>t</translation>")),
            }
            text.push_str(&format!("{sep}</message>"));
        }
        message_offsets.push(offsets);
        text.push_str(&format!("{sep}</context>"));
    }
    text.push_str(sep);
    text.push_str("</TS>\n");

    Rendered {
        text,
        contexts: context_offsets,
        messages: message_offsets,
    }
}

proptest! {
    #[test]
    fn contexts_match_model((model, sep) in document_strategy()) {
        let doc = render(&model, sep);
        let expected: Vec<_> = model
            .iter()
            .zip(&doc.contexts)
            .filter_map(|(c, &offset)| c.name.as_deref().map(|name| (name, offset)))
            .collect();
        let actual: Vec<_> = index_contexts(&doc.text)
            .into_iter()
            .map(|e| (e.name, e.offset))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn messages_stay_in_their_context((model, sep) in document_strategy()) {
        let doc = render(&model, sep);
        let mut expected = Vec::new();
        for (i, context) in model.iter().enumerate() {
            let Some(name) = context.name.as_deref() else { continue };
            let messages: Vec<_> = context
                .messages
                .iter()
                .zip(&doc.messages[i])
                .filter_map(|(m, &offset)| m.source.as_deref().map(|s| (s, offset)))
                .collect();
            if !messages.is_empty() {
                expected.push((name, doc.contexts[i], messages));
            }
        }
        let actual: Vec<_> = index_messages(&doc.text)
            .into_iter()
            .map(|g| {
                let messages: Vec<_> = g.messages.iter().map(|m| (m.source, m.offset)).collect();
                (g.name, g.offset, messages)
            })
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn status_filter_matches_model((model, sep) in document_strategy(), status in prop::sample::select(Status::ALL.to_vec())) {
        let doc = render(&model, sep);
        let expected: Vec<_> = model
            .iter()
            .zip(&doc.messages)
            .flat_map(|(c, offsets)| c.messages.iter().zip(offsets.iter()))
            .filter(|(m, _)| m.status == Some(status))
            .filter_map(|(m, &offset)| m.source.as_deref().map(|s| (s, offset)))
            .collect();
        let actual: Vec<_> = index_by_status(&doc.text, status)
            .into_iter()
            .map(|e| (e.source, e.offset))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn offsets_ascend_and_land_on_block_start((model, sep) in document_strategy()) {
        let doc = render(&model, sep);
        let contexts = index_contexts(&doc.text);
        prop_assert!(contexts.windows(2).all(|w| w[0].offset < w[1].offset));
        for entry in &contexts {
            prop_assert!(doc.text[entry.offset..].starts_with("<context"));
        }

        let flat = build_index(&doc.text, IndexStyle::FlatMessageList).flat_labels();
        prop_assert!(flat.windows(2).all(|w| w[0].offset < w[1].offset));
        for entry in &flat {
            prop_assert!(doc.text[entry.offset..].starts_with("<message"));
        }
    }

    #[test]
    fn indexing_is_idempotent((model, sep) in document_strategy()) {
        let doc = render(&model, sep);
        for style in IndexStyle::ALL {
            prop_assert_eq!(build_index(&doc.text, style), build_index(&doc.text, style));
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,200}") {
        for style in IndexStyle::ALL {
            let _ = build_index(&text, style);
        }
        let _ = count_by_status(&text);
    }
}
