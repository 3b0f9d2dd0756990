//! Navigation Index Module
//!
//! Builds jump lists over a translation catalog using only byte offsets into
//! the original input. Labels borrow from the document; nothing is copied
//! until the host asks for terms.
//!
//! ## Architecture
//!
//! ```text
//! build_index(text, style)
//! ├── GroupByContext   -> index_contexts   -> [ContextEntry]
//! ├── FlatMessageList  -> index_messages   -> [ContextGroup -> [MessageEntry]]
//! └── Vanished | Unfinished | Obsolete
//!                      -> index_by_status  -> [MessageEntry]
//! ```
//!
//! All indexers share the label scanner. Offsets always point at the '<'
//! of the enclosing block so navigation lands at the top of it.

pub mod contexts;
pub mod label;
pub mod lines;
pub mod messages;
pub mod selector;
pub mod span;
pub mod status;

#[cfg(test)]
mod properties;

pub use contexts::{index_contexts, ContextEntry};
pub use lines::LineIndex;
pub use messages::{index_messages, ContextGroup, FlatMessageEntry, MessageEntry};
pub use selector::{build_index, build_index_for, IndexResult, IndexStyle};
pub use span::Span;
pub use status::{count_by_status, index_by_status, StatusCounts, StatusFilteredEntry};
