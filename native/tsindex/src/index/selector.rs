//! Index Selector
//!
//! Maps the configured index style onto one of the indexers. The style set is
//! closed; an unknown configured value is rejected before any scanning.

use std::fmt;
use std::str::FromStr;

use crate::core::markers::Status;
use crate::error::{IndexError, Result};

use super::contexts::{index_contexts, ContextEntry};
use super::messages::{index_messages, ContextGroup, FlatMessageEntry};
use super::status::{index_by_status, StatusFilteredEntry};

/// How the navigation index is shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexStyle {
    /// One entry per context
    GroupByContext,
    /// Every message, prefixed by its context
    FlatMessageList,
    Vanished,
    Unfinished,
    Obsolete,
}

impl IndexStyle {
    pub const ALL: [IndexStyle; 5] = [
        IndexStyle::GroupByContext,
        IndexStyle::FlatMessageList,
        IndexStyle::Vanished,
        IndexStyle::Unfinished,
        IndexStyle::Obsolete,
    ];

    /// Configuration literal
    pub const fn as_str(self) -> &'static str {
        match self {
            IndexStyle::GroupByContext => "group-by-context",
            IndexStyle::FlatMessageList => "flat-message-list",
            IndexStyle::Vanished => "vanished",
            IndexStyle::Unfinished => "unfinished",
            IndexStyle::Obsolete => "obsolete",
        }
    }

    /// Status filtered by this style, if it is a status style
    pub const fn status(self) -> Option<Status> {
        match self {
            IndexStyle::Vanished => Some(Status::Vanished),
            IndexStyle::Unfinished => Some(Status::Unfinished),
            IndexStyle::Obsolete => Some(Status::Obsolete),
            IndexStyle::GroupByContext | IndexStyle::FlatMessageList => None,
        }
    }
}

impl fmt::Display for IndexStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexStyle {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self> {
        IndexStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| IndexError::UnknownStyle(s.to_string()))
    }
}

/// Result of one indexing pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexResult<'a> {
    Contexts(Vec<ContextEntry<'a>>),
    Messages(Vec<ContextGroup<'a>>),
    Filtered {
        status: Status,
        entries: Vec<StatusFilteredEntry<'a>>,
    },
}

impl<'a> IndexResult<'a> {
    /// Style that produces this shape
    pub fn style(&self) -> IndexStyle {
        match self {
            IndexResult::Contexts(_) => IndexStyle::GroupByContext,
            IndexResult::Messages(_) => IndexStyle::FlatMessageList,
            IndexResult::Filtered { status, .. } => match status {
                Status::Vanished => IndexStyle::Vanished,
                Status::Unfinished => IndexStyle::Unfinished,
                Status::Obsolete => IndexStyle::Obsolete,
            },
        }
    }

    /// Number of jump targets
    pub fn len(&self) -> usize {
        match self {
            IndexResult::Contexts(entries) => entries.len(),
            IndexResult::Messages(groups) => groups.iter().map(|g| g.messages.len()).sum(),
            IndexResult::Filtered { entries, .. } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Messages as a single list of `context/source` entries
    ///
    /// Empty for every shape but [`IndexResult::Messages`].
    pub fn flat_labels(&self) -> Vec<FlatMessageEntry<'a>> {
        match self {
            IndexResult::Messages(groups) => groups.iter().flat_map(|g| g.flatten()).collect(),
            IndexResult::Contexts(_) | IndexResult::Filtered { .. } => Vec::new(),
        }
    }
}

/// Run the indexer selected by `style`
pub fn build_index(text: &str, style: IndexStyle) -> IndexResult<'_> {
    let result = match style {
        IndexStyle::GroupByContext => IndexResult::Contexts(index_contexts(text)),
        IndexStyle::FlatMessageList => IndexResult::Messages(index_messages(text)),
        IndexStyle::Vanished => filtered(text, Status::Vanished),
        IndexStyle::Unfinished => filtered(text, Status::Unfinished),
        IndexStyle::Obsolete => filtered(text, Status::Obsolete),
    };
    log::debug!("built {} index: {} entries", style, result.len());
    result
}

/// Parse the configured style, then build
///
/// An unknown style fails before any scanning and yields no partial output.
pub fn build_index_for<'a>(text: &'a str, style: &str) -> Result<IndexResult<'a>> {
    let style: IndexStyle = style.parse()?;
    Ok(build_index(text, style))
}

#[inline]
fn filtered(text: &str, status: Status) -> IndexResult<'_> {
    IndexResult::Filtered {
        status,
        entries: index_by_status(text, status),
    }
}
