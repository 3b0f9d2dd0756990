//! Marker vocabulary of translation catalogs
//!
//! The element names and status values are fixed by the catalog format.
//! Modelling them as closed enums keeps every dispatch exhaustive.

use std::fmt;
use std::str::FromStr;

use crate::error::IndexError;

/// Element names the indexer looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Context,
    Name,
    Message,
    Source,
    Translation,
}

impl Tag {
    /// Element name as written in the document
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Context => "context",
            Tag::Name => "name",
            Tag::Message => "message",
            Tag::Source => "source",
            Tag::Translation => "translation",
        }
    }

    /// Opening delimiter up to (not including) attributes or '>'
    #[inline]
    pub const fn open_prefix(self) -> &'static [u8] {
        match self {
            Tag::Context => b"<context",
            Tag::Name => b"<name",
            Tag::Message => b"<message",
            Tag::Source => b"<source",
            Tag::Translation => b"<translation",
        }
    }

    /// Full closing delimiter
    #[inline]
    pub const fn close_tag(self) -> &'static [u8] {
        match self {
            Tag::Context => b"</context>",
            Tag::Name => b"</name>",
            Tag::Message => b"</message>",
            Tag::Source => b"</source>",
            Tag::Translation => b"</translation>",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translation status carried by `<translation type="...">`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Vanished,
    Unfinished,
    Obsolete,
}

impl Status {
    /// Attribute key holding the status
    pub const ATTRIBUTE: &'static str = "type";

    pub const ALL: [Status; 3] = [Status::Vanished, Status::Unfinished, Status::Obsolete];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Vanished => "vanished",
            Status::Unfinished => "unfinished",
            Status::Obsolete => "obsolete",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vanished" => Ok(Status::Vanished),
            "unfinished" => Ok(Status::Unfinished),
            "obsolete" => Ok(Status::Obsolete),
            other => Err(IndexError::UnknownStatus(other.to_string())),
        }
    }
}
