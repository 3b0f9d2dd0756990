//! Index construction errors
//!
//! Only configuration problems are errors. Malformed or partial document
//! content never surfaces here; the scanners skip what they cannot label.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("unknown index style: {0:?}")]
    UnknownStyle(String),

    #[error("unknown translation status: {0:?}")]
    UnknownStatus(String),

    #[error("document is not valid UTF-8")]
    InvalidUtf8,
}
