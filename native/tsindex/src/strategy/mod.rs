//! Indexing Strategy Module
//!
//! - Sequential: one style per pass (`index::build_index`)
//! - Parallel: several styles over one document, one independent pass each

pub mod parallel;

pub use parallel::build_many;
