//! Parallel multi-style indexing
//!
//! Uses Rayon to run one independent pass per style over the same
//! immutable document. Passes share no scan state.

use rayon::prelude::*;

use crate::error::Result;
use crate::index::{build_index, IndexResult, IndexStyle};

/// Build every requested style; results keep the order of `styles`
pub fn build_many<'a>(text: &'a str, styles: &[IndexStyle]) -> Vec<IndexResult<'a>> {
    styles
        .par_iter()
        .map(|&style| build_index(text, style))
        .collect()
}

/// Parse all configured styles first, then build them in parallel
///
/// The first unknown style aborts the whole call before any pass runs.
pub fn build_many_for<'a, S: AsRef<str>>(text: &'a str, styles: &[S]) -> Result<Vec<IndexResult<'a>>> {
    let styles = styles
        .iter()
        .map(|s| s.as_ref().parse())
        .collect::<Result<Vec<IndexStyle>>>()?;
    Ok(build_many(text, &styles))
}
