//! TsIndex - Navigation indexes for translation catalogs
//!
//! Scans a `.ts` translation catalog (contexts holding named messages) and
//! returns jump lists of labels and byte offsets for the host's navigation.
//!
//! Styles:
//! - group-by-context: one entry per named context
//! - flat-message-list: every message, prefixed by its context
//! - vanished / unfinished / obsolete: messages whose translation has that status
//!
//! The scan is tolerant: unlabeled or malformed blocks are left out of the
//! index. Only an unknown style is an error.

use rustler::{Binary, Encoder, Env, NifResult, Term};

pub mod core;
pub mod error;
pub mod index;
pub mod strategy;
mod term;

use error::IndexError;
use index::{IndexStyle, LineIndex};
use term::{counts_to_term, error_to_term, result_to_term};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// Input Decoding
// ============================================================================

/// Borrow the document as UTF-8 text
fn document_text<'a>(input: &'a Binary<'_>) -> Result<&'a str, IndexError> {
    std::str::from_utf8(input.as_slice()).map_err(|_| IndexError::InvalidUtf8)
}

/// Read a style from a binary or an atom
///
/// Atoms use underscores where the configuration literal has dashes,
/// so `:group_by_context` names `"group-by-context"`.
fn style_name(term: Term<'_>) -> NifResult<String> {
    if term.is_atom() {
        Ok(term.atom_to_string()?.replace('_', "-"))
    } else {
        term.decode::<String>()
    }
}

// ============================================================================
// Single Index
// ============================================================================

/// Build the index for one style
///
/// Returns `{:ok, result}` or `{:error, reason}`.
#[rustler::nif]
fn build_index<'a>(env: Env<'a>, input: Binary<'a>, style: Term<'a>) -> NifResult<Term<'a>> {
    let text = match document_text(&input) {
        Ok(text) => text,
        Err(e) => return Ok(error_to_term(env, &e)),
    };

    let style = match style_name(style)?.parse::<IndexStyle>() {
        Ok(style) => style,
        Err(e) => return Ok(error_to_term(env, &e)),
    };

    let result = index::build_index(text, style);
    let lines = LineIndex::new(text);
    Ok((term::ok(), result_to_term(env, &result, &lines)).encode(env))
}

/// Accepted style literals
#[rustler::nif]
fn index_styles() -> Vec<&'static str> {
    IndexStyle::ALL.iter().map(|style| style.as_str()).collect()
}

// ============================================================================
// Parallel Styles
// ============================================================================

/// Build several styles over one document in parallel
///
/// All styles are validated first; an unknown one returns its error and no
/// index is built.
#[rustler::nif(schedule = "DirtyCpu")]
fn build_indexes<'a>(env: Env<'a>, input: Binary<'a>, styles: Vec<Term<'a>>) -> NifResult<Term<'a>> {
    let text = match document_text(&input) {
        Ok(text) => text,
        Err(e) => return Ok(error_to_term(env, &e)),
    };

    let names = styles
        .into_iter()
        .map(style_name)
        .collect::<NifResult<Vec<String>>>()?;

    let results = match strategy::parallel::build_many_for(text, &names) {
        Ok(results) => results,
        Err(e) => return Ok(error_to_term(env, &e)),
    };

    let lines = LineIndex::new(text);
    let mut list = Term::list_new_empty(env);
    for result in results.iter().rev() {
        list = list.list_prepend(result_to_term(env, result, &lines));
    }
    Ok((term::ok(), list).encode(env))
}

// ============================================================================
// Document Summaries
// ============================================================================

/// Labeled message counts per translation status
#[rustler::nif]
fn status_counts<'a>(env: Env<'a>, input: Binary<'a>) -> NifResult<Term<'a>> {
    match document_text(&input) {
        Ok(text) => {
            let counts = index::count_by_status(text);
            Ok((term::ok(), counts_to_term(env, &counts)?).encode(env))
        }
        Err(e) => Ok(error_to_term(env, &e)),
    }
}

/// 0-based `{line, column}` of a byte offset
#[rustler::nif]
fn line_of_offset(input: Binary, offset: usize) -> (usize, usize) {
    LineIndex::new(input.as_slice()).position(offset)
}

// ============================================================================
// NIF Initialization
// ============================================================================

rustler::init!("Elixir.TsIndex.Native");
