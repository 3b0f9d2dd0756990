//! Elixir Term Conversion Utilities
//!
//! Converts index results to Elixir terms. Every jump target is sent with
//! its byte offset and 0-based line so the host can navigate either way.

use rustler::{Atom, Encoder, Env, NewBinary, NifResult, Term};

use crate::core::markers::Status;
use crate::error::IndexError;
use crate::index::{ContextEntry, ContextGroup, IndexResult, LineIndex, MessageEntry, StatusCounts};

// Pre-defined atoms for efficiency - created once at compile time
rustler::atoms! {
    ok,
    error,
    contexts,
    messages,
    filtered,
    unknown_style,
    unknown_status,
    invalid_utf8,
    vanished,
    unfinished,
    obsolete,
    none,
}

/// Atom for a translation status
pub fn status_atom(status: Status) -> Atom {
    match status {
        Status::Vanished => vanished(),
        Status::Unfinished => unfinished(),
        Status::Obsolete => obsolete(),
    }
}

/// Convert an index result to a tagged tuple
///
/// - `{:contexts, [{name, offset, line}]}`
/// - `{:messages, [{name, offset, line, [{source, offset, line}]}]}`
/// - `{:filtered, status, [{source, offset, line}]}`
pub fn result_to_term<'a>(env: Env<'a>, result: &IndexResult<'_>, lines: &LineIndex) -> Term<'a> {
    match result {
        IndexResult::Contexts(entries) => {
            let mut list = Term::list_new_empty(env);
            for entry in entries.iter().rev() {
                list = list.list_prepend(context_to_term(env, entry, lines));
            }
            (contexts(), list).encode(env)
        }
        IndexResult::Messages(groups) => {
            let mut list = Term::list_new_empty(env);
            for group in groups.iter().rev() {
                list = list.list_prepend(group_to_term(env, group, lines));
            }
            (messages(), list).encode(env)
        }
        IndexResult::Filtered { status, entries } => {
            (filtered(), status_atom(*status), message_list(env, entries, lines)).encode(env)
        }
    }
}

fn context_to_term<'a>(env: Env<'a>, entry: &ContextEntry<'_>, lines: &LineIndex) -> Term<'a> {
    let name = str_to_binary(env, entry.name);
    (name, entry.offset, lines.line_of(entry.offset)).encode(env)
}

fn group_to_term<'a>(env: Env<'a>, group: &ContextGroup<'_>, lines: &LineIndex) -> Term<'a> {
    let name = str_to_binary(env, group.name);
    let children = message_list(env, &group.messages, lines);
    (name, group.offset, lines.line_of(group.offset), children).encode(env)
}

fn message_list<'a>(env: Env<'a>, entries: &[MessageEntry<'_>], lines: &LineIndex) -> Term<'a> {
    let mut list = Term::list_new_empty(env);
    for entry in entries.iter().rev() {
        let source = str_to_binary(env, entry.source);
        let tuple = (source, entry.offset, lines.line_of(entry.offset));
        list = list.list_prepend(tuple.encode(env));
    }
    list
}

/// `%{vanished: n, unfinished: n, obsolete: n, none: n}`
pub fn counts_to_term<'a>(env: Env<'a>, counts: &StatusCounts) -> NifResult<Term<'a>> {
    let pairs = [
        (vanished().encode(env), counts.vanished.encode(env)),
        (unfinished().encode(env), counts.unfinished.encode(env)),
        (obsolete().encode(env), counts.obsolete.encode(env)),
        (none().encode(env), counts.none.encode(env)),
    ];
    Term::map_from_pairs(env, &pairs)
}

/// `{:error, reason}` for an index error
pub fn error_to_term<'a>(env: Env<'a>, err: &IndexError) -> Term<'a> {
    let reason = match err {
        IndexError::UnknownStyle(value) => (unknown_style(), str_to_binary(env, value)).encode(env),
        IndexError::UnknownStatus(value) => (unknown_status(), str_to_binary(env, value)).encode(env),
        IndexError::InvalidUtf8 => invalid_utf8().encode(env),
    };
    (error(), reason).encode(env)
}

/// Convert a string to a binary term (more efficient than .encode())
#[inline]
pub fn str_to_binary<'a>(env: Env<'a>, s: &str) -> Term<'a> {
    let bytes = s.as_bytes();
    let mut binary = NewBinary::new(env, bytes.len());
    binary.as_mut_slice().copy_from_slice(bytes);
    binary.into()
}
