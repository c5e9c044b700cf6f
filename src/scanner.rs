//! Scanning engine: the two search disciplines layered over the compiled
//! automaton, reading directly from the [`StateStore`] built by
//! [`crate::trie`] and [`crate::compile`].

use crate::error::{AutomatonError, Result};
use crate::state::{StateId, StateStore, ROOT};

/// A half-open byte range `(start, end)` into a scanned buffer, with
/// `0 <= start < end <= buf.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    start: usize,
    end: usize,
}

impl Match {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    /// Start of the match, inclusive.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End of the match, exclusive.
    pub fn end(&self) -> usize {
        self.end
    }
}

/// Steps `cursor` over `byte`, following failure links until a goto is
/// found. Assumes the automaton is finalized, so the walk always
/// terminates at the (now total) zero state.
fn step(store: &StateStore, cursor: StateId, byte: u8) -> StateId {
    let mut cursor = cursor;
    while cursor != ROOT && store.goto(cursor, byte).is_none() {
        cursor = store.fail(cursor).unwrap_or(ROOT);
    }
    store.goto(cursor, byte).unwrap_or(ROOT)
}

/// Like [`step`], but also reports whether `cursor` had a goto on `byte`
/// directly, with no failure link followed. `search_long` uses this to tell
/// "descend deeper into the same still-open pattern" (direct goto, e.g.
/// `wood` into `woodchuck`) apart from "this path is exhausted, fall back to
/// whatever shorter match continues from here" (at least one failure link
/// taken, e.g. `pythonperl` into `scheme` through `perl`'s own failure link).
fn step_reporting_fallback(store: &StateStore, cursor: StateId, byte: u8) -> (StateId, bool) {
    match store.goto(cursor, byte) {
        Some(next) => (next, true),
        None => (step(store, cursor, byte), false),
    }
}

fn checked_start(buf_len: usize, start: i64) -> Result<Option<usize>> {
    if start < 0 {
        return Err(AutomatonError::NegativeStart);
    }
    let start = start as usize;
    if start >= buf_len {
        return Ok(None);
    }
    Ok(Some(start))
}

/// Earliest-match scan: the first `(start, end)` the automaton reaches,
/// scanning `buf[start..]`.
pub(crate) fn search(store: &StateStore, buf: &[u8], start: i64) -> Result<Option<Match>> {
    let Some(start) = checked_start(buf.len(), start)? else {
        return Ok(None);
    };

    let mut cursor = ROOT;
    for (offset, &byte) in buf[start..].iter().enumerate() {
        cursor = step(store, cursor, byte);
        if let Some(len) = store.output(cursor) {
            let end = start + offset + 1;
            return Ok(Some(Match::new(end - len as usize, end)));
        }
    }
    Ok(None)
}

/// Longest-match scan: extends the earliest match's end for as long as the
/// automaton keeps descending directly deeper into the pattern that
/// produced it.
///
/// Once a candidate is recorded, the scan keeps going only while each next
/// byte has a direct goto from the cursor (still the same still-open
/// pattern, e.g. `wood` descending into `woodchuck`). The moment a byte
/// forces a failure-link fallback, the path rooted at the candidate's start
/// is exhausted — continuing would chase a new, later-starting match rather
/// than extend this one — so the recorded candidate is returned without
/// taking that step. If the buffer ends first, the recorded candidate is
/// returned.
///
/// A descent can reach a state whose output is *inherited* (a
/// dictionary-suffix link) rather than its own terminal, and that inherited
/// pattern can begin strictly later than the recorded candidate — e.g.
/// descending from `ab` into `abc`, where `abc` has no terminal of its own
/// but inherits `bc`'s output. Such a later-starting output is a different
/// occurrence, not an extension of the candidate, so it never replaces it;
/// only an output whose implied start is at or before the candidate's own
/// start can extend the candidate's end.
pub(crate) fn search_long(store: &StateStore, buf: &[u8], start: i64) -> Result<Option<Match>> {
    let Some(start) = checked_start(buf.len(), start)? else {
        return Ok(None);
    };

    let mut cursor = ROOT;
    let mut candidate: Option<Match> = None;

    for (offset, &byte) in buf[start..].iter().enumerate() {
        let (next, direct) = step_reporting_fallback(store, cursor, byte);
        if !direct && candidate.is_some() {
            return Ok(candidate);
        }
        cursor = next;

        if let Some(len) = store.output(cursor) {
            let end = start + offset + 1;
            let match_start = end - len as usize;
            match candidate {
                Some(c) if match_start > c.start() => {}
                _ => candidate = Some(Match::new(match_start, end)),
            }
        }
    }
    Ok(candidate)
}
