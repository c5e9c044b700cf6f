//! Stream adapter: fans a sequence of buffers through
//! [`Automaton::findall`]/[`Automaton::findall_long`], tagging each match
//! with the buffer it came from.
//!
//! Grounded directly on the original's `chases`/`chases_long` generators:
//! `findall` is the single-buffer primitive, and this module is exactly
//! that primitive generalized over a sequence of buffers. Matches never
//! cross a buffer boundary — each buffer is scanned independently.

use crate::automaton::Automaton;
use crate::error::Result;
use crate::scanner::Match;

/// One match found while chasing a buffer sequence, paired with the index
/// of the buffer (within the sequence passed to [`chases`]) it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamMatch {
    /// Index of the source buffer within the sequence passed to [`chases`].
    pub buffer_index: usize,
    /// The match itself, relative to the start of its own buffer.
    pub matched: Match,
}

/// Runs [`Automaton::findall`] over each buffer in `buffers`, in order,
/// flattening the per-buffer matches into a single sequence tagged with
/// their originating buffer's index.
pub fn chases<'b, I>(automaton: &Automaton, buffers: I) -> Result<Vec<StreamMatch>>
where
    I: IntoIterator<Item = &'b [u8]>,
{
    let mut out = Vec::new();
    for (buffer_index, buffer) in buffers.into_iter().enumerate() {
        for matched in automaton.findall(buffer)? {
            out.push(StreamMatch {
                buffer_index,
                matched,
            });
        }
    }
    Ok(out)
}

/// Like [`chases`], but uses [`Automaton::findall_long`] per buffer.
pub fn chases_long<'b, I>(automaton: &Automaton, buffers: I) -> Result<Vec<StreamMatch>>
where
    I: IntoIterator<Item = &'b [u8]>,
{
    let mut out = Vec::new();
    for (buffer_index, buffer) in buffers.into_iter().enumerate() {
        for matched in automaton.findall_long(buffer)? {
            out.push(StreamMatch {
                buffer_index,
                matched,
            });
        }
    }
    Ok(out)
}
