//! Trie construction: inserts patterns into a [`StateStore`] ahead of
//! failure/output compilation.

use crate::error::{AutomatonError, Result};
use crate::state::{StateStore, ROOT};

/// Inserts `pattern` into `store`, creating states as needed.
///
/// Walks the pattern byte by byte from the zero state, descending an
/// existing goto edge where one exists and allocating a fresh state
/// otherwise. The final state's output length is set to `pattern.len()`;
/// re-inserting an identical pattern reaches the same terminal state and
/// simply overwrites its output length with the same value.
pub(crate) fn insert(store: &mut StateStore, pattern: &[u8]) -> Result<()> {
    if pattern.is_empty() {
        return Err(AutomatonError::EmptyPattern);
    }

    let mut current = ROOT;
    for &byte in pattern {
        current = match store.goto(current, byte) {
            Some(next) => next,
            None => {
                let next = store.allocate();
                store.set_goto(current, byte, next);
                next
            }
        };
    }

    store.set_output(current, pattern.len() as u32);
    Ok(())
}
