//! keywordtree - Multi-keyword Aho-Corasick automaton for scanning raw byte streams
//!
//! `keywordtree` builds a single automaton out of any number of byte-string
//! patterns and scans buffers against all of them in one linear pass,
//! regardless of how many patterns were added. It is a from-scratch
//! implementation of the classic Aho-Corasick construction: trie, failure
//! links, dictionary-suffix output propagation, and two scan disciplines
//! (earliest match and longest match) layered over a single stepping
//! primitive.
//!
//! # Quick Start
//!
//! ```rust
//! use keywordtree::Automaton;
//!
//! let mut automaton = Automaton::new();
//! automaton.add(b"he")?;
//! automaton.add(b"she")?;
//! automaton.add(b"his")?;
//! automaton.add(b"hers")?;
//! automaton.finalize()?;
//!
//! let matches = automaton.findall(b"hishers")?;
//! assert_eq!(matches.len(), 2); // "his" at [0, 3), then "he" at [3, 5)
//! # Ok::<(), keywordtree::AutomatonError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  Automaton (construct → add* → finalize)   │
//! ├───────────────────────────────────────────┤
//! │  StateStore   — states, goto edges         │
//! │  trie::insert — builds the bare trie       │
//! │  compile      — BFS failure/output sweep   │
//! │  scanner      — search / search_long       │
//! └───────────────────────────────────────────┘
//!          ↓ read-only after finalize()
//! ┌───────────────────────────────────────────┐
//! │  State introspection, dot::dotty,          │
//! │  stream::chases / chases_long              │
//! └───────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Single linear scan**: matching cost is independent of pattern count.
//! - **Two scan disciplines**: earliest match (`search`) and longest match
//!   (`search_long`), plus their `findall`/`findall_long` iteration and
//!   overlapping variants.
//! - **Raw bytes, not Unicode text**: patterns and buffers are `&[u8]`; an
//!   embedded NUL is just another byte.
//! - **Introspection**: a read-only state-graph view usable before or after
//!   finalization, plus a DOT graph dump for visualizing a built automaton.
//! - **Stream adapter**: fan a sequence of buffers through `findall` without
//!   matches crossing buffer boundaries.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod automaton;
mod compile;
/// DOT-format graph dump of a finalized automaton.
pub mod dot;
/// Error types for automaton operations.
pub mod error;
mod scanner;
mod state;
/// Fans a sequence of buffers through `findall`/`findall_long`.
pub mod stream;
mod trie;

pub use crate::automaton::{Automaton, State};
pub use crate::error::{AutomatonError, Result};
pub use crate::scanner::Match;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library major version.
pub const VERSION_MAJOR: u32 = 0;

/// Library minor version.
pub const VERSION_MINOR: u32 = 1;

/// Library patch version.
pub const VERSION_PATCH: u32 = 0;
