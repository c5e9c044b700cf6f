//! The public [`Automaton`] type: ties the state store, trie builder,
//! failure/output compiler and scanner together behind a single construct →
//! add → finalize → scan lifecycle, and exposes a read-only introspection
//! surface over the finalized graph.

use crate::compile::compile;
use crate::error::{AutomatonError, Result};
use crate::scanner::{search, search_long, Match};
use crate::state::{StateId, StateStore, ROOT};
use crate::trie::insert;

/// A multi-keyword Aho-Corasick automaton over raw byte patterns.
///
/// Mutable during construction (`add`), then finalized once (`finalize`)
/// into a read-only object that can be scanned (`search`, `search_long`,
/// `findall`, `findall_long`) or traversed (`zero_state`, `state_by_id`).
#[derive(Debug, Clone)]
pub struct Automaton {
    store: StateStore,
    finalized: bool,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// A fresh automaton with no patterns and an unfinalized zero state.
    pub fn new() -> Self {
        Self {
            store: StateStore::new(),
            finalized: false,
        }
    }

    /// Adds `pattern` to the trie.
    ///
    /// Fails with [`AutomatonError::EmptyPattern`] for a zero-length
    /// pattern. Re-adding an identical pattern is a no-op past the first
    /// insertion. Valid only before [`Automaton::finalize`].
    pub fn add(&mut self, pattern: &[u8]) -> Result<()> {
        insert(&mut self.store, pattern)
    }

    /// Runs the failure/output compiler and marks the automaton read-only.
    ///
    /// Fails with [`AutomatonError::NoPatterns`] if no pattern has ever been
    /// added, or [`AutomatonError::AlreadyFinalized`] on a second call.
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Err(AutomatonError::AlreadyFinalized);
        }
        if self.store.len() == 1 {
            return Err(AutomatonError::NoPatterns);
        }
        compile(&mut self.store);
        self.finalized = true;
        Ok(())
    }

    fn require_finalized(&self) -> Result<()> {
        if self.finalized {
            Ok(())
        } else {
            Err(AutomatonError::NotFinalized)
        }
    }

    /// Earliest-match scan of `buf[start..]`. See the module-level docs on
    /// [`crate::scanner`] for the exact walk.
    pub fn search(&self, buf: &[u8], start: i64) -> Result<Option<Match>> {
        self.require_finalized()?;
        search(&self.store, buf, start)
    }

    /// Longest-match scan of `buf[start..]`.
    pub fn search_long(&self, buf: &[u8], start: i64) -> Result<Option<Match>> {
        self.require_finalized()?;
        search_long(&self.store, buf, start)
    }

    /// Every non-overlapping earliest match in `buf`, left to right.
    ///
    /// Pure composition over [`Automaton::search`]: each call resumes at the
    /// previous match's end, so returned ranges never overlap.
    pub fn findall(&self, buf: &[u8]) -> Result<Vec<Match>> {
        self.require_finalized()?;
        let mut matches = Vec::new();
        let mut cursor: i64 = 0;
        while let Some(m) = search(&self.store, buf, cursor)? {
            cursor = m.end() as i64;
            matches.push(m);
        }
        Ok(matches)
    }

    /// Every non-overlapping longest match in `buf`, left to right.
    pub fn findall_long(&self, buf: &[u8]) -> Result<Vec<Match>> {
        self.require_finalized()?;
        let mut matches = Vec::new();
        let mut cursor: i64 = 0;
        while let Some(m) = search_long(&self.store, buf, cursor)? {
            cursor = m.end() as i64;
            matches.push(m);
        }
        Ok(matches)
    }

    /// Every overlapping earliest match in `buf`, left to right: each scan
    /// resumes one byte past the previous match's start rather than at its
    /// end, so returned ranges may overlap.
    pub fn findall_overlapping(&self, buf: &[u8]) -> Result<Vec<Match>> {
        self.require_finalized()?;
        let mut matches = Vec::new();
        let mut cursor: i64 = 0;
        while let Some(m) = search(&self.store, buf, cursor)? {
            cursor = m.start() as i64 + 1;
            matches.push(m);
        }
        Ok(matches)
    }

    /// Every overlapping longest match in `buf`, left to right.
    pub fn findall_long_overlapping(&self, buf: &[u8]) -> Result<Vec<Match>> {
        self.require_finalized()?;
        let mut matches = Vec::new();
        let mut cursor: i64 = 0;
        while let Some(m) = search_long(&self.store, buf, cursor)? {
            cursor = m.start() as i64 + 1;
            matches.push(m);
        }
        Ok(matches)
    }

    /// A handle onto the zero state, valid whether or not the automaton has
    /// been finalized yet.
    pub fn zero_state(&self) -> State<'_> {
        State {
            automaton: self,
            id: ROOT,
        }
    }

    /// A handle onto the state named by `id`.
    ///
    /// Fails with [`AutomatonError::InvalidStateHandle`] if `id` names no
    /// state in this automaton. Intended for readers that enumerate every
    /// reachable state (a graph dumper) rather than walk down from the root.
    pub fn state_by_id(&self, id: u32) -> Result<State<'_>> {
        if self.store.contains(id) {
            Ok(State {
                automaton: self,
                id,
            })
        } else {
            Err(AutomatonError::InvalidStateHandle)
        }
    }

    /// Number of states currently in the automaton, including the root.
    pub fn state_count(&self) -> usize {
        self.store.len()
    }

    /// Whether [`Automaton::finalize`] has been called successfully.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

/// A read-only handle onto one state of an [`Automaton`], borrowed from it
/// and valid for as long as it is.
#[derive(Debug, Clone, Copy)]
pub struct State<'a> {
    automaton: &'a Automaton,
    id: StateId,
}

impl<'a> State<'a> {
    /// This state's stable numeric id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Ascending bytes for which this state has a defined goto edge.
    pub fn labels(&self) -> Vec<u8> {
        self.automaton.store.labels(self.id)
    }

    /// The successor state reached from here on `byte`.
    ///
    /// `byte` is a wider integer than `u8` specifically so a caller can pass
    /// an out-of-range ordinal and get back
    /// [`AutomatonError::ByteOutOfRange`] instead of a value that can't be
    /// represented.
    pub fn goto(&self, byte: i32) -> Result<Option<State<'a>>> {
        if !(0..=255).contains(&byte) {
            return Err(AutomatonError::ByteOutOfRange);
        }
        Ok(self
            .automaton
            .store
            .goto(self.id, byte as u8)
            .map(|id| State {
                automaton: self.automaton,
                id,
            }))
    }

    /// This state's failure link, or `None` at the zero state (or before
    /// finalization, when failure links have not been computed yet).
    pub fn fail(&self) -> Option<State<'a>> {
        self.automaton.store.fail(self.id).map(|id| State {
            automaton: self.automaton,
            id,
        })
    }

    /// The output length recorded at this state, if any.
    pub fn output(&self) -> Option<u32> {
        self.automaton.store.output(self.id)
    }
}

impl<'a> PartialEq for State<'a> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.automaton, other.automaton) && self.id == other.id
    }
}

impl<'a> Eq for State<'a> {}
