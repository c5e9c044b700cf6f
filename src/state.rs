//! State store for the Aho-Corasick automaton.
//!
//! Owns the set of states and the parent/child edges of the trie. States are
//! addressed by a stable integer id assigned in insertion order; id 0 is
//! always the root (the *zero state*). All inter-state references — goto
//! edges and failure links — are ids, never borrowed pointers, so the store
//! can be grown with a `&mut self` method while older ids stay valid.

use std::collections::HashMap;

/// Identifier of a state, stable for the lifetime of the automaton.
pub type StateId = u32;

/// Id of the zero state (the trie root).
pub const ROOT: StateId = 0;

/// Per-state transition table.
///
/// Ordinary states stay sparse: at most a few dozen of the 256 possible
/// bytes ever have an edge, and a small hash map serves O(1) lookup and
/// cheap ascending enumeration (sort the keys) without paying for a 1KB
/// array per state. The zero state is promoted to `Dense` once finalization
/// totalizes its goto table, since every failure-chain walk in the scanner
/// bottoms out there and a direct index beats a hash lookup on the hottest
/// node in the automaton.
#[derive(Debug, Clone)]
enum Transitions {
    Sparse(HashMap<u8, StateId>),
    Dense(Box<[StateId; 256]>),
}

impl Transitions {
    fn get(&self, byte: u8) -> Option<StateId> {
        match self {
            Transitions::Sparse(map) => map.get(&byte).copied(),
            Transitions::Dense(table) => Some(table[byte as usize]),
        }
    }

    fn set(&mut self, byte: u8, target: StateId) {
        match self {
            Transitions::Sparse(map) => {
                map.insert(byte, target);
            }
            Transitions::Dense(table) => table[byte as usize] = target,
        }
    }

    fn labels(&self) -> Vec<u8> {
        match self {
            Transitions::Sparse(map) => {
                let mut labels: Vec<u8> = map.keys().copied().collect();
                labels.sort_unstable();
                labels
            }
            Transitions::Dense(_) => (0..=255u8).collect(),
        }
    }
}

/// A single node of the trie/failure graph.
#[derive(Debug, Clone)]
struct State {
    transitions: Transitions,
    /// Failure link; `None` iff this is the zero state.
    fail: Option<StateId>,
    /// Output length: this state's own pattern length, or (after
    /// finalization) the inherited dictionary-suffix output. `None` means
    /// no pattern ends here and no suffix of the path does either.
    output: Option<u32>,
}

impl State {
    fn new() -> Self {
        Self {
            transitions: Transitions::Sparse(HashMap::new()),
            fail: None,
            output: None,
        }
    }
}

/// Owns every state of the automaton, addressed by [`StateId`].
#[derive(Debug, Clone)]
pub(crate) struct StateStore {
    states: Vec<State>,
}

impl StateStore {
    /// A fresh store containing only the zero state.
    pub(crate) fn new() -> Self {
        Self {
            states: vec![State::new()],
        }
    }

    /// Number of states currently in the store (including the root).
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// Allocates a new, edge-less state and returns its id.
    pub(crate) fn allocate(&mut self) -> StateId {
        self.states.push(State::new());
        (self.states.len() - 1) as StateId
    }

    /// Whether `id` names a state currently in the store.
    pub(crate) fn contains(&self, id: StateId) -> bool {
        (id as usize) < self.states.len()
    }

    /// Successor of `state` on `byte`, if a goto edge for it is defined.
    pub(crate) fn goto(&self, state: StateId, byte: u8) -> Option<StateId> {
        self.states[state as usize].transitions.get(byte)
    }

    /// Defines (or overwrites) the goto edge for `byte` out of `state`.
    pub(crate) fn set_goto(&mut self, state: StateId, byte: u8, target: StateId) {
        self.states[state as usize].transitions.set(byte, target);
    }

    /// Failure link of `state`; `None` iff `state` is the zero state (or the
    /// link has not been computed yet).
    pub(crate) fn fail(&self, state: StateId) -> Option<StateId> {
        self.states[state as usize].fail
    }

    /// Sets the failure link of `state`.
    pub(crate) fn set_fail(&mut self, state: StateId, fail: StateId) {
        self.states[state as usize].fail = Some(fail);
    }

    /// Output length recorded at `state`, if any.
    pub(crate) fn output(&self, state: StateId) -> Option<u32> {
        self.states[state as usize].output
    }

    /// Sets the output length recorded at `state`.
    pub(crate) fn set_output(&mut self, state: StateId, output: u32) {
        self.states[state as usize].output = Some(output);
    }

    /// Ascending bytes for which `state` has a defined goto edge.
    pub(crate) fn labels(&self, state: StateId) -> Vec<u8> {
        self.states[state as usize].transitions.labels()
    }

    /// Promotes the zero state's transition table to a dense 256-entry
    /// array and fills every byte that still lacks a goto edge with a
    /// self-loop. Called once, by the failure/output compiler, after the
    /// BFS sweep completes.
    pub(crate) fn totalize_root(&mut self) {
        let mut table = Box::new([ROOT; 256]);
        if let Transitions::Sparse(map) = &self.states[ROOT as usize].transitions {
            for (&byte, &target) in map.iter() {
                table[byte as usize] = target;
            }
        }
        self.states[ROOT as usize].transitions = Transitions::Dense(table);
    }
}
