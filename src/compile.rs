//! Failure/output compiler: the breadth-first sweep that turns a bare trie
//! into a full Aho-Corasick automaton.
//!
//! Grounded on the BFS shape used by the host crate's own offset-based
//! Aho-Corasick builder (`fail(t)` found by walking `fail(s)`'s own chain
//! looking for a goto on the same byte), adjusted for this automaton's
//! single-slot, copy-if-none output field rather than a full per-state
//! output list.

use crate::state::{StateId, StateStore, ROOT};
use std::collections::VecDeque;

/// Runs the BFS failure/output sweep over `store`, then totalizes the zero
/// state's goto table. Call exactly once, after every pattern has been
/// inserted and before any scan.
pub(crate) fn compile(store: &mut StateStore) {
    let mut queue: VecDeque<StateId> = VecDeque::new();

    // Depth-1 states fail to the root; enqueue them to seed the BFS.
    for label in store.labels(ROOT) {
        let child = store.goto(ROOT, label).expect("label implies goto");
        store.set_fail(child, ROOT);
        queue.push_back(child);
    }

    while let Some(s) = queue.pop_front() {
        for label in store.labels(s) {
            let t = store.goto(s, label).expect("label implies goto");
            queue.push_back(t);

            // fail(t) := the state reached by following fail(s)'s own
            // failure chain until one of them has a goto on `label`.
            let mut u = store.fail(s).unwrap_or(ROOT);
            while u != ROOT && store.goto(u, label).is_none() {
                u = store.fail(u).unwrap_or(ROOT);
            }

            let fail_target = match store.goto(u, label) {
                Some(target) if target != t => target,
                _ => ROOT,
            };
            store.set_fail(t, fail_target);

            // Dictionary-suffix output: inherit only if this state has no
            // terminal of its own.
            if store.output(t).is_none() {
                if let Some(inherited) = store.output(fail_target) {
                    store.set_output(t, inherited);
                }
            }
        }
    }

    store.totalize_root();
}
