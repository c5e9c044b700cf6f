//! DOT-format graph dump of a finalized automaton.
//!
//! A pure traversal over the public introspection surface ([`crate::State`])
//! — it reads an [`Automaton`] the same way any external consumer would, with
//! no access to the state store itself. Grounded directly on the original
//! `graphviz.dotty()`: double-circle nodes for every state with a defined
//! output, plain circles otherwise, one edge per goto labeled with the byte
//! that produces it. Failure links are not drawn, matching the original.

use crate::automaton::{Automaton, State};
use std::collections::HashSet;
use std::fmt::Write as _;

/// Renders `automaton` as a DOT digraph named `name`.
///
/// Bytes are rendered as their ASCII character when printable, or as a
/// `\xHH` escape otherwise, since goto labels are arbitrary bytes rather
/// than Unicode text.
pub fn dotty(automaton: &Automaton, name: &str) -> String {
    let zero = automaton.zero_state();

    let mut visited = HashSet::new();
    let mut output_states = Vec::new();
    let mut edges = Vec::new();
    collect(&zero, &mut visited, &mut output_states, &mut edges);

    let mut out = String::new();
    let _ = writeln!(out, "digraph {name} {{");
    let _ = writeln!(out, "    rankdir=LR;");
    let _ = writeln!(out, "    size=\"8,11\"");
    let _ = writeln!(out, "    orientation=land;");
    let _ = write!(out, "    node [shape = doublecircle];");
    for s in &output_states {
        let _ = write!(out, " {}", state_name(*s));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "    node [shape = circle];");
    for (from, label, to) in &edges {
        let _ = writeln!(
            out,
            "    {} -> {} [ label = \"{}\" ]",
            state_name(*from),
            state_name(*to),
            escape_byte(*label)
        );
    }
    let _ = writeln!(out, "}}");
    out
}

fn state_name(id: u32) -> String {
    format!("STATE_{id}")
}

fn escape_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        (byte as char).to_string()
    } else {
        format!("\\x{byte:02x}")
    }
}

/// Depth-first walk over every state reachable from `zero` by goto edges,
/// skipping edges back into the zero state (self-loops from totalization
/// carry no information and the original filters them the same way).
fn collect(
    state: &State<'_>,
    visited: &mut HashSet<u32>,
    output_states: &mut Vec<u32>,
    edges: &mut Vec<(u32, u8, u32)>,
) {
    if !visited.insert(state.id()) {
        return;
    }
    if state.output().is_some() {
        output_states.push(state.id());
    }
    for label in state.labels() {
        let child = state
            .goto(label as i32)
            .expect("label came from this state's own labels")
            .expect("label implies a defined goto");
        if child.id() == 0 {
            continue;
        }
        edges.push((state.id(), label, child.id()));
        collect(&child, visited, output_states, edges);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn automaton(patterns: &[&[u8]]) -> Automaton {
        let mut a = Automaton::new();
        for p in patterns {
            a.add(p).unwrap();
        }
        a.finalize().unwrap();
        a
    }

    #[test]
    fn dump_contains_every_pattern_as_a_double_circle_state() {
        let a = automaton(&[b"he", b"she", b"his", b"hers"]);
        let dot = dotty(&a, "test_automaton");

        assert!(dot.starts_with("digraph test_automaton {"));
        assert!(dot.trim_end().ends_with('}'));
        // 4 patterns means 4 output states, each a doublecircle node.
        let doublecircle_line = dot
            .lines()
            .find(|l| l.contains("doublecircle"))
            .expect("doublecircle node line present");
        assert_eq!(doublecircle_line.matches("STATE_").count(), 4);
    }

    #[test]
    fn edges_are_labeled_with_the_triggering_byte() {
        let a = automaton(&[b"he"]);
        let dot = dotty(&a, "g");
        assert!(dot.contains("label = \"h\""));
        assert!(dot.contains("label = \"e\""));
    }

    #[test]
    fn non_printable_bytes_are_escaped() {
        let a = automaton(&[b"\0\x01"]);
        let dot = dotty(&a, "g");
        assert!(dot.contains("\\x00"));
        assert!(dot.contains("\\x01"));
    }
}
