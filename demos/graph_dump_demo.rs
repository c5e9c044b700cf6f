//! Demonstrates rendering a finalized automaton as a DOT graph.
//!
//! Pipe the output to `dot -Tpng` (or any Graphviz renderer) to visualize
//! the trie, failure links excluded, one double-circle node per keyword.

use keywordtree::{dot, Automaton};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut automaton = Automaton::new();
    for pattern in [b"he".as_slice(), b"she", b"his", b"hers"] {
        automaton.add(pattern)?;
    }
    automaton.finalize()?;

    println!("{}", dot::dotty(&automaton, "classic_automaton"));
    Ok(())
}
