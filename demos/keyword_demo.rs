//! Demonstrates building an automaton and scanning it both ways.
//!
//! This example shows:
//! - Adding overlapping keywords and finalizing the automaton
//! - The difference between earliest-match and longest-match scanning
//! - Non-overlapping iteration over a whole buffer with `findall`

use keywordtree::Automaton;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("keywordtree automaton demo\n");

    println!("== earliest match vs. longest match ==");
    let mut automaton = Automaton::new();
    automaton.add(b"a")?;
    automaton.add(b"alphabet")?;
    automaton.finalize()?;

    let buf: &[u8] = b"alphabet soup";
    println!("buffer: {:?}", std::str::from_utf8(buf).unwrap());
    println!("search:      {:?}", automaton.search(buf, 0)?.map(bounds));
    println!(
        "search_long: {:?}",
        automaton.search_long(buf, 0)?.map(bounds)
    );

    println!("\n== findall over the classic he/she/his/hers automaton ==");
    let mut classic = Automaton::new();
    for pattern in [b"he".as_slice(), b"she", b"his", b"hers"] {
        classic.add(pattern)?;
    }
    classic.finalize()?;

    let buf: &[u8] = b"ushers";
    for m in classic.findall(buf)? {
        println!(
            "  match [{}, {}) = {:?}",
            m.start(),
            m.end(),
            std::str::from_utf8(&buf[m.start()..m.end()])?
        );
    }

    Ok(())
}

fn bounds(m: keywordtree::Match) -> (usize, usize) {
    (m.start(), m.end())
}
