//! Integration tests for the automaton's construction and scanning
//! correctness, covering the literal buffers used to develop this crate's
//! failure/output compiler and scanner.

use keywordtree::{Automaton, AutomatonError};

fn automaton(patterns: &[&[u8]]) -> Automaton {
    let mut a = Automaton::new();
    for p in patterns {
        a.add(p).unwrap();
    }
    a.finalize().unwrap();
    a
}

#[test]
fn keyword_as_a_prefix_of_a_longer_one() {
    let a = automaton(&[b"foobar", b"foo", b"bar"]);
    assert_eq!(a.search(b"xxxfooyyy", 0).unwrap().map(bounds), Some((3, 6)));
    assert_eq!(a.search(b"foo", 0).unwrap().map(bounds), Some((0, 3)));
    assert_eq!(a.search(b"xxxbaryyy", 0).unwrap().map(bounds), Some((3, 6)));
}

#[test]
fn earliest_versus_longest_on_overlapping_patterns() {
    let a = automaton(&[b"a", b"alphabet"]);
    assert_eq!(
        a.search(b"alphabet soup", 0).unwrap().map(bounds),
        Some((0, 1))
    );
    assert_eq!(
        a.search_long(b"alphabet soup", 0).unwrap().map(bounds),
        Some((0, 8))
    );
    assert_eq!(
        a.search_long(b"yummy, I see an alphabet soup bowl", 0)
            .unwrap()
            .map(bounds),
        Some((13, 14))
    );
}

#[test]
fn startpos_resumes_mid_buffer() {
    let a = automaton(&[b"wood", b"woodchuck"]);
    let buf: &[u8] = b"howmuchwoodwouldawoodchuckchuck";
    assert_eq!(a.search(buf, 0).unwrap().map(bounds), Some((7, 11)));
    assert_eq!(a.search(buf, 11).unwrap().map(bounds), Some((17, 21)));
    assert_eq!(a.search_long(buf, 11).unwrap().map(bounds), Some((17, 26)));
}

#[test]
fn the_classic_paper_automaton() {
    let a = automaton(&[b"he", b"she", b"his", b"hers"]);
    assert_eq!(a.search(b"ushers", 0).unwrap().map(bounds), Some((1, 4)));

    // Overlapping iteration resumes one past the previous match's start, so
    // "he" (sharing "she"'s start+1) and later "hers" both turn up too.
    let all: Vec<(usize, usize)> = a
        .findall_overlapping(b"ushers")
        .unwrap()
        .iter()
        .map(|m| (m.start(), m.end()))
        .collect();
    assert_eq!(all, vec![(1, 4), (2, 4)]);
}

#[test]
fn long_match_ignores_a_later_starting_inherited_output() {
    // "abc" carries no terminal of its own; it inherits "bc"'s output as its
    // dictionary-suffix link, which begins one byte later than the "ab"
    // candidate already recorded. A correct `search_long` pins the
    // candidate's start and never replaces it with a later-starting match.
    let a = automaton(&[b"ab", b"abcxy", b"bc"]);
    assert_eq!(a.search(b"abcx", 0).unwrap().map(bounds), Some((0, 2)));
    assert_eq!(a.search_long(b"abcx", 0).unwrap().map(bounds), Some((0, 2)));
    // Genuinely extending into the full "abcxy" pattern still works.
    assert_eq!(a.search_long(b"abcxy", 0).unwrap().map(bounds), Some((0, 5)));
}

#[test]
fn findall_and_findall_long_on_five_overlapping_keywords() {
    let a = automaton(&[b"python", b"scheme", b"perl", b"java", b"pythonperl"]);
    let buf: &[u8] = b"pythonperlschemejava";

    let all: Vec<(usize, usize)> = a.findall(buf).unwrap().iter().map(|m| (m.start(), m.end())).collect();
    assert_eq!(all, vec![(0, 6), (6, 10), (10, 16), (16, 20)]);

    let all_long: Vec<(usize, usize)> = a.findall_long(buf).unwrap().iter().map(|m| (m.start(), m.end())).collect();
    assert_eq!(all_long, vec![(0, 10), (10, 16), (16, 20)]);
}

#[test]
fn embedded_nul_bytes_are_ordinary_bytes() {
    let a = automaton(&[b"\0\0\0"]);
    let buf: &[u8] = b"\0\0\0\0\0\0\0\0";
    assert_eq!(a.search(buf, 0).unwrap().map(bounds), Some((0, 3)));
    assert_eq!(a.search(buf, 3).unwrap().map(bounds), Some((3, 6)));
    assert_eq!(a.search(buf, 6).unwrap(), None);
}

#[test]
fn negative_start_is_rejected() {
    let a = automaton(&[b"hello world"]);
    assert_eq!(a.search(b"blah", -1), Err(AutomatonError::NegativeStart));
    assert_eq!(
        a.search_long(b"blah", -1),
        Err(AutomatonError::NegativeStart)
    );
}

#[test]
fn lifecycle_errors_are_reported_for_every_case() {
    let mut a = Automaton::new();
    assert_eq!(a.add(b""), Err(AutomatonError::EmptyPattern));
    assert_eq!(a.finalize(), Err(AutomatonError::NoPatterns));

    a.add(b"ok").unwrap();
    assert_eq!(a.search(b"ok", 0), Err(AutomatonError::NotFinalized));

    a.finalize().unwrap();
    assert_eq!(a.finalize(), Err(AutomatonError::AlreadyFinalized));
}

#[test]
fn single_pattern_round_trips_through_itself() {
    let pattern: &[u8] = b"supercalifragilisticexpialidocious";
    let a = automaton(&[pattern]);
    assert_eq!(
        a.search(pattern, 0).unwrap().map(bounds),
        Some((0, pattern.len()))
    );
    assert_eq!(
        a.search_long(pattern, 0).unwrap().map(bounds),
        Some((0, pattern.len()))
    );
}

#[test]
fn dot_dump_round_trips_through_the_introspection_surface() {
    let a = automaton(&[b"he", b"she", b"his", b"hers"]);
    let dot = keywordtree::dot::dotty(&a, "classic");
    assert!(dot.contains("digraph classic"));
    assert!(dot.contains("doublecircle"));
}

#[test]
fn stream_adapter_tags_matches_with_their_buffer() {
    let a = automaton(&[b"foo", b"bar"]);
    let buffers: Vec<&[u8]> = vec![b"xfooy", b"xbarx"];
    let found = keywordtree::stream::chases(&a, buffers.iter().copied()).unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].buffer_index, 0);
    assert_eq!(found[1].buffer_index, 1);
}

fn bounds(m: keywordtree::Match) -> (usize, usize) {
    (m.start(), m.end())
}
