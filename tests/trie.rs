use unicode_core::trie::{Error, TrieBuilder};
use unicode_core::packed::BitWidth;
use unicode_core::CodepointSet;

#[test]
fn three_stage_trie_over_codepoint_domain_matches_assignments() {
    let mut b = TrieBuilder::new(vec![8, 8, 8], BitWidth::W8, 0);
    b.put_range(0x41, 0x5B, 1).unwrap(); // A-Z
    b.put_range(0x61, 0x7B, 2).unwrap(); // a-z
    b.put_range(0x10000, 0x10010, 3).unwrap(); // a page far out
    let t = b.build(0x11_0000);

    assert_eq!(t.get(0x41), 1);
    assert_eq!(t.get(0x5A), 1);
    assert_eq!(t.get(0x61), 2);
    assert_eq!(t.get(0x10005), 3);
    assert_eq!(t.get(0x30), 0); // fill value between runs
    assert_eq!(t.get(0x10_FFFF), 0);
}

#[test]
fn identical_pages_are_deduplicated() {
    // Two widely separated all-zero runs should collapse to the same
    // committed page in the intermediate stage, but `get` still returns
    // correct values for both.
    let mut b = TrieBuilder::new(vec![8, 8, 8], BitWidth::W8, 0);
    b.put(0x200, 9).unwrap();
    b.put(0x10200, 9).unwrap();
    let t = b.build(0x11_0000);
    assert_eq!(t.get(0x200), 9);
    assert_eq!(t.get(0x10200), 9);
}

#[test]
fn codepoint_set_to_trie_matches_contains_for_every_codepoint_in_range() {
    // Trie law (spec §8): toTrie(S)[c] == S.contains(c) for all c.
    let s = CodepointSet::from_intervals(&[(0x41, 0x5B), (0x61, 0x7B), (0x10000, 0x10010)]);
    let t = s.to_trie();
    for c in 0..0x100u32 {
        assert_eq!(t.get(c), u32::from(s.contains(c)), "c={c:#x}");
    }
    for c in 0xFFF0..0x10020u32 {
        assert_eq!(t.get(c), u32::from(s.contains(c)), "c={c:#x}");
    }
}

#[test]
fn non_monotone_insertion_is_rejected() {
    let mut b = TrieBuilder::new(vec![8, 8, 8], BitWidth::W8, 0);
    b.put(100, 1).unwrap();
    let err = b.put(50, 2).unwrap_err();
    assert!(matches!(err, Error::Order { key: 50, last: 100 }));
}
