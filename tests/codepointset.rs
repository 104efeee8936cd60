use unicode_core::CodepointSet;

#[test]
fn union_of_disjoint_ranges_contains_both() {
    let a = CodepointSet::from_intervals(&[(0x41, 0x5A)]); // A-Z
    let b = CodepointSet::from_intervals(&[(0x61, 0x7A)]); // a-z
    let u = a.union(&b);
    assert!(u.contains(0x41));
    assert!(u.contains(0x7A));
    assert!(!u.contains(0x30));
}

#[test]
fn intersect_of_overlapping_ranges_keeps_overlap_only() {
    let a = CodepointSet::from_intervals(&[(0x41, 0x50)]);
    let b = CodepointSet::from_intervals(&[(0x48, 0x5A)]);
    let i = a.intersect(&b);
    assert!(!i.contains(0x41));
    assert!(i.contains(0x48));
    assert!(i.contains(0x50));
    assert!(!i.contains(0x51));
}

#[test]
fn subtract_removes_only_the_overlap() {
    let a = CodepointSet::from_intervals(&[(0x41, 0x5A)]);
    let b = CodepointSet::from_intervals(&[(0x48, 0x4F)]);
    let s = a.subtract(&b);
    assert!(s.contains(0x41));
    assert!(!s.contains(0x48));
    assert!(!s.contains(0x4F));
    assert!(s.contains(0x50));
}

#[test]
fn invert_flips_membership_across_the_full_codespace() {
    let a = CodepointSet::from_intervals(&[(0x41, 0x5A)]);
    let inv = a.invert();
    assert!(!inv.contains(0x41));
    assert!(inv.contains(0x30));
}

#[test]
fn symdiff_keeps_only_non_overlapping_members() {
    let a = CodepointSet::from_intervals(&[(0x41, 0x50)]);
    let b = CodepointSet::from_intervals(&[(0x48, 0x5A)]);
    let d = a.symdiff(&b);
    assert!(d.contains(0x41));
    assert!(!d.contains(0x48));
    assert!(d.contains(0x5A));
}
