use unicode_core::tables::DefaultTables;
use unicode_core::{case, nfc, nfd, nfkc, nfkd};

#[test]
fn nfc_composes_combining_diaeresis() {
    assert_eq!(nfc("A\u{0308}ffin", &DefaultTables), "\u{00C4}ffin");
}

#[test]
fn nfd_decomposes_precomposed_letter() {
    assert_eq!(nfd("\u{00C4}ffin", &DefaultTables), "A\u{0308}ffin");
}

#[test]
fn nfkd_reduces_superscripts_to_plain_digits() {
    assert_eq!(nfkd("2\u{00B9}\u{2070}", &DefaultTables), "210");
}

#[test]
fn nfkc_of_a_compatibility_only_codepoint_has_no_canonical_inverse() {
    // Superscript two has no canonical composition target, so NFKC still
    // reduces it to plain "2" rather than leaving it or re-composing.
    assert_eq!(nfkc("\u{00B2}", &DefaultTables), "2");
}

#[test]
fn hangul_jamo_sequence_composes_to_precomposed_syllable() {
    let input: String = ['\u{1100}', '\u{1161}', '\u{11A8}'].iter().collect();
    assert_eq!(nfc(&input, &DefaultTables), "\u{AC01}");
}

#[test]
fn hangul_precomposed_syllable_decomposes_to_jamo() {
    let expected: String = ['\u{1100}', '\u{1161}', '\u{11A8}'].iter().collect();
    assert_eq!(nfd("\u{AC01}", &DefaultTables), expected);
}

#[test]
fn case_insensitive_comparison_handles_sharp_s_expansion() {
    assert_eq!(case::icmp("strasse", "stra\u{00DF}e", &DefaultTables), std::cmp::Ordering::Equal);
}

#[test]
fn nfc_nfd_round_trip_is_stable_across_plain_text() {
    let text = "hello, world! 123";
    assert_eq!(nfc(text, &DefaultTables), text);
    assert_eq!(nfd(text, &DefaultTables), text);
}
