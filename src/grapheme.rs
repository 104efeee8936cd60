//! Grapheme cluster iteration (spec §4.7), a simplified subset of UAX#29
//! covering CR/LF, Hangul syllable continuation, Regional_Indicator
//! pairing, and Extend/SpacingMark trailing consumption.

use crate::tables::{hangul_class, GraphemeTables, HangulClass};

/// One user-perceived character: a base codepoint plus any trailing
/// combining marks it absorbed. Inline-stores up to two codepoints;
/// longer clusters (e.g. a full Hangul LVT plus marks) spill to the
/// heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grapheme {
    Inline([u32; 2], u8),
    Heap(Vec<u32>),
}

impl Grapheme {
    fn new() -> Self {
        Grapheme::Inline([0; 2], 0)
    }

    fn push(&mut self, c: u32) {
        match self {
            Grapheme::Inline(buf, len) => {
                if (*len as usize) < buf.len() {
                    buf[*len as usize] = c;
                    *len += 1;
                } else {
                    let mut v: Vec<u32> = buf[..*len as usize].to_vec();
                    v.push(c);
                    *self = Grapheme::Heap(v);
                }
            }
            Grapheme::Heap(v) => v.push(c),
        }
    }

    /// The codepoints making up this cluster, in order.
    #[must_use]
    pub fn codepoints(&self) -> &[u32] {
        match self {
            Grapheme::Inline(buf, len) => &buf[..*len as usize],
            Grapheme::Heap(v) => v,
        }
    }

    /// Render the cluster back to a `String`.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.codepoints().iter().filter_map(|&c| char::from_u32(c)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakClass {
    Cr,
    Lf,
    Control,
    Extend,
    SpacingMark,
    RegionalIndicator,
    L,
    V,
    T,
    Lv,
    Lvt,
    Other,
}

fn classify(c: u32, tables: &impl GraphemeTables) -> BreakClass {
    if c == 0x000D {
        return BreakClass::Cr;
    }
    if c == 0x000A {
        return BreakClass::Lf;
    }
    if (0x1F1E6..=0x1F1FF).contains(&c) {
        return BreakClass::RegionalIndicator;
    }
    match hangul_class(c) {
        HangulClass::L => return BreakClass::L,
        HangulClass::V => return BreakClass::V,
        HangulClass::T => return BreakClass::T,
        HangulClass::Lv => return BreakClass::Lv,
        HangulClass::Lvt => return BreakClass::Lvt,
        HangulClass::None => {}
    }
    if tables.is_extend(c) {
        return BreakClass::Extend;
    }
    if tables.is_spacing_mark(c) {
        return BreakClass::SpacingMark;
    }
    if c <= 0x001F || c == 0x007F {
        return BreakClass::Control;
    }
    BreakClass::Other
}

/// True iff a grapheme cluster boundary exists between a codepoint of
/// class `before` and one of class `after` (GB3-GB9, simplified per
/// spec §4.7; GB1/GB2 — start/end of text — are the caller's
/// responsibility).
fn is_boundary(before: BreakClass, after: BreakClass) -> bool {
    use BreakClass::{Control, Cr, Extend, L, Lf, Lv, Lvt, RegionalIndicator, SpacingMark, T, V};
    match (before, after) {
        (Cr, Lf) => false,                                   // GB3
        (Cr | Lf | Control, _) | (_, Cr | Lf | Control) => true, // GB4/GB5
        (L, L | V | Lv | Lvt) => false,                      // GB6
        (Lv | V, V | T) => false,                            // GB7
        (Lvt | T, T) => false,                               // GB8
        (_, Extend | SpacingMark) => false,                   // GB9/GB9a
        (RegionalIndicator, RegionalIndicator) => false,      // GB9b (unpaired RI runs treated as one cluster)
        _ => true,
    }
}

/// Decode exactly one grapheme cluster from the front of `chars`, returning
/// it alongside the remaining, not-yet-decoded tail.
///
/// Contract violation (debug-checked, per spec §7): `chars` must not be
/// empty.
#[must_use]
pub fn decode_one<'a>(chars: &'a [u32], tables: &impl GraphemeTables) -> (Grapheme, &'a [u32]) {
    debug_assert!(!chars.is_empty(), "decode_one called on empty input");

    let mut current = Grapheme::new();
    current.push(chars[0]);
    let mut prev_class = classify(chars[0], tables);
    let mut ri_run_len = usize::from(prev_class == BreakClass::RegionalIndicator);

    let mut i = 1;
    while i < chars.len() {
        let class = classify(chars[i], tables);
        let boundary = if prev_class == BreakClass::RegionalIndicator && class == BreakClass::RegionalIndicator {
            ri_run_len % 2 == 0
        } else {
            is_boundary(prev_class, class)
        };
        if boundary {
            break;
        }
        current.push(chars[i]);
        ri_run_len = if class == BreakClass::RegionalIndicator { ri_run_len + 1 } else { 0 };
        prev_class = class;
        i += 1;
    }
    (current, &chars[i..])
}

/// Split `text` into grapheme clusters by repeatedly decoding one cluster
/// at a time with [`decode_one`].
#[must_use]
pub fn graphemes(text: &str, tables: &impl GraphemeTables) -> Vec<Grapheme> {
    let chars: Vec<u32> = text.chars().map(|c| c as u32).collect();
    let mut out = Vec::new();
    let mut rest: &[u32] = &chars;
    while !rest.is_empty() {
        let (g, tail) = decode_one(rest, tables);
        out.push(g);
        rest = tail;
    }
    out
}
