//! Canonical composition (NFC/NFKC), including a second algorithmic pass
//! for Hangul L+V → LV / LV+T → LVT recomposition (spec §4.5
//! "Composition").

use crate::tables::{
    hangul_class, CombiningClassTable, CompositionTable, HangulClass, HANGUL_S_BASE,
    HANGUL_T_BASE, HANGUL_T_COUNT, HANGUL_V_COUNT,
};

/// Pairwise-compose a canonically-ordered, decomposed sequence, following
/// the spec's starter/`accumCC` blocking model, then recompose Hangul
/// jamo runs algorithmically. Returns the composed sequence with
/// consumed positions removed.
#[must_use]
pub fn compose_sequence<T>(mut seq: Vec<u32>, tables: &T) -> Vec<u32>
where
    T: CombiningClassTable + CompositionTable,
{
    let mut deleted = vec![false; seq.len()];
    compose_pairwise(&mut seq, &mut deleted, tables);
    recompose_hangul(&mut seq, &mut deleted);
    seq.into_iter().zip(deleted).filter_map(|(c, del)| (!del).then_some(c)).collect()
}

fn compose_pairwise<T>(seq: &mut [u32], deleted: &mut [bool], tables: &T)
where
    T: CombiningClassTable + CompositionTable,
{
    let mut start = 0usize;
    while start < seq.len() && tables.combining_class(seq[start]) != 0 {
        start += 1;
    }
    if start >= seq.len() {
        return;
    }
    let mut accum_cc: u8 = 0;
    let mut i = start + 1;
    while i < seq.len() {
        if deleted[i] {
            i += 1;
            continue;
        }
        let cc_i = tables.combining_class(seq[i]);
        if cc_i == 0 {
            start = i;
            accum_cc = 0;
            i += 1;
            continue;
        }
        if cc_i > accum_cc {
            match tables.compose(seq[start], seq[i]) {
                Some(composed) => {
                    seq[start] = composed;
                    deleted[i] = true;
                }
                None => accum_cc = cc_i,
            }
        }
        i += 1;
    }
}

/// A second, Hangul-specific pass: `compositionJump` has no entries for
/// jamo pairs (Hangul composition is computed, never tabulated, per
/// §4.5), so L+V and LV+T recomposition runs independently over whatever
/// the pairwise pass above left behind.
fn recompose_hangul(seq: &mut [u32], deleted: &mut [bool]) {
    let mut i = 0;
    while i < seq.len() {
        if deleted[i] {
            i += 1;
            continue;
        }
        let Some(mut j) = next_live(seq, deleted, i + 1) else { break };
        loop {
            let a = seq[i];
            let b = seq[j];
            if let (HangulClass::L, HangulClass::V) = (hangul_class(a), hangul_class(b)) {
                let l = a - crate::tables::HANGUL_L_BASE;
                let v = b - crate::tables::HANGUL_V_BASE;
                seq[i] = HANGUL_S_BASE + (l * HANGUL_V_COUNT + v) * HANGUL_T_COUNT;
                deleted[j] = true;
                match next_live(seq, deleted, j + 1) {
                    Some(next) => {
                        j = next;
                        continue;
                    }
                    None => break,
                }
            }
            if let (HangulClass::Lv, HangulClass::T) = (hangul_class(a), hangul_class(b)) {
                seq[i] = a + (b - HANGUL_T_BASE);
                deleted[j] = true;
            }
            break;
        }
        i += 1;
    }
}

fn next_live(seq: &[u32], deleted: &[bool], from: usize) -> Option<usize> {
    (from..seq.len()).find(|&k| !deleted[k])
}
