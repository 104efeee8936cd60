//! Canonical / compatibility decomposition, including algorithmic Hangul
//! syllable splitting (spec §4.5 "Decomposition").

use crate::tables::{
    DecompositionTable, HANGUL_L_BASE, HANGUL_N_COUNT, HANGUL_S_BASE, HANGUL_S_COUNT,
    HANGUL_T_BASE, HANGUL_T_COUNT, HANGUL_V_BASE,
};

/// Fully decompose one codepoint, appending its expansion to `out`.
/// Precomposed Hangul syllables are split arithmetically; everything else
/// goes through `tables`, recursing through the mapping so a table that
/// isn't already fully pre-flattened still decomposes completely.
pub fn decompose_one(c: u32, compatibility: bool, tables: &impl DecompositionTable, out: &mut Vec<u32>) {
    if (HANGUL_S_BASE..HANGUL_S_BASE + HANGUL_S_COUNT).contains(&c) {
        let idx_lv = c - HANGUL_S_BASE;
        let idx_l = idx_lv / HANGUL_N_COUNT;
        let idx_v = (idx_lv % HANGUL_N_COUNT) / HANGUL_T_COUNT;
        let idx_t = idx_lv % HANGUL_T_COUNT;
        out.push(HANGUL_L_BASE + idx_l);
        out.push(HANGUL_V_BASE + idx_v);
        if idx_t > 0 {
            out.push(HANGUL_T_BASE + idx_t);
        }
        return;
    }

    let mapping = if compatibility { tables.compatibility(c) } else { tables.canonical(c) };
    match mapping {
        Some(seq) => {
            for &sub in seq {
                decompose_one(sub, compatibility, tables, out);
            }
        }
        None => out.push(c),
    }
}

/// Decompose a whole sequence of codepoints.
#[must_use]
pub fn decompose_sequence(chars: &[u32], compatibility: bool, tables: &impl DecompositionTable) -> Vec<u32> {
    let mut out = Vec::with_capacity(chars.len());
    for &c in chars {
        decompose_one(c, compatibility, tables, &mut out);
    }
    out
}
