//! Quick_Check anchor scan: find the minimal span that must be
//! re-normalized (spec §4.5 "Quick_Check anchors").

use crate::tables::{CombiningClassTable, NormalizationForm, QuickCheckTable};

/// True iff `c` is allowed to appear in already-normalized text of
/// `form`. A thin, spec-named entry point over [`QuickCheckTable`],
/// whose own contract folds Quick_Check = MAYBE into "not allowed".
#[must_use]
pub fn allowed_in(c: u32, form: NormalizationForm, tables: &impl QuickCheckTable) -> bool {
    tables.allowed(c, form)
}

/// Scan `chars` for the first position violating the Quick_Check
/// invariant — CCC non-decreasing across a non-starter run, and every
/// codepoint allowed in `form` — then widen to the nearest stable
/// boundary (CCC = 0 and allowed) on each side. `None` means `chars` is
/// already fully normalized for `form`.
#[must_use]
pub fn find_unstable_span<T>(chars: &[char], form: NormalizationForm, tables: &T) -> Option<(usize, usize)>
where
    T: CombiningClassTable + QuickCheckTable,
{
    let is_stable = |i: usize| -> bool {
        let c = chars[i] as u32;
        tables.combining_class(c) == 0 && allowed_in(c, form, tables)
    };

    let mut prev_ccc = 0u8;
    let mut violation = None;
    for (i, &ch) in chars.iter().enumerate() {
        let c = ch as u32;
        let ccc = tables.combining_class(c);
        let order_ok = prev_ccc == 0 || ccc >= prev_ccc;
        if !(order_ok && allowed_in(c, form, tables)) {
            violation = Some(i);
            break;
        }
        prev_ccc = ccc;
    }
    let p = violation?;

    let mut s = p;
    while s > 0 && !is_stable(s) {
        s -= 1;
    }
    let mut e = p;
    while e < chars.len() && !is_stable(e) {
        e += 1;
    }
    Some((s, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::DefaultTables;

    #[test]
    fn already_normalized_text_has_no_span() {
        let chars: Vec<char> = "hello".chars().collect();
        assert_eq!(find_unstable_span(&chars, NormalizationForm::Nfc, &DefaultTables), None);
    }

    #[test]
    fn decomposed_a_with_diaeresis_is_unstable_for_nfc() {
        let chars: Vec<char> = "A\u{0308}ffin".chars().collect();
        let (s, e) = find_unstable_span(&chars, NormalizationForm::Nfc, &DefaultTables).unwrap();
        assert!(s <= 1 && e >= 2);
    }

    #[test]
    fn precomposed_a_with_diaeresis_is_unstable_for_nfd() {
        let chars: Vec<char> = "\u{00C4}ffin".chars().collect();
        assert!(find_unstable_span(&chars, NormalizationForm::Nfd, &DefaultTables).is_some());
    }

    #[test]
    fn precomposed_a_with_diaeresis_is_stable_for_nfc() {
        let chars: Vec<char> = "\u{00C4}ffin".chars().collect();
        assert_eq!(find_unstable_span(&chars, NormalizationForm::Nfc, &DefaultTables), None);
    }
}
