//! Normalization Forms C/D/KC/KD (spec §4.5): decomposition, canonical
//! reordering, and recomposition — including algorithmic Hangul syllable
//! composition/decomposition — layered over the external tables in
//! [`crate::tables`].
//!
//! The four entry points (`nfc`, `nfd`, `nfkc`, `nfkd`) all funnel through
//! a Quick_Check anchor scan ([`find_unstable_span`]): if the input is
//! already normalized for the requested form, it is returned unchanged
//! with zero allocation (spec §4.5 "Result identity").

mod compose;
mod decompose;
mod quickcheck;
mod reorder;

use std::borrow::Cow;

use crate::tables::{CombiningClassTable, CompositionTable, DecompositionTable, NormalizationForm, QuickCheckTable};

pub use quickcheck::{allowed_in, find_unstable_span};

/// The table bundle every normalization entry point needs: combining
/// class, both decomposition maps, pairwise composition, and
/// Quick_Check.
pub trait NormalizationTables:
    CombiningClassTable + DecompositionTable + CompositionTable + QuickCheckTable
{
}

impl<T> NormalizationTables for T where T: CombiningClassTable + DecompositionTable + CompositionTable + QuickCheckTable {}

fn normalize<'a>(input: &'a str, form: NormalizationForm, tables: &impl NormalizationTables) -> Cow<'a, str> {
    let chars: Vec<char> = input.chars().collect();
    let Some((s, e)) = find_unstable_span(&chars, form, tables) else {
        return Cow::Borrowed(input);
    };

    let compatibility = matches!(form, NormalizationForm::Nfkc | NormalizationForm::Nfkd);
    let compose = matches!(form, NormalizationForm::Nfc | NormalizationForm::Nfkc);

    let segment: Vec<u32> = chars[s..e].iter().map(|&c| c as u32).collect();
    let mut decomposed = decompose::decompose_sequence(&segment, compatibility, tables);
    reorder::canonical_reorder(&mut decomposed, tables);
    let result = if compose { compose::compose_sequence(decomposed, tables) } else { decomposed };

    let mut out = String::with_capacity(input.len());
    out.extend(&chars[..s]);
    out.extend(result.into_iter().filter_map(char::from_u32));
    out.extend(&chars[e..]);
    Cow::Owned(out)
}

/// Normalization Form C: canonical decomposition followed by canonical
/// composition.
pub fn nfc<'a>(input: &'a str, tables: &impl NormalizationTables) -> Cow<'a, str> {
    normalize(input, NormalizationForm::Nfc, tables)
}

/// Normalization Form D: canonical decomposition.
pub fn nfd<'a>(input: &'a str, tables: &impl NormalizationTables) -> Cow<'a, str> {
    normalize(input, NormalizationForm::Nfd, tables)
}

/// Normalization Form KC: compatibility decomposition followed by
/// canonical composition.
pub fn nfkc<'a>(input: &'a str, tables: &impl NormalizationTables) -> Cow<'a, str> {
    normalize(input, NormalizationForm::Nfkc, tables)
}

/// Normalization Form KD: compatibility decomposition.
pub fn nfkd<'a>(input: &'a str, tables: &impl NormalizationTables) -> Cow<'a, str> {
    normalize(input, NormalizationForm::Nfkd, tables)
}
