//! Thin classification predicates (spec §1) layered directly over
//! [`crate::tables::CaseFoldTable::general_category`]. Deliberately
//! minimal: a full Unicode property surface is out of scope, so this
//! module only covers what the rest of the crate's own scenarios need.

use crate::tables::{CaseFoldTable, GeneralCategory};

/// A codepoint's General_Category.
#[must_use]
pub fn general_category(c: u32, tables: &impl CaseFoldTable) -> GeneralCategory {
    tables.general_category(c)
}

/// True for any Letter subcategory (Lu, Ll, Lt, Lm, Lo).
#[must_use]
pub fn is_alphabetic(c: u32, tables: &impl CaseFoldTable) -> bool {
    tables.general_category(c).is_letter()
}

/// True for Zs (space separator); this crate's dataset has no Zl/Zp
/// entries to distinguish.
#[must_use]
pub fn is_whitespace(c: u32, tables: &impl CaseFoldTable) -> bool {
    matches!(tables.general_category(c), GeneralCategory::Zs) || matches!(c, 0x0009..=0x000D)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::DefaultTables;

    #[test]
    fn ascii_letters_are_alphabetic() {
        assert!(is_alphabetic(0x0041, &DefaultTables));
        assert!(is_alphabetic(0x0061, &DefaultTables));
        assert!(!is_alphabetic(0x0030, &DefaultTables));
    }

    #[test]
    fn space_and_tab_are_whitespace() {
        assert!(is_whitespace(0x0020, &DefaultTables));
        assert!(is_whitespace(0x0009, &DefaultTables));
        assert!(!is_whitespace(0x0061, &DefaultTables));
    }

    #[test]
    fn general_category_spot_check() {
        assert_eq!(general_category(0x0041, &DefaultTables), GeneralCategory::Lu);
        assert_eq!(general_category(0x0030, &DefaultTables), GeneralCategory::Nd);
    }
}
