//! Simple and full case mappings, and the case-state predicates.
//!
//! The simple maps are exact-key lookups defaulting to the input; titlecase
//! and case folding fall back to uppercase and lowercase respectively. The
//! full maps consult their extended table first and otherwise synthesize a
//! length-1 mapping from the simple map, so a full mapping is never empty:
//! identity inputs come back as themselves.

use smallvec::SmallVec;

use crate::category::{general_category, GeneralCategory as Gc};
use crate::lookup::{extended_lookup, key_lookup, range_set_contains};
use crate::property::{word_break, WordBreak};
use crate::tables::{boolsets, casing};

/// A full case mapping: one to three code points.
pub type CaseMapping = SmallVec<[u32; 3]>;

/// The longest full case mapping defined by Unicode.
pub const MAX_CASE_EXPANSION: usize = 3;

/// `Other_Uppercase` plus `Lu`.
pub fn is_uppercase(c: u32) -> bool {
    range_set_contains(boolsets::OTHER_UPPERCASE, c) || general_category(c) == Gc::Lu
}

/// `Other_Lowercase` plus `Ll`.
pub fn is_lowercase(c: u32) -> bool {
    range_set_contains(boolsets::OTHER_LOWERCASE, c) || general_category(c) == Gc::Ll
}

#[inline]
pub fn is_titlecase(c: u32) -> bool {
    general_category(c) == Gc::Lt
}

pub fn is_cased(c: u32) -> bool {
    if range_set_contains(boolsets::OTHER_UPPERCASE, c)
        || range_set_contains(boolsets::OTHER_LOWERCASE, c)
    {
        return true;
    }
    matches!(general_category(c), Gc::Ll | Gc::Lt | Gc::Lu)
}

/// Case-ignorable per the Unicode case algorithms: word-break mid-letter
/// punctuation plus the `Cf`/`Lm`/`Me`/`Mn`/`Sk` categories.
pub fn is_case_ignorable(c: u32) -> bool {
    if matches!(
        word_break(c),
        WordBreak::MidLetter | WordBreak::MidNumLet | WordBreak::SingleQuote
    ) {
        return true;
    }
    matches!(
        general_category(c),
        Gc::Cf | Gc::Lm | Gc::Me | Gc::Mn | Gc::Sk
    )
}

#[inline]
pub fn simple_uppercase(c: u32) -> u32 {
    key_lookup(casing::SIMPLE_UPPERCASE, c).unwrap_or(c)
}

#[inline]
pub fn simple_lowercase(c: u32) -> u32 {
    key_lookup(casing::SIMPLE_LOWERCASE, c).unwrap_or(c)
}

/// Simple titlecase; code points without an explicit titlecase mapping use
/// the uppercase mapping.
#[inline]
pub fn simple_titlecase(c: u32) -> u32 {
    key_lookup(casing::SIMPLE_TITLECASE, c).unwrap_or_else(|| simple_uppercase(c))
}

/// Simple case folding; code points without an explicit folding use the
/// lowercase mapping.
#[inline]
pub fn simple_casefold(c: u32) -> u32 {
    key_lookup(casing::SIMPLE_CASEFOLD, c).unwrap_or_else(|| simple_lowercase(c))
}

fn full_map(table: &[[u32; 5]], c: u32, simple: fn(u32) -> u32) -> CaseMapping {
    match extended_lookup(table, c) {
        Some(values) => CaseMapping::from_slice(values),
        None => {
            let mut out = CaseMapping::new();
            out.push(simple(c));
            out
        }
    }
}

pub fn full_uppercase(c: u32) -> CaseMapping {
    full_map(casing::FULL_UPPERCASE, c, simple_uppercase)
}

pub fn full_lowercase(c: u32) -> CaseMapping {
    full_map(casing::FULL_LOWERCASE, c, simple_lowercase)
}

pub fn full_titlecase(c: u32) -> CaseMapping {
    full_map(casing::FULL_TITLECASE, c, simple_titlecase)
}

pub fn full_casefold(c: u32) -> CaseMapping {
    full_map(casing::FULL_CASEFOLD, c, simple_casefold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_predicates() {
        assert!(is_uppercase(0x41));
        assert!(is_uppercase(0x2160)); // Roman numeral one
        assert!(!is_uppercase(0x61));
        assert!(is_lowercase(0x61));
        assert!(is_lowercase(0xAA)); // feminine ordinal
        assert!(is_titlecase(0x1C5)); // Dž
        assert!(is_cased(0x41) && is_cased(0x61) && is_cased(0x1C5));
        assert!(!is_cased(0x30));
    }

    #[test]
    fn case_ignorable() {
        assert!(is_case_ignorable(0x27)); // apostrophe
        assert!(is_case_ignorable(0x3A)); // colon
        assert!(is_case_ignorable(0x300)); // combining grave
        assert!(is_case_ignorable(0x2B0)); // modifier letter
        assert!(!is_case_ignorable(0x41));
        assert!(!is_case_ignorable(0x20));
    }

    #[test]
    fn simple_maps() {
        assert_eq!(simple_uppercase(0x61), 0x41);
        assert_eq!(simple_uppercase(0x41), 0x41);
        assert_eq!(simple_lowercase(0x41), 0x61);
        assert_eq!(simple_lowercase(0xDF), 0xDF); // ß has no simple uppercase pair
        assert_eq!(simple_uppercase(0xE0), 0xC0);
        assert_eq!(simple_lowercase(0x130), 0x69); // İ
        assert_eq!(simple_casefold(0x41), 0x61);
        assert_eq!(simple_casefold(0x3C2), 0x3C3); // final sigma
    }

    #[test]
    fn simple_titlecase_digraphs() {
        assert_eq!(simple_titlecase(0x1C6), 0x1C5); // ǆ → ǅ
        assert_eq!(simple_titlecase(0x1C5), 0x1C5); // ǅ stays titlecase
        assert_eq!(simple_titlecase(0x61), 0x41); // falls back to uppercase
    }

    #[test]
    fn full_maps_expand() {
        assert_eq!(full_uppercase(0xDF).as_slice(), &[0x53, 0x53]);
        assert_eq!(full_titlecase(0xDF).as_slice(), &[0x53, 0x73]);
        assert_eq!(full_lowercase(0x130).as_slice(), &[0x69, 0x307]);
        assert_eq!(full_casefold(0xFB03).as_slice(), &[0x66, 0x66, 0x69]);
        assert_eq!(full_uppercase(0xFB03).as_slice(), &[0x46, 0x46, 0x49]);
    }

    #[test]
    fn full_maps_never_empty() {
        // identity inputs yield a length-1 mapping of the input itself
        assert_eq!(full_uppercase(0x40).as_slice(), &[0x40]);
        assert_eq!(full_uppercase(0x41).as_slice(), &[0x41]);
        assert_eq!(full_lowercase(0xDF).as_slice(), &[0xDF]);
        assert_eq!(full_casefold(0x30).as_slice(), &[0x30]);
        assert_eq!(full_titlecase(0x4E00).as_slice(), &[0x4E00]);
    }
}
