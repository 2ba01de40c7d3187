//! General category queries and the category-expression filter.

use std::fmt;

use smallvec::SmallVec;

use crate::lookup::sparse_lookup;
use crate::tables;

/// Packs two ASCII letters into the 16-bit category code `(upper << 8) | lower`.
pub const fn encode_gc(primary: u8, sub: u8) -> u16 {
    ((primary as u16) << 8) | sub as u16
}

/// The thirty Unicode general categories.
///
/// The discriminant of each variant is its packed two-letter code, so
/// `GeneralCategory::Lu as u16 == encode_gc(b'L', b'u')` and ordering
/// follows the alphabetical order of the abbreviations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum GeneralCategory {
    /// Other: control
    Cc = encode_gc(b'C', b'c'),
    /// Other: format
    Cf = encode_gc(b'C', b'f'),
    /// Other: unassigned
    Cn = encode_gc(b'C', b'n'),
    /// Other: private use
    Co = encode_gc(b'C', b'o'),
    /// Other: surrogate
    Cs = encode_gc(b'C', b's'),
    /// Letter: lowercase
    Ll = encode_gc(b'L', b'l'),
    /// Letter: modifier
    Lm = encode_gc(b'L', b'm'),
    /// Letter: other
    Lo = encode_gc(b'L', b'o'),
    /// Letter: titlecase
    Lt = encode_gc(b'L', b't'),
    /// Letter: uppercase
    Lu = encode_gc(b'L', b'u'),
    /// Mark: spacing
    Mc = encode_gc(b'M', b'c'),
    /// Mark: enclosing
    Me = encode_gc(b'M', b'e'),
    /// Mark: nonspacing
    Mn = encode_gc(b'M', b'n'),
    /// Number: decimal digit
    Nd = encode_gc(b'N', b'd'),
    /// Number: letter
    Nl = encode_gc(b'N', b'l'),
    /// Number: other
    No = encode_gc(b'N', b'o'),
    /// Punctuation: connector
    Pc = encode_gc(b'P', b'c'),
    /// Punctuation: dash
    Pd = encode_gc(b'P', b'd'),
    /// Punctuation: close
    Pe = encode_gc(b'P', b'e'),
    /// Punctuation: final quote
    Pf = encode_gc(b'P', b'f'),
    /// Punctuation: initial quote
    Pi = encode_gc(b'P', b'i'),
    /// Punctuation: other
    Po = encode_gc(b'P', b'o'),
    /// Punctuation: open
    Ps = encode_gc(b'P', b's'),
    /// Symbol: currency
    Sc = encode_gc(b'S', b'c'),
    /// Symbol: modifier
    Sk = encode_gc(b'S', b'k'),
    /// Symbol: math
    Sm = encode_gc(b'S', b'm'),
    /// Symbol: other
    So = encode_gc(b'S', b'o'),
    /// Separator: line
    Zl = encode_gc(b'Z', b'l'),
    /// Separator: paragraph
    Zp = encode_gc(b'Z', b'p'),
    /// Separator: space
    Zs = encode_gc(b'Z', b's'),
}

impl GeneralCategory {
    /// The packed 16-bit code.
    #[inline(always)]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// The primary category letter (`C`, `L`, `M`, `N`, `P`, `S`, or `Z`).
    #[inline(always)]
    pub const fn primary(self) -> u8 {
        (self as u16 >> 8) as u8
    }

    /// The two-letter abbreviation, e.g. `"Lu"`.
    pub fn abbr(self) -> &'static str {
        use GeneralCategory::*;
        match self {
            Cc => "Cc", Cf => "Cf", Cn => "Cn", Co => "Co", Cs => "Cs",
            Ll => "Ll", Lm => "Lm", Lo => "Lo", Lt => "Lt", Lu => "Lu",
            Mc => "Mc", Me => "Me", Mn => "Mn",
            Nd => "Nd", Nl => "Nl", No => "No",
            Pc => "Pc", Pd => "Pd", Pe => "Pe", Pf => "Pf", Pi => "Pi",
            Po => "Po", Ps => "Ps",
            Sc => "Sc", Sk => "Sk", Sm => "Sm", So => "So",
            Zl => "Zl", Zp => "Zp", Zs => "Zs",
        }
    }

    /// The human-readable long name, e.g. `"uppercase letter"`.
    pub fn long_name(self) -> &'static str {
        use GeneralCategory::*;
        match self {
            Cc => "control",
            Cf => "format",
            Cn => "unassigned",
            Co => "private use",
            Cs => "surrogate",
            Ll => "lowercase letter",
            Lm => "modifier letter",
            Lo => "other letter",
            Lt => "titlecase letter",
            Lu => "uppercase letter",
            Mc => "spacing mark",
            Me => "enclosing mark",
            Mn => "nonspacing mark",
            Nd => "decimal number",
            Nl => "letter number",
            No => "other number",
            Pc => "connector punctuation",
            Pd => "dash punctuation",
            Pe => "close punctuation",
            Pf => "final punctuation",
            Pi => "initial punctuation",
            Po => "other punctuation",
            Ps => "open punctuation",
            Sc => "currency symbol",
            Sk => "modifier symbol",
            Sm => "math symbol",
            So => "other symbol",
            Zl => "line separator",
            Zp => "paragraph separator",
            Zs => "space separator",
        }
    }
}

impl fmt::Display for GeneralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

/// The general category of a code point. Unassigned and out-of-range values
/// report [`GeneralCategory::Cn`].
#[inline]
pub fn general_category(c: u32) -> GeneralCategory {
    sparse_lookup(tables::category::GENERAL_CATEGORY, c, GeneralCategory::Cn)
}

/// The primary category letter: the high byte of the packed category code.
#[inline]
pub fn primary_category(c: u32) -> u8 {
    general_category(c).primary()
}

#[inline]
pub fn is_alphanumeric(c: u32) -> bool {
    matches!(primary_category(c), b'L' | b'N')
}

#[inline]
pub fn is_control(c: u32) -> bool {
    general_category(c) == GeneralCategory::Cc
}

#[inline]
pub fn is_format(c: u32) -> bool {
    general_category(c) == GeneralCategory::Cf
}

#[inline]
pub fn is_letter(c: u32) -> bool {
    primary_category(c) == b'L'
}

#[inline]
pub fn is_mark(c: u32) -> bool {
    primary_category(c) == b'M'
}

#[inline]
pub fn is_number(c: u32) -> bool {
    primary_category(c) == b'N'
}

#[inline]
pub fn is_punctuation(c: u32) -> bool {
    primary_category(c) == b'P'
}

#[inline]
pub fn is_symbol(c: u32) -> bool {
    primary_category(c) == b'S'
}

#[inline]
pub fn is_separator(c: u32) -> bool {
    primary_category(c) == b'Z'
}

/// A compiled category expression.
///
/// The expression grammar mirrors the usual regex-engine conventions:
///
/// - `"Lu"` matches one subcategory;
/// - `"L"` matches a whole primary category;
/// - `"Llotu"` is primary `L` followed by a run of subcategory letters,
///   matching `Ll`, `Lo`, `Lt`, and `Lu`;
/// - `"LC"` and `"L&"` match the cased letters `Ll`, `Lt`, `Lu`;
/// - comma-separated terms union, e.g. `"Zs,L&"`.
///
/// An unparseable expression compiles to the empty filter, which matches
/// nothing.
#[derive(Clone, Debug, Default)]
pub struct CategoryFilter {
    spans: SmallVec<[(u16, u16); 8]>,
}

impl CategoryFilter {
    pub fn new(spec: &str) -> CategoryFilter {
        const L0: u16 = encode_gc(b'L', 0);
        let mut spans: SmallVec<[(u16, u16); 8]> = SmallVec::new();
        let mut prefix: u16 = 0;
        let mut entries = 0usize;
        let cased = |spans: &mut SmallVec<[(u16, u16); 8]>| {
            spans.push((GeneralCategory::Ll.code(), GeneralCategory::Ll.code()));
            spans.push((GeneralCategory::Lt.code(), GeneralCategory::Lu.code()));
        };
        for b in spec.bytes() {
            if b.is_ascii_alphabetic() {
                if prefix == 0 {
                    prefix = encode_gc(b.to_ascii_uppercase(), 0);
                } else if (b == b'C' || b == b'c') && prefix == L0 {
                    cased(&mut spans);
                    entries += 2;
                } else {
                    let code = prefix | b.to_ascii_lowercase() as u16;
                    spans.push((code, code));
                    entries += 1;
                }
            } else if b == b'&' {
                if prefix == L0 {
                    cased(&mut spans);
                    entries += 2;
                }
            } else {
                if entries == 0 && prefix != 0 {
                    spans.push((prefix, prefix | 0xFF));
                }
                entries = 0;
                prefix = 0;
            }
        }
        if entries == 0 && prefix != 0 {
            spans.push((prefix, prefix | 0xFF));
        }
        CategoryFilter { spans }
    }

    /// Tests whether the general category of `c` falls in the filter.
    pub fn contains(&self, c: u32) -> bool {
        let code = general_category(c).code();
        self.spans.iter().any(|&(lo, hi)| lo <= code && code <= hi)
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl From<GeneralCategory> for CategoryFilter {
    /// A filter matching exactly one subcategory.
    fn from(gc: GeneralCategory) -> CategoryFilter {
        let mut spans = SmallVec::new();
        spans.push((gc.code(), gc.code()));
        CategoryFilter { spans }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_codes_round_trip() {
        assert_eq!(GeneralCategory::Lu.code(), encode_gc(b'L', b'u'));
        assert_eq!(GeneralCategory::Lu.primary(), b'L');
        assert_eq!(GeneralCategory::Zs.abbr(), "Zs");
        assert_eq!(GeneralCategory::Lu.to_string(), "Lu");
        assert_eq!(GeneralCategory::Lu.long_name(), "uppercase letter");
    }

    #[test]
    fn ascii_categories() {
        assert_eq!(general_category(0x41), GeneralCategory::Lu);
        assert_eq!(general_category(0x61), GeneralCategory::Ll);
        assert_eq!(general_category(0x30), GeneralCategory::Nd);
        assert_eq!(general_category(0x20), GeneralCategory::Zs);
        assert_eq!(general_category(0x00), GeneralCategory::Cc);
        assert_eq!(primary_category(0x41), b'L');
    }

    #[test]
    fn out_of_range_is_unassigned() {
        assert_eq!(general_category(0x110000), GeneralCategory::Cn);
        assert_eq!(general_category(u32::MAX), GeneralCategory::Cn);
    }

    #[test]
    fn whole_primary_filter() {
        let letters = CategoryFilter::new("L");
        assert!(letters.contains(0x41));
        assert!(letters.contains(0x61));
        assert!(letters.contains(0x4E00));
        assert!(!letters.contains(0x30));
    }

    #[test]
    fn subcategory_cluster_filter() {
        let f = CategoryFilter::new("Llotu");
        assert!(f.contains(0x61)); // Ll
        assert!(f.contains(0x4E00)); // Lo
        assert!(f.contains(0x41)); // Lu
        assert!(!f.contains(0x2B0)); // Lm
    }

    #[test]
    fn cased_letter_shorthand() {
        for spec in ["LC", "L&"] {
            let f = CategoryFilter::new(spec);
            assert!(f.contains(0x41), "{spec}");
            assert!(f.contains(0x61), "{spec}");
            assert!(f.contains(0x1C5), "{spec}"); // Lt
            assert!(!f.contains(0x4E00), "{spec}"); // Lo
            assert!(!f.contains(0x30), "{spec}");
        }
    }

    #[test]
    fn union_filter() {
        let f = CategoryFilter::new("Zs,L&");
        assert!(f.contains(0x20));
        assert!(f.contains(0x41));
        assert!(!f.contains(0x30));
    }

    #[test]
    fn garbage_spec_matches_nothing() {
        let f = CategoryFilter::new("123");
        assert!(f.is_empty());
        assert!(!f.contains(0x41));
    }

    #[test]
    fn single_category_conversion() {
        let f = CategoryFilter::from(GeneralCategory::Nd);
        assert!(f.contains(0x30));
        assert!(!f.contains(0x41));
    }
}
