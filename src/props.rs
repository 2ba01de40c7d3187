//! Boolean character properties backed by sorted range sets.

use crate::category::{general_category, GeneralCategory};
use crate::lookup::range_set_contains;
use crate::tables::boolsets as t;

#[inline]
pub fn is_white_space(c: u32) -> bool {
    range_set_contains(t::WHITE_SPACE, c)
}

#[inline]
pub fn is_id_start(c: u32) -> bool {
    range_set_contains(t::ID_START, c)
}

#[inline]
pub fn is_id_nonstart(c: u32) -> bool {
    range_set_contains(t::ID_NONSTART, c)
}

#[inline]
pub fn is_id_continue(c: u32) -> bool {
    is_id_start(c) || is_id_nonstart(c)
}

#[inline]
pub fn is_xid_start(c: u32) -> bool {
    range_set_contains(t::XID_START, c)
}

#[inline]
pub fn is_xid_nonstart(c: u32) -> bool {
    range_set_contains(t::XID_NONSTART, c)
}

#[inline]
pub fn is_xid_continue(c: u32) -> bool {
    is_xid_start(c) || is_xid_nonstart(c)
}

#[inline]
pub fn is_pattern_syntax(c: u32) -> bool {
    range_set_contains(t::PATTERN_SYNTAX, c)
}

#[inline]
pub fn is_pattern_white_space(c: u32) -> bool {
    range_set_contains(t::PATTERN_WHITE_SPACE, c)
}

#[inline]
pub fn is_default_ignorable(c: u32) -> bool {
    range_set_contains(t::DEFAULT_IGNORABLE, c)
}

#[inline]
pub fn is_soft_dotted(c: u32) -> bool {
    range_set_contains(t::SOFT_DOTTED, c)
}

/// Mandatory line-break characters: LF, VT, FF, CR, NEL, and the two
/// separators U+2028/U+2029.
#[inline]
pub fn is_line_break(c: u32) -> bool {
    matches!(c, 0x0A | 0x0B | 0x0C | 0x0D | 0x85 | 0x2028 | 0x2029)
}

/// White space that does not break lines.
#[inline]
pub fn is_inline_space(c: u32) -> bool {
    is_white_space(c) && !is_line_break(c)
}

#[inline]
pub fn is_assigned(c: u32) -> bool {
    general_category(c) != GeneralCategory::Cn
}

#[inline]
pub fn is_unassigned(c: u32) -> bool {
    general_category(c) == GeneralCategory::Cn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_space_membership() {
        for c in [0x09, 0x0A, 0x0D, 0x20, 0x85, 0xA0, 0x2003, 0x2028, 0x3000] {
            assert!(is_white_space(c), "U+{c:04X}");
        }
        assert!(!is_white_space(0x41));
        assert!(!is_white_space(0x200B)); // zero-width space is not White_Space
    }

    #[test]
    fn inline_space_excludes_breaks() {
        assert!(is_inline_space(0x20));
        assert!(is_inline_space(0x09));
        assert!(!is_inline_space(0x0A));
        assert!(!is_inline_space(0x2028));
    }

    #[test]
    fn identifier_sets() {
        assert!(is_id_start(0x41));
        assert!(is_id_start(0x4E00));
        assert!(!is_id_start(0x30));
        assert!(is_id_nonstart(0x30));
        assert!(is_id_continue(0x30));
        assert!(is_id_continue(0x41));
        assert!(is_xid_start(0x61));
        assert!(is_xid_continue(0x5F));
        assert!(!is_xid_start(0x5F));
    }

    #[test]
    fn pattern_properties() {
        assert!(is_pattern_syntax(0x2B)); // '+'
        assert!(is_pattern_syntax(0x2190)); // arrow
        assert!(!is_pattern_syntax(0x41));
        assert!(is_pattern_white_space(0x20));
        assert!(is_pattern_white_space(0x200E));
        assert!(!is_pattern_white_space(0xA0));
    }

    #[test]
    fn ignorable_and_soft_dotted() {
        assert!(is_default_ignorable(0xAD));
        assert!(is_default_ignorable(0x200B));
        assert!(is_default_ignorable(0xFE00));
        assert!(!is_default_ignorable(0x41));
        assert!(is_soft_dotted(0x69));
        assert!(is_soft_dotted(0x6A));
        assert!(is_soft_dotted(0x456)); // і
        assert!(!is_soft_dotted(0x49)); // I
    }

    #[test]
    fn assignment_tracks_category() {
        assert!(is_assigned(0x41));
        assert!(is_assigned(0xD800)); // surrogates are assigned (Cs)
        assert!(is_unassigned(0x20FF));
        assert!(is_unassigned(0x110000));
    }
}
