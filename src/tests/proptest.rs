#[cfg(test)]
mod prop_tests {
    use crate::{
        bidi_class, bidi_paired_bracket_type, block_name, char_name, combining_class,
        east_asian_width, full_casefold, full_lowercase, full_titlecase, full_uppercase,
        general_category, grapheme_cluster_break, is_assigned, is_astral, is_bmp, is_surrogate,
        joining_type, line_break, numeric_value, primary_category, script, script_list,
        sentence_break, word_break, GeneralCategory, NameFlags,
    };
    use proptest::prelude::*;

    proptest! {
        // Every query is total over the whole range plus the sentinel.
        #[test]
        fn queries_are_total(c in 0u32..=0x110000) {
            let _ = general_category(c);
            let _ = bidi_class(c);
            let _ = combining_class(c);
            let _ = east_asian_width(c);
            let _ = line_break(c);
            let _ = word_break(c);
            let _ = sentence_break(c);
            let _ = grapheme_cluster_break(c);
            let _ = joining_type(c);
            let _ = numeric_value(c);
            let _ = bidi_paired_bracket_type(c);
            let _ = block_name(c);
            let _ = script(c);
            prop_assert!(!script_list(c).is_empty());
        }

        // Labels make names total.
        #[test]
        fn labelled_names_are_never_empty(c in 0u32..=0x110000) {
            prop_assert!(!char_name(c, NameFlags::CONTROL | NameFlags::LABEL).is_empty());
        }

        // The primary category is the high byte of the packed code.
        #[test]
        fn primary_is_high_byte(c in 0u32..=0x110000) {
            prop_assert_eq!(
                primary_category(c) as u16,
                general_category(c).code() >> 8
            );
        }

        // Exactly one plane classification holds in range, none past it.
        #[test]
        fn plane_classification_partitions(c in 0u32..=0x120000) {
            let buckets =
                is_bmp(c) as u32 + is_astral(c) as u32 + is_surrogate(c) as u32;
            if c <= 0x10FFFF {
                prop_assert_eq!(buckets, 1);
            } else {
                prop_assert_eq!(buckets, 0);
            }
        }

        // Assignment is exactly "category is not Cn".
        #[test]
        fn assignment_tracks_category(c in 0u32..=0x110000) {
            prop_assert_eq!(is_assigned(c), general_category(c) != GeneralCategory::Cn);
        }

        // Full case maps are never empty and never overrun their cap.
        #[test]
        fn full_case_lengths(c in 0u32..=0x110000) {
            for mapping in [
                full_uppercase(c),
                full_lowercase(c),
                full_titlecase(c),
                full_casefold(c),
            ] {
                prop_assert!(!mapping.is_empty());
                prop_assert!(mapping.len() <= crate::MAX_CASE_EXPANSION);
            }
        }

        // Hex formatting round-trips through parsing.
        #[test]
        fn hex_round_trip(c in 0u32..=0x10FFFF) {
            let text = crate::as_hex(c);
            let parsed = u32::from_str_radix(&text[2..], 16).unwrap();
            prop_assert_eq!(parsed, c);
        }

        // Decompositions respect their documented caps.
        #[test]
        fn decomposition_lengths(c in 0u32..=0x110000) {
            prop_assert!(
                crate::canonical_decomposition(c).len()
                    <= crate::MAX_CANONICAL_DECOMPOSITION
            );
            prop_assert!(
                crate::compatibility_decomposition(c).len()
                    <= crate::MAX_COMPATIBILITY_DECOMPOSITION
            );
        }
    }
}
