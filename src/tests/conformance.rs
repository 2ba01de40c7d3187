// Conformance checks against the Unicode Character Database: literal
// values plus the exhaustive table invariants.

#[cfg(test)]
mod conformance_tests {
    use crate::property::hangul_syllable_type;
    use crate::tables::decomposition::{CANONICAL, COMPAT_LONG, COMPAT_SHORT, COMPOSITION};
    use crate::{
        as_hex, bidi_class, canonical_composition, canonical_decomposition, char_name,
        combining_class, compatibility_decomposition, encode_gc, full_casefold, full_lowercase,
        full_uppercase, general_category, hangul_composition, hangul_decomposition, is_assigned,
        primary_category, script, script_list, script_name, CategoryFilter, GeneralCategory,
        HangulSyllableType, NameFlags,
    };

    #[test]
    fn general_category_scenarios() {
        assert_eq!(general_category(0x41).code(), encode_gc(b'L', b'u'));
        assert_eq!(primary_category(0x41), b'L');
    }

    #[test]
    fn bidi_class_scenarios() {
        assert_eq!(bidi_class(0x0).to_string(), "BN");
        assert_eq!(bidi_class(0x9).to_string(), "S");
        assert_eq!(bidi_class(0xA).to_string(), "B");
        assert_eq!(bidi_class(0x202A).to_string(), "LRE");
        assert_eq!(bidi_class(0x10FFFF).to_string(), "BN");
    }

    #[test]
    fn decomposition_scenarios() {
        assert_eq!(canonical_decomposition(0xC0).as_slice(), &[0x41, 0x300]);
        let long = compatibility_decomposition(0xFDFA);
        assert_eq!(long.len(), 18);
        assert_eq!(&long[..4], &[0x635, 0x644, 0x649, 0x20]);
        assert_eq!(canonical_decomposition(0xD4DB).as_slice(), &[0xD4CC, 0x11B6]);
        assert_eq!(canonical_decomposition(0xD4CC).as_slice(), &[0x1111, 0x1171]);
    }

    #[test]
    fn full_case_scenarios() {
        assert_eq!(full_uppercase(0xDF).as_slice(), &[0x53, 0x53]);
        assert_eq!(full_lowercase(0x130).as_slice(), &[0x69, 0x307]);
        assert_eq!(full_casefold(0xFB03).as_slice(), &[0x66, 0x66, 0x69]);
    }

    #[test]
    fn name_scenarios() {
        assert_eq!(char_name(0x1A2, NameFlags::UPDATE), "LATIN CAPITAL LETTER GHA");
        assert_eq!(char_name(0x1A2, NameFlags::NONE), "LATIN CAPITAL LETTER OI");
        assert_eq!(char_name(0xD4DB, NameFlags::NONE), "HANGUL SYLLABLE PWILH");
        assert_eq!(char_name(0x0A, NameFlags::CONTROL), "LINE FEED");
        assert_eq!(char_name(0x20FF, NameFlags::LABEL), "<reserved-20FF>");
    }

    #[test]
    fn script_list_scenarios() {
        assert_eq!(
            script_list(0x640),
            ["Arab", "Mand", "Mani", "Phlp", "Syrc"].map(str::to_string)
        );
        assert_eq!(script_list(0x589), ["Armn", "Geor"].map(str::to_string));
        assert_eq!(script_list(0x660), ["Arab", "Thaa"].map(str::to_string));
        assert_eq!(script_list(0x1CD0), ["Deva", "Gran"].map(str::to_string));
        assert_eq!(
            script_list(0x964),
            [
                "Beng", "Deva", "Gran", "Gujr", "Guru", "Knda", "Mahj", "Mlym", "Orya",
                "Sind", "Sinh", "Sylo", "Takr", "Taml", "Telu", "Tirh",
            ]
            .map(str::to_string)
        );
        // no extensions: the primary script alone
        assert_eq!(script_list(0x41), vec!["Latn".to_string()]);
        assert_eq!(script_list(0x10FFFD), vec!["Zzzz".to_string()]);
    }

    #[test]
    fn category_filter_scenarios() {
        let cased = CategoryFilter::new("L&");
        assert!(cased.contains(0x1C5));
        assert!(!cased.contains(0x30));
        assert!(CategoryFilter::new("Zs,L&").contains(0x20));
    }

    #[test]
    fn hex_round_trip() {
        for c in (0..=0x10FFFFu32).step_by(997) {
            let h = format!("{c:04X}");
            let parsed = u32::from_str_radix(&h, 16).unwrap();
            assert_eq!(as_hex(parsed), format!("U+{h}"));
        }
    }

    #[test]
    fn decomposition_tables_are_disjoint() {
        let mut keys: Vec<u32> = CANONICAL
            .iter()
            .map(|r| r[0])
            .chain(COMPAT_SHORT.iter().map(|r| r[0]))
            .chain(COMPAT_LONG.iter().map(|r| r[0]))
            .collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total, "duplicate decomposition keys");
    }

    #[test]
    fn composition_keys_start_with_starters() {
        for &(u1, _, _) in COMPOSITION {
            assert_eq!(combining_class(u1), 0, "U+{u1:04X} is not a starter");
        }
    }

    #[test]
    fn composition_round_trips() {
        for &(u1, u2, u) in COMPOSITION {
            assert_eq!(canonical_composition(u1, u2), u);
            assert_eq!(
                canonical_decomposition(u).as_slice(),
                &[u1, u2],
                "U+{u:04X}"
            );
        }
    }

    #[test]
    fn hangul_round_trips() {
        for s in 0xAC00..=0xD7A3u32 {
            let [a, b] = hangul_decomposition(s).expect("syllables decompose");
            match hangul_syllable_type(s) {
                HangulSyllableType::LV => {
                    assert_eq!(hangul_syllable_type(a), HangulSyllableType::L);
                    assert_eq!(hangul_syllable_type(b), HangulSyllableType::V);
                }
                HangulSyllableType::LVT => {
                    assert_eq!(hangul_syllable_type(a), HangulSyllableType::LV);
                    assert_eq!(hangul_syllable_type(b), HangulSyllableType::T);
                }
                other => panic!("U+{s:04X}: unexpected type {other:?}"),
            }
            assert_eq!(hangul_composition(a, b), s);
        }
    }

    #[test]
    fn scripts_of_assigned_code_points_have_names() {
        for c in 0..=0x10FFFFu32 {
            if !is_assigned(c) {
                continue;
            }
            let tag = script(c);
            assert!(
                script_name(&tag).is_some(),
                "U+{c:04X}: no ISO name for {tag}"
            );
        }
    }

    #[test]
    fn labels_are_total() {
        let flags = NameFlags::CONTROL | NameFlags::LABEL;
        for c in (0..=0x110000u32).step_by(7) {
            assert!(!char_name(c, flags).is_empty(), "U+{c:04X}");
        }
        // the label classes themselves
        for c in [0x1Fu32, 0xD800, 0xDFFF, 0xE000, 0xFDD0, 0xFFFF, 0x10FFFE, 0x110000] {
            assert!(!char_name(c, flags).is_empty(), "U+{c:04X}");
        }
    }

    #[test]
    fn assignment_matches_category() {
        for c in (0..=0x110000u32).step_by(11) {
            assert_eq!(is_assigned(c), general_category(c) != GeneralCategory::Cn);
        }
    }
}
