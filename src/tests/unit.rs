#[cfg(test)]
mod unit_tests {
    use crate::{
        bidi_class, block_name, char_name, east_asian_width, full_casefold, full_uppercase,
        general_category, is_alphanumeric, is_cased, is_letter, is_number, is_separator,
        is_symbol, line_break, primary_category, script, script_name, simple_lowercase,
        simple_uppercase, BidiClass, CategoryFilter, GeneralCategory, LineBreak, NameFlags,
    };

    #[test]
    fn ascii_smoke() {
        assert_eq!(general_category(b'A' as u32), GeneralCategory::Lu);
        assert_eq!(primary_category(b'A' as u32), b'L');
        assert!(is_letter(b'A' as u32));
        assert!(is_number(b'7' as u32));
        assert!(is_separator(b' ' as u32));
        assert!(is_symbol(b'$' as u32));
        assert!(is_alphanumeric(b'z' as u32) && is_alphanumeric(b'0' as u32));
        assert!(!is_alphanumeric(b'!' as u32));
    }

    #[test]
    fn case_round_trip_ascii() {
        for c in b'a'..=b'z' {
            let c = c as u32;
            assert_eq!(simple_lowercase(simple_uppercase(c)), c);
        }
    }

    #[test]
    fn category_filter_against_data() {
        let punct = CategoryFilter::new("P");
        assert!(punct.contains(b'!' as u32));
        assert!(punct.contains(0x2014)); // em dash
        assert!(!punct.contains(b'A' as u32));

        let spaces_and_cased = CategoryFilter::new("Zs,L&");
        assert!(spaces_and_cased.contains(0x20));
        assert!(spaces_and_cased.contains(0x1C5));
        assert!(!spaces_and_cased.contains(0x4E00));
    }

    #[test]
    fn greek_properties_line_up() {
        let alpha = 0x3B1;
        assert_eq!(general_category(alpha), GeneralCategory::Ll);
        assert_eq!(script(alpha), "Grek");
        assert_eq!(script_name(&script(alpha)), Some("Greek"));
        assert_eq!(block_name(alpha), "Greek and Coptic");
        assert_eq!(simple_uppercase(alpha), 0x391);
        assert!(is_cased(alpha));
        assert_eq!(bidi_class(alpha), BidiClass::L);
    }

    #[test]
    fn cjk_properties_line_up() {
        let han = 0x4E2D;
        assert_eq!(general_category(han), GeneralCategory::Lo);
        assert_eq!(script(han), "Hani");
        assert_eq!(block_name(han), "CJK Unified Ideographs");
        assert_eq!(line_break(han), LineBreak::ID);
        assert_eq!(east_asian_width(han).to_string(), "W");
        assert_eq!(char_name(han, NameFlags::NONE), "CJK UNIFIED IDEOGRAPH-4E2D");
        // ideographs have no case
        assert_eq!(full_uppercase(han).as_slice(), &[han]);
    }

    #[test]
    fn ligature_casefold_expands() {
        // searching "ﬃ" should match "ffi" after folding
        let folded: Vec<u32> = full_casefold(0xFB03).into_iter().collect();
        assert_eq!(folded, vec![0x66, 0x66, 0x69]);
    }

    #[test]
    fn long_names_match_category() {
        assert_eq!(general_category(0x41).long_name(), "uppercase letter");
        assert_eq!(general_category(0x300).long_name(), "nonspacing mark");
        assert_eq!(general_category(0x110000).long_name(), "unassigned");
    }
}
