//! Enumerated character properties.
//!
//! One enum per property, with variants in the Unicode Standard's canonical
//! order and `Display` printing the canonical short name. `BidiClass` and
//! `JoiningType` carry an extra internal `Default` sentinel marking "not in
//! the table, use the algorithmic fallback"; it never escapes the query
//! functions.

use std::fmt;

use crate::category::{general_category, GeneralCategory as Gc};
use crate::lookup::sparse_lookup;
use crate::tables;

macro_rules! property_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// The canonical Unicode short name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.as_str() {
                    "" => write!(f, "{}", *self as u32),
                    tag => f.write_str(tag),
                }
            }
        }
    };
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal,)+ } internal $sentinel:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
            #[doc(hidden)]
            $sentinel,
        }

        impl $name {
            /// The canonical Unicode short name (empty for the internal
            /// sentinel).
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::$sentinel => "",
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.as_str() {
                    "" => write!(f, "{}", *self as u32),
                    tag => f.write_str(tag),
                }
            }
        }
    };
}

property_enum! {
    /// Bidi_Class (UAX #9).
    BidiClass {
        AL => "AL", AN => "AN", B => "B", BN => "BN", CS => "CS", EN => "EN",
        ES => "ES", ET => "ET", FSI => "FSI", L => "L", LRE => "LRE",
        LRI => "LRI", LRO => "LRO", NSM => "NSM", ON => "ON", PDF => "PDF",
        PDI => "PDI", R => "R", RLE => "RLE", RLI => "RLI", RLO => "RLO",
        S => "S", WS => "WS",
    }
    internal Default
}

property_enum! {
    /// East_Asian_Width (UAX #11).
    EastAsianWidth {
        N => "N", A => "A", F => "F", H => "H", Na => "Na", W => "W",
    }
}

property_enum! {
    /// Grapheme_Cluster_Break (UAX #29). `SOT` and `EOT` are pseudo-values
    /// for segmentation drivers and never occur in the table.
    GraphemeClusterBreak {
        Other => "Other", Control => "Control", CR => "CR", EOT => "EOT",
        Extend => "Extend", L => "L", LF => "LF", LV => "LV", LVT => "LVT",
        Prepend => "Prepend", RegionalIndicator => "Regional_Indicator",
        SOT => "SOT", SpacingMark => "SpacingMark", T => "T", V => "V",
    }
}

property_enum! {
    /// Hangul_Syllable_Type.
    HangulSyllableType {
        NA => "NA", L => "L", LV => "LV", LVT => "LVT", T => "T", V => "V",
    }
}

property_enum! {
    /// Indic_Positional_Category.
    IndicPositionalCategory {
        NA => "NA", Bottom => "Bottom", BottomAndRight => "Bottom_And_Right",
        Left => "Left", LeftAndRight => "Left_And_Right",
        Overstruck => "Overstruck", Right => "Right", Top => "Top",
        TopAndBottom => "Top_And_Bottom",
        TopAndBottomAndRight => "Top_And_Bottom_And_Right",
        TopAndLeft => "Top_And_Left",
        TopAndLeftAndRight => "Top_And_Left_And_Right",
        TopAndRight => "Top_And_Right",
        VisualOrderLeft => "Visual_Order_Left",
    }
}

property_enum! {
    /// Indic_Syllabic_Category.
    IndicSyllabicCategory {
        Other => "Other", Avagraha => "Avagraha", Bindu => "Bindu",
        BrahmiJoiningNumber => "Brahmi_Joining_Number",
        CantillationMark => "Cantillation_Mark", Consonant => "Consonant",
        ConsonantDead => "Consonant_Dead", ConsonantFinal => "Consonant_Final",
        ConsonantHeadLetter => "Consonant_Head_Letter",
        ConsonantKiller => "Consonant_Killer",
        ConsonantMedial => "Consonant_Medial",
        ConsonantPlaceholder => "Consonant_Placeholder",
        ConsonantPrecedingRepha => "Consonant_Preceding_Repha",
        ConsonantPrefixed => "Consonant_Prefixed",
        ConsonantSubjoined => "Consonant_Subjoined",
        ConsonantSucceedingRepha => "Consonant_Succeeding_Repha",
        ConsonantWithStacker => "Consonant_With_Stacker",
        GeminationMark => "Gemination_Mark",
        InvisibleStacker => "Invisible_Stacker", Joiner => "Joiner",
        ModifyingLetter => "Modifying_Letter", NonJoiner => "Non_Joiner",
        Nukta => "Nukta", Number => "Number", NumberJoiner => "Number_Joiner",
        PureKiller => "Pure_Killer", RegisterShifter => "Register_Shifter",
        SyllableModifier => "Syllable_Modifier", ToneLetter => "Tone_Letter",
        ToneMark => "Tone_Mark", Virama => "Virama", Visarga => "Visarga",
        Vowel => "Vowel", VowelDependent => "Vowel_Dependent",
        VowelIndependent => "Vowel_Independent",
    }
}

property_enum! {
    /// Joining_Group (Arabic and Syriac shaping).
    JoiningGroup {
        NoJoiningGroup => "No_Joining_Group", Ain => "Ain", Alaph => "Alaph",
        Alef => "Alef", Beh => "Beh", Beth => "Beth",
        BurushaskiYehBarree => "Burushaski_Yeh_Barree", Dal => "Dal",
        DalathRish => "Dalath_Rish", E => "E", FarsiYeh => "Farsi_Yeh",
        Fe => "Fe", Feh => "Feh", FinalSemkath => "Final_Semkath",
        Gaf => "Gaf", Gamal => "Gamal", Hah => "Hah", He => "He",
        Heh => "Heh", HehGoal => "Heh_Goal", Heth => "Heth", Kaf => "Kaf",
        Kaph => "Kaph", Khaph => "Khaph", KnottedHeh => "Knotted_Heh",
        Lam => "Lam", Lamadh => "Lamadh",
        ManichaeanAleph => "Manichaean_Aleph",
        ManichaeanAyin => "Manichaean_Ayin",
        ManichaeanBeth => "Manichaean_Beth",
        ManichaeanDaleth => "Manichaean_Daleth",
        ManichaeanDhamedh => "Manichaean_Dhamedh",
        ManichaeanFive => "Manichaean_Five",
        ManichaeanGimel => "Manichaean_Gimel",
        ManichaeanHeth => "Manichaean_Heth",
        ManichaeanHundred => "Manichaean_Hundred",
        ManichaeanKaph => "Manichaean_Kaph",
        ManichaeanLamedh => "Manichaean_Lamedh",
        ManichaeanMem => "Manichaean_Mem", ManichaeanNun => "Manichaean_Nun",
        ManichaeanOne => "Manichaean_One", ManichaeanPe => "Manichaean_Pe",
        ManichaeanQoph => "Manichaean_Qoph",
        ManichaeanResh => "Manichaean_Resh",
        ManichaeanSadhe => "Manichaean_Sadhe",
        ManichaeanSamekh => "Manichaean_Samekh",
        ManichaeanTaw => "Manichaean_Taw", ManichaeanTen => "Manichaean_Ten",
        ManichaeanTeth => "Manichaean_Teth",
        ManichaeanThamedh => "Manichaean_Thamedh",
        ManichaeanTwenty => "Manichaean_Twenty",
        ManichaeanWaw => "Manichaean_Waw",
        ManichaeanYodh => "Manichaean_Yodh",
        ManichaeanZayin => "Manichaean_Zayin", Meem => "Meem", Mim => "Mim",
        Noon => "Noon", Nun => "Nun", Nya => "Nya", Pe => "Pe", Qaf => "Qaf",
        Qaph => "Qaph", Reh => "Reh", ReversedPe => "Reversed_Pe",
        RohingyaYeh => "Rohingya_Yeh", Sad => "Sad", Sadhe => "Sadhe",
        Seen => "Seen", Semkath => "Semkath", Shin => "Shin",
        StraightWaw => "Straight_Waw", SwashKaf => "Swash_Kaf",
        SyriacWaw => "Syriac_Waw", Tah => "Tah", Taw => "Taw",
        TehMarbuta => "Teh_Marbuta", TehMarbutaGoal => "Teh_Marbuta_Goal",
        Teth => "Teth", Waw => "Waw", Yeh => "Yeh", YehBarree => "Yeh_Barree",
        YehWithTail => "Yeh_With_Tail", Yudh => "Yudh", YudhHe => "Yudh_He",
        Zain => "Zain", Zhain => "Zhain",
    }
}

property_enum! {
    /// Joining_Type (Arabic shaping).
    JoiningType {
        DualJoining => "Dual_Joining", JoinCausing => "Join_Causing",
        LeftJoining => "Left_Joining", NonJoining => "Non_Joining",
        RightJoining => "Right_Joining", Transparent => "Transparent",
    }
    internal Default
}

property_enum! {
    /// Line_Break (UAX #14).
    LineBreak {
        XX => "XX", AI => "AI", AL => "AL", B2 => "B2", BA => "BA",
        BB => "BB", BK => "BK", CB => "CB", CJ => "CJ", CL => "CL",
        CM => "CM", CP => "CP", CR => "CR", EX => "EX", GL => "GL",
        H2 => "H2", H3 => "H3", HL => "HL", HY => "HY", ID => "ID",
        IN => "IN", IS => "IS", JL => "JL", JT => "JT", JV => "JV",
        LF => "LF", NL => "NL", NS => "NS", NU => "NU", OP => "OP",
        PO => "PO", PR => "PR", QU => "QU", RI => "RI", SA => "SA",
        SG => "SG", SP => "SP", SY => "SY", WJ => "WJ", ZW => "ZW",
    }
}

property_enum! {
    /// Numeric_Type.
    NumericType {
        None => "None", Decimal => "Decimal", Digit => "Digit",
        Numeric => "Numeric",
    }
}

property_enum! {
    /// Sentence_Break (UAX #29).
    SentenceBreak {
        Other => "Other", ATerm => "ATerm", Close => "Close", CR => "CR",
        EOT => "EOT", Extend => "Extend", Format => "Format", LF => "LF",
        Lower => "Lower", Numeric => "Numeric", OLetter => "OLetter",
        SContinue => "SContinue", Sep => "Sep", SOT => "SOT", Sp => "Sp",
        STerm => "STerm", Upper => "Upper",
    }
}

property_enum! {
    /// Word_Break (UAX #29).
    WordBreak {
        Other => "Other", ALetter => "ALetter", CR => "CR",
        DoubleQuote => "Double_Quote", EOT => "EOT", Extend => "Extend",
        ExtendNumLet => "ExtendNumLet", Format => "Format",
        HebrewLetter => "Hebrew_Letter", Katakana => "Katakana", LF => "LF",
        MidLetter => "MidLetter", MidNum => "MidNum",
        MidNumLet => "MidNumLet", Newline => "Newline", Numeric => "Numeric",
        RegionalIndicator => "Regional_Indicator",
        SingleQuote => "Single_Quote", SOT => "SOT",
    }
}

#[inline]
pub fn east_asian_width(c: u32) -> EastAsianWidth {
    sparse_lookup(tables::enumerated::EAST_ASIAN_WIDTH, c, EastAsianWidth::N)
}

#[inline]
pub fn grapheme_cluster_break(c: u32) -> GraphemeClusterBreak {
    sparse_lookup(
        tables::segmentation::GRAPHEME_CLUSTER_BREAK,
        c,
        GraphemeClusterBreak::Other,
    )
}

#[inline]
pub fn hangul_syllable_type(c: u32) -> HangulSyllableType {
    sparse_lookup(
        tables::enumerated::HANGUL_SYLLABLE_TYPE,
        c,
        HangulSyllableType::NA,
    )
}

#[inline]
pub fn indic_positional_category(c: u32) -> IndicPositionalCategory {
    sparse_lookup(
        tables::enumerated::INDIC_POSITIONAL,
        c,
        IndicPositionalCategory::NA,
    )
}

#[inline]
pub fn indic_syllabic_category(c: u32) -> IndicSyllabicCategory {
    sparse_lookup(
        tables::enumerated::INDIC_SYLLABIC,
        c,
        IndicSyllabicCategory::Other,
    )
}

#[inline]
pub fn joining_group(c: u32) -> JoiningGroup {
    sparse_lookup(
        tables::enumerated::JOINING_GROUP,
        c,
        JoiningGroup::NoJoiningGroup,
    )
}

/// Joining_Type, with the standard derivation for code points absent from
/// the shaping table: `Cf`, `Me`, and `Mn` are transparent, everything else
/// is non-joining.
pub fn joining_type(c: u32) -> JoiningType {
    let jt = sparse_lookup(tables::enumerated::JOINING_TYPE, c, JoiningType::Default);
    if jt != JoiningType::Default {
        return jt;
    }
    match general_category(c) {
        Gc::Cf | Gc::Me | Gc::Mn => JoiningType::Transparent,
        _ => JoiningType::NonJoining,
    }
}

#[inline]
pub fn line_break(c: u32) -> LineBreak {
    sparse_lookup(tables::segmentation::LINE_BREAK, c, LineBreak::XX)
}

#[inline]
pub fn numeric_type(c: u32) -> NumericType {
    sparse_lookup(tables::enumerated::NUMERIC_TYPE, c, NumericType::None)
}

/// The numeric value as a `(numerator, denominator)` rational; `(0, 1)` for
/// code points with no numeric value.
pub fn numeric_value(c: u32) -> (i64, i64) {
    let table = tables::enumerated::NUMERIC_VALUE;
    let i = match table.binary_search_by_key(&c, |&(start, _, _)| start) {
        Ok(i) => i,
        Err(0) => return (0, 1),
        Err(i) => i - 1,
    };
    (table[i].1, table[i].2)
}

#[inline]
pub fn sentence_break(c: u32) -> SentenceBreak {
    sparse_lookup(tables::segmentation::SENTENCE_BREAK, c, SentenceBreak::Other)
}

#[inline]
pub fn word_break(c: u32) -> WordBreak {
    sparse_lookup(tables::segmentation::WORD_BREAK, c, WordBreak::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_render() {
        assert_eq!(BidiClass::FSI.to_string(), "FSI");
        assert_eq!(JoiningGroup::TehMarbutaGoal.to_string(), "Teh_Marbuta_Goal");
        assert_eq!(WordBreak::SingleQuote.to_string(), "Single_Quote");
        assert_eq!(EastAsianWidth::Na.to_string(), "Na");
        assert_eq!(LineBreak::XX.to_string(), "XX");
    }

    #[test]
    fn declaration_order_gives_total_order() {
        assert!(BidiClass::AL < BidiClass::WS);
        assert!(LineBreak::XX < LineBreak::ZW);
        assert!(NumericType::None < NumericType::Numeric);
    }

    #[test]
    fn east_asian_widths() {
        assert_eq!(east_asian_width(0x41), EastAsianWidth::Na);
        assert_eq!(east_asian_width(0x4E00), EastAsianWidth::W);
        assert_eq!(east_asian_width(0xFF01), EastAsianWidth::F);
        assert_eq!(east_asian_width(0x20A9), EastAsianWidth::H);
    }

    #[test]
    fn hangul_syllable_types() {
        assert_eq!(hangul_syllable_type(0x1100), HangulSyllableType::L);
        assert_eq!(hangul_syllable_type(0x1161), HangulSyllableType::V);
        assert_eq!(hangul_syllable_type(0x11A8), HangulSyllableType::T);
        assert_eq!(hangul_syllable_type(0xAC00), HangulSyllableType::LV);
        assert_eq!(hangul_syllable_type(0xAC01), HangulSyllableType::LVT);
        assert_eq!(hangul_syllable_type(0x41), HangulSyllableType::NA);
    }

    #[test]
    fn joining_fallbacks() {
        assert_eq!(joining_type(0x0627), JoiningType::RightJoining);
        assert_eq!(joining_type(0x0628), JoiningType::DualJoining);
        assert_eq!(joining_type(0x0640), JoiningType::JoinCausing);
        assert_eq!(joining_type(0x0621), JoiningType::NonJoining);
        // not in the shaping table: combining marks are transparent
        assert_eq!(joining_type(0x0300), JoiningType::Transparent);
        assert_eq!(joining_type(0x41), JoiningType::NonJoining);
    }

    #[test]
    fn joining_groups() {
        assert_eq!(joining_group(0x0629), JoiningGroup::TehMarbuta);
        assert_eq!(joining_group(0x0644), JoiningGroup::Lam);
        assert_eq!(joining_group(0x41), JoiningGroup::NoJoiningGroup);
    }

    #[test]
    fn numeric_values() {
        assert_eq!(numeric_type(0x31), NumericType::Decimal);
        assert_eq!(numeric_type(0x2160), NumericType::Numeric);
        assert_eq!(numeric_type(0x41), NumericType::None);
        assert_eq!(numeric_value(0x31), (1, 1));
        assert_eq!(numeric_value(0x00BD), (1, 2));
        assert_eq!(numeric_value(0x2155), (1, 5));
        assert_eq!(numeric_value(0x41), (0, 1));
        assert_eq!(numeric_value(0x110000), (0, 1));
    }

    #[test]
    fn word_break_classes() {
        assert_eq!(word_break(0x41), WordBreak::ALetter);
        assert_eq!(word_break(0x27), WordBreak::SingleQuote);
        assert_eq!(word_break(0x3A), WordBreak::MidLetter);
        assert_eq!(word_break(0x05D0), WordBreak::HebrewLetter);
        assert_eq!(word_break(0x30A2), WordBreak::Katakana);
        assert_eq!(word_break(0x0D), WordBreak::CR);
    }

    #[test]
    fn line_break_classes() {
        assert_eq!(line_break(0x41), LineBreak::AL);
        assert_eq!(line_break(0x20), LineBreak::SP);
        assert_eq!(line_break(0x2C), LineBreak::IS);
        assert_eq!(line_break(0x30), LineBreak::NU);
        assert_eq!(line_break(0x4E00), LineBreak::ID);
        assert_eq!(line_break(0xAC00), LineBreak::H2);
        assert_eq!(line_break(0xAC01), LineBreak::H3);
        assert_eq!(line_break(0x110000), LineBreak::XX);
    }

    #[test]
    fn sentence_break_classes() {
        assert_eq!(sentence_break(0x2E), SentenceBreak::ATerm);
        assert_eq!(sentence_break(0x21), SentenceBreak::STerm);
        assert_eq!(sentence_break(0x41), SentenceBreak::Upper);
        assert_eq!(sentence_break(0x61), SentenceBreak::Lower);
        assert_eq!(sentence_break(0x30), SentenceBreak::Numeric);
    }

    #[test]
    fn grapheme_break_classes() {
        assert_eq!(grapheme_cluster_break(0x0D), GraphemeClusterBreak::CR);
        assert_eq!(grapheme_cluster_break(0x0A), GraphemeClusterBreak::LF);
        assert_eq!(grapheme_cluster_break(0x300), GraphemeClusterBreak::Extend);
        assert_eq!(grapheme_cluster_break(0xAC00), GraphemeClusterBreak::LV);
        assert_eq!(
            grapheme_cluster_break(0x1F1E6),
            GraphemeClusterBreak::RegionalIndicator
        );
        assert_eq!(grapheme_cluster_break(0x41), GraphemeClusterBreak::Other);
    }
}
