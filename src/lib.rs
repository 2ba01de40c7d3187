#![forbid(unsafe_code)]

//! Pure per-code-point queries over the Unicode Character Database.
//!
//! Every query takes a `u32` code point and is total: surrogates, private
//! use, unassigned, and even out-of-range values all report documented
//! defaults instead of failing. All data is compiled in; the character-name
//! table inflates once on first use, and nothing is mutated after that.
//!
//! ```
//! use chardb::{GeneralCategory, NameFlags};
//!
//! assert_eq!(chardb::general_category(0x41), GeneralCategory::Lu);
//! assert_eq!(chardb::char_name(0xD4DB, NameFlags::NONE), "HANGUL SYLLABLE PWILH");
//! assert_eq!(chardb::full_uppercase(0xDF).as_slice(), &[0x53, 0x53]);
//! assert_eq!(chardb::script(0x3B1), "Grek");
//! ```

pub mod bidi;
pub mod casemap;
pub mod category;
pub mod codepoint;
pub mod decompose;
pub mod name;
pub mod property;
pub mod props;
pub mod script;

// Internal only
mod lookup;
mod tables;

pub use bidi::{
    bidi_class, bidi_mirroring_glyph, bidi_paired_bracket, bidi_paired_bracket_type,
    is_bidi_mirrored, BracketType,
};
pub use casemap::{
    full_casefold, full_lowercase, full_titlecase, full_uppercase, is_case_ignorable, is_cased,
    is_lowercase, is_titlecase, is_uppercase, simple_casefold, simple_lowercase, simple_titlecase,
    simple_uppercase, CaseMapping, MAX_CASE_EXPANSION,
};
pub use category::{
    encode_gc, general_category, is_alphanumeric, is_control, is_format, is_letter, is_mark,
    is_number, is_punctuation, is_separator, is_symbol, primary_category, CategoryFilter,
    GeneralCategory,
};
pub use codepoint::{
    as_hex, is_astral, is_bmp, is_noncharacter, is_private_use, is_surrogate, is_unicode_scalar,
};
pub use decompose::{
    canonical_composition, canonical_decomposition, combining_class, compatibility_decomposition,
    hangul_composition, hangul_decomposition, Decomposition, MAX_CANONICAL_DECOMPOSITION,
    MAX_COMPATIBILITY_DECOMPOSITION,
};
pub use name::{char_name, NameFlags};
pub use property::{
    east_asian_width, grapheme_cluster_break, hangul_syllable_type, indic_positional_category,
    indic_syllabic_category, joining_group, joining_type, line_break, numeric_type, numeric_value,
    sentence_break, word_break, BidiClass, EastAsianWidth, GraphemeClusterBreak,
    HangulSyllableType, IndicPositionalCategory, IndicSyllabicCategory, JoiningGroup, JoiningType,
    LineBreak, NumericType, SentenceBreak, WordBreak,
};
pub use props::{
    is_assigned, is_default_ignorable, is_id_continue, is_id_nonstart, is_id_start,
    is_inline_space, is_line_break, is_pattern_syntax, is_pattern_white_space, is_soft_dotted,
    is_unassigned, is_white_space, is_xid_continue, is_xid_nonstart, is_xid_start,
};
pub use script::{block_list, block_name, script, script_list, script_name, BlockInfo};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/conformance.rs");
    include!("tests/proptest.rs");
}
