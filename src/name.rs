//! Character names.
//!
//! Most names come from the main name table, a zlib-compressed blob of
//! `hex;NAME;` records inflated and indexed once on first use. CJK unified
//! and compatibility ideographs and Hangul syllables are synthesized
//! arithmetically, ISO 6429 control names and post-publication corrections
//! are opt-in via flags, and bracketed labels cover everything else.

use std::io::Read;
use std::ops::BitOr;
use std::sync::LazyLock;

use flate2::bufread::ZlibDecoder;
use memchr::memchr;
use phf::phf_map;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::category::{general_category, GeneralCategory as Gc};
use crate::codepoint::{as_hex, is_noncharacter, LAST_UNICODE};
use crate::lookup::key_lookup;
use crate::tables::names as t;

/// Option flags for [`char_name`]. Combine with `|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NameFlags(u32);

impl NameFlags {
    pub const NONE: NameFlags = NameFlags(0);
    /// Use ISO 6429 names for the C0/C1 control characters.
    pub const CONTROL: NameFlags = NameFlags(1);
    /// Synthesize a `<bracketed-XXXX>` label when no name exists.
    pub const LABEL: NameFlags = NameFlags(1 << 1);
    /// Lowercase the name (hex digits in labels included, but not in the
    /// `U+XXXX` prefix).
    pub const LOWER: NameFlags = NameFlags(1 << 2);
    /// Prepend the `U+XXXX ` form of the code point.
    pub const PREFIX: NameFlags = NameFlags(1 << 3);
    /// Apply name corrections published after the original name froze.
    pub const UPDATE: NameFlags = NameFlags(1 << 4);

    #[inline]
    pub const fn contains(self, other: NameFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for NameFlags {
    type Output = NameFlags;

    fn bitor(self, other: NameFlags) -> NameFlags {
        NameFlags(self.0 | other.0)
    }
}

/// The only fatal failure in the crate: the embedded name table failed to
/// inflate or parse. Surfaces as a panic out of the first name query.
#[derive(Debug, Error)]
enum NameTableError {
    #[error("Zlib error: {0}")]
    Zlib(String),
    #[error("Zlib error: name table expanded to {0} bytes, expected {1}")]
    Length(usize, usize),
    #[error("Zlib error: malformed record at byte {0}")]
    Record(usize),
}

static NAME_MAP: LazyLock<FxHashMap<u32, Box<str>>> =
    LazyLock::new(|| build_name_map().unwrap_or_else(|e| panic!("{e}")));

fn build_name_map() -> Result<FxHashMap<u32, Box<str>>, NameTableError> {
    let mut raw = Vec::with_capacity(t::NAME_BLOB_EXPANDED);
    ZlibDecoder::new(t::NAME_BLOB)
        .read_to_end(&mut raw)
        .map_err(|e| NameTableError::Zlib(e.to_string()))?;
    if raw.len() != t::NAME_BLOB_EXPANDED {
        return Err(NameTableError::Length(raw.len(), t::NAME_BLOB_EXPANDED));
    }
    let mut map = FxHashMap::default();
    let mut i = 0;
    while i < raw.len() {
        let j = i + memchr(b';', &raw[i..]).ok_or(NameTableError::Record(i))?;
        let k = j + 1 + memchr(b';', &raw[j + 1..]).ok_or(NameTableError::Record(i))?;
        let hex = std::str::from_utf8(&raw[i..j]).map_err(|_| NameTableError::Record(i))?;
        let c = u32::from_str_radix(hex, 16).map_err(|_| NameTableError::Record(i))?;
        let name = std::str::from_utf8(&raw[j + 1..k]).map_err(|_| NameTableError::Record(i))?;
        map.insert(c, Box::from(name));
        i = k + 1;
    }
    Ok(map)
}

#[inline]
fn is_unified_ideograph(c: u32) -> bool {
    (0x3400..=0x4DBF).contains(&c)
        || (0x4E00..=0x9FFF).contains(&c)
        || (0x20000..=0x2A6DF).contains(&c)
        || (0x2A700..=0x2B81F).contains(&c)
}

#[inline]
fn is_compatibility_ideograph(c: u32) -> bool {
    (0xF900..=0xFAFF).contains(&c) || (0x2F800..=0x2FA1F).contains(&c)
}

// Unicode Standard section 3.12 jamo romanization.
static JAMO_L: [&str; 19] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ",
    "C", "K", "T", "P", "H",
];
static JAMO_V: [&str; 21] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE",
    "YO", "U", "WEO", "WE", "WI", "YU", "EU", "YI", "I",
];
static JAMO_T: [&str; 28] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS",
    "LT", "LP", "LH", "M", "B", "BS", "S", "SS", "NG", "J", "C", "K", "T",
    "P", "H",
];

fn hangul_name(c: u32) -> Option<String> {
    const S_BASE: u32 = 0xAC00;
    const T_COUNT: u32 = 28;
    const N_COUNT: u32 = 588;
    const S_COUNT: u32 = 11172;
    if !(S_BASE..S_BASE + S_COUNT).contains(&c) {
        return None;
    }
    let s = c - S_BASE;
    Some(format!(
        "HANGUL SYLLABLE {}{}{}",
        JAMO_L[(s / N_COUNT) as usize],
        JAMO_V[((s % N_COUNT) / T_COUNT) as usize],
        JAMO_T[(s % T_COUNT) as usize]
    ))
}

// ISO 6429 control names. U+0007 reports ALERT; BELL names U+1F514.
static CONTROL_NAMES: phf::Map<u32, &'static str> = phf_map! {
    0x00u32 => "NULL",
    0x01u32 => "START OF HEADING",
    0x02u32 => "START OF TEXT",
    0x03u32 => "END OF TEXT",
    0x04u32 => "END OF TRANSMISSION",
    0x05u32 => "ENQUIRY",
    0x06u32 => "ACKNOWLEDGE",
    0x07u32 => "ALERT",
    0x08u32 => "BACKSPACE",
    0x09u32 => "HORIZONTAL TABULATION",
    0x0Au32 => "LINE FEED",
    0x0Bu32 => "VERTICAL TABULATION",
    0x0Cu32 => "FORM FEED",
    0x0Du32 => "CARRIAGE RETURN",
    0x0Eu32 => "SHIFT OUT",
    0x0Fu32 => "SHIFT IN",
    0x10u32 => "DATA LINK ESCAPE",
    0x11u32 => "DEVICE CONTROL 1",
    0x12u32 => "DEVICE CONTROL 2",
    0x13u32 => "DEVICE CONTROL 3",
    0x14u32 => "DEVICE CONTROL 4",
    0x15u32 => "NEGATIVE ACKNOWLEDGE",
    0x16u32 => "SYNCHRONOUS IDLE",
    0x17u32 => "END OF TRANSMISSION BLOCK",
    0x18u32 => "CANCEL",
    0x19u32 => "END OF MEDIUM",
    0x1Au32 => "SUBSTITUTE",
    0x1Bu32 => "ESCAPE",
    0x1Cu32 => "FIELD SEPARATOR",
    0x1Du32 => "GROUP SEPARATOR",
    0x1Eu32 => "RECORD SEPARATOR",
    0x1Fu32 => "UNIT SEPARATOR",
    0x7Fu32 => "DELETE",
    0x80u32 => "PADDING CHARACTER",
    0x81u32 => "HIGH OCTET PRESET",
    0x82u32 => "BREAK PERMITTED HERE",
    0x83u32 => "NO BREAK HERE",
    0x84u32 => "INDEX",
    0x85u32 => "NEXT LINE",
    0x86u32 => "START OF SELECTED AREA",
    0x87u32 => "END OF SELECTED AREA",
    0x88u32 => "CHARACTER TABULATION SET",
    0x89u32 => "CHARACTER TABULATION WITH JUSTIFICATION",
    0x8Au32 => "LINE TABULATION SET",
    0x8Bu32 => "PARTIAL LINE FORWARD",
    0x8Cu32 => "PARTIAL LINE BACKWARD",
    0x8Du32 => "REVERSE LINE FEED",
    0x8Eu32 => "SINGLE SHIFT 2",
    0x8Fu32 => "SINGLE SHIFT 3",
    0x90u32 => "DEVICE CONTROL STRING",
    0x91u32 => "PRIVATE USE 1",
    0x92u32 => "PRIVATE USE 2",
    0x93u32 => "SET TRANSMIT STATE",
    0x94u32 => "CANCEL CHARACTER",
    0x95u32 => "MESSAGE WAITING",
    0x96u32 => "START OF GUARDED AREA",
    0x97u32 => "END OF GUARDED AREA",
    0x98u32 => "START OF STRING",
    0x99u32 => "SINGLE GRAPHIC CHARACTER INTRODUCER",
    0x9Au32 => "SINGLE CHARACTER INTRODUCER",
    0x9Bu32 => "CONTROL SEQUENCE INTRODUCER",
    0x9Cu32 => "STRING TERMINATOR",
    0x9Du32 => "OPERATING SYSTEM COMMAND",
    0x9Eu32 => "PRIVACY MESSAGE",
    0x9Fu32 => "APPLICATION PROGRAM COMMAND",
};

/// The Unicode name of `c`, shaped by `flags`.
///
/// Resolution order: control names (with [`NameFlags::CONTROL`]), corrected
/// names (with [`NameFlags::UPDATE`]), the main name table, then the
/// algorithmic CJK and Hangul names. With [`NameFlags::LABEL`] any still
/// unnamed code point gets a `<control-XXXX>` / `<surrogate-XXXX>` /
/// `<private-use-XXXX>` / `<noncharacter-XXXX>` / `<reserved-XXXX>` label;
/// values past U+10FFFF always label as noncharacters. Without `LABEL`,
/// unnamed code points yield the empty string.
pub fn char_name(c: u32, flags: NameFlags) -> String {
    let mut name = String::new();
    if flags.contains(NameFlags::CONTROL) {
        if let Some(n) = CONTROL_NAMES.get(&c) {
            name.push_str(n);
        }
    }
    if name.is_empty() && flags.contains(NameFlags::UPDATE) {
        if let Some(n) = key_lookup(t::CORRECTED_NAMES, c) {
            name.push_str(n);
        }
    }
    if name.is_empty() {
        if let Some(n) = NAME_MAP.get(&c) {
            name.push_str(n);
        }
    }
    if name.is_empty() {
        if is_unified_ideograph(c) {
            name = format!("CJK UNIFIED IDEOGRAPH-{c:04X}");
        } else if is_compatibility_ideograph(c) {
            name = format!("CJK COMPATIBILITY IDEOGRAPH-{c:04X}");
        } else if let Some(n) = hangul_name(c) {
            name = n;
        }
    }
    if flags.contains(NameFlags::LOWER) {
        name.make_ascii_lowercase();
    }
    if name.is_empty() && flags.contains(NameFlags::LABEL) {
        name.push_str(if c <= LAST_UNICODE {
            match general_category(c) {
                Gc::Cc => "<control-",
                Gc::Co => "<private-use-",
                Gc::Cs => "<surrogate-",
                _ if is_noncharacter(c) => "<noncharacter-",
                _ => "<reserved-",
            }
        } else {
            "<noncharacter-"
        });
        if flags.contains(NameFlags::LOWER) {
            name.push_str(&format!("{c:04x}"));
        } else {
            name.push_str(&format!("{c:04X}"));
        }
        name.push('>');
    }
    if flags.contains(NameFlags::PREFIX) {
        if name.is_empty() {
            name = as_hex(c);
        } else {
            name = format!("{} {}", as_hex(c), name);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lookup() {
        assert_eq!(char_name(0x41, NameFlags::NONE), "LATIN CAPITAL LETTER A");
        assert_eq!(char_name(0xC0, NameFlags::NONE), "LATIN CAPITAL LETTER A WITH GRAVE");
        assert_eq!(char_name(0x20, NameFlags::NONE), "SPACE");
        assert_eq!(char_name(0x0A, NameFlags::NONE), "");
        assert_eq!(char_name(0x20FF, NameFlags::NONE), "");
    }

    #[test]
    fn control_names() {
        assert_eq!(char_name(0x0A, NameFlags::CONTROL), "LINE FEED");
        assert_eq!(char_name(0x07, NameFlags::CONTROL), "ALERT");
        assert_eq!(char_name(0x9F, NameFlags::CONTROL), "APPLICATION PROGRAM COMMAND");
        // flag has no effect on named characters
        assert_eq!(char_name(0x41, NameFlags::CONTROL), "LATIN CAPITAL LETTER A");
    }

    #[test]
    fn corrected_names() {
        assert_eq!(char_name(0x1A2, NameFlags::NONE), "LATIN CAPITAL LETTER OI");
        assert_eq!(char_name(0x1A2, NameFlags::UPDATE), "LATIN CAPITAL LETTER GHA");
        assert_eq!(char_name(0x2118, NameFlags::UPDATE), "WEIERSTRASS ELLIPTIC FUNCTION");
    }

    #[test]
    fn algorithmic_names() {
        assert_eq!(char_name(0x4E00, NameFlags::NONE), "CJK UNIFIED IDEOGRAPH-4E00");
        assert_eq!(char_name(0x20000, NameFlags::NONE), "CJK UNIFIED IDEOGRAPH-20000");
        assert_eq!(char_name(0xF900, NameFlags::NONE), "CJK COMPATIBILITY IDEOGRAPH-F900");
        assert_eq!(char_name(0xAC00, NameFlags::NONE), "HANGUL SYLLABLE GA");
        assert_eq!(char_name(0xD4DB, NameFlags::NONE), "HANGUL SYLLABLE PWILH");
        assert_eq!(char_name(0xD7A3, NameFlags::NONE), "HANGUL SYLLABLE HIH");
    }

    #[test]
    fn labels() {
        assert_eq!(char_name(0x20FF, NameFlags::LABEL), "<reserved-20FF>");
        assert_eq!(char_name(0x01, NameFlags::LABEL), "<control-0001>");
        assert_eq!(char_name(0xD800, NameFlags::LABEL), "<surrogate-D800>");
        assert_eq!(char_name(0xE000, NameFlags::LABEL), "<private-use-E000>");
        assert_eq!(char_name(0xFDD0, NameFlags::LABEL), "<noncharacter-FDD0>");
        assert_eq!(char_name(0x110000, NameFlags::LABEL), "<noncharacter-110000>");
    }

    #[test]
    fn lower_and_prefix() {
        assert_eq!(char_name(0x41, NameFlags::LOWER), "latin capital letter a");
        assert_eq!(char_name(0x41, NameFlags::PREFIX), "U+0041 LATIN CAPITAL LETTER A");
        assert_eq!(
            char_name(0x41, NameFlags::LOWER | NameFlags::PREFIX),
            "U+0041 latin capital letter a"
        );
        assert_eq!(char_name(0x20FF, NameFlags::LABEL | NameFlags::LOWER), "<reserved-20ff>");
        assert_eq!(char_name(0x0A, NameFlags::PREFIX), "U+000A");
    }

    #[test]
    fn flag_composition() {
        let flags = NameFlags::CONTROL | NameFlags::LABEL;
        assert!(flags.contains(NameFlags::CONTROL));
        assert!(flags.contains(NameFlags::LABEL));
        assert!(!flags.contains(NameFlags::LOWER));
        assert_eq!(char_name(0x0A, flags), "LINE FEED");
        assert_eq!(char_name(0x88, flags), "CHARACTER TABULATION SET");
    }
}
