//! Blocks, scripts, and script extensions.

use std::sync::LazyLock;

use crate::codepoint::LAST_UNICODE;
use crate::lookup::sparse_lookup;
use crate::tables::script as t;

/// Packs a 4-letter ISO 15924 tag into a `u32` of four lowercased bytes.
pub(crate) const fn sc(tag: &[u8; 4]) -> u32 {
    let mut code = 0u32;
    let mut i = 0;
    while i < 4 {
        let b = tag[i];
        let b = if b.is_ascii_uppercase() { b + 32 } else { b };
        code = (code << 8) | b as u32;
        i += 1;
    }
    code
}

fn pack_script(abbr: &str) -> u32 {
    let mut bytes = abbr.bytes();
    let mut code = 0u32;
    for _ in 0..4 {
        let b = bytes.next().unwrap_or(0);
        code = (code << 8) | b.to_ascii_lowercase() as u32;
    }
    code
}

fn decode_script(code: u32) -> String {
    let mut out = String::with_capacity(4);
    for shift in [24u32, 16, 8, 0] {
        let b = (code >> shift) as u8;
        out.push(if shift == 24 {
            b.to_ascii_uppercase() as char
        } else {
            b as char
        });
    }
    out
}

/// The primary script of a code point as a 4-letter ISO 15924 tag with the
/// first letter uppercased (`"Latn"`, `"Zyyy"` for common, `"Zzzz"` for
/// unknown).
pub fn script(c: u32) -> String {
    decode_script(sparse_lookup(t::SCRIPTS, c, sc(b"zzzz")))
}

/// The script-extensions list: every script the code point is used with,
/// alphabetically; a single-element list of the primary script when no
/// extensions are defined.
pub fn script_list(c: u32) -> Vec<String> {
    match sparse_lookup(t::SCRIPT_EXTENSIONS, c, None) {
        Some(list) => list.split_whitespace().map(str::to_owned).collect(),
        None => vec![script(c)],
    }
}

/// The English name of an ISO 15924 script tag, matched case-insensitively.
pub fn script_name(abbr: &str) -> Option<&'static str> {
    t::ISO_SCRIPT_NAMES.get(&pack_script(abbr)).copied()
}

/// The block a code point belongs to; empty for the reserved gaps between
/// blocks and beyond U+10FFFF.
#[inline]
pub fn block_name(c: u32) -> &'static str {
    if c > LAST_UNICODE {
        return "";
    }
    sparse_lookup(t::BLOCKS, c, "")
}

/// One named block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockInfo {
    pub name: &'static str,
    pub first: u32,
    pub last: u32,
}

/// All named blocks, ascending. Each block's `last` is the code point just
/// before the next table entry; the final block runs to U+10FFFF.
pub fn block_list() -> &'static [BlockInfo] {
    static LIST: LazyLock<Vec<BlockInfo>> = LazyLock::new(|| {
        let table = t::BLOCKS;
        let mut out = Vec::with_capacity(table.len());
        for (i, &(first, name)) in table.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let last = table.get(i + 1).map_or(LAST_UNICODE, |&(next, _)| next - 1);
            out.push(BlockInfo { name, first, last });
        }
        out
    });
    &LIST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_lookup() {
        assert_eq!(block_name(0x41), "Basic Latin");
        assert_eq!(block_name(0x3B1), "Greek and Coptic");
        assert_eq!(block_name(0x1F600), "Emoticons");
        assert_eq!(block_name(0x110000), "");
    }

    #[test]
    fn block_list_bounds() {
        let blocks = block_list();
        assert_eq!(blocks[0].name, "Basic Latin");
        assert_eq!(blocks[0].first, 0);
        assert_eq!(blocks[0].last, 0x7F);
        let last = blocks.last().unwrap();
        assert_eq!(last.name, "Supplementary Private Use Area-B");
        assert_eq!(last.last, 0x10FFFF);
        // blocks are sorted and non-overlapping
        for pair in blocks.windows(2) {
            assert!(pair[0].last < pair[1].first);
        }
    }

    #[test]
    fn primary_scripts() {
        assert_eq!(script(0x41), "Latn");
        assert_eq!(script(0x3B1), "Grek");
        assert_eq!(script(0x440), "Cyrl");
        assert_eq!(script(0x627), "Arab");
        assert_eq!(script(0x4E00), "Hani");
        assert_eq!(script(0x20), "Zyyy");
        assert_eq!(script(0x300), "Zinh");
        assert_eq!(script(0xE000), "Zzzz");
        assert_eq!(script(0x110000), "Zzzz");
    }

    #[test]
    fn script_extension_lists() {
        let tatweel = script_list(0x640);
        assert!(tatweel.len() > 1);
        for abbr in ["Arab", "Mand", "Mani", "Phlp", "Syrc"] {
            assert!(tatweel.contains(&abbr.to_string()), "{abbr}");
        }
        let mut sorted = tatweel.clone();
        sorted.sort();
        assert_eq!(tatweel, sorted);
        // no extensions: primary script only
        assert_eq!(script_list(0x41), vec!["Latn".to_string()]);
    }

    #[test]
    fn iso_names() {
        assert_eq!(script_name("Latn"), Some("Latin"));
        assert_eq!(script_name("latn"), Some("Latin"));
        assert_eq!(script_name("LATN"), Some("Latin"));
        assert_eq!(script_name("Zzzz"), Some("Unknown"));
        assert_eq!(script_name("Qqqq"), None);
    }
}
