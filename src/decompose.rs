//! Canonical and compatibility decomposition, pairwise composition, and the
//! Hangul syllable arithmetic of Unicode chapter 3.12.
//!
//! Decompositions here are single-level; recursive expansion to a fixed
//! point (NFD/NFKD proper) belongs to a normalization driver built on top.

use smallvec::SmallVec;

use crate::lookup::{extended_lookup, sparse_lookup};
use crate::property::{hangul_syllable_type, HangulSyllableType as Hst};
use crate::tables::decomposition as t;

/// A single-level decomposition: up to 18 code points, empty when the code
/// point does not decompose.
pub type Decomposition = SmallVec<[u32; 18]>;

pub const MAX_CANONICAL_DECOMPOSITION: usize = 2;
pub const MAX_COMPATIBILITY_DECOMPOSITION: usize = 18;

const S_BASE: u32 = 0xAC00;
const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = 588;

/// Canonical combining class (0..=255); starters report 0.
#[inline]
pub fn combining_class(c: u32) -> u8 {
    sparse_lookup(t::COMBINING_CLASS, c, 0)
}

/// Arithmetic decomposition of a Hangul syllable: LV syllables split into
/// (L, V) jamos, LVT syllables into (LV, T). Anything else does not
/// decompose.
pub fn hangul_decomposition(c: u32) -> Option<[u32; 2]> {
    match hangul_syllable_type(c) {
        Hst::LV => {
            let s = c - S_BASE;
            Some([L_BASE + s / N_COUNT, V_BASE + (s % N_COUNT) / T_COUNT])
        }
        Hst::LVT => {
            let s = c - S_BASE;
            Some([S_BASE + (s / T_COUNT) * T_COUNT, T_BASE + s % T_COUNT])
        }
        _ => None,
    }
}

/// Arithmetic composition of Hangul jamos: (L, V) pairs make an LV
/// syllable, (LV, T) pairs make an LVT syllable. Returns 0 for any other
/// pair.
pub fn hangul_composition(u1: u32, u2: u32) -> u32 {
    match (hangul_syllable_type(u1), hangul_syllable_type(u2)) {
        (Hst::L, Hst::V) => S_BASE + (u1 - L_BASE) * N_COUNT + (u2 - V_BASE) * T_COUNT,
        (Hst::LV, Hst::T) => {
            let s = u1 - S_BASE;
            let lv = S_BASE + (s / T_COUNT) * T_COUNT;
            lv + (u2 - T_BASE)
        }
        _ => 0,
    }
}

/// Single-level canonical decomposition (Hangul first, then the table; at
/// most two code points).
pub fn canonical_decomposition(c: u32) -> Decomposition {
    if let Some(pair) = hangul_decomposition(c) {
        return Decomposition::from_slice(&pair);
    }
    match extended_lookup(t::CANONICAL, c) {
        Some(values) => Decomposition::from_slice(values),
        None => Decomposition::new(),
    }
}

/// Single-level compatibility decomposition: canonical first, then the
/// short and long compatibility tables (at most 18 code points).
pub fn compatibility_decomposition(c: u32) -> Decomposition {
    let out = canonical_decomposition(c);
    if !out.is_empty() {
        return out;
    }
    if let Some(values) = extended_lookup(t::COMPAT_SHORT, c) {
        return Decomposition::from_slice(values);
    }
    match extended_lookup(t::COMPAT_LONG, c) {
        Some(values) => Decomposition::from_slice(values),
        None => Decomposition::new(),
    }
}

/// Canonical pairwise composition, Hangul first; 0 when the pair does not
/// compose.
pub fn canonical_composition(u1: u32, u2: u32) -> u32 {
    let c = hangul_composition(u1, u2);
    if c != 0 {
        return c;
    }
    t::COMPOSITION
        .binary_search_by(|&(a, b, _)| (a, b).cmp(&(u1, u2)))
        .map(|i| t::COMPOSITION[i].2)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_classes() {
        assert_eq!(combining_class(0x41), 0);
        assert_eq!(combining_class(0x300), 230);
        assert_eq!(combining_class(0x5B0), 10);
        assert_eq!(combining_class(0x110000), 0);
    }

    #[test]
    fn hangul_arithmetic() {
        // 가 = U+AC00 is the first LV syllable
        assert_eq!(hangul_decomposition(0xAC00), Some([0x1100, 0x1161]));
        // 각 = U+AC01 is LVT
        assert_eq!(hangul_decomposition(0xAC01), Some([0xAC00, 0x11A8]));
        assert_eq!(hangul_decomposition(0x41), None);
        assert_eq!(hangul_composition(0x1100, 0x1161), 0xAC00);
        assert_eq!(hangul_composition(0xAC00, 0x11A8), 0xAC01);
        assert_eq!(hangul_composition(0x41, 0x42), 0);
    }

    #[test]
    fn canonical_decompositions() {
        assert_eq!(canonical_decomposition(0xC0).as_slice(), &[0x41, 0x300]);
        assert_eq!(canonical_decomposition(0x212B).as_slice(), &[0xC5]); // singleton
        assert!(canonical_decomposition(0x41).is_empty());
        // Hangul routes through the arithmetic
        assert_eq!(canonical_decomposition(0xD4DB).as_slice(), &[0xD4CC, 0x11B6]);
        assert_eq!(canonical_decomposition(0xD4CC).as_slice(), &[0x1111, 0x1171]);
    }

    #[test]
    fn compatibility_decompositions() {
        // canonical mappings pass through
        assert_eq!(compatibility_decomposition(0xC0).as_slice(), &[0x41, 0x300]);
        // short compatibility: superscript two
        assert_eq!(compatibility_decomposition(0xB2).as_slice(), &[0x32]);
        // the longest mapping in the standard
        let sallallahou = compatibility_decomposition(0xFDFA);
        assert_eq!(sallallahou.len(), 18);
        assert_eq!(&sallallahou[..4], &[0x635, 0x644, 0x649, 0x20]);
        assert!(compatibility_decomposition(0x41).is_empty());
    }

    #[test]
    fn pairwise_composition() {
        assert_eq!(canonical_composition(0x41, 0x300), 0xC0);
        assert_eq!(canonical_composition(0x1100, 0x1161), 0xAC00);
        assert_eq!(canonical_composition(0x41, 0x42), 0);
        // compatibility mappings never compose
        assert_eq!(canonical_composition(0x66, 0x66), 0);
    }
}
