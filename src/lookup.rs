//! Binary-search primitives over the static table shapes.
//!
//! Every UCD table in this crate is one of five shapes: a sparse range table
//! `(start, value)`, an exact-key table `(key, value)`, a range set
//! `(lo, hi)`, a sorted code-point set, or a fixed-stride extended table of
//! packed records `[key, count, v0, ...]`. All lookups are plain binary
//! searches; the tables are generated sorted.

/// Value of the last entry whose `start <= c`, or `default` when `c`
/// precedes the first start.
#[inline]
pub(crate) fn sparse_lookup<T: Copy>(table: &[(u32, T)], c: u32, default: T) -> T {
    match table.binary_search_by_key(&c, |&(start, _)| start) {
        Ok(i) => table[i].1,
        Err(0) => default,
        Err(i) => table[i - 1].1,
    }
}

/// Exact-key lookup.
#[inline]
pub(crate) fn key_lookup<T: Copy>(table: &[(u32, T)], c: u32) -> Option<T> {
    table
        .binary_search_by_key(&c, |&(key, _)| key)
        .ok()
        .map(|i| table[i].1)
}

/// Membership in a strictly increasing code-point list.
#[inline]
pub(crate) fn set_contains(set: &[u32], c: u32) -> bool {
    set.binary_search(&c).is_ok()
}

/// Membership in a sorted, non-overlapping list of closed `[lo, hi]` ranges.
#[inline]
pub(crate) fn range_set_contains(set: &[(u32, u32)], c: u32) -> bool {
    match set.binary_search_by_key(&c, |&(lo, _)| lo) {
        Ok(_) => true,
        Err(0) => false,
        Err(i) => c <= set[i - 1].1,
    }
}

/// Extended-table lookup over packed records `[key, count, v0, ...]`.
///
/// Returns the `count` output code points of the matching record. Callers
/// that need a single-value fallback (the case maps) try their simple map
/// at the call site on a miss.
#[inline]
pub(crate) fn extended_lookup<const K: usize>(table: &[[u32; K]], c: u32) -> Option<&[u32]> {
    table
        .binary_search_by_key(&c, |record| record[0])
        .ok()
        .map(|i| {
            let record = &table[i];
            &record[2..2 + record[1] as usize]
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    static RANGES: &[(u32, u8)] = &[(0, 1), (10, 2), (20, 3)];
    static SET: &[(u32, u32)] = &[(5, 8), (12, 12)];
    static EXT: &[[u32; 4]] = &[[7, 2, 100, 200], [9, 1, 300, 0]];

    #[test]
    fn sparse_picks_last_start_at_or_below() {
        assert_eq!(sparse_lookup(RANGES, 0, 0), 1);
        assert_eq!(sparse_lookup(RANGES, 9, 0), 1);
        assert_eq!(sparse_lookup(RANGES, 10, 0), 2);
        assert_eq!(sparse_lookup(RANGES, 1000, 0), 3);
    }

    #[test]
    fn sparse_default_before_first_entry() {
        assert_eq!(sparse_lookup(&RANGES[1..], 3, 42), 42);
    }

    #[test]
    fn range_set_closed_bounds() {
        assert!(!range_set_contains(SET, 4));
        assert!(range_set_contains(SET, 5));
        assert!(range_set_contains(SET, 8));
        assert!(!range_set_contains(SET, 9));
        assert!(range_set_contains(SET, 12));
        assert!(!range_set_contains(SET, 13));
    }

    #[test]
    fn extended_returns_count_values() {
        assert_eq!(extended_lookup(EXT, 7), Some(&[100, 200][..]));
        assert_eq!(extended_lookup(EXT, 9), Some(&[300][..]));
        assert_eq!(extended_lookup(EXT, 8), None);
    }
}
